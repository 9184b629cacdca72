use log::debug;

use crate::{
    core::record::{Record, Value},
    error::ConversionError,
};

/// Parses delimited text lines into [`Record`]s.
///
/// The first line holds the headers, every following non-blank line is a data
/// row. Fields are split on a plain delimiter string: quoting and escaping are
/// not supported. Each field is trimmed and then coerced to an integer, a
/// float or kept as a string (see [`Value::coerce`]).
///
/// # Examples
///
/// ```
/// use csv_to_json_rs::item::csv::csv_reader::CsvLineParserBuilder;
/// use csv_to_json_rs::core::record::Value;
///
/// let parser = CsvLineParserBuilder::new().delimiter(";").build();
///
/// let records = parser
///     .parse(&["name;age;city", "John;25;New York", "Jane;30;London"])
///     .unwrap();
///
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[0].get("age"), Some(&Value::Integer(25)));
/// assert_eq!(records[1].get("city"), Some(&Value::from("London")));
/// ```
#[derive(Debug, Clone)]
pub struct CsvLineParser {
    delimiter: String,
}

impl CsvLineParser {
    /// Parses `lines` into records.
    ///
    /// # Errors
    ///
    /// - [`ConversionError::EmptyInput`] if `lines` is empty
    /// - [`ConversionError::InvalidDelimiter`] if the delimiter is empty
    /// - [`ConversionError::InvalidHeader`] if a header is blank
    /// - [`ConversionError::ColumnMismatch`] if a data line does not have as
    ///   many fields as there are headers
    pub fn parse<S: AsRef<str>>(&self, lines: &[S]) -> Result<Vec<Record>, ConversionError> {
        let (header_line, data_lines) = lines.split_first().ok_or(ConversionError::EmptyInput)?;

        if self.delimiter.is_empty() {
            return Err(ConversionError::InvalidDelimiter);
        }

        let headers = self.headers(header_line.as_ref())?;

        let mut records = Vec::with_capacity(data_lines.len());
        for (index, line) in data_lines.iter().enumerate() {
            // header is line 1, so the first data line is line 2
            let line_number = index + 2;
            let line = line.as_ref();

            if trim_field(line).is_empty() {
                debug!("Skipping blank line {}", line_number);
                continue;
            }

            records.push(self.record(&headers, line, line_number)?);
        }

        Ok(records)
    }

    fn headers<'a>(&self, line: &'a str) -> Result<Vec<&'a str>, ConversionError> {
        let headers: Vec<&str> = line.split(self.delimiter.as_str()).map(trim_field).collect();

        if headers.is_empty() {
            return Err(ConversionError::InvalidHeader { column: 1 });
        }

        if let Some(position) = headers.iter().position(|header| header.is_empty()) {
            return Err(ConversionError::InvalidHeader {
                column: position + 1,
            });
        }

        Ok(headers)
    }

    fn record(
        &self,
        headers: &[&str],
        line: &str,
        line_number: usize,
    ) -> Result<Record, ConversionError> {
        let values: Vec<&str> = line.split(self.delimiter.as_str()).collect();

        if values.len() != headers.len() {
            return Err(ConversionError::ColumnMismatch {
                line: line_number,
                expected: headers.len(),
                actual: values.len(),
            });
        }

        let mut record = Record::with_capacity(headers.len());
        for (header, value) in headers.iter().zip(values) {
            record.insert(*header, Value::coerce(trim_field(value)));
        }

        Ok(record)
    }
}

/// A builder for configuring CSV line parsing.
///
/// # Default Configuration
///
/// - Delimiter: comma (,)
#[derive(Debug, Clone)]
pub struct CsvLineParserBuilder {
    delimiter: String,
}

impl Default for CsvLineParserBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvLineParserBuilder {
    pub fn new() -> Self {
        Self {
            delimiter: ",".to_string(),
        }
    }

    /// Sets the field delimiter. Any non-empty string is accepted.
    ///
    /// ```
    /// use csv_to_json_rs::item::csv::csv_reader::CsvLineParserBuilder;
    ///
    /// let parser = CsvLineParserBuilder::new().delimiter("\t").build();
    /// let records = parser.parse(&["a\tb", "1\t2"]).unwrap();
    /// assert_eq!(records[0].len(), 2);
    /// ```
    pub fn delimiter<D: Into<String>>(mut self, delimiter: D) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    pub fn build(self) -> CsvLineParser {
        CsvLineParser {
            delimiter: self.delimiter,
        }
    }
}

/// Parses `lines` with `delimiter`, see [`CsvLineParser::parse`].
///
/// ```
/// use csv_to_json_rs::item::csv::csv_reader::parse;
///
/// let records = parse(&["id;value", "1;100", "", "2;200"], ";").unwrap();
/// assert_eq!(records.len(), 2);
/// ```
pub fn parse<S: AsRef<str>>(lines: &[S], delimiter: &str) -> Result<Vec<Record>, ConversionError> {
    CsvLineParserBuilder::new()
        .delimiter(delimiter)
        .build()
        .parse(lines)
}

/// Trims surrounding whitespace and byte order marks.
fn trim_field(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Splits `text` on `\n` and keeps the lines that are not blank.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n')
        .filter(|line| !trim_field(line).is_empty())
        .collect()
}
