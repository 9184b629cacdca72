use std::path::Path;

use log::{debug, info};

use crate::{
    core::file::{FileReader, FileWriter, TokioFileSystem},
    error::ConversionError,
    item::{
        csv::csv_reader::{split_lines, CsvLineParser, CsvLineParserBuilder},
        json::json_writer::{JsonRecordWriter, JsonRecordWriterBuilder},
    },
};

/// Converts a delimited text file into a pretty-printed JSON array.
///
/// The converter reads the input through a [`FileReader`], drops blank lines,
/// parses the rest with a [`CsvLineParser`], serializes the records with a
/// [`JsonRecordWriter`] and hands the JSON text to a [`FileWriter`].
///
/// Any failure is reported as [`ConversionError::Processing`] and the output
/// file is only written once everything before it has succeeded.
///
/// # Examples
///
/// ```no_run
/// use csv_to_json_rs::core::converter::CsvToJsonConverterBuilder;
///
/// # async fn run() -> Result<(), csv_to_json_rs::ConversionError> {
/// let converter = CsvToJsonConverterBuilder::new().delimiter(";").build();
///
/// let count = converter.convert_file("input.csv", "output.json").await?;
/// println!("{} records written", count);
/// # Ok(())
/// # }
/// ```
pub struct CsvToJsonConverter<'a> {
    parser: CsvLineParser,
    writer: JsonRecordWriter,
    file_reader: &'a dyn FileReader,
    file_writer: &'a dyn FileWriter,
}

impl CsvToJsonConverter<'_> {
    /// Converts `input` into `output` and returns the number of records written.
    pub async fn convert_file<P, Q>(&self, input: P, output: Q) -> Result<usize, ConversionError>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        let input = input.as_ref();
        let output = output.as_ref();

        info!(
            "Start of conversion: {} -> {}",
            input.display(),
            output.display()
        );

        let count = self
            .try_convert_file(input, output)
            .await
            .map_err(|error| ConversionError::Processing(error.to_string()))?;

        info!("End of conversion: {} records written to {}", count, output.display());

        Ok(count)
    }

    async fn try_convert_file(&self, input: &Path, output: &Path) -> Result<usize, ConversionError> {
        let content = self.file_reader.read_to_string(input).await?;

        let lines = split_lines(&content);
        debug!("{} non-blank lines read from {}", lines.len(), input.display());

        if lines.is_empty() {
            return Err(ConversionError::EmptyFile);
        }

        let records = self.parser.parse(&lines)?;
        let json = self.writer.write_to_string(&records)?;

        self.file_writer.write(output, &json).await?;

        Ok(records.len())
    }

    /// Parses `lines` and returns the JSON document, without touching any file.
    pub fn convert_lines<S: AsRef<str>>(&self, lines: &[S]) -> Result<String, ConversionError> {
        let records = self.parser.parse(lines)?;
        self.writer.write_to_string(&records)
    }
}

/// A builder for [`CsvToJsonConverter`].
///
/// # Default Configuration
///
/// - Delimiter: comma (,)
/// - Indent: two spaces
/// - File reader and writer: [`TokioFileSystem`]
pub struct CsvToJsonConverterBuilder<'a> {
    delimiter: String,
    indent: String,
    file_reader: Option<&'a dyn FileReader>,
    file_writer: Option<&'a dyn FileWriter>,
}

impl Default for CsvToJsonConverterBuilder<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CsvToJsonConverterBuilder<'a> {
    pub fn new() -> Self {
        Self {
            delimiter: ",".to_string(),
            indent: "  ".to_string(),
            file_reader: None,
            file_writer: None,
        }
    }

    pub fn delimiter<D: Into<String>>(mut self, delimiter: D) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    pub fn indent<I: Into<String>>(mut self, indent: I) -> Self {
        self.indent = indent.into();
        self
    }

    pub fn file_reader(mut self, file_reader: &'a dyn FileReader) -> Self {
        self.file_reader = Some(file_reader);
        self
    }

    pub fn file_writer(mut self, file_writer: &'a dyn FileWriter) -> Self {
        self.file_writer = Some(file_writer);
        self
    }

    pub fn build(self) -> CsvToJsonConverter<'a> {
        CsvToJsonConverter {
            parser: CsvLineParserBuilder::new().delimiter(self.delimiter).build(),
            writer: JsonRecordWriterBuilder::new().indent(self.indent).build(),
            file_reader: self.file_reader.unwrap_or(&TokioFileSystem),
            file_writer: self.file_writer.unwrap_or(&TokioFileSystem),
        }
    }
}

/// Converts the CSV file `input` into the JSON file `output` using the local
/// file system.
pub async fn convert_file<P, Q>(input: P, output: Q, delimiter: &str) -> Result<usize, ConversionError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    CsvToJsonConverterBuilder::new()
        .delimiter(delimiter)
        .build()
        .convert_file(input, output)
        .await
}
