use std::io::{self, ErrorKind};

use serde::Serialize;
use serde_json::{ser::PrettyFormatter, Serializer};

use crate::error::ConversionError;

/// Serializes records into a JSON document.
///
/// With the pretty formatter (the default), the output matches a standard
/// JSON pretty printer with a two space indent: one key per line, no trailing
/// newline. An empty collection is written as `[]`.
///
/// # Examples
///
/// ```
/// use csv_to_json_rs::item::json::json_writer::JsonRecordWriterBuilder;
/// use csv_to_json_rs::item::csv::csv_reader::parse;
///
/// let records = parse(&["int;float", "42;3.14"], ";").unwrap();
/// let writer = JsonRecordWriterBuilder::new().build();
///
/// assert_eq!(
///     writer.write_to_string(&records).unwrap(),
///     "[\n  {\n    \"int\": 42,\n    \"float\": 3.14\n  }\n]"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct JsonRecordWriter {
    indent: String,
    use_pretty_formatter: bool,
}

impl JsonRecordWriter {
    pub fn write_to_string<T>(&self, items: &T) -> Result<String, ConversionError>
    where
        T: Serialize + ?Sized,
    {
        let mut buffer = Vec::new();

        if self.use_pretty_formatter {
            let formatter = PrettyFormatter::with_indent(self.indent.as_bytes());
            let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
            items.serialize(&mut serializer)?;
        } else {
            serde_json::to_writer(&mut buffer, items)?;
        }

        String::from_utf8(buffer)
            .map_err(|error| ConversionError::Io(io::Error::new(ErrorKind::InvalidData, error)))
    }
}

#[derive(Debug, Clone)]
pub struct JsonRecordWriterBuilder {
    indent: String,
    pretty_formatter: bool,
}

impl Default for JsonRecordWriterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonRecordWriterBuilder {
    pub fn new() -> JsonRecordWriterBuilder {
        JsonRecordWriterBuilder {
            indent: "  ".to_string(),
            pretty_formatter: true,
        }
    }

    /// Indentation used by the pretty formatter. Ignored for compact output.
    pub fn indent<I: Into<String>>(mut self, indent: I) -> JsonRecordWriterBuilder {
        self.indent = indent.into();
        self
    }

    pub fn pretty_formatter(mut self, yes: bool) -> JsonRecordWriterBuilder {
        self.pretty_formatter = yes;
        self
    }

    pub fn build(self) -> JsonRecordWriter {
        JsonRecordWriter {
            indent: self.indent,
            use_pretty_formatter: self.pretty_formatter,
        }
    }
}
