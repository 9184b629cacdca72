/// JSON support for writing parsed records.
///
/// [`JsonRecordWriter`](json_writer::JsonRecordWriter) serializes any `Serialize` value,
/// typically a slice of [`Record`](crate::core::record::Record)s, either pretty printed
/// with a configurable indent or compact.
///
/// # Examples
///
/// ```
/// use csv_to_json_rs::item::json::json_writer::JsonRecordWriterBuilder;
/// use csv_to_json_rs::core::record::{Record, Value};
///
/// let records: Vec<Record> = vec![
///     vec![("col1", Value::from("a")), ("col2", Value::from("b"))].into_iter().collect(),
/// ];
///
/// let writer = JsonRecordWriterBuilder::new().pretty_formatter(false).build();
///
/// assert_eq!(writer.write_to_string(&records).unwrap(), r#"[{"col1":"a","col2":"b"}]"#);
/// ```
pub mod json_writer;
