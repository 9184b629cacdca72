/// CSV support for reading delimited text lines.
///
/// This module turns lines of delimited text into [`Record`](crate::core::record::Record)s.
/// The first line holds the column names, every other non-blank line is a row.
///
/// # Format
///
/// - Lines are separated by `\n`
/// - Fields are separated by a caller supplied delimiter string
/// - No quoting and no escaping: a delimiter inside a field always splits it
/// - Fields and headers are trimmed
/// - `-?[0-9]+` fields become integers, `-?[0-9]+.[0-9]+` fields become floats,
///   everything else stays a string
///
/// # Examples
///
/// ```
/// use csv_to_json_rs::item::csv::csv_reader::{parse, split_lines};
/// use csv_to_json_rs::core::record::Value;
///
/// let text = "city;country;pop\nBoston;United States;4628910\n\nConcord;United States;42695\n";
///
/// let records = parse(&split_lines(text), ";").unwrap();
///
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[0].get("city"), Some(&Value::from("Boston")));
/// assert_eq!(records[1].get("pop"), Some(&Value::Integer(42695)));
/// ```
pub mod csv_reader;
