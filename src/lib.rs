#![cfg_attr(docsrs, feature(doc_cfg))]

/*!
 # CSV to JSON for Rust

 A small toolkit that turns delimited text files into JSON documents, plus a
 handful of generic helpers.

 ## Core Concepts

- **Record:** One parsed row, an ordered mapping from column name to a typed `Value`
  (integer, float or string).
- **CsvLineParser:** Splits lines on a delimiter, validates headers and column counts,
  and coerces every field to its natural type.
- **JsonRecordWriter:** Serializes records as a JSON array, pretty printed or compact.
- **CsvToJsonConverter:** Reads a CSV file, parses it, and writes the JSON file through
  pluggable `FileReader` / `FileWriter` collaborators.

 ## Features

| **Feature**   | **Description**                                               |
|---------------|---------------------------------------------------------------|
| csv           | Enables the CSV line parser                                   |
| json          | Enables the JSON record writer                                |
| helpers       | Enables the generic record, shape and formatting helpers      |
| full          | Enables all available features                                |

The file converter is available when both `csv` and `json` are enabled.

 ## Getting Started
 Make sure you activated the suitable features crate on Cargo.toml:

```toml
[dependencies]
csv-to-json-rs = { version = "<version>", features = ["<full|csv|json|helpers>"] }
```

Then, on your main.rs:

```rust
# use csv_to_json_rs::{
#     core::record::Value,
#     item::csv::csv_reader::parse,
#     item::json::json_writer::JsonRecordWriterBuilder,
#     ConversionError,
# };
fn main() -> Result<(), ConversionError> {
    let lines = ["name;age;city", "John;25;New York", "Jane;30;London"];

    let records = parse(&lines, ";")?;
    assert_eq!(records[0].get("age"), Some(&Value::Integer(25)));

    let json = JsonRecordWriterBuilder::new().build().write_to_string(&records)?;
    assert!(json.starts_with("[\n  {\n    \"name\": \"John\""));

    Ok(())
}
```

Converting a file on disk:

```no_run
# use csv_to_json_rs::core::converter::convert_file;
# #[tokio::main]
# async fn main() -> Result<(), csv_to_json_rs::ConversionError> {
let count = convert_file("people.csv", "people.json", ";").await?;
println!("{} records written", count);
# Ok(())
# }
```

 ## License
 Licensed under either of

 -   Apache License, Version 2.0
     ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
 -   MIT license
     ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)

 at your option.
 */

/// Core module: records, file collaborators and the converter
pub mod core;

/// Error types for conversions
pub mod error;

#[doc(inline)]
pub use error::*;

/// Set of items readers / writers (csv parser and json writer)
pub mod item;

#[cfg(feature = "helpers")]
/// Generic helpers unrelated to the conversion
pub mod helpers;
