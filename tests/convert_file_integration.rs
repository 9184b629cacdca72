mod common;

use std::io::{self, ErrorKind};

use common::{MockReader, MockWriter};
use csv_to_json_rs::core::converter::CsvToJsonConverterBuilder;

const PEOPLE_JSON: &str = r#"[
  {
    "name": "John",
    "age": 25,
    "city": "New York"
  },
  {
    "name": "Jane",
    "age": 30,
    "city": "London"
  }
]"#;

fn reader_returning(path: &'static str, content: &'static str) -> MockReader {
    let mut reader = MockReader::new();
    reader
        .expect_read_to_string()
        .withf(move |input| input.to_str() == Some(path))
        .times(1)
        .returning(move |_| Ok(content.to_string()));
    reader
}

fn writer_expecting(path: &'static str, expected: &'static str) -> MockWriter {
    let mut writer = MockWriter::new();
    writer
        .expect_write()
        .withf(move |output, contents| {
            output.to_str() == Some(path) && contents.to_string() == expected
        })
        .times(1)
        .returning(|_, _| Ok(()));
    writer
}

#[tokio::test]
async fn convert_semicolon_separated_file() {
    let reader = reader_returning("input.csv", "name;age;city\nJohn;25;New York\nJane;30;London");
    let writer = writer_expecting("output.json", PEOPLE_JSON);

    let converter = CsvToJsonConverterBuilder::new()
        .delimiter(";")
        .file_reader(&reader)
        .file_writer(&writer)
        .build();

    let count = converter
        .convert_file("input.csv", "output.json")
        .await
        .unwrap();

    assert_eq!(count, 2);
}

#[tokio::test]
async fn convert_comma_separated_file() {
    let reader = reader_returning("input.csv", "name,age,city\nJohn,25,New York\nJane,30,London");
    let writer = writer_expecting("output.json", PEOPLE_JSON);

    let converter = CsvToJsonConverterBuilder::new()
        .delimiter(",")
        .file_reader(&reader)
        .file_writer(&writer)
        .build();

    converter
        .convert_file("input.csv", "output.json")
        .await
        .unwrap();
}

#[tokio::test]
async fn blank_lines_in_file_are_ignored() {
    let reader = reader_returning("input.csv", "id;value\n1;100\n\n2;200\n   \n3;300");
    let writer = writer_expecting(
        "output.json",
        r#"[
  {
    "id": 1,
    "value": 100
  },
  {
    "id": 2,
    "value": 200
  },
  {
    "id": 3,
    "value": 300
  }
]"#,
    );

    let converter = CsvToJsonConverterBuilder::new()
        .delimiter(";")
        .file_reader(&reader)
        .file_writer(&writer)
        .build();

    let count = converter
        .convert_file("input.csv", "output.json")
        .await
        .unwrap();

    assert_eq!(count, 3);
}

#[tokio::test]
async fn output_path_is_passed_to_the_writer() {
    let reader = reader_returning("data.csv", "col1;col2\na;b");
    let writer = writer_expecting(
        "result.json",
        "[\n  {\n    \"col1\": \"a\",\n    \"col2\": \"b\"\n  }\n]",
    );

    let converter = CsvToJsonConverterBuilder::new()
        .delimiter(";")
        .file_reader(&reader)
        .file_writer(&writer)
        .build();

    converter
        .convert_file("data.csv", "result.json")
        .await
        .unwrap();
}

#[tokio::test]
async fn numeric_values_are_written_as_numbers() {
    let reader = reader_returning("numbers.csv", "int;float\n42;3.14");
    let writer = writer_expecting(
        "numbers.json",
        "[\n  {\n    \"int\": 42,\n    \"float\": 3.14\n  }\n]",
    );

    let converter = CsvToJsonConverterBuilder::new()
        .delimiter(";")
        .file_reader(&reader)
        .file_writer(&writer)
        .build();

    converter
        .convert_file("numbers.csv", "numbers.json")
        .await
        .unwrap();
}

#[tokio::test]
async fn windows_line_endings_are_trimmed_away() {
    let reader = reader_returning("input.csv", "col1;col2\r\na;b\r\n");
    let writer = writer_expecting(
        "output.json",
        "[\n  {\n    \"col1\": \"a\",\n    \"col2\": \"b\"\n  }\n]",
    );

    let converter = CsvToJsonConverterBuilder::new()
        .delimiter(";")
        .file_reader(&reader)
        .file_writer(&writer)
        .build();

    converter
        .convert_file("input.csv", "output.json")
        .await
        .unwrap();
}

#[tokio::test]
async fn header_only_file_writes_an_empty_array() {
    let reader = reader_returning("input.csv", "name;age\n");
    let writer = writer_expecting("output.json", "[]");

    let converter = CsvToJsonConverterBuilder::new()
        .delimiter(";")
        .file_reader(&reader)
        .file_writer(&writer)
        .build();

    let count = converter
        .convert_file("input.csv", "output.json")
        .await
        .unwrap();

    assert_eq!(count, 0);
}

#[tokio::test]
async fn write_failure_is_wrapped() {
    let reader = reader_returning("input.csv", "col1;col2\na;b");
    let mut writer = MockWriter::new();
    writer
        .expect_write()
        .times(1)
        .returning(|_, _| Err(io::Error::new(ErrorKind::PermissionDenied, "Permission denied")));

    let converter = CsvToJsonConverterBuilder::new()
        .delimiter(";")
        .file_reader(&reader)
        .file_writer(&writer)
        .build();

    let error = converter
        .convert_file("input.csv", "output.json")
        .await
        .unwrap_err();

    assert_eq!(
        error.to_string(),
        "Failed to process CSV file: Permission denied"
    );
}
