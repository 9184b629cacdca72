use std::env::temp_dir;

use csv_to_json_rs::core::converter::CsvToJsonConverterBuilder;
use log::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let csv = "name;age;city
John;25;New York

Jane;30;London
Alice;41.5;Paris";

    let input = temp_dir().join("people.csv");
    let output = temp_dir().join("people.json");
    tokio::fs::write(&input, csv).await?;

    let converter = CsvToJsonConverterBuilder::new().delimiter(";").build();
    let count = converter.convert_file(&input, &output).await?;

    info!("{} records converted", count);
    println!("{}", tokio::fs::read_to_string(&output).await?);

    Ok(())
}
