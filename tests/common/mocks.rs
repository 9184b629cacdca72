//! Mock versions of the file collaborators.
use std::{io, path::Path};

use async_trait::async_trait;
use csv_to_json_rs::core::file::{FileReader, FileWriter};
use mockall::mock;

mock! {
    pub Reader {}
    #[async_trait]
    impl FileReader for Reader {
        async fn read_to_string(&self, path: &Path) -> io::Result<String>;
    }
}

mock! {
    pub Writer {}
    #[async_trait]
    impl FileWriter for Writer {
        async fn write(&self, path: &Path, contents: &str) -> io::Result<()>;
    }
}
