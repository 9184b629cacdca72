#[cfg(feature = "csv")]
/// This module provides the CSV line parser.
pub mod csv;

#[cfg(feature = "json")]
/// This module provides the JSON record writer.
pub mod json;
