/// Typed field values and ordered records.
pub mod record;

/// File access collaborators.
pub mod file;

#[cfg(all(feature = "csv", feature = "json"))]
/// CSV file to JSON file conversion.
pub mod converter;
