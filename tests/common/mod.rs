pub mod mocks;

pub use mocks::{MockReader, MockWriter};
