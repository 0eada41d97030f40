pub mod batch;

pub use batch::{BatchReport, FailedDocument};
