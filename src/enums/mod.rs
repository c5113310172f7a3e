pub mod common;

pub use common::{ApiResponse, ViewMode};
