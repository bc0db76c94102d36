pub mod engine;
pub mod parser;
pub mod pipeline;
pub mod transform;

pub use crate::domain::model::{Record, TransformOptions};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
