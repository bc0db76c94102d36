use crate::domain::model::{Record, TransformOptions};
use crate::utils::error::Result;
use std::io::{BufRead, Write};

/// File access used by the pipeline. Each handle lives for one read or one
/// write pass and is closed when dropped.
pub trait Storage {
    fn open_read(&self, path: &str) -> Result<Box<dyn BufRead + '_>>;
    /// Creates the file, truncating any existing content.
    fn open_write(&self, path: &str) -> Result<Box<dyn Write + '_>>;
}

pub trait ConfigProvider {
    fn input_files(&self) -> &[String];
    fn suffix(&self) -> &str;
    fn output_file(&self) -> &str;
    fn terminate_structured_name(&self) -> bool;

    fn transform_options(&self) -> TransformOptions {
        TransformOptions {
            suffix: self.suffix().to_string(),
            terminate_structured_name: self.terminate_structured_name(),
        }
    }
}

pub trait Pipeline {
    fn extract(&self) -> Result<Vec<Record>>;
    fn transform(&self, records: Vec<Record>) -> Result<Vec<Record>>;
    /// Returns the path the records were written to.
    fn load(&self, records: Vec<Record>) -> Result<String>;
}
