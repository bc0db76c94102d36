//! Merge vCard files into one, appending a suffix to every contact's
//! `FN:` and `N:` surname fields.
//!
//! ```no_run
//! let output = vcf_merge::process(
//!     vec!["contacts_1.vcf".to_string(), "contacts.vcf".to_string()],
//!     "BHURASA OIL",
//!     "contacts_final.vcf",
//! )?;
//! println!("Done! Merged file saved as: {}", output);
//! # Ok::<(), vcf_merge::MergeError>(())
//! ```

pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{cli::LocalStorage, CliConfig, MergeSettings};
pub use crate::core::{engine::MergeEngine, pipeline::VcardPipeline};
pub use crate::domain::model::{Record, TransformOptions};
pub use crate::utils::error::{MergeError, Result};

/// Reads `input_files` in order, rewrites name fields and writes `output_file`
/// relative to the current directory. Returns the output path.
pub fn process(
    input_files: Vec<String>,
    suffix: impl Into<String>,
    output_file: impl Into<String>,
) -> Result<String> {
    let settings = MergeSettings::new(input_files, suffix, output_file);
    let pipeline = VcardPipeline::new(LocalStorage::default(), settings);
    MergeEngine::new(pipeline).run()
}
