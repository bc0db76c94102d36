pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::{MergeError, Result};
use crate::utils::logger::LogFormat;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use toml_config::TomlConfig;

#[derive(Debug, Clone, Parser)]
#[command(name = "vcf-merge")]
#[command(about = "Merge vCard files and append a suffix to every contact name")]
pub struct CliConfig {
    /// Input vCard file; repeat or comma-separate for several, order is kept
    #[arg(short = 'i', long = "input", value_delimiter = ',')]
    pub input_files: Vec<String>,

    /// Text appended to the FN and N fields
    #[arg(short, long)]
    pub suffix: Option<String>,

    /// Destination file, created or truncated
    #[arg(short = 'o', long = "output")]
    pub output_file: Option<String>,

    /// TOML configuration file; command line values take precedence
    #[arg(short, long)]
    pub config: Option<String>,

    /// Keep the line break after rewritten N fields
    #[arg(long)]
    pub terminate_structured_name: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

impl CliConfig {
    /// 合併設定檔與命令列參數，命令列優先
    pub fn resolve(&self) -> Result<MergeSettings> {
        let file_config = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from: {}", path);
                TomlConfig::from_file(path)?
            }
            None => TomlConfig::default(),
        };
        let terminate_from_file = file_config.terminate_structured_name();
        let merge = file_config.merge;

        let input_files = if self.input_files.is_empty() {
            merge.input_files.unwrap_or_default()
        } else {
            self.input_files.clone()
        };

        let suffix = self
            .suffix
            .clone()
            .or(merge.suffix)
            .ok_or_else(|| MergeError::MissingConfigError {
                field: "suffix".to_string(),
            })?;

        let output_file = self
            .output_file
            .clone()
            .or(merge.output_file)
            .ok_or_else(|| MergeError::MissingConfigError {
                field: "output_file".to_string(),
            })?;

        Ok(MergeSettings {
            input_files,
            suffix,
            output_file,
            terminate_structured_name: self.terminate_structured_name
                || terminate_from_file.unwrap_or(false),
        })
    }
}

/// Fully resolved run configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeSettings {
    pub input_files: Vec<String>,
    pub suffix: String,
    pub output_file: String,
    #[serde(default)]
    pub terminate_structured_name: bool,
}

impl MergeSettings {
    pub fn new(
        input_files: Vec<String>,
        suffix: impl Into<String>,
        output_file: impl Into<String>,
    ) -> Self {
        Self {
            input_files,
            suffix: suffix.into(),
            output_file: output_file.into(),
            terminate_structured_name: false,
        }
    }
}

impl ConfigProvider for MergeSettings {
    fn input_files(&self) -> &[String] {
        &self.input_files
    }

    fn suffix(&self) -> &str {
        &self.suffix
    }

    fn output_file(&self) -> &str {
        &self.output_file
    }

    fn terminate_structured_name(&self) -> bool {
        self.terminate_structured_name
    }
}

impl Validate for MergeSettings {
    fn validate(&self) -> Result<()> {
        if self.input_files.is_empty() {
            tracing::warn!("No input files configured, output will be empty");
        }
        for path in &self.input_files {
            validation::validate_path("input_files", path)?;
        }
        validation::validate_path("output_file", &self.output_file)?;
        Ok(())
    }
}
