use crate::core::parser::parse_records;
use crate::core::transform::transform_record;
use crate::core::{ConfigProvider, Pipeline, Record, Storage};
use crate::utils::error::Result;
use std::io::Write;

pub struct VcardPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> VcardPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for VcardPipeline<S, C> {
    fn extract(&self) -> Result<Vec<Record>> {
        let mut records = Vec::new();

        // 依照輸入順序逐一讀取
        for path in self.config.input_files() {
            tracing::debug!("Reading contacts from: {}", path);
            let reader = self.storage.open_read(path)?;
            let file_records = parse_records(reader)?;
            tracing::debug!("Found {} records in {}", file_records.len(), path);
            records.extend(file_records);
        }

        Ok(records)
    }

    fn transform(&self, records: Vec<Record>) -> Result<Vec<Record>> {
        let options = self.config.transform_options();
        tracing::debug!("Appending suffix '{}' to name fields", options.suffix);

        Ok(records
            .iter()
            .map(|record| transform_record(record, &options))
            .collect())
    }

    fn load(&self, records: Vec<Record>) -> Result<String> {
        let output_path = self.config.output_file();

        let mut writer = self.storage.open_write(output_path)?;
        for record in &records {
            writer.write_all(record.to_text().as_bytes())?;
        }
        writer.flush()?;

        tracing::debug!("Wrote {} records to {}", records.len(), output_path);
        Ok(output_path.to_string())
    }
}
