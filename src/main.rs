use clap::Parser;
use vcf_merge::utils::{logger, validation::Validate};
use vcf_merge::{CliConfig, LocalStorage, MergeEngine, VcardPipeline};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose, config.log_format);

    tracing::debug!("CLI config: {:?}", config);

    let settings = match config.resolve().and_then(|s| s.validate().map(|_| s)) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("Configuration failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let pipeline = VcardPipeline::new(LocalStorage::default(), settings);
    let engine = MergeEngine::new(pipeline);

    match engine.run() {
        Ok(output_path) => {
            println!("Done! Merged file saved as: {}", output_path);
        }
        Err(e) => {
            tracing::error!("Merge failed: {}", e);
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }
}
