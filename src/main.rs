use clap::Parser;
use profile_etl::utils::{logger, validation::Validate};
use profile_etl::{
    Cli, Command, ConvertPipeline, EtlEngine, ExtractPipeline, LocalStorage, ParserOptions,
    RunSummary,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Extract(args) => {
            logger::init_cli_logger(args.verbose);
            tracing::info!("Starting profile-etl extract");
            if args.verbose {
                tracing::debug!("CLI args: {:?}", args);
            }

            if let Err(e) = args.validate() {
                tracing::error!("Configuration validation failed: {}", e);
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }

            let options = load_options(args.options.as_deref());
            let storage = LocalStorage::new(String::new());
            let pipeline = ExtractPipeline::new(storage, args, options);
            finish(EtlEngine::new(pipeline).run().await);
        }
        Command::Convert(args) => {
            logger::init_cli_logger(args.verbose);
            tracing::info!("Starting profile-etl convert");
            if args.verbose {
                tracing::debug!("CLI args: {:?}", args);
            }

            if let Err(e) = args.validate() {
                tracing::error!("Configuration validation failed: {}", e);
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }

            let options = load_options(args.options.as_deref());
            let storage = LocalStorage::new(String::new());
            let pipeline = ConvertPipeline::new(storage, args, options);
            finish(EtlEngine::new(pipeline).run().await);
        }
    }

    Ok(())
}

fn load_options(path: Option<&str>) -> ParserOptions {
    match path {
        Some(p) => match ParserOptions::from_file(p) {
            Ok(options) => options,
            Err(e) => {
                tracing::error!("Failed to load options from {}: {}", p, e);
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }
        },
        None => ParserOptions::default(),
    }
}

fn finish(result: profile_etl::Result<RunSummary>) {
    match result {
        Ok(summary) => {
            println!("✅ ETL process completed successfully!");
            for path in &summary.written {
                println!("📁 Output saved to: {}", path);
            }
            if !summary.failures.is_empty() {
                println!("⚠️  {} file(s) failed:", summary.failures.len());
                for failure in &summary.failures {
                    println!("  ✗ {}: {}", failure.path, failure.error);
                }
            }
        }
        Err(e) => {
            tracing::error!("ETL process failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}
