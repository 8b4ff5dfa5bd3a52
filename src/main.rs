use clap::Parser;
use shelf_pricer::cli::{Cli, Commands};
use shelf_pricer::config::Config;
use shelf_pricer::model::SuggestionForest;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(&cli.config).unwrap_or_else(|e| {
        eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
        eprintln!("Using default configuration");
        toml::from_str(include_str!("../config.toml.example")).expect("Invalid default config")
    });

    // Initialize telemetry
    let _guard = shelf_pricer::telemetry::init_telemetry(&config.telemetry)?;

    match cli.command {
        Commands::Price(args) => {
            args.execute(&config)?;
        }
        Commands::Suggest(args) => {
            // The classifier is fit once per process and handed to the
            // command as an explicit value
            let model = SuggestionForest::fit(&config.model);
            args.execute(&config, &model)?;
        }
        Commands::Batch(args) => {
            let model = SuggestionForest::fit(&config.model);
            args.execute(&config, &model)?;
        }
        Commands::Config => {
            println!("Current configuration:");
            println!(
                "  Pricing: max_base_price={}, max_inventory={}, currency={}",
                config.pricing.max_base_price,
                config.pricing.max_inventory,
                config.pricing.currency
            );
            println!(
                "  Model: trees={}, seed={}, min_samples_split={}",
                config.model.trees, config.model.seed, config.model.min_samples_split
            );
            println!(
                "  Batch: date_format={}, output_dir={}",
                config.batch.date_format,
                config.batch.output_dir.display()
            );
            println!("  Telemetry: log_level={}", config.telemetry.log_level);
        }
    }

    Ok(())
}
