use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

use gchl::cli::{self, Args};
use gchl::env::ProcessEnv;
use gchl::ui;

fn init_logging(verbose: bool) {
    let crate_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .filter_module("gchl", crate_level)
        .parse_default_env()
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = match cli::run(args, &ProcessEnv) {
        Ok(config) => config,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    ui::display_config_summary(&config);
    Ok(())
}
