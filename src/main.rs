use clap::Parser;

use dutchbook::cli::{self, Cli, Commands};
use dutchbook::config::Config;

fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let config = match Config::load_or_default(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            std::process::exit(1);
        }
    };

    config.init_logging();

    if let Err(e) = run(&cli, &config) {
        cli::output::error(&format!("{e:#}"));
        std::process::exit(1);
    }
}

fn run(cli: &Cli, config: &Config) -> anyhow::Result<()> {
    let engine = &config.engine;
    match &cli.command {
        Commands::Surebet(args) => cli::surebet::run(args, engine, cli.json),
        Commands::Dutch(args) => cli::dutch::run(args, engine, cli.json),
        Commands::Hedge(args) => cli::hedge::run(args, engine, cli.json),
        Commands::Boost(args) => cli::boost::run(args, engine, cli.json),
        Commands::Eval(args) => cli::eval::run(args),
    }
}
