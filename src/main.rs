use clap::Parser;
use colored::*;
use env_logger::Env;
use mdsimplify_lib::config::Config;
use mdsimplify_lib::exit_codes::exit;

mod cli_types;
mod commands;

use cli_types::{Cli, Commands};
use commands::process::Mode;

fn init_logging(cli: &Cli) {
    let default_level = if cli.verbose {
        "info"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };

    env_logger::Builder::from_env(Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<i32> {
    let code = match &cli.command {
        Commands::Simplify(args) => commands::process::handle_process(Mode::Simplify, args, cli.config.as_deref(), cli.quiet),
        Commands::Split(args) => commands::process::handle_process(Mode::Split, args, cli.config.as_deref(), cli.quiet),
        Commands::Rules => {
            let config = match cli.config.as_deref() {
                Some(path) => Config::from_file(path)?,
                None => Config::default(),
            };
            commands::rule::handle_rules(&config);
            mdsimplify_lib::exit_codes::SUCCESS
        }
        Commands::Init { path } => {
            commands::init::handle_init(path, cli.quiet)?;
            mdsimplify_lib::exit_codes::SUCCESS
        }
    };
    Ok(code)
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    match run(&cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("{}: {e:#}", "Error".red().bold());
            exit::tool_error();
        }
    }
}
