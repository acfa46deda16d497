use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use pvalue_dots::config::SimulationParams;
use pvalue_dots::error::PvResult;
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file with simulation params; explicit flags override it
    #[arg(global = true, short, long)]
    config: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Simulate(cmd::simulate::SimulateArgs),
    Export(cmd::export::ExportArgs),
}

fn resolve_params(cli: &Cli, matches: &clap::ArgMatches) -> PvResult<SimulationParams> {
    let (cli_params, sub_matches) = match &cli.command {
        Commands::Simulate(args) => (&args.params, matches.subcommand_matches("simulate")),
        Commands::Export(args) => (&args.params, matches.subcommand_matches("export")),
    };

    let params = match (&cli.config, sub_matches) {
        (Some(path), Some(sub_matches)) => {
            info!("📂 Loading params from: {}", path);
            let mut file_params = SimulationParams::load_from_file(path)?;
            file_params.merge_from_cli(cli_params, sub_matches);
            file_params
        }
        _ => cli_params.clone(),
    };
    params.validate()?;
    Ok(params)
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let result = resolve_params(&cli, &matches).and_then(|params| match &cli.command {
        Commands::Simulate(_) => cmd::simulate::run(&params),
        Commands::Export(args) => cmd::export::run(args, &params),
    });

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}
