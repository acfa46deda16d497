use clap::Args;
use pvalue_dots::config::SimulationParams;
use pvalue_dots::error::PvResult;
use pvalue_dots::export::{write_dots, ExportFormat};
use pvalue_dots::histogram::Histogram;
use pvalue_dots::layout::ViewScale;
use std::fs::File;
use std::io::{self, BufWriter};
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    #[command(flatten)]
    pub params: SimulationParams,

    /// Scale to lay the dots out at: full or callback
    #[arg(long, default_value_t = ViewScale::Full)]
    pub view: ViewScale,

    /// json or csv
    #[arg(short, long, default_value_t = ExportFormat::Json)]
    pub format: ExportFormat,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    /// Emit dots in left-to-right reveal order instead of draw order
    #[arg(long, default_value_t = false)]
    pub sweep: bool,
}

pub fn run(args: &ExportArgs, params: &SimulationParams) -> PvResult<()> {
    let hist = Histogram::generate(params)?;
    let dots = if args.sweep {
        hist.sweep_order(args.view)
    } else {
        hist.view(args.view)
    };

    match &args.output {
        Some(path) => {
            info!("💾 Writing {} dots ({}) to {}", dots.len(), args.view, path);
            let file = File::create(path)?;
            write_dots(&dots, args.format, BufWriter::new(file))?;
        }
        None => {
            let stdout = io::stdout();
            write_dots(&dots, args.format, stdout.lock())?;
        }
    }
    Ok(())
}
