use crate::reports;
use clap::Args;
use pvalue_dots::config::SimulationParams;
use pvalue_dots::error::PvResult;
use pvalue_dots::histogram::Histogram;

#[derive(Args, Debug, Clone)]
pub struct SimulateArgs {
    #[command(flatten)]
    pub params: SimulationParams,
}

pub fn run(params: &SimulationParams) -> PvResult<()> {
    let hist = Histogram::generate(params)?;

    println!(
        "\n🪙 Null world: {} guessers x {} flips at p = {} (seed {})",
        hist.len(),
        params.trials,
        params.probability,
        params.seed
    );
    reports::print_bucket_report(&hist);
    reports::print_tail_report(&hist.tail_summary()?);
    Ok(())
}
