use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, ValueEnum};
use loadpack::{
    json::types::JsonPackingProblem,
    solver::{
        packing_params::{MAX_UTILIZATION_PRECISION, PackingParams},
        solver::PackingSolver,
    },
};
use tracing::info;

use crate::table;

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Args)]
pub struct PackArgs {
    /// The problem file to pack
    #[arg(short = 'i', long, env = "LOADPACK_INPUT")]
    input: PathBuf,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Decimal places kept in utilization percentages
    #[arg(
        short,
        long,
        default_value_t = 1,
        value_parser = clap::value_parser!(u32).range(0..=i64::from(MAX_UTILIZATION_PRECISION))
    )]
    precision: u32,

    /// Write the solution as JSON to this file
    #[arg(short, long)]
    out: Option<PathBuf>,
}

pub fn run(args: PackArgs) -> Result<(), anyhow::Error> {
    info!("Packing {}", args.input.display());

    let problem = JsonPackingProblem::from_file(&args.input)?
        .build_problem()
        .with_context(|| format!("Invalid problem in {}", args.input.display()))?;

    let solver = PackingSolver::new(PackingParams {
        utilization_precision: args.precision,
    });
    let solution = solver
        .solve(&problem)
        .with_context(|| format!("Failed to pack {}", args.input.display()))?;

    info!(
        "Finished: bins = {}, lower bound = {}, units = {}",
        solution.total_bins(),
        solution.lower_bound_bins(),
        solution.total_units(),
    );

    match args.format {
        OutputFormat::Table => {
            println!("{}", table::summary_table(&solution));
            for bin in solution.bins() {
                println!("{}", table::bin_table(bin, solution.vehicle(), args.precision));
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&solution)?),
    }

    if let Some(out) = args.out {
        if let Some(parent) = out.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&out, serde_json::to_string_pretty(&solution)?)
            .with_context(|| format!("Failed to write {}", out.display()))?;
        info!("Solution written to {}", out.display());
    }

    Ok(())
}
