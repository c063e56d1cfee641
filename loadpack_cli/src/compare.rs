use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use loadpack::{
    json::types::JsonPackingProblem,
    problem::vehicle_catalog::catalog,
    solver::{
        packing_params::{MAX_UTILIZATION_PRECISION, PackingParams},
        solver::PackingSolver,
    },
};
use tracing::info;

use crate::table;

#[derive(Args)]
pub struct CompareArgs {
    /// The problem file whose loads are compared across vehicles
    #[arg(short = 'i', long, env = "LOADPACK_INPUT")]
    input: PathBuf,

    #[arg(
        short,
        long,
        default_value_t = 1,
        value_parser = clap::value_parser!(u32).range(0..=i64::from(MAX_UTILIZATION_PRECISION))
    )]
    precision: u32,
}

pub fn run(args: CompareArgs) -> Result<(), anyhow::Error> {
    let problem = JsonPackingProblem::from_file(&args.input)?
        .build_problem()
        .with_context(|| format!("Invalid problem in {}", args.input.display()))?;

    let vehicles = catalog();
    info!(
        "Comparing {} load types across {} vehicles",
        problem.load_types().len(),
        vehicles.len()
    );

    let solver = PackingSolver::new(PackingParams {
        utilization_precision: args.precision,
    });
    let comparisons = solver.compare(&problem, &vehicles);

    println!("{}", table::comparison_table(&comparisons));

    Ok(())
}
