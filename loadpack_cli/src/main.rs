use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;

use crate::{compare::CompareArgs, generate::GenerateSubcommands, pack::PackArgs};

mod compare;
mod generate;
mod pack;
mod table;
mod vehicles;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Pack the loads of a problem file into its vehicle
    Pack {
        #[command(flatten)]
        args: PackArgs,
    },
    /// Pack the loads of a problem file into every catalog vehicle
    Compare {
        #[command(flatten)]
        args: CompareArgs,
    },
    /// List the built-in vehicles
    Vehicles,
    #[command(visible_alias = "g")]
    Generate {
        #[command(subcommand)]
        commands: GenerateSubcommands,
    },
}

fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename("./.env.local").ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    match cli.command {
        Commands::Pack { args } => pack::run(args)?,
        Commands::Compare { args } => compare::run(args)?,
        Commands::Vehicles => vehicles::run(),
        Commands::Generate { commands } => generate::run(commands)?,
    }

    Ok(())
}
