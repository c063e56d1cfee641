use std::path::PathBuf;

use anyhow::Context;
use clap::Subcommand;
use tracing::info;

#[derive(Subcommand)]
pub enum GenerateSubcommands {
    /// Write the JSON Schema of the problem file format
    JsonSchema {
        #[arg(long, short = 'o')]
        out: PathBuf,
    },
}

pub fn run(subcommand: GenerateSubcommands) -> Result<(), anyhow::Error> {
    match subcommand {
        GenerateSubcommands::JsonSchema { out } => {
            let schema = loadpack::json::schema::generate_json_schema()?;

            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent)?;
            }

            std::fs::write(&out, schema)
                .with_context(|| format!("Failed to write {}", out.display()))?;
            info!("Schema written to {}", out.display());
        }
    }

    Ok(())
}
