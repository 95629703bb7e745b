//! `revisor seed` command - show the seed derived from identifiers
//!
//! Useful for checking why two file names score the way they do: the seed
//! is all the scoring engine knows about a document.

use serde_json::json;

use crate::cli::{Cli, OutputFormat};
use revisor_core::error::Result;
use revisor_core::records::quoted;
use revisor_core::seed::{derive_seed, identifier_digest};

/// Execute the seed command
pub fn execute(cli: &Cli, identifiers: &[String]) -> Result<()> {
    match cli.format {
        OutputFormat::Human => {
            for id in identifiers {
                if cli.quiet {
                    println!("{}", derive_seed(id));
                } else {
                    println!("{}  {}", derive_seed(id), id);
                }
            }
        }
        OutputFormat::Json => {
            let output: Vec<_> = identifiers
                .iter()
                .map(|id| {
                    json!({
                        "identifier": id,
                        "seed": derive_seed(id),
                        "sha256": identifier_digest(id),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Records => {
            println!(
                "H revisor=1 records=1 mode=seed identifiers={}",
                identifiers.len()
            );
            for id in identifiers {
                println!("S {} seed={}", quoted(id), derive_seed(id));
            }
        }
    }
    Ok(())
}
