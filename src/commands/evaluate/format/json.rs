//! JSON output formatting for the evaluate command

use crate::commands::evaluate::Dashboard;
use revisor_core::error::Result;

/// Output in JSON format
pub fn output_json(dashboard: &Dashboard) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(dashboard)?);
    Ok(())
}
