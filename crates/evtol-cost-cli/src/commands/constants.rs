//! Constants command handler for printing the model calibration.

use anyhow::Result;

use evtol_cost_lib::CostConfig;

use evtol_cost_cli::output::{render_constants_json, render_constants_text, OutputFormat};
use evtol_cost_cli::terminal::ColorPalette;

/// Handle the constants subcommand.
pub fn handle_constants(format: OutputFormat) -> Result<()> {
    let config = CostConfig::default();
    match format {
        OutputFormat::Text => {
            print!("{}", render_constants_text(&config, &ColorPalette::detect()))
        }
        OutputFormat::Json => println!("{}", render_constants_json(&config)?),
    }
    Ok(())
}
