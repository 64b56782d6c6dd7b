//! Show the effective configuration.

use anyhow::Result;
use console::style;

use botledger_infra::config::CONFIG_FILE;

use crate::state::AppState;

/// Print the data directory, config file location, and key options in effect.
pub fn show_config(state: &AppState, json: bool) -> Result<()> {
    let config_path = state.data_dir.join(CONFIG_FILE);
    let keys = &state.config.keys;

    if json {
        let out = serde_json::json!({
            "data_dir": state.data_dir.display().to_string(),
            "config_file": config_path.display().to_string(),
            "config_file_exists": config_path.exists(),
            "keys": keys,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!();
    println!(
        "  {} {}",
        style("Data dir:").bold(),
        style(state.data_dir.display()).cyan()
    );
    let note = if config_path.exists() { "" } else { " (not found, using defaults)" };
    println!(
        "  {} {}{}",
        style("Config:").bold(),
        config_path.display(),
        style(note).dim()
    );
    println!("  {} {}", style("Key encoding:").bold(), keys.encoding);
    println!("  {} {}", style("Scalar keys only:").bold(), keys.scalar_only);
    println!();

    Ok(())
}
