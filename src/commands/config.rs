use crate::core::{config::HubConfig, error::Result, print_section_header, print_success};
use colored::*;
use std::path::Path;

/// Show the effective configuration, optionally writing it to `path` first.
pub fn execute_config(path: &Path, config: &HubConfig, init: bool) -> Result<()> {
    if init {
        config.save(path)?;
        print_success(&format!("Wrote configuration to {}", path.display()));
    }

    print_section_header("Configuration");
    let rows = [
        ("file", path.display().to_string()),
        ("max_file_size", config.max_file_size.to_string()),
        ("show_intro", config.show_intro.to_string()),
        ("intro_step_ms", config.intro_step_ms.to_string()),
    ];
    for (key, value) in rows {
        println!("  {}  {}", format!("{key:<14}").bright_black(), value.white());
    }
    println!();
    Ok(())
}
