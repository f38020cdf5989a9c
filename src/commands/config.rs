//! Config subcommand handler

use anyhow::Result;

use termweave::Config;

use super::output_palette;

/// Show the effective configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show(config: &Config) -> Result<()> {
    let toml_str = toml::to_string_pretty(config)?;
    let palette = output_palette(config);

    match Config::config_path() {
        Some(path) if path.exists() => {
            println!("{}", palette.secondary_text(&format!("# {}", path.display())))
        }
        Some(path) => println!(
            "{}",
            palette.secondary_text(&format!("# {} (not found, using defaults)", path.display()))
        ),
        None => {}
    }
    println!("{}", palette.primary_text(&toml_str));
    Ok(())
}
