//! `runway init` and `runway config`

use crate::config::{RunwayPaths, Settings};
use crate::error::RunwayResult;

/// Write the settings file with defaults, leaving an existing one alone
pub fn handle_init_command(paths: &RunwayPaths, settings: &Settings) -> RunwayResult<()> {
    if paths.is_initialized() {
        println!(
            "Settings already exist at: {}",
            paths.settings_file().display()
        );
        return Ok(());
    }

    settings.save(paths)?;
    println!("Created settings at: {}", paths.settings_file().display());
    println!();
    println!("Set YNAB_TOKEN (or put it in a .env file) and run 'runway check'.");
    Ok(())
}

/// Print paths and effective settings
pub fn handle_config_command(paths: &RunwayPaths, settings: &Settings) -> RunwayResult<()> {
    let token_set = std::env::var("YNAB_TOKEN")
        .map(|t| !t.trim().is_empty())
        .unwrap_or(false);
    print!("{}", format_config(paths, settings, token_set));
    Ok(())
}

fn format_config(paths: &RunwayPaths, settings: &Settings, token_set: bool) -> String {
    let windows = settings
        .windows
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(",");

    let mut output = String::new();
    output.push_str("runway Configuration\n");
    output.push_str("====================\n");
    output.push_str(&format!("Config directory: {}\n", paths.base_dir().display()));
    output.push_str(&format!(
        "Settings file:    {}{}\n",
        paths.settings_file().display(),
        if paths.is_initialized() { "" } else { " (not created)" }
    ));
    output.push('\n');
    output.push_str("Settings:\n");
    output.push_str(&format!("  Budget:          {}\n", settings.budget_id));
    output.push_str(&format!("  Windows:         {}\n", windows));
    output.push_str(&format!("  Currency symbol: {}\n", settings.currency_symbol));
    output.push_str(&format!("  API base URL:    {}\n", settings.api_base_url));
    output.push_str(&format!(
        "  Request timeout: {}s\n",
        settings.request_timeout_secs
    ));
    output.push_str(&format!(
        "  YNAB_TOKEN:      {}\n",
        if token_set { "set" } else { "not set" }
    ));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_settings_once() {
        let temp_dir = TempDir::new().unwrap();
        let paths = RunwayPaths::with_base_dir(temp_dir.path().join("runway"));

        handle_init_command(&paths, &Settings::default()).unwrap();
        assert!(paths.is_initialized());

        let custom = Settings {
            budget_id: "other".into(),
            ..Settings::default()
        };
        handle_init_command(&paths, &custom).unwrap();
        let loaded = Settings::load_or_default(&paths).unwrap();
        assert_eq!(loaded.budget_id, "last-used");
    }

    #[test]
    fn test_format_config() {
        let temp_dir = TempDir::new().unwrap();
        let paths = RunwayPaths::with_base_dir(temp_dir.path().to_path_buf());

        let text = format_config(&paths, &Settings::default(), false);
        assert!(text.contains("(not created)"));
        assert!(text.contains("YNAB_TOKEN:      not set"));
        assert!(text.contains("Windows:         3,7,30"));
        assert!(text.contains("Budget:          last-used"));
    }
}
