//! `runway fetch`: save a budget snapshot for offline runs

use clap::Args;
use std::path::PathBuf;

use super::forecast::build_client;
use crate::config::{RunwayPaths, Settings};
use crate::error::RunwayResult;
use crate::ynab::ApiToken;

#[derive(Args, Debug, Clone, Default)]
pub struct FetchArgs {
    /// YNAB personal access token
    #[arg(long, env = "YNAB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Budget ID to fetch (default: settings, then 'last-used')
    #[arg(long, env = "YNAB_BUDGET_ID")]
    pub budget_id: Option<String>,

    /// Where to write the snapshot (default: snapshot.json in the config directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Fetch accounts and schedules and write them as a snapshot file
pub fn handle_fetch_command(
    paths: &RunwayPaths,
    settings: &Settings,
    args: FetchArgs,
) -> RunwayResult<()> {
    let token = ApiToken::from_option(args.token)?;
    let client = build_client(settings, token)?;
    let budget_id = args.budget_id.unwrap_or_else(|| settings.budget_id.clone());

    let snapshot = client.fetch_snapshot(&budget_id)?;

    let output = match args.output {
        Some(path) => path,
        None => {
            paths.ensure_directories()?;
            paths.snapshot_file()
        }
    };
    snapshot.save(&output)?;

    println!(
        "Saved {} account(s) and {} scheduled transaction(s) to {}",
        snapshot.accounts.len(),
        snapshot.scheduled_transactions.len(),
        output.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RunwayError;
    use tempfile::TempDir;

    #[test]
    fn test_fetch_requires_token() {
        let temp_dir = TempDir::new().unwrap();
        let paths = RunwayPaths::with_base_dir(temp_dir.path().to_path_buf());

        let err = handle_fetch_command(&paths, &Settings::default(), FetchArgs::default())
            .unwrap_err();
        assert!(matches!(err, RunwayError::MissingToken));
        assert!(!paths.snapshot_file().exists());
    }
}
