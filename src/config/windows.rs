//! Day-window parsing
//!
//! Windows arrive as comma-separated day counts, e.g. `"3,7,30"`.

use crate::error::{RunwayError, RunwayResult};
use crate::services::window;

/// Parse a comma-separated list of positive day counts.
///
/// Blank parts are ignored. The result is deduplicated and ascending.
pub fn parse_windows(input: &str) -> RunwayResult<Vec<u32>> {
    let mut windows = Vec::new();

    for part in input.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let days: u32 = part.parse().map_err(|_| {
            RunwayError::Validation(format!("Invalid --windows value: {}", input))
        })?;
        windows.push(days);
    }

    validate_windows(&windows)
}

/// Reject empty lists and zero-day windows; normalise the rest
pub fn validate_windows(windows: &[u32]) -> RunwayResult<Vec<u32>> {
    if windows.is_empty() {
        return Err(RunwayError::Validation(
            "At least one window (in days) is required".into(),
        ));
    }
    if windows.contains(&0) {
        return Err(RunwayError::Validation(
            "Windows must be positive day counts".into(),
        ));
    }
    Ok(window::normalize(windows))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_windows() {
        assert_eq!(parse_windows("3,7,30").unwrap(), vec![3, 7, 30]);
        assert_eq!(parse_windows(" 30, 7 ,,3,7 ").unwrap(), vec![3, 7, 30]);
        assert_eq!(parse_windows("14").unwrap(), vec![14]);
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(parse_windows("3,seven").unwrap_err().is_validation());
        assert!(parse_windows("-3").unwrap_err().is_validation());
        assert!(parse_windows("0,7").unwrap_err().is_validation());
        assert!(parse_windows("").unwrap_err().is_validation());
        assert!(parse_windows(" , ").unwrap_err().is_validation());
    }
}
