//! API token handling
//!
//! The personal access token is wiped from memory on drop and never shows up
//! in debug output.

use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{RunwayError, RunwayResult};

/// A YNAB personal access token
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct ApiToken(String);

impl ApiToken {
    /// Wrap a token, rejecting blank input
    pub fn new(token: impl Into<String>) -> RunwayResult<Self> {
        let mut token = token.into();
        let trimmed = token.trim().to_string();
        token.zeroize();

        if trimmed.is_empty() {
            return Err(RunwayError::MissingToken);
        }
        Ok(Self(trimmed))
    }

    /// Build a token from an optional flag/env value
    pub fn from_option(token: Option<String>) -> RunwayResult<Self> {
        match token {
            Some(token) => Self::new(token),
            None => Err(RunwayError::MissingToken),
        }
    }

    /// The raw token, for the Authorization header only
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiToken(***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_is_redacted() {
        let token = ApiToken::new("secret-token").unwrap();
        let debug = format!("{:?}", token);
        assert!(!debug.contains("secret"));
        assert_eq!(token.expose(), "secret-token");
    }

    #[test]
    fn test_blank_token_is_missing() {
        assert!(matches!(ApiToken::new("  "), Err(RunwayError::MissingToken)));
        assert!(matches!(
            ApiToken::from_option(None),
            Err(RunwayError::MissingToken)
        ));
    }

    #[test]
    fn test_token_is_trimmed() {
        let token = ApiToken::from_option(Some(" abc \n".into())).unwrap();
        assert_eq!(token.expose(), "abc");
    }
}
