//! YNAB API access
//!
//! A small blocking client for the read endpoints, the token wrapper, and the
//! snapshot sources the CLI chooses between.

pub mod client;
pub mod source;
pub mod token;

pub use client::YnabClient;
pub use source::{FileSource, SnapshotSource, YnabSource};
pub use token::ApiToken;
