//! # Invocation Scripts
//!
//! A script is a JSON array of invocations, replayed in order:
//!
//! ```json
//! [
//!   {"creator": "alice", "function": "init", "args": ["{\"admin\":\"alice\"}"]},
//!   {"creator": "P1", "function": "createUser", "args": ["producer"]}
//! ]
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One transaction proposal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invocation {
    /// Caller identity. Empty means the identity cannot be resolved.
    #[serde(default)]
    pub creator: String,
    /// `init` or an invoke operation name.
    pub function: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new(creator: &str, function: &str, args: &[&str]) -> Self {
        Self {
            creator: creator.to_string(),
            function: function.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// Whether this invocation goes to the `init` entry point.
    pub fn is_init(&self) -> bool {
        self.function == "init"
    }
}

/// Parse a script document.
pub fn parse_script(text: &str) -> Result<Vec<Invocation>> {
    serde_json::from_str(text).context("script must be a JSON array of invocations")
}

/// Read and parse a script file.
pub fn load_script(path: &Path) -> Result<Vec<Invocation>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read script {}", path.display()))?;
    parse_script(&text).with_context(|| format!("invalid script {}", path.display()))
}
