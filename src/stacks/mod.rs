//! Per-stack template definitions.
//!
//! The bulk of these modules is literal template content, which is data
//! rather than logic. Config-driven pieces shared between stacks (README,
//! `.env.example`, the CI workflow) live in [`content`].

pub mod content;
pub mod flask;
pub mod mern;
pub mod nextjs;
pub mod pern;

use crate::config::ProjectConfig;

/// Serializes a generated manifest with a trailing newline.
pub(crate) fn pretty(manifest: &serde_json::Value) -> String {
    let mut body = serde_json::to_string_pretty(manifest).unwrap_or_default();
    body.push('\n');
    body
}

// Condition functions for feature-flagged template files.

pub(crate) fn docker_enabled(config: &ProjectConfig) -> bool {
    config.features.docker
}

pub(crate) fn ci_enabled(config: &ProjectConfig) -> bool {
    config.features.github_actions
}

pub(crate) fn eslint_enabled(config: &ProjectConfig) -> bool {
    config.features.eslint
}

pub(crate) fn prettier_enabled(config: &ProjectConfig) -> bool {
    config.features.prettier
}
