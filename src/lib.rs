//! Stackforge generates ready-to-run project boilerplate for common web
//! stacks (MERN, PERN, Next.js, Flask, Express). It prompts for a
//! configuration, materializes a template into a fresh directory, and
//! optionally installs dependencies and initializes a git repository.

/// Command-line interface definition
pub mod cli;

/// Validated project configuration: stacks, features, name rules
pub mod config;

/// Leveled console output for user-facing messages
pub mod console;

/// Error types and handling
pub mod error;

/// End-to-end generation pipeline
pub mod generator;

/// Dependency installation and git initialization via external commands
pub mod installer;

/// Writes directory skeletons and rendered template files to disk
pub mod materializer;

/// Interactive prompting for project details
pub mod prompt;

/// Stack-to-template resolution, including derived templates
pub mod registry;

/// Per-stack template definitions (directory skeletons and file content)
pub mod stacks;

/// Template data model: structures, files, content variants
pub mod template;
