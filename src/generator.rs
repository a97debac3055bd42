//! End-to-end generation pipeline: resolve, materialize, install, init git.
//!
//! The pipeline is strictly sequential. Installation runs before git
//! initialization so the ignore file is staged correctly and so an
//! install failure prevents an initial commit lacking lockfiles.

use std::path::PathBuf;

use crate::config::ProjectConfig;
use crate::console::Console;
use crate::error::Result;
use crate::installer::{CommandRunner, Installer};
use crate::materializer::Materializer;
use crate::registry::TemplateRegistry;

/// Switches for the optional post-processing phases.
#[derive(Debug, Clone, Copy)]
pub struct GenerateOptions {
    pub install: bool,
    pub git: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self { install: true, git: true }
    }
}

/// Runs the full pipeline for a validated configuration and returns the
/// project path. Installation failure is fatal; git-init failure only
/// produces a warning.
pub fn generate_project(
    config: &ProjectConfig,
    options: GenerateOptions,
    registry: &TemplateRegistry,
    runner: &dyn CommandRunner,
    console: &dyn Console,
) -> Result<PathBuf> {
    let template = registry.resolve(config.stack)?;
    let project_path = config.project_path();

    console.step(1, 3, "Creating project structure...");
    Materializer::new().materialize(&project_path, &template, config)?;
    console.success("Project structure created");

    let installer = Installer::new(runner, console);
    if options.install {
        console.step(2, 3, "Installing dependencies...");
        installer.install_dependencies(&project_path, config)?;
    }
    if options.git {
        console.step(3, 3, "Initializing git repository...");
        installer.init_git(&project_path);
    }

    Ok(project_path)
}
