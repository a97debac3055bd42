//! Post-generation dependency installation and git initialization.
//!
//! Both phases delegate to an injected [`CommandRunner`]. Installation
//! failure is fatal; git-init failure is downgraded to a warning.

use std::path::Path;
use std::process::Command;

use log::debug;

use crate::config::{ProjectConfig, Stack};
use crate::console::Console;
use crate::error::{Error, Result};

/// Captured output of a successfully completed external command.
#[derive(Debug)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Runs an external command in a working directory and reports
/// success/failure plus captured output. Injected so tests can
/// substitute a scripted fake.
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> Result<CommandOutput>;
}

/// Command runner backed by `std::process::Command`.
#[derive(Debug, Default)]
pub struct SystemCommandRunner;

impl SystemCommandRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemCommandRunner {
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> Result<CommandOutput> {
        debug!("Running '{} {}' in '{}'", program, args.join(" "), cwd.display());
        let output = Command::new(program).args(args).current_dir(cwd).output().map_err(|e| {
            Error::CommandFailed { program: program.to_string(), detail: e.to_string() }
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let detail = if stderr.is_empty() { output.status.to_string() } else { stderr };
            return Err(Error::CommandFailed { program: program.to_string(), detail });
        }

        Ok(CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Subdirectories that receive their own dependency installation, relative
/// to the project root. Split stacks install one root after the other, not
/// in parallel, which keeps log ordering deterministic.
fn install_roots(stack: Stack) -> &'static [&'static str] {
    match stack {
        Stack::Mern | Stack::Pern => &["client", "server"],
        _ => &["."],
    }
}

fn install_command(stack: Stack) -> (&'static str, &'static [&'static str]) {
    if stack.is_python() {
        ("pip", &["install", "-r", "requirements.txt"])
    } else {
        ("npm", &["install"])
    }
}

/// Sequences the optional post-processing phases against a generated
/// project tree.
pub struct Installer<'a> {
    runner: &'a dyn CommandRunner,
    console: &'a dyn Console,
}

impl<'a> Installer<'a> {
    pub fn new(runner: &'a dyn CommandRunner, console: &'a dyn Console) -> Self {
        Self { runner, console }
    }

    /// Installs dependencies in every install root of the stack.
    ///
    /// Any failure aborts with [`Error::DependencyInstallFailed`]; the
    /// generated tree stays on disk so the user can install manually.
    pub fn install_dependencies(&self, project_path: &Path, config: &ProjectConfig) -> Result<()> {
        let (program, args) = install_command(config.stack);
        for root in install_roots(config.stack) {
            let cwd =
                if *root == "." { project_path.to_path_buf() } else { project_path.join(root) };
            if *root != "." {
                self.console.info(&format!("Installing {} dependencies...", root));
            }
            self.runner
                .run(program, args, &cwd)
                .map_err(|e| Error::DependencyInstallFailed(e.to_string()))?;
        }
        self.console.success("Dependencies installed");
        Ok(())
    }

    /// Initializes a git repository with all files staged and an initial
    /// commit. Any failure is reported as a warning and swallowed; the
    /// generated project is still considered a success.
    pub fn init_git(&self, project_path: &Path) {
        let steps: [(&str, &[&str]); 3] = [
            ("git", &["init"]),
            ("git", &["add", "."]),
            ("git", &["commit", "-m", "Initial commit"]),
        ];
        for (program, args) in steps {
            if let Err(e) = self.runner.run(program, args, project_path) {
                self.console.warn(&format!(
                    "Git initialization failed: {}. You can initialize it manually.",
                    e
                ));
                return;
            }
        }
        self.console.success("Git repository initialized");
    }
}
