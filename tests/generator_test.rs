use std::cell::RefCell;
use std::fs;
use std::path::Path;

use tempfile::TempDir;

use stackforge::config::{Features, ProjectConfig, Stack};
use stackforge::console::Console;
use stackforge::error::{Error, Result};
use stackforge::generator::{generate_project, GenerateOptions};
use stackforge::installer::{CommandOutput, CommandRunner};
use stackforge::registry::TemplateRegistry;

#[derive(Default)]
struct FakeRunner {
    fail_program: Option<&'static str>,
    calls: RefCell<Vec<String>>,
}

impl CommandRunner for FakeRunner {
    fn run(&self, program: &str, args: &[&str], _cwd: &Path) -> Result<CommandOutput> {
        self.calls.borrow_mut().push(format!("{} {}", program, args.join(" ")));
        if self.fail_program == Some(program) {
            return Err(Error::CommandFailed {
                program: program.to_string(),
                detail: "exit status: 1".to_string(),
            });
        }
        Ok(CommandOutput { stdout: String::new(), stderr: String::new() })
    }
}

#[derive(Default)]
struct RecordingConsole {
    warnings: RefCell<Vec<String>>,
}

impl Console for RecordingConsole {
    fn info(&self, _message: &str) {}
    fn success(&self, _message: &str) {}
    fn warn(&self, message: &str) {
        self.warnings.borrow_mut().push(message.to_string());
    }
    fn error(&self, _message: &str) {}
    fn plain(&self, _message: &str) {}
    fn title(&self, _message: &str) {}
    fn step(&self, _step: usize, _total: usize, _message: &str) {}
}

fn config_for(stack: Stack, base: &Path) -> ProjectConfig {
    ProjectConfig::new(
        "demo".to_string(),
        "A demo project".to_string(),
        "Ada".to_string(),
        stack,
        Features::defaults_for(stack),
        base.to_path_buf(),
    )
    .unwrap()
}

#[test]
fn test_full_pipeline_materializes_then_installs_then_inits_git() {
    let temp = TempDir::new().unwrap();
    let config = config_for(Stack::Nextjs, temp.path());
    let runner = FakeRunner::default();
    let console = RecordingConsole::default();

    let path = generate_project(
        &config,
        GenerateOptions::default(),
        &TemplateRegistry::new(),
        &runner,
        &console,
    )
    .unwrap();

    assert_eq!(path, temp.path().join("demo"));
    assert!(path.join("package.json").is_file());
    assert_eq!(
        *runner.calls.borrow(),
        vec!["npm install", "git init", "git add .", "git commit -m Initial commit"]
    );
    assert!(console.warnings.borrow().is_empty());
}

#[test]
fn test_install_failure_stops_before_git_and_keeps_tree() {
    let temp = TempDir::new().unwrap();
    let config = config_for(Stack::Nextjs, temp.path());
    let runner = FakeRunner { fail_program: Some("npm"), calls: RefCell::new(Vec::new()) };
    let console = RecordingConsole::default();

    let result = generate_project(
        &config,
        GenerateOptions::default(),
        &TemplateRegistry::new(),
        &runner,
        &console,
    );

    assert!(matches!(result, Err(Error::DependencyInstallFailed(_))));
    assert!(!runner.calls.borrow().iter().any(|call| call.starts_with("git")));
    // The generated tree stays on disk for a manual install.
    assert!(temp.path().join("demo/package.json").is_file());
}

#[test]
fn test_git_failure_still_succeeds_with_warning() {
    let temp = TempDir::new().unwrap();
    let config = config_for(Stack::Nextjs, temp.path());
    let runner = FakeRunner { fail_program: Some("git"), calls: RefCell::new(Vec::new()) };
    let console = RecordingConsole::default();

    let path = generate_project(
        &config,
        GenerateOptions::default(),
        &TemplateRegistry::new(),
        &runner,
        &console,
    )
    .unwrap();

    assert!(path.join("package.json").is_file());
    assert_eq!(console.warnings.borrow().len(), 1);
}

#[test]
fn test_options_can_skip_install_and_git() {
    let temp = TempDir::new().unwrap();
    let config = config_for(Stack::Flask, temp.path());
    let runner = FakeRunner::default();
    let console = RecordingConsole::default();

    generate_project(
        &config,
        GenerateOptions { install: false, git: false },
        &TemplateRegistry::new(),
        &runner,
        &console,
    )
    .unwrap();

    assert!(runner.calls.borrow().is_empty());
    assert!(temp.path().join("demo/run.py").is_file());
}

#[test]
fn test_existing_target_fails_before_any_command() {
    let temp = TempDir::new().unwrap();
    let config = config_for(Stack::Nextjs, temp.path());
    fs::create_dir_all(temp.path().join("demo")).unwrap();
    let runner = FakeRunner::default();
    let console = RecordingConsole::default();

    let result = generate_project(
        &config,
        GenerateOptions::default(),
        &TemplateRegistry::new(),
        &runner,
        &console,
    );

    assert!(matches!(result, Err(Error::DirectoryExists { .. })));
    assert!(runner.calls.borrow().is_empty());
}

#[test]
fn test_unregistered_stack_fails_before_materializing() {
    let temp = TempDir::new().unwrap();
    let config = config_for(Stack::Django, temp.path());
    let runner = FakeRunner::default();
    let console = RecordingConsole::default();

    let result = generate_project(
        &config,
        GenerateOptions::default(),
        &TemplateRegistry::new(),
        &runner,
        &console,
    );

    assert!(matches!(result, Err(Error::TemplateNotFound { .. })));
    assert!(!temp.path().join("demo").exists());
}
