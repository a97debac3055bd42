//! Interactive prompting for project configuration.

use std::path::PathBuf;

use dialoguer::{Confirm, Input, Select};

use crate::config::{
    validate_project_name, Features, ProjectConfig, Stack, TestingFramework,
};
use crate::console::Console;
use crate::error::{Error, Result};

/// Stacks offered in the interactive flow. Django is recognized as an
/// identifier but has no template yet, so it is not offered.
const PROMPT_STACKS: [Stack; 5] =
    [Stack::Mern, Stack::Pern, Stack::Nextjs, Stack::Flask, Stack::Express];

/// Collaborator answering individual questions, so the whole flow can be
/// driven by a scripted fake in tests.
pub trait Prompter {
    fn input(&self, prompt: &str, default: &str) -> Result<String>;
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool>;
    fn select(&self, prompt: &str, items: &[&str], default: usize) -> Result<usize>;
}

/// Dialoguer-backed prompter.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn input(&self, prompt: &str, default: &str) -> Result<String> {
        Input::new()
            .with_prompt(prompt)
            .default(default.to_string())
            .allow_empty(true)
            .interact_text()
            .map_err(|e| Error::PromptError(e.to_string()))
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(|e| Error::PromptError(e.to_string()))
    }

    fn select(&self, prompt: &str, items: &[&str], default: usize) -> Result<usize> {
        Select::new()
            .with_prompt(prompt)
            .items(items)
            .default(default)
            .interact()
            .map_err(|e| Error::PromptError(e.to_string()))
    }
}

/// Runs the interactive flow: name (re-asked until valid), description,
/// author, stack, feature flags, testing framework, then a summary with a
/// final confirmation. Returns `None` when the user declines.
pub fn prompt_project_config(
    prompt: &dyn Prompter,
    console: &dyn Console,
    initial_name: Option<String>,
    base_path: PathBuf,
) -> Result<Option<ProjectConfig>> {
    console.title("Let's create your project!");

    let name = loop {
        let answer =
            prompt.input("What is your project name?", initial_name.as_deref().unwrap_or("my-app"))?;
        match validate_project_name(&answer) {
            Ok(()) => break answer,
            Err(e) => console.error(&e.to_string()),
        }
    };

    let description = prompt.input("Project description?", "A new project")?;
    let author = prompt.input("Author name?", "")?;

    let stack_names: Vec<&str> = PROMPT_STACKS.iter().map(|s| s.display_name()).collect();
    let stack = PROMPT_STACKS[prompt.select("Select your tech stack:", &stack_names, 0)?];

    let typescript =
        if stack.supports_typescript() { prompt.confirm("Enable TypeScript?", true)? } else { false };
    let eslint = prompt.confirm("Add ESLint?", true)?;
    let prettier = prompt.confirm("Add Prettier?", true)?;
    let docker = prompt.confirm("Include Docker configuration?", false)?;
    let github_actions = prompt.confirm("Add GitHub Actions CI/CD?", false)?;

    let testing_choices: &[TestingFramework] = if stack.is_python() {
        &[TestingFramework::Pytest, TestingFramework::None]
    } else {
        &[TestingFramework::Jest, TestingFramework::Vitest, TestingFramework::None]
    };
    let testing_names: Vec<&str> = testing_choices.iter().map(|t| t.display_name()).collect();
    let testing = testing_choices[prompt.select("Testing framework?", &testing_names, 0)?];

    let config = ProjectConfig::new(
        name,
        description,
        author,
        stack,
        Features { typescript, eslint, prettier, docker, github_actions, testing },
        base_path,
    )?;

    console.title("Configuration Summary");
    console.plain(&config.summary());

    if prompt.confirm("Proceed with creation?", true)? {
        Ok(Some(config))
    } else {
        Ok(None)
    }
}
