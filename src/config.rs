//! Validated, immutable project configuration.
//!
//! A [`ProjectConfig`] fully describes what to generate: a validated
//! package-style name, the chosen stack, and the feature flags. Invalid
//! configurations are rejected here, before any filesystem effect occurs.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::OnceLock;

use cruet::Inflector;
use regex::Regex;

use crate::error::{Error, Result};

/// Names that can never be used as a project name.
const RESERVED_NAMES: [&str; 2] = ["node_modules", "favicon.ico"];

/// npm's package name length limit.
const MAX_NAME_LENGTH: usize = 214;

/// The supported technology stacks.
///
/// `express` has no authored template of its own; it is derived from the
/// MERN server subtree at resolution time. `django` is recognized as an
/// identifier but currently has no template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stack {
    Mern,
    Pern,
    Nextjs,
    Flask,
    Express,
    Django,
}

impl Stack {
    pub const ALL: [Stack; 6] = [
        Stack::Mern,
        Stack::Pern,
        Stack::Nextjs,
        Stack::Flask,
        Stack::Express,
        Stack::Django,
    ];

    /// Short identifier used on the command line.
    pub fn id(&self) -> &'static str {
        match self {
            Stack::Mern => "mern",
            Stack::Pern => "pern",
            Stack::Nextjs => "nextjs",
            Stack::Flask => "flask",
            Stack::Express => "express",
            Stack::Django => "django",
        }
    }

    /// Human-readable name shown in prompts and listings.
    pub fn display_name(&self) -> &'static str {
        match self {
            Stack::Mern => "MERN (MongoDB, Express, React, Node.js)",
            Stack::Pern => "PERN (PostgreSQL, Express, React, Node.js)",
            Stack::Nextjs => "Next.js (React Framework with SSR)",
            Stack::Flask => "Flask (Python Web Framework)",
            Stack::Express => "Express.js (Node.js Framework)",
            Stack::Django => "Django (Python Web Framework)",
        }
    }

    pub fn supports_typescript(&self) -> bool {
        matches!(self, Stack::Mern | Stack::Pern | Stack::Nextjs | Stack::Express)
    }

    pub fn is_python(&self) -> bool {
        matches!(self, Stack::Flask | Stack::Django)
    }

    /// Split stacks have independent client and server roots.
    pub fn is_split(&self) -> bool {
        matches!(self, Stack::Mern | Stack::Pern)
    }

    /// The native test runner for the stack.
    pub fn default_testing(&self) -> TestingFramework {
        if self.is_python() {
            TestingFramework::Pytest
        } else {
            TestingFramework::Jest
        }
    }
}

impl fmt::Display for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Stack {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "mern" => Ok(Stack::Mern),
            "pern" => Ok(Stack::Pern),
            "nextjs" => Ok(Stack::Nextjs),
            "flask" => Ok(Stack::Flask),
            "express" => Ok(Stack::Express),
            "django" => Ok(Stack::Django),
            other => Err(Error::UnknownStack(other.to_string())),
        }
    }
}

/// Testing framework choices offered during configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestingFramework {
    Jest,
    Vitest,
    Pytest,
    None,
}

impl TestingFramework {
    pub fn id(&self) -> &'static str {
        match self {
            TestingFramework::Jest => "jest",
            TestingFramework::Vitest => "vitest",
            TestingFramework::Pytest => "pytest",
            TestingFramework::None => "none",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TestingFramework::Jest => "Jest",
            TestingFramework::Vitest => "Vitest",
            TestingFramework::Pytest => "Pytest",
            TestingFramework::None => "None",
        }
    }
}

/// Optional feature flags for a generated project.
#[derive(Debug, Clone)]
pub struct Features {
    pub typescript: bool,
    pub eslint: bool,
    pub prettier: bool,
    pub docker: bool,
    pub github_actions: bool,
    pub testing: TestingFramework,
}

impl Features {
    /// The fixed default table: linter and formatter on, containerization
    /// and CI off, testing set to the stack's native runner.
    pub fn defaults_for(stack: Stack) -> Self {
        Self {
            typescript: false,
            eslint: true,
            prettier: true,
            docker: false,
            github_actions: false,
            testing: stack.default_testing(),
        }
    }
}

/// Immutable description of what to generate. Constructed only through
/// [`ProjectConfig::new`], which performs all validation.
#[derive(Debug, Clone)]
pub struct ProjectConfig {
    pub name: String,
    pub description: String,
    pub author: String,
    pub stack: Stack,
    pub features: Features,
    /// Base directory in which the project directory is created.
    pub path: PathBuf,
}

impl ProjectConfig {
    pub fn new(
        name: String,
        description: String,
        author: String,
        stack: Stack,
        features: Features,
        path: PathBuf,
    ) -> Result<Self> {
        validate_project_name(&name)?;
        validate_testing_choice(stack, features.testing)?;
        Ok(Self { name, description, author, stack, features, path })
    }

    /// Target directory for the generated project.
    pub fn project_path(&self) -> PathBuf {
        self.path.join(&self.name)
    }

    /// PascalCase form of the project name, used in page titles and
    /// component names inside the generated sources.
    pub fn pascal_name(&self) -> String {
        self.name.to_pascal_case()
    }

    /// Multi-line summary shown before the final confirmation prompt.
    pub fn summary(&self) -> String {
        let mut features: Vec<&str> = Vec::new();
        if self.features.typescript {
            features.push("TypeScript");
        }
        if self.features.eslint {
            features.push("ESLint");
        }
        if self.features.prettier {
            features.push("Prettier");
        }
        if self.features.docker {
            features.push("Docker");
        }
        if self.features.github_actions {
            features.push("GitHub Actions");
        }
        if self.features.testing != TestingFramework::None {
            features.push(self.features.testing.display_name());
        }

        let features = if features.is_empty() { "None".to_string() } else { features.join(", ") };
        format!(
            "  Name: {}\n  Stack: {}\n  Features: {}",
            self.name,
            self.stack.display_name(),
            features
        )
    }
}

fn name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // npm package name shape, with an optional @scope/ prefix.
    PATTERN.get_or_init(|| {
        Regex::new(r"^(?:@[a-z0-9\-*~][a-z0-9\-*._~]*/)?[a-z0-9\-~][a-z0-9\-._~]*$").unwrap()
    })
}

/// Checks a project name against the package-name rules: non-empty, at
/// most 214 characters, matching the npm package name shape (optionally
/// `@scope/` prefixed), and not a reserved name.
pub fn validate_project_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::InvalidProjectName("project name cannot be empty".to_string()));
    }
    if name.len() > MAX_NAME_LENGTH {
        return Err(Error::InvalidProjectName(format!(
            "project name must be at most {} characters",
            MAX_NAME_LENGTH
        )));
    }
    if !name_pattern().is_match(name) {
        return Err(Error::InvalidProjectName(
            "project name must contain only lowercase letters, numbers, hyphens, and underscores"
                .to_string(),
        ));
    }
    if RESERVED_NAMES.contains(&name.to_lowercase().as_str()) {
        return Err(Error::InvalidProjectName(format!(
            "'{}' is a reserved name and cannot be used",
            name
        )));
    }
    Ok(())
}

fn validate_testing_choice(stack: Stack, testing: TestingFramework) -> Result<()> {
    match testing {
        TestingFramework::Pytest if !stack.is_python() => Err(Error::InvalidConfiguration(
            format!("pytest is not available for the {} stack", stack),
        )),
        TestingFramework::Jest | TestingFramework::Vitest if stack.is_python() => {
            Err(Error::InvalidConfiguration(format!(
                "{} is not available for the {} stack",
                testing.id(),
                stack
            )))
        }
        _ => Ok(()),
    }
}
