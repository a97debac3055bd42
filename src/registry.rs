//! Stack-to-template resolution.

use crate::config::Stack;
use crate::error::{Error, Result};
use crate::stacks;
use crate::template::{derive_subset, Template};

/// Root files a derived server-only template keeps alongside the server
/// subtree.
const EXPRESS_ROOT_FILES: [&str; 3] = ["README.md", ".gitignore", ".env.example"];

/// Stacks with a resolvable template, in listing order.
const REGISTERED: [Stack; 5] =
    [Stack::Mern, Stack::Pern, Stack::Nextjs, Stack::Flask, Stack::Express];

/// One line of `stackforge list` output.
#[derive(Debug, Clone)]
pub struct TemplateSummary {
    pub stack: Stack,
    pub name: &'static str,
    pub description: &'static str,
}

/// Owns template resolution for the process lifetime. Templates are
/// built per lookup and never mutated after a project is generated.
#[derive(Debug, Default)]
pub struct TemplateRegistry;

impl TemplateRegistry {
    pub fn new() -> Self {
        Self
    }

    /// Resolves the template for a stack.
    ///
    /// The express template is not independently authored: it is derived
    /// from the MERN server subtree on every resolution, so an extension
    /// of the MERN template can never leak a stale derived copy.
    pub fn resolve(&self, stack: Stack) -> Result<Template> {
        match stack {
            Stack::Mern => Ok(stacks::mern::template()),
            Stack::Pern => Ok(stacks::pern::template()),
            Stack::Nextjs => Ok(stacks::nextjs::template()),
            Stack::Flask => Ok(stacks::flask::template()),
            Stack::Express => Ok(derive_subset(
                stacks::mern::template(),
                "Express",
                "Express.js (Node.js Framework)",
                "server/",
                &EXPRESS_ROOT_FILES,
            )),
            Stack::Django => Err(Error::TemplateNotFound { stack: stack.to_string() }),
        }
    }

    /// Summaries of every resolvable template, in a fixed order.
    pub fn list(&self) -> Vec<TemplateSummary> {
        REGISTERED
            .iter()
            .filter_map(|&stack| {
                self.resolve(stack).ok().map(|template| TemplateSummary {
                    stack,
                    name: template.name,
                    description: template.description,
                })
            })
            .collect()
    }
}
