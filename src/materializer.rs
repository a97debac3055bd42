//! Writes a resolved template to disk: skeleton first, then rendered files.

use std::fs;
use std::path::Path;

use log::debug;

use crate::config::ProjectConfig;
use crate::error::{Error, Result};
use crate::template::{DirectoryStructure, Node, Template};

/// Materializes templates into fresh target directories.
///
/// Holds no state across calls; each invocation is an independent
/// transformation of (target path, template, configuration) into
/// filesystem writes.
#[derive(Debug, Default)]
pub struct Materializer;

impl Materializer {
    pub fn new() -> Self {
        Self
    }

    /// Creates the directory skeleton, then renders every template file
    /// in declared order under `target`.
    ///
    /// Fails with [`Error::DirectoryExists`] before any write if `target`
    /// already exists as a file or directory. The existence check is not
    /// atomic with the subsequent writes; two simultaneous invocations
    /// against the same path are not a supported scenario.
    ///
    /// Any I/O failure aborts immediately and leaves the partially
    /// written tree in place; there is no rollback.
    pub fn materialize(
        &self,
        target: &Path,
        template: &Template,
        config: &ProjectConfig,
    ) -> Result<()> {
        if target.exists() {
            return Err(Error::DirectoryExists { path: target.display().to_string() });
        }

        debug!("Creating project skeleton in '{}'", target.display());
        fs::create_dir_all(target)?;
        create_structure(target, &template.structure)?;

        // Later entries may overwrite earlier ones by path coincidence;
        // the declared order is preserved, never deduplicated.
        for file in &template.files {
            if !file.applies_to(config) {
                debug!("Skipping '{}' (condition not met)", file.path);
                continue;
            }
            let content = file.content.resolve(config);
            write_file(&target.join(&file.path), &content)?;
            debug!("Wrote '{}'", file.path);
        }
        Ok(())
    }
}

/// Recursively creates directories and empty placeholder files.
fn create_structure(base: &Path, structure: &DirectoryStructure) -> Result<()> {
    for (name, node) in structure.entries() {
        let path = base.join(name);
        match node {
            Node::File => {
                fs::File::create(&path)?;
            }
            Node::Dir(subtree) => {
                fs::create_dir_all(&path)?;
                create_structure(&path, subtree)?;
            }
        }
    }
    Ok(())
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}
