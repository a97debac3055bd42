//! Template data model: directory skeletons and renderable files.
//!
//! A [`Template`] owns one [`DirectoryStructure`] (the skeleton of
//! directories and empty placeholder files) and an ordered list of
//! [`TemplateFile`] entries. Content is a tagged variant: a literal string
//! or a pure function of the configuration. Rendering the same
//! configuration always yields identical bytes.

use indexmap::IndexMap;

use crate::config::ProjectConfig;

/// A node in a template's directory skeleton.
#[derive(Debug, Clone)]
pub enum Node {
    /// Empty placeholder file. A later [`TemplateFile`] with the same
    /// path overwrites it with real content.
    File,
    /// Nested directory.
    Dir(DirectoryStructure),
}

/// Ordered tree of directories and placeholder files.
///
/// Built from literal nested data at template-definition time, never from
/// user input, so it is a tree by construction.
#[derive(Debug, Clone, Default)]
pub struct DirectoryStructure {
    entries: IndexMap<String, Node>,
}

impl DirectoryStructure {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a nested directory.
    pub fn dir(mut self, name: &str, subtree: DirectoryStructure) -> Self {
        self.entries.insert(name.to_string(), Node::Dir(subtree));
        self
    }

    /// Adds an empty placeholder file.
    pub fn file(mut self, name: &str) -> Self {
        self.entries.insert(name.to_string(), Node::File);
        self
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.entries.iter().map(|(name, node)| (name.as_str(), node))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up a direct child directory by name.
    pub fn subtree(&self, name: &str) -> Option<&DirectoryStructure> {
        match self.entries.get(name) {
            Some(Node::Dir(subtree)) => Some(subtree),
            _ => None,
        }
    }
}

/// File content, either literal or computed from the configuration.
///
/// Computed content must be deterministic and side-effect free.
#[derive(Debug, Clone, Copy)]
pub enum FileContent {
    Literal(&'static str),
    Computed(fn(&ProjectConfig) -> String),
}

impl FileContent {
    /// Resolves the content to the exact bytes to write.
    pub fn resolve(&self, config: &ProjectConfig) -> String {
        match self {
            FileContent::Literal(text) => (*text).to_string(),
            FileContent::Computed(render) => render(config),
        }
    }
}

/// One renderable file: a target-relative path plus its content, with an
/// optional condition gating feature-flagged files.
#[derive(Debug, Clone)]
pub struct TemplateFile {
    pub path: String,
    pub content: FileContent,
    pub condition: Option<fn(&ProjectConfig) -> bool>,
}

impl TemplateFile {
    pub fn literal(path: &str, content: &'static str) -> Self {
        Self { path: path.to_string(), content: FileContent::Literal(content), condition: None }
    }

    pub fn computed(path: &str, render: fn(&ProjectConfig) -> String) -> Self {
        Self { path: path.to_string(), content: FileContent::Computed(render), condition: None }
    }

    /// Restricts the file to configurations satisfying `condition`.
    pub fn when(mut self, condition: fn(&ProjectConfig) -> bool) -> Self {
        self.condition = Some(condition);
        self
    }

    pub fn applies_to(&self, config: &ProjectConfig) -> bool {
        self.condition.map_or(true, |condition| condition(config))
    }
}

/// A complete project template for one stack. Constructed at resolution
/// time and read-only thereafter.
#[derive(Debug, Clone)]
pub struct Template {
    pub name: &'static str,
    pub description: &'static str,
    pub structure: DirectoryStructure,
    pub files: Vec<TemplateFile>,
}

/// Derives a server-only style template as a subset of `source`.
///
/// Keeps every file whose path lies under `prefix` (with the prefix
/// stripped) plus the fixed `root_files`, preserving declaration order,
/// and takes the matching structure subtree. Callers must re-derive from
/// the source template on every resolution; holding on to a derived copy
/// would go stale if the source template is later extended.
pub fn derive_subset(
    source: Template,
    name: &'static str,
    description: &'static str,
    prefix: &str,
    root_files: &[&str],
) -> Template {
    let subtree_name = prefix.trim_end_matches('/');
    let structure = source.structure.subtree(subtree_name).cloned().unwrap_or_default();

    let files = source
        .files
        .into_iter()
        .filter_map(|file| {
            if let Some(stripped) = file.path.strip_prefix(prefix) {
                Some(TemplateFile { path: stripped.to_string(), ..file })
            } else if root_files.contains(&file.path.as_str()) {
                Some(file)
            } else {
                None
            }
        })
        .collect();

    Template { name, description, structure, files }
}
