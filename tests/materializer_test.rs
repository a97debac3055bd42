use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use walkdir::WalkDir;

use stackforge::config::{Features, ProjectConfig, Stack};
use stackforge::error::Error;
use stackforge::materializer::Materializer;
use stackforge::registry::TemplateRegistry;
use stackforge::template::{DirectoryStructure, Node, Template, TemplateFile};

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

fn structure_files(structure: &DirectoryStructure, prefix: &str, out: &mut BTreeSet<String>) {
    for (name, node) in structure.entries() {
        let path = if prefix.is_empty() { name.to_string() } else { format!("{}/{}", prefix, name) };
        match node {
            Node::File => {
                out.insert(path);
            }
            Node::Dir(subtree) => structure_files(subtree, &path, out),
        }
    }
}

fn files_on_disk(root: &Path) -> BTreeSet<String> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| {
            entry
                .path()
                .strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .into_owned()
        })
        .collect()
}

#[test]
fn test_materializes_exactly_the_declared_files() {
    let temp = TempDir::new().unwrap();
    let config = config_for(Stack::Nextjs, temp.path());
    let template = TemplateRegistry::new().resolve(Stack::Nextjs).unwrap();
    let target = config.project_path();

    Materializer::new().materialize(&target, &template, &config).unwrap();

    let package_json = fs::read_to_string(target.join("package.json")).unwrap();
    assert!(package_json.contains("\"name\": \"demo\""));
    let page = fs::read_to_string(target.join("src/app/page.tsx")).unwrap();
    assert!(page.contains("Demo"));
    assert!(!fs::read_to_string(target.join(".gitignore")).unwrap().is_empty());

    let mut expected = BTreeSet::new();
    structure_files(&template.structure, "", &mut expected);
    for file in template.files.iter().filter(|file| file.applies_to(&config)) {
        expected.insert(file.path.clone());
    }
    assert_eq!(files_on_disk(&target), expected);
}

#[test]
fn test_refuses_existing_directory() {
    let temp = TempDir::new().unwrap();
    let config = config_for(Stack::Nextjs, temp.path());
    let template = TemplateRegistry::new().resolve(Stack::Nextjs).unwrap();
    let target = config.project_path();
    fs::create_dir_all(&target).unwrap();

    match Materializer::new().materialize(&target, &template, &config) {
        Err(Error::DirectoryExists { path }) => assert!(path.ends_with("demo")),
        other => panic!("Expected DirectoryExists, got {:?}", other),
    }
    // Nothing was written into the pre-existing directory.
    assert_eq!(fs::read_dir(&target).unwrap().count(), 0);
}

#[test]
fn test_refuses_existing_file_at_target() {
    let temp = TempDir::new().unwrap();
    let config = config_for(Stack::Nextjs, temp.path());
    let template = TemplateRegistry::new().resolve(Stack::Nextjs).unwrap();
    let target = config.project_path();
    fs::write(&target, "occupied").unwrap();

    assert!(matches!(
        Materializer::new().materialize(&target, &template, &config),
        Err(Error::DirectoryExists { .. })
    ));
    assert_eq!(fs::read_to_string(&target).unwrap(), "occupied");
}

#[test]
fn test_placeholders_are_overwritten_by_declared_content() {
    let temp = TempDir::new().unwrap();
    let config = config_for(Stack::Flask, temp.path());
    let template = TemplateRegistry::new().resolve(Stack::Flask).unwrap();
    let target = config.project_path();

    Materializer::new().materialize(&target, &template, &config).unwrap();

    // Declared in the skeleton as an empty placeholder, then rendered.
    let routes = fs::read_to_string(target.join("app/routes/main.py")).unwrap();
    assert!(routes.contains("Welcome to demo API!"));
    let app_init = fs::read_to_string(target.join("app/__init__.py")).unwrap();
    assert!(app_init.contains("create_app"));
    // Placeholders without a content entry stay empty.
    assert_eq!(fs::read_to_string(target.join("app/models/__init__.py")).unwrap(), "");
}

#[test]
fn test_later_entries_overwrite_earlier_ones() {
    let temp = TempDir::new().unwrap();
    let config = config_for(Stack::Nextjs, temp.path());
    let template = Template {
        name: "Manual",
        description: "hand-built",
        structure: DirectoryStructure::new(),
        files: vec![
            TemplateFile::literal("notes.txt", "first"),
            TemplateFile::literal("notes.txt", "second"),
        ],
    };
    let target: PathBuf = temp.path().join("manual");

    Materializer::new().materialize(&target, &template, &config).unwrap();
    assert_eq!(fs::read_to_string(target.join("notes.txt")).unwrap(), "second");
}

#[test]
fn test_creates_parent_directories_for_nested_files() {
    let temp = TempDir::new().unwrap();
    let mut features = Features::defaults_for(Stack::Nextjs);
    features.github_actions = true;
    let config = ProjectConfig::new(
        "demo".to_string(),
        String::new(),
        String::new(),
        Stack::Nextjs,
        features,
        temp.path().to_path_buf(),
    )
    .unwrap();
    let template = TemplateRegistry::new().resolve(Stack::Nextjs).unwrap();
    let target = config.project_path();

    Materializer::new().materialize(&target, &template, &config).unwrap();
    // .github/workflows is not part of the skeleton; it comes from the
    // file's own parent creation.
    assert!(target.join(".github/workflows/ci.yml").is_file());
}
