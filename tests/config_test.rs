use std::path::PathBuf;

use stackforge::config::{
    validate_project_name, Features, ProjectConfig, Stack, TestingFramework,
};
use stackforge::error::Error;

fn build(name: &str, stack: Stack) -> stackforge::error::Result<ProjectConfig> {
    ProjectConfig::new(
        name.to_string(),
        "A demo project".to_string(),
        "Ada".to_string(),
        stack,
        Features::defaults_for(stack),
        PathBuf::from("/tmp"),
    )
}

#[test]
fn test_valid_names() {
    assert!(validate_project_name("my-app").is_ok());
    assert!(validate_project_name("app2").is_ok());
    assert!(validate_project_name("my.app").is_ok());
    assert!(validate_project_name("@scope/my-app").is_ok());
}

#[test]
fn test_empty_name_rejected() {
    match validate_project_name("") {
        Err(Error::InvalidProjectName(_)) => (),
        other => panic!("Expected InvalidProjectName, got {:?}", other),
    }
}

#[test]
fn test_uppercase_and_symbols_rejected() {
    assert!(validate_project_name("My_App!").is_err());
    assert!(validate_project_name("my app").is_err());
    assert!(validate_project_name("my/app").is_err());
    // The npm name shape does not actually admit underscores.
    assert!(validate_project_name("my_app").is_err());
}

#[test]
fn test_reserved_names_rejected() {
    match validate_project_name("node_modules") {
        Err(Error::InvalidProjectName(message)) => {
            assert!(message.contains("reserved"), "unexpected message: {}", message)
        }
        other => panic!("Expected InvalidProjectName, got {:?}", other),
    }
    assert!(validate_project_name("favicon.ico").is_err());
}

#[test]
fn test_overlong_name_rejected() {
    let name = "a".repeat(300);
    match validate_project_name(&name) {
        Err(Error::InvalidProjectName(message)) => {
            assert!(message.contains("214"), "unexpected message: {}", message)
        }
        other => panic!("Expected InvalidProjectName, got {:?}", other),
    }
}

#[test]
fn test_feature_defaults() {
    let defaults = Features::defaults_for(Stack::Mern);
    assert!(defaults.eslint);
    assert!(defaults.prettier);
    assert!(!defaults.docker);
    assert!(!defaults.github_actions);
    assert!(!defaults.typescript);
    assert_eq!(defaults.testing, TestingFramework::Jest);

    let defaults = Features::defaults_for(Stack::Flask);
    assert_eq!(defaults.testing, TestingFramework::Pytest);
}

#[test]
fn test_testing_choice_must_match_stack() {
    let mut features = Features::defaults_for(Stack::Mern);
    features.testing = TestingFramework::Pytest;
    let result = ProjectConfig::new(
        "demo".to_string(),
        String::new(),
        String::new(),
        Stack::Mern,
        features,
        PathBuf::from("/tmp"),
    );
    match result {
        Err(Error::InvalidConfiguration(_)) => (),
        other => panic!("Expected InvalidConfiguration, got {:?}", other),
    }

    let mut features = Features::defaults_for(Stack::Flask);
    features.testing = TestingFramework::Jest;
    let result = ProjectConfig::new(
        "demo".to_string(),
        String::new(),
        String::new(),
        Stack::Flask,
        features,
        PathBuf::from("/tmp"),
    );
    assert!(matches!(result, Err(Error::InvalidConfiguration(_))));
}

#[test]
fn test_stack_parsing() {
    let stack: Stack = "mern".parse().unwrap();
    assert_eq!(stack, Stack::Mern);
    let stack: Stack = "nextjs".parse().unwrap();
    assert_eq!(stack, Stack::Nextjs);

    match "rails".parse::<Stack>() {
        Err(Error::UnknownStack(name)) => assert_eq!(name, "rails"),
        other => panic!("Expected UnknownStack, got {:?}", other),
    }
}

#[test]
fn test_stack_ids_round_trip() {
    for stack in Stack::ALL {
        let parsed: Stack = stack.id().parse().unwrap();
        assert_eq!(parsed, stack);
    }
}

#[test]
fn test_project_path_and_pascal_name() {
    let config = build("my-app", Stack::Nextjs).unwrap();
    assert_eq!(config.project_path(), PathBuf::from("/tmp/my-app"));
    assert_eq!(config.pascal_name(), "MyApp");
}

#[test]
fn test_summary_lists_enabled_features() {
    let mut features = Features::defaults_for(Stack::Mern);
    features.typescript = true;
    features.docker = true;
    let config = ProjectConfig::new(
        "demo".to_string(),
        String::new(),
        String::new(),
        Stack::Mern,
        features,
        PathBuf::from("/tmp"),
    )
    .unwrap();

    let summary = config.summary();
    assert!(summary.contains("demo"));
    assert!(summary.contains("TypeScript"));
    assert!(summary.contains("Docker"));
    assert!(summary.contains("Jest"));
}
