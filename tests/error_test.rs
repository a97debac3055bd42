use std::io;

use stackforge::error::Error;

#[test]
fn test_io_error_conversion() {
    let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let error: Error = io_error.into();
    match error {
        Error::IoError(inner) => assert_eq!(inner.kind(), io::ErrorKind::NotFound),
        other => panic!("Expected IoError, got {:?}", other),
    }
}

#[test]
fn test_display_messages() {
    let error = Error::InvalidProjectName("bad name".to_string());
    assert_eq!(error.to_string(), "Invalid project name: bad name");

    let error = Error::UnknownStack("rails".to_string());
    assert_eq!(error.to_string(), "Unknown stack: 'rails'");

    let error = Error::DirectoryExists {
        path: "/tmp/demo".to_string(),
    };
    assert_eq!(error.to_string(), "Directory '/tmp/demo' already exists");

    let error = Error::TemplateNotFound {
        stack: "django".to_string(),
    };
    assert_eq!(error.to_string(), "No template registered for stack 'django'");

    let error = Error::DependencyInstallFailed("npm exited with status 1".to_string());
    assert_eq!(
        error.to_string(),
        "Failed to install dependencies: npm exited with status 1"
    );
}

#[test]
fn test_command_failed_display() {
    let error = Error::CommandFailed {
        program: "npm".to_string(),
        detail: "exit status: 1".to_string(),
    };
    assert_eq!(error.to_string(), "Command 'npm' failed: exit status: 1");
}
