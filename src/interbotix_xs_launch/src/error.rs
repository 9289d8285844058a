//! Error types for interbotix_xs_launch

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SubstitutionError {
    #[error("Undefined launch configuration: '{0}'. Did you forget to declare it?")]
    UndefinedVariable(String),

    #[error(
        "Undefined environment variable: '{0}'. Make sure the variable is set in your environment."
    )]
    UndefinedEnvVar(String),

    #[error("Package '{0}' not found. Ensure the package is installed and sourced.")]
    PackageNotFound(String),

    #[error("Executable '{0}' not found on PATH")]
    ExecutableNotFound(String),

    #[error("Command execution failed: {0}")]
    CommandFailed(String),
}

#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("Substitution error: {0}")]
    Substitution(#[from] SubstitutionError),

    #[error("Argument '{name}' got value '{value}', expected one of: {}", .choices.join(", "))]
    InvalidChoice {
        name: String,
        value: String,
        choices: Vec<String>,
    },

    #[error("Required launch argument '{0}' was not provided and has no default")]
    RequiredArgument(String),

    #[error("Launch configurations referenced but not declared: {}", .0.join(", "))]
    MissingConfigurations(Vec<String>),

    #[error("Invalid params file {path}: {message}")]
    ParamsFile { path: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LaunchError>;
