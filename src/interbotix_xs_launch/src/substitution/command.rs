//! Deferred shell commands built from substitutions

use std::fmt;
use std::process;

use crate::error::{LaunchError, SubstitutionError};
use crate::substitution::context::LaunchContext;
use crate::substitution::types::{resolve_substitutions, Substitution};

/// How a failing command is reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommandErrorMode {
    /// Fail the substitution
    #[default]
    Strict,
    /// Log a warning and use whatever the command printed
    Warn,
    /// Use whatever the command printed
    Ignore,
}

/// A command line assembled from substitutions, run when evaluated
///
/// The resolved parts are concatenated in order; the result is split into
/// shell words giving the program and its arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    parts: Vec<Substitution>,
    error_mode: CommandErrorMode,
}

impl Command {
    pub fn new(parts: Vec<Substitution>) -> Self {
        Self {
            parts,
            error_mode: CommandErrorMode::Strict,
        }
    }

    pub fn with_error_mode(mut self, error_mode: CommandErrorMode) -> Self {
        self.error_mode = error_mode;
        self
    }

    pub fn parts(&self) -> &[Substitution] {
        &self.parts
    }

    /// Launch configurations read by this command, first occurrence first
    pub fn configurations(&self) -> Vec<&str> {
        let mut names = Vec::new();
        for part in &self.parts {
            part.collect_configurations(&mut names);
        }
        names
    }

    /// Keys of the `key:=value` tokens, in command-line order
    pub fn xacro_arguments(&self) -> Vec<&str> {
        self.parts
            .iter()
            .filter_map(|part| match part {
                Substitution::Text(text) => text.trim_start().strip_suffix(":="),
                _ => None,
            })
            .collect()
    }

    /// Configurations this command reads that the context does not hold
    pub fn missing_configurations(&self, context: &LaunchContext) -> Vec<String> {
        self.configurations()
            .into_iter()
            .filter(|name| !context.has_configuration(name))
            .map(str::to_string)
            .collect()
    }

    /// Fail with every missing configuration named, before anything is resolved
    pub fn check_configurations(&self, context: &LaunchContext) -> Result<(), LaunchError> {
        let missing = self.missing_configurations(context);
        if missing.is_empty() {
            Ok(())
        } else {
            Err(LaunchError::MissingConfigurations(missing))
        }
    }

    /// Resolve to the command line text without running it
    pub fn resolve(&self, context: &LaunchContext) -> Result<String, SubstitutionError> {
        resolve_substitutions(&self.parts, context)
    }

    /// Run the command and return its standard output
    pub fn execute(&self, context: &LaunchContext) -> Result<String, SubstitutionError> {
        let command_line = self.resolve(context)?;
        let words = shlex::split(&command_line).ok_or_else(|| {
            SubstitutionError::CommandFailed(format!(
                "unbalanced quotes in '{}'",
                command_line.trim()
            ))
        })?;
        let (program, args) = words
            .split_first()
            .ok_or_else(|| SubstitutionError::CommandFailed("empty command".to_string()))?;

        log::debug!("Executing command: {}", command_line);

        let output = match process::Command::new(program).args(args).output() {
            Ok(output) => output,
            Err(e) => {
                return self.handle_failure(
                    format!("failed to spawn '{}': {}", program, e),
                    String::new(),
                );
            }
        };

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        if output.status.success() {
            Ok(stdout)
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            self.handle_failure(
                format!(
                    "'{}' exited with {}: {}",
                    command_line.trim(),
                    output.status,
                    stderr.trim()
                ),
                stdout,
            )
        }
    }

    fn handle_failure(&self, message: String, stdout: String) -> Result<String, SubstitutionError> {
        match self.error_mode {
            CommandErrorMode::Strict => Err(SubstitutionError::CommandFailed(message)),
            CommandErrorMode::Warn => {
                log::warn!("Command failed: {}", message);
                Ok(stdout)
            }
            CommandErrorMode::Ignore => Ok(stdout),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for part in &self.parts {
            write!(f, "{}", part)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn echo_command() -> Command {
        Command::new(vec![
            Substitution::FindExecutable("xacro".to_string()),
            Substitution::text(" "),
            Substitution::text("model.urdf.xacro "),
            Substitution::text("robot_name:="),
            Substitution::var("robot_name"),
            Substitution::text(" "),
            Substitution::text("use_gripper:="),
            Substitution::var("use_gripper"),
            Substitution::text(" "),
        ])
    }

    fn context_with_echo() -> LaunchContext {
        let mut context = LaunchContext::new();
        context.set_executable("xacro".to_string(), PathBuf::from("echo"));
        context.set_configuration("robot_name".to_string(), "wx200".to_string());
        context.set_configuration("use_gripper".to_string(), "true".to_string());
        context
    }

    #[test]
    fn test_configurations_and_arguments() {
        let command = echo_command();
        assert_eq!(command.configurations(), vec!["robot_name", "use_gripper"]);
        assert_eq!(command.xacro_arguments(), vec!["robot_name", "use_gripper"]);
    }

    #[test]
    fn test_missing_configurations() {
        let mut context = LaunchContext::new();
        context.set_configuration("robot_name".to_string(), "wx200".to_string());
        let command = echo_command();
        assert_eq!(command.missing_configurations(&context), vec!["use_gripper"]);

        let err = command.check_configurations(&context).unwrap_err();
        assert!(err.to_string().contains("use_gripper"));
    }

    #[test]
    fn test_resolve_command_line() {
        let line = echo_command().resolve(&context_with_echo()).unwrap();
        assert_eq!(line, "echo model.urdf.xacro robot_name:=wx200 use_gripper:=true ");
    }

    #[test]
    fn test_display() {
        assert_eq!(
            echo_command().to_string(),
            "$(find-exec xacro) model.urdf.xacro robot_name:=$(var robot_name) use_gripper:=$(var use_gripper) "
        );
    }

    #[test]
    fn test_execute_returns_stdout() {
        let output = echo_command().execute(&context_with_echo()).unwrap();
        assert_eq!(output.trim(), "model.urdf.xacro robot_name:=wx200 use_gripper:=true");
    }

    #[test]
    fn test_execute_failure_modes() {
        let mut context = LaunchContext::new();
        context.set_environment(HashMap::new());
        context.set_executable("xacro".to_string(), PathBuf::from("false"));
        let command = Command::new(vec![Substitution::FindExecutable("xacro".to_string())]);

        assert!(matches!(
            command.execute(&context),
            Err(SubstitutionError::CommandFailed(_))
        ));
        assert_eq!(
            command
                .clone()
                .with_error_mode(CommandErrorMode::Warn)
                .execute(&context)
                .unwrap(),
            ""
        );
        assert_eq!(
            command
                .with_error_mode(CommandErrorMode::Ignore)
                .execute(&context)
                .unwrap(),
            ""
        );
    }

    fn printf_context(external_urdf_loc: &str) -> LaunchContext {
        let mut context = LaunchContext::new();
        context.set_executable("xacro".to_string(), PathBuf::from("printf"));
        context.set_configuration(
            "external_urdf_loc".to_string(),
            external_urdf_loc.to_string(),
        );
        context
    }

    fn printf_command() -> Command {
        // One output line per argument
        Command::new(vec![
            Substitution::FindExecutable("xacro".to_string()),
            Substitution::text(" '%s\\n' model.urdf.xacro "),
            Substitution::text("external_urdf_loc:="),
            Substitution::var("external_urdf_loc"),
            Substitution::text(" "),
        ])
    }

    #[test]
    fn test_execute_splits_shell_words() {
        let context = printf_context("'/home/u/my robot/x.urdf.xacro'");
        let output = printf_command().execute(&context).unwrap();
        assert_eq!(
            output.lines().collect::<Vec<_>>(),
            vec![
                "model.urdf.xacro",
                "external_urdf_loc:=/home/u/my robot/x.urdf.xacro",
            ]
        );
    }

    #[test]
    fn test_execute_unbalanced_quotes() {
        let context = printf_context("'/home/u/my robot");
        let result = printf_command().execute(&context);
        assert!(matches!(
            result,
            Err(SubstitutionError::CommandFailed(message)) if message.contains("unbalanced quotes")
        ));
    }

    #[test]
    fn test_execute_missing_program() {
        let mut context = LaunchContext::new();
        context.set_executable(
            "xacro".to_string(),
            PathBuf::from("/nonexistent/bin/xacro"),
        );
        let command = Command::new(vec![Substitution::FindExecutable("xacro".to_string())]);
        assert!(matches!(
            command.execute(&context),
            Err(SubstitutionError::CommandFailed(_))
        ));
    }

    #[test]
    fn test_empty_command() {
        let command = Command::new(vec![Substitution::text("   ")]);
        assert!(command.execute(&LaunchContext::new()).is_err());
    }
}
