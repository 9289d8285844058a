//! Substitution types

use std::fmt;
use std::path::PathBuf;

use crate::error::SubstitutionError;
use crate::substitution::command::Command;
use crate::substitution::context::LaunchContext;

/// Substitution enum representing a deferred launch expression
#[derive(Debug, Clone, PartialEq)]
pub enum Substitution {
    /// Plain text (no substitution)
    Text(String),
    /// $(var name) - Launch configuration variable
    LaunchConfiguration(String),
    /// $(env VAR [default]) - Environment variable with optional default
    EnvironmentVariable {
        name: String,
        default: Option<String>,
    },
    /// $(find-pkg-share package_name) - Find ROS 2 package share directory
    FindPackageShare(String),
    /// $(find-exec name) - Find an executable on PATH
    FindExecutable(String),
    /// Path components joined with the platform separator
    PathJoin(Vec<Substitution>),
    /// $(command ...) - Output of a shell command
    Command(Command),
}

impl Substitution {
    pub fn text(s: impl Into<String>) -> Self {
        Substitution::Text(s.into())
    }

    pub fn var(name: impl Into<String>) -> Self {
        Substitution::LaunchConfiguration(name.into())
    }

    pub fn env(name: impl Into<String>) -> Self {
        Substitution::EnvironmentVariable {
            name: name.into(),
            default: None,
        }
    }

    /// Resolve substitution to string value
    pub fn resolve(&self, context: &LaunchContext) -> Result<String, SubstitutionError> {
        match self {
            Substitution::Text(s) => Ok(s.clone()),
            Substitution::LaunchConfiguration(name) => context
                .get_configuration(name)
                .ok_or_else(|| SubstitutionError::UndefinedVariable(name.clone())),
            Substitution::EnvironmentVariable { name, default } => {
                context.get_env(name).or_else(|| default.clone()).ok_or_else(|| {
                    SubstitutionError::UndefinedEnvVar(name.clone())
                })
            }
            Substitution::FindPackageShare(package) => match context.find_package_share(package) {
                Some(path) => Ok(path.display().to_string()),
                None if context.dry_run() => {
                    log::debug!("Package '{}' not found, rendering placeholder", package);
                    Ok(self.to_string())
                }
                None => Err(SubstitutionError::PackageNotFound(package.clone())),
            },
            Substitution::FindExecutable(name) => match context.find_executable(name) {
                Some(path) => Ok(path.display().to_string()),
                None if context.dry_run() => {
                    log::debug!("Executable '{}' not found, rendering placeholder", name);
                    Ok(self.to_string())
                }
                None => Err(SubstitutionError::ExecutableNotFound(name.clone())),
            },
            Substitution::PathJoin(parts) => {
                let mut path = PathBuf::new();
                for part in parts {
                    path.push(part.resolve(context)?);
                }
                Ok(path.display().to_string())
            }
            Substitution::Command(command) => {
                if context.dry_run() {
                    command.resolve(context)
                } else {
                    command.execute(context)
                }
            }
        }
    }

    /// Names of the launch configurations this substitution reads, in order
    pub fn configurations(&self) -> Vec<&str> {
        let mut names = Vec::new();
        self.collect_configurations(&mut names);
        names
    }

    pub(crate) fn collect_configurations<'a>(&'a self, names: &mut Vec<&'a str>) {
        match self {
            Substitution::LaunchConfiguration(name) => {
                if !names.contains(&name.as_str()) {
                    names.push(name);
                }
            }
            Substitution::PathJoin(parts) => {
                for part in parts {
                    part.collect_configurations(names);
                }
            }
            Substitution::Command(command) => {
                for part in command.parts() {
                    part.collect_configurations(names);
                }
            }
            Substitution::Text(_)
            | Substitution::EnvironmentVariable { .. }
            | Substitution::FindPackageShare(_)
            | Substitution::FindExecutable(_) => {}
        }
    }
}

impl fmt::Display for Substitution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Substitution::Text(s) => f.write_str(s),
            Substitution::LaunchConfiguration(name) => write!(f, "$(var {})", name),
            Substitution::EnvironmentVariable {
                name,
                default: Some(default),
            } => write!(f, "$(env {} {})", name, default),
            Substitution::EnvironmentVariable {
                name,
                default: None,
            } => write!(f, "$(env {})", name),
            Substitution::FindPackageShare(package) => write!(f, "$(find-pkg-share {})", package),
            Substitution::FindExecutable(name) => write!(f, "$(find-exec {})", name),
            Substitution::PathJoin(parts) => {
                for (i, part) in parts.iter().enumerate() {
                    if i > 0 {
                        f.write_str("/")?;
                    }
                    write!(f, "{}", part)?;
                }
                Ok(())
            }
            Substitution::Command(command) => write!(f, "$(command {})", command),
        }
    }
}

impl From<&str> for Substitution {
    fn from(s: &str) -> Self {
        Substitution::Text(s.to_string())
    }
}

impl From<String> for Substitution {
    fn from(s: String) -> Self {
        Substitution::Text(s)
    }
}

impl From<Command> for Substitution {
    fn from(command: Command) -> Self {
        Substitution::Command(command)
    }
}

/// Resolve list of substitutions to single string
pub fn resolve_substitutions(
    subs: &[Substitution],
    context: &LaunchContext,
) -> Result<String, SubstitutionError> {
    let mut result = String::new();
    for sub in subs {
        result.push_str(&sub.resolve(context)?);
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn isolated_context() -> LaunchContext {
        let mut context = LaunchContext::new();
        context.set_environment(HashMap::new());
        context
    }

    #[test]
    fn test_text_substitution() {
        let sub = Substitution::Text("hello".to_string());
        let context = LaunchContext::new();
        assert_eq!(sub.resolve(&context).unwrap(), "hello");
    }

    #[test]
    fn test_launch_configuration() {
        let sub = Substitution::var("my_var");
        let mut context = LaunchContext::new();
        context.set_configuration("my_var".to_string(), "value123".to_string());
        assert_eq!(sub.resolve(&context).unwrap(), "value123");
    }

    #[test]
    fn test_undefined_variable() {
        let sub = Substitution::var("undefined");
        let context = LaunchContext::new();
        assert!(matches!(
            sub.resolve(&context),
            Err(SubstitutionError::UndefinedVariable(name)) if name == "undefined"
        ));
    }

    #[test]
    fn test_env_var() {
        let mut context = LaunchContext::new();
        context.set_environment(HashMap::from([(
            "TEST_VAR".to_string(),
            "test_value".to_string(),
        )]));
        let sub = Substitution::env("TEST_VAR");
        assert_eq!(sub.resolve(&context).unwrap(), "test_value");
    }

    #[test]
    fn test_env_var_with_default() {
        let sub = Substitution::EnvironmentVariable {
            name: "NONEXISTENT_VAR".to_string(),
            default: Some("default_value".to_string()),
        };
        assert_eq!(sub.resolve(&isolated_context()).unwrap(), "default_value");
    }

    #[test]
    fn test_env_var_missing() {
        let sub = Substitution::env("NONEXISTENT_VAR");
        assert!(matches!(
            sub.resolve(&isolated_context()),
            Err(SubstitutionError::UndefinedEnvVar(_))
        ));
    }

    #[test]
    fn test_path_join() {
        let mut context = isolated_context();
        context.set_package_share("pkg".to_string(), PathBuf::from("/share/pkg"));
        context.set_configuration("robot_model".to_string(), "wx200".to_string());
        let sub = Substitution::PathJoin(vec![
            Substitution::FindPackageShare("pkg".to_string()),
            Substitution::text("urdf"),
            Substitution::var("robot_model"),
        ]);
        assert_eq!(sub.resolve(&context).unwrap(), "/share/pkg/urdf/wx200");
    }

    #[test]
    fn test_missing_package_is_error() {
        let sub = Substitution::FindPackageShare("no_such_pkg".to_string());
        assert!(matches!(
            sub.resolve(&isolated_context()),
            Err(SubstitutionError::PackageNotFound(_))
        ));
    }

    #[test]
    fn test_dry_run_renders_placeholders() {
        let mut context = isolated_context();
        context.set_dry_run(true);
        let pkg = Substitution::FindPackageShare("no_such_pkg".to_string());
        let exe = Substitution::FindExecutable("xacro".to_string());
        assert_eq!(pkg.resolve(&context).unwrap(), "$(find-pkg-share no_such_pkg)");
        assert_eq!(exe.resolve(&context).unwrap(), "$(find-exec xacro)");
    }

    #[test]
    fn test_display() {
        let sub = Substitution::PathJoin(vec![
            Substitution::FindPackageShare("pkg".to_string()),
            Substitution::text("urdf"),
            Substitution::var("robot_model"),
        ]);
        assert_eq!(sub.to_string(), "$(find-pkg-share pkg)/urdf/$(var robot_model)");
    }

    #[test]
    fn test_configurations_deduplicated() {
        let sub = Substitution::PathJoin(vec![
            Substitution::var("a"),
            Substitution::var("b"),
            Substitution::var("a"),
        ]);
        assert_eq!(sub.configurations(), vec!["a", "b"]);
    }

    #[test]
    fn test_resolve_multiple() {
        let subs = vec![
            Substitution::text("Hello "),
            Substitution::var("name"),
            Substitution::text("!"),
        ];
        let mut context = LaunchContext::new();
        context.set_configuration("name".to_string(), "World".to_string());
        assert_eq!(
            resolve_substitutions(&subs, &context).unwrap(),
            "Hello World!"
        );
    }
}
