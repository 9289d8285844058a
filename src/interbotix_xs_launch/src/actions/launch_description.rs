//! Ordered collection of launch argument declarations

use std::collections::HashMap;

use crate::actions::DeclareLaunchArgument;
use crate::error::Result;
use crate::substitution::LaunchContext;

/// Launch description made of argument declarations, applied in order
#[derive(Debug, Clone)]
pub struct LaunchDescription {
    arguments: Vec<DeclareLaunchArgument>,
}

impl LaunchDescription {
    pub fn arguments(&self) -> &[DeclareLaunchArgument] {
        &self.arguments
    }

    pub fn get(&self, name: &str) -> Option<&DeclareLaunchArgument> {
        self.arguments.iter().find(|arg| arg.name == name)
    }

    /// Resolve every declaration into `context`
    ///
    /// Later declarations may reference earlier ones in their defaults.
    /// CLI arguments that match no declaration are ignored with a warning.
    pub fn resolve(
        &self,
        cli_args: &HashMap<String, String>,
        mut context: LaunchContext,
    ) -> Result<LaunchContext> {
        for name in cli_args.keys() {
            if self.get(name).is_none() {
                log::warn!("Ignoring undeclared launch argument '{}'", name);
            }
        }

        for argument in &self.arguments {
            argument.apply(&mut context, cli_args)?;
        }
        Ok(context)
    }

    /// Resolved `(name, value)` pairs in declaration order
    pub fn resolved_arguments(&self, context: &LaunchContext) -> Vec<(String, String)> {
        self.arguments
            .iter()
            .filter_map(|arg| {
                context
                    .get_configuration(&arg.name)
                    .map(|value| (arg.name.clone(), value))
            })
            .collect()
    }
}

impl Extend<DeclareLaunchArgument> for LaunchDescription {
    fn extend<T: IntoIterator<Item = DeclareLaunchArgument>>(&mut self, iter: T) {
        self.arguments.extend(iter);
    }
}

impl FromIterator<DeclareLaunchArgument> for LaunchDescription {
    fn from_iter<T: IntoIterator<Item = DeclareLaunchArgument>>(iter: T) -> Self {
        Self {
            arguments: iter.into_iter().collect(),
        }
    }
}
