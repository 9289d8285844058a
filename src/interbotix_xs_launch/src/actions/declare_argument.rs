//! Declare argument action for argument metadata and validation

use std::collections::HashMap;

use crate::error::{LaunchError, Result};
use crate::substitution::{resolve_substitutions, Command, LaunchContext, Substitution};

/// A named launch argument with an optional default and choice set
#[derive(Debug, Clone, PartialEq)]
pub struct DeclareLaunchArgument {
    pub name: String,
    pub default: Option<Vec<Substitution>>,
    pub description: Option<String>,
    pub choices: Option<Vec<String>>,
}

impl DeclareLaunchArgument {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default: None,
            description: None,
            choices: None,
        }
    }

    pub fn default_value(mut self, value: impl Into<Substitution>) -> Self {
        self.default = Some(vec![value.into()]);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn choices(mut self, choices: &[&str]) -> Self {
        self.choices = Some(choices.iter().map(|c| c.to_string()).collect());
        self
    }

    /// The command behind the default value, if the default is a single command
    pub fn default_command(&self) -> Option<&Command> {
        match self.default.as_deref() {
            Some([Substitution::Command(command)]) => Some(command),
            _ => None,
        }
    }

    /// Resolve the default, failing fast if a default command reads undeclared arguments
    pub fn resolve_default(&self, context: &LaunchContext) -> Result<Option<String>> {
        if let Some(command) = self.default_command() {
            command.check_configurations(context)?;
        }
        match &self.default {
            Some(subs) => Ok(Some(resolve_substitutions(subs, context)?)),
            None => Ok(None),
        }
    }

    /// Check a value against the declared choices
    pub fn validate(&self, value: &str) -> Result<()> {
        match &self.choices {
            Some(choices) if !choices.iter().any(|c| c == value) => {
                Err(LaunchError::InvalidChoice {
                    name: self.name.clone(),
                    value: value.to_string(),
                    choices: choices.clone(),
                })
            }
            _ => Ok(()),
        }
    }

    /// Apply argument to context
    /// Priority: 1) value already in context, 2) cli_args, 3) default value
    pub fn apply(
        &self,
        context: &mut LaunchContext,
        cli_args: &HashMap<String, String>,
    ) -> Result<()> {
        let value = if let Some(existing) = context.get_configuration(&self.name) {
            existing
        } else if let Some(value) = cli_args.get(&self.name) {
            value.clone()
        } else if let Some(default) = self.resolve_default(context)? {
            default
        } else {
            return Err(LaunchError::RequiredArgument(self.name.clone()));
        };

        self.validate(&value)?;
        log::debug!("Launch argument {} = {:?}", self.name, value);
        context.set_configuration(self.name.clone(), value);
        Ok(())
    }
}
