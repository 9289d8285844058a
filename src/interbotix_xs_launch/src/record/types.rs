//! Output record data structures

use serde::{Deserialize, Serialize};

use crate::actions::DeclareLaunchArgument;
use crate::xs_launch::RobotFamily;

/// A launch argument declaration with its default rendered as substitution syntax
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeclarationRecord {
    pub name: String,
    pub default: Option<String>,
    pub description: Option<String>,
    pub choices: Option<Vec<String>>,
}

impl From<&DeclareLaunchArgument> for DeclarationRecord {
    fn from(argument: &DeclareLaunchArgument) -> Self {
        Self {
            name: argument.name.clone(),
            default: argument
                .default
                .as_ref()
                .map(|subs| subs.iter().map(|s| s.to_string()).collect()),
            description: argument.description.clone(),
            choices: argument.choices.clone(),
        }
    }
}

/// Resolved robot description for one launch
///
/// When the commands were not executed, `robot_description` and
/// `robot_description_semantic` hold the xacro command lines instead of the
/// generated documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RobotDescriptionRecord {
    pub family: RobotFamily,
    pub executed: bool,
    pub launch_arguments: Vec<(String, String)>,
    pub use_sim_time: String,
    pub robot_description: String,
    pub robot_description_semantic: Option<String>,
}

impl RobotDescriptionRecord {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
