//! Robot family profiles

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::actions::DeclareLaunchArgument;
use crate::substitution::{Command, Substitution};
use crate::xs_launch::{arguments, robot_description, semantic};

/// The three Interbotix X-Series robot families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RobotFamily {
    Arm,
    Cobot,
    LoCoBot,
}

impl RobotFamily {
    pub const ALL: [RobotFamily; 3] = [RobotFamily::Arm, RobotFamily::Cobot, RobotFamily::LoCoBot];

    pub fn name(self) -> &'static str {
        match self {
            RobotFamily::Arm => "xsarm",
            RobotFamily::Cobot => "xscobot",
            RobotFamily::LoCoBot => "xslocobot",
        }
    }

    /// Package whose share directory holds the family's `urdf/` tree
    pub fn descriptions_package(self) -> &'static str {
        match self {
            RobotFamily::Arm => "interbotix_xsarm_descriptions",
            RobotFamily::Cobot => "interbotix_xscobot_descriptions",
            RobotFamily::LoCoBot => "interbotix_xslocobot_descriptions",
        }
    }

    /// Launch arguments with their stock defaults, ending with `robot_description`
    pub fn declare_robot_description_launch_arguments(self) -> Vec<DeclareLaunchArgument> {
        match self {
            RobotFamily::Arm => {
                arguments::declare_interbotix_xsarm_robot_description_launch_arguments(
                    &Default::default(),
                )
            }
            RobotFamily::Cobot => {
                arguments::declare_interbotix_xscobot_robot_description_launch_arguments(
                    &Default::default(),
                )
            }
            RobotFamily::LoCoBot => {
                arguments::declare_interbotix_xslocobot_robot_description_launch_arguments(
                    &Default::default(),
                )
            }
        }
    }

    pub fn robot_description_command(self) -> Command {
        robot_description::robot_description_command(self)
    }

    pub fn semantic_robot_description_command(
        self,
        robot_model: &str,
        config_path: impl Into<Substitution>,
    ) -> Command {
        match self {
            RobotFamily::Arm => {
                semantic::construct_interbotix_xsarm_semantic_robot_description_command(
                    robot_model,
                    config_path,
                )
            }
            RobotFamily::Cobot => {
                semantic::construct_interbotix_xscobot_semantic_robot_description_command(
                    robot_model,
                    config_path,
                )
            }
            RobotFamily::LoCoBot => {
                semantic::construct_interbotix_xslocobot_semantic_robot_description_command(
                    robot_model,
                    config_path,
                )
            }
        }
    }
}

impl fmt::Display for RobotFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RobotFamily {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "arm" | "xsarm" => Ok(RobotFamily::Arm),
            "cobot" | "xscobot" => Ok(RobotFamily::Cobot),
            "locobot" | "xslocobot" => Ok(RobotFamily::LoCoBot),
            other => Err(format!(
                "unknown robot family '{}' (expected arm, cobot or locobot)",
                other
            )),
        }
    }
}
