//! Robot description launch helpers for the Interbotix X-Series families
//!
//! Each family (arm, cobot, LoCoBot) gets a builder for the launch arguments
//! that parameterize its URDF, a `robot_description` declaration whose default
//! runs `xacro`, and a constructor for the SRDF command used by MoveIt.

pub mod arguments;
pub mod family;
pub mod robot_description;
pub mod semantic;
pub mod sim_time;

pub use arguments::{
    declare_interbotix_xsarm_robot_description_launch_arguments,
    declare_interbotix_xscobot_robot_description_launch_arguments,
    declare_interbotix_xslocobot_robot_description_launch_arguments,
    declare_robot_identity_launch_arguments, XsArmDescriptionArgs, XsLoCoBotDescriptionArgs,
};
pub use family::RobotFamily;
pub use robot_description::RobotDescriptionArgument;
pub use semantic::{
    construct_interbotix_xsarm_semantic_robot_description_command,
    construct_interbotix_xscobot_semantic_robot_description_command,
    construct_interbotix_xslocobot_semantic_robot_description_command,
};
pub use sim_time::determine_use_sim_time_param;

use crate::substitution::Substitution;

/// Name of the macro preprocessor executable
pub const XACRO: &str = "xacro";

/// Expand `(xacro_arg, launch_configuration)` pairs into `key:=$(var name) ` parts
pub(crate) fn xacro_tokens(tokens: &[(&str, &str)]) -> Vec<Substitution> {
    tokens
        .iter()
        .flat_map(|(key, configuration)| {
            [
                Substitution::text(format!("{}:=", key)),
                Substitution::var(*configuration),
                Substitution::text(" "),
            ]
        })
        .collect()
}
