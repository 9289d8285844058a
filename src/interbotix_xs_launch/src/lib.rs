//! interbotix_xs_launch library
//!
//! Launch arguments and xacro commands that generate the robot description
//! (URDF) and semantic robot description (SRDF) of Interbotix X-Series arms,
//! cobots and LoCoBots.

pub mod actions;
pub mod error;
pub mod params;
pub mod record;
pub mod substitution;
pub mod xs_launch;

use actions::LaunchDescription;
use error::Result;
use record::RobotDescriptionRecord;
use std::collections::HashMap;
use substitution::{LaunchContext, Substitution};
use xs_launch::robot_description::ROBOT_DESCRIPTION;
use xs_launch::{declare_robot_identity_launch_arguments, determine_use_sim_time_param, RobotFamily};

/// Full launch description for a family: identity arguments, then the family's own
pub fn robot_launch_description(family: RobotFamily) -> LaunchDescription {
    let mut description: LaunchDescription = declare_robot_identity_launch_arguments(family)
        .into_iter()
        .collect();
    description.extend(family.declare_robot_description_launch_arguments());
    description
}

/// Resolve a family's launch arguments and build its robot description
///
/// `context` decides whether xacro actually runs: in dry-run mode the record
/// carries the command lines. The SRDF command is only built when
/// `semantic_config` names the parent of the `srdf/` directory.
pub fn describe_robot(
    family: RobotFamily,
    cli_args: &HashMap<String, String>,
    semantic_config: Option<&str>,
    context: LaunchContext,
) -> Result<RobotDescriptionRecord> {
    let description = robot_launch_description(family);
    let context = description.resolve(cli_args, context)?;

    let robot_description = Substitution::var(ROBOT_DESCRIPTION).resolve(&context)?;

    let robot_description_semantic = match semantic_config {
        Some(config_path) => {
            let robot_model = Substitution::var("robot_model").resolve(&context)?;
            let command = family.semantic_robot_description_command(&robot_model, config_path);
            command.check_configurations(&context)?;
            log::info!("Generating semantic description for {}", robot_model);
            Some(Substitution::Command(command).resolve(&context)?)
        }
        None => None,
    };

    let use_sim_time =
        determine_use_sim_time_param(&context, &Substitution::var("hardware_type"))?
            .resolve(&context)?;

    Ok(RobotDescriptionRecord {
        family,
        executed: !context.dry_run(),
        launch_arguments: description
            .resolved_arguments(&context)
            .into_iter()
            .filter(|(name, _)| name != ROBOT_DESCRIPTION)
            .collect(),
        use_sim_time,
        robot_description,
        robot_description_semantic,
    })
}
