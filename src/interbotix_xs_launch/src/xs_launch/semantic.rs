//! Semantic robot description (SRDF) commands required by MoveIt
//!
//! None of these declare anything: every launch configuration they read must
//! already be in the context, which [`Command::check_configurations`] reports
//! before evaluation.

use crate::substitution::{Command, Substitution};
use crate::xs_launch::{xacro_tokens, XACRO};

const XSARM_SRDF_TOKENS: &[(&str, &str)] = &[
    ("robot_name", "robot_name"),
    ("base_link_frame", "base_link_frame"),
    ("use_gripper", "use_gripper"),
    ("show_ar_tag", "show_ar_tag"),
    ("show_gripper_bar", "show_gripper_bar"),
    ("show_gripper_fingers", "show_gripper_fingers"),
    ("use_world_frame", "use_world_frame"),
    ("external_urdf_loc", "external_urdf_loc"),
    ("external_srdf_loc", "external_srdf_loc"),
    ("hardware_type", "hardware_type"),
];

const XSLOCOBOT_SRDF_TOKENS: &[(&str, &str)] = &[
    ("robot_name", "robot_name"),
    ("use_lidar", "use_lidar"),
    ("base_type", "base_type"),
    ("external_srdf_loc", "external_srdf_loc"),
];

fn semantic_command(
    robot_model: &str,
    config_path: Substitution,
    tokens: &[(&str, &str)],
) -> Command {
    let mut parts = vec![
        Substitution::PathJoin(vec![Substitution::FindExecutable(XACRO.to_string())]),
        Substitution::text(" "),
        config_path,
        Substitution::text(format!("/srdf/{}.srdf.xacro", robot_model)),
        Substitution::text(" "),
    ];
    parts.extend(xacro_tokens(tokens));
    Command::new(parts)
}

/// Build the arm SRDF command
///
/// `config_path` is the parent of the directory holding `srdf/`, as a plain
/// string or a path substitution.
pub fn construct_interbotix_xsarm_semantic_robot_description_command(
    robot_model: &str,
    config_path: impl Into<Substitution>,
) -> Command {
    semantic_command(robot_model, config_path.into(), XSARM_SRDF_TOKENS)
}

pub fn construct_interbotix_xscobot_semantic_robot_description_command(
    robot_model: &str,
    config_path: impl Into<Substitution>,
) -> Command {
    semantic_command(robot_model, config_path.into(), XSARM_SRDF_TOKENS)
}

/// Build the LoCoBot SRDF command, which takes a reduced argument set
pub fn construct_interbotix_xslocobot_semantic_robot_description_command(
    robot_model: &str,
    config_path: impl Into<Substitution>,
) -> Command {
    semantic_command(robot_model, config_path.into(), XSLOCOBOT_SRDF_TOKENS)
}
