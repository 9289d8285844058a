//! The `robot_description` launch argument, generated by xacro

use crate::actions::DeclareLaunchArgument;
use crate::substitution::{Command, Substitution};
use crate::xs_launch::family::RobotFamily;
use crate::xs_launch::{xacro_tokens, XACRO};

pub const ROBOT_DESCRIPTION: &str = "robot_description";

const XSARM_URDF_TOKENS: &[(&str, &str)] = &[
    ("robot_name", "robot_name"),
    ("base_link_frame", "base_link_frame"),
    ("use_gripper", "use_gripper"),
    ("show_ar_tag", "show_ar_tag"),
    ("show_gripper_bar", "show_gripper_bar"),
    ("show_gripper_fingers", "show_gripper_fingers"),
    ("use_world_frame", "use_world_frame"),
    ("external_urdf_loc", "external_urdf_loc"),
    ("hardware_type", "hardware_type"),
];

// robot_name is passed twice; xacro keeps the last one and both are equal.
const XSLOCOBOT_URDF_TOKENS: &[(&str, &str)] = &[
    ("arm_model", "arm_model"),
    ("robot_name", "robot_name"),
    ("base_model", "base_type"),
    ("robot_model", "robot_model"),
    ("robot_name", "robot_name"),
    ("use_gripper", "use_gripper"),
    ("show_ar_tag", "show_ar_tag"),
    ("show_gripper_bar", "show_gripper_bar"),
    ("show_gripper_fingers", "show_gripper_fingers"),
    ("use_lidar", "use_lidar"),
    ("external_urdf_loc", "external_urdf_loc"),
    ("hardware_type", "hardware_type"),
];

/// The xacro invocation producing a family's URDF
///
/// Arms and cobots expand `<share>/urdf/<robot_model>.urdf.xacro`; the LoCoBot
/// always expands `<share>/urdf/locobot.urdf.xacro` and passes the model as
/// arguments instead.
pub fn robot_description_command(family: RobotFamily) -> Command {
    let package_share = Substitution::FindPackageShare(family.descriptions_package().to_string());

    let mut parts = vec![Substitution::FindExecutable(XACRO.to_string()), Substitution::text(" ")];
    match family {
        RobotFamily::Arm | RobotFamily::Cobot => {
            parts.push(Substitution::PathJoin(vec![
                package_share,
                Substitution::text("urdf"),
                Substitution::var("robot_model"),
            ]));
            parts.push(Substitution::text(".urdf.xacro "));
            parts.extend(xacro_tokens(XSARM_URDF_TOKENS));
        }
        RobotFamily::LoCoBot => {
            parts.push(Substitution::PathJoin(vec![
                package_share,
                Substitution::text("urdf"),
                Substitution::text("locobot.urdf.xacro"),
            ]));
            parts.push(Substitution::text(" "));
            parts.extend(xacro_tokens(XSLOCOBOT_URDF_TOKENS));
        }
    }
    Command::new(parts)
}

/// Declaration of `robot_description` whose default runs xacro
///
/// A replacement default must still yield an equivalent URDF.
#[derive(Debug, Clone, PartialEq)]
pub struct RobotDescriptionArgument {
    command: Command,
}

impl RobotDescriptionArgument {
    pub fn new(family: RobotFamily) -> Self {
        Self {
            command: robot_description_command(family),
        }
    }

    pub fn with_default(command: Command) -> Self {
        Self { command }
    }
}

impl From<RobotDescriptionArgument> for DeclareLaunchArgument {
    fn from(argument: RobotDescriptionArgument) -> Self {
        DeclareLaunchArgument::new(ROBOT_DESCRIPTION)
            .default_value(argument.command)
            .description("URDF of the robot; this is typically generated by the xacro command.")
    }
}
