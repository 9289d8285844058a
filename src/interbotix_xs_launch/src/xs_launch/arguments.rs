//! Launch argument declarations for the robot description of each family

use crate::actions::DeclareLaunchArgument;
use crate::substitution::Substitution;
use crate::xs_launch::family::RobotFamily;
use crate::xs_launch::robot_description::RobotDescriptionArgument;

pub const BOOLEAN_CHOICES: &[&str] = &["true", "false"];
pub const HARDWARE_TYPES: &[&str] = &["actual", "fake", "gz_classic"];
pub const LOCOBOT_BASE_TYPES: &[&str] = &["kobuki", "create3"];

/// Environment variable holding the LoCoBot base type
pub const LOCOBOT_BASE_TYPE_ENV: &str = "INTERBOTIX_XSLOCOBOT_BASE_TYPE";

/// Default values for the arm and cobot robot description arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XsArmDescriptionArgs {
    pub base_link_frame: String,
    pub use_gripper: String,
    pub show_ar_tag: String,
    pub show_gripper_bar: String,
    pub show_gripper_fingers: String,
    pub use_world_frame: String,
    pub external_urdf_loc: String,
    pub hardware_type: String,
}

impl Default for XsArmDescriptionArgs {
    fn default() -> Self {
        Self {
            base_link_frame: "base_link".to_string(),
            use_gripper: "true".to_string(),
            show_ar_tag: "false".to_string(),
            show_gripper_bar: "true".to_string(),
            show_gripper_fingers: "true".to_string(),
            use_world_frame: "true".to_string(),
            external_urdf_loc: String::new(),
            hardware_type: "actual".to_string(),
        }
    }
}

/// Default values for the LoCoBot robot description arguments
///
/// `base_type` is not listed: it always defaults to the
/// `INTERBOTIX_XSLOCOBOT_BASE_TYPE` environment variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XsLoCoBotDescriptionArgs {
    pub use_gripper: String,
    pub show_ar_tag: String,
    pub show_gripper_bar: String,
    pub show_gripper_fingers: String,
    pub external_urdf_loc: String,
    pub hardware_type: String,
}

impl Default for XsLoCoBotDescriptionArgs {
    fn default() -> Self {
        Self {
            use_gripper: "true".to_string(),
            show_ar_tag: "true".to_string(),
            show_gripper_bar: "true".to_string(),
            show_gripper_fingers: "true".to_string(),
            external_urdf_loc: String::new(),
            hardware_type: "actual".to_string(),
        }
    }
}

/// Arguments for an arm's `robot_description`, followed by the declaration itself
///
/// Declares `base_link_frame`, `use_gripper`, `show_ar_tag`, `show_gripper_bar`,
/// `show_gripper_fingers`, `use_world_frame`, `external_urdf_loc` and
/// `hardware_type`. `robot_name` and `robot_model` are read by the URDF command
/// but must be declared by the caller.
pub fn declare_interbotix_xsarm_robot_description_launch_arguments(
    args: &XsArmDescriptionArgs,
) -> Vec<DeclareLaunchArgument> {
    arm_arguments(args, RobotFamily::Arm)
}

/// Same argument set as the arm, with the cobot descriptions package
pub fn declare_interbotix_xscobot_robot_description_launch_arguments(
    args: &XsArmDescriptionArgs,
) -> Vec<DeclareLaunchArgument> {
    arm_arguments(args, RobotFamily::Cobot)
}

/// Arguments for a LoCoBot's `robot_description`, followed by the declaration itself
///
/// `robot_name`, `robot_model`, `arm_model` and `use_lidar` must be declared
/// by the caller.
pub fn declare_interbotix_xslocobot_robot_description_launch_arguments(
    args: &XsLoCoBotDescriptionArgs,
) -> Vec<DeclareLaunchArgument> {
    vec![
        base_type_argument(),
        use_gripper_argument(&args.use_gripper),
        show_ar_tag_argument(&args.show_ar_tag),
        show_gripper_bar_argument(&args.show_gripper_bar),
        show_gripper_fingers_argument(&args.show_gripper_fingers),
        external_urdf_loc_argument(&args.external_urdf_loc),
        hardware_type_argument(&args.hardware_type),
        RobotDescriptionArgument::new(RobotFamily::LoCoBot).into(),
    ]
}

/// Caller-owned arguments the description commands read but the builders do not declare
///
/// Declares `robot_model` (required), `robot_name` (defaults to the model),
/// `external_srdf_loc` and `use_sim_time`; the LoCoBot adds `arm_model`
/// (required) and `use_lidar`. Place these before the family builder's output.
pub fn declare_robot_identity_launch_arguments(family: RobotFamily) -> Vec<DeclareLaunchArgument> {
    let mut arguments = vec![
        DeclareLaunchArgument::new("robot_model")
            .description("model type of the Interbotix robot (i.e. 'wx200' or 'locobot_wx200')."),
        DeclareLaunchArgument::new("robot_name")
            .default_value(Substitution::var("robot_model"))
            .description("name of the robot (typically equal to `robot_model`, but could be anything)."),
    ];
    if family == RobotFamily::LoCoBot {
        arguments.push(
            DeclareLaunchArgument::new("arm_model")
                .description("the Interbotix arm model mounted on the LoCoBot (i.e. 'mobile_wx200')."),
        );
        arguments.push(
            DeclareLaunchArgument::new("use_lidar")
                .default_value("false")
                .choices(BOOLEAN_CHOICES)
                .description("if `true`, the RPLidar node is included in the `robot_description`."),
        );
    }
    arguments.push(
        DeclareLaunchArgument::new("external_srdf_loc")
            .default_value("")
            .description(
                "the file path to the custom semantic description file that you would like to \
                 include in the Interbotix robot's semantic description.",
            ),
    );
    arguments.push(
        DeclareLaunchArgument::new("use_sim_time")
            .default_value("false")
            .choices(BOOLEAN_CHOICES)
            .description(
                "tells ROS nodes asking for time to get the Gazebo-published simulation time, \
                 published over the ROS topic /clock.",
            ),
    );
    arguments
}

fn arm_arguments(args: &XsArmDescriptionArgs, family: RobotFamily) -> Vec<DeclareLaunchArgument> {
    vec![
        base_link_frame_argument(&args.base_link_frame),
        use_gripper_argument(&args.use_gripper),
        show_ar_tag_argument(&args.show_ar_tag),
        show_gripper_bar_argument(&args.show_gripper_bar),
        show_gripper_fingers_argument(&args.show_gripper_fingers),
        use_world_frame_argument(&args.use_world_frame),
        external_urdf_loc_argument(&args.external_urdf_loc),
        hardware_type_argument(&args.hardware_type),
        RobotDescriptionArgument::new(family).into(),
    ]
}

fn base_link_frame_argument(value: &str) -> DeclareLaunchArgument {
    DeclareLaunchArgument::new("base_link_frame")
        .default_value(value)
        .description(
            "name of the 'root' link on the arm; typically `base_link`, but can be changed if \
             attaching the arm to a mobile base that already has a `base_link` frame.",
        )
}

fn base_type_argument() -> DeclareLaunchArgument {
    DeclareLaunchArgument::new("base_type")
        .default_value(Substitution::env(LOCOBOT_BASE_TYPE_ENV))
        .choices(LOCOBOT_BASE_TYPES)
        .description("the base type of the LoCoBot.")
}

fn use_gripper_argument(value: &str) -> DeclareLaunchArgument {
    DeclareLaunchArgument::new("use_gripper")
        .default_value(value)
        .choices(BOOLEAN_CHOICES)
        .description(
            "if `true`, the default gripper is included in the `robot_description`; \
             if `false`, it is left out; set to `false` if not using the default gripper.",
        )
}

fn show_ar_tag_argument(value: &str) -> DeclareLaunchArgument {
    DeclareLaunchArgument::new("show_ar_tag")
        .default_value(value)
        .choices(BOOLEAN_CHOICES)
        .description(
            "if `true`, the AR tag mount is included in the `robot_description`; if \
             `false`, it is left out; set to `true` if using the AR tag mount in your project.",
        )
}

fn show_gripper_bar_argument(value: &str) -> DeclareLaunchArgument {
    DeclareLaunchArgument::new("show_gripper_bar")
        .default_value(value)
        .choices(BOOLEAN_CHOICES)
        .description(
            "if `true`, the gripper_bar link is included in the `robot_description`; \
             if `false`, the gripper_bar and finger links are not loaded. Set to `false` if \
             you have a custom gripper attachment.",
        )
}

fn show_gripper_fingers_argument(value: &str) -> DeclareLaunchArgument {
    DeclareLaunchArgument::new("show_gripper_fingers")
        .default_value(value)
        .choices(BOOLEAN_CHOICES)
        .description(
            "if `true`, the gripper fingers are included in the `robot_description`; \
             if `false`, the gripper finger links are not loaded. Set to `false` if you have \
             custom gripper fingers.",
        )
}

fn use_world_frame_argument(value: &str) -> DeclareLaunchArgument {
    DeclareLaunchArgument::new("use_world_frame")
        .default_value(value)
        .choices(BOOLEAN_CHOICES)
        .description(
            "set this to `true` if you would like to load a 'world' frame to the \
             `robot_description` which is located exactly at the 'base_link' frame \
             of the robot; if using multiple robots or if you would like to attach the \
             'base_link' frame of the robot to a different frame, set this to `false`.",
        )
}

fn external_urdf_loc_argument(value: &str) -> DeclareLaunchArgument {
    DeclareLaunchArgument::new("external_urdf_loc")
        .default_value(value)
        .description(
            "the file path to the custom urdf.xacro file that you would like to include in the \
             Interbotix robot's urdf.xacro file.",
        )
}

fn hardware_type_argument(value: &str) -> DeclareLaunchArgument {
    DeclareLaunchArgument::new("hardware_type")
        .default_value(value)
        .choices(HARDWARE_TYPES)
        .description(
            "configures the `robot_description` to use the actual hardware, fake \
             hardware, or hardware simulated in Gazebo.",
        )
}
