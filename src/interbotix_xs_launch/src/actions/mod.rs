//! Action module

pub mod declare_argument;
pub mod launch_description;

pub use declare_argument::DeclareLaunchArgument;
pub use launch_description::LaunchDescription;
