//! Record module for describing resolved launches

pub mod types;

pub use types::{DeclarationRecord, RobotDescriptionRecord};
