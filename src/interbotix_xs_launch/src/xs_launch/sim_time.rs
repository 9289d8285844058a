//! Derived `use_sim_time` parameter

use crate::error::SubstitutionError;
use crate::substitution::{LaunchContext, Substitution};

/// Hardware type that runs against a simulated clock
pub const SIMULATED_HARDWARE_TYPE: &str = "gz_classic";

/// Force `use_sim_time` to `true` when the hardware is simulated in Gazebo
///
/// Otherwise the caller-declared `use_sim_time` configuration is passed through.
pub fn determine_use_sim_time_param(
    context: &LaunchContext,
    hardware_type_launch_arg: &Substitution,
) -> Result<Substitution, SubstitutionError> {
    let hardware_type = hardware_type_launch_arg.resolve(context)?;
    if hardware_type == SIMULATED_HARDWARE_TYPE {
        Ok(Substitution::text("true"))
    } else {
        Ok(Substitution::var("use_sim_time"))
    }
}
