//! Launch context for managing configurations

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// ROS 2 distributions searched under `/opt/ros` when the ament index has no match
const ROS_DISTROS: &[&str] = &["jazzy", "iron", "humble", "galactic", "foxy"];

/// Launch context holding resolved configurations and lookup state
///
/// Environment, package share and executable lookups fall back to the host
/// (process environment, `AMENT_PREFIX_PATH`, `PATH`) unless an override is set.
#[derive(Debug, Clone)]
pub struct LaunchContext {
    configurations: HashMap<String, String>,
    environment: Option<HashMap<String, String>>,
    package_shares: HashMap<String, PathBuf>,
    executables: HashMap<String, PathBuf>,
    dry_run: bool,
}

impl LaunchContext {
    pub fn new() -> Self {
        Self {
            configurations: HashMap::new(),
            environment: None, // Use std::env by default
            package_shares: HashMap::new(),
            executables: HashMap::new(),
            dry_run: false,
        }
    }

    pub fn set_configuration(&mut self, name: String, value: String) {
        self.configurations.insert(name, value);
    }

    pub fn get_configuration(&self, name: &str) -> Option<String> {
        self.configurations.get(name).cloned()
    }

    pub fn has_configuration(&self, name: &str) -> bool {
        self.configurations.contains_key(name)
    }

    /// Replace the process environment with a fixed map
    pub fn set_environment(&mut self, env: HashMap<String, String>) {
        self.environment = Some(env);
    }

    pub fn get_env(&self, name: &str) -> Option<String> {
        match &self.environment {
            Some(env) => env.get(name).cloned(),
            None => std::env::var(name).ok(),
        }
    }

    pub fn set_package_share(&mut self, package: String, path: PathBuf) {
        self.package_shares.insert(package, path);
    }

    pub fn set_executable(&mut self, name: String, path: PathBuf) {
        self.executables.insert(name, path);
    }

    /// When set, command substitutions render their command line instead of running it
    pub fn set_dry_run(&mut self, dry_run: bool) {
        self.dry_run = dry_run;
    }

    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    /// Find the share directory of a ROS 2 package
    pub fn find_package_share(&self, package: &str) -> Option<PathBuf> {
        if let Some(path) = self.package_shares.get(package) {
            return Some(path.clone());
        }

        if let Some(prefix_path) = self.get_env("AMENT_PREFIX_PATH") {
            for prefix in prefix_path.split(':').filter(|p| !p.is_empty()) {
                let share_path = Path::new(prefix).join("share").join(package);
                if share_path.exists() {
                    return Some(share_path);
                }
            }
        }

        let distros = self
            .get_env("ROS_DISTRO")
            .into_iter()
            .chain(ROS_DISTROS.iter().map(|d| d.to_string()));
        for distro in distros {
            let share_path = PathBuf::from(format!("/opt/ros/{}/share/{}", distro, package));
            if share_path.exists() {
                return Some(share_path);
            }
        }

        None
    }

    /// Find an executable by name, searching `PATH` for bare names
    pub fn find_executable(&self, name: &str) -> Option<PathBuf> {
        if let Some(path) = self.executables.get(name) {
            return Some(path.clone());
        }

        if name.contains('/') {
            let path = PathBuf::from(name);
            return path.is_file().then_some(path);
        }

        let search_path = self.get_env("PATH")?;
        search_path
            .split(':')
            .filter(|dir| !dir.is_empty())
            .map(|dir| Path::new(dir).join(name))
            .find(|candidate| candidate.is_file())
    }
}

impl Default for LaunchContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_context() {
        let context = LaunchContext::new();
        assert!(context.get_configuration("any").is_none());
        assert!(!context.dry_run());
    }

    #[test]
    fn test_set_and_get() {
        let mut context = LaunchContext::new();
        context.set_configuration("key".to_string(), "value".to_string());
        assert_eq!(context.get_configuration("key"), Some("value".to_string()));
        assert!(context.has_configuration("key"));
    }

    #[test]
    fn test_override_configuration() {
        let mut context = LaunchContext::new();
        context.set_configuration("key".to_string(), "value1".to_string());
        context.set_configuration("key".to_string(), "value2".to_string());
        assert_eq!(context.get_configuration("key"), Some("value2".to_string()));
    }

    #[test]
    fn test_environment_override_hides_process_env() {
        let mut context = LaunchContext::new();
        context.set_environment(HashMap::from([(
            "INTERBOTIX_XSLOCOBOT_BASE_TYPE".to_string(),
            "create3".to_string(),
        )]));
        assert_eq!(
            context.get_env("INTERBOTIX_XSLOCOBOT_BASE_TYPE"),
            Some("create3".to_string())
        );
        assert_eq!(context.get_env("PATH"), None);
    }

    #[test]
    fn test_package_share_override() {
        let mut context = LaunchContext::new();
        context.set_environment(HashMap::new());
        context.set_package_share(
            "interbotix_xsarm_descriptions".to_string(),
            PathBuf::from("/tmp/share/interbotix_xsarm_descriptions"),
        );
        assert_eq!(
            context.find_package_share("interbotix_xsarm_descriptions"),
            Some(PathBuf::from("/tmp/share/interbotix_xsarm_descriptions"))
        );
    }

    #[test]
    fn test_package_share_from_ament_prefix() {
        let prefix = tempfile::tempdir().unwrap();
        let share = prefix.path().join("share").join("my_pkg");
        std::fs::create_dir_all(&share).unwrap();

        let mut context = LaunchContext::new();
        context.set_environment(HashMap::from([(
            "AMENT_PREFIX_PATH".to_string(),
            format!("/nonexistent:{}", prefix.path().display()),
        )]));
        assert_eq!(context.find_package_share("my_pkg"), Some(share));
        assert_eq!(context.find_package_share("definitely_not_a_package"), None);
    }

    #[test]
    fn test_find_executable_on_path() {
        let dir = tempfile::tempdir().unwrap();
        let exe = dir.path().join("xacro");
        std::fs::write(&exe, "").unwrap();

        let mut context = LaunchContext::new();
        context.set_environment(HashMap::from([(
            "PATH".to_string(),
            dir.path().display().to_string(),
        )]));
        assert_eq!(context.find_executable("xacro"), Some(exe));
        assert_eq!(context.find_executable("missing_tool"), None);
    }

    #[test]
    fn test_find_executable_override() {
        let mut context = LaunchContext::new();
        context.set_environment(HashMap::new());
        context.set_executable("xacro".to_string(), PathBuf::from("echo"));
        assert_eq!(context.find_executable("xacro"), Some(PathBuf::from("echo")));
    }
}
