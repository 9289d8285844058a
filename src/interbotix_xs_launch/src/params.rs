//! Launch argument file loading

use serde_yaml::Value;
use std::{fs, path::Path};

use crate::error::{LaunchError, Result};

/// Load launch arguments from a YAML mapping of names to scalar values
///
/// ```yaml
/// robot_model: wx250s
/// use_gripper: false
/// hardware_type: fake
/// ```
///
/// Booleans and numbers are passed on in their YAML spelling (`false`, `2`).
pub fn load_launch_arguments(path: &Path) -> Result<Vec<(String, String)>> {
    let content = fs::read_to_string(path)?;
    parse_launch_arguments(&content).map_err(|message| LaunchError::ParamsFile {
        path: path.display().to_string(),
        message,
    })
}

fn parse_launch_arguments(content: &str) -> std::result::Result<Vec<(String, String)>, String> {
    let yaml: Value =
        serde_yaml::from_str(content).map_err(|e| format!("YAML parse error: {}", e))?;

    let map = match yaml {
        Value::Mapping(map) => map,
        Value::Null => return Ok(Vec::new()),
        _ => return Err("expected a mapping of launch argument names to values".to_string()),
    };

    map.into_iter()
        .map(|(key, value)| {
            let name = match key {
                Value::String(s) => s,
                other => return Err(format!("argument name must be a string, got {:?}", other)),
            };
            let value = scalar_to_string(&value)
                .ok_or_else(|| format!("argument '{}' must be a scalar value", name))?;
            Ok((name, value))
        })
        .collect()
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Null => Some(String::new()),
        Value::Sequence(_) | Value::Mapping(_) | Value::Tagged(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_scalars() {
        let args = parse_launch_arguments(
            "robot_model: wx250s\nuse_gripper: false\nmotor_count: 6\nexternal_urdf_loc:\n",
        )
        .unwrap();
        assert_eq!(
            args,
            vec![
                ("robot_model".to_string(), "wx250s".to_string()),
                ("use_gripper".to_string(), "false".to_string()),
                ("motor_count".to_string(), "6".to_string()),
                ("external_urdf_loc".to_string(), String::new()),
            ]
        );
    }

    #[test]
    fn test_empty_file() {
        assert!(parse_launch_arguments("").unwrap().is_empty());
    }

    #[test]
    fn test_rejects_nested_values() {
        let err = parse_launch_arguments("robot_model:\n  name: wx200\n").unwrap_err();
        assert!(err.contains("robot_model"));
    }

    #[test]
    fn test_rejects_top_level_sequence() {
        assert!(parse_launch_arguments("- a\n- b\n").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"hardware_type: fake\n").unwrap();
        file.flush().unwrap();

        let args = load_launch_arguments(file.path()).unwrap();
        assert_eq!(args, vec![("hardware_type".to_string(), "fake".to_string())]);
    }

    #[test]
    fn test_load_invalid_file_names_path() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[unclosed\n").unwrap();
        file.flush().unwrap();

        let err = load_launch_arguments(file.path()).unwrap_err();
        assert!(matches!(err, LaunchError::ParamsFile { .. }));
        assert!(err.to_string().contains(&file.path().display().to_string()));
    }
}
