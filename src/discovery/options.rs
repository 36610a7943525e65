use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Options recognized by the discovery operation.
///
/// Only `pattern` is required. A missing `root` means the process working
/// directory, and discovery is recursive unless told otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocateOptions {
    pub pattern: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,

    #[serde(default = "default_recursive")]
    pub recursive: bool,
}

fn default_recursive() -> bool {
    true
}

impl LocateOptions {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            root: None,
            recursive: default_recursive(),
        }
    }

    pub fn root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let options = LocateOptions::new("*_vows.py");
        assert_eq!(options.pattern, "*_vows.py");
        assert_eq!(options.root, None);
        assert!(options.recursive);
    }

    #[test]
    fn test_builder_overrides() {
        let options = LocateOptions::new("*.py").root("/srv/tests").recursive(false);
        assert_eq!(options.root, Some(PathBuf::from("/srv/tests")));
        assert!(!options.recursive);
    }

    #[test]
    fn test_deserialize_applies_defaults() {
        let options: LocateOptions = serde_json::from_str(r#"{"pattern": "*.py"}"#).unwrap();
        assert_eq!(options, LocateOptions::new("*.py"));
    }

    #[test]
    fn test_deserialize_requires_pattern() {
        let result: Result<LocateOptions, _> = serde_json::from_str(r#"{"recursive": false}"#);
        assert!(result.is_err());
    }
}
