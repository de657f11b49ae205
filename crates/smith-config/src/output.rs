//! Where generated test files are written.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Suffix appended to the class name to form the test class name.
pub const TEST_CLASS_SUFFIX: &str = "Test";
/// Conventional Java source extension.
pub const SOURCE_EXTENSION: &str = "java";

fn default_dir() -> String {
    ".".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Directory that receives `<ClassName>Test.java`.
    #[serde(default = "default_dir")]
    pub dir: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { dir: default_dir() }
    }
}

impl OutputConfig {
    /// `<dir>/<ClassName>Test.java`.
    #[must_use]
    pub fn path_for(&self, class_name: &str) -> PathBuf {
        PathBuf::from(&self.dir).join(test_file_name(class_name))
    }
}

/// `<ClassName>Test.java`.
#[must_use]
pub fn test_file_name(class_name: &str) -> String {
    format!("{class_name}{TEST_CLASS_SUFFIX}.{SOURCE_EXTENSION}")
}
