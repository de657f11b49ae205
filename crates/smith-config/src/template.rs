//! Template selection.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TemplateConfig {
    /// External template file. Empty means the built-in JUnit 5 template.
    #[serde(default)]
    pub path: String,
}

impl TemplateConfig {
    /// The configured external template, if any.
    #[must_use]
    pub fn external_path(&self) -> Option<PathBuf> {
        let trimmed = self.path.trim();
        (!trimmed.is_empty()).then(|| Path::new(trimmed).to_path_buf())
    }
}
