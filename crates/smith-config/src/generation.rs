//! Method selection defaults.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GenerationConfig {
    /// Leave `private` methods out when no explicit selection is given.
    #[serde(default)]
    pub skip_private: bool,
}
