use crate::constants::{FLAG_IS_WEBAPP, FLAG_UMD_NAME};
use serde::{Deserialize, Serialize};

pub const DEFAULT_UMD_NAME: &str = "myApp";

/// Options forwarded to the helper initializer.
///
/// Resolved once at startup (flag > environment > default) and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScaffoldConfig {
    /// Whether the project is a web application.
    pub is_webapp: bool,
    /// UMD bundle/module name.
    pub umd_name: String,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self { is_webapp: false, umd_name: DEFAULT_UMD_NAME.to_owned() }
    }
}

impl ScaffoldConfig {
    /// Command-line flags for the helper initializer: `--iswebapp` only when set,
    /// then `--umdname <value>` always.
    #[must_use]
    pub fn forwarded_flags(&self) -> Vec<String> {
        let mut flags = Vec::with_capacity(3);
        if self.is_webapp {
            flags.push(FLAG_IS_WEBAPP.to_owned());
        }
        flags.push(FLAG_UMD_NAME.to_owned());
        flags.push(self.umd_name.clone());
        flags
    }
}
