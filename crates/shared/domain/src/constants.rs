//! Fixed names of the tool and the external collaborators it drives.

/// Name used for the binary, the log file prefix and the `[ts-scaffolder]` log prefix.
pub const TOOL_NAME: &str = "ts-scaffolder";

/// Helper tooling package installed as a dev dependency of every new project.
pub const HELPER_PACKAGE: &str = "ts-scaffolder-scripts";

/// Initializer executable exposed by [`HELPER_PACKAGE`].
pub const HELPER_INIT_BIN: &str = "ts-scaffolder-init";

/// Local install location of package executables, relative to the project directory.
pub const LOCAL_BIN_DIR: &str = "node_modules/.bin";

pub const VCS_PROGRAM: &str = "git";

#[cfg(windows)]
pub const PACKAGE_MANAGER: &str = "npm.cmd";
#[cfg(not(windows))]
pub const PACKAGE_MANAGER: &str = "npm";

/// Flag forwarded to the helper initializer when the project is a web application.
pub const FLAG_IS_WEBAPP: &str = "--iswebapp";

/// Flag forwarded to the helper initializer with the UMD bundle name.
pub const FLAG_UMD_NAME: &str = "--umdname";

/// Documentation of the naming rules every project name must follow.
pub const NAMING_RULES_URL: &str = "https://www.npmjs.com/package/validate-npm-package-name";
