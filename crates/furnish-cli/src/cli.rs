//! CLI argument definitions for the room layout checker.

use std::path::PathBuf;

use clap::Parser;

use crate::config::ConfigManager;

#[derive(Parser, Debug)]
#[command(
    name = "furnish",
    version,
    about = "Check a furnished room for items outside the walls or overlapping each other"
)]
pub struct Cli {
    /// Room JSON exported by the planner (default room when omitted).
    #[arg(value_name = "ROOM_JSON")]
    pub room: Option<PathBuf>,

    /// Print a share link for the room using this base URL.
    #[arg(long = "share", value_name = "BASE_URL")]
    pub share: Option<String>,

    /// Use this configuration file instead of the OS default.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Snap every item to the configured grid before checking.
    #[arg(long = "snap")]
    pub snap: bool,

    /// Reject out-of-bounds and overlapping placements instead of only reporting them.
    #[arg(long = "enforce")]
    pub enforce: bool,

    /// Start from the default configuration instead of the config file.
    #[arg(long = "reset-config")]
    pub reset_config: bool,

    /// Write the effective configuration back to the config file.
    #[arg(long = "save-config")]
    pub save_config: bool,
}

impl Cli {
    /// Fold the command-line overrides into the loaded configuration
    pub fn apply_overrides(&self, manager: &mut ConfigManager) {
        if self.reset_config {
            manager.reset_to_defaults();
        }
        if self.snap {
            manager.config_mut().editor.snap_to_grid = true;
        }
        if self.enforce {
            manager.config_mut().editor.enforce_placement = true;
        }
    }
}
