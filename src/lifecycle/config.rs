//! Run configuration.
//!
//! The program takes no arguments: the three files have fixed names resolved
//! against the working directory. [`Config::in_dir`] resolves the same names
//! under another directory.

use crate::model::ParsePolicy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const INVENTORY_FILE: &str = "inventory.old";
pub const ORDERS_FILE: &str = "orders";
pub const LOG_FILE: &str = "log";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub inventory_path: PathBuf,
    pub orders_path: PathBuf,
    pub log_path: PathBuf,
    /// Applied to both the inventory and the orders file.
    pub parse_policy: ParsePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            inventory_path: PathBuf::from(INVENTORY_FILE),
            orders_path: PathBuf::from(ORDERS_FILE),
            log_path: PathBuf::from(LOG_FILE),
            parse_policy: ParsePolicy::default(),
        }
    }
}

impl Config {
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            inventory_path: dir.join(INVENTORY_FILE),
            orders_path: dir.join(ORDERS_FILE),
            log_path: dir.join(LOG_FILE),
            parse_policy: ParsePolicy::default(),
        }
    }

    pub fn with_parse_policy(mut self, policy: ParsePolicy) -> Self {
        self.parse_policy = policy;
        self
    }
}
