//! Server configuration loaded from a TOML file.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::core::ids::IdPolicy;

pub const DEFAULT_PORT: u16 = 4000;

/// Server configuration (TOML).
///
/// Missing fields default to values that serve an empty store on
/// `127.0.0.1:4000`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind the HTTP listener to.
    pub bind: String,

    pub port: u16,

    /// How new list and item ids are allocated.
    pub id_policy: IdPolicy,

    /// Reject item mutations that do not name their list with `listId`
    /// instead of falling back to the selected list.
    pub require_list_id: bool,

    /// Directory with the front end's static build, served at `/`.
    pub ui_dir: Option<PathBuf>,

    /// Lists present when the server starts.
    pub lists: Vec<ListSeed>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListSeed {
    pub name: String,
    #[serde(default)]
    pub items: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
            id_policy: IdPolicy::default(),
            require_list_id: false,
            ui_dir: None,
            lists: Vec::new(),
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.bind.trim().is_empty() {
            return Err(anyhow!("bind must be a non-empty address"));
        }

        let mut list_names = HashSet::new();
        for list in &self.lists {
            if !list_names.insert(list.name.to_lowercase()) {
                return Err(anyhow!("lists: duplicate list name '{}'", list.name));
            }
            let mut item_names = HashSet::new();
            for item in &list.items {
                if !item_names.insert(item.to_lowercase()) {
                    return Err(anyhow!(
                        "lists.{}: duplicate item name '{}'",
                        list.name,
                        item
                    ));
                }
            }
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `ServerConfig::default()`.
pub fn load_config(path: &Path) -> Result<ServerConfig> {
    if !path.exists() {
        let cfg = ServerConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: ServerConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}
