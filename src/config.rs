use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_CHAIN_ID: &str = "121214";
pub const MAX_RECENT_SEARCHES: usize = 10;

fn default_chain_id() -> String {
    DEFAULT_CHAIN_ID.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub indexer_url: Option<String>,
    #[serde(default = "default_chain_id")]
    pub chain_id: String,
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Send the default listing query when criteria compile to nothing
    #[serde(default)]
    pub default_query_fallback: bool,
    #[serde(default)]
    pub recent_searches: Vec<String>,

    /// Where `save` writes; `None` means the platform config directory
    #[serde(skip)]
    path: Option<PathBuf>,
    /// File values hidden by command-line overrides, written back by `save`
    #[serde(skip)]
    shadowed: Shadowed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Shadowed {
    indexer_url: Option<Option<String>>,
    chain_id: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            indexer_url: None,
            chain_id: default_chain_id(),
            request_timeout_secs: default_timeout_secs(),
            default_query_fallback: false,
            recent_searches: Vec::new(),
            path: None,
            shadowed: Shadowed::default(),
        }
    }
}

impl Config {
    /// Returns the config directory path (~/.config/ibex on Linux)
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join("ibex"))
            .context("Could not determine config directory")
    }

    fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load config from disk, or return default if not found
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {path:?}"))?;
            toml::from_str(&contents).context("Failed to parse config file")?
        } else {
            Self::default()
        };
        config.path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Redirects `save` to another file
    pub fn with_path(mut self, path: PathBuf) -> Self {
        self.path = Some(path);
        self
    }

    /// Save config to disk
    pub fn save(&self) -> Result<()> {
        let path = match &self.path {
            Some(path) => path.clone(),
            None => Self::config_path()?,
        };
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create config directory {dir:?}"))?;
        }

        let contents =
            toml::to_string_pretty(&self.persisted()).context("Failed to serialize config")?;
        std::fs::write(&path, contents)
            .with_context(|| format!("Failed to write config to {path:?}"))?;

        Ok(())
    }

    /// Copy of self with overridden fields put back to their file values
    fn persisted(&self) -> Self {
        let mut config = self.clone();
        if let Some(url) = config.shadowed.indexer_url.take() {
            config.indexer_url = url;
        }
        if let Some(chain_id) = config.shadowed.chain_id.take() {
            config.chain_id = chain_id;
        }
        config
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Set the indexer base URL and persist
    pub fn set_indexer(&mut self, url: String) -> Result<()> {
        self.indexer_url = Some(url);
        self.shadowed.indexer_url = None;
        self.save()
    }

    /// Set the selected chain and persist
    pub fn set_chain(&mut self, chain_id: String) -> Result<()> {
        self.chain_id = chain_id;
        self.shadowed.chain_id = None;
        self.save()
    }

    /// Add a search to recent history (newest first, keeps last 10)
    pub fn add_recent_search(&mut self, query: String) -> Result<()> {
        self.recent_searches.retain(|s| s != &query);
        self.recent_searches.insert(0, query);
        self.recent_searches.truncate(MAX_RECENT_SEARCHES);
        self.save()
    }

    /// Applies command-line overrides for this run only. Later saves keep
    /// the file's values unless `set_indexer`/`set_chain` replace them.
    pub fn apply_overrides(&mut self, cli: &Cli) {
        if let Some(url) = &cli.indexer_url {
            let previous = std::mem::replace(&mut self.indexer_url, Some(url.clone()));
            self.shadowed.indexer_url.get_or_insert(previous);
        }
        if let Some(chain_id) = &cli.chain_id {
            let previous = std::mem::replace(&mut self.chain_id, chain_id.clone());
            self.shadowed.chain_id.get_or_insert(previous);
        }
    }
}

// ============================================================================
// Command line
// ============================================================================

#[derive(Debug, Parser)]
#[command(name = "ibex")]
#[command(about = "Terminal explorer for EVM chains served by an HTTP indexer", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Indexer base URL for this run
    #[arg(long, global = true)]
    pub indexer_url: Option<String>,

    /// Chain id for this run
    #[arg(long, global = true)]
    pub chain_id: Option<String>,

    /// Debug-level logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Command {
    /// Persist the indexer base URL
    SetIndexer { url: String },
    /// Persist the selected chain id
    SetChain { chain_id: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_config_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("ibex-config-test-{}-{name}", std::process::id()))
            .join("config.toml")
    }

    #[test]
    fn test_defaults_for_missing_fields() {
        let config: Config = toml::from_str("indexer_url = \"http://localhost:3000\"").unwrap();
        assert_eq!(config.chain_id, "121214");
        assert_eq!(config.request_timeout_secs, 10);
        assert!(!config.default_query_fallback);
        assert!(config.recent_searches.is_empty());
    }

    #[test]
    fn test_missing_file_loads_default() {
        let path = temp_config_path("missing");
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.indexer_url, None);
        assert_eq!(config.chain_id, DEFAULT_CHAIN_ID);
    }

    #[test]
    fn test_save_and_reload() {
        let path = temp_config_path("reload");
        let mut config = Config::load_from(&path).unwrap();
        config.set_indexer("http://localhost:3000".to_string()).unwrap();
        config.set_chain("1".to_string()).unwrap();

        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(reloaded.indexer_url.as_deref(), Some("http://localhost:3000"));
        assert_eq!(reloaded.chain_id, "1");

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_recent_searches_dedup_and_cap() {
        let path = temp_config_path("recent");
        let mut config = Config::load_from(&path).unwrap();
        for i in 0..12 {
            config.add_recent_search(format!("q{i}")).unwrap();
        }
        config.add_recent_search("q5".to_string()).unwrap();

        assert_eq!(config.recent_searches.len(), MAX_RECENT_SEARCHES);
        assert_eq!(config.recent_searches[0], "q5");
        assert_eq!(
            config.recent_searches.iter().filter(|q| *q == "q5").count(),
            1
        );

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    // ==================== CLI ====================

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::try_parse_from(["ibex", "--indexer-url", "http://x", "--chain-id", "7"]).unwrap();
        let mut config = Config::default();
        config.apply_overrides(&cli);
        assert_eq!(config.indexer_url.as_deref(), Some("http://x"));
        assert_eq!(config.chain_id, "7");
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_overrides_are_not_persisted() {
        let path = temp_config_path("overrides");
        let mut config = Config::load_from(&path).unwrap();
        config.set_indexer("http://saved".to_string()).unwrap();

        let cli = Cli::try_parse_from(["ibex", "--indexer-url", "http://one-off", "--chain-id", "9"])
            .unwrap();
        config.apply_overrides(&cli);
        assert_eq!(config.indexer_url.as_deref(), Some("http://one-off"));
        config.add_recent_search("123".to_string()).unwrap();

        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(reloaded.indexer_url.as_deref(), Some("http://saved"));
        assert_eq!(reloaded.chain_id, DEFAULT_CHAIN_ID);
        assert_eq!(reloaded.recent_searches, vec!["123".to_string()]);

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_explicit_set_replaces_override() {
        let path = temp_config_path("override-set");
        let mut config = Config::load_from(&path).unwrap();
        let cli = Cli::try_parse_from(["ibex", "--chain-id", "9"]).unwrap();
        config.apply_overrides(&cli);
        config.set_chain("5".to_string()).unwrap();

        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(reloaded.chain_id, "5");

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_cli_subcommands() {
        let cli = Cli::try_parse_from(["ibex", "set-indexer", "http://x"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Command::SetIndexer {
                url: "http://x".to_string()
            })
        );

        let cli = Cli::try_parse_from(["ibex", "set-chain", "1", "-v"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Command::SetChain {
                chain_id: "1".to_string()
            })
        );
        assert!(cli.verbose);
    }
}
