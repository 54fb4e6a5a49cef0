use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, ConfigError};

/// Browse the first page of Pokémon from PokeAPI in the terminal.
#[derive(Parser, Debug)]
#[command(name = "pokelist", version, about, long_about = None)]
pub struct Args {
    /// Configuration file path (default: <config dir>/pokelist/config.toml)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override the API root, e.g. https://pokeapi.co/api/v2
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Print the result as text instead of starting the TUI
    #[arg(long)]
    pub plain: bool,

    /// Do not download card artwork
    #[arg(long)]
    pub no_artwork: bool,
}

impl Args {
    /// Loads the config file and applies command line overrides.
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let path = self.config.clone().unwrap_or_else(Config::config_path);
        let mut config = Config::load_from(&path)?;
        self.apply(&mut config);
        config.validate()?;
        Ok(config)
    }

    pub fn apply(&self, config: &mut Config) {
        if let Some(base_url) = &self.base_url {
            config.api.base_url = base_url.clone();
        }
        if self.no_artwork {
            config.ui.artwork = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_apply_on_top_of_file() {
        let args = Args::parse_from(["pokelist", "--base-url", "http://localhost:1", "--no-artwork"]);
        let mut config = Config::default();
        args.apply(&mut config);
        assert_eq!(config.api.base_url, "http://localhost:1");
        assert!(!config.ui.artwork);
    }

    #[test]
    fn no_flags_keep_defaults() {
        let args = Args::parse_from(["pokelist"]);
        let mut config = Config::default();
        args.apply(&mut config);
        assert_eq!(config, Config::default());
        assert!(!args.plain);
    }

    #[test]
    fn invalid_override_fails_validation() {
        let dir = tempfile::tempdir().unwrap();
        let args = Args::parse_from([
            "pokelist",
            "--config",
            dir.path().join("absent.toml").to_str().unwrap(),
            "--base-url",
            "ftp://example.com",
        ]);
        assert!(matches!(
            args.load_config(),
            Err(ConfigError::ValidationError { .. })
        ));
    }
}
