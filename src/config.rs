use crate::error::{Result, SpFinderError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub token: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| SpFinderError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("sp-field-finder").join("config.json"))
    }

    /// トークンの解決（CLI引数 → 環境変数 → 設定ファイル）
    pub fn resolve_token(&self, cli_token: Option<String>) -> Result<String> {
        if let Some(token) = cli_token {
            return Ok(token);
        }

        if let Ok(token) = std::env::var("JIRA_API_TOKEN") {
            if !token.trim().is_empty() {
                return Ok(token);
            }
        }

        self.token.clone().ok_or(SpFinderError::MissingToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_token_takes_precedence() {
        let config = Config {
            token: Some("from-config".to_string()),
        };
        let token = config.resolve_token(Some("from-cli".to_string())).unwrap();
        assert_eq!(token, "from-cli");
    }

    #[test]
    fn test_config_path_suffix() {
        let path = Config::config_path().unwrap();
        assert!(path.ends_with(".config/sp-field-finder/config.json"));
    }
}
