//! Configuration
//!
//! JSON設定ファイルの読み込み

use anyhow::{Context, Result};
use log::info;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// アプリケーション設定
///
/// 全てのキーは省略可能
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 起動時にサンプルデータを登録するか
    pub seed_sample_data: bool,
    /// 給与表示に使う通貨記号
    pub currency_symbol: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed_sample_data: true,
            currency_symbol: "₹".to_string(),
        }
    }
}

impl Config {
    /// 設定ファイルを読み込む
    ///
    /// ファイルが存在しない場合はデフォルト設定を返す
    ///
    /// # Errors
    ///
    /// ファイルの読み込みまたはJSONのパースに失敗した場合にエラーを返す
    pub fn load(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            info!("No config file at {}, using defaults", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config JSON: {}", path))?;

        info!("Loaded configuration from {}", path);
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_load_nonexistent_file_returns_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.json");

        let config = Config::load(path.to_str().unwrap()).unwrap();

        assert_eq!(config, Config::default());
        assert!(config.seed_sample_data);
        assert_eq!(config.currency_symbol, "₹");
    }

    #[test]
    fn test_load_full_config() {
        let mut file = NamedTempFile::new().unwrap();
        let json = r#"{
            "seed_sample_data": false,
            "currency_symbol": "$"
        }"#;
        file.write_all(json.as_bytes()).unwrap();

        let config = Config::load(file.path().to_str().unwrap()).unwrap();

        assert!(!config.seed_sample_data);
        assert_eq!(config.currency_symbol, "$");
    }

    #[test]
    fn test_load_partial_config_fills_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"currency_symbol": "EUR "}"#).unwrap();

        let config = Config::load(file.path().to_str().unwrap()).unwrap();

        assert!(config.seed_sample_data);
        assert_eq!(config.currency_symbol, "EUR ");
    }

    #[test]
    fn test_load_malformed_config() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();

        let result = Config::load(file.path().to_str().unwrap());

        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to parse config JSON"));
    }
}
