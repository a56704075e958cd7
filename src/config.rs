// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::corpus::SourceFormat;
use crate::error::{IndexError, Result};
use crate::utils::Validator;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub corpus: CorpusConfig,
    pub query: QueryConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorpusConfig {
    pub path: PathBuf,
    #[serde(default)]
    pub format: Option<SourceFormat>,
    pub text_column: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QueryConfig {
    pub terms: Vec<String>,
    pub display_limit: usize,
    pub show_first_document: bool,
    pub preview_chars: usize,
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let defaults = Self::default_config();
        let mut builder = config::Config::builder()
            .set_default("corpus.path", defaults.corpus.path.display().to_string())
            .and_then(|b| b.set_default("corpus.text_column", defaults.corpus.text_column))
            .and_then(|b| b.set_default("query.terms", defaults.query.terms))
            .and_then(|b| b.set_default("query.display_limit", defaults.query.display_limit as i64))
            .and_then(|b| {
                b.set_default("query.show_first_document", defaults.query.show_first_document)
            })
            .and_then(|b| b.set_default("query.preview_chars", defaults.query.preview_chars as i64))
            .map_err(|e| IndexError::Config(e.to_string()))?;

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder
                .add_source(config::File::from(Path::new(DEFAULT_CONFIG_PATH)).required(false));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("CORPUS_INDEX")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("query.terms")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| IndexError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| IndexError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            corpus: CorpusConfig {
                path: PathBuf::from("mental_health.csv"),
                format: None,
                text_column: "text".to_string(),
            },
            query: QueryConfig {
                terms: vec!["suicidal".to_string(), "mother".to_string()],
                display_limit: 10,
                show_first_document: true,
                preview_chars: 200,
            },
        }
    }

    pub fn validate(&self) -> Result<()> {
        Validator::validate_text_column(&self.corpus.text_column)
            .map_err(|e| IndexError::Config(e.to_string()))?;

        Validator::validate_display_limit(self.query.display_limit)
            .map_err(|e| IndexError::Config(e.to_string()))?;

        if self.query.preview_chars == 0 {
            return Err(IndexError::Config(
                "preview_chars must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
