use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Dev,
    Prod,
}

impl Environment {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "prod" | "production" => Self::Prod,
            _ => Self::Dev,
        }
    }

    /// Returns the default data path for this environment
    pub fn default_data_path(&self) -> PathBuf {
        match self {
            Self::Dev => PathBuf::from("./data"),
            Self::Prod => PathBuf::from("/data"),
        }
    }

    pub fn is_dev(&self) -> bool {
        matches!(self, Self::Dev)
    }

    pub fn is_prod(&self) -> bool {
        matches!(self, Self::Prod)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub env: Environment,
    pub data_path: PathBuf,
    /// Harvard Art Museums access credential; empty means the harvard source
    /// runs degraded (empty results), never a startup failure.
    pub harvard_api_key: String,
}

impl Config {
    pub fn new(env: Environment, data_path: impl AsRef<Path>, harvard_api_key: String) -> Self {
        Self {
            env,
            data_path: data_path.as_ref().to_path_buf(),
            harvard_api_key,
        }
    }

    /// Returns the path of the persisted exhibition collection
    pub fn exhibitions_path(&self) -> PathBuf {
        self.data_path.join("exhibitions.json")
    }
}
