use crate::achievements::Catalog;
use crate::errors::CatalogError;
use std::{env, io, net::SocketAddr, path::PathBuf};
use thiserror::Error;
use tracing::info;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DATA_PATH: &str = "data/moods.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read achievement catalog {}: {source}", path.display())]
    CatalogRead { path: PathBuf, source: io::Error },

    #[error("invalid achievement catalog {}: {source}", path.display())]
    CatalogInvalid { path: PathBuf, source: CatalogError },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub data_path: PathBuf,
    pub achievements_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], port)),
            data_path: resolve_data_path(),
            achievements_path: env::var("ACHIEVEMENTS_PATH").ok().map(PathBuf::from),
        }
    }

    /// Loads the achievement catalog, falling back to the built-in one.
    pub async fn load_catalog(&self) -> Result<Catalog, ConfigError> {
        let Some(path) = &self.achievements_path else {
            return Ok(Catalog::default());
        };

        let bytes = tokio::fs::read(path).await.map_err(|source| ConfigError::CatalogRead {
            path: path.clone(),
            source,
        })?;
        let catalog = Catalog::from_json(&bytes).map_err(|source| ConfigError::CatalogInvalid {
            path: path.clone(),
            source,
        })?;
        info!(
            "loaded {} achievements from {}",
            catalog.definitions().len(),
            path.display()
        );
        Ok(catalog)
    }
}

pub fn resolve_data_path() -> PathBuf {
    if let Ok(path) = env::var("APP_DATA_PATH") {
        return PathBuf::from(path);
    }

    PathBuf::from(DEFAULT_DATA_PATH)
}
