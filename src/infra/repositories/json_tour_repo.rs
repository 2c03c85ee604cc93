use crate::domain::{models::tour::Tour, ports::TourRepository};
use crate::error::AppError;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::debug;

/// Reads the catalog from a JSON array on every call, so edits to the file
/// show up without a restart.
pub struct JsonTourRepo {
    path: PathBuf,
}

impl JsonTourRepo {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl TourRepository for JsonTourRepo {
    async fn list(&self) -> Result<Vec<Tour>, AppError> {
        let raw = match tokio::fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Tours file {} not found, serving empty catalog", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(AppError::Io(e)),
        };
        Ok(serde_json::from_slice(&raw)?)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Tour>, AppError> {
        Ok(self.list().await?.into_iter().find(|t| t.id == id))
    }
}
