use crate::models::{ChainBrand, Venue};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;
use thiserror::Error;

/// Errors that can occur when reading or writing catalog files
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl CatalogError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        CatalogError::Io { path: path.to_path_buf(), source }
    }

    fn parse(path: &Path, source: serde_json::Error) -> Self {
        CatalogError::Parse { path: path.to_path_buf(), source }
    }
}

/// Identity of one version of a file on disk
///
/// A rewrite changes the modification time or length, which yields a new
/// key and forces a fresh read.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct FileStamp {
    path: PathBuf,
    modified: Option<SystemTime>,
    len: u64,
}

impl FileStamp {
    async fn of(path: &Path) -> Result<Self, CatalogError> {
        let meta = tokio::fs::metadata(path)
            .await
            .map_err(|e| CatalogError::io(path, e))?;
        Ok(Self {
            path: path.to_path_buf(),
            modified: meta.modified().ok(),
            len: meta.len(),
        })
    }
}

/// Read-only access to the venue catalog and chain list
///
/// Every load returns a complete `Arc` snapshot. Snapshots are parsed in
/// full before being cached, so concurrent readers never see a partial
/// file. Unreadable files degrade to an empty snapshot.
pub struct CatalogStore {
    venues_path: PathBuf,
    chains_path: PathBuf,
    venues: moka::future::Cache<FileStamp, Arc<Vec<Venue>>>,
    chains: moka::future::Cache<FileStamp, Arc<Vec<ChainBrand>>>,
}

impl CatalogStore {
    /// Create a new catalog store
    pub fn new(venues_path: impl Into<PathBuf>, chains_path: impl Into<PathBuf>, capacity: u64) -> Self {
        Self {
            venues_path: venues_path.into(),
            chains_path: chains_path.into(),
            venues: moka::future::Cache::new(capacity.max(1)),
            chains: moka::future::Cache::new(capacity.max(1)),
        }
    }

    pub fn venues_path(&self) -> &Path {
        &self.venues_path
    }

    /// Load searchable venues, i.e. those with an address
    pub async fn load_venues(&self) -> Arc<Vec<Venue>> {
        match self.try_load_venues().await {
            Ok(venues) => venues,
            Err(e) => {
                tracing::warn!("Venue catalog unavailable, serving empty catalog: {}", e);
                Arc::new(Vec::new())
            }
        }
    }

    /// Load known chain brands
    pub async fn load_chain_brands(&self) -> Arc<Vec<ChainBrand>> {
        match self.try_load_chain_brands().await {
            Ok(chains) => chains,
            Err(e) => {
                tracing::warn!("Chain list unavailable, chain expansion disabled: {}", e);
                Arc::new(Vec::new())
            }
        }
    }

    pub async fn try_load_venues(&self) -> Result<Arc<Vec<Venue>>, CatalogError> {
        let stamp = FileStamp::of(&self.venues_path).await?;
        if let Some(venues) = self.venues.get(&stamp).await {
            return Ok(venues);
        }

        let venues: Vec<Venue> = read_records::<Venue>(&self.venues_path)
            .await?
            .into_iter()
            .filter(Venue::has_address)
            .collect();
        tracing::info!("Loaded {} venues from {}", venues.len(), self.venues_path.display());

        let venues = Arc::new(venues);
        self.venues.insert(stamp, venues.clone()).await;
        Ok(venues)
    }

    pub async fn try_load_chain_brands(&self) -> Result<Arc<Vec<ChainBrand>>, CatalogError> {
        let stamp = FileStamp::of(&self.chains_path).await?;
        if let Some(chains) = self.chains.get(&stamp).await {
            return Ok(chains);
        }

        let chains = read_records::<ChainBrand>(&self.chains_path).await?;
        tracing::info!("Loaded {} chain brands from {}", chains.len(), self.chains_path.display());

        let chains = Arc::new(chains);
        self.chains.insert(stamp, chains.clone()).await;
        Ok(chains)
    }
}

/// Read a JSON array of records, skipping entries that cannot be decoded
///
/// A record missing a required field (name, coordinates) is dropped with a
/// warning instead of failing the whole file.
pub async fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, CatalogError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| CatalogError::io(path, e))?;
    let raw: Vec<serde_json::Value> =
        serde_json::from_slice(&bytes).map_err(|e| CatalogError::parse(path, e))?;

    let total = raw.len();
    let records: Vec<T> = raw
        .into_iter()
        .filter_map(|value| serde_json::from_value(value).ok())
        .collect();

    if records.len() < total {
        tracing::warn!(
            "Skipped {} malformed records in {}",
            total - records.len(),
            path.display()
        );
    }

    Ok(records)
}

/// Write records as pretty JSON, replacing the file in one rename
pub async fn write_records<T: Serialize>(path: &Path, records: &[T]) -> Result<(), CatalogError> {
    let json = serde_json::to_vec_pretty(records).map_err(|e| CatalogError::parse(path, e))?;

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    tokio::fs::write(&tmp, json)
        .await
        .map_err(|e| CatalogError::io(&tmp, e))?;
    tokio::fs::rename(&tmp, path)
        .await
        .map_err(|e| CatalogError::io(path, e))?;

    Ok(())
}
