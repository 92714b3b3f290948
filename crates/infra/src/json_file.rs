//! JSON file persistence for the catalog.
//!
//! Layout: `{"products": [ ... ]}` in catalog order, each product in the same
//! camelCase shape the HTTP API uses. Writes go to a sibling `*.tmp` file that
//! is synced and then renamed over the target, so a crash mid-write leaves the
//! previous catalog intact.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use minimarket_catalog::{Product, ProductRepository, RepositoryError};

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    products: Vec<Product>,
}

#[derive(Debug, Serialize)]
struct CatalogDocumentRef<'a> {
    products: &'a [Product],
}

/// Catalog stored as a single pretty-printed JSON document.
#[derive(Debug, Clone)]
pub struct JsonFileProductRepository {
    path: PathBuf,
}

impl JsonFileProductRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut tmp = self.path.as_os_str().to_owned();
        tmp.push(".tmp");
        PathBuf::from(tmp)
    }

    fn write_atomically(&self, bytes: &[u8]) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp = self.temp_path();
        {
            let mut file = File::create(&tmp)?;
            file.write_all(bytes)?;
            file.sync_all()?;
        }
        fs::rename(&tmp, &self.path)
    }
}

impl ProductRepository for JsonFileProductRepository {
    fn load(&self) -> Result<Vec<Product>, RepositoryError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "catalog file not found; starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(io_error(&self.path, e)),
        };

        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }

        let doc: CatalogDocument = serde_json::from_str(&raw).map_err(|e| {
            RepositoryError::Encoding(format!("{}: {e}", self.path.display()))
        })?;

        tracing::debug!(
            path = %self.path.display(),
            products = doc.products.len(),
            "catalog loaded"
        );
        Ok(doc.products)
    }

    fn save(&self, products: &[Product]) -> Result<(), RepositoryError> {
        let bytes = serde_json::to_vec_pretty(&CatalogDocumentRef { products })
            .map_err(|e| RepositoryError::Encoding(e.to_string()))?;

        self.write_atomically(&bytes)
            .map_err(|e| io_error(&self.path, e))?;

        tracing::debug!(
            path = %self.path.display(),
            products = products.len(),
            "catalog saved"
        );
        Ok(())
    }
}

fn io_error(path: &Path, e: io::Error) -> RepositoryError {
    RepositoryError::Io(format!("{}: {e}", path.display()))
}
