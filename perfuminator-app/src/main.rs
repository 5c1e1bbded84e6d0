//! Terminal front end for the Perfuminator.
//!
//! Loads the scent catalog from disk and drives a core `Session` through
//! stdin prompts. A broken or missing catalog is fatal: the error is
//! reported and the process exits non-zero.

mod ui;

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

use perfuminator_core::{Catalog, CatalogError, CatalogSource, Perfuminator};

const DATA_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/data/scent_data.json");

/// Reads the catalog JSON from a file on disk.
struct FsCatalogSource {
    path: PathBuf,
}

#[derive(Debug, Error)]
enum LoadError {
    #[error("could not read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

impl CatalogSource for FsCatalogSource {
    type Error = LoadError;

    fn load_catalog(&self) -> Result<Catalog, Self::Error> {
        let text = fs::read_to_string(&self.path).map_err(|source| LoadError::Io {
            path: self.path.display().to_string(),
            source,
        })?;
        Ok(Catalog::from_json(&text)?)
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let engine = Perfuminator::new(FsCatalogSource {
        path: PathBuf::from(DATA_PATH),
    });
    let mut session = engine
        .open_session()
        .context("the scent catalog could not be loaded")?;

    ui::run(&mut session)
}
