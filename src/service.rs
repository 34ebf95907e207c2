//! Query front over the feature index.
//!
//! Owns a fully built [`FeatureIndex`] and applies the caller-side contract
//! the index itself does not enforce: queries are trimmed, empty queries
//! yield an empty result, and anything shorter than [`MIN_QUERY_LEN`]
//! characters is rejected before it reaches the tree.

use std::path::Path;

use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::errors::{FeatgrepError, Result};
use crate::index::FeatureIndex;
use crate::types::FeatureRecord;

/// Minimum query length for prefix search, in characters.
pub const MIN_QUERY_LEN: usize = 2;

#[derive(Debug)]
pub struct SearchService {
    index: FeatureIndex,
}

impl SearchService {
    pub fn new(catalog: Catalog) -> Self {
        let index = catalog.into_index();
        info!(features = index.len(), "feature index built");
        Self { index }
    }

    pub fn with_builtin_catalog() -> Self {
        Self::new(Catalog::builtin())
    }

    pub fn from_catalog_path(path: &Path) -> Result<Self> {
        Ok(Self::new(Catalog::from_path(path)?))
    }

    /// Prefix search. Trims the query first; an empty query returns no
    /// results, and one shorter than [`MIN_QUERY_LEN`] characters is an error.
    pub fn search(&self, query: &str) -> Result<Vec<FeatureRecord>> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }
        if query.chars().count() < MIN_QUERY_LEN {
            return Err(FeatgrepError::QueryTooShort { min: MIN_QUERY_LEN });
        }

        let results: Vec<FeatureRecord> =
            self.index.find_by_prefix(query).into_iter().cloned().collect();
        debug!(query, hits = results.len(), "prefix search");
        Ok(results)
    }

    /// Case-insensitive exact lookup by feature name.
    pub fn lookup(&self, name: &str) -> Option<FeatureRecord> {
        self.index.find_exact(name.trim()).cloned()
    }

    /// Every catalog entry, in case-insensitive name order.
    pub fn all(&self) -> Vec<FeatureRecord> {
        self.index.to_vec().into_iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}
