//! In-memory memo table for derived themes.
//!
//! Derivation is a pure function of the seed, so a `ThemeCache` can hand the
//! same token set to every caller asking for the same two colors.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use tracing::{debug, trace};

use crate::tokens::{derive_theme_from_seed, ThemeTokens};
use crate::types::{ThemeError, ThemeSeed};

#[derive(Debug, Default)]
pub struct ThemeCache {
    entries: RwLock<HashMap<ThemeSeed, Arc<ThemeTokens>>>,
}

impl ThemeCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_derive(&self, seed: ThemeSeed) -> Arc<ThemeTokens> {
        if let Some(tokens) = self
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&seed)
        {
            trace!(primary = %seed.primary, secondary = %seed.secondary, "theme cache hit");
            return Arc::clone(tokens);
        }

        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        // another writer may have filled it between the two locks
        let tokens = entries.entry(seed).or_insert_with(|| {
            debug!(primary = %seed.primary, secondary = %seed.secondary, "theme cache miss");
            Arc::new(derive_theme_from_seed(seed))
        });
        Arc::clone(tokens)
    }

    pub fn get_or_derive_hex(
        &self,
        primary: &str,
        secondary: &str,
    ) -> Result<Arc<ThemeTokens>, ThemeError> {
        Ok(self.get_or_derive(ThemeSeed::from_hex(primary, secondary)?))
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}
