//! Content-addressed URL shortener.
//!
//! Every URL is stored under a short key derived from its SHA-256 digest
//! ([`keygen::derive_key`]), so shortening the same URL twice yields the same
//! key. Mappings live in memory in a [`store::ShortenerStore`] shared by all
//! request handlers and are lost when the process exits.

pub mod config;
pub mod error;
pub mod handlers;
pub mod keygen;
pub mod routes;
pub mod store;

use store::ShortenerStore;

// ── Shared application state ───────────────────────────────────────────────

pub struct AppState {
    pub config: config::AppConfig,
    pub store: ShortenerStore,
}

impl AppState {
    /// State with a fresh, empty store.
    pub fn new(config: config::AppConfig) -> Self {
        Self {
            config,
            store: ShortenerStore::new(),
        }
    }
}
