//! Wiring helpers shared by the integration suites.

use std::sync::{Arc, Once};

use chalkboard::registry::{Capabilities, Registry};
use chalkboard::testkit::MemoryStore;
use tracing_subscriber::EnvFilter;

pub type TestRegistry = Registry<MemoryStore>;

/// A registry over a fresh in-memory store, everything mutable.
pub fn registry() -> Registry<MemoryStore> {
    init_tracing();
    Registry::new(Arc::new(MemoryStore::new()))
}

/// A registry with explicit capabilities over a fresh store.
pub fn registry_with(caps: Capabilities) -> Registry<MemoryStore> {
    init_tracing();
    Registry::with_capabilities(Arc::new(MemoryStore::new()), caps)
}

/// Install the log subscriber once per test binary; `RUST_LOG` filters.
fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}
