//! Process-wide registry over the embedded dataset.
//!
//! Built on first use, at most once, behind [`once_cell::sync::Lazy`]; other
//! threads block until the build finishes and read it lock-free afterwards.
//! Code that wants its own dataset or settings should hold a
//! [`Registry`] directly instead.

use crate::error::Result;
use crate::registry::{Registry, RegistrySettings};
use once_cell::sync::Lazy;

static DEFAULT_REGISTRY: Lazy<Registry> = Lazy::new(|| {
    // The embedded dataset ships with the crate; nothing can be answered
    // without it.
    Registry::embedded(RegistrySettings::default())
        .unwrap_or_else(|e| panic!("embedded mime database is unusable: {}", e))
});

/// Build the default registry now. Later calls do nothing.
pub fn init() {
    Lazy::force(&DEFAULT_REGISTRY);
}

pub fn registry() -> &'static Registry {
    &DEFAULT_REGISTRY
}

pub fn lookup_type(path: &str) -> Result<&'static str> {
    registry().lookup_type(path)
}

pub fn content_type(input: &str) -> Result<String> {
    registry().content_type(input)
}

pub fn extension_for(media_type: &str) -> Result<&'static str> {
    registry().extension_for(media_type)
}

pub fn extensions_for(media_type: &str) -> Result<&'static [String]> {
    registry().extensions_for(media_type)
}

pub fn charset_for(media_type: &str) -> Result<&'static str> {
    registry().charset_for(media_type)
}

pub fn is_compressible(media_type: &str) -> Result<bool> {
    registry().is_compressible(media_type)
}
