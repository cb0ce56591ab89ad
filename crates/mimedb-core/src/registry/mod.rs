//! The built, immutable registry and the queries answered from it.

pub mod builder;
pub mod settings;

pub use builder::{resolve_conflict, Claim, Resolution, OCTET_STREAM};
pub use settings::{RegistrySettings, TieBreak};

use crate::db::{self, Database};
use crate::error::{MimeError, Result};
use crate::types::TypeDescriptor;
use crate::util::{bare_type, extension_of};
use std::collections::HashMap;

/// Bidirectional index over a [`Database`], built once and never mutated.
///
/// Equal-rank claims on an extension are settled by
/// [`RegistrySettings::tie_break`]. The default hands `application/*`
/// owners' extensions to the newcomer (`xml` is `text/xml`);
/// [`TieBreak::PreferApplication`] keeps them, matching jshttp `mime-types`
/// (`xml` is `application/xml`).
#[derive(Debug, Clone, PartialEq)]
pub struct Registry {
    db: Database,
    settings: RegistrySettings,
    type_to_extensions: HashMap<String, Vec<String>>,
    extension_to_type: HashMap<String, String>,
}

impl Registry {
    pub fn new(db: Database, settings: RegistrySettings) -> Self {
        let indexes = builder::build_indexes(&db, &settings);

        tracing::debug!(
            types = db.len(),
            with_extensions = indexes.type_to_extensions.len(),
            extensions = indexes.extension_to_type.len(),
            conflicts = indexes.conflicts,
            "built mime registry"
        );

        Self {
            db,
            settings,
            type_to_extensions: indexes.type_to_extensions,
            extension_to_type: indexes.extension_to_type,
        }
    }

    /// Registry over the embedded dataset.
    pub fn embedded(settings: RegistrySettings) -> Result<Self> {
        Ok(Self::new(db::load()?, settings))
    }

    pub fn from_json(json: &str, settings: RegistrySettings) -> Result<Self> {
        Ok(Self::new(Database::from_json(json)?, settings))
    }

    /// The type registered for the extension of `path`, which may be a path,
    /// a file name or a bare extension.
    pub fn lookup_type(&self, path: &str) -> Result<&str> {
        let extension = extension_of(path);
        if extension.is_empty() {
            return Err(MimeError::not_found(path));
        }

        self.extension_to_type
            .get(&extension)
            .map(String::as_str)
            .ok_or_else(|| MimeError::not_found(path))
    }

    /// A full content-type header value.
    ///
    /// Input containing a `/` is taken as a type already; anything else goes
    /// through [`lookup_type`](Self::lookup_type). A lowercased
    /// `; charset=...` is appended when one is known and the value does not
    /// mention a charset yet.
    pub fn content_type(&self, input: &str) -> Result<String> {
        let mime = if input.contains('/') {
            input.to_string()
        } else {
            self.lookup_type(input)?.to_string()
        };

        if mime.is_empty() {
            return Err(MimeError::InvalidType {
                input: input.to_string(),
            });
        }

        if mime.contains("charset") {
            return Ok(mime);
        }

        match self.charset_for(&mime) {
            Ok(charset) if !charset.is_empty() => {
                Ok(format!("{}; charset={}", mime, charset.to_lowercase()))
            }
            _ => Ok(mime),
        }
    }

    /// Preferred extension for a media type. Parameters are ignored.
    pub fn extension_for(&self, media_type: &str) -> Result<&str> {
        self.extensions_for(media_type)?
            .first()
            .map(String::as_str)
            .ok_or_else(|| MimeError::not_found(media_type))
    }

    /// Every extension registered for a media type, preferred first.
    pub fn extensions_for(&self, media_type: &str) -> Result<&[String]> {
        self.type_to_extensions
            .get(&bare_type(media_type))
            .map(Vec::as_slice)
            .ok_or_else(|| MimeError::not_found(media_type))
    }

    /// Charset for a media type: the database's explicit one, else the
    /// configured default for `text*` types.
    pub fn charset_for(&self, media_type: &str) -> Result<&str> {
        let token = bare_type(media_type);

        if let Some(descriptor) = self.db.get(&token) {
            if !descriptor.charset.is_empty() {
                return Ok(descriptor.charset.as_str());
            }
        }

        if token.starts_with("text") {
            return Ok(self.settings.default_text_charset.as_str());
        }

        Err(MimeError::not_found(media_type))
    }

    pub fn is_compressible(&self, media_type: &str) -> Result<bool> {
        self.descriptor(media_type)
            .map(|d| d.compressible)
            .ok_or_else(|| MimeError::not_found(media_type))
    }

    pub fn descriptor(&self, media_type: &str) -> Option<&TypeDescriptor> {
        self.db.get(&bare_type(media_type))
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    pub fn settings(&self) -> &RegistrySettings {
        &self.settings
    }

    /// Number of types that have at least one extension.
    pub fn type_count(&self) -> usize {
        self.type_to_extensions.len()
    }

    pub fn extension_count(&self) -> usize {
        self.extension_to_type.len()
    }

    /// `(type, extensions)` pairs, in no particular order.
    pub fn types(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.type_to_extensions
            .iter()
            .map(|(t, exts)| (t.as_str(), exts.as_slice()))
    }

    /// `(extension, type)` pairs, in no particular order.
    pub fn extensions(&self) -> impl Iterator<Item = (&str, &str)> {
        self.extension_to_type
            .iter()
            .map(|(e, t)| (e.as_str(), t.as_str()))
    }
}
