//! MIME content-type inference from file names, paths and bare extensions,
//! plus the reverse mapping and charset inference, over an embedded mime-db.
//!
//! ```rust
//! use mimedb_core::{content_type, extension_for, lookup_type};
//!
//! assert_eq!(lookup_type("/srv/www/index.html").unwrap(), "text/html");
//! assert_eq!(content_type("json").unwrap(), "application/json; charset=utf-8");
//! assert_eq!(extension_for("image/jpeg").unwrap(), "jpeg");
//! ```
//!
//! # Equal-rank conflicts
//!
//! When two types from equally ranked sources claim one extension, the
//! default [`TieBreak::PreferNonApplication`] lets an `application/*` owner
//! give the extension up, so `xml` resolves to `text/xml` and `rtf` to
//! `text/rtf`. The jshttp `mime-types` package keeps the `application/*`
//! owner instead. Build a [`Registry`] with [`TieBreak::PreferApplication`]
//! to get that ordering:
//!
//! ```rust
//! use mimedb_core::{lookup_type, Registry, RegistrySettings, TieBreak};
//!
//! assert_eq!(lookup_type("feed.xml").unwrap(), "text/xml");
//!
//! let settings = RegistrySettings::new().with_tie_break(TieBreak::PreferApplication);
//! let registry = Registry::embedded(settings).unwrap();
//! assert_eq!(registry.lookup_type("feed.xml").unwrap(), "application/xml");
//! assert_eq!(registry.lookup_type("letter.rtf").unwrap(), "application/rtf");
//! ```

pub mod error;
pub mod types;
pub mod db;
pub mod util;
pub mod registry;
pub mod global;

pub use error::{MimeError, Result};
pub use types::{Source, TypeDescriptor};
pub use db::Database;
pub use registry::{Registry, RegistrySettings, TieBreak};
pub use global::{
    charset_for, content_type, extension_for, extensions_for, init, is_compressible, lookup_type,
    registry,
};
