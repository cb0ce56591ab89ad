//! Builds the two derived indexes (type -> extensions, extension -> type)
//! from a loaded [`Database`].
//!
//! When several types claim one extension the winner is decided pairwise,
//! as each claim is seen, between the current owner and the newcomer:
//!
//! 1. an `application/octet-stream` owner always gives way
//! 2. otherwise the higher [`Source::rank`] wins
//! 3. on equal rank the [`TieBreak`] setting decides
//!
//! The rule is applied claim by claim, never as a global sort. With three or
//! more claimants on the same rank the final owner can depend on the order
//! the types are visited in; the database is walked in type-name order so
//! the outcome is at least stable.

use super::settings::{RegistrySettings, TieBreak};
use crate::db::Database;
use crate::types::Source;
use std::collections::HashMap;

pub const OCTET_STREAM: &str = "application/octet-stream";

const APPLICATION_PREFIX: &str = "application/";

/// Outcome of one conflict between an extension's owner and a new claimant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    KeepExisting,
    TakeCandidate,
}

/// A claimant for an extension: its type name and source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Claim<'a> {
    pub type_name: &'a str,
    pub source: Source,
}

pub fn resolve_conflict(
    existing: Claim<'_>,
    candidate: Claim<'_>,
    tie_break: TieBreak,
) -> Resolution {
    if existing.type_name == OCTET_STREAM {
        return Resolution::TakeCandidate;
    }

    let existing_rank = existing.source.rank();
    let candidate_rank = candidate.source.rank();

    if existing_rank > candidate_rank {
        return Resolution::KeepExisting;
    }
    if existing_rank < candidate_rank {
        return Resolution::TakeCandidate;
    }

    let existing_is_application = existing.type_name.starts_with(APPLICATION_PREFIX);
    let keep = match tie_break {
        TieBreak::PreferNonApplication => !existing_is_application,
        TieBreak::PreferApplication => existing_is_application,
    };

    if keep {
        Resolution::KeepExisting
    } else {
        Resolution::TakeCandidate
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Indexes {
    pub type_to_extensions: HashMap<String, Vec<String>>,
    pub extension_to_type: HashMap<String, String>,
    /// Number of claims that met an existing owner.
    pub conflicts: usize,
}

pub fn build_indexes(db: &Database, settings: &RegistrySettings) -> Indexes {
    let mut indexes = Indexes::default();

    for (type_name, descriptor) in db.iter() {
        if descriptor.extensions.is_empty() {
            continue;
        }

        indexes
            .type_to_extensions
            .insert(type_name.to_string(), descriptor.extensions.clone());

        let candidate = Claim {
            type_name,
            source: descriptor.source,
        };

        for extension in &descriptor.extensions {
            if let Some(existing_type) = indexes.extension_to_type.get(extension) {
                indexes.conflicts += 1;

                // Owners always come from `db`, so the lookup only misses for
                // hand-assembled databases; treat those as unknown.
                let existing = Claim {
                    type_name: existing_type,
                    source: db.get(existing_type).map(|d| d.source).unwrap_or_default(),
                };
                let resolution = resolve_conflict(existing, candidate, settings.tie_break);

                tracing::trace!(
                    extension = extension.as_str(),
                    existing = existing.type_name,
                    existing_source = %existing.source,
                    candidate = type_name,
                    candidate_source = %candidate.source,
                    ?resolution,
                    "extension conflict"
                );

                if resolution == Resolution::KeepExisting {
                    continue;
                }
            }

            indexes
                .extension_to_type
                .insert(extension.clone(), type_name.to_string());
        }
    }

    indexes
}
