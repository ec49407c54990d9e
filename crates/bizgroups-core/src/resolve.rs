// Rust guideline compliant 2026-10-17

//! Identifier resolution for directory entities.
//!
//! A token supplied by a user is matched against two keyspaces: as a prefix
//! of each entity's short ID, and as an exact label. A unique match on the
//! short ID wins outright; otherwise a unique label match wins; otherwise the
//! pair of outcomes is classified into a [`ResolveError`].

use crate::error::ResolveError;
use crate::fetch::Directory;
use crate::models::{Identifiable, Labelled, ResourceType};
use tracing::debug;

/// Result of matching a token against one keyspace of a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome<T> {
    /// Exactly one entity matched.
    Unique(T),
    /// No entity matched.
    NotFound,
    /// Two or more entities matched.
    NonUnique {
        /// Number of matching entities.
        matches: usize,
    },
}

impl<T> MatchOutcome<T> {
    /// Returns true if exactly one entity matched.
    #[must_use]
    pub fn is_unique(&self) -> bool {
        matches!(self, MatchOutcome::Unique(_))
    }
}

/// Counts matches in scan order, keeping the last match seen.
fn scan<T>(snapshot: Vec<T>, mut predicate: impl FnMut(&T) -> bool) -> MatchOutcome<T> {
    let mut matched = 0usize;
    let mut last = None;
    for entity in snapshot {
        if !predicate(&entity) {
            continue;
        }
        matched += 1;
        last = Some(entity);
    }

    match matched {
        0 => MatchOutcome::NotFound,
        1 => last.map_or(MatchOutcome::NotFound, MatchOutcome::Unique),
        matches => MatchOutcome::NonUnique { matches },
    }
}

/// Matches entities whose short ID starts with `token`.
///
/// The comparison is case-sensitive. An empty token is a prefix of every
/// short ID.
pub fn match_short_id_prefix<T: Identifiable>(token: &str, snapshot: Vec<T>) -> MatchOutcome<T> {
    scan(snapshot, |entity| entity.short_id().starts_with(token))
}

/// Matches entities whose label equals `token` exactly.
pub fn match_label<T: Labelled>(token: &str, snapshot: Vec<T>) -> MatchOutcome<T> {
    scan(snapshot, |entity| entity.label() == token)
}

/// Classifies two non-unique outcomes into a resolution error.
///
/// # Panics
///
/// Panics if either outcome is [`MatchOutcome::Unique`]. A unique outcome
/// always resolves successfully and must never reach classification.
pub fn classify<T, U>(
    by_id: &MatchOutcome<T>,
    by_label: &MatchOutcome<U>,
    token: &str,
    resource: ResourceType,
) -> ResolveError {
    let token = token.to_string();
    match (by_id, by_label) {
        (MatchOutcome::NotFound, MatchOutcome::NotFound) => {
            ResolveError::NoElementsFound { token, resource }
        }
        (MatchOutcome::NonUnique { .. }, MatchOutcome::NonUnique { .. }) => {
            ResolveError::NonUniqueId { token, resource }
        }
        (MatchOutcome::NonUnique { .. }, MatchOutcome::NotFound) => {
            ResolveError::NonUniqueIdAndNoElementsWithName { token, resource }
        }
        (MatchOutcome::NotFound, MatchOutcome::NonUnique { .. }) => {
            ResolveError::NotFoundIdAndDuplicateName { token, resource }
        }
        (MatchOutcome::Unique(_), _) | (_, MatchOutcome::Unique(_)) => {
            unreachable!("unique match for {resource} \"{token}\" reached error classification")
        }
    }
}

/// Resolves user-supplied tokens against a [`Directory`].
///
/// Every call works on freshly fetched snapshots; nothing is cached between
/// calls or between the two matching strategies.
#[derive(Debug, Clone)]
pub struct Resolver<D> {
    directory: D,
}

impl<D: Directory> Resolver<D> {
    /// Creates a resolver over `directory`.
    #[must_use]
    pub fn new(directory: D) -> Self {
        Self { directory }
    }

    /// Returns the underlying directory.
    #[must_use]
    pub fn directory(&self) -> &D {
        &self.directory
    }

    /// Resolves a short ID prefix or a label to a full ID.
    ///
    /// The short ID strategy runs first and short-circuits on a unique match;
    /// the label strategy then runs against a fresh snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A fetch fails (resolution is aborted, no partial result)
    /// - Neither strategy yields exactly one entity
    pub fn resolve(&self, token: &str) -> Result<String, ResolveError> {
        let resource = self.directory.resource_type();

        let by_id = match_short_id_prefix(token, self.directory.fetch()?);
        if let MatchOutcome::Unique(entity) = &by_id {
            debug!(%token, id = entity.full_id(), "resolved {resource} by short ID");
            return Ok(entity.full_id().to_string());
        }

        let by_label = match_label(token, self.directory.fetch()?);
        if let MatchOutcome::Unique(entity) = &by_label {
            debug!(%token, id = entity.full_id(), "resolved {resource} by label");
            return Ok(entity.full_id().to_string());
        }

        debug!(%token, "failed to resolve {resource}");
        Err(classify(&by_id, &by_label, token, resource))
    }

    /// Resolves `token` and returns the label of the matching entity.
    ///
    /// The label is looked up in a snapshot fetched after resolution. If the
    /// resolved entity is no longer present, the empty string is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if resolution fails or the lookup fetch fails.
    pub fn name_of(&self, token: &str) -> Result<String, ResolveError> {
        let full_id = self.resolve(token)?;
        let label = self
            .directory
            .fetch()?
            .into_iter()
            .find(|entity| entity.full_id() == full_id)
            .map(|entity| entity.label().to_string())
            .unwrap_or_default();
        Ok(label)
    }
}
