//! Shared stdout predicates for verb tests

#![allow(dead_code)]

use predicates::prelude::*;
use predicates::str::ContainsPredicate;

/// Matches the unrecorded-changes summary line of the status report.
pub fn has_unrecorded_changes() -> ContainsPredicate {
    predicate::str::contains("unrecorded changes")
}

/// Matches a commit subject appearing in the rendered commit graph.
pub fn has_graph_entry(subject: &str) -> ContainsPredicate {
    predicate::str::contains(subject.to_string())
}
