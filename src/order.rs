//! Final section order for a year folder.
//!
//! The declared order from the year's `index.md` is a prefix preference, not
//! a whitelist:
//!
//! ```text
//! actual:   { alphaTalk, betaTalk, gammaTalk }
//! declared: [ betaTalk, ghost, alphaTalk, betaTalk ]
//!
//! order:    [ betaTalk, alphaTalk, gammaTalk ]
//! missing:  [ ghost ]
//! ```
//!
//! Declared entries that exist come first in declared order, then every
//! remaining subdirectory in ascending byte order. No entry appears twice.

use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Resolution {
    pub order: Vec<String>,
    /// Declared identifiers with no matching subdirectory, in declared order.
    pub missing: Vec<String>,
}

/// Merge the actual subdirectory names with the declared order.
///
/// Hidden directories must already be filtered out of `actual`.
pub fn resolve_order(actual: &BTreeSet<String>, declared: &[String]) -> Resolution {
    let mut remaining = actual.clone();
    let mut resolution = Resolution::default();

    for id in declared {
        if remaining.remove(id) {
            resolution.order.push(id.clone());
        } else if !actual.contains(id) && !resolution.missing.contains(id) {
            resolution.missing.push(id.clone());
        }
    }

    // BTreeSet iterates in ascending order.
    resolution.order.extend(remaining);
    resolution
}
