//! Ancestor-deletion resolution.
//!
//! Deleting a directory implicitly deletes everything under it without
//! generating per-file action lines. A path's *effective* last action may
//! therefore be a delete recorded against an ancestor directory, even
//! though the path itself was never mentioned again. This walk
//! reconstructs that implicit effect from explicit directory-level
//! actions only.

use crate::model::{Action, ActionEntry, ParseResults};

impl ParseResults {
    /// The effective last action for `path`, accounting for ancestor
    /// directory deletions.
    ///
    /// Executed per query against the current tables; nothing is cached,
    /// so it is valid to call while parsing is still in progress. Returns
    /// `None` for paths never mentioned in any action.
    ///
    /// The returned entry is the path's own most recent action unless an
    /// ancestor directory was deleted in a strictly later revision, in
    /// which case the ancestor's delete governs. Equal revision numbers
    /// never override: within one revision a directory entry cannot
    /// postdate the file's own entry.
    pub fn last_action(&self, path: &str) -> Option<&ActionEntry> {
        let record = self.files.get(path)?;
        let last_rev = record.last_rev()?;
        let mut candidate = self.revisions.get(&last_rev)?.actions.get(path)?;

        // A path directly recorded as deleted cannot be "more deleted" by
        // an ancestor.
        if candidate.action == Action::Delete {
            return Some(candidate);
        }

        // Walk ancestors nearest to farthest. Recursion terminates because
        // path segments strictly shrink. The walk continues past a match:
        // an even-higher ancestor deleted even later also wins, since
        // deletions never re-create anything.
        for ancestor in ancestors(path) {
            if !self.files.contains_key(ancestor) {
                continue;
            }
            let Some(ancestor_action) = self.last_action(ancestor) else {
                continue;
            };
            if ancestor_action.action == Action::Delete && ancestor_action.rev > last_rev {
                candidate = ancestor_action;
            }
        }

        Some(candidate)
    }
}

/// Proper ancestors of a slash-separated path, nearest first:
/// `/trunk/src/lib.rs` yields `/trunk/src`, then `/trunk`, then ``.
fn ancestors(path: &str) -> impl Iterator<Item = &str> {
    std::iter::successors(parent(path), |p| parent(p))
}

fn parent(path: &str) -> Option<&str> {
    path.rfind('/').map(|i| &path[..i])
}
