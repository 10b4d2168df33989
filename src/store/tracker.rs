//! Generation counters that keep late remote completions from being applied.

use crate::model::RecordKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    /// Login, registration, profile and mutations: valid for the whole epoch.
    Session,
    /// Fetch-all of one collection: superseded by the next fetch of that kind.
    Fetch { kind: RecordKind, seq: u64 },
}

/// Issued when a remote call starts; checked when its result comes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    epoch: u64,
    scope: Scope,
}

impl Ticket {
    pub fn epoch(&self) -> u64 {
        self.epoch
    }
}

/// Tracks which in-flight requests are still allowed to touch the catalog.
///
/// The epoch advances when the management view is torn down (logout);
/// everything issued before that is stale. A fetch-all is also stale once a
/// newer fetch-all of the same kind has been issued. Mutations of one kind
/// never supersede each other and apply in completion order.
#[derive(Debug, Clone, Default)]
pub struct RequestTracker {
    epoch: u64,
    fetch_seq: [u64; 3],
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Ticket for a fetch-all of `kind`, superseding earlier ones.
    pub fn fetch(&mut self, kind: RecordKind) -> Ticket {
        let slot = &mut self.fetch_seq[slot(kind)];
        *slot += 1;
        Ticket {
            epoch: self.epoch,
            scope: Scope::Fetch { kind, seq: *slot },
        }
    }

    /// Ticket for any call that is only invalidated by teardown.
    pub fn session(&self) -> Ticket {
        Ticket {
            epoch: self.epoch,
            scope: Scope::Session,
        }
    }

    pub fn is_current(&self, ticket: &Ticket) -> bool {
        if ticket.epoch != self.epoch {
            return false;
        }
        match ticket.scope {
            Scope::Session => true,
            Scope::Fetch { kind, seq } => self.fetch_seq[slot(kind)] == seq,
        }
    }

    /// Mark in-flight fetch-alls of `kind` stale without issuing a new one.
    ///
    /// Used once a mutation has been applied locally: a list the server
    /// produced before that mutation would undo it.
    pub fn supersede_fetch(&mut self, kind: RecordKind) {
        self.fetch_seq[slot(kind)] += 1;
    }

    /// Invalidate every ticket issued so far.
    pub fn advance_epoch(&mut self) {
        self.epoch += 1;
    }
}

fn slot(kind: RecordKind) -> usize {
    match kind {
        RecordKind::Segment => 0,
        RecordKind::Brand => 1,
        RecordKind::Vehicle => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_tickets_are_current() {
        let mut tracker = RequestTracker::new();
        let fetch = tracker.fetch(RecordKind::Brand);
        let session = tracker.session();
        assert!(tracker.is_current(&fetch));
        assert!(tracker.is_current(&session));
    }

    #[test]
    fn newer_fetch_supersedes_older_of_same_kind_only() {
        let mut tracker = RequestTracker::new();
        let first = tracker.fetch(RecordKind::Vehicle);
        let other_kind = tracker.fetch(RecordKind::Segment);
        let second = tracker.fetch(RecordKind::Vehicle);
        assert!(!tracker.is_current(&first));
        assert!(tracker.is_current(&second));
        assert!(tracker.is_current(&other_kind));
    }

    #[test]
    fn superseding_a_kind_leaves_others_and_later_fetches_current() {
        let mut tracker = RequestTracker::new();
        let vehicles = tracker.fetch(RecordKind::Vehicle);
        let brands = tracker.fetch(RecordKind::Brand);
        tracker.supersede_fetch(RecordKind::Vehicle);
        assert!(!tracker.is_current(&vehicles));
        assert!(tracker.is_current(&brands));
        assert!(tracker.is_current(&tracker.session()));

        let next = tracker.fetch(RecordKind::Vehicle);
        assert!(tracker.is_current(&next));
    }

    #[test]
    fn session_tickets_do_not_supersede_each_other() {
        let tracker = RequestTracker::new();
        let a = tracker.session();
        let b = tracker.session();
        assert!(tracker.is_current(&a));
        assert!(tracker.is_current(&b));
    }

    #[test]
    fn advancing_epoch_invalidates_everything() {
        let mut tracker = RequestTracker::new();
        let fetch = tracker.fetch(RecordKind::Segment);
        let session = tracker.session();
        tracker.advance_epoch();
        assert!(!tracker.is_current(&fetch));
        assert!(!tracker.is_current(&session));
        assert!(tracker.is_current(&tracker.session()));
        assert_eq!(tracker.epoch(), 1);
    }
}
