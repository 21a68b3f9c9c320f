//! `PatronStore` — the set of patrons currently in the park.
//!
//! Patrons come and go every few ticks, so storage is a `BTreeMap` keyed by
//! `PatronId` rather than a dense `Vec`.  Ids are handed out from a
//! monotonically increasing counter, which means map order is spawn order and
//! iteration is deterministic without any extra bookkeeping.

use std::collections::BTreeMap;

use park_core::{PatronId, Point, Tick};

use crate::{Color, Patron, PatronState};

#[derive(Default)]
pub struct PatronStore {
    patrons: BTreeMap<PatronId, Patron>,
    next_id: u32,
}

impl PatronStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a patron at `position` and return its id.
    pub fn spawn(&mut self, position: Point, color: Color, now: Tick) -> PatronId {
        let id = PatronId(self.next_id);
        self.next_id += 1;
        self.patrons.insert(id, Patron::new(id, position, color, now));
        id
    }

    /// Remove and return a patron.  `None` if it is not present.
    pub fn remove(&mut self, id: PatronId) -> Option<Patron> {
        self.patrons.remove(&id)
    }

    #[inline]
    pub fn get(&self, id: PatronId) -> Option<&Patron> {
        self.patrons.get(&id)
    }

    #[inline]
    pub fn get_mut(&mut self, id: PatronId) -> Option<&mut Patron> {
        self.patrons.get_mut(&id)
    }

    #[inline]
    pub fn contains(&self, id: PatronId) -> bool {
        self.patrons.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.patrons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patrons.is_empty()
    }

    /// Total patrons ever spawned into this store.
    pub fn spawned(&self) -> u32 {
        self.next_id
    }

    /// Present patrons in spawn order.
    pub fn iter(&self) -> impl Iterator<Item = &Patron> + '_ {
        self.patrons.values()
    }

    /// Owned copy of the present ids, in spawn order.
    ///
    /// The world iterates this snapshot during the patron phase so that
    /// patrons removed mid-phase do not disturb iteration.
    pub fn ids(&self) -> Vec<PatronId> {
        self.patrons.keys().copied().collect()
    }

    /// Number of present patrons in `state`.
    pub fn count_in(&self, state: PatronState) -> usize {
        self.patrons.values().filter(|p| p.state() == state).count()
    }
}
