//! Single-slot memo for the derived row order.
//!
//! An explicit, owned cache object (not a process-wide singleton) keyed by
//! a fingerprint of the (filter, sort, source-generation) snapshot.
//! Eviction policy: latest state wins; a miss overwrites the slot.
//! Purely an optimization — behavior is identical with the cache empty.

use tabulon_core::hash::Hash256;

#[derive(Debug, Default)]
pub struct OrderCache {
    slot: Option<(Hash256, Vec<usize>)>,
}

impl OrderCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, fingerprint: &Hash256) -> Option<&[usize]> {
        match &self.slot {
            Some((fp, order)) if fp == fingerprint => Some(order),
            _ => None,
        }
    }

    pub fn put(&mut self, fingerprint: Hash256, order: Vec<usize>) {
        self.slot = Some((fingerprint, order));
    }

    pub fn clear(&mut self) {
        self.slot = None;
    }
}
