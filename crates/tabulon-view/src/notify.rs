//! Subscriber list: the view informs the host synchronously after each
//! successful mutation. Rejected mutations fire nothing.

use tabulon_core::id::SubscriberId;
use tabulon_stages::PageMeta;

/// What changed, delivered to every subscriber in subscription order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    /// Columns and source records were replaced; all state reset.
    Configured,
    /// Query or a column filter changed.
    FilterChanged,
    /// Sort column or direction changed (or was cleared).
    SortChanged,
    /// Page index or page size changed (including reclamping).
    PageChanged,
}

pub type Subscriber = Box<dyn FnMut(&ViewEvent, &PageMeta) + Send>;

#[derive(Default)]
pub struct Subscribers {
    entries: Vec<(SubscriberId, Subscriber)>,
    next_id: u64,
}

impl Subscribers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(
        &mut self,
        callback: impl FnMut(&ViewEvent, &PageMeta) + Send + 'static,
    ) -> SubscriberId {
        let id = SubscriberId::new(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(callback)));
        id
    }

    /// Returns false when the id was never registered (or already removed).
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(sid, _)| *sid != id);
        self.entries.len() != before
    }

    pub fn notify(&mut self, event: &ViewEvent, meta: &PageMeta) {
        for (_, callback) in &mut self.entries {
            callback(event, meta);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for Subscribers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscribers")
            .field("count", &self.entries.len())
            .finish()
    }
}
