use crate::payload::PayloadContainer;

/// Lazy, single-pass iterator over the vectors of live payloads, in store order.
///
/// Each payload's expiry is checked once, when the cursor reaches it. Expired
/// payloads are skipped and their store positions recorded so the owning
/// centroid can evict them after the iterator is [`finish`](Self::finish)ed.
/// Because the iterator borrows the store, the centroid cannot be mutated
/// while one is alive.
pub(crate) struct PayloadVecs<'a, P> {
    store: &'a [P],
    cursor: usize,
    yielded: Vec<usize>,
    expired: Vec<usize>,
}

/// Store positions observed by one pass of [`PayloadVecs`]
#[derive(Debug, Default)]
pub(crate) struct Visit {
    /// Store position of the n-th yielded vector
    pub yielded: Vec<usize>,
    /// Store positions of expired payloads passed over, ascending
    pub expired: Vec<usize>,
}

impl<'a, P: PayloadContainer> PayloadVecs<'a, P> {
    pub fn new(store: &'a [P]) -> Self {
        Self {
            store,
            cursor: 0,
            yielded: Vec::with_capacity(store.len()),
            expired: Vec::new(),
        }
    }

    pub fn finish(self) -> Visit {
        Visit {
            yielded: self.yielded,
            expired: self.expired,
        }
    }
}

impl<'a, P: PayloadContainer> Iterator for PayloadVecs<'a, P> {
    type Item = &'a [f32];

    fn next(&mut self) -> Option<Self::Item> {
        let store = self.store;

        while let Some(payload) = store.get(self.cursor) {
            let pos = self.cursor;
            self.cursor += 1;

            if payload.expired() {
                self.expired.push(pos);
                continue;
            }

            self.yielded.push(pos);
            return Some(payload.vec());
        }

        None
    }
}
