use std::sync::{Arc, Mutex, MutexGuard};

use crate::data::model::FlightRecord;

// ---------------------------------------------------------------------------
// Shared flight log
// ---------------------------------------------------------------------------

/// Append-only record of every flight matched by the searches it is
/// attached to.
///
/// Clones share the same storage, so one log can be handed to several
/// [`FlightSearch`](crate::FlightSearch) values or threads.
#[derive(Debug, Clone, Default)]
pub struct FlightLog {
    flights: Arc<Mutex<Vec<FlightRecord>>>,
}

impl FlightLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one search's matches, in order.
    pub fn append(&self, flights: &[FlightRecord]) {
        self.lock().extend_from_slice(flights);
    }

    /// Copy of everything logged so far, oldest first.
    pub fn snapshot(&self) -> Vec<FlightRecord> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // The vector is only ever extended, so a poisoned lock still guards
    // consistent data.
    fn lock(&self) -> MutexGuard<'_, Vec<FlightRecord>> {
        self.flights
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
