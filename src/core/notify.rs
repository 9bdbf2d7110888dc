//! Record-change notifications.
//!
//! Observers register on a `ChangeNotifier` that is handed to the service
//! via its constructor; there is no module-level bus. Observers must not
//! block, as they run inline on the emitting call.

/// A change to the record collection, carrying the affected record's ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordEvent {
    Created(u32),
    Updated(u32),
    Deleted(u32),
}

impl RecordEvent {
    pub fn record_id(&self) -> u32 {
        match self {
            RecordEvent::Created(id) | RecordEvent::Updated(id) | RecordEvent::Deleted(id) => *id,
        }
    }
}

type Observer = Box<dyn Fn(&RecordEvent) + Send + Sync>;

/// Observer registry for record changes.
#[derive(Default)]
pub struct ChangeNotifier {
    observers: Vec<Observer>,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: Fn(&RecordEvent) + Send + Sync + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    pub fn emit(&self, event: RecordEvent) {
        for observer in &self.observers {
            observer(&event);
        }
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}

impl std::fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("observers", &self.observers.len())
            .finish()
    }
}
