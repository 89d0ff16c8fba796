use jiff::{SignedDuration, Timestamp};
use std::sync::{Arc, Mutex};

/// Clock shared by the server and tests. A live source follows the wall
/// clock; a fixed source only moves when told to.
#[derive(Clone)]
pub struct TimeSource {
    fixed: Option<Arc<Mutex<Timestamp>>>,
}

impl TimeSource {
    pub fn live() -> Self {
        Self { fixed: None }
    }

    pub fn fixed(initial_time: Timestamp) -> Self {
        Self {
            fixed: Some(Arc::new(Mutex::new(initial_time))),
        }
    }

    pub fn now(&self) -> Timestamp {
        match &self.fixed {
            Some(time) => *time.lock().unwrap_or_else(|e| e.into_inner()),
            None => Timestamp::now(),
        }
    }

    /// No effect on a live source.
    pub fn advance(&self, duration: SignedDuration) {
        if let Some(time) = &self.fixed {
            let mut time = time.lock().unwrap_or_else(|e| e.into_inner());
            *time += duration;
        }
    }
}
