use std::fmt::Debug;

/// Receives the item path of every activated sidebar row,
/// e.g. `["parameter", "Limit"]`
pub trait ItemReporter: Debug + Send + Sync {
    fn report(&self, path: &[&str]);
}

/// Default reporter: writes the path to the log
#[derive(Debug, Default)]
pub struct TracingReporter;

impl ItemReporter for TracingReporter {
    fn report(&self, path: &[&str]) {
        tracing::info!(item_path = ?path, "sidebar item activated");
    }
}

#[cfg(test)]
pub use recording::RecordingReporter;

#[cfg(test)]
mod recording {
    use super::ItemReporter;
    use std::sync::{Arc, Mutex};

    /// Keeps every reported path for assertions
    #[derive(Debug, Default, Clone)]
    pub struct RecordingReporter {
        paths: Arc<Mutex<Vec<Vec<String>>>>,
    }

    impl RecordingReporter {
        pub fn paths(&self) -> Vec<Vec<String>> {
            self.paths.lock().unwrap().clone()
        }
    }

    impl ItemReporter for RecordingReporter {
        fn report(&self, path: &[&str]) {
            self.paths
                .lock()
                .unwrap()
                .push(path.iter().map(|p| p.to_string()).collect());
        }
    }
}
