//! Asynchronous preference loading.
//!
//! Reads the persisted preference record on a background thread so the first
//! frames render immediately with default preferences.

use crate::io::LoadingState;
use eframe::egui;
use qawaid::preferences::STORAGE_KEY;
use qawaid::{JsonFileStorage, KeyValueStorage, StorageError};
use std::sync::mpsc::{channel, Receiver};
use std::sync::{Arc, Mutex};
use std::thread;

/// Raw outcome of reading the preference key.
pub type RawRecord = Result<Option<String>, StorageError>;

/// Manages the one-shot background read of the preference record.
pub struct PreferenceLoader {
    loading_state: Arc<Mutex<LoadingState>>,
    receiver: Option<Receiver<RawRecord>>,
}

impl PreferenceLoader {
    /// Creates an idle loader; nothing is read until [`start`](Self::start).
    pub fn new() -> Self {
        Self {
            loading_state: Arc::new(Mutex::new(LoadingState::new())),
            receiver: None,
        }
    }

    /// Returns true while the background read is running
    pub fn is_loading(&self) -> bool {
        self.loading_state.lock().map(|s| s.in_progress).unwrap_or(false)
    }

    /// Starts reading the preference record on a background thread
    ///
    /// # Arguments
    /// * `storage` - Backend holding the record; moved to the worker thread
    /// * `ctx` - egui context, repainted when the read completes
    pub fn start(&mut self, storage: JsonFileStorage, ctx: &egui::Context) {
        let ctx = ctx.clone();
        self.spawn(storage, move || ctx.request_repaint());
    }

    fn spawn<S, F>(&mut self, storage: S, on_done: F)
    where
        S: KeyValueStorage + Send + 'static,
        F: FnOnce() + Send + 'static,
    {
        let (sender, receiver) = channel();
        self.receiver = Some(receiver);

        if let Ok(mut state) = self.loading_state.lock() {
            state.in_progress = true;
        }

        let loading_state = Arc::clone(&self.loading_state);
        thread::spawn(move || {
            let result = storage.get_string(STORAGE_KEY);
            let _ = sender.send(result);

            if let Ok(mut state) = loading_state.lock() {
                state.in_progress = false;
            }
            on_done();
        });
    }

    /// Checks if the background read has completed and returns its result
    ///
    /// This should be called once per frame in the update loop. The result
    /// is handed out once; later calls return `None`.
    ///
    /// # Returns
    /// * `Some(Ok(Some(json)))` - The stored record
    /// * `Some(Ok(None))` - No record has been saved yet
    /// * `Some(Err(_))` - The record could not be read
    /// * `None` - Still reading, or no read was started
    pub fn check_completion(&mut self) -> Option<RawRecord> {
        let result = self.receiver.as_ref()?.try_recv().ok()?;
        self.receiver = None;
        Some(result)
    }
}

impl Default for PreferenceLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qawaid::MemoryStorage;
    use std::sync::mpsc;
    use std::time::Duration;

    #[test]
    fn test_idle_loader() {
        let mut loader = PreferenceLoader::new();
        assert!(!loader.is_loading());
        assert!(loader.check_completion().is_none());
    }

    #[test]
    fn test_background_read_delivers_record() {
        let mut storage = MemoryStorage::new();
        storage
            .set_string(STORAGE_KEY, r#"{"isDarkMode":true,"themeVariant":"green","version":1}"#.to_string())
            .unwrap();

        let (done_tx, done_rx) = mpsc::channel();
        let mut loader = PreferenceLoader::new();
        loader.spawn(storage, move || {
            let _ = done_tx.send(());
        });
        done_rx.recv_timeout(Duration::from_secs(5)).unwrap();

        let raw = loader.check_completion().unwrap().unwrap();
        assert!(raw.unwrap().contains("green"));
        assert!(!loader.is_loading());
        assert!(loader.check_completion().is_none());
    }
}
