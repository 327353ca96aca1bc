//! Asynchronous loading of Arabic and Urdu typefaces.
//!
//! Fonts are optional: whatever files are found in the fonts directory are
//! appended as fallbacks to egui's default families. Missing or unreadable
//! files are logged and rendering continues with the built-in fonts.

use crate::io::LoadingState;
use eframe::egui;
use egui::{FontData, FontDefinitions, FontFamily};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver};
use std::sync::{Arc, Mutex};
use std::thread;

/// Font files looked up in the fonts directory, in fallback order.
pub const FONT_FILES: [&str; 3] = [
    "Amiri-Regular.ttf",
    "NotoNaskhArabic-Regular.ttf",
    "NotoNastaliqUrdu-Regular.ttf",
];

/// Raw bytes of one font file.
pub struct LoadedFont {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Reads every known font file present in `dir`.
pub fn read_fonts(dir: &Path) -> Vec<LoadedFont> {
    FONT_FILES
        .iter()
        .filter_map(|file| {
            let path = dir.join(file);
            match std::fs::read(&path) {
                Ok(bytes) if !looks_like_font(&bytes) => {
                    log::warn!("Skipping {}: not a TrueType/OpenType file", path.display());
                    None
                }
                Ok(bytes) => Some(LoadedFont {
                    name: file.trim_end_matches(".ttf").to_string(),
                    bytes,
                }),
                Err(e) => {
                    log::debug!("Font {} unavailable: {}", path.display(), e);
                    None
                }
            }
        })
        .collect()
}

/// Checks the sfnt version tag; egui panics on fonts it cannot parse.
fn looks_like_font(bytes: &[u8]) -> bool {
    matches!(bytes.get(..4), Some([0, 1, 0, 0]) | Some(b"OTTO") | Some(b"true"))
}

/// egui's default fonts with `fonts` appended as fallbacks to both families.
pub fn font_definitions(fonts: Vec<LoadedFont>) -> FontDefinitions {
    let mut definitions = FontDefinitions::default();
    for font in fonts {
        definitions
            .font_data
            .insert(font.name.clone(), Arc::new(FontData::from_owned(font.bytes)));
        for family in [FontFamily::Proportional, FontFamily::Monospace] {
            definitions.families.entry(family).or_default().push(font.name.clone());
        }
    }
    definitions
}

/// Manages the one-shot background font read.
pub struct FontLoader {
    loading_state: Arc<Mutex<LoadingState>>,
    receiver: Option<Receiver<Vec<LoadedFont>>>,
}

impl FontLoader {
    /// Creates an idle loader
    pub fn new() -> Self {
        Self {
            loading_state: Arc::new(Mutex::new(LoadingState::new())),
            receiver: None,
        }
    }

    /// Returns true while font files are being read
    pub fn is_loading(&self) -> bool {
        self.loading_state.lock().map(|s| s.in_progress).unwrap_or(false)
    }

    /// Reads the known font files from `dir` on a background thread
    ///
    /// # Arguments
    /// * `dir` - Directory searched for [`FONT_FILES`]
    /// * `ctx` - egui context, repainted when the read completes
    pub fn start(&mut self, dir: PathBuf, ctx: &egui::Context) {
        let (sender, receiver) = channel();
        self.receiver = Some(receiver);

        if let Ok(mut state) = self.loading_state.lock() {
            state.in_progress = true;
        }

        let loading_state = Arc::clone(&self.loading_state);
        let ctx_handle = ctx.clone();
        thread::spawn(move || {
            let _ = sender.send(read_fonts(&dir));

            if let Ok(mut state) = loading_state.lock() {
                state.in_progress = false;
            }
            ctx_handle.request_repaint();
        });
    }

    /// Installs loaded fonts into `ctx` once the read completes.
    ///
    /// Returns true on the frame the fonts were applied.
    pub fn apply_if_ready(&mut self, ctx: &egui::Context) -> bool {
        let Some(fonts) = self.receiver.as_ref().and_then(|r| r.try_recv().ok()) else {
            return false;
        };
        self.receiver = None;

        if fonts.is_empty() {
            log::warn!("No Arabic fonts found, using built-in fonts");
            return false;
        }
        log::info!("Loaded {} Arabic/Urdu font(s)", fonts.len());
        ctx.set_fonts(font_definitions(fonts));
        true
    }
}

impl Default for FontLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fonts_dir_yields_nothing() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_fonts(&dir.path().join("absent")).is_empty());
    }

    #[test]
    fn test_reads_present_files_only() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("Amiri-Regular.ttf"), b"\x00\x01\x00\x00glyphs").unwrap();
        std::fs::write(dir.path().join("NotoNaskhArabic-Regular.ttf"), b"<html>").unwrap();

        let fonts = read_fonts(dir.path());
        assert_eq!(fonts.len(), 1);
        assert_eq!(fonts[0].name, "Amiri-Regular");
    }

    #[test]
    fn test_definitions_append_fallbacks() {
        let defs = font_definitions(vec![LoadedFont {
            name: "Amiri-Regular".to_string(),
            bytes: vec![0, 1, 2],
        }]);
        assert!(defs.font_data.contains_key("Amiri-Regular"));
        let proportional = &defs.families[&FontFamily::Proportional];
        assert_eq!(proportional.last().map(String::as_str), Some("Amiri-Regular"));
    }

    #[test]
    fn test_idle_loader() {
        let loader = FontLoader::new();
        assert!(!loader.is_loading());
    }
}
