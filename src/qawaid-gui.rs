//! Qawaid lesson viewer GUI application
//!
//! An interactive viewer for Arabic / Quranic grammar lessons built with egui.
//! The viewer features:
//! - Drill-down navigation: home -> section -> lesson, with back navigation
//! - Trilingual (Arabic / Urdu / English) text, tables and box diagrams
//! - Light / dark mode and several colour variants, persisted across restarts
//! - Fixed palettes for the noun, verb and particle sections
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state and coordination
//! - `state/` - UI-only state (lesson previews)
//! - `io/` - Background loading of preferences and fonts
//! - `presentation/` - Palette to egui visuals mapping
//! - `ui/` - Screen rendering and the header bar

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;
use qawaid::{AppConfig, JsonFileStorage};
use std::time::{Duration, Instant};

mod app;
mod io;
mod presentation;
mod state;
mod ui;

use app::{AppState, ApplicationCoordinator, ThemeCoordinator};
use io::{FontLoader, PreferenceLoader};
use ui::screen_manager::ScreenManager;

/// Repaint interval while startup loads are still running.
const LOADING_REPAINT: Duration = Duration::from_millis(100);

/// Main application entry point that initializes logging and launches the viewer.
fn main() -> eframe::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_args(std::env::args().skip(1));
    log::info!("Using storage directory {}", config.storage_dir.display());
    if let Err(e) = config.ensure_dirs() {
        log::warn!("{:#}; preferences will not be saved", e);
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_title("Qawaid"),
        ..Default::default()
    };

    eframe::run_native(
        "Qawaid",
        options,
        Box::new(move |cc| Ok(Box::new(QawaidApp::new(cc, config)))),
    )
}

/// The main Qawaid application.
///
/// Delegates to coordinators:
/// - `ApplicationCoordinator` applies interactions and the splash transition
/// - `ThemeCoordinator` resolves and applies the palette
/// - `ScreenManager` renders the visible screen
struct QawaidApp {
    /// Centralized application state
    state: AppState,
    /// Background read of the preference record
    preference_loader: PreferenceLoader,
    /// Background read of Arabic / Urdu fonts
    font_loader: FontLoader,
}

impl QawaidApp {
    /// Creates the app on the splash screen and starts the startup loads.
    ///
    /// Until the preference record arrives the UI renders with defaults.
    fn new(cc: &eframe::CreationContext, config: AppConfig) -> Self {
        let storage = JsonFileStorage::new(&config.storage_dir);

        let mut preference_loader = PreferenceLoader::new();
        preference_loader.start(storage.clone(), &cc.egui_ctx);

        let mut font_loader = FontLoader::new();
        font_loader.start(config.fonts_dir.clone(), &cc.egui_ctx);

        Self {
            state: AppState::new(Box::new(storage), config.splash_delay, Instant::now()),
            preference_loader,
            font_loader,
        }
    }
}

impl eframe::App for QawaidApp {
    /// Main update loop.
    ///
    /// 1. Apply completed background loads
    /// 2. Advance the splash screen if its timer fired
    /// 3. Resolve and apply the palette for the visible screen
    /// 4. Render the screen and apply any interaction
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(raw) = self.preference_loader.check_completion() {
            self.state.preferences.apply_loaded(raw);
        }
        self.font_loader.apply_if_ready(ctx);

        let now = Instant::now();
        ApplicationCoordinator::tick_splash(&mut self.state, now);
        if let Some(remaining) = self.state.splash_timer.remaining(now) {
            ctx.request_repaint_after(remaining);
        } else if self.preference_loader.is_loading() || self.font_loader.is_loading() {
            ctx.request_repaint_after(LOADING_REPAINT);
        }

        let palette = ThemeCoordinator::current_palette(&self.state);
        ThemeCoordinator::apply(ctx, &palette, self.state.preferences.is_dark_mode());

        if let Some(interaction) = ScreenManager::render(ctx, &self.state, &palette) {
            ApplicationCoordinator::handle_interaction(&mut self.state, interaction);
            ctx.request_repaint();
        }
    }
}
