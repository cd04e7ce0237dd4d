//! Application state for the egui shell.
//!
//! [`TrainerApp`] wraps the headless [`Session`] with the view-only state the
//! shell needs: which dialogs are open, the theme, and pointer bookkeeping.
//! Only UI preferences are ever persisted; the drawing state lives and dies
//! with the process.

use eframe::egui;
use serde::{Deserialize, Serialize};

use crate::session::Session;
use crate::topology::Topology;

/// The main application structure: the bench session plus view state.
///
/// Implements [`eframe::App`]; everything interaction-related delegates to
/// the [`Session`] so the UI layer stays a thin shell.
#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct TrainerApp {
    /// Static board topology, resolved once.
    #[serde(skip)]
    pub topology: Topology,
    /// Interaction state machine and drawing state.
    #[serde(skip)]
    pub session: Session,
    /// Whether dark mode visuals are enabled.
    pub dark_mode: bool,
    /// Whether the how-to window is open.
    #[serde(skip)]
    pub show_manual: bool,
    /// Whether the single-line reference window is open.
    #[serde(skip)]
    pub show_reference: bool,
    /// Whether the clear-the-board confirmation dialog is open.
    #[serde(skip)]
    pub show_reset_confirm: bool,
    /// Swallows the click released by a completed hold-to-delete so it does
    /// not immediately trigger a tap action.
    #[serde(skip)]
    pub suppress_next_click: bool,
    /// Screen rectangle the board occupied last frame, for tests and hit
    /// diagnostics.
    #[serde(skip)]
    pub last_board_rect: Option<egui::Rect>,
}

impl Default for TrainerApp {
    fn default() -> Self {
        Self {
            topology: Topology::standard(),
            session: Session::new(),
            dark_mode: false,
            show_manual: false,
            show_reference: false,
            show_reset_confirm: false,
            suppress_next_click: false,
            last_board_rect: None,
        }
    }
}

impl TrainerApp {
    /// Serializes the persistable part of the app state to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Restores app state from JSON produced by [`TrainerApp::to_json`].
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
