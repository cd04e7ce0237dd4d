//! # Wiring Trainer
//!
//! An interactive practice bench for electrical-wiring technical exams. A
//! fixed board of components (breaker, lamp, switch, outlet, and an omitted
//! load) surrounds a splice box; the user runs wires from terminals into
//! splice joints, choosing color and gauge for each run, stamps the crimp
//! sleeves, and asks a rule-based judge to grade the result.
//!
//! ## Features
//! - Tap-to-wire interaction: select a terminal, tap inside the splice box
//! - Snap-to-joint within a fixed radius, with duplicate runs ignored
//! - Hold-to-delete wire runs, with orphaned joints cleaned up
//! - Crimp-stamp editing on joints that splice two or more runs
//! - A pure judge checking neutral continuity, conductor gauges, and
//!   crimp-sleeve stamps, reporting the first violation with a hint

#![warn(missing_docs)]
#![deny(unsafe_code)]

mod constants;
mod judge;
mod session;
mod topology;
mod types;
mod ui;

// Re-export the headless core so the bench logic is usable (and testable)
// without the UI shell.
pub use judge::{expected_stamp, judge, Verdict};
pub use session::{PendingDelete, Selection, Session};
pub use topology::{
    Component, ComponentId, ComponentKind, LabelSide, Terminal, TerminalId, Topology,
};
pub use types::{Diagram, Joint, JointId, Segment, SegmentId, StampMark, WireColor, WireGauge};

use ui::TrainerApp;

/// Runs the wiring trainer application with default settings.
///
/// This function initializes the egui application window and starts the main
/// event loop. UI preferences (the theme) are restored from storage; drawing
/// state always starts empty.
///
/// # Returns
///
/// Returns `Ok(())` if the application runs successfully, or an
/// `eframe::Error` if initialization fails.
///
/// # Example
///
/// ```no_run
/// use wiring_trainer::run_app;
///
/// fn main() -> Result<(), eframe::Error> {
///     run_app()
/// }
/// ```
pub fn run_app() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Wiring Trainer",
        options,
        Box::new(|cc| {
            let app = cc
                .storage
                .and_then(|storage| storage.get_string("app_state"))
                .and_then(|json| TrainerApp::from_json(&json).ok())
                .unwrap_or_default();
            Ok(Box::new(app))
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_diagram_fails_the_judge() {
        let topology = Topology::standard();
        let verdict = judge(&topology, &Diagram::new());
        assert!(!verdict.success);
        assert_eq!(verdict.message, "No wiring present.");
    }

    #[test]
    fn session_default_matches_new() {
        let session = Session::default();
        assert!(session.diagram.joints.is_empty());
        assert!(session.diagram.segments.is_empty());
        assert!(matches!(session.selection, Selection::Idle));
    }
}
