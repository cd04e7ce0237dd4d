//! Rule-based grading of the wired circuit.
//!
//! The judge is a pure function of the board topology and the current
//! diagram. It never panics and always produces a [`Verdict`], even for an
//! empty diagram. Checks run in a fixed order: neutral continuity, conductor
//! gauge, crimp stamps. Every violation is collected, but the verdict carries
//! only the first one together with its own corrective hint.

use serde::{Deserialize, Serialize};

use crate::topology::{TerminalId, Topology};
use crate::types::{Diagram, Segment, StampMark, WireColor, WireGauge};

/// Outcome of a judge run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    /// Whether the circuit passed every check.
    pub success: bool,
    /// Headline diagnostic.
    pub message: String,
    /// Corrective hint accompanying the message; empty when none applies.
    pub hint: String,
}

/// A single rule violation and its optional corrective hint.
struct Violation {
    message: String,
    hint: Option<String>,
}

impl Violation {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            hint: None,
        }
    }

    fn with_hint(message: impl Into<String>, hint: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            hint: Some(hint.into()),
        }
    }
}

/// Grades the current diagram against the wiring rules.
pub fn judge(topology: &Topology, diagram: &Diagram) -> Verdict {
    if diagram.segments.is_empty() {
        return Verdict {
            success: false,
            message: "No wiring present.".to_string(),
            hint: "Select a terminal, then tap inside the splice box to run a wire.".to_string(),
        };
    }

    let mut violations = Vec::new();
    check_neutral_continuity(topology, diagram, &mut violations);
    check_gauges(topology, diagram, &mut violations);
    check_stamps(diagram, &mut violations);

    match violations.into_iter().next() {
        None => Verdict {
            success: true,
            message: "Pass. The circuit meets every check.".to_string(),
            hint: "Keep this composure on the real exam.".to_string(),
        },
        Some(first) => Verdict {
            success: false,
            message: first.message,
            hint: first.hint.unwrap_or_default(),
        },
    }
}

/// The stamp a crimp sleeve must carry for the given sizing score and
/// thin-conductor count.
///
/// The sizing table is partial: scores outside it (and a score of 2 reached
/// by anything other than two thin conductors) have no defined mark, so
/// `None` is returned and such a joint can never satisfy the stamp check.
pub fn expected_stamp(score: u32, thin_count: usize) -> Option<StampMark> {
    if score == 2 && thin_count == 2 {
        Some(StampMark::ExtraSmall)
    } else if (3..=4).contains(&score) {
        Some(StampMark::Small)
    } else if (5..=8).contains(&score) {
        Some(StampMark::Medium)
    } else {
        None
    }
}

/// Check 1: the grounded side of every fixture must meet the source neutral
/// in a single splice, wired in white.
fn check_neutral_continuity(topology: &Topology, diagram: &Diagram, out: &mut Vec<Violation>) {
    let Some(source_segment) = diagram
        .segments
        .iter()
        .find(|s| s.terminal == TerminalId::SourceNeutral)
    else {
        out.push(Violation::with_hint(
            "The source neutral (W) is not connected.",
            "Run the grounded conductor from the breaker first.",
        ));
        return;
    };

    let neutral_joint = source_segment.joint;
    for terminal in topology.grounded_terminals() {
        match diagram
            .incident_segments(neutral_joint)
            .find(|s| s.terminal == terminal.id)
        {
            None => out.push(Violation::new(format!(
                "The {} is not tied into the grounded splice.",
                terminal.role
            ))),
            Some(segment) if segment.color != WireColor::White => {
                out.push(Violation::new(format!(
                    "The {} is not wired in white.",
                    terminal.role
                )))
            }
            Some(_) => {}
        }
    }
}

/// Check 2: runs leaving the source use the thick gauge, fixture runs the
/// thin gauge.
fn check_gauges(topology: &Topology, diagram: &Diagram, out: &mut Vec<Violation>) {
    for segment in &diagram.segments {
        if topology.is_source_terminal(segment.terminal) {
            if segment.gauge != WireGauge::Thick {
                out.push(Violation::with_hint(
                    "A service run from the source is the wrong gauge.",
                    "Use 2.0 mm wire for runs leaving the breaker.",
                ));
            }
        } else if segment.gauge != WireGauge::Thin {
            let role = topology.terminal(segment.terminal).role;
            out.push(Violation::with_hint(
                format!("The {role} run is the wrong gauge."),
                "Use 1.6 mm wire for runs feeding the fixtures.",
            ));
        }
    }
}

/// Check 3: every splice of two or more conductors must carry the stamp the
/// sizing table demands for its score.
fn check_stamps(diagram: &Diagram, out: &mut Vec<Violation>) {
    for joint in &diagram.joints {
        let incident: Vec<&Segment> = diagram.incident_segments(joint.id).collect();
        if incident.len() < 2 {
            continue;
        }
        let score: u32 = incident.iter().map(|s| s.gauge.crimp_score()).sum();
        let thin_count = incident
            .iter()
            .filter(|s| s.gauge == WireGauge::Thin)
            .count();
        let expected = expected_stamp(score, thin_count);
        if joint.stamp.is_none() || joint.stamp != expected {
            let mark = expected.map(StampMark::symbol).unwrap_or("");
            out.push(Violation::with_hint(
                "A splice sleeve carries the wrong stamp.",
                format!("The correct stamp for a {score}-point splice is \"{mark}\"."),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::JointId;

    /// Wires the canonical passing circuit: a white neutral splice joining
    /// all four grounded terminals, a live splice feeding switch and outlet,
    /// and a return splice from the switch to the lamp and omitted load.
    fn correct_circuit() -> Diagram {
        let mut d = Diagram::new();

        let neutral = d.add_joint((250.0, 160.0));
        d.connect(
            TerminalId::SourceNeutral,
            neutral,
            WireColor::White,
            WireGauge::Thick,
        );
        for id in [
            TerminalId::LampNeutral,
            TerminalId::OutletNeutral,
            TerminalId::LoadNeutral,
        ] {
            d.connect(id, neutral, WireColor::White, WireGauge::Thin);
        }
        // 2 + 1 + 1 + 1 = 5 points -> medium sleeve.
        d.set_stamp(neutral, StampMark::Medium);

        let live = d.add_joint((250.0, 260.0));
        d.connect(
            TerminalId::SourceLive,
            live,
            WireColor::Black,
            WireGauge::Thick,
        );
        d.connect(TerminalId::SwitchLive, live, WireColor::Black, WireGauge::Thin);
        d.connect(TerminalId::OutletLive, live, WireColor::Black, WireGauge::Thin);
        // 2 + 1 + 1 = 4 points -> small sleeve.
        d.set_stamp(live, StampMark::Small);

        let ret = d.add_joint((350.0, 210.0));
        d.connect(TerminalId::SwitchReturn, ret, WireColor::Red, WireGauge::Thin);
        d.connect(TerminalId::LampReturn, ret, WireColor::Red, WireGauge::Thin);
        d.connect(TerminalId::LoadReturn, ret, WireColor::Red, WireGauge::Thin);
        // 1 + 1 + 1 = 3 points -> small sleeve.
        d.set_stamp(ret, StampMark::Small);

        d
    }

    fn neutral_joint(d: &Diagram) -> JointId {
        d.segments
            .iter()
            .find(|s| s.terminal == TerminalId::SourceNeutral)
            .map(|s| s.joint)
            .unwrap()
    }

    #[test]
    fn empty_diagram_fails_with_no_wiring() {
        let topology = Topology::standard();
        let verdict = judge(&topology, &Diagram::new());
        assert!(!verdict.success);
        assert_eq!(verdict.message, "No wiring present.");
        assert!(!verdict.hint.is_empty());
    }

    #[test]
    fn correct_circuit_passes() {
        let topology = Topology::standard();
        let verdict = judge(&topology, &correct_circuit());
        assert!(verdict.success, "expected a pass, got: {}", verdict.message);
    }

    #[test]
    fn missing_source_neutral_is_reported_first() {
        let topology = Topology::standard();
        let mut d = Diagram::new();
        let joint = d.add_joint((250.0, 160.0));
        d.connect(TerminalId::SwitchLive, joint, WireColor::Black, WireGauge::Thin);

        let verdict = judge(&topology, &d);
        assert!(!verdict.success);
        assert_eq!(verdict.message, "The source neutral (W) is not connected.");
    }

    #[test]
    fn grounded_terminal_outside_the_neutral_splice_is_named() {
        let topology = Topology::standard();
        let mut d = correct_circuit();
        // Move the lamp neutral out of the splice entirely.
        let seg = d
            .segments
            .iter()
            .find(|s| s.terminal == TerminalId::LampNeutral)
            .map(|s| s.id)
            .unwrap();
        d.remove_segment(seg);

        let verdict = judge(&topology, &d);
        assert!(!verdict.success);
        assert_eq!(
            verdict.message,
            "The lamp neutral is not tied into the grounded splice."
        );
    }

    #[test]
    fn non_white_neutral_is_named() {
        let topology = Topology::standard();
        let mut d = correct_circuit();
        let joint = neutral_joint(&d);
        let seg = d
            .segments
            .iter()
            .find(|s| s.terminal == TerminalId::OutletNeutral)
            .map(|s| s.id)
            .unwrap();
        d.remove_segment(seg);
        d.connect(TerminalId::OutletNeutral, joint, WireColor::Black, WireGauge::Thin);

        let verdict = judge(&topology, &d);
        assert!(!verdict.success);
        assert_eq!(verdict.message, "The outlet neutral is not wired in white.");
    }

    #[test]
    fn thin_service_run_fails_the_gauge_check_with_a_hint() {
        let topology = Topology::standard();
        let mut d = correct_circuit();
        let seg = d
            .segments
            .iter()
            .find(|s| s.terminal == TerminalId::SourceLive)
            .map(|s| s.id)
            .unwrap();
        let joint = d.segment(seg).unwrap().joint;
        d.remove_segment(seg);
        d.connect(TerminalId::SourceLive, joint, WireColor::Black, WireGauge::Thin);
        // The live splice now scores 3 instead of 4; keep its stamp valid so
        // the gauge violation is the only one.
        d.set_stamp(joint, StampMark::Small);

        let verdict = judge(&topology, &d);
        assert!(!verdict.success);
        assert_eq!(
            verdict.message,
            "A service run from the source is the wrong gauge."
        );
        assert_eq!(verdict.hint, "Use 2.0 mm wire for runs leaving the breaker.");
    }

    #[test]
    fn thick_fixture_run_fails_the_gauge_check() {
        let topology = Topology::standard();
        let mut d = correct_circuit();
        let seg = d
            .segments
            .iter()
            .find(|s| s.terminal == TerminalId::SwitchReturn)
            .map(|s| s.id)
            .unwrap();
        let joint = d.segment(seg).unwrap().joint;
        d.remove_segment(seg);
        d.connect(TerminalId::SwitchReturn, joint, WireColor::Red, WireGauge::Thick);
        // Return splice now scores 2 + 1 + 1 = 4.
        d.set_stamp(joint, StampMark::Small);

        let verdict = judge(&topology, &d);
        assert!(!verdict.success);
        assert_eq!(verdict.message, "The switch return run is the wrong gauge.");
        assert_eq!(verdict.hint, "Use 1.6 mm wire for runs feeding the fixtures.");
    }

    #[test]
    fn stamp_table_matches_the_sizing_chart() {
        // Two thin conductors: 2 points, extra-small sleeve.
        assert_eq!(expected_stamp(2, 2), Some(StampMark::ExtraSmall));
        // Thick plus thin: 3 points, small sleeve.
        assert_eq!(expected_stamp(3, 1), Some(StampMark::Small));
        // Two thick conductors: 4 points, small sleeve.
        assert_eq!(expected_stamp(4, 0), Some(StampMark::Small));
        // Five to eight points: medium sleeve.
        assert_eq!(expected_stamp(5, 3), Some(StampMark::Medium));
        assert_eq!(expected_stamp(8, 0), Some(StampMark::Medium));
        // Outside the table there is no correct mark.
        assert_eq!(expected_stamp(9, 0), None);
        // A score of 2 not made of two thin conductors has no mark either.
        assert_eq!(expected_stamp(2, 0), None);
    }

    #[test]
    fn unstamped_splice_fails_with_the_expected_mark_in_the_hint() {
        let topology = Topology::standard();
        let mut d = correct_circuit();
        let joint = neutral_joint(&d);
        if let Some(j) = d.joints.iter_mut().find(|j| j.id == joint) {
            j.stamp = None;
        }

        let verdict = judge(&topology, &d);
        assert!(!verdict.success);
        assert_eq!(verdict.message, "A splice sleeve carries the wrong stamp.");
        assert_eq!(
            verdict.hint,
            "The correct stamp for a 5-point splice is \"中\"."
        );
    }

    #[test]
    fn wrong_stamp_fails() {
        let topology = Topology::standard();
        let mut d = correct_circuit();
        d.set_stamp(neutral_joint(&d), StampMark::ExtraSmall);

        let verdict = judge(&topology, &d);
        assert!(!verdict.success);
        assert_eq!(verdict.message, "A splice sleeve carries the wrong stamp.");
    }

    #[test]
    fn off_table_score_never_passes_whatever_the_stamp() {
        let topology = Topology::standard();
        let mut d = Diagram::new();
        // Five thick runs into one joint: 10 points, outside the table.
        let joint = d.add_joint((250.0, 160.0));
        for id in [
            TerminalId::SourceNeutral,
            TerminalId::SourceLive,
            TerminalId::LampNeutral,
            TerminalId::OutletNeutral,
            TerminalId::LoadNeutral,
        ] {
            d.connect(id, joint, WireColor::White, WireGauge::Thick);
        }

        for mark in StampMark::ALL {
            d.set_stamp(joint, mark);
            let stamp_failures: Vec<_> = {
                let mut out = Vec::new();
                super::check_stamps(&d, &mut out);
                out
            };
            assert_eq!(stamp_failures.len(), 1, "mark {mark:?} must not satisfy");
            assert_eq!(
                stamp_failures[0].hint.as_deref(),
                Some("The correct stamp for a 10-point splice is \"\".")
            );
        }
    }

    #[test]
    fn single_conductor_joints_are_exempt_from_the_stamp_check() {
        let mut d = Diagram::new();
        let joint = d.add_joint((250.0, 160.0));
        d.connect(TerminalId::SourceNeutral, joint, WireColor::White, WireGauge::Thick);

        let mut out = Vec::new();
        check_stamps(&d, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn first_violation_keeps_its_own_hint() {
        let topology = Topology::standard();
        let mut d = correct_circuit();
        // Break the neutral color (no hint) and a stamp (has a hint); the
        // verdict must carry the color message with an empty hint, not the
        // stamp hint.
        let joint = neutral_joint(&d);
        let seg = d
            .segments
            .iter()
            .find(|s| s.terminal == TerminalId::LoadNeutral)
            .map(|s| s.id)
            .unwrap();
        d.remove_segment(seg);
        d.connect(TerminalId::LoadNeutral, joint, WireColor::Red, WireGauge::Thin);
        let ret_joint = d
            .segments
            .iter()
            .find(|s| s.terminal == TerminalId::LampReturn)
            .map(|s| s.joint)
            .unwrap();
        d.set_stamp(ret_joint, StampMark::Medium);

        let verdict = judge(&topology, &d);
        assert!(!verdict.success);
        assert_eq!(verdict.message, "The load neutral is not wired in white.");
        assert_eq!(verdict.hint, "");
    }
}
