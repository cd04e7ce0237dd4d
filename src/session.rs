//! Interaction state and the transitions driven by pointer input.
//!
//! [`Session`] owns the drawing state together with everything transient
//! around it: the current selection, an armed long-press deletion, the wire
//! attributes for the next run, and the last verdict. Each user action maps
//! to exactly one method, so the whole interaction model can be exercised
//! headlessly, without a rendering environment.
//!
//! Two rules hold across all transitions: anything that edits the diagram
//! also clears a displayed verdict, and transitions referencing ids that no
//! longer exist are silent no-ops.

use crate::constants;
use crate::judge::{judge, Verdict};
use crate::topology::{TerminalId, Topology};
use crate::types::{Diagram, JointId, SegmentId, StampMark, WireColor, WireGauge};

/// What the next tap will act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// Nothing selected; taps select terminals or open stamp editing.
    #[default]
    Idle,
    /// A terminal is selected; the next work-zone tap wires it up.
    Terminal(TerminalId),
    /// A joint's stamp is being edited.
    EditingJoint(JointId),
}

/// A deletion armed by pressing a segment, fired once the hold deadline
/// passes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingDelete {
    /// Segment the press started on.
    pub segment: SegmentId,
    /// Clock reading when the press started, in seconds.
    pub armed_at: f64,
}

/// Mutable bench state: the diagram plus the transient interaction state.
#[derive(Debug, Clone)]
pub struct Session {
    /// Joints and segments placed so far.
    pub diagram: Diagram,
    /// Current tap target state.
    pub selection: Selection,
    /// Result of the last judge run, kept until the next edit or dismissal.
    pub verdict: Option<Verdict>,
    /// Armed long-press deletion while a segment is held down.
    pub pending_delete: Option<PendingDelete>,
    /// Color applied to newly created runs.
    pub current_color: WireColor,
    /// Gauge applied to newly created runs.
    pub current_gauge: WireGauge,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Creates a fresh session with the default wire attributes selected.
    pub fn new() -> Self {
        Self {
            diagram: Diagram::new(),
            selection: Selection::Idle,
            verdict: None,
            pending_delete: None,
            current_color: WireColor::Black,
            current_gauge: WireGauge::Thin,
        }
    }

    /// Whether `pos` lies inside the work zone plus its tolerance band.
    pub fn in_work_zone(pos: (f32, f32)) -> bool {
        let margin = constants::WORK_ZONE_MARGIN;
        pos.0 >= constants::WORK_ZONE_X - margin
            && pos.0 <= constants::WORK_ZONE_X + constants::WORK_ZONE_W + margin
            && pos.1 >= constants::WORK_ZONE_Y - margin
            && pos.1 <= constants::WORK_ZONE_Y + constants::WORK_ZONE_H + margin
    }

    /// Tap on a terminal: selects it, or deselects when it was already the
    /// selection. Always leaves stamp editing and clears the verdict.
    pub fn tap_terminal(&mut self, id: TerminalId) {
        self.verdict = None;
        self.selection = match self.selection {
            Selection::Terminal(current) if current == id => Selection::Idle,
            _ => Selection::Terminal(id),
        };
    }

    /// Tap on open canvas at `pos` in board units.
    ///
    /// While a stamp is being edited this cancels the edit and nothing else.
    /// With a terminal selected it wires that terminal into the work zone:
    /// snapping to a joint within [`constants::SNAP_RADIUS`], otherwise
    /// creating a new joint at `pos`. Taps outside the zone (plus margin) are
    /// ignored entirely; the selection survives them.
    pub fn tap_canvas(&mut self, pos: (f32, f32)) {
        if matches!(self.selection, Selection::EditingJoint(_)) {
            self.selection = Selection::Idle;
            return;
        }
        let Selection::Terminal(terminal) = self.selection else {
            return;
        };
        if !Self::in_work_zone(pos) {
            return;
        }

        self.verdict = None;
        let joint = match self.diagram.joint_near(pos, constants::SNAP_RADIUS) {
            Some(joint) => joint,
            None => self.diagram.add_joint(pos),
        };
        // Duplicate pairs are silently ignored inside connect.
        self.diagram
            .connect(terminal, joint, self.current_color, self.current_gauge);
        self.selection = Selection::Idle;
    }

    /// Tap on a joint.
    ///
    /// With a terminal selected the joint simply acts as a snap target.
    /// Otherwise the tap opens stamp editing, but only for joints that
    /// actually splice something (two or more incident runs). While editing,
    /// a joint tap cancels the edit like any other tap.
    pub fn tap_joint(&mut self, id: JointId) {
        if matches!(self.selection, Selection::EditingJoint(_)) {
            self.selection = Selection::Idle;
            return;
        }
        if matches!(self.selection, Selection::Terminal(_)) {
            if let Some(joint) = self.diagram.joint(id) {
                let pos = joint.pos;
                self.tap_canvas(pos);
            }
            return;
        }
        self.verdict = None;
        if self.diagram.incident_count(id) >= 2 {
            self.selection = Selection::EditingJoint(id);
        }
    }

    /// Assigns `mark` to the joint being edited and leaves editing mode.
    pub fn choose_stamp(&mut self, mark: StampMark) {
        if let Selection::EditingJoint(id) = self.selection {
            self.verdict = None;
            self.diagram.set_stamp(id, mark);
            self.selection = Selection::Idle;
        }
    }

    /// Cancels stamp editing without changing the joint.
    pub fn cancel_stamp_edit(&mut self) {
        if matches!(self.selection, Selection::EditingJoint(_)) {
            self.selection = Selection::Idle;
        }
    }

    /// Arms the hold-to-delete countdown for `segment`.
    ///
    /// `now` is the UI clock in seconds. The deletion fires when a later
    /// [`Session::tick`] observes the hold lasting
    /// [`constants::LONG_PRESS_SECS`]; releasing earlier cancels it.
    pub fn press_segment(&mut self, segment: SegmentId, now: f64) {
        if self.diagram.segment(segment).is_some() {
            self.pending_delete = Some(PendingDelete {
                segment,
                armed_at: now,
            });
        }
    }

    /// Cancels any armed deletion; called when the press ends early.
    pub fn release_press(&mut self) {
        self.pending_delete = None;
    }

    /// Advances the hold-to-delete countdown.
    ///
    /// Returns the deleted segment's id when the deadline passed this tick.
    /// Deleting the last run into a joint removes the joint as well.
    pub fn tick(&mut self, now: f64) -> Option<SegmentId> {
        let pending = self.pending_delete?;
        if now - pending.armed_at < constants::LONG_PRESS_SECS {
            return None;
        }
        self.pending_delete = None;
        if self.diagram.remove_segment(pending.segment) {
            log::debug!("hold-to-delete removed segment {}", pending.segment);
            self.verdict = None;
            Some(pending.segment)
        } else {
            None
        }
    }

    /// Clears the whole bench: diagram, selection, verdict, and any armed
    /// deletion.
    pub fn clear_all(&mut self) {
        log::info!(
            "clearing the bench ({} joints, {} segments)",
            self.diagram.joints.len(),
            self.diagram.segments.len()
        );
        self.diagram.clear();
        self.selection = Selection::Idle;
        self.verdict = None;
        self.pending_delete = None;
    }

    /// Runs the judge over the current diagram and stores the verdict.
    pub fn run_judge(&mut self, topology: &Topology) {
        let verdict = judge(topology, &self.diagram);
        log::info!(
            "judge: {} — {}",
            if verdict.success { "pass" } else { "fail" },
            verdict.message
        );
        self.verdict = Some(verdict);
    }

    /// Drops the displayed verdict.
    pub fn dismiss_verdict(&mut self) {
        self.verdict = None;
    }
}
