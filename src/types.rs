//! Core data types for the wiring bench.
//!
//! This module defines the wire attribute enums and the mutable drawing
//! state: splice joints, wire segments, and the [`Diagram`] container that
//! owns both and enforces their structural invariants.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::topology::TerminalId;

/// Unique identifier for splice joints.
pub type JointId = Uuid;

/// Unique identifier for wire segments.
pub type SegmentId = Uuid;

/// Straight-line distance between two points in board units.
pub(crate) fn distance(a: (f32, f32), b: (f32, f32)) -> f32 {
    (a.0 - b.0).hypot(a.1 - b.1)
}

/// Insulation colors available on the bench.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WireColor {
    /// General-purpose live conductor.
    Black,
    /// The grounded (neutral) conductor color.
    White,
    /// Switched-return conductor.
    Red,
}

impl WireColor {
    /// All selectable colors, in picker order.
    pub const ALL: [WireColor; 3] = [WireColor::Black, WireColor::White, WireColor::Red];

    /// Human-readable name.
    pub fn label(self) -> &'static str {
        match self {
            WireColor::Black => "Black",
            WireColor::White => "White",
            WireColor::Red => "Red",
        }
    }
}

/// Conductor gauges available on the bench.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WireGauge {
    /// 1.6 mm conductor, used for fixture runs.
    Thin,
    /// 2.0 mm conductor, used for the service runs from the source.
    Thick,
}

impl WireGauge {
    /// All selectable gauges, in picker order.
    pub const ALL: [WireGauge; 2] = [WireGauge::Thin, WireGauge::Thick];

    /// Conductor diameter in millimeters, as printed on the insulation.
    pub fn label(self) -> &'static str {
        match self {
            WireGauge::Thin => "1.6 mm",
            WireGauge::Thick => "2.0 mm",
        }
    }

    /// Sizing points one conductor of this gauge contributes to a crimp
    /// sleeve.
    pub fn crimp_score(self) -> u32 {
        match self {
            WireGauge::Thin => 1,
            WireGauge::Thick => 2,
        }
    }
}

/// Marks that can be stamped on a crimp sleeve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StampMark {
    /// The "○" mark for the smallest sleeve.
    ExtraSmall,
    /// The "小" (small) mark.
    Small,
    /// The "中" (medium) mark.
    Medium,
}

impl StampMark {
    /// All marks, in picker order.
    pub const ALL: [StampMark; 3] = [StampMark::ExtraSmall, StampMark::Small, StampMark::Medium];

    /// The symbol stamped on the sleeve.
    pub fn symbol(self) -> &'static str {
        match self {
            StampMark::ExtraSmall => "○",
            StampMark::Small => "小",
            StampMark::Medium => "中",
        }
    }
}

/// A splice joint placed inside the work zone.
///
/// The position is fixed at creation; only the stamp can change afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Joint {
    /// Unique identifier for this joint.
    pub id: JointId,
    /// Position in board units.
    pub pos: (f32, f32),
    /// Crimp stamp assigned by the user, if any.
    pub stamp: Option<StampMark>,
}

impl Joint {
    /// Creates an unstamped joint at `pos`.
    pub fn new(pos: (f32, f32)) -> Self {
        Self {
            id: Uuid::new_v4(),
            pos,
            stamp: None,
        }
    }
}

/// A wire run from a terminal into a joint.
///
/// Color and gauge are fixed at creation; there is no way to edit a segment
/// other than deleting it and wiring again.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Segment {
    /// Unique identifier for this segment.
    pub id: SegmentId,
    /// Terminal the run starts at.
    pub terminal: TerminalId,
    /// Joint the run ends in.
    pub joint: JointId,
    /// Insulation color.
    pub color: WireColor,
    /// Conductor gauge.
    pub gauge: WireGauge,
}

impl Segment {
    /// Creates a segment wiring `terminal` into `joint`.
    pub fn new(terminal: TerminalId, joint: JointId, color: WireColor, gauge: WireGauge) -> Self {
        Self {
            id: Uuid::new_v4(),
            terminal,
            joint,
            color,
            gauge,
        }
    }
}

/// The mutable drawing state: every joint and segment placed by the user.
///
/// All mutation goes through this container so that its invariants hold after
/// every operation: segments always reference an existing joint, no two
/// segments share a (terminal, joint) pair, and a joint never outlives its
/// last incident segment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Diagram {
    /// Joints in creation order.
    pub joints: Vec<Joint>,
    /// Segments in creation order.
    pub segments: Vec<Segment>,
}

impl Diagram {
    /// Creates an empty diagram.
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a joint by id.
    pub fn joint(&self, id: JointId) -> Option<&Joint> {
        self.joints.iter().find(|j| j.id == id)
    }

    /// Looks up a segment by id.
    pub fn segment(&self, id: SegmentId) -> Option<&Segment> {
        self.segments.iter().find(|s| s.id == id)
    }

    /// Segments incident to `joint`.
    pub fn incident_segments(&self, joint: JointId) -> impl Iterator<Item = &Segment> {
        self.segments.iter().filter(move |s| s.joint == joint)
    }

    /// Number of segments incident to `joint`.
    pub fn incident_count(&self, joint: JointId) -> usize {
        self.incident_segments(joint).count()
    }

    /// The joint nearest `pos` within `radius`, if any.
    pub fn joint_near(&self, pos: (f32, f32), radius: f32) -> Option<JointId> {
        self.joints
            .iter()
            .map(|j| (j.id, distance(j.pos, pos)))
            .filter(|(_, d)| *d < radius)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(id, _)| id)
    }

    /// Whether a segment already wires `terminal` into `joint`.
    pub fn has_pair(&self, terminal: TerminalId, joint: JointId) -> bool {
        self.segments
            .iter()
            .any(|s| s.terminal == terminal && s.joint == joint)
    }

    /// Adds an unstamped joint at `pos` and returns its id.
    pub fn add_joint(&mut self, pos: (f32, f32)) -> JointId {
        let joint = Joint::new(pos);
        let id = joint.id;
        self.joints.push(joint);
        id
    }

    /// Wires `terminal` into `joint` with the given attributes.
    ///
    /// Returns the new segment's id, or `None` when the joint does not exist
    /// or the pair is already wired (both are silent no-ops).
    pub fn connect(
        &mut self,
        terminal: TerminalId,
        joint: JointId,
        color: WireColor,
        gauge: WireGauge,
    ) -> Option<SegmentId> {
        if self.joint(joint).is_none() || self.has_pair(terminal, joint) {
            return None;
        }
        let segment = Segment::new(terminal, joint, color, gauge);
        let id = segment.id;
        self.segments.push(segment);
        Some(id)
    }

    /// Removes a segment; the joint it pointed at is dropped too when this
    /// was its last incident segment. Returns whether a segment was removed.
    pub fn remove_segment(&mut self, id: SegmentId) -> bool {
        let Some(index) = self.segments.iter().position(|s| s.id == id) else {
            return false;
        };
        let removed = self.segments.remove(index);
        if self.incident_count(removed.joint) == 0 {
            self.joints.retain(|j| j.id != removed.joint);
        }
        true
    }

    /// Assigns `mark` to the joint's stamp. Missing joints are ignored.
    pub fn set_stamp(&mut self, joint: JointId, mark: StampMark) {
        if let Some(joint) = self.joints.iter_mut().find(|j| j.id == joint) {
            joint.stamp = Some(mark);
        }
    }

    /// Removes every joint and segment.
    pub fn clear(&mut self) {
        self.joints.clear();
        self.segments.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joint_creation_starts_unstamped() {
        let joint = Joint::new((200.0, 150.0));
        assert_eq!(joint.pos, (200.0, 150.0));
        assert_eq!(joint.stamp, None);
        assert!(!joint.id.is_nil());
    }

    #[test]
    fn connect_creates_one_segment_per_pair() {
        let mut diagram = Diagram::new();
        let joint = diagram.add_joint((200.0, 150.0));

        let first = diagram.connect(
            TerminalId::SourceNeutral,
            joint,
            WireColor::White,
            WireGauge::Thick,
        );
        assert!(first.is_some());
        assert_eq!(diagram.segments.len(), 1);

        // The identical pair is silently ignored, even with new attributes.
        let duplicate = diagram.connect(
            TerminalId::SourceNeutral,
            joint,
            WireColor::Red,
            WireGauge::Thin,
        );
        assert_eq!(duplicate, None);
        assert_eq!(diagram.segments.len(), 1);
        assert_eq!(diagram.segments[0].color, WireColor::White);
    }

    #[test]
    fn connect_to_missing_joint_is_a_no_op() {
        let mut diagram = Diagram::new();
        let ghost = Uuid::new_v4();
        let result = diagram.connect(
            TerminalId::LampNeutral,
            ghost,
            WireColor::White,
            WireGauge::Thin,
        );
        assert_eq!(result, None);
        assert!(diagram.segments.is_empty());
        assert!(diagram.joints.is_empty());
    }

    #[test]
    fn removing_the_last_segment_drops_the_joint() {
        let mut diagram = Diagram::new();
        let joint = diagram.add_joint((200.0, 150.0));
        let seg = diagram
            .connect(
                TerminalId::SourceNeutral,
                joint,
                WireColor::White,
                WireGauge::Thick,
            )
            .unwrap();

        assert!(diagram.remove_segment(seg));
        assert!(diagram.segments.is_empty());
        assert!(diagram.joints.is_empty());
    }

    #[test]
    fn removing_one_of_two_segments_keeps_the_joint() {
        let mut diagram = Diagram::new();
        let joint = diagram.add_joint((200.0, 150.0));
        let first = diagram
            .connect(
                TerminalId::SourceNeutral,
                joint,
                WireColor::White,
                WireGauge::Thick,
            )
            .unwrap();
        diagram
            .connect(
                TerminalId::LampNeutral,
                joint,
                WireColor::White,
                WireGauge::Thin,
            )
            .unwrap();

        assert!(diagram.remove_segment(first));
        assert_eq!(diagram.segments.len(), 1);
        assert_eq!(diagram.joints.len(), 1);
        assert_eq!(diagram.incident_count(joint), 1);
    }

    #[test]
    fn removing_a_missing_segment_reports_false() {
        let mut diagram = Diagram::new();
        assert!(!diagram.remove_segment(Uuid::new_v4()));
    }

    #[test]
    fn joint_near_prefers_the_closest() {
        let mut diagram = Diagram::new();
        let far = diagram.add_joint((220.0, 150.0));
        let near = diagram.add_joint((205.0, 150.0));

        assert_eq!(diagram.joint_near((200.0, 150.0), 25.0), Some(near));
        assert_eq!(diagram.joint_near((230.0, 150.0), 25.0), Some(far));
        assert_eq!(diagram.joint_near((400.0, 300.0), 25.0), None);
    }

    #[test]
    fn set_stamp_overwrites_previous_marks() {
        let mut diagram = Diagram::new();
        let joint = diagram.add_joint((200.0, 150.0));

        diagram.set_stamp(joint, StampMark::Small);
        assert_eq!(diagram.joints[0].stamp, Some(StampMark::Small));

        diagram.set_stamp(joint, StampMark::Medium);
        assert_eq!(diagram.joints[0].stamp, Some(StampMark::Medium));

        // Unknown ids are ignored.
        diagram.set_stamp(Uuid::new_v4(), StampMark::ExtraSmall);
        assert_eq!(diagram.joints.len(), 1);
    }

    #[test]
    fn clear_empties_both_collections() {
        let mut diagram = Diagram::new();
        let joint = diagram.add_joint((200.0, 150.0));
        diagram.connect(
            TerminalId::SourceNeutral,
            joint,
            WireColor::White,
            WireGauge::Thick,
        );

        diagram.clear();
        assert!(diagram.joints.is_empty());
        assert!(diagram.segments.is_empty());
    }

    #[test]
    fn crimp_scores_match_the_gauge_table() {
        assert_eq!(WireGauge::Thin.crimp_score(), 1);
        assert_eq!(WireGauge::Thick.crimp_score(), 2);
    }
}
