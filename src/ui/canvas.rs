//! Canvas coordinate mapping and pointer handling.
//!
//! The board lives in a fixed 600×450 logical space. This module letterboxes
//! that space into whatever rectangle the central panel provides, maps
//! pointer positions back into board units, and routes taps and holds into
//! the session's transition methods.

use eframe::egui;

use super::state::TrainerApp;
use crate::constants;
use crate::topology::TerminalId;
use crate::types::{JointId, Segment, SegmentId};

impl TrainerApp {
    /// The screen rectangle the board occupies inside `available`,
    /// letterboxed to preserve the 600:450 aspect ratio.
    pub fn board_rect(&self, available: egui::Rect) -> egui::Rect {
        let scale = (available.width() / constants::CANVAS_WIDTH)
            .min(available.height() / constants::CANVAS_HEIGHT);
        let size = egui::vec2(
            constants::CANVAS_WIDTH * scale,
            constants::CANVAS_HEIGHT * scale,
        );
        egui::Rect::from_center_size(available.center(), size)
    }

    /// Scale factor from board units to screen pixels for `board_rect`.
    pub fn board_scale(&self, board_rect: egui::Rect) -> f32 {
        board_rect.width() / constants::CANVAS_WIDTH
    }

    /// Converts a screen position into board units.
    pub fn screen_to_board(&self, board_rect: egui::Rect, pos: egui::Pos2) -> (f32, f32) {
        let scale = self.board_scale(board_rect);
        (
            (pos.x - board_rect.min.x) / scale,
            (pos.y - board_rect.min.y) / scale,
        )
    }

    /// Converts board units into a screen position.
    pub fn board_to_screen(&self, board_rect: egui::Rect, pos: (f32, f32)) -> egui::Pos2 {
        let scale = self.board_scale(board_rect);
        egui::pos2(
            board_rect.min.x + pos.0 * scale,
            board_rect.min.y + pos.1 * scale,
        )
    }

    /// The terminal under `pos`, if any.
    pub fn terminal_at(&self, pos: (f32, f32)) -> Option<TerminalId> {
        self.topology
            .terminal_near(pos, constants::TERMINAL_HIT_RADIUS)
    }

    /// The joint under `pos`, if any. Joints use the snap radius as their tap
    /// target so they stay easy to hit on coarse pointers.
    pub fn joint_at(&self, pos: (f32, f32)) -> Option<JointId> {
        self.session.diagram.joint_near(pos, constants::SNAP_RADIUS)
    }

    /// Waypoints of a segment's L-shaped run in board units: horizontal from
    /// the terminal, then vertical down into the joint.
    pub fn segment_path(&self, segment: &Segment) -> Option<[(f32, f32); 3]> {
        let terminal = self.topology.terminal(segment.terminal).pos;
        let joint = self.session.diagram.joint(segment.joint)?.pos;
        Some([terminal, (joint.0, terminal.1), joint])
    }

    /// The segment whose run passes within the hit distance of `pos`.
    ///
    /// Later segments draw on top, so ties go to the most recently created.
    pub fn segment_at(&self, pos: (f32, f32)) -> Option<SegmentId> {
        self.session
            .diagram
            .segments
            .iter()
            .rev()
            .find(|s| {
                self.segment_path(s).is_some_and(|[a, elbow, b]| {
                    point_to_segment_distance(pos, a, elbow) < constants::SEGMENT_HIT_DISTANCE
                        || point_to_segment_distance(pos, elbow, b)
                            < constants::SEGMENT_HIT_DISTANCE
                })
            })
            .map(|s| s.id)
    }

    /// Routes pointer input on the canvas into session transitions.
    ///
    /// Press-and-hold on a wire run arms the deletion countdown; the session
    /// clock drives it from there. Plain clicks resolve, in priority order,
    /// to terminals, joints, then open canvas.
    pub fn handle_pointer(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        board_rect: egui::Rect,
    ) {
        let now = ui.input(|i| i.time);

        if ui.input(|i| i.pointer.primary_pressed()) {
            if let Some(pos) = response.interact_pointer_pos() {
                let board_pos = self.screen_to_board(board_rect, pos);
                // Terminals and joints take priority over the runs below them.
                if self.terminal_at(board_pos).is_none() && self.joint_at(board_pos).is_none() {
                    if let Some(segment) = self.segment_at(board_pos) {
                        self.session.press_segment(segment, now);
                    }
                }
            }
        }

        if ui.input(|i| i.pointer.primary_released()) {
            self.session.release_press();
        }

        // Advance the hold countdown; a firing hold eats the click that the
        // lifting finger will produce.
        if self.session.tick(now).is_some() {
            self.suppress_next_click = true;
        }

        if response.clicked() {
            if self.suppress_next_click {
                self.suppress_next_click = false;
                return;
            }
            let Some(pos) = response.interact_pointer_pos() else {
                return;
            };
            let board_pos = self.screen_to_board(board_rect, pos);
            if let Some(terminal) = self.terminal_at(board_pos) {
                self.session.tap_terminal(terminal);
            } else if let Some(joint) = self.joint_at(board_pos) {
                self.session.tap_joint(joint);
            } else {
                self.session.tap_canvas(board_pos);
            }
        }
    }
}

/// Distance from `point` to the line segment `a`–`b`, in board units.
fn point_to_segment_distance(point: (f32, f32), a: (f32, f32), b: (f32, f32)) -> f32 {
    let line = (b.0 - a.0, b.1 - a.1);
    let to_point = (point.0 - a.0, point.1 - a.1);
    let len_sq = line.0 * line.0 + line.1 * line.1;

    if len_sq < 0.0001 {
        // The run is essentially a point.
        return (to_point.0.powi(2) + to_point.1.powi(2)).sqrt();
    }

    // Project onto the segment, clamped to its endpoints.
    let t = ((to_point.0 * line.0 + to_point.1 * line.1) / len_sq).clamp(0.0, 1.0);
    let projection = (a.0 + line.0 * t, a.1 + line.1 * t);
    ((point.0 - projection.0).powi(2) + (point.1 - projection.1).powi(2)).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_to_segment_distance_handles_interior_and_endpoints() {
        let a = (0.0, 0.0);
        let b = (10.0, 0.0);

        assert_eq!(point_to_segment_distance((5.0, 3.0), a, b), 3.0);
        assert_eq!(point_to_segment_distance((-4.0, 0.0), a, b), 4.0);
        assert_eq!(point_to_segment_distance((13.0, 4.0), a, b), 5.0);
        // Degenerate segment.
        assert_eq!(point_to_segment_distance((3.0, 4.0), a, a), 5.0);
    }

    #[test]
    fn board_rect_letterboxes_and_round_trips() {
        let app = TrainerApp::default();
        let available = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(1200.0, 1000.0));
        let rect = app.board_rect(available);

        // Width-limited: 1200 / 600 = 2.0, so the board is 1200 x 900,
        // centered vertically.
        assert_eq!(rect.width(), 1200.0);
        assert_eq!(rect.height(), 900.0);
        assert_eq!(rect.min.y, 50.0);

        let board = (300.0, 225.0);
        let screen = app.board_to_screen(rect, board);
        let back = app.screen_to_board(rect, screen);
        assert!((back.0 - board.0).abs() < 1e-3);
        assert!((back.1 - board.1).abs() < 1e-3);
    }

    #[test]
    fn segment_hit_testing_follows_the_elbow() {
        let mut app = TrainerApp::default();
        app.session.tap_terminal(TerminalId::SourceNeutral);
        app.session.tap_canvas((250.0, 200.0));
        let segment = app.session.diagram.segments[0].id;

        // The source neutral sits at (105, 130): the run goes right to
        // x = 250, then down to y = 200.
        assert_eq!(app.segment_at((180.0, 130.0)), Some(segment));
        assert_eq!(app.segment_at((250.0, 170.0)), Some(segment));
        assert_eq!(app.segment_at((180.0, 300.0)), None);
    }
}
