//! Board rendering: grid, work zone, components, wire runs, joints, and
//! terminals.
//!
//! Everything is painted in board units scaled through the current board
//! rectangle, in fixed layers so wires stay under joints and joints under
//! terminals.

use eframe::egui;
use eframe::epaint::StrokeKind;

use super::state::TrainerApp;
use crate::constants;
use crate::session::Selection;
use crate::topology::{Component, ComponentKind, LabelSide, Terminal};
use crate::types::{Joint, Segment, WireColor, WireGauge};

/// Stroke width of a run in board units, by gauge.
fn gauge_stroke_width(gauge: WireGauge) -> f32 {
    match gauge {
        WireGauge::Thin => 5.0,
        WireGauge::Thick => 9.0,
    }
}

/// Casing color of a run. White wires get a pale casing so their light core
/// remains visible on either theme.
fn wire_casing_color(color: WireColor) -> egui::Color32 {
    match color {
        WireColor::Black => egui::Color32::from_rgb(30, 41, 59),
        WireColor::White => egui::Color32::from_rgb(148, 163, 184),
        WireColor::Red => egui::Color32::from_rgb(239, 68, 68),
    }
}

impl TrainerApp {
    /// Ink color for component bodies and markings.
    fn ink(&self) -> egui::Color32 {
        if self.dark_mode {
            egui::Color32::from_gray(210)
        } else {
            egui::Color32::from_rgb(51, 65, 85)
        }
    }

    /// Fill color behind component bodies.
    fn body_fill(&self) -> egui::Color32 {
        if self.dark_mode {
            egui::Color32::from_gray(30)
        } else {
            egui::Color32::WHITE
        }
    }

    /// Renders every board layer into `board_rect`.
    pub fn render_board(&self, painter: &egui::Painter, board_rect: egui::Rect) {
        self.draw_dot_grid(painter, board_rect);
        self.draw_work_zone(painter, board_rect);
        for component in self.topology.components() {
            self.draw_component(painter, board_rect, component);
        }
        for segment in &self.session.diagram.segments {
            self.draw_segment(painter, board_rect, segment);
        }
        for joint in &self.session.diagram.joints {
            self.draw_joint(painter, board_rect, joint);
        }
        for terminal in self.topology.terminals() {
            self.draw_terminal(painter, board_rect, terminal);
        }
    }

    /// Faint dot grid across the whole board.
    fn draw_dot_grid(&self, painter: &egui::Painter, board_rect: egui::Rect) {
        let scale = self.board_scale(board_rect);
        let spacing = constants::DOT_GRID_SPACING;
        let color = if self.dark_mode {
            egui::Color32::from_gray(55)
        } else {
            egui::Color32::from_rgb(226, 232, 240)
        };

        let mut x = 0.0;
        while x <= constants::CANVAS_WIDTH {
            let mut y = 0.0;
            while y <= constants::CANVAS_HEIGHT {
                let pos = self.board_to_screen(board_rect, (x, y));
                painter.circle_filled(pos, (1.0 * scale).max(0.5), color);
                y += spacing;
            }
            x += spacing;
        }
    }

    /// Dashed rectangle marking where joints may be placed.
    fn draw_work_zone(&self, painter: &egui::Painter, board_rect: egui::Rect) {
        let scale = self.board_scale(board_rect);
        let min = self.board_to_screen(board_rect, (constants::WORK_ZONE_X, constants::WORK_ZONE_Y));
        let max = self.board_to_screen(
            board_rect,
            (
                constants::WORK_ZONE_X + constants::WORK_ZONE_W,
                constants::WORK_ZONE_Y + constants::WORK_ZONE_H,
            ),
        );
        let rect = egui::Rect::from_min_max(min, max);

        let fill = if self.dark_mode {
            egui::Color32::from_gray(24)
        } else {
            egui::Color32::from_rgb(248, 250, 252)
        };
        painter.rect_filled(rect, constants::WORK_ZONE_CORNER_RADIUS * scale, fill);

        let stroke = egui::Stroke::new(
            1.5 * scale,
            if self.dark_mode {
                egui::Color32::from_gray(70)
            } else {
                egui::Color32::from_rgb(226, 232, 240)
            },
        );
        // Dashed outline, corner radius skipped: four dashed edges read just
        // as well at board scale.
        let corners = [
            rect.min,
            egui::pos2(rect.max.x, rect.min.y),
            rect.max,
            egui::pos2(rect.min.x, rect.max.y),
        ];
        for i in 0..4 {
            painter.extend(egui::Shape::dashed_line(
                &[corners[i], corners[(i + 1) % 4]],
                stroke,
                6.0 * scale,
                3.0 * scale,
            ));
        }
    }

    /// One component body with its marking and caption.
    fn draw_component(
        &self,
        painter: &egui::Painter,
        board_rect: egui::Rect,
        component: &Component,
    ) {
        let scale = self.board_scale(board_rect);
        let center = self.board_to_screen(board_rect, component.pos);
        let ink = self.ink();
        let stroke = egui::Stroke::new(2.5 * scale, ink);

        match component.kind {
            ComponentKind::Breaker => {
                let rect = egui::Rect::from_center_size(
                    center,
                    egui::vec2(80.0 * scale, 70.0 * scale),
                );
                painter.rect_filled(rect, 4.0 * scale, self.body_fill());
                painter.rect_stroke(rect, 4.0 * scale, stroke, StrokeKind::Inside);
                painter.text(
                    center,
                    egui::Align2::CENTER_CENTER,
                    "B",
                    egui::FontId::proportional(20.0 * scale),
                    ink,
                );
            }
            ComponentKind::Lamp => {
                let r = 32.0 * scale;
                painter.circle_filled(center, r, self.body_fill());
                painter.circle_stroke(center, r, stroke);
                let arm = 20.0 * scale;
                painter.line_segment(
                    [center + egui::vec2(-arm, -arm), center + egui::vec2(arm, arm)],
                    stroke,
                );
                painter.line_segment(
                    [center + egui::vec2(arm, -arm), center + egui::vec2(-arm, arm)],
                    stroke,
                );
            }
            ComponentKind::Switch => {
                let r = 26.0 * scale;
                painter.circle_filled(center, r, self.body_fill());
                painter.circle_stroke(center, r, stroke);
                painter.text(
                    center,
                    egui::Align2::CENTER_CENTER,
                    "S",
                    egui::FontId::proportional(18.0 * scale),
                    ink,
                );
            }
            ComponentKind::Outlet => {
                let r = 32.0 * scale;
                painter.circle_filled(center, r, self.body_fill());
                painter.circle_stroke(center, r, stroke);
                for dy in [-6.0, 6.0] {
                    painter.line_segment(
                        [
                            center + egui::vec2(-15.0 * scale, dy * scale),
                            center + egui::vec2(15.0 * scale, dy * scale),
                        ],
                        stroke,
                    );
                }
            }
            ComponentKind::Omitted => {
                let rect = egui::Rect::from_center_size(
                    center,
                    egui::vec2(70.0 * scale, 70.0 * scale),
                );
                let faint = egui::Stroke::new(1.8 * scale, egui::Color32::from_gray(148));
                let corners = [
                    rect.min,
                    egui::pos2(rect.max.x, rect.min.y),
                    rect.max,
                    egui::pos2(rect.min.x, rect.max.y),
                ];
                for i in 0..4 {
                    painter.extend(egui::Shape::dashed_line(
                        &[corners[i], corners[(i + 1) % 4]],
                        faint,
                        5.0 * scale,
                        5.0 * scale,
                    ));
                }
            }
        }

        let offset = match component.label_side {
            LabelSide::Above => -54.0,
            LabelSide::Below => 58.0,
        };
        let label_pos = self.board_to_screen(
            board_rect,
            (component.pos.0, component.pos.1 + offset),
        );
        painter.text(
            label_pos,
            egui::Align2::CENTER_CENTER,
            component.label,
            egui::FontId::proportional(10.0 * scale),
            if self.dark_mode {
                egui::Color32::from_gray(160)
            } else {
                egui::Color32::from_rgb(100, 116, 139)
            },
        );
    }

    /// One L-shaped wire run. A held run highlights red while its deletion
    /// countdown is armed; white runs draw a light core over the casing.
    fn draw_segment(&self, painter: &egui::Painter, board_rect: egui::Rect, segment: &Segment) {
        let Some(path) = self.segment_path(segment) else {
            return;
        };
        let scale = self.board_scale(board_rect);
        let points: Vec<egui::Pos2> = path
            .iter()
            .map(|p| self.board_to_screen(board_rect, *p))
            .collect();

        let pressing = self
            .session
            .pending_delete
            .is_some_and(|p| p.segment == segment.id);
        let width = gauge_stroke_width(segment.gauge) * scale;
        let (casing, casing_width) = if pressing {
            (egui::Color32::from_rgb(239, 68, 68), width + 4.0 * scale)
        } else {
            (wire_casing_color(segment.color), width)
        };

        for pair in points.windows(2) {
            painter.line_segment(
                [pair[0], pair[1]],
                egui::Stroke::new(casing_width, casing),
            );
        }
        if segment.color == WireColor::White && !pressing {
            let core_width = (width - 3.0 * scale).max(1.0);
            for pair in points.windows(2) {
                painter.line_segment(
                    [pair[0], pair[1]],
                    egui::Stroke::new(core_width, egui::Color32::WHITE),
                );
            }
        }
    }

    /// A joint dot and, when assigned, its stamp badge.
    fn draw_joint(&self, painter: &egui::Painter, board_rect: egui::Rect, joint: &Joint) {
        let scale = self.board_scale(board_rect);
        let center = self.board_to_screen(board_rect, joint.pos);
        let editing = self.session.selection == Selection::EditingJoint(joint.id);

        let fill = if editing {
            egui::Color32::from_rgb(59, 130, 246)
        } else {
            egui::Color32::from_rgb(30, 41, 59)
        };
        painter.circle_filled(center, constants::JOINT_RADIUS * scale, fill);
        painter.circle_stroke(
            center,
            constants::JOINT_RADIUS * scale,
            egui::Stroke::new(2.5 * scale, egui::Color32::WHITE),
        );

        if let Some(mark) = joint.stamp {
            let badge_center = center + egui::vec2(16.0 * scale, -14.0 * scale);
            let badge = egui::Rect::from_center_size(
                badge_center,
                egui::vec2(24.0 * scale, 20.0 * scale),
            );
            painter.rect_filled(badge, 4.0 * scale, egui::Color32::from_rgb(59, 130, 246));
            painter.text(
                badge_center,
                egui::Align2::CENTER_CENTER,
                mark.symbol(),
                egui::FontId::proportional(13.0 * scale),
                egui::Color32::WHITE,
            );
        }
    }

    /// One terminal: grounded terminals draw as a "W" ring, lives as filled
    /// dots. The selected terminal gets a halo.
    fn draw_terminal(&self, painter: &egui::Painter, board_rect: egui::Rect, terminal: &Terminal) {
        let scale = self.board_scale(board_rect);
        let center = self.board_to_screen(board_rect, terminal.pos);
        let selected = self.session.selection == Selection::Terminal(terminal.id);
        let accent = egui::Color32::from_rgb(59, 130, 246);
        let r = constants::TERMINAL_RADIUS * scale;

        if selected {
            painter.circle_filled(
                center,
                r + 8.0 * scale,
                egui::Color32::from_rgba_unmultiplied(59, 130, 246, 40),
            );
        }

        if terminal.grounded {
            painter.circle_filled(center, r, self.body_fill());
            let ring_width = if selected { 3.0 } else { 2.5 };
            painter.circle_stroke(
                center,
                r,
                egui::Stroke::new(
                    ring_width * scale,
                    if selected { accent } else { self.ink() },
                ),
            );
            painter.text(
                center,
                egui::Align2::CENTER_CENTER,
                "W",
                egui::FontId::proportional(13.0 * scale),
                egui::Color32::from_rgb(37, 99, 235),
            );
        } else {
            painter.circle_filled(
                center,
                r,
                if selected {
                    accent
                } else {
                    egui::Color32::from_rgb(30, 41, 59)
                },
            );
            painter.circle_stroke(center, r, egui::Stroke::new(1.0 * scale, egui::Color32::WHITE));
        }

        // Side caption, away from the component body.
        let toward = if terminal.pos.0
            >= self.topology.component(terminal.parent).pos.0
        {
            22.0
        } else {
            -22.0
        };
        let caption_pos =
            self.board_to_screen(board_rect, (terminal.pos.0 + toward, terminal.pos.1));
        painter.text(
            caption_pos,
            egui::Align2::CENTER_CENTER,
            terminal.side_label(),
            egui::FontId::proportional(10.0 * scale),
            if terminal.grounded {
                egui::Color32::from_rgb(37, 99, 235)
            } else if self.dark_mode {
                egui::Color32::from_gray(160)
            } else {
                egui::Color32::from_rgb(100, 116, 139)
            },
        );
    }
}
