//! The static exercise board: components, terminals, and their resolved
//! positions.
//!
//! Everything in this module is fixed for the exercise. Components and
//! terminal definitions are compile-time tables; the only computation is
//! resolving each terminal's world position from its parent component and
//! offset, done once when a [`Topology`] is built.

use serde::{Deserialize, Serialize};

use crate::types::distance;

/// Identifies one of the five fixed board components.
///
/// The discriminant doubles as the component's index in the board table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentId {
    /// The incoming supply, drawn as a breaker.
    Power,
    /// The ceiling lamp fixture.
    Lamp,
    /// The single-pole switch controlling the lamp.
    Switch,
    /// The wall outlet.
    Outlet,
    /// A load whose installation is omitted from the exercise.
    OmittedLoad,
}

/// What a component is, which controls how it is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComponentKind {
    /// Square body with a "B" marking.
    Breaker,
    /// Circle with a diagonal cross.
    Lamp,
    /// Circle with an "S" marking.
    Switch,
    /// Circle with twin slot lines.
    Outlet,
    /// Dashed outline standing in for equipment that is not installed.
    Omitted,
}

/// Which side of a component its caption is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabelSide {
    /// Caption above the component body.
    Above,
    /// Caption below the component body.
    Below,
}

/// A fixed component on the board. Never mutated at runtime.
#[derive(Debug, Clone, Copy)]
pub struct Component {
    /// Which component this is.
    pub id: ComponentId,
    /// Caption shown next to the body.
    pub label: &'static str,
    /// Body center in board units.
    pub pos: (f32, f32),
    /// Visual kind of the body.
    pub kind: ComponentKind,
    /// Side the caption is drawn on.
    pub label_side: LabelSide,
}

/// Identifies one of the ten fixed terminals.
///
/// The discriminant doubles as the terminal's index in the board table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TerminalId {
    /// Grounded (W) side of the supply.
    SourceNeutral,
    /// Live (L) side of the supply.
    SourceLive,
    /// Grounded side of the lamp.
    LampNeutral,
    /// Switched return into the lamp.
    LampReturn,
    /// Live feed into the switch.
    SwitchLive,
    /// Switched return leaving the switch.
    SwitchReturn,
    /// Grounded side of the outlet.
    OutletNeutral,
    /// Live side of the outlet.
    OutletLive,
    /// Grounded side of the omitted load.
    LoadNeutral,
    /// Switched return into the omitted load.
    LoadReturn,
}

/// A terminal definition relative to its parent component.
struct TerminalDef {
    id: TerminalId,
    parent: ComponentId,
    offset: (f32, f32),
    grounded: bool,
    label: &'static str,
    role: &'static str,
}

/// A terminal with its world position resolved.
#[derive(Debug, Clone, Copy)]
pub struct Terminal {
    /// Which terminal this is.
    pub id: TerminalId,
    /// Component the terminal belongs to.
    pub parent: ComponentId,
    /// Resolved position in board units (parent position plus offset).
    pub pos: (f32, f32),
    /// Whether this is a grounded ("W") terminal rather than a live one.
    pub grounded: bool,
    /// Short marking printed on the terminal, possibly empty.
    pub label: &'static str,
    /// Role name used in judge diagnostics.
    pub role: &'static str,
}

impl Terminal {
    /// Caption drawn beside the terminal: "W" on the grounded side, the
    /// printed marking otherwise, falling back to "L" for unmarked lives.
    pub fn side_label(&self) -> &'static str {
        if self.grounded {
            "W"
        } else if self.label.is_empty() {
            "L"
        } else {
            self.label
        }
    }
}

/// The fixed component table, in [`ComponentId`] order.
const COMPONENTS: [Component; 5] = [
    Component {
        id: ComponentId::Power,
        label: "Power (breaker)",
        pos: (60.0, 150.0),
        kind: ComponentKind::Breaker,
        label_side: LabelSide::Above,
    },
    Component {
        id: ComponentId::Lamp,
        label: "Ceiling lamp",
        pos: (300.0, 40.0),
        kind: ComponentKind::Lamp,
        label_side: LabelSide::Above,
    },
    Component {
        id: ComponentId::Switch,
        label: "Switch",
        pos: (300.0, 405.0),
        kind: ComponentKind::Switch,
        label_side: LabelSide::Below,
    },
    Component {
        id: ComponentId::Outlet,
        label: "Outlet",
        pos: (60.0, 405.0),
        kind: ComponentKind::Outlet,
        label_side: LabelSide::Below,
    },
    Component {
        id: ComponentId::OmittedLoad,
        label: "Omitted load",
        pos: (540.0, 150.0),
        kind: ComponentKind::Omitted,
        label_side: LabelSide::Above,
    },
];

/// The fixed terminal table, in [`TerminalId`] order.
const TERMINAL_DEFS: [TerminalDef; 10] = [
    TerminalDef {
        id: TerminalId::SourceNeutral,
        parent: ComponentId::Power,
        offset: (45.0, -20.0),
        grounded: true,
        label: "W",
        role: "source neutral",
    },
    TerminalDef {
        id: TerminalId::SourceLive,
        parent: ComponentId::Power,
        offset: (45.0, 20.0),
        grounded: false,
        label: "L",
        role: "source live",
    },
    TerminalDef {
        id: TerminalId::LampNeutral,
        parent: ComponentId::Lamp,
        offset: (-25.0, 0.0),
        grounded: true,
        label: "W",
        role: "lamp neutral",
    },
    TerminalDef {
        id: TerminalId::LampReturn,
        parent: ComponentId::Lamp,
        offset: (25.0, 0.0),
        grounded: false,
        label: "",
        role: "lamp return",
    },
    TerminalDef {
        id: TerminalId::SwitchLive,
        parent: ComponentId::Switch,
        offset: (-25.0, 0.0),
        grounded: false,
        label: "L",
        role: "switch live",
    },
    TerminalDef {
        id: TerminalId::SwitchReturn,
        parent: ComponentId::Switch,
        offset: (25.0, 0.0),
        grounded: false,
        label: "S",
        role: "switch return",
    },
    TerminalDef {
        id: TerminalId::OutletNeutral,
        parent: ComponentId::Outlet,
        offset: (25.0, -15.0),
        grounded: true,
        label: "W",
        role: "outlet neutral",
    },
    TerminalDef {
        id: TerminalId::OutletLive,
        parent: ComponentId::Outlet,
        offset: (25.0, 15.0),
        grounded: false,
        label: "L",
        role: "outlet live",
    },
    TerminalDef {
        id: TerminalId::LoadNeutral,
        parent: ComponentId::OmittedLoad,
        offset: (-35.0, -20.0),
        grounded: true,
        label: "W",
        role: "load neutral",
    },
    TerminalDef {
        id: TerminalId::LoadReturn,
        parent: ComponentId::OmittedLoad,
        offset: (-35.0, 20.0),
        grounded: false,
        label: "",
        role: "load return",
    },
];

/// The resolved exercise board.
///
/// Built once at startup; all lookups are infallible because the definition
/// tables are complete and indexed by the id discriminants.
#[derive(Debug, Clone)]
pub struct Topology {
    components: [Component; 5],
    terminals: [Terminal; 10],
}

impl Default for Topology {
    fn default() -> Self {
        Self::standard()
    }
}

impl Topology {
    /// Builds the standard single-lamp exercise board, resolving each
    /// terminal position as its parent position plus the defined offset.
    pub fn standard() -> Self {
        let components = COMPONENTS;
        let mut i = 0;
        let terminals = TERMINAL_DEFS.map(|def| {
            debug_assert_eq!(def.id as usize, i, "terminal table out of order");
            i += 1;
            let parent = components[def.parent as usize];
            Terminal {
                id: def.id,
                parent: def.parent,
                pos: (parent.pos.0 + def.offset.0, parent.pos.1 + def.offset.1),
                grounded: def.grounded,
                label: def.label,
                role: def.role,
            }
        });
        Self {
            components,
            terminals,
        }
    }

    /// All components on the board.
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// All terminals with resolved positions.
    pub fn terminals(&self) -> &[Terminal] {
        &self.terminals
    }

    /// Looks up a component by id.
    pub fn component(&self, id: ComponentId) -> &Component {
        &self.components[id as usize]
    }

    /// Looks up a terminal by id.
    pub fn terminal(&self, id: TerminalId) -> &Terminal {
        &self.terminals[id as usize]
    }

    /// Terminals on the grounded ("W") side of the circuit.
    pub fn grounded_terminals(&self) -> impl Iterator<Item = &Terminal> {
        self.terminals.iter().filter(|t| t.grounded)
    }

    /// Whether `id` belongs to the power source.
    pub fn is_source_terminal(&self, id: TerminalId) -> bool {
        self.terminal(id).parent == ComponentId::Power
    }

    /// The terminal nearest `pos` within `radius`, if any.
    pub fn terminal_near(&self, pos: (f32, f32), radius: f32) -> Option<TerminalId> {
        self.terminals
            .iter()
            .map(|t| (t.id, distance(t.pos, pos)))
            .filter(|(_, d)| *d < radius)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(id, _)| id)
    }
}
