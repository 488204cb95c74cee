//! Core positional types shared by the parsing and mesh stages.

use serde::{Deserialize, Serialize};

/// An absolute machine position in toolpath coordinates.
///
/// All three axes are always fully specified. Once an axis has been set it
/// persists unchanged across subsequent movements until a command overwrites
/// it again.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    /// X-axis position
    pub x: f64,
    /// Y-axis position
    pub y: f64,
    /// Z-axis position
    pub z: f64,
}

impl Position {
    /// Create a new position with X, Y, Z coordinates
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The machine origin, where every trace starts
    pub fn origin() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// A partial position update extracted from a single command line.
///
/// Each axis is independent: `Some` means the line carried an explicit word
/// for that axis, `None` means the axis is left unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PartialPosition {
    /// X-axis position (if Some, update this axis)
    pub x: Option<f64>,
    /// Y-axis position (if Some, update this axis)
    pub y: Option<f64>,
    /// Z-axis position (if Some, update this axis)
    pub z: Option<f64>,
}

impl PartialPosition {
    /// Create a new empty partial position (all axes None)
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no axis word was present on the line
    pub fn is_empty(&self) -> bool {
        self.x.is_none() && self.y.is_none() && self.z.is_none()
    }

    /// Overlay the present axes onto `base`, leaving absent axes untouched
    pub fn apply_to(&self, base: Position) -> Position {
        Position {
            x: self.x.unwrap_or(base.x),
            y: self.y.unwrap_or(base.y),
            z: self.z.unwrap_or(base.z),
        }
    }
}

/// One recorded absolute position in the print trace.
///
/// Movements are retained only when they represent extruded material or an
/// actual axis change, and their order is the toolpath's temporal order.
pub type Movement = Position;
