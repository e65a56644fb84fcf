//! Geometry
//!
//! Rectangles and frame extents, plus the compensation arithmetic that turns
//! a visible target rectangle into the client rectangle handed to the X
//! server.
//!
//! The two extent sources have opposite meanings. Toolkit shadow extents
//! (`_GTK_FRAME_EXTENTS`) are invisible padding *inside* the client
//! rectangle, so the client must grow around the target. Decoration extents
//! (`_NET_FRAME_EXTENTS`) are chrome the window manager adds *outside* the
//! client, so the client must shrink. Each has its own function below.

use std::fmt;

/// Visible target rectangle requested by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    /// Returns `None` when either dimension is zero.
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }
        Some(Self { x, y, width, height })
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x={}, y={}, w={}, h={}", self.x, self.y, self.width, self.height)
    }
}

/// Insets between a client rectangle and what the user sees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameExtents {
    pub left: i32,
    pub right: i32,
    pub top: i32,
    pub bottom: i32,
}

impl FrameExtents {
    pub fn new(left: i32, right: i32, top: i32, bottom: i32) -> Self {
        Self { left, right, top, bottom }
    }

    /// Build from the raw CARDINAL values of an extents property, which are
    /// ordered left, right, top, bottom. Anything but exactly four values is
    /// rejected.
    pub fn from_cardinals(values: &[u32]) -> Option<Self> {
        match *values {
            [left, right, top, bottom] => Some(Self::new(
                left as i32,
                right as i32,
                top as i32,
                bottom as i32,
            )),
            _ => None,
        }
    }

    fn horizontal(&self) -> i64 {
        i64::from(self.left) + i64::from(self.right)
    }

    fn vertical(&self) -> i64 {
        i64::from(self.top) + i64::from(self.bottom)
    }
}

impl fmt::Display for FrameExtents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "left={}, right={}, top={}, bottom={}",
            self.left, self.right, self.top, self.bottom
        )
    }
}

/// Working client rectangle. Signed and wide so intermediate sizes may go
/// negative without overflowing; [`Geometry::clamped`] produces what is
/// actually sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl Geometry {
    pub fn new(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self { x, y, width, height }
    }

    /// Clamp to a rectangle the X server accepts: sizes at least 1, every
    /// field saturated into its wire type.
    pub fn clamped(&self) -> ClientRect {
        ClientRect::new(
            saturate_i32(self.x),
            saturate_i32(self.y),
            saturate_size(self.width),
            saturate_size(self.height),
        )
    }
}

impl From<Rect> for Geometry {
    fn from(rect: Rect) -> Self {
        Self::new(
            rect.x.into(),
            rect.y.into(),
            rect.width.into(),
            rect.height.into(),
        )
    }
}

/// Final client rectangle passed to the move/resize request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl ClientRect {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }
}

impl fmt::Display for ClientRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x={}, y={}, w={}, h={}", self.x, self.y, self.width, self.height)
    }
}

fn saturate_i32(value: i64) -> i32 {
    value.clamp(i32::MIN.into(), i32::MAX.into()) as i32
}

fn saturate_size(value: i64) -> u32 {
    value.clamp(1, u32::MAX.into()) as u32
}

/// Grow the client around the visible area by the toolkit's invisible
/// shadow padding.
pub fn apply_shadow_extents(geometry: Geometry, extents: FrameExtents) -> Geometry {
    Geometry {
        x: geometry.x - i64::from(extents.left),
        y: geometry.y - i64::from(extents.top),
        width: geometry.width + extents.horizontal(),
        height: geometry.height + extents.vertical(),
    }
}

/// Shrink the client so client plus window manager chrome fills the
/// visible area. Position is untouched: with north-west gravity the
/// decorated frame is anchored there.
pub fn apply_decoration_extents(geometry: Geometry, extents: FrameExtents) -> Geometry {
    Geometry {
        width: geometry.width - extents.horizontal(),
        height: geometry.height - extents.vertical(),
        ..geometry
    }
}

/// Full compensation: shadow first, decoration second, then clamp.
pub fn plan(
    target: Rect,
    shadow: Option<FrameExtents>,
    decoration: Option<FrameExtents>,
) -> ClientRect {
    let mut geometry = Geometry::from(target);
    if let Some(extents) = shadow {
        geometry = apply_shadow_extents(geometry, extents);
    }
    if let Some(extents) = decoration {
        geometry = apply_decoration_extents(geometry, extents);
    }
    geometry.clamped()
}
