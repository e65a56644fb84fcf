//! Window system client
//!
//! The narrow set of windowing operations placement needs. [`x11::X11Client`]
//! implements it over an x11rb connection; tests use an in-memory fake.

pub mod atoms;
pub mod x11;

#[cfg(test)]
pub mod fake;

use x11rb::protocol::xproto::Window;

use crate::error::Result;
use crate::geometry::ClientRect;

/// Where a window's title is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameProperty {
    /// `_NET_WM_NAME`, UTF-8.
    Extended,
    /// `WM_NAME`, Latin-1.
    Legacy,
}

/// The two independent frame extent properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtentSource {
    /// `_GTK_FRAME_EXTENTS`: invisible client-side shadow padding.
    ToolkitShadow,
    /// `_NET_FRAME_EXTENTS`: window manager decorations around the client.
    Decoration,
}

impl ExtentSource {
    pub fn property_name(self) -> &'static str {
        match self {
            Self::ToolkitShadow => "_GTK_FRAME_EXTENTS",
            Self::Decoration => "_NET_FRAME_EXTENTS",
        }
    }
}

pub trait WindowSystem {
    /// Root window of the screen in use.
    fn root(&self) -> Window;

    /// `_NET_ACTIVE_WINDOW` of the root, `None` when unset or zero.
    fn active_window(&self) -> Result<Option<Window>>;

    /// Raw bytes of a title property, `None` when the property is unset.
    fn name_property(&self, window: Window, property: NameProperty) -> Result<Option<Vec<u8>>>;

    /// Direct children in stacking order, bottom first.
    fn children(&self, window: Window) -> Result<Vec<Window>>;

    /// Every CARDINAL value of an extents property, `None` when unset.
    fn extent_property(&self, window: Window, source: ExtentSource) -> Result<Option<Vec<u32>>>;

    /// Ask the window manager to drop both maximized states.
    fn request_unmaximize(&self, window: Window) -> Result<()>;

    /// Whether either maximized state is still set.
    fn is_maximized(&self, window: Window) -> Result<bool>;

    /// Set the `WM_NORMAL_HINTS` window gravity to north-west, keeping the
    /// other hints.
    fn set_gravity_north_west(&self, window: Window) -> Result<()>;

    /// Move and resize, then wait until the server has processed it.
    fn move_resize(&self, window: Window, rect: ClientRect) -> Result<()>;
}
