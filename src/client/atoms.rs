//! Atoms
//!
//! EWMH and toolkit atoms used for placement, interned once per connection.

use x11rb::connection::Connection;
use x11rb::protocol::xproto::{Atom, ConnectionExt as _};

use crate::client::ExtentSource;
use crate::error::Result;

/// Holds all interned atoms
#[derive(Debug)]
pub struct Atoms {
    pub net_active_window: Atom,
    pub net_wm_name: Atom,
    pub utf8_string: Atom,
    pub net_wm_state: Atom,
    pub net_wm_state_maximized_vert: Atom,
    pub net_wm_state_maximized_horz: Atom,
    pub net_frame_extents: Atom,
    pub gtk_frame_extents: Atom,
}

impl Atoms {
    /// Intern all required atoms
    pub fn new<C: Connection>(conn: &C) -> Result<Self> {
        let intern = |name: &str| -> Result<Atom> {
            Ok(conn.intern_atom(false, name.as_bytes())?.reply()?.atom)
        };

        Ok(Self {
            net_active_window: intern("_NET_ACTIVE_WINDOW")?,
            net_wm_name: intern("_NET_WM_NAME")?,
            utf8_string: intern("UTF8_STRING")?,
            net_wm_state: intern("_NET_WM_STATE")?,
            net_wm_state_maximized_vert: intern("_NET_WM_STATE_MAXIMIZED_VERT")?,
            net_wm_state_maximized_horz: intern("_NET_WM_STATE_MAXIMIZED_HORZ")?,
            net_frame_extents: intern(ExtentSource::Decoration.property_name())?,
            gtk_frame_extents: intern(ExtentSource::ToolkitShadow.property_name())?,
        })
    }

    pub fn extents(&self, source: ExtentSource) -> Atom {
        match source {
            ExtentSource::ToolkitShadow => self.gtk_frame_extents,
            ExtentSource::Decoration => self.net_frame_extents,
        }
    }
}
