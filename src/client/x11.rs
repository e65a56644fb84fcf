//! X11 client
//!
//! [`WindowSystem`] over an x11rb `RustConnection`. The connection lives as
//! long as the client and is closed when it is dropped.

use tracing::debug;
use x11rb::connection::Connection;
use x11rb::properties::WmSizeHints;
use x11rb::protocol::xproto::*;
use x11rb::rust_connection::RustConnection;
use x11rb::wrapper::ConnectionExt as _;

use crate::client::atoms::Atoms;
use crate::client::{ExtentSource, NameProperty, WindowSystem};
use crate::error::Result;
use crate::geometry::ClientRect;

/// 32-bit units requested for title properties.
const NAME_LENGTH: u32 = 1024;
/// Upper bound on extent values read; more than four is malformed anyway.
const EXTENTS_LENGTH: u32 = 16;
/// Upper bound on `_NET_WM_STATE` atoms read.
const STATE_LENGTH: u32 = 64;

pub struct X11Client {
    conn: RustConnection,
    root: Window,
    atoms: Atoms,
}

impl X11Client {
    /// Connect to `display`, or to `$DISPLAY` when `None`.
    pub fn connect(display: Option<&str>) -> Result<Self> {
        let (conn, screen_num) = x11rb::connect(display)?;
        let root = conn.setup().roots[screen_num].root;
        let atoms = Atoms::new(&conn)?;

        debug!("Connected to X server, screen {}, root window 0x{:x}", screen_num, root);

        Ok(Self { conn, root, atoms })
    }

    /// Fetch a property, `None` if it does not exist on the window.
    fn property(
        &self,
        window: Window,
        property: Atom,
        type_: Atom,
        length: u32,
    ) -> Result<Option<GetPropertyReply>> {
        let reply = self
            .conn
            .get_property(false, window, property, type_, 0, length)?
            .reply()?;

        if reply.type_ == x11rb::NONE {
            return Ok(None);
        }
        Ok(Some(reply))
    }
}

impl WindowSystem for X11Client {
    fn root(&self) -> Window {
        self.root
    }

    fn active_window(&self) -> Result<Option<Window>> {
        let reply = self.property(
            self.root,
            self.atoms.net_active_window,
            AtomEnum::WINDOW.into(),
            1,
        )?;

        Ok(reply
            .as_ref()
            .and_then(|reply| reply.value32())
            .and_then(|mut values| values.next())
            .filter(|&window| window != x11rb::NONE))
    }

    fn name_property(&self, window: Window, property: NameProperty) -> Result<Option<Vec<u8>>> {
        let (atom, type_) = match property {
            NameProperty::Extended => (self.atoms.net_wm_name, self.atoms.utf8_string),
            NameProperty::Legacy => (AtomEnum::WM_NAME.into(), AtomEnum::STRING.into()),
        };

        Ok(self
            .property(window, atom, type_, NAME_LENGTH)?
            .map(|reply| reply.value))
    }

    fn children(&self, window: Window) -> Result<Vec<Window>> {
        Ok(self.conn.query_tree(window)?.reply()?.children)
    }

    fn extent_property(&self, window: Window, source: ExtentSource) -> Result<Option<Vec<u32>>> {
        let reply = self.property(
            window,
            self.atoms.extents(source),
            AtomEnum::CARDINAL.into(),
            EXTENTS_LENGTH,
        )?;

        // A CARDINAL property in any format other than 32 yields no values.
        Ok(reply.map(|reply| {
            reply
                .value32()
                .map(|values| values.collect())
                .unwrap_or_default()
        }))
    }

    fn request_unmaximize(&self, window: Window) -> Result<()> {
        const NET_WM_STATE_REMOVE: u32 = 0;
        const SOURCE_APPLICATION: u32 = 1;

        let event = ClientMessageEvent::new(
            32,
            window,
            self.atoms.net_wm_state,
            [
                NET_WM_STATE_REMOVE,
                self.atoms.net_wm_state_maximized_vert,
                self.atoms.net_wm_state_maximized_horz,
                SOURCE_APPLICATION,
                0,
            ],
        );
        self.conn.send_event(
            false,
            self.root,
            EventMask::SUBSTRUCTURE_REDIRECT | EventMask::SUBSTRUCTURE_NOTIFY,
            event,
        )?;
        self.conn.flush()?;

        Ok(())
    }

    fn is_maximized(&self, window: Window) -> Result<bool> {
        let Some(reply) = self.property(
            window,
            self.atoms.net_wm_state,
            AtomEnum::ATOM.into(),
            STATE_LENGTH,
        )?
        else {
            return Ok(false);
        };

        let maximized = [
            self.atoms.net_wm_state_maximized_vert,
            self.atoms.net_wm_state_maximized_horz,
        ];
        Ok(reply
            .value32()
            .is_some_and(|mut states| states.any(|state| maximized.contains(&state))))
    }

    fn set_gravity_north_west(&self, window: Window) -> Result<()> {
        let mut hints = WmSizeHints::get_normal_hints(&self.conn, window)?
            .reply()?
            .unwrap_or_default();
        hints.win_gravity = Some(Gravity::NORTH_WEST);
        hints.set_normal_hints(&self.conn, window)?;

        Ok(())
    }

    fn move_resize(&self, window: Window, rect: ClientRect) -> Result<()> {
        self.conn
            .configure_window(
                window,
                &ConfigureWindowAux::new()
                    .x(rect.x)
                    .y(rect.y)
                    .width(rect.width)
                    .height(rect.height),
            )?
            .check()?;
        self.conn.sync()?;

        Ok(())
    }
}

impl Drop for X11Client {
    fn drop(&mut self) {
        debug!("Closing X connection");
    }
}
