//! Window resolution
//!
//! Picks the window to place: the active window, or the first window in a
//! depth-first pre-order walk of the tree whose title contains a substring.

use tracing::{debug, info};
use x11rb::protocol::xproto::Window;

use crate::client::{NameProperty, WindowSystem};
use crate::error::{Error, Result};

pub struct WindowResolver<'a, W: WindowSystem> {
    client: &'a W,
}

impl<'a, W: WindowSystem> WindowResolver<'a, W> {
    pub fn new(client: &'a W) -> Self {
        Self { client }
    }

    /// Search by title when `name` is given, otherwise use the active window.
    pub fn resolve(&self, name: Option<&str>) -> Result<Window> {
        match name {
            Some(name) => self.find_by_name(name),
            None => self.active_window(),
        }
    }

    pub fn active_window(&self) -> Result<Window> {
        let window = self.client.active_window()?.ok_or(Error::NoActiveWindow)?;
        info!("Using active window (0x{:x})", window);
        Ok(window)
    }

    /// Depth-first, pre-order, children in the order the server lists them.
    /// Stops at the first match. A window whose children cannot be listed is
    /// treated as a leaf.
    pub fn find_by_name(&self, name: &str) -> Result<Window> {
        info!("Searching for window with name containing: '{}'", name);

        let mut stack = vec![self.client.root()];
        while let Some(window) = stack.pop() {
            if let Some(title) = self.title(window) {
                if title.contains(name) {
                    info!("Found matching window: '{}' (0x{:x})", title, window);
                    return Ok(window);
                }
            }

            match self.client.children(window) {
                Ok(children) => stack.extend(children.into_iter().rev()),
                Err(e) => debug!("Cannot list children of 0x{:x}, skipping: {}", window, e),
            }
        }

        Err(Error::NotFound {
            name: name.to_string(),
        })
    }

    /// `_NET_WM_NAME`, falling back to `WM_NAME` when that is unset or
    /// empty. `None` if neither yields a title.
    pub fn title(&self, window: Window) -> Option<String> {
        if let Some(bytes) = self.name(window, NameProperty::Extended) {
            return Some(String::from_utf8_lossy(&bytes).into_owned());
        }
        self.name(window, NameProperty::Legacy)
            .map(|bytes| bytes.iter().map(|&b| char::from(b)).collect())
    }

    fn name(&self, window: Window, property: NameProperty) -> Option<Vec<u8>> {
        match self.client.name_property(window, property) {
            Ok(Some(mut bytes)) => {
                // Some clients include the C string terminator.
                if let Some(end) = bytes.iter().position(|&b| b == 0) {
                    bytes.truncate(end);
                }
                (!bytes.is_empty()).then_some(bytes)
            }
            Ok(None) => None,
            Err(e) => {
                debug!("Cannot read {:?} name of 0x{:x}: {}", property, window, e);
                None
            }
        }
    }
}
