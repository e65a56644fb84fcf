//! In-memory window system for tests.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use x11rb::errors::{ConnectionError, ReplyError};
use x11rb::protocol::xproto::Window;

use crate::client::{ExtentSource, NameProperty, WindowSystem};
use crate::error::{Error, Result};
use crate::geometry::ClientRect;

pub const ROOT: Window = 0x100;

/// Mutating requests, in the order they were issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Unmaximize(Window),
    GravityNorthWest(Window),
    MoveResize(Window, ClientRect),
}

#[derive(Debug, Default)]
pub struct FakeWindowSystem {
    pub active: Option<Window>,
    pub children: HashMap<Window, Vec<Window>>,
    pub extended_names: HashMap<Window, Vec<u8>>,
    pub legacy_names: HashMap<Window, Vec<u8>>,
    pub extents: HashMap<(Window, ExtentSource), Vec<u32>>,
    /// Windows whose tree query fails.
    pub broken: HashSet<Window>,
    /// Number of `is_maximized` queries that still report maximized.
    pub maximized_polls: RefCell<u32>,
    pub reject_move_resize: bool,
    pub calls: RefCell<Vec<Call>>,
    pub visited: RefCell<Vec<Window>>,
}

impl FakeWindowSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_children(mut self, parent: Window, children: &[Window]) -> Self {
        self.children.insert(parent, children.to_vec());
        self
    }

    pub fn with_title(mut self, window: Window, title: &str) -> Self {
        self.extended_names.insert(window, title.as_bytes().to_vec());
        self
    }

    pub fn with_legacy_title(mut self, window: Window, title: &[u8]) -> Self {
        self.legacy_names.insert(window, title.to_vec());
        self
    }

    pub fn with_extents(mut self, window: Window, source: ExtentSource, values: &[u32]) -> Self {
        self.extents.insert((window, source), values.to_vec());
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn move_resizes(&self) -> Vec<ClientRect> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                Call::MoveResize(_, rect) => Some(*rect),
                _ => None,
            })
            .collect()
    }

    fn rejected() -> Error {
        Error::Reply(ReplyError::ConnectionError(ConnectionError::UnknownError))
    }
}

impl WindowSystem for FakeWindowSystem {
    fn root(&self) -> Window {
        ROOT
    }

    fn active_window(&self) -> Result<Option<Window>> {
        Ok(self.active)
    }

    fn name_property(&self, window: Window, property: NameProperty) -> Result<Option<Vec<u8>>> {
        if property == NameProperty::Extended {
            self.visited.borrow_mut().push(window);
        }
        let names = match property {
            NameProperty::Extended => &self.extended_names,
            NameProperty::Legacy => &self.legacy_names,
        };
        Ok(names.get(&window).cloned())
    }

    fn children(&self, window: Window) -> Result<Vec<Window>> {
        if self.broken.contains(&window) {
            return Err(Self::rejected());
        }
        Ok(self.children.get(&window).cloned().unwrap_or_default())
    }

    fn extent_property(&self, window: Window, source: ExtentSource) -> Result<Option<Vec<u32>>> {
        Ok(self.extents.get(&(window, source)).cloned())
    }

    fn request_unmaximize(&self, window: Window) -> Result<()> {
        self.calls.borrow_mut().push(Call::Unmaximize(window));
        Ok(())
    }

    fn is_maximized(&self, _window: Window) -> Result<bool> {
        let mut remaining = self.maximized_polls.borrow_mut();
        if *remaining == 0 {
            return Ok(false);
        }
        *remaining -= 1;
        Ok(true)
    }

    fn set_gravity_north_west(&self, window: Window) -> Result<()> {
        self.calls.borrow_mut().push(Call::GravityNorthWest(window));
        Ok(())
    }

    fn move_resize(&self, window: Window, rect: ClientRect) -> Result<()> {
        if self.reject_move_resize {
            return Err(Self::rejected());
        }
        self.calls.borrow_mut().push(Call::MoveResize(window, rect));
        Ok(())
    }
}
