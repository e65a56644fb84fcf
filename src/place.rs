//! Window placement
//!
//! Moves and resizes a window so that its visible area covers a target
//! rectangle: un-maximize, read frame extents, compensate, commit.

use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};
use x11rb::protocol::xproto::Window;

use crate::client::WindowSystem;
use crate::error::{Error, Result};
use crate::extents::FrameExtentResolver;
use crate::geometry::{self, ClientRect, Rect};

/// How to wait for the window manager after the un-maximize request. The
/// protocol has no acknowledgement, so either strategy is best effort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settle {
    /// Do not un-maximize at all.
    Skip,
    /// Sleep for a fixed time.
    Fixed(Duration),
    /// Poll `_NET_WM_STATE` until neither maximized state is set.
    Poll { interval: Duration, timeout: Duration },
}

impl Default for Settle {
    fn default() -> Self {
        Self::Fixed(Duration::from_millis(50))
    }
}

pub struct WindowPlacer<'a, W: WindowSystem> {
    client: &'a W,
    settle: Settle,
}

impl<'a, W: WindowSystem> WindowPlacer<'a, W> {
    pub fn new(client: &'a W, settle: Settle) -> Self {
        Self { client, settle }
    }

    /// Place `window` so its visible area is `target`. Returns the client
    /// rectangle that was committed.
    pub fn place(&self, window: Window, target: Rect) -> Result<ClientRect> {
        info!("Target position/size (visible area): {}", target);

        self.unmaximize(window)?;

        let extents = FrameExtentResolver::new(self.client).resolve_all(window);
        if extents.decoration.is_some() {
            // Anchor the decorated frame, not the client, at the position.
            self.client.set_gravity_north_west(window)?;
        } else {
            info!("No frame extents found - window may be undecorated");
        }

        let client_rect = geometry::plan(target, extents.shadow, extents.decoration);
        info!("Calculated client window: {}", client_rect);

        self.client
            .move_resize(window, client_rect)
            .map_err(|source| Error::Commit {
                window,
                source: Box::new(source),
            })?;

        Ok(client_rect)
    }

    fn unmaximize(&self, window: Window) -> Result<()> {
        if self.settle == Settle::Skip {
            return Ok(());
        }

        self.client.request_unmaximize(window)?;

        match self.settle {
            Settle::Skip => {}
            Settle::Fixed(delay) => thread::sleep(delay),
            Settle::Poll { interval, timeout } => self.wait_unmaximized(window, interval, timeout),
        }
        Ok(())
    }

    fn wait_unmaximized(&self, window: Window, interval: Duration, timeout: Duration) {
        let start = Instant::now();
        loop {
            match self.client.is_maximized(window) {
                Ok(false) => {
                    debug!("Window 0x{:x} unmaximized after {:?}", window, start.elapsed());
                    return;
                }
                Ok(true) => {}
                Err(e) => {
                    warn!("Failed to read state of window 0x{:x}: {}", window, e);
                    return;
                }
            }

            if start.elapsed() >= timeout {
                warn!(
                    "Window 0x{:x} still maximized after {:?}, placing anyway",
                    window, timeout
                );
                return;
            }
            thread::sleep(interval);
        }
    }
}
