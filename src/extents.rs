//! Frame extents
//!
//! Reads the toolkit shadow and window manager decoration extents of a
//! window. The sources are looked up separately and never merged: they are
//! compensated with opposite signs (see [`crate::geometry`]).

use tracing::{info, warn};
use x11rb::protocol::xproto::Window;

use crate::client::{ExtentSource, WindowSystem};
use crate::geometry::FrameExtents;

/// Extents of both sources for one window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WindowExtents {
    pub shadow: Option<FrameExtents>,
    pub decoration: Option<FrameExtents>,
}

pub struct FrameExtentResolver<'a, W: WindowSystem> {
    client: &'a W,
}

impl<'a, W: WindowSystem> FrameExtentResolver<'a, W> {
    pub fn new(client: &'a W) -> Self {
        Self { client }
    }

    /// Extents of one source, zero when the property is missing or bad.
    #[cfg(test)]
    pub fn resolve(&self, window: Window, source: ExtentSource) -> FrameExtents {
        self.resolve_source(window, source).unwrap_or_default()
    }

    /// Extents of one source, `None` unless the property holds exactly four
    /// values. Failures are logged and never propagated.
    pub fn resolve_source(&self, window: Window, source: ExtentSource) -> Option<FrameExtents> {
        let name = source.property_name();

        let values = match self.client.extent_property(window, source) {
            Ok(Some(values)) => values,
            Ok(None) => {
                info!("{} not set on window 0x{:x}", name, window);
                return None;
            }
            Err(e) => {
                warn!("Failed to read {} of window 0x{:x}: {}", name, window, e);
                return None;
            }
        };

        match FrameExtents::from_cardinals(&values) {
            Some(extents) => {
                info!("{}: {}", name, extents);
                Some(extents)
            }
            None => {
                warn!(
                    "Ignoring {} of window 0x{:x}: expected 4 values, got {}",
                    name,
                    window,
                    values.len()
                );
                None
            }
        }
    }

    /// Both sources, each queried on its own.
    pub fn resolve_all(&self, window: Window) -> WindowExtents {
        WindowExtents {
            shadow: self.resolve_source(window, ExtentSource::ToolkitShadow),
            decoration: self.resolve_source(window, ExtentSource::Decoration),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fake::FakeWindowSystem;

    const WIN: Window = 0x400001;

    #[test]
    fn test_absent_property_is_none() {
        let fake = FakeWindowSystem::new();
        let resolver = FrameExtentResolver::new(&fake);

        assert_eq!(resolver.resolve_source(WIN, ExtentSource::Decoration), None);
        assert_eq!(resolver.resolve(WIN, ExtentSource::Decoration), FrameExtents::default());
    }

    #[test]
    fn test_wrong_element_count_is_none() {
        let fake = FakeWindowSystem::new()
            .with_extents(WIN, ExtentSource::ToolkitShadow, &[1, 2, 3])
            .with_extents(WIN, ExtentSource::Decoration, &[1, 2, 3, 4, 5]);
        let resolver = FrameExtentResolver::new(&fake);

        assert_eq!(resolver.resolve_all(WIN), WindowExtents::default());
    }

    #[test]
    fn test_empty_property_is_none() {
        let fake = FakeWindowSystem::new().with_extents(WIN, ExtentSource::Decoration, &[]);
        let resolver = FrameExtentResolver::new(&fake);

        assert_eq!(resolver.resolve_source(WIN, ExtentSource::Decoration), None);
    }

    #[test]
    fn test_sources_are_kept_apart() {
        let fake = FakeWindowSystem::new()
            .with_extents(WIN, ExtentSource::ToolkitShadow, &[26, 26, 23, 29])
            .with_extents(WIN, ExtentSource::Decoration, &[0, 0, 37, 0]);
        let resolver = FrameExtentResolver::new(&fake);

        assert_eq!(
            resolver.resolve_all(WIN),
            WindowExtents {
                shadow: Some(FrameExtents::new(26, 26, 23, 29)),
                decoration: Some(FrameExtents::new(0, 0, 37, 0)),
            }
        );
    }
}
