//! Error types
//!
//! Fatal conditions of a placement run. A missing or malformed frame extent
//! property is not represented here: it degrades to "no extents" and is only
//! logged.

use x11rb::errors::{ConnectError, ConnectionError, ReplyError};
use x11rb::protocol::xproto::Window;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cannot open display: {0}")]
    Connect(#[from] ConnectError),

    #[error("lost connection to the X server: {0}")]
    Connection(#[from] ConnectionError),

    #[error("X request failed: {0}")]
    Reply(#[from] ReplyError),

    #[error("no active window found")]
    NoActiveWindow,

    #[error("no window found with name containing '{name}'")]
    NotFound { name: String },

    #[error("move/resize of window 0x{window:x} rejected: {source}")]
    Commit {
        window: Window,
        #[source]
        source: Box<Error>,
    },
}
