//! Stdin payload module (host-facing).
//!
//! The host pipes a JSON description of its session into the plugin. The
//! horse does not depend on any of it, so this crate is deliberately
//! forgiving: an empty payload is `None`, a malformed one is reported as
//! [`PayloadError::Decode`] for the caller to shrug off, and only a broken
//! reader is a real failure.

pub mod payload;
pub mod read;

pub use payload::{
    ContextWindow, CurrentUsage, ModelInfo, RateLimit, StatusLineInput, WorkspaceInfo,
};
pub use read::{decode, read_payload, strip_nul, PayloadError};
