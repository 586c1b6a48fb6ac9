//! Ride With Whip (workspace facade crate).
//!
//! Re-exports the member crates under short names so the binary, the
//! integration tests and the benches share one import surface:
//! `ride_with_whip::{core, diag, input, term, types}`.

pub use ride_with_whip_core as core;
pub use ride_with_whip_diag as diag;
pub use ride_with_whip_input as input;
pub use ride_with_whip_term as term;
pub use ride_with_whip_types as types;
