//! Error types for the refactoring swarm
//!
//! Every fallible operation in the workspace returns [`SwarmResult`]. Errors expose
//! a stable code through [`UnifiedError`] so callers can branch on the failure kind
//! without matching on message text.

mod constructors;
mod conversions;
mod types;
mod unified_error;

pub use types::{SwarmError, SwarmResult, UnifiedError};
