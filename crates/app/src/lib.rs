//! # roster-app
//!
//! Application core — the device registry and the action dispatcher.
//!
//! ## Responsibilities
//! - Own the process-wide mutable state: [`registry::Registry`], an
//!   in-memory lock-guarded device store whose operations are safe under
//!   concurrent invocation
//! - Decode stringly request parameters into the closed
//!   [`dispatcher::Action`] set and run them against the registry,
//!   producing a serializable [`dispatcher::Reply`] — never a panic
//!
//! ## Dependency rule
//! Depends on `roster-domain` only. Never imports adapter crates.
//! Adapters depend on *this* crate, not the reverse.

pub mod dispatcher;
pub mod registry;
