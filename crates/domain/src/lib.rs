//! # roster-domain
//!
//! Pure domain model for the roster device discovery registry.
//!
//! ## Responsibilities
//! - Foundational types: string-backed key newtypes, error conventions
//! - Define **Devices** (registry entries keyed by hardware serial, with a
//!   display name and an HTTP port)
//! - Define **Interfaces** (MAC address + IP address pairs owned by exactly
//!   one device)
//! - Enforce per-device invariants (interface uniqueness, upsert semantics)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.

pub mod device;
pub mod error;
pub mod key;
