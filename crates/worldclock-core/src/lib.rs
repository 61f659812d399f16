//! World Clock Core — shared domain abstractions.
//!
//! This crate defines the time lookup operation and the types both the
//! server and the display client depend on. It contains no infrastructure
//! code.

pub mod clock;
pub mod error;
pub mod label;
pub mod lookup;
pub mod service;
pub mod snapshot;
pub mod zone;
