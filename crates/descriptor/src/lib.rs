//! The static descriptor for the entertainment chat agent.
//!
//! The descriptor is a pure data record: it names the agent, carries its
//! behavioral instructions, and references the remote model the runtime
//! should invoke. All request handling, prompt assembly, and model call
//! dispatch happen inside the agent runtime that consumes the record;
//! nothing in this crate defines behavior.

#![deny(missing_docs)]

#[macro_use]
extern crate tracing;

mod descriptor;
mod error;
mod preset;

pub use descriptor::*;
pub use error::*;
pub use preset::*;
