//! Core circuit representation for smallsig.
//!
//! This crate provides the typed component model, the multigraph circuit
//! intermediate representation, the hybrid-pi linearization of transistor
//! entries, and the DC-source elimination pass that turns a biased circuit
//! into a pure small-signal graph.

pub mod circuit;
pub mod component;
pub mod error;
pub mod node;
pub mod passive;
pub mod reduce;
pub mod sources;
pub mod transistor;
pub mod units;

pub use circuit::{Circuit, DEFAULT_FREQUENCY_HZ, Edge};
pub use component::{Component, SourceValue, TwoTerminal};
pub use error::{Error, Result};
pub use node::{GROUND, Node};
pub use transistor::{HybridPiParams, MosfetFieldOrder, OPEN_CIRCUIT_RESISTANCE};
pub use units::parse_literal;
