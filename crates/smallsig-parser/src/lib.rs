//! Netlist and operating-point-log front ends for smallsig.
//!
//! This crate turns text into the core circuit representation: the kind
//! registry parses netlist entries, the log extractor recovers per-device
//! bias parameters, and the builder assembles the reduced small-signal
//! graph.
//!
//! # Example
//!
//! ```
//! use smallsig_parser::circuit_from_netlist;
//!
//! let circuit = circuit_from_netlist("V1 1 0 5\nR1 1 2 1k\nR2 2 0 1k", None).unwrap();
//! assert_eq!(circuit.edge_count(), 3);
//! ```

pub mod builder;
pub mod error;
pub mod oplog;
pub mod registry;

pub use builder::circuit_from_netlist;
pub use error::{Error, Result};
pub use oplog::{ParameterTable, extract_parameters};
pub use registry::{KindEntry, kind_entry, parse_entry, serialize_entry};
