//! # smallsig
//!
//! A small-signal circuit model compiler. smallsig turns a SPICE-style
//! netlist, plus an optional operating-point log, into a reduced
//! small-signal circuit graph:
//!
//! - typed component parsing with a fixed kind-tag registry
//! - bias-point extraction of hybrid-pi parameters from simulator logs
//! - transistor linearization into transconductance and resistances
//! - DC-source elimination by node contraction and edge removal
//!
//! The result is a pure small-signal multigraph ready for downstream
//! symbolic or numeric analysis; solving it is out of scope here.
//!
//! ## Quick Start
//!
//! ```
//! use smallsig::prelude::*;
//!
//! let netlist = "V1 1 0 5\nR1 1 2 1k\nR2 2 0 1k";
//!
//! // Without bias data, DC sources are kept as ordinary edges.
//! let circuit = circuit_from_netlist(netlist, None).unwrap();
//! assert_eq!(circuit.edge_count(), 3);
//!
//! // With bias data, the DC supply is contracted away.
//! let reduced = circuit_from_netlist(netlist, Some("op log")).unwrap();
//! assert!(reduced.edge("V1").is_none());
//! assert!(reduced.node(GROUND).unwrap().has_alias("1"));
//! ```

// Re-export the member crates.
pub use smallsig_core as core;
pub use smallsig_parser as parser;

// Convenient re-exports from smallsig-core.
pub use smallsig_core::{
    Circuit,
    Component,
    DEFAULT_FREQUENCY_HZ,
    Edge,
    // Errors
    Error as CoreError,
    GROUND,
    HybridPiParams,
    MosfetFieldOrder,
    Node,
    OPEN_CIRCUIT_RESISTANCE,
    SourceValue,
    TwoTerminal,
    parse_literal,
};

// Convenient re-exports from smallsig-parser.
pub use smallsig_parser::{
    Error as ParseError,
    ParameterTable,
    circuit_from_netlist,
    extract_parameters,
    parse_entry,
    serialize_entry,
};

/// Prelude module containing commonly used types and functions.
///
/// ```
/// use smallsig::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        Circuit, Component, GROUND, HybridPiParams, SourceValue, TwoTerminal,
        circuit_from_netlist, extract_parameters, parse_entry, parse_literal,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_circuit() {
        let circuit = circuit_from_netlist("V1 1 0 5\nR1 1 0 1k", None);
        assert!(circuit.is_ok());
    }

    #[test]
    fn test_prelude_imports() {
        use crate::prelude::*;

        let component = parse_entry("R1 1 2 1k").unwrap();
        assert_eq!(component.name(), "R1");
        assert_eq!(parse_literal("1k").unwrap(), 1000.0);
        let _: &str = GROUND;
    }
}
