//! Graph construction from netlist text.
//!
//! Walks the netlist line by line, turns each entry into a typed component
//! through the registry, replaces transistors with their hybrid-pi
//! equivalents, and collects the DC sources to eliminate once the graph is
//! complete. Elimination runs only when a bias log is supplied: without one
//! the netlist alone cannot tell a DC supply from a fixed-amplitude test
//! source, so every source edge is kept.

use log::debug;

use smallsig_core::circuit::Circuit;
use smallsig_core::component::{Component, TwoTerminal};

use crate::error::{Error, Result};
use crate::oplog::{ParameterTable, extract_parameters};
use crate::registry::parse_entry;

/// Line prefixes ignored by the netlist walk: directives, comments, and
/// continuations.
const IGNORED_PREFIXES: [char; 5] = ['.', '*', ';', '+', '#'];

/// Add a two-terminal component as an edge between its own terminals.
fn add_component(circuit: &mut Circuit, component: Component) {
    if let Some(terminals) = component.as_two_terminal() {
        let (a, b) = (
            terminals.pos_node().to_string(),
            terminals.neg_node().to_string(),
        );
        circuit.add_edge(a, b, component);
    }
}

/// Look up a transistor's bias-point parameters by lowercase name.
fn transistor_params(
    parameters: &ParameterTable,
    name: &str,
) -> Result<smallsig_core::HybridPiParams> {
    parameters
        .get(&name.to_lowercase())
        .copied()
        .ok_or_else(|| Error::MissingSmallSignalParameters(name.to_string()))
}

/// Build a circuit from netlist text and an optional operating-point log.
///
/// Transistor entries never become edges; each is replaced by the three
/// parts of its hybrid-pi equivalent, using parameters extracted from the
/// log. When a log is present, numeric voltage and current sources are
/// eliminated afterwards in encounter order.
pub fn circuit_from_netlist(netlist: &str, op_point_log: Option<&str>) -> Result<Circuit> {
    let parameters = match op_point_log {
        Some(log) => extract_parameters(log)?,
        None => ParameterTable::new(),
    };

    let mut circuit = Circuit::new();
    let mut dc_sources: Vec<String> = Vec::new();

    for line in netlist.lines() {
        if line.trim().is_empty() {
            continue;
        }
        if IGNORED_PREFIXES.iter().any(|p| line.starts_with(*p)) {
            continue;
        }

        match parse_entry(line)? {
            Component::Bjt(q) => {
                let params = transistor_params(&parameters, &q.name)?;
                for part in q.small_signal_equivalent(params) {
                    add_component(&mut circuit, part);
                }
            }
            Component::Mosfet(m) => {
                let params = transistor_params(&parameters, &m.name)?;
                for part in m.small_signal_equivalent(params) {
                    add_component(&mut circuit, part);
                }
            }
            component => {
                if component.is_dc_source() {
                    dc_sources.push(component.name().to_string());
                }
                add_component(&mut circuit, component);
            }
        }
    }

    if op_point_log.is_some() {
        debug!("eliminating {} DC sources", dc_sources.len());
        circuit.eliminate_dc_sources(&dc_sources)?;
    }

    Ok(circuit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallsig_core::SourceValue;

    #[test]
    fn test_comments_and_directives_skipped() {
        let netlist = "\
* voltage divider
.op
; inline note
# another note
+ continuation ignored

V1 1 0 5
R1 1 2 1k
R2 2 0 1k
";
        let circuit = circuit_from_netlist(netlist, None).unwrap();
        assert_eq!(circuit.edge_count(), 3);
        assert_eq!(circuit.node_count(), 3);
    }

    #[test]
    fn test_without_log_dc_sources_are_kept() {
        let netlist = "V1 0 1 5\nR1 1 2 1k";
        let circuit = circuit_from_netlist(netlist, None).unwrap();

        assert!(circuit.edge("V1").is_some());
        assert!(circuit.has_node("1"));
        assert_eq!(circuit.edge_count(), 2);
    }

    #[test]
    fn test_with_log_dc_sources_are_eliminated() {
        let netlist = "V1 0 1 5\nR1 1 2 1k";
        let circuit = circuit_from_netlist(netlist, Some("no transistor tables here")).unwrap();

        assert!(circuit.edge("V1").is_none());
        assert!(!circuit.has_node("1"));
        assert!(circuit.node("0").unwrap().has_alias("1"));
        assert_eq!(circuit.edge_count(), 1);
        assert_eq!(circuit.edge("R1").unwrap().endpoints(), ("0", "2"));
    }

    #[test]
    fn test_symbolic_source_survives_reduction() {
        let netlist = "Vin in 0 SIN(0)\nR1 in out 1k\nR2 out 0 1k";
        let circuit = circuit_from_netlist(netlist, Some("log")).unwrap();

        match circuit.edge("Vin").unwrap().component() {
            Component::VoltageSource(v) => {
                assert_eq!(v.voltage, SourceValue::Symbolic("SIN(0)".to_string()));
            }
            _ => unreachable!(),
        }
        assert_eq!(circuit.edge_count(), 3);
    }

    #[test]
    fn test_transistor_requires_parameters() {
        let netlist = "Q1 2 3 0 0 NPN";
        let err = circuit_from_netlist(netlist, None).unwrap_err();
        assert!(matches!(
            err,
            Error::MissingSmallSignalParameters(name) if name == "Q1"
        ));
    }

    #[test]
    fn test_transistor_linearized_into_three_edges() {
        let netlist = "\
V1 1 0 5
R1 1 2 1k
Q1 2 3 4 0 NPN
R2 3 0 10k
R3 4 0 1k
";
        let log = "\
 --- Bipolar Transistors ---
Name:        Q1
Gm:       0.01
Rpi:      1000
Ro:       5000
";
        let circuit = circuit_from_netlist(netlist, Some(log)).unwrap();

        assert!(circuit.edge("Q1").is_none());
        assert!(circuit.edge("G_Q1").is_some());
        assert!(circuit.edge("R_PI_Q1").is_some());
        assert!(circuit.edge("R_O_Q1").is_some());

        assert_eq!(circuit.edge("G_Q1").unwrap().endpoints(), ("2", "4"));
        assert_eq!(circuit.edge("R_PI_Q1").unwrap().endpoints(), ("3", "4"));
    }

    #[test]
    fn test_parse_failure_aborts_construction() {
        let netlist = "V1 1 0 5\nZoop 1 2 3";
        assert!(circuit_from_netlist(netlist, None).is_err());
    }
}
