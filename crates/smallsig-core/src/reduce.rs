//! DC-source elimination.
//!
//! Before small-signal analysis, ideal DC excitation must be turned off: a
//! constant voltage source becomes a short (its terminals merge into one
//! node) and a constant current source becomes an open circuit (its edge is
//! removed). Contraction records the merged identifier as an alias of the
//! surviving node and rewrites every terminal and control reference in the
//! circuit, then relocates the remaining incident edges.

use log::{debug, warn};

use crate::circuit::Circuit;
use crate::error::{Error, Result};
use crate::node::GROUND;

impl Circuit {
    /// Eliminate the named DC sources, in order.
    ///
    /// Worklist names whose edge no longer exists are skipped, so the pass
    /// is idempotent with respect to already-eliminated sources. After the
    /// worklist drains, nodes left without any incident edge are deleted.
    pub fn eliminate_dc_sources(&mut self, sources: &[String]) -> Result<()> {
        for name in sources {
            let kind = self.edges.get(name).map(|edge| edge.component.kind_tag());
            match kind {
                None => {
                    debug!("DC source {name} already eliminated, skipping");
                }
                Some('v') => self.contract_voltage_source(name)?,
                Some('i') => {
                    self.remove_edge(name);
                    debug!("removed DC current source {name}");
                }
                Some(_) => {
                    warn!("worklist entry {name} is not an independent source, skipping");
                }
            }
        }

        self.prune_isolated_nodes();
        Ok(())
    }

    /// Short one DC voltage source by merging its terminals.
    fn contract_voltage_source(&mut self, name: &str) -> Result<()> {
        let (pos, neg) = {
            let edge = self.edges.get(name).ok_or_else(|| {
                Error::InconsistentGraph(format!("voltage source {name} has no edge"))
            })?;
            (edge.a.clone(), edge.b.clone())
        };

        if pos == neg {
            warn!("voltage source {name} is already shorted");
            self.remove_edge(name);
            return Ok(());
        }

        // Ground survives; otherwise the lexicographically smaller name.
        let (keep, merge) = if neg == GROUND {
            (neg, pos)
        } else if pos == GROUND {
            (pos, neg)
        } else if pos < neg {
            (pos, neg)
        } else {
            (neg, pos)
        };

        // The source's own edge goes first so it is never relocated.
        self.remove_edge(name);

        // The merged identifier, and anything previously merged into it,
        // becomes an alias of the survivor.
        let absorbed: Vec<String> = self
            .nodes
            .get(&merge)
            .map(|node| node.aliases.iter().cloned().collect())
            .unwrap_or_default();
        let keep_node = self.nodes.entry(keep.clone()).or_default();
        keep_node.aliases.insert(merge.clone());
        keep_node.aliases.extend(absorbed);

        // Every component can reference the merged node, including control
        // terminals of sources whose own edge touches unrelated nodes, so
        // the rewrite scans all edges, not just the merged node's.
        for edge in self.edges.values_mut() {
            edge.component.rewrite_node(&merge, &keep);
        }

        // Relocate the remaining incident edges onto the survivor.
        let incident: Vec<String> = self
            .nodes
            .get(&merge)
            .map(|node| node.edges.iter().cloned().collect())
            .unwrap_or_default();
        for key in incident {
            let edge = self.remove_edge(&key).ok_or_else(|| {
                Error::InconsistentGraph(format!(
                    "edge {key} missing while relocating node {merge}"
                ))
            })?;
            let a = if edge.a == merge { keep.clone() } else { edge.a };
            let b = if edge.b == merge { keep.clone() } else { edge.b };
            if a == b {
                warn!("component {key} shorted by contraction of {merge}, dropping");
                continue;
            }
            self.add_edge(a, b, edge.component);
        }

        if self
            .nodes
            .get(&merge)
            .is_some_and(|node| node.edges.is_empty())
        {
            self.nodes.shift_remove(&merge);
        }

        Ok(())
    }

    /// Drop nodes that no longer touch any edge.
    fn prune_isolated_nodes(&mut self) {
        let isolated: Vec<String> = self
            .nodes
            .iter()
            .filter(|(_, node)| node.edges.is_empty())
            .map(|(id, _)| id.clone())
            .collect();
        for id in isolated {
            warn!("removing isolated node {id}");
            self.nodes.shift_remove(&id);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::circuit::Circuit;
    use crate::component::{Component, SourceValue, TwoTerminal};
    use crate::passive::Resistor;
    use crate::sources::{CurrentSource, Vccs, VoltageSource};

    fn voltage_source(name: &str, pos: &str, neg: &str, volts: f64) -> Component {
        Component::VoltageSource(VoltageSource::new(
            name,
            pos,
            neg,
            SourceValue::Numeric(volts),
        ))
    }

    fn resistor(name: &str, pos: &str, neg: &str, ohms: f64) -> Component {
        Component::Resistor(Resistor::new(name, pos, neg, ohms))
    }

    fn add(circuit: &mut Circuit, component: Component) {
        let tt = component.as_two_terminal().unwrap();
        let (a, b) = (tt.pos_node().to_string(), tt.neg_node().to_string());
        circuit.add_edge(a, b, component);
    }

    #[test]
    fn test_contract_into_ground() {
        let mut circuit = Circuit::new();
        add(&mut circuit, voltage_source("V1", "0", "1", 5.0));
        add(&mut circuit, resistor("R1", "1", "2", 1e3));

        circuit
            .eliminate_dc_sources(&["V1".to_string()])
            .unwrap();

        assert!(!circuit.has_node("1"));
        assert!(circuit.node("0").unwrap().has_alias("1"));
        assert_eq!(circuit.edge_count(), 1);
        assert_eq!(circuit.edge("R1").unwrap().endpoints(), ("0", "2"));
    }

    #[test]
    fn test_contract_prefers_smaller_name_without_ground() {
        let mut circuit = Circuit::new();
        add(&mut circuit, voltage_source("V1", "5", "3", 1.0));
        add(&mut circuit, resistor("R1", "5", "7", 1e3));
        add(&mut circuit, resistor("R2", "3", "7", 1e3));

        circuit
            .eliminate_dc_sources(&["V1".to_string()])
            .unwrap();

        assert!(circuit.has_node("3"));
        assert!(!circuit.has_node("5"));
        assert!(circuit.node("3").unwrap().has_alias("5"));
        assert_eq!(circuit.edge("R1").unwrap().endpoints(), ("3", "7"));
    }

    #[test]
    fn test_current_source_is_opened() {
        let mut circuit = Circuit::new();
        add(
            &mut circuit,
            Component::CurrentSource(CurrentSource::new("I1", "1", "2", SourceValue::Numeric(1e-3))),
        );
        add(&mut circuit, resistor("R1", "2", "0", 1e3));

        circuit
            .eliminate_dc_sources(&["I1".to_string()])
            .unwrap();

        assert!(circuit.edge("I1").is_none());
        // Node 1 lost its only edge and was pruned.
        assert!(!circuit.has_node("1"));
        assert!(circuit.has_node("2"));
    }

    #[test]
    fn test_control_reference_rewritten_without_incident_edge() {
        let mut circuit = Circuit::new();
        add(&mut circuit, voltage_source("V1", "0", "2", 5.0));
        add(&mut circuit, resistor("R1", "2", "3", 1e3));
        // G1's own edge touches 4 and 5 only; its control pair watches 2.
        add(
            &mut circuit,
            Component::Vccs(Vccs::new("G1", "4", "5", "2", "3", SourceValue::Numeric(0.01))),
        );
        add(&mut circuit, resistor("R2", "4", "0", 1e3));
        add(&mut circuit, resistor("R3", "5", "0", 1e3));

        circuit
            .eliminate_dc_sources(&["V1".to_string()])
            .unwrap();

        let edge = circuit.edge("G1").unwrap();
        match edge.component() {
            Component::Vccs(g) => {
                assert_eq!(g.ctrl_pos, "0");
                assert_eq!(g.ctrl_neg, "3");
                assert_eq!(g.node_pos, "4");
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_contraction_drops_new_self_loops() {
        let mut circuit = Circuit::new();
        add(&mut circuit, voltage_source("V1", "1", "0", 5.0));
        // R1 spans the same pair and collapses when the pair merges.
        add(&mut circuit, resistor("R1", "1", "0", 1e3));
        add(&mut circuit, resistor("R2", "1", "2", 1e3));

        circuit
            .eliminate_dc_sources(&["V1".to_string()])
            .unwrap();

        assert!(circuit.edge("R1").is_none());
        assert_eq!(circuit.edge("R2").unwrap().endpoints(), ("0", "2"));
    }

    #[test]
    fn test_shorted_source_is_removed_with_warning_only() {
        let mut circuit = Circuit::new();
        add(&mut circuit, voltage_source("V1", "1", "1", 5.0));
        add(&mut circuit, resistor("R1", "1", "0", 1e3));

        circuit
            .eliminate_dc_sources(&["V1".to_string()])
            .unwrap();

        assert!(circuit.edge("V1").is_none());
        // No contraction happened.
        assert!(circuit.has_node("1"));
        assert_eq!(circuit.edge("R1").unwrap().endpoints(), ("1", "0"));
    }

    #[test]
    fn test_missing_worklist_entry_is_skipped() {
        let mut circuit = Circuit::new();
        add(&mut circuit, resistor("R1", "1", "0", 1e3));

        circuit
            .eliminate_dc_sources(&["V9".to_string()])
            .unwrap();
        assert_eq!(circuit.edge_count(), 1);
    }

    #[test]
    fn test_chained_contraction_folds_aliases() {
        let mut circuit = Circuit::new();
        add(&mut circuit, voltage_source("V1", "b", "c", 1.0));
        add(&mut circuit, voltage_source("V2", "a", "b", 1.0));
        add(&mut circuit, resistor("R1", "c", "d", 1e3));
        add(&mut circuit, resistor("R2", "a", "d", 1e3));

        circuit
            .eliminate_dc_sources(&["V1".to_string(), "V2".to_string()])
            .unwrap();

        // b merged into a... then a absorbed b's aliases when a merged too.
        let survivor = circuit.node("a").unwrap();
        assert!(survivor.has_alias("b"));
        assert!(survivor.has_alias("c"));
        assert!(!circuit.has_node("b"));
        assert!(!circuit.has_node("c"));
    }
}
