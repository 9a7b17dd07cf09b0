//! Passive two-terminal elements: Resistor, Capacitor.

use crate::component::{TwoTerminal, expect_fields};
use crate::error::Result;
use crate::units::parse_literal;

/// A resistor element.
#[derive(Debug, Clone, PartialEq)]
pub struct Resistor {
    /// Device name (e.g. "R1").
    pub name: String,
    /// Positive terminal node.
    pub node_pos: String,
    /// Negative terminal node.
    pub node_neg: String,
    /// Resistance in ohms.
    pub resistance: f64,
}

impl Resistor {
    /// Create a new resistor.
    pub fn new(
        name: impl Into<String>,
        node_pos: impl Into<String>,
        node_neg: impl Into<String>,
        resistance: f64,
    ) -> Self {
        Self {
            name: name.into(),
            node_pos: node_pos.into(),
            node_neg: node_neg.into(),
            resistance,
        }
    }

    /// Parse `R<name> <node+> <node-> <value>` fields, name included.
    pub fn from_fields(fields: &[&str]) -> Result<Self> {
        let [name, node_pos, node_neg, value] = expect_fields::<4>(fields)?;
        Ok(Self::new(name, node_pos, node_neg, parse_literal(&value)?))
    }

    /// Serialize back to a netlist entry.
    pub fn to_netlist_entry(&self) -> String {
        format!(
            "{} {} {} {}",
            self.name, self.node_pos, self.node_neg, self.resistance
        )
    }
}

impl TwoTerminal for Resistor {
    fn pos_node(&self) -> &str {
        &self.node_pos
    }

    fn neg_node(&self) -> &str {
        &self.node_neg
    }
}

/// A capacitor element.
#[derive(Debug, Clone, PartialEq)]
pub struct Capacitor {
    /// Device name (e.g. "C1").
    pub name: String,
    /// Positive terminal node.
    pub node_pos: String,
    /// Negative terminal node.
    pub node_neg: String,
    /// Capacitance in farads.
    pub capacitance: f64,
}

impl Capacitor {
    /// Create a new capacitor.
    pub fn new(
        name: impl Into<String>,
        node_pos: impl Into<String>,
        node_neg: impl Into<String>,
        capacitance: f64,
    ) -> Self {
        Self {
            name: name.into(),
            node_pos: node_pos.into(),
            node_neg: node_neg.into(),
            capacitance,
        }
    }

    /// Parse `C<name> <node+> <node-> <value>` fields, name included.
    pub fn from_fields(fields: &[&str]) -> Result<Self> {
        let [name, node_pos, node_neg, value] = expect_fields::<4>(fields)?;
        Ok(Self::new(name, node_pos, node_neg, parse_literal(&value)?))
    }

    /// Serialize back to a netlist entry.
    pub fn to_netlist_entry(&self) -> String {
        format!(
            "{} {} {} {}",
            self.name, self.node_pos, self.node_neg, self.capacitance
        )
    }
}

impl TwoTerminal for Capacitor {
    fn pos_node(&self) -> &str {
        &self.node_pos
    }

    fn neg_node(&self) -> &str {
        &self.node_neg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_resistor_round_trip() {
        let r = Resistor::from_fields(&["R1", "1", "2", "1k"]).unwrap();
        assert_eq!(r.resistance, 1000.0);
        assert_eq!(r.to_netlist_entry(), "R1 1 2 1000");

        let reparsed =
            Resistor::from_fields(&r.to_netlist_entry().split_whitespace().collect::<Vec<_>>())
                .unwrap();
        assert_eq!(reparsed, r);
    }

    #[test]
    fn test_capacitor_round_trip() {
        let c = Capacitor::from_fields(&["Cload", "out", "0", "2.2u"]).unwrap();
        assert_eq!(c.capacitance, 2.2e-6);

        let entry = c.to_netlist_entry();
        let reparsed =
            Capacitor::from_fields(&entry.split_whitespace().collect::<Vec<_>>()).unwrap();
        assert_eq!(reparsed, c);
    }

    #[test]
    fn test_wrong_field_count() {
        let err = Resistor::from_fields(&["R1", "1", "2"]).unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedEntry { expected: 3, found: 2, .. }
        ));
    }

    #[test]
    fn test_bad_value_is_fatal() {
        assert!(Resistor::from_fields(&["R1", "1", "2", "abc"]).is_err());
    }
}
