//! Independent and voltage-controlled source elements.

use crate::component::{SourceValue, TwoTerminal, expect_fields};
use crate::error::Result;

/// An independent voltage source.
#[derive(Debug, Clone, PartialEq)]
pub struct VoltageSource {
    /// Device name (e.g. "V1").
    pub name: String,
    /// Positive terminal node.
    pub node_pos: String,
    /// Negative terminal node.
    pub node_neg: String,
    /// Excitation value. Numeric values are DC levels.
    pub voltage: SourceValue,
}

impl VoltageSource {
    /// Create a new voltage source.
    pub fn new(
        name: impl Into<String>,
        node_pos: impl Into<String>,
        node_neg: impl Into<String>,
        voltage: SourceValue,
    ) -> Self {
        Self {
            name: name.into(),
            node_pos: node_pos.into(),
            node_neg: node_neg.into(),
            voltage,
        }
    }

    /// Whether this is an ideal DC source.
    pub fn is_dc(&self) -> bool {
        self.voltage.is_numeric()
    }

    /// Parse `V<name> <node+> <node-> <value>` fields, name included.
    pub fn from_fields(fields: &[&str]) -> Result<Self> {
        let [name, node_pos, node_neg, value] = expect_fields::<4>(fields)?;
        Ok(Self::new(
            name,
            node_pos,
            node_neg,
            SourceValue::parse(&value),
        ))
    }

    /// Serialize back to a netlist entry.
    pub fn to_netlist_entry(&self) -> String {
        format!(
            "{} {} {} {}",
            self.name, self.node_pos, self.node_neg, self.voltage
        )
    }
}

impl TwoTerminal for VoltageSource {
    fn pos_node(&self) -> &str {
        &self.node_pos
    }

    fn neg_node(&self) -> &str {
        &self.node_neg
    }
}

/// An independent current source.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentSource {
    /// Device name (e.g. "I1").
    pub name: String,
    /// Positive terminal node.
    pub node_pos: String,
    /// Negative terminal node.
    pub node_neg: String,
    /// Excitation value. Numeric values are DC levels.
    pub current: SourceValue,
}

impl CurrentSource {
    /// Create a new current source.
    pub fn new(
        name: impl Into<String>,
        node_pos: impl Into<String>,
        node_neg: impl Into<String>,
        current: SourceValue,
    ) -> Self {
        Self {
            name: name.into(),
            node_pos: node_pos.into(),
            node_neg: node_neg.into(),
            current,
        }
    }

    /// Whether this is an ideal DC source.
    pub fn is_dc(&self) -> bool {
        self.current.is_numeric()
    }

    /// Parse `I<name> <node+> <node-> <value>` fields, name included.
    pub fn from_fields(fields: &[&str]) -> Result<Self> {
        let [name, node_pos, node_neg, value] = expect_fields::<4>(fields)?;
        Ok(Self::new(
            name,
            node_pos,
            node_neg,
            SourceValue::parse(&value),
        ))
    }

    /// Serialize back to a netlist entry.
    pub fn to_netlist_entry(&self) -> String {
        format!(
            "{} {} {} {}",
            self.name, self.node_pos, self.node_neg, self.current
        )
    }
}

impl TwoTerminal for CurrentSource {
    fn pos_node(&self) -> &str {
        &self.node_pos
    }

    fn neg_node(&self) -> &str {
        &self.node_neg
    }
}

/// A voltage-controlled voltage source.
///
/// The control terminals are distinct from the output terminals and may
/// reference nodes no edge of this source touches.
#[derive(Debug, Clone, PartialEq)]
pub struct Vcvs {
    /// Device name (e.g. "E1").
    pub name: String,
    /// Positive output terminal node.
    pub node_pos: String,
    /// Negative output terminal node.
    pub node_neg: String,
    /// Positive control terminal node.
    pub ctrl_pos: String,
    /// Negative control terminal node.
    pub ctrl_neg: String,
    /// Voltage gain.
    pub gain: SourceValue,
}

impl Vcvs {
    /// Create a new voltage-controlled voltage source.
    pub fn new(
        name: impl Into<String>,
        node_pos: impl Into<String>,
        node_neg: impl Into<String>,
        ctrl_pos: impl Into<String>,
        ctrl_neg: impl Into<String>,
        gain: SourceValue,
    ) -> Self {
        Self {
            name: name.into(),
            node_pos: node_pos.into(),
            node_neg: node_neg.into(),
            ctrl_pos: ctrl_pos.into(),
            ctrl_neg: ctrl_neg.into(),
            gain,
        }
    }

    /// Parse `E<name> <node+> <node-> <ctrl+> <ctrl-> <gain>` fields.
    pub fn from_fields(fields: &[&str]) -> Result<Self> {
        let [name, node_pos, node_neg, ctrl_pos, ctrl_neg, gain] = expect_fields::<6>(fields)?;
        Ok(Self::new(
            name,
            node_pos,
            node_neg,
            ctrl_pos,
            ctrl_neg,
            SourceValue::parse(&gain),
        ))
    }

    /// Serialize back to a netlist entry.
    pub fn to_netlist_entry(&self) -> String {
        format!(
            "{} {} {} {} {} {}",
            self.name, self.node_pos, self.node_neg, self.ctrl_pos, self.ctrl_neg, self.gain
        )
    }
}

impl TwoTerminal for Vcvs {
    fn pos_node(&self) -> &str {
        &self.node_pos
    }

    fn neg_node(&self) -> &str {
        &self.node_neg
    }
}

/// A voltage-controlled current source.
///
/// Transistor linearization emits these, with the transconductance as gain.
#[derive(Debug, Clone, PartialEq)]
pub struct Vccs {
    /// Device name (e.g. "G1").
    pub name: String,
    /// Positive output terminal node.
    pub node_pos: String,
    /// Negative output terminal node.
    pub node_neg: String,
    /// Positive control terminal node.
    pub ctrl_pos: String,
    /// Negative control terminal node.
    pub ctrl_neg: String,
    /// Transconductance gain.
    pub gain: SourceValue,
}

impl Vccs {
    /// Create a new voltage-controlled current source.
    pub fn new(
        name: impl Into<String>,
        node_pos: impl Into<String>,
        node_neg: impl Into<String>,
        ctrl_pos: impl Into<String>,
        ctrl_neg: impl Into<String>,
        gain: SourceValue,
    ) -> Self {
        Self {
            name: name.into(),
            node_pos: node_pos.into(),
            node_neg: node_neg.into(),
            ctrl_pos: ctrl_pos.into(),
            ctrl_neg: ctrl_neg.into(),
            gain,
        }
    }

    /// Parse `G<name> <node+> <node-> <ctrl+> <ctrl-> <gain>` fields.
    pub fn from_fields(fields: &[&str]) -> Result<Self> {
        let [name, node_pos, node_neg, ctrl_pos, ctrl_neg, gain] = expect_fields::<6>(fields)?;
        Ok(Self::new(
            name,
            node_pos,
            node_neg,
            ctrl_pos,
            ctrl_neg,
            SourceValue::parse(&gain),
        ))
    }

    /// Serialize back to a netlist entry.
    pub fn to_netlist_entry(&self) -> String {
        format!(
            "{} {} {} {} {} {}",
            self.name, self.node_pos, self.node_neg, self.ctrl_pos, self.ctrl_neg, self.gain
        )
    }
}

impl TwoTerminal for Vccs {
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

    #[test]
    fn test_numeric_source_is_dc() {
        let v = VoltageSource::from_fields(&["V1", "1", "0", "5"]).unwrap();
        assert!(v.is_dc());
        assert_eq!(v.voltage, SourceValue::Numeric(5.0));
    }

    #[test]
    fn test_symbolic_source_is_not_dc() {
        let v = VoltageSource::from_fields(&["Vin", "in", "0", "vin"]).unwrap();
        assert!(!v.is_dc());
        assert_eq!(v.to_netlist_entry(), "Vin in 0 vin");
    }

    #[test]
    fn test_current_source_round_trip() {
        let i = CurrentSource::from_fields(&["I1", "1", "2", "1m"]).unwrap();
        assert_eq!(i.current, SourceValue::Numeric(1e-3));

        let entry = i.to_netlist_entry();
        let reparsed =
            CurrentSource::from_fields(&entry.split_whitespace().collect::<Vec<_>>()).unwrap();
        assert_eq!(reparsed, i);
    }

    #[test]
    fn test_controlled_source_round_trip() {
        let e = Vcvs::from_fields(&["E1", "3", "0", "1", "2", "10"]).unwrap();
        assert_eq!(e.gain, SourceValue::Numeric(10.0));
        assert_eq!(e.ctrl_pos, "1");

        let entry = e.to_netlist_entry();
        let reparsed = Vcvs::from_fields(&entry.split_whitespace().collect::<Vec<_>>()).unwrap();
        assert_eq!(reparsed, e);

        let g = Vccs::from_fields(&["G1", "3", "0", "1", "2", "0.01"]).unwrap();
        let entry = g.to_netlist_entry();
        let reparsed = Vccs::from_fields(&entry.split_whitespace().collect::<Vec<_>>()).unwrap();
        assert_eq!(reparsed, g);
    }
}
