//! The typed component model.
//!
//! Every netlist element is one [`Component`] variant. Variants with an
//! ordered terminal pair expose the [`TwoTerminal`] capability; the two
//! transistor kinds do not, since they never enter the graph directly and
//! are replaced by their linear equivalents during construction.

use std::fmt;

use crate::error::{Error, Result};
use crate::passive::{Capacitor, Resistor};
use crate::sources::{CurrentSource, Vccs, Vcvs, VoltageSource};
use crate::transistor::{Bjt, Mosfet};
use crate::units::parse_literal;

/// Excitation value of a source.
///
/// Decided once at parse time: if the token matches the literal grammar the
/// source is `Numeric` (an ideal DC level, subject to elimination),
/// otherwise the token is kept verbatim as `Symbolic` (a time-varying or
/// abstract excitation, left untouched).
#[derive(Debug, Clone, PartialEq)]
pub enum SourceValue {
    Numeric(f64),
    Symbolic(String),
}

impl SourceValue {
    /// Classify a token by attempting the literal grammar.
    pub fn parse(token: &str) -> Self {
        match parse_literal(token) {
            Ok(value) => SourceValue::Numeric(value),
            Err(_) => SourceValue::Symbolic(token.to_string()),
        }
    }

    /// The numeric value, if there is one.
    pub fn as_numeric(&self) -> Option<f64> {
        match self {
            SourceValue::Numeric(value) => Some(*value),
            SourceValue::Symbolic(_) => None,
        }
    }

    /// Numeric values identify ideal DC excitation.
    pub fn is_numeric(&self) -> bool {
        matches!(self, SourceValue::Numeric(_))
    }
}

impl fmt::Display for SourceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceValue::Numeric(value) => write!(f, "{}", value),
            SourceValue::Symbolic(token) => f.write_str(token),
        }
    }
}

/// Capability of components with an ordered pair of terminal nodes.
pub trait TwoTerminal {
    /// Positive terminal node.
    fn pos_node(&self) -> &str;

    /// Negative terminal node.
    fn neg_node(&self) -> &str;

    /// Whether both terminals sit on the same node.
    fn is_shorted(&self) -> bool {
        self.pos_node() == self.neg_node()
    }
}

/// A named circuit element.
#[derive(Debug, Clone, PartialEq)]
pub enum Component {
    VoltageSource(VoltageSource),
    CurrentSource(CurrentSource),
    Vcvs(Vcvs),
    Vccs(Vccs),
    Resistor(Resistor),
    Capacitor(Capacitor),
    Bjt(Bjt),
    Mosfet(Mosfet),
}

impl Component {
    /// The element's name, unique within a circuit.
    pub fn name(&self) -> &str {
        match self {
            Component::VoltageSource(c) => &c.name,
            Component::CurrentSource(c) => &c.name,
            Component::Vcvs(c) => &c.name,
            Component::Vccs(c) => &c.name,
            Component::Resistor(c) => &c.name,
            Component::Capacitor(c) => &c.name,
            Component::Bjt(c) => &c.name,
            Component::Mosfet(c) => &c.name,
        }
    }

    /// The one-letter kind tag this component serializes under.
    pub fn kind_tag(&self) -> char {
        match self {
            Component::VoltageSource(_) => 'v',
            Component::CurrentSource(_) => 'i',
            Component::Vcvs(_) => 'e',
            Component::Vccs(_) => 'g',
            Component::Resistor(_) => 'r',
            Component::Capacitor(_) => 'c',
            Component::Bjt(_) => 'q',
            Component::Mosfet(_) => 'm',
        }
    }

    /// The terminal-pair capability, for every kind that has it.
    pub fn as_two_terminal(&self) -> Option<&dyn TwoTerminal> {
        match self {
            Component::VoltageSource(c) => Some(c),
            Component::CurrentSource(c) => Some(c),
            Component::Vcvs(c) => Some(c),
            Component::Vccs(c) => Some(c),
            Component::Resistor(c) => Some(c),
            Component::Capacitor(c) => Some(c),
            Component::Bjt(_) | Component::Mosfet(_) => None,
        }
    }

    /// True for independent sources with a numeric (DC) excitation value.
    pub fn is_dc_source(&self) -> bool {
        match self {
            Component::VoltageSource(c) => c.is_dc(),
            Component::CurrentSource(c) => c.is_dc(),
            _ => false,
        }
    }

    /// The element or excitation value, when it is numeric.
    pub fn numeric_value(&self) -> Option<f64> {
        match self {
            Component::VoltageSource(c) => c.voltage.as_numeric(),
            Component::CurrentSource(c) => c.current.as_numeric(),
            Component::Vcvs(c) => c.gain.as_numeric(),
            Component::Vccs(c) => c.gain.as_numeric(),
            Component::Resistor(c) => Some(c.resistance),
            Component::Capacitor(c) => Some(c.capacitance),
            Component::Bjt(_) | Component::Mosfet(_) => None,
        }
    }

    /// Serialize back to a netlist entry that reparses field-for-field.
    pub fn to_netlist_entry(&self) -> String {
        match self {
            Component::VoltageSource(c) => c.to_netlist_entry(),
            Component::CurrentSource(c) => c.to_netlist_entry(),
            Component::Vcvs(c) => c.to_netlist_entry(),
            Component::Vccs(c) => c.to_netlist_entry(),
            Component::Resistor(c) => c.to_netlist_entry(),
            Component::Capacitor(c) => c.to_netlist_entry(),
            Component::Bjt(c) => c.to_netlist_entry(),
            Component::Mosfet(c) => c.to_netlist_entry(),
        }
    }

    /// Rewrite every terminal or control reference equal to `from`.
    ///
    /// Control terminals of controlled sources are included; they may name a
    /// node none of this component's own edges touch.
    pub(crate) fn rewrite_node(&mut self, from: &str, to: &str) {
        fn swap(field: &mut String, from: &str, to: &str) {
            if field.as_str() == from {
                to.clone_into(field);
            }
        }

        match self {
            Component::VoltageSource(c) => {
                swap(&mut c.node_pos, from, to);
                swap(&mut c.node_neg, from, to);
            }
            Component::CurrentSource(c) => {
                swap(&mut c.node_pos, from, to);
                swap(&mut c.node_neg, from, to);
            }
            Component::Vcvs(c) => {
                swap(&mut c.node_pos, from, to);
                swap(&mut c.node_neg, from, to);
                swap(&mut c.ctrl_pos, from, to);
                swap(&mut c.ctrl_neg, from, to);
            }
            Component::Vccs(c) => {
                swap(&mut c.node_pos, from, to);
                swap(&mut c.node_neg, from, to);
                swap(&mut c.ctrl_pos, from, to);
                swap(&mut c.ctrl_neg, from, to);
            }
            Component::Resistor(c) => {
                swap(&mut c.node_pos, from, to);
                swap(&mut c.node_neg, from, to);
            }
            Component::Capacitor(c) => {
                swap(&mut c.node_pos, from, to);
                swap(&mut c.node_neg, from, to);
            }
            Component::Bjt(c) => {
                swap(&mut c.collector, from, to);
                swap(&mut c.base, from, to);
                swap(&mut c.emitter, from, to);
                swap(&mut c.substrate, from, to);
            }
            Component::Mosfet(c) => {
                swap(&mut c.drain, from, to);
                swap(&mut c.gate, from, to);
                swap(&mut c.source, from, to);
                swap(&mut c.substrate, from, to);
            }
        }
    }
}

/// Split netlist fields (component name first) into an exact-length array.
pub(crate) fn expect_fields<const N: usize>(fields: &[&str]) -> Result<[String; N]> {
    if fields.len() != N {
        return Err(Error::MalformedEntry {
            name: fields.first().copied().unwrap_or_default().to_string(),
            expected: N - 1,
            found: fields.len().saturating_sub(1),
        });
    }
    Ok(std::array::from_fn(|i| fields[i].to_string()))
}
