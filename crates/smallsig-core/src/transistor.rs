//! Transistor entries and their hybrid-pi linear equivalents.
//!
//! Transistors never become graph edges themselves. During construction each
//! one is replaced by three linear parts sized from its bias point: an input
//! resistance, a transconductance (a voltage-controlled current source), and
//! an output resistance. The generated names embed the device name so the
//! replacement is reproducible and attributable.

use crate::component::{Component, SourceValue, expect_fields};
use crate::error::Result;
use crate::passive::Resistor;
use crate::sources::Vccs;

/// Stand-in resistance for a terminal that draws no DC current. Finite so
/// downstream numeric analysis stays well-posed.
pub const OPEN_CIRCUIT_RESISTANCE: f64 = 1e25;

/// Small-signal parameters of one transistor at its bias point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HybridPiParams {
    /// Transconductance in amperes per volt.
    pub gm: f64,
    /// Resistance between the control terminals, in ohms.
    pub rpi: f64,
    /// Output resistance, in ohms.
    pub ro: f64,
}

/// A bipolar junction transistor entry.
///
/// `Q<name> <collector> <base> <emitter> <substrate> <model>`
#[derive(Debug, Clone, PartialEq)]
pub struct Bjt {
    /// Device name (e.g. "Q1").
    pub name: String,
    /// Collector node.
    pub collector: String,
    /// Base node.
    pub base: String,
    /// Emitter node.
    pub emitter: String,
    /// Substrate node.
    pub substrate: String,
    /// Model name.
    pub model: String,
}

impl Bjt {
    /// Create a new bipolar transistor entry.
    pub fn new(
        name: impl Into<String>,
        collector: impl Into<String>,
        base: impl Into<String>,
        emitter: impl Into<String>,
        substrate: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            collector: collector.into(),
            base: base.into(),
            emitter: emitter.into(),
            substrate: substrate.into(),
            model: model.into(),
        }
    }

    /// Parse `Q<name> <c> <b> <e> <substrate> <model>` fields, name included.
    pub fn from_fields(fields: &[&str]) -> Result<Self> {
        let [name, collector, base, emitter, substrate, model] = expect_fields::<6>(fields)?;
        Ok(Self::new(name, collector, base, emitter, substrate, model))
    }

    /// Serialize back to a netlist entry.
    pub fn to_netlist_entry(&self) -> String {
        format!(
            "{} {} {} {} {} {}",
            self.name, self.collector, self.base, self.emitter, self.substrate, self.model
        )
    }

    /// The hybrid-pi equivalent of this transistor.
    ///
    /// Returns the transconductance `G_<name>` between collector and emitter
    /// controlled by (base, emitter), the input resistance `R_PI_<name>`
    /// between base and emitter, and the output resistance `R_O_<name>`
    /// between collector and emitter.
    pub fn small_signal_equivalent(&self, params: HybridPiParams) -> [Component; 3] {
        let g = Vccs::new(
            format!("G_{}", self.name),
            self.collector.clone(),
            self.emitter.clone(),
            self.base.clone(),
            self.emitter.clone(),
            SourceValue::Numeric(params.gm),
        );
        let r_pi = Resistor::new(
            format!("R_PI_{}", self.name),
            self.base.clone(),
            self.emitter.clone(),
            params.rpi,
        );
        let r_o = Resistor::new(
            format!("R_O_{}", self.name),
            self.collector.clone(),
            self.emitter.clone(),
            params.ro,
        );
        [
            Component::Vccs(g),
            Component::Resistor(r_pi),
            Component::Resistor(r_o),
        ]
    }
}

/// Terminal-order convention for MOSFET netlist fields.
///
/// The first three node fields of an `M` entry read as drain, gate, source
/// by default. The reversed convention is kept selectable because netlists
/// from other exporters have been seen with the opposite order; parse and
/// serialize honor the same choice, so entries round-trip under either.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MosfetFieldOrder {
    #[default]
    DrainGateSource,
    SourceGateDrain,
}

/// A MOSFET entry.
///
/// `M<name> <drain> <gate> <source> <substrate> <model>` under the default
/// field order.
#[derive(Debug, Clone, PartialEq)]
pub struct Mosfet {
    /// Device name (e.g. "M1").
    pub name: String,
    /// Drain node.
    pub drain: String,
    /// Gate node.
    pub gate: String,
    /// Source node.
    pub source: String,
    /// Substrate node.
    pub substrate: String,
    /// Model name.
    pub model: String,
}

impl Mosfet {
    /// Create a new MOSFET entry.
    pub fn new(
        name: impl Into<String>,
        drain: impl Into<String>,
        gate: impl Into<String>,
        source: impl Into<String>,
        substrate: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            drain: drain.into(),
            gate: gate.into(),
            source: source.into(),
            substrate: substrate.into(),
            model: model.into(),
        }
    }

    /// Parse fields under the default terminal order.
    pub fn from_fields(fields: &[&str]) -> Result<Self> {
        Self::from_fields_with_order(fields, MosfetFieldOrder::default())
    }

    /// Parse `M<name> <t1> <t2> <t3> <substrate> <model>` fields, assigning
    /// the outer terminals according to `order`.
    pub fn from_fields_with_order(fields: &[&str], order: MosfetFieldOrder) -> Result<Self> {
        let [name, t1, gate, t3, substrate, model] = expect_fields::<6>(fields)?;
        let (drain, source) = match order {
            MosfetFieldOrder::DrainGateSource => (t1, t3),
            MosfetFieldOrder::SourceGateDrain => (t3, t1),
        };
        Ok(Self::new(name, drain, gate, source, substrate, model))
    }

    /// Serialize back to a netlist entry under the default terminal order.
    pub fn to_netlist_entry(&self) -> String {
        self.entry_with_order(MosfetFieldOrder::default())
    }

    /// Serialize with the outer terminals written according to `order`.
    pub fn entry_with_order(&self, order: MosfetFieldOrder) -> String {
        let (t1, t3) = match order {
            MosfetFieldOrder::DrainGateSource => (&self.drain, &self.source),
            MosfetFieldOrder::SourceGateDrain => (&self.source, &self.drain),
        };
        format!(
            "{} {} {} {} {} {}",
            self.name, t1, self.gate, t3, self.substrate, self.model
        )
    }

    /// The hybrid-pi equivalent of this transistor.
    ///
    /// The gate draws no DC current, so the input resistance is the fixed
    /// [`OPEN_CIRCUIT_RESISTANCE`] between gate and source; the
    /// transconductance `G_<name>` sits between drain and source controlled
    /// by (gate, source), and `R_O_<name>` between drain and source.
    pub fn small_signal_equivalent(&self, params: HybridPiParams) -> [Component; 3] {
        let g = Vccs::new(
            format!("G_{}", self.name),
            self.drain.clone(),
            self.source.clone(),
            self.gate.clone(),
            self.source.clone(),
            SourceValue::Numeric(params.gm),
        );
        let r_pi = Resistor::new(
            format!("R_PI_{}", self.name),
            self.gate.clone(),
            self.source.clone(),
            OPEN_CIRCUIT_RESISTANCE,
        );
        let r_o = Resistor::new(
            format!("R_O_{}", self.name),
            self.drain.clone(),
            self.source.clone(),
            params.ro,
        );
        [
            Component::Vccs(g),
            Component::Resistor(r_pi),
            Component::Resistor(r_o),
        ]
    }
}
