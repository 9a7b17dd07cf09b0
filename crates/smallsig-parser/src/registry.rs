//! Kind-tag registry and netlist entry parsing.
//!
//! The registry is a static table from the one-letter kind tag (the
//! lowercased first character of a component's name) to that kind's parse
//! and serialize functions, built once at startup. Adding a component kind
//! means adding one entry here; nothing registers itself at load time.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use smallsig_core::component::Component;
use smallsig_core::passive::{Capacitor, Resistor};
use smallsig_core::sources::{CurrentSource, Vccs, Vcvs, VoltageSource};
use smallsig_core::transistor::{Bjt, Mosfet};

use crate::error::{Error, Result};

/// Parse and serialize functions for one component kind.
pub struct KindEntry {
    /// Lowercase kind tag.
    pub tag: char,
    /// Parse whitespace-split fields (component name first).
    pub parse: fn(&[&str]) -> smallsig_core::Result<Component>,
    /// Serialize a component of this kind back to a netlist entry.
    pub serialize: fn(&Component) -> String,
}

static REGISTRY: Lazy<HashMap<char, KindEntry>> = Lazy::new(|| {
    let entries = [
        KindEntry {
            tag: 'v',
            parse: |fields| Ok(Component::VoltageSource(VoltageSource::from_fields(fields)?)),
            serialize: |c| c.to_netlist_entry(),
        },
        KindEntry {
            tag: 'i',
            parse: |fields| Ok(Component::CurrentSource(CurrentSource::from_fields(fields)?)),
            serialize: |c| c.to_netlist_entry(),
        },
        KindEntry {
            tag: 'e',
            parse: |fields| Ok(Component::Vcvs(Vcvs::from_fields(fields)?)),
            serialize: |c| c.to_netlist_entry(),
        },
        KindEntry {
            tag: 'g',
            parse: |fields| Ok(Component::Vccs(Vccs::from_fields(fields)?)),
            serialize: |c| c.to_netlist_entry(),
        },
        KindEntry {
            tag: 'r',
            parse: |fields| Ok(Component::Resistor(Resistor::from_fields(fields)?)),
            serialize: |c| c.to_netlist_entry(),
        },
        KindEntry {
            tag: 'c',
            parse: |fields| Ok(Component::Capacitor(Capacitor::from_fields(fields)?)),
            serialize: |c| c.to_netlist_entry(),
        },
        KindEntry {
            tag: 'q',
            parse: |fields| Ok(Component::Bjt(Bjt::from_fields(fields)?)),
            serialize: |c| c.to_netlist_entry(),
        },
        KindEntry {
            tag: 'm',
            parse: |fields| Ok(Component::Mosfet(Mosfet::from_fields(fields)?)),
            serialize: |c| c.to_netlist_entry(),
        },
    ];

    entries.into_iter().map(|entry| (entry.tag, entry)).collect()
});

/// Look up the registry entry for a kind tag, case-insensitively.
pub fn kind_entry(tag: char) -> Option<&'static KindEntry> {
    REGISTRY.get(&tag.to_ascii_lowercase())
}

/// Parse one netlist entry line into a component.
///
/// The line splits on whitespace; the kind is dispatched on the lowercased
/// first character of the first token. Unregistered tags are
/// [`smallsig_core::Error::UnknownComponentKind`]; a field count other than
/// the kind's exact requirement is
/// [`smallsig_core::Error::MalformedEntry`].
pub fn parse_entry(line: &str) -> Result<Component> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let Some(first) = fields.first() else {
        return Err(smallsig_core::Error::MalformedEntry {
            name: String::new(),
            expected: 1,
            found: 0,
        }
        .into());
    };

    // Names are never empty here: split_whitespace yields no empty tokens.
    let tag = first
        .chars()
        .next()
        .map(|c| c.to_ascii_lowercase())
        .unwrap_or(' ');
    let entry =
        kind_entry(tag).ok_or(Error::Core(smallsig_core::Error::UnknownComponentKind(tag)))?;

    (entry.parse)(&fields).map_err(Error::from)
}

/// Serialize a component through its registry entry.
pub fn serialize_entry(component: &Component) -> String {
    match kind_entry(component.kind_tag()) {
        Some(entry) => (entry.serialize)(component),
        None => component.to_netlist_entry(),
    }
}
