//! Operating-point log extraction.
//!
//! Simulator logs print per-transistor bias tables under headers like
//! `--- Bipolar Transistors ---`, one labeled row per quantity with one
//! column per device. Only the rows needed for the hybrid-pi model are
//! retained. MOSFET tables carry no usable `Rpi`/`Ro` rows; those are
//! derived from the drain current and output conductance instead.

use std::collections::HashMap;

use smallsig_core::transistor::{HybridPiParams, OPEN_CIRCUIT_RESISTANCE};
use smallsig_core::units::parse_literal;

use crate::error::{Error, Result};

/// Mapping from lowercase transistor name to its bias-point parameters.
pub type ParameterTable = HashMap<String, HybridPiParams>;

/// True for section headers of the form `--- <word> Transistors ---`.
fn is_section_header(line: &str) -> bool {
    let trimmed = line.trim_matches(' ');
    let Some(rest) = trimmed.strip_prefix("--- ") else {
        return false;
    };
    let Some(word) = rest.strip_suffix(" Transistors ---") else {
        return false;
    };
    !word.is_empty() && !word.contains(char::is_whitespace)
}

/// Labeled rows accumulated while scanning transistor tables.
#[derive(Debug, Default)]
struct Rows {
    names: Option<Vec<String>>,
    gm: Option<Vec<f64>>,
    rpi: Option<Vec<f64>>,
    ro: Option<Vec<f64>>,
    id: Option<Vec<f64>>,
    gds: Option<Vec<f64>>,
}

fn parse_cells(cells: &[&str]) -> Result<Vec<f64>> {
    cells
        .iter()
        .map(|cell| parse_literal(cell).map_err(Error::from))
        .collect()
}

/// Extract per-transistor hybrid-pi parameters from an operating-point log.
///
/// Outside a section only headers are recognized. Inside one, a row is kept
/// when its first token, with a trailing colon stripped, is one of `Name`,
/// `Gm`, `Rpi`, `Ro`, `Id`, `Gds`; an empty or unrecognized row closes the
/// section. A later section overwrites rows of the same label. Devices with
/// an incomplete parameter set are omitted from the table; they surface as
/// missing-parameter errors only if a netlist transistor references them.
pub fn extract_parameters(log: &str) -> Result<ParameterTable> {
    let mut rows = Rows::default();
    let mut in_section = false;

    for line in log.lines() {
        if !in_section {
            in_section = is_section_header(line);
            continue;
        }

        let cells: Vec<&str> = line.split_whitespace().collect();
        let Some(first) = cells.first() else {
            in_section = false;
            continue;
        };

        match first.strip_suffix(':').unwrap_or(first) {
            "Name" => {
                rows.names = Some(cells[1..].iter().map(|s| s.to_lowercase()).collect());
            }
            "Gm" => rows.gm = Some(parse_cells(&cells[1..])?),
            "Rpi" => rows.rpi = Some(parse_cells(&cells[1..])?),
            "Ro" => rows.ro = Some(parse_cells(&cells[1..])?),
            "Id" => rows.id = Some(parse_cells(&cells[1..])?),
            "Gds" => rows.gds = Some(parse_cells(&cells[1..])?),
            _ => in_section = false,
        }
    }

    let Some(names) = rows.names else {
        return Ok(ParameterTable::new());
    };

    // MOSFET tables: the gate is an open circuit and the output resistance
    // follows from the channel-length modulation at the bias point,
    // lambda = Gds / Id and Ro = 1 / (lambda * Id).
    let mosfet = names.first().is_some_and(|name| name.starts_with('m'));
    let (rpi, ro) = match (mosfet, rows.id, rows.gds) {
        (true, Some(id), Some(gds)) => {
            let ro: Vec<f64> = id
                .iter()
                .zip(&gds)
                .map(|(&id, &gds)| {
                    let lambda = gds / id;
                    1.0 / (lambda * id)
                })
                .collect();
            let rpi = vec![OPEN_CIRCUIT_RESISTANCE; ro.len()];
            (Some(rpi), Some(ro))
        }
        _ => (rows.rpi, rows.ro),
    };

    let (Some(gm), Some(rpi), Some(ro)) = (rows.gm, rpi, ro) else {
        return Ok(ParameterTable::new());
    };

    let mut table = ParameterTable::new();
    for (((name, gm), rpi), ro) in names.into_iter().zip(gm).zip(rpi).zip(ro) {
        table.insert(name, HybridPiParams { gm, rpi, ro });
    }
    Ok(table)
}
