//! smallsig command-line interface.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use smallsig::circuit_from_netlist;

#[derive(Parser)]
#[command(name = "smallsig")]
#[command(about = "Compile a netlist into a reduced small-signal circuit", long_about = None)]
#[command(version)]
struct Cli {
    /// Input netlist file
    #[arg(value_name = "NETLIST")]
    netlist: PathBuf,

    /// Operating-point log; enables transistor linearization lookups and
    /// DC-source elimination
    #[arg(short, long, value_name = "FILE")]
    log: Option<PathBuf>,

    /// Print the default parameter map as JSON instead of the netlist
    #[arg(short, long)]
    params: bool,

    /// Also list nodes and their aliases
    #[arg(short, long)]
    nodes: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_default_env()
        .filter_level(if cli.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .init();

    let netlist = fs::read_to_string(&cli.netlist)
        .with_context(|| format!("reading {}", cli.netlist.display()))?;
    let op_log = match &cli.log {
        Some(path) => Some(
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?,
        ),
        None => None,
    };

    let circuit = circuit_from_netlist(&netlist, op_log.as_deref())?;

    if cli.params {
        let params: serde_json::Map<String, serde_json::Value> = circuit
            .parameters()
            .into_iter()
            .map(|(name, value)| (name, serde_json::Value::from(value)))
            .collect();
        println!("{}", serde_json::to_string_pretty(&params)?);
    } else {
        println!("{}", circuit.netlist());
    }

    if cli.nodes {
        for id in circuit.nodes() {
            let aliases: Vec<&str> = circuit
                .node(id)
                .map(|node| node.aliases().collect())
                .unwrap_or_default();
            if aliases.is_empty() {
                println!("* node {id}");
            } else {
                println!("* node {id} (aliases: {})", aliases.join(", "));
            }
        }
    }

    Ok(())
}
