//! src/commands/simulate.rs
//! Read a circuit request, evolve it, render the amplitudes.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colored::Colorize;

use crate::config::{OutputFormat, Settings};
use crate::core::bloch::{bloch_vectors, BlochVector};
use crate::core::{Engine, QState};
use crate::io::atomic::atomic_write;
use crate::protocol::{CircuitRequest, SimulateResponse};

pub fn main(input: PathBuf, out: Option<PathBuf>, settings: &Settings) -> Result<()> {
    let request = read_request(&input)?;
    let rendered = run_request(&request, settings)?;

    match out {
        Some(path) => {
            atomic_write(&path, rendered.as_bytes())
                .with_context(|| format!("writing {}", path.display()))?;
            eprintln!("{} {}", "wrote".green().bold(), path.display());
        }
        None => print!("{rendered}"),
    }
    Ok(())
}

fn read_request(input: &Path) -> Result<CircuitRequest> {
    if input.as_os_str() == "-" {
        return CircuitRequest::from_reader(std::io::stdin().lock());
    }
    let txt = fs::read_to_string(input)
        .with_context(|| format!("reading {}", input.display()))?;
    CircuitRequest::from_json(&txt).with_context(|| format!("in {}", input.display()))
}

/// Simulate `request` and render it the way `settings` asks.
pub fn run_request(request: &CircuitRequest, settings: &Settings) -> Result<String> {
    let engine = Engine::new(settings.strategy);
    let psi = engine
        .run(&request.ops(), request.n_qubits)
        .context("simulation failed")?;
    let bloch = settings.bloch.then(|| bloch_vectors(&psi));

    match settings.format {
        OutputFormat::Json => {
            let mut resp = SimulateResponse::from_state(&psi);
            if let Some(b) = bloch {
                resp = resp.with_bloch(b);
            }
            let mut s = resp.to_json_pretty()?;
            s.push('\n');
            Ok(s)
        }
        OutputFormat::Table => Ok(render_table(&psi, bloch.as_deref(), settings.precision)),
    }
}

/// Plain-text amplitude table, one row per basis state.
pub fn render_table(psi: &QState, bloch: Option<&[BlochVector]>, precision: usize) -> String {
    let n = psi.n_qubits();
    let w = precision + 4;
    let mut s = String::new();
    let _ = writeln!(
        s,
        "{:>5}  {:<width$}  {:>w$}  {:>w$}  {:>w$}",
        "index", "basis", "real", "imag", "prob",
        width = n.max(1) + 2
    );
    for (i, z) in psi.amplitudes().iter().enumerate() {
        let ket = format!("|{}⟩", basis_label(i, n));
        let _ = writeln!(
            s,
            "{:>5}  {:<width$}  {:>w$.p$}  {:>w$.p$}  {:>w$.p$}",
            i, ket, unsigned_zero(z.re), unsigned_zero(z.im), z.norm_sqr(),
            width = n.max(1) + 2,
            p = precision
        );
    }
    if let Some(vectors) = bloch {
        let _ = writeln!(s);
        for b in vectors {
            let _ = writeln!(
                s,
                "wire {}: x={:.p$} y={:.p$} z={:.p$}",
                b.wire, unsigned_zero(b.x), unsigned_zero(b.y), unsigned_zero(b.z),
                p = precision
            );
        }
    }
    s
}

/// Keeps `-0.0` from printing as "-0.000".
fn unsigned_zero(v: f64) -> f64 {
    if v == 0.0 { 0.0 } else { v }
}

/// Wire 0 first, e.g. index 1 of 3 wires -> "001".
fn basis_label(index: usize, n_qubits: usize) -> String {
    (0..n_qubits)
        .map(|w| if index >> (n_qubits - 1 - w) & 1 == 1 { '1' } else { '0' })
        .collect()
}
