//! JSON request/response shapes for a simulation run.
//!
//! ```json
//! {"n_qubits": 2, "circuit": [{"gate": "H", "wires": [0], "time": 0}]}
//! ```
//! answers with `{"state": [{"real": 0.707…, "imag": 0.0}, …]}`.
use std::io::Read;

use anyhow::{Context, Result};
use num_complex::Complex64 as C64;
use serde::{Deserialize, Serialize};

use crate::core::bloch::BlochVector;
use crate::core::{GateOp, QState};

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct GatePlacement {
    pub gate: String,
    pub wires: Vec<usize>,
    pub time: i64,
}

impl From<GatePlacement> for GateOp {
    fn from(p: GatePlacement) -> Self {
        GateOp { name: p.gate, wires: p.wires, time: p.time }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct CircuitRequest {
    pub n_qubits: usize,
    #[serde(default)]
    pub circuit: Vec<GatePlacement>,
}

impl CircuitRequest {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("parsing circuit request")
    }

    pub fn from_reader(mut reader: impl Read) -> Result<Self> {
        let mut buf = String::new();
        reader.read_to_string(&mut buf).context("reading circuit request")?;
        Self::from_json(&buf)
    }

    pub fn ops(&self) -> Vec<GateOp> {
        self.circuit.iter().cloned().map(GateOp::from).collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct Amplitude {
    pub real: f64,
    pub imag: f64,
}

impl From<C64> for Amplitude {
    fn from(z: C64) -> Self {
        Amplitude { real: z.re, imag: z.im }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct SimulateResponse {
    pub state: Vec<Amplitude>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bloch: Option<Vec<BlochVector>>,
}

impl SimulateResponse {
    pub fn from_state(psi: &QState) -> Self {
        Self {
            state: psi.amplitudes().iter().copied().map(Amplitude::from).collect(),
            bloch: None,
        }
    }

    pub fn with_bloch(mut self, vectors: Vec<BlochVector>) -> Self {
        self.bloch = Some(vectors);
        self
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("serializing simulation result")
    }
}
