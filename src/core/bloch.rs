//! Per-wire Bloch vectors of a register state.
use num_complex::Complex64 as C64;
use serde::Serialize;

use crate::core::error::{Result, SimError};
use crate::core::types::QState;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BlochVector {
    pub wire: usize,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl BlochVector {
    /// 1 for a pure single-wire state, < 1 when the wire is entangled.
    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

/// Bloch vector of `wire`, from its reduced density matrix ρ.
///
/// x = 2·Re ρ₀₁, y = −2·Im ρ₀₁, z = ρ₀₀ − ρ₁₁ with ρ₀₁ = Σ ψₖ₀ ψ̄ₖ₁,
/// so |+i⟩ maps to y = +1.
pub fn bloch_vector(psi: &QState, wire: usize) -> Result<BlochVector> {
    let n = psi.n_qubits();
    if wire >= n {
        return Err(SimError::WireOutOfRange { gate: "bloch".into(), wire, n_qubits: n });
    }
    let bit = 1usize << (n - 1 - wire);
    let amps = psi.amplitudes();

    let (mut rho00, mut rho11) = (0.0_f64, 0.0_f64);
    let mut rho01 = C64::new(0.0, 0.0);
    for k in (0..amps.len()).filter(|k| k & bit == 0) {
        let (a0, a1) = (amps[k], amps[k | bit]);
        rho00 += a0.norm_sqr();
        rho11 += a1.norm_sqr();
        rho01 += a0 * a1.conj();
    }
    Ok(BlochVector { wire, x: 2.0 * rho01.re, y: -2.0 * rho01.im, z: rho00 - rho11 })
}

/// Bloch vectors for every wire, in wire order.
pub fn bloch_vectors(psi: &QState) -> Vec<BlochVector> {
    (0..psi.n_qubits())
        .filter_map(|w| bloch_vector(psi, w).ok())
        .collect()
}
