//! Core quantum types: amplitude vector and dense operator.
use nalgebra::{DMatrix, DVector};
use num_complex::Complex64 as C64;

use crate::core::error::{Result, SimError};

pub const EPS: f64 = 1e-12;

#[derive(Clone, Debug)]
pub struct QState {
    pub data: DVector<C64>,
}

impl QState {
    /// Create from raw vector; rejects non-normalized unless `auto_normalize = true`.
    pub fn try_new(vec: DVector<C64>, auto_normalize: bool) -> Result<Self> {
        let len = vec.len();
        if !len.is_power_of_two() {
            return Err(SimError::DimensionMismatch { expected: len.next_power_of_two(), actual: len });
        }
        let mut v = vec;
        let norm = v.iter().map(|z| z.norm_sqr()).sum::<f64>().sqrt();
        if (norm - 1.0).abs() < 1e-9 {
            Ok(Self { data: v })
        } else if auto_normalize {
            if norm < EPS {
                return Err(SimError::NotNormalized { norm });
            }
            v /= C64::from(norm);
            Ok(Self { data: v })
        } else {
            Err(SimError::NotNormalized { norm })
        }
    }

    /// |0…0⟩ over `n_qubits` wires.
    pub fn ground(n_qubits: usize) -> Self {
        let mut data = DVector::from_element(1usize << n_qubits, C64::new(0.0, 0.0));
        data[0] = C64::new(1.0, 0.0);
        Self { data }
    }

    pub fn len(&self) -> usize { self.data.len() }

    pub fn is_empty(&self) -> bool { self.data.is_empty() }

    pub fn n_qubits(&self) -> usize { self.data.len().trailing_zeros() as usize }

    pub fn amplitudes(&self) -> &[C64] { self.data.as_slice() }

    /// Σ|ψᵢ|², 1 for any state produced by unitary evolution.
    pub fn norm_sqr(&self) -> f64 {
        self.data.iter().map(|z| z.norm_sqr()).sum()
    }
}

#[derive(Clone, Debug)]
pub struct QOp {
    pub m: DMatrix<C64>,
}

impl QOp {
    pub fn try_new_unitary(m: DMatrix<C64>) -> Result<Self> {
        if m.nrows() != m.ncols() {
            return Err(SimError::DimensionMismatch { expected: m.nrows(), actual: m.ncols() });
        }
        // Unitarity: U^† U = I
        let u_dag_u = m.adjoint() * &m;
        let i = DMatrix::<C64>::identity(m.nrows(), m.ncols());
        let max_diff = (u_dag_u - i)
            .iter()
            .map(|z| z.norm())
            .fold(0.0_f64, f64::max);
        if max_diff > 1e-8 {
            return Err(SimError::NotUnitary { deviation: max_diff });
        }
        Ok(Self { m })
    }

    pub fn dim(&self) -> usize { self.m.nrows() }

    /// Apply to a full state vector (dimensions must match).
    pub fn apply(&self, psi: &QState) -> Result<QState> {
        if self.m.ncols() != psi.len() {
            return Err(SimError::DimensionMismatch { expected: self.m.ncols(), actual: psi.len() });
        }
        Ok(QState { data: &self.m * &psi.data })
    }
}
