//! Kronecker products, full-register lifts and local kernels.
//!
//! Wire 0 is the most significant bit of a basis index, so wire `w` of an
//! `n`-qubit register lives at bit position `n - 1 - w`.
use crate::core::types::{QOp, QState};
use nalgebra::DMatrix;
use num_complex::Complex64 as C64;

#[inline]
fn c(r: f64, i: f64) -> C64 {
    C64::new(r, i)
}

#[inline]
fn bit_of(n_qubits: usize, wire: usize) -> usize {
    1usize << (n_qubits - 1 - wire)
}

/// Kronecker product A ⊗ B
pub fn kron(a: &DMatrix<C64>, b: &DMatrix<C64>) -> DMatrix<C64> {
    let (ar, ac) = (a.nrows(), a.ncols());
    let (br, bc) = (b.nrows(), b.ncols());
    let mut out = DMatrix::<C64>::from_element(ar * br, ac * bc, c(0.0, 0.0));
    for i in 0..ar {
        for j in 0..ac {
            let aij = a[(i, j)];
            for k in 0..br {
                for l in 0..bc {
                    out[(i * br + k, j * bc + l)] = aij * b[(k, l)];
                }
            }
        }
    }
    out
}

/// Promote a 1-qubit gate `u` onto `n_qubits`: I ⊗ … ⊗ U ⊗ … ⊗ I with U at `target`.
pub fn lift_1q(u: &DMatrix<C64>, n_qubits: usize, target: usize) -> QOp {
    debug_assert_eq!(u.nrows(), 2);
    debug_assert!(target < n_qubits);

    let i2 = DMatrix::<C64>::identity(2, 2);
    let mut acc = DMatrix::<C64>::from_element(1, 1, c(1.0, 0.0));
    for q in 0..n_qubits {
        let m = if q == target { u } else { &i2 };
        acc = kron(&acc, m);
    }
    QOp { m: acc }
}

/// Promote a 2-qubit gate `u` (local order control, target) onto `n_qubits`.
///
/// Every column (input basis state) is split into the two local bits and the
/// untouched remainder; the 4x4 block is scattered back at the same wires.
/// Works for any distinct pair, adjacent or not, in either order. For
/// `target == control + 1` this equals I ⊗ … ⊗ U ⊗ … ⊗ I.
pub fn lift_2q(u: &DMatrix<C64>, n_qubits: usize, control: usize, target: usize) -> QOp {
    debug_assert_eq!(u.nrows(), 4);
    debug_assert!(control < n_qubits && target < n_qubits && control != target);

    let (bc, bt) = (bit_of(n_qubits, control), bit_of(n_qubits, target));
    let dim = 1usize << n_qubits;
    let mut m = DMatrix::<C64>::from_element(dim, dim, c(0.0, 0.0));
    for col in 0..dim {
        let rest = col & !(bc | bt);
        let local_in = (usize::from(col & bc != 0) << 1) | usize::from(col & bt != 0);
        for local_out in 0..4 {
            let mut row = rest;
            if local_out & 0b10 != 0 {
                row |= bc;
            }
            if local_out & 0b01 != 0 {
                row |= bt;
            }
            m[(row, col)] = u[(local_out, local_in)];
        }
    }
    QOp { m }
}

/// Apply a 1-qubit gate by updating amplitude pairs, no full operator.
pub fn apply_1q_local(u: &DMatrix<C64>, psi: &QState, target: usize) -> QState {
    let bit = bit_of(psi.n_qubits(), target);
    let src = &psi.data;
    let mut out = src.clone();
    for i in (0..src.len()).filter(|i| i & bit == 0) {
        let j = i | bit;
        let (a, b) = (src[i], src[j]);
        out[i] = u[(0, 0)] * a + u[(0, 1)] * b;
        out[j] = u[(1, 0)] * a + u[(1, 1)] * b;
    }
    QState { data: out }
}

/// Apply a 2-qubit gate by updating amplitude quartets, no full operator.
pub fn apply_2q_local(u: &DMatrix<C64>, psi: &QState, control: usize, target: usize) -> QState {
    let n = psi.n_qubits();
    let (bc, bt) = (bit_of(n, control), bit_of(n, target));
    let src = &psi.data;
    let mut out = src.clone();
    for i in (0..src.len()).filter(|i| i & (bc | bt) == 0) {
        let idx = [i, i | bt, i | bc, i | bc | bt];
        let amps = idx.map(|k| src[k]);
        for (r, &k) in idx.iter().enumerate() {
            out[k] = (0..4).map(|col| u[(r, col)] * amps[col]).sum();
        }
    }
    QState { data: out }
}
