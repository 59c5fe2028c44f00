//! Standard quantum gates and name lookup.
use std::fmt;
use std::str::FromStr;

use nalgebra::DMatrix;
use num_complex::Complex64 as C64;

use crate::core::error::SimError;

#[inline]
fn c(r: f64, i: f64) -> C64 {
    C64::new(r, i)
}

pub fn i2() -> DMatrix<C64> {
    DMatrix::identity(2, 2)
}
pub fn x() -> DMatrix<C64> {
    DMatrix::from_row_slice(2, 2, &[c(0.0, 0.0), c(1.0, 0.0), c(1.0, 0.0), c(0.0, 0.0)])
}
pub fn y() -> DMatrix<C64> {
    DMatrix::from_row_slice(2, 2, &[c(0.0, 0.0), c(0.0, -1.0), c(0.0, 1.0), c(0.0, 0.0)])
}
pub fn z() -> DMatrix<C64> {
    DMatrix::from_row_slice(2, 2, &[c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(-1.0, 0.0)])
}
pub fn h() -> DMatrix<C64> {
    let s = 1.0_f64 / 2.0_f64.sqrt();
    DMatrix::from_row_slice(2, 2, &[c(s, 0.0), c(s, 0.0), c(s, 0.0), c(-s, 0.0)])
}
pub fn s() -> DMatrix<C64> {
    DMatrix::from_row_slice(2, 2, &[c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 1.0)])
}
pub fn t() -> DMatrix<C64> {
    let phi = std::f64::consts::FRAC_PI_4;
    DMatrix::from_row_slice(
        2,
        2,
        &[
            c(1.0, 0.0),
            c(0.0, 0.0),
            c(0.0, 0.0),
            c(phi.cos(), phi.sin()),
        ],
    )
}

/// Local basis order is (control, target): 00, 01, 10, 11.
pub fn cnot() -> DMatrix<C64> {
    let (o, l) = (c(0.0, 0.0), c(1.0, 0.0));
    DMatrix::from_row_slice(4, 4, &[
        l, o, o, o,
        o, l, o, o,
        o, o, o, l,
        o, o, l, o,
    ])
}
pub fn cz() -> DMatrix<C64> {
    let (o, l) = (c(0.0, 0.0), c(1.0, 0.0));
    DMatrix::from_row_slice(4, 4, &[
        l, o, o, o,
        o, l, o, o,
        o, o, l, o,
        o, o, o, c(-1.0, 0.0),
    ])
}
pub fn swap() -> DMatrix<C64> {
    let (o, l) = (c(0.0, 0.0), c(1.0, 0.0));
    DMatrix::from_row_slice(4, 4, &[
        l, o, o, o,
        o, o, l, o,
        o, l, o, o,
        o, o, o, l,
    ])
}

/// Closed set of gates the engine understands.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Gate {
    H,
    X,
    Y,
    Z,
    S,
    T,
    Cnot,
    Cz,
    Swap,
}

impl Gate {
    pub const ALL: [Gate; 9] = [
        Gate::H,
        Gate::X,
        Gate::Y,
        Gate::Z,
        Gate::S,
        Gate::T,
        Gate::Cnot,
        Gate::Cz,
        Gate::Swap,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Gate::H => "H",
            Gate::X => "X",
            Gate::Y => "Y",
            Gate::Z => "Z",
            Gate::S => "S",
            Gate::T => "T",
            Gate::Cnot => "CNOT",
            Gate::Cz => "CZ",
            Gate::Swap => "SWAP",
        }
    }

    /// Number of wires the gate acts on.
    pub fn arity(self) -> usize {
        match self {
            Gate::Cnot | Gate::Cz | Gate::Swap => 2,
            _ => 1,
        }
    }

    /// Fresh matrix on every call; 2x2 for arity 1, 4x4 for arity 2.
    pub fn matrix(self) -> DMatrix<C64> {
        match self {
            Gate::H => h(),
            Gate::X => x(),
            Gate::Y => y(),
            Gate::Z => z(),
            Gate::S => s(),
            Gate::T => t(),
            Gate::Cnot => cnot(),
            Gate::Cz => cz(),
            Gate::Swap => swap(),
        }
    }
}

impl FromStr for Gate {
    type Err = SimError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Gate::ALL
            .into_iter()
            .find(|g| g.name() == name)
            .ok_or_else(|| SimError::unknown_gate(name))
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
