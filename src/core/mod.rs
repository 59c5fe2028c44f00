//! Core module tree: gate library, operator composer and evolution engine.
//! Nothing in here knows about files, JSON or the command line.

#[macro_use]
pub mod debug; // gated debug logging (QSIM_DEBUG=1) provides debug_log! macro
pub mod error;
pub mod types;
pub mod gates;
pub mod ops;
pub mod circuit;
pub mod engine;
pub mod bloch;

pub use circuit::GateOp;
pub use engine::{simulate, Engine, Strategy, MAX_QUBITS};
pub use error::{Result, SimError};
pub use gates::Gate;
pub use types::{QOp, QState};
