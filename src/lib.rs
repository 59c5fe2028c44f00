//! qsim: dense state-vector evolution of small qubit registers.
//!
//! The engine lives in [`core`]; [`protocol`], [`config`] and the CLI
//! modules are the boundary around it.
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod io;
pub mod protocol;

pub use crate::core::{simulate, GateOp, QState, SimError};
