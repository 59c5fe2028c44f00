//! Time-ordered state evolution.
//!
//! `simulate` starts from |0…0⟩, orders the circuit by `time` and folds every
//! gate into the state. The whole circuit is resolved and validated before
//! the first application, so a failing call never yields a partial state.
use serde::{Deserialize, Serialize};

use crate::core::circuit::{schedule, GateOp};
use crate::core::error::{Result, SimError};
use crate::core::gates::Gate;
use crate::core::ops;
use crate::core::types::QState;

/// Largest register the engine accepts. Dense operators are 4^n entries.
pub const MAX_QUBITS: usize = 10;

/// How a resolved gate is applied to the state.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Build the 2^n x 2^n operator and multiply it in.
    #[default]
    Dense,
    /// Update the touched amplitudes directly.
    Local,
}

#[derive(Clone, Copy, Debug)]
enum Placement {
    Single(usize),
    Pair { control: usize, target: usize },
}

#[derive(Clone, Copy, Debug)]
struct Step {
    gate: Gate,
    at: Placement,
    time: i64,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Engine {
    strategy: Strategy,
}

impl Engine {
    pub fn new(strategy: Strategy) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn run(&self, circuit: &[GateOp], n_qubits: usize) -> Result<QState> {
        if n_qubits > MAX_QUBITS {
            return Err(SimError::QubitLimitExceeded { requested: n_qubits, max: MAX_QUBITS });
        }
        let steps = schedule(circuit)
            .into_iter()
            .map(|op| resolve(op, n_qubits))
            .collect::<Result<Vec<_>>>()?;

        debug_log!(
            "[engine] {} op(s) on {} qubit(s), strategy={:?}",
            steps.len(),
            n_qubits,
            self.strategy
        );

        let mut state = QState::ground(n_qubits);
        for step in &steps {
            debug_log!("[engine] t={} {} {:?}", step.time, step.gate, step.at);
            state = self.apply(step, &state, n_qubits)?;
        }
        Ok(state)
    }

    fn apply(&self, step: &Step, psi: &QState, n_qubits: usize) -> Result<QState> {
        let u = step.gate.matrix();
        match (self.strategy, step.at) {
            (Strategy::Dense, Placement::Single(w)) => ops::lift_1q(&u, n_qubits, w).apply(psi),
            (Strategy::Dense, Placement::Pair { control, target }) => {
                ops::lift_2q(&u, n_qubits, control, target).apply(psi)
            }
            (Strategy::Local, Placement::Single(w)) => Ok(ops::apply_1q_local(&u, psi, w)),
            (Strategy::Local, Placement::Pair { control, target }) => {
                Ok(ops::apply_2q_local(&u, psi, control, target))
            }
        }
    }
}

/// Evolve |0…0⟩ through `circuit` with dense operators.
pub fn simulate(circuit: &[GateOp], n_qubits: usize) -> Result<QState> {
    Engine::default().run(circuit, n_qubits)
}

fn resolve(op: &GateOp, n_qubits: usize) -> Result<Step> {
    let gate: Gate = op.name.parse()?;
    if op.wires.len() != gate.arity() {
        return Err(SimError::arity(&op.name, op.wires.len()));
    }
    if let Some(&wire) = op.wires.iter().find(|&&w| w >= n_qubits) {
        return Err(SimError::WireOutOfRange { gate: op.name.clone(), wire, n_qubits });
    }
    let at = match op.wires.as_slice() {
        [w] => Placement::Single(*w),
        [control, target] if control == target => {
            return Err(SimError::DuplicateWire { gate: op.name.clone(), wire: *control });
        }
        [control, target] => Placement::Pair { control: *control, target: *target },
        _ => return Err(SimError::arity(&op.name, op.wires.len())),
    };
    Ok(Step { gate, at, time: op.time })
}
