use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    QubitLimitExceeded { requested: usize, max: usize },
    UnknownGate(String),
    UnsupportedGateArity { gate: String, wires: usize },
    WireOutOfRange { gate: String, wire: usize, n_qubits: usize },
    DuplicateWire { gate: String, wire: usize },
    DimensionMismatch { expected: usize, actual: usize },
    NotUnitary { deviation: f64 },
    NotNormalized { norm: f64 },
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::QubitLimitExceeded { requested, max } => {
                write!(f, "Qubit Limit Exceeded: {requested} qubits requested, at most {max} supported")
            }
            SimError::UnknownGate(name) => write!(f, "Unknown Gate: '{name}'"),
            SimError::UnsupportedGateArity { gate, wires } => {
                write!(f, "Unsupported Gate Arity: '{gate}' applied to {wires} wire(s)")
            }
            SimError::WireOutOfRange { gate, wire, n_qubits } => {
                write!(f, "Wire Out Of Range: '{gate}' targets wire {wire} on a {n_qubits}-qubit register")
            }
            SimError::DuplicateWire { gate, wire } => {
                write!(f, "Duplicate Wire: '{gate}' uses wire {wire} as both control and target")
            }
            SimError::DimensionMismatch { expected, actual } => {
                write!(f, "Dimension Mismatch: expected {expected}, got {actual}")
            }
            SimError::NotUnitary { deviation } => {
                write!(f, "Not Unitary: ‖UᴴU−I‖∞ = {deviation:e}")
            }
            SimError::NotNormalized { norm } => write!(f, "Not Normalized: ‖ψ‖ = {norm}"),
        }
    }
}

impl std::error::Error for SimError {}

pub type Result<T> = std::result::Result<T, SimError>;

impl SimError {
    pub fn unknown_gate(name: &str) -> Self { SimError::UnknownGate(name.to_string()) }
    pub fn arity(gate: &str, wires: usize) -> Self {
        SimError::UnsupportedGateArity { gate: gate.to_string(), wires }
    }
}
