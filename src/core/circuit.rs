//! Gate placements as handed to the engine.

/// One placed gate. For two-qubit gates `wires` is `[control, target]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GateOp {
    pub name: String,
    pub wires: Vec<usize>,
    pub time: i64,
}

impl GateOp {
    pub fn new(name: impl Into<String>, wires: &[usize], time: i64) -> Self {
        Self { name: name.into(), wires: wires.to_vec(), time }
    }
}

/// Application order: ascending `time`, ties keep their input order.
pub fn schedule(circuit: &[GateOp]) -> Vec<&GateOp> {
    let mut ordered: Vec<&GateOp> = circuit.iter().collect();
    ordered.sort_by_key(|op| op.time);
    ordered
}
