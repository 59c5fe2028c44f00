use num_complex::Complex64 as C64;
use qsim::core::{simulate, Engine, GateOp, QState, SimError, Strategy, MAX_QUBITS};

const S: f64 = std::f64::consts::FRAC_1_SQRT_2;

fn op(name: &str, wires: &[usize], time: i64) -> GateOp {
    GateOp::new(name, wires, time)
}

fn assert_amps(psi: &QState, expected: &[(f64, f64)]) {
    assert_eq!(psi.len(), expected.len());
    for (i, (z, &(re, im))) in psi.amplitudes().iter().zip(expected).enumerate() {
        assert!(
            (z - C64::new(re, im)).norm() < 1e-9,
            "amplitude {i}: got {z}, want {re}+{im}i\nstate: {:?}",
            psi.amplitudes()
        );
    }
}

fn basis(n_qubits: usize, index: usize) -> Vec<(f64, f64)> {
    let mut v = vec![(0.0, 0.0); 1 << n_qubits];
    v[index] = (1.0, 0.0);
    v
}

#[test]
fn hadamard_on_zero() {
    let psi = simulate(&[op("H", &[0], 0)], 1).unwrap();
    assert_amps(&psi, &[(S, 0.0), (S, 0.0)]);
}

#[test]
fn x_twice_is_identity() {
    let psi = simulate(&[op("X", &[0], 0), op("X", &[0], 1)], 1).unwrap();
    assert_amps(&psi, &[(1.0, 0.0), (0.0, 0.0)]);
}

#[test]
fn bell_state() {
    let circ = [op("H", &[0], 0), op("CNOT", &[0, 1], 1)];
    let psi = simulate(&circ, 2).unwrap();
    assert_amps(&psi, &[(S, 0.0), (0.0, 0.0), (0.0, 0.0), (S, 0.0)]);
}

#[test]
fn empty_circuit_is_ground_state() {
    assert_amps(&simulate(&[], 3).unwrap(), &basis(3, 0));
    assert_amps(&simulate(&[], 0).unwrap(), &[(1.0, 0.0)]);
}

#[test]
fn order_comes_from_time_not_list_position() {
    let forward = [op("H", &[0], 0), op("X", &[0], 1)];
    let reversed = [op("X", &[0], 1), op("H", &[0], 0)];
    let a = simulate(&forward, 1).unwrap();
    let b = simulate(&reversed, 1).unwrap();
    assert_eq!(a.amplitudes(), b.amplitudes());

    // X·H|0⟩ = |+⟩ but H·X|0⟩ = |−⟩
    let swapped = [op("H", &[0], 1), op("X", &[0], 0)];
    let c = simulate(&swapped, 1).unwrap();
    assert_amps(&a, &[(S, 0.0), (S, 0.0)]);
    assert_amps(&c, &[(S, 0.0), (-S, 0.0)]);
}

#[test]
fn equal_times_keep_input_order() {
    let xh = simulate(&[op("X", &[0], 5), op("H", &[0], 5)], 1).unwrap();
    let hx = simulate(&[op("H", &[0], 5), op("X", &[0], 5)], 1).unwrap();
    assert_amps(&xh, &[(S, 0.0), (-S, 0.0)]);
    assert_amps(&hx, &[(S, 0.0), (S, 0.0)]);
}

#[test]
fn negative_times_sort_first() {
    let psi = simulate(&[op("H", &[0], 0), op("X", &[0], -7)], 1).unwrap();
    assert_amps(&psi, &[(S, 0.0), (-S, 0.0)]);
}

#[test]
fn ceiling_is_enforced_even_for_empty_circuit() {
    let err = simulate(&[], MAX_QUBITS + 1).unwrap_err();
    assert_eq!(err, SimError::QubitLimitExceeded { requested: 11, max: 10 });
    assert!(simulate(&[op("H", &[0], 0)], 42).is_err());
    assert_eq!(simulate(&[], MAX_QUBITS).unwrap().len(), 1024);
}

#[test]
fn unknown_gate_is_rejected() {
    let err = simulate(&[op("H", &[0], 0), op("FOO", &[0], 1)], 1).unwrap_err();
    assert_eq!(err, SimError::UnknownGate("FOO".into()));
}

#[test]
fn wrong_wire_counts_are_rejected() {
    let three = simulate(&[op("CNOT", &[0, 1, 2], 0)], 3).unwrap_err();
    assert!(matches!(three, SimError::UnsupportedGateArity { wires: 3, .. }));

    let none = simulate(&[op("H", &[], 0)], 1).unwrap_err();
    assert!(matches!(none, SimError::UnsupportedGateArity { wires: 0, .. }));

    let h_on_two = simulate(&[op("H", &[0, 1], 0)], 2).unwrap_err();
    assert!(matches!(h_on_two, SimError::UnsupportedGateArity { wires: 2, .. }));

    let cnot_on_one = simulate(&[op("CNOT", &[0], 0)], 2).unwrap_err();
    assert!(matches!(cnot_on_one, SimError::UnsupportedGateArity { wires: 1, .. }));
}

#[test]
fn bad_wires_are_rejected() {
    let err = simulate(&[op("X", &[2], 0)], 2).unwrap_err();
    assert_eq!(err, SimError::WireOutOfRange { gate: "X".into(), wire: 2, n_qubits: 2 });

    let err = simulate(&[op("CNOT", &[1, 1], 0)], 2).unwrap_err();
    assert_eq!(err, SimError::DuplicateWire { gate: "CNOT".into(), wire: 1 });
}

#[test]
fn failure_anywhere_fails_the_whole_call() {
    // the bad op is scheduled last; nothing is returned for the earlier ones
    let circ = [op("H", &[0], 0), op("CNOT", &[0, 1], 1), op("X", &[9], 2)];
    assert!(simulate(&circ, 2).is_err());
}

#[test]
fn cnot_on_non_adjacent_wires() {
    // |100⟩ -> |101⟩
    let circ = [op("X", &[0], 0), op("CNOT", &[0, 2], 1)];
    assert_amps(&simulate(&circ, 3).unwrap(), &basis(3, 0b101));

    // control clear: target untouched
    let circ = [op("X", &[1], 0), op("CNOT", &[0, 2], 1)];
    assert_amps(&simulate(&circ, 3).unwrap(), &basis(3, 0b010));
}

#[test]
fn cnot_with_target_before_control() {
    // |01⟩ -> |11⟩
    let circ = [op("X", &[1], 0), op("CNOT", &[1, 0], 1)];
    assert_amps(&simulate(&circ, 2).unwrap(), &basis(2, 0b11));

    let circ = [op("X", &[0], 0), op("CNOT", &[1, 0], 1)];
    assert_amps(&simulate(&circ, 2).unwrap(), &basis(2, 0b10));
}

#[test]
fn ghz_across_four_wires() {
    let circ = [
        op("H", &[0], 0),
        op("CNOT", &[0, 1], 1),
        op("CNOT", &[1, 2], 2),
        op("CNOT", &[0, 3], 3),
    ];
    let psi = simulate(&circ, 4).unwrap();
    let mut want = vec![(0.0, 0.0); 16];
    want[0] = (S, 0.0);
    want[15] = (S, 0.0);
    assert_amps(&psi, &want);
}

fn mixed_circuit() -> Vec<GateOp> {
    vec![
        op("H", &[0], 0),
        op("T", &[0], 1),
        op("H", &[2], 1),
        op("CNOT", &[0, 3], 2),
        op("S", &[3], 3),
        op("Y", &[1], 3),
        op("SWAP", &[3, 1], 4),
        op("CZ", &[2, 0], 5),
        op("H", &[1], 6),
        op("Z", &[2], 7),
        op("CNOT", &[3, 2], 8),
        op("X", &[0], 9),
    ]
}

#[test]
fn norm_stays_one() {
    let psi = simulate(&mixed_circuit(), 4).unwrap();
    assert!((psi.norm_sqr() - 1.0).abs() < 1e-9, "norm² = {}", psi.norm_sqr());
}

#[test]
fn local_strategy_matches_dense() {
    let dense = Engine::new(Strategy::Dense).run(&mixed_circuit(), 4).unwrap();
    let local = Engine::new(Strategy::Local).run(&mixed_circuit(), 4).unwrap();
    for (a, b) in dense.amplitudes().iter().zip(local.amplitudes()) {
        assert!((a - b).norm() < 1e-12, "{a} != {b}");
    }
}

#[test]
fn local_strategy_reports_same_errors() {
    let engine = Engine::new(Strategy::Local);
    assert_eq!(engine.strategy(), Strategy::Local);
    assert!(matches!(engine.run(&[], 11), Err(SimError::QubitLimitExceeded { .. })));
    assert!(matches!(engine.run(&[op("BAR", &[0], 0)], 1), Err(SimError::UnknownGate(_))));
}

#[test]
fn same_input_same_output() {
    let a = simulate(&mixed_circuit(), 4).unwrap();
    let b = simulate(&mixed_circuit(), 4).unwrap();
    assert_eq!(a.amplitudes(), b.amplitudes());
}
