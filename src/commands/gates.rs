use std::fmt::Write as _;

use crate::core::Gate;

/// One line per gate: name and wire count.
pub fn gate_listing() -> String {
    let mut s = String::new();
    for g in Gate::ALL {
        let wires = if g.arity() == 1 { "1 wire" } else { "2 wires (control, target)" };
        let _ = writeln!(s, "{:<5} {}", g.name(), wires);
    }
    s
}

pub fn main() -> anyhow::Result<()> {
    print!("{}", gate_listing());
    Ok(())
}
