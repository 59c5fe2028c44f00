pub mod gates;
pub mod simulate;
