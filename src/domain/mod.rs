// Domain layer: script values and the output port. No dependencies beyond std/serde.

pub mod model;
pub mod ports;
