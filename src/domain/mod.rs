// Domain layer: numeral types and the generator port. No dependencies beyond std/serde.

pub mod model;
pub mod ports;
