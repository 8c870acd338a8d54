// Domain layer: value types only. No dependencies beyond std/serde.

pub mod model;
