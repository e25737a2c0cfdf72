// Domain layer: lockable items, report model and ports (traits). No dependencies beyond std/serde.

pub mod model;
pub mod ports;
