// Domain layer: truck models and the Truck port. No runtime dependencies beyond serde/async-trait.

pub mod model;
pub mod ports;
