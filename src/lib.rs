pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, OutputFormat};

pub use config::FleetConfig;
pub use core::dispatch::{process_truck, DispatchOptions};
pub use core::fleet::{
    DispatchMode, Fleet, FleetEngine, FleetReport, TruckFailure, FAILURE_EXIT_CODE,
};
pub use domain::model::{ElectricTruck, NormalTruck, TruckKind, TruckStatus};
pub use domain::ports::Truck;
pub use utils::error::{FleetError, Result};
