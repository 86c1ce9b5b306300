pub mod dispatch;
pub mod fleet;

pub use crate::domain::model::{ElectricTruck, NormalTruck, TruckKind, TruckStatus};
pub use crate::domain::ports::Truck;
pub use crate::utils::error::Result;
