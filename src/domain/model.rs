use crate::domain::ports::Truck;
use crate::utils::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_BATTERY: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TruckKind {
    Normal,
    Electric,
}

impl fmt::Display for TruckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TruckKind::Normal => write!(f, "normal"),
            TruckKind::Electric => write!(f, "electric"),
        }
    }
}

/// 卡車狀態快照
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TruckStatus {
    pub id: String,
    pub kind: TruckKind,
    pub cargo: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub battery: Option<f64>,
}

impl fmt::Display for TruckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) cargo={}", self.id, self.kind, self.cargo)?;
        if let Some(battery) = self.battery {
            write!(f, " battery={:.1}", battery)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NormalTruck {
    id: String,
    cargo: u32,
}

impl NormalTruck {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            cargo: 0,
        }
    }

    pub fn cargo(&self) -> u32 {
        self.cargo
    }
}

#[async_trait]
impl Truck for NormalTruck {
    fn id(&self) -> &str {
        &self.id
    }

    async fn load_cargo(&mut self) -> Result<()> {
        self.cargo += 1;
        Ok(())
    }

    async fn unload_cargo(&mut self) -> Result<()> {
        self.cargo = 0;
        Ok(())
    }

    fn status(&self) -> TruckStatus {
        TruckStatus {
            id: self.id.clone(),
            kind: TruckKind::Normal,
            cargo: self.cargo,
            battery: None,
        }
    }
}

/// 電動卡車：每次裝卸都會消耗 1 單位電量，電量沒有下限。
#[derive(Debug, Clone, PartialEq)]
pub struct ElectricTruck {
    id: String,
    cargo: u32,
    battery: f64,
}

impl ElectricTruck {
    pub fn new(id: impl Into<String>) -> Self {
        Self::with_battery(id, DEFAULT_BATTERY)
    }

    pub fn with_battery(id: impl Into<String>, battery: f64) -> Self {
        Self {
            id: id.into(),
            cargo: 0,
            battery,
        }
    }

    pub fn cargo(&self) -> u32 {
        self.cargo
    }

    pub fn battery(&self) -> f64 {
        self.battery
    }
}

#[async_trait]
impl Truck for ElectricTruck {
    fn id(&self) -> &str {
        &self.id
    }

    async fn load_cargo(&mut self) -> Result<()> {
        self.cargo += 1;
        self.battery -= 1.0;
        Ok(())
    }

    async fn unload_cargo(&mut self) -> Result<()> {
        self.cargo = 0;
        self.battery -= 1.0;
        Ok(())
    }

    fn status(&self) -> TruckStatus {
        TruckStatus {
            id: self.id.clone(),
            kind: TruckKind::Electric,
            cargo: self.cargo,
            battery: Some(self.battery),
        }
    }
}
