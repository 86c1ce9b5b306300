use crate::core::dispatch::{DispatchOptions, DEFAULT_DELAY};
use crate::core::fleet::{DispatchMode, Fleet};
use crate::core::{ElectricTruck, NormalTruck, Truck, TruckKind};
use crate::utils::error::{FleetError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FleetConfig {
    #[serde(default)]
    pub dispatch: DispatchConfig,
    pub trucks: Vec<TruckDefinition>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DispatchConfig {
    #[serde(default)]
    pub mode: DispatchMode,
    pub delay_ms: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TruckDefinition {
    pub id: String,
    pub kind: TruckKind,
    /// 只適用於電動卡車，未設定時為 100
    pub battery: Option<f64>,
}

impl TruckDefinition {
    pub fn normal(id: &str) -> Self {
        Self {
            id: id.to_string(),
            kind: TruckKind::Normal,
            battery: None,
        }
    }

    pub fn electric(id: &str) -> Self {
        Self {
            id: id.to_string(),
            kind: TruckKind::Electric,
            battery: None,
        }
    }

    pub fn build(&self) -> Box<dyn Truck> {
        match self.kind {
            TruckKind::Normal => Box::new(NormalTruck::new(self.id.clone())),
            TruckKind::Electric => match self.battery {
                Some(battery) => Box::new(ElectricTruck::with_battery(self.id.clone(), battery)),
                None => Box::new(ElectricTruck::new(self.id.clone())),
            },
        }
    }
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            mode: DispatchMode::Concurrent,
            delay_ms: Some(DEFAULT_DELAY.as_millis() as u64),
        }
    }
}

impl Default for FleetConfig {
    /// 與 [`Fleet::demo`] 相同的四台卡車
    fn default() -> Self {
        Self {
            dispatch: DispatchConfig::default(),
            trucks: vec![
                TruckDefinition::normal("NT1"),
                TruckDefinition::electric("ET1"),
                TruckDefinition::normal("NT2"),
                TruckDefinition::electric("ET2"),
            ],
        }
    }
}

impl FleetConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(FleetError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| FleetError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_not_empty("trucks", &self.trucks)?;

        for (i, truck) in self.trucks.iter().enumerate() {
            validation::validate_truck_id(&format!("trucks[{}].id", i), &truck.id)?;

            if let Some(battery) = truck.battery {
                let field = format!("trucks[{}].battery", i);
                if truck.kind != TruckKind::Electric {
                    return Err(FleetError::InvalidConfigValueError {
                        field,
                        value: battery.to_string(),
                        reason: format!("Battery is only supported on electric trucks, not {}", truck.kind),
                    });
                }
                validation::validate_finite(&field, battery)?;
            }
        }

        validation::validate_unique_ids("trucks", self.trucks.iter().map(|t| t.id.as_str()))?;

        Ok(())
    }

    pub fn mode(&self) -> DispatchMode {
        self.dispatch.mode
    }

    pub fn delay(&self) -> Duration {
        self.dispatch
            .delay_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_DELAY)
    }

    pub fn dispatch_options(&self) -> DispatchOptions {
        DispatchOptions::new(self.delay())
    }

    pub fn build_fleet(&self) -> Fleet {
        Fleet::new(self.trucks.iter().map(TruckDefinition::build).collect())
    }
}

impl Validate for FleetConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
