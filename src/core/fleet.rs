use crate::core::dispatch::{process_truck, DispatchOptions};
use crate::core::Truck;
use crate::domain::model::{ElectricTruck, NormalTruck, TruckStatus};
use crate::utils::error::{FleetError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 依序排列的卡車隊
#[derive(Debug, Default)]
pub struct Fleet {
    trucks: Vec<Box<dyn Truck>>,
}

impl Fleet {
    pub fn new(trucks: Vec<Box<dyn Truck>>) -> Self {
        Self { trucks }
    }

    /// 預設示範車隊：兩台一般卡車與兩台電動卡車
    pub fn demo() -> Self {
        Self::new(vec![
            Box::new(NormalTruck::new("NT1")),
            Box::new(ElectricTruck::new("ET1")),
            Box::new(NormalTruck::new("NT2")),
            Box::new(ElectricTruck::new("ET2")),
        ])
    }

    pub fn len(&self) -> usize {
        self.trucks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trucks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Truck> {
        self.trucks.iter().map(|t| t.as_ref())
    }

    pub fn statuses(&self) -> Vec<TruckStatus> {
        self.trucks.iter().map(|t| t.status()).collect()
    }

    /// 以 JSON 輸出所有卡車的狀態
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.statuses())?)
    }

    pub fn into_inner(self) -> Vec<Box<dyn Truck>> {
        self.trucks
    }
}

impl From<Vec<Box<dyn Truck>>> for Fleet {
    fn from(trucks: Vec<Box<dyn Truck>>) -> Self {
        Self::new(trucks)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum DispatchMode {
    #[default]
    Concurrent,
    Sequential,
}

impl fmt::Display for DispatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchMode::Concurrent => write!(f, "concurrent"),
            DispatchMode::Sequential => write!(f, "sequential"),
        }
    }
}

#[derive(Debug)]
pub struct TruckFailure {
    /// 在車隊中的位置
    pub position: usize,
    pub truck_id: String,
    pub error: FleetError,
}

#[derive(Debug)]
pub struct FleetReport {
    pub fleet: Fleet,
    pub failures: Vec<TruckFailure>,
}

/// 任一卡車失敗時的程序結束碼
pub const FAILURE_EXIT_CODE: i32 = 1;

impl FleetReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn exit_code(&self) -> i32 {
        if self.is_success() {
            0
        } else {
            FAILURE_EXIT_CODE
        }
    }
}

struct TruckOutcome {
    position: usize,
    truck_id: String,
    truck: Option<Box<dyn Truck>>,
    result: Result<()>,
}

pub struct FleetEngine {
    options: DispatchOptions,
}

impl FleetEngine {
    pub fn new(options: DispatchOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &DispatchOptions {
        &self.options
    }

    pub async fn run(&self, fleet: Fleet, mode: DispatchMode) -> Result<Fleet> {
        tracing::info!("Processing {} trucks ({} mode)", fleet.len(), mode);
        match mode {
            DispatchMode::Concurrent => self.process_fleet(fleet).await,
            DispatchMode::Sequential => self.process_fleet_sequential(fleet).await,
        }
    }

    /// 每台卡車各開一個 task 同時處理，等全部完成後才回傳
    ///
    /// 個別卡車的錯誤只會寫入日誌，不會回傳給呼叫端；此函式在所有 task
    /// 結束後一律回傳 `Ok`。需要知道哪些卡車失敗時請改用
    /// [`FleetEngine::process_fleet_collect`]。
    pub async fn process_fleet(&self, fleet: Fleet) -> Result<Fleet> {
        let outcomes = self.fan_out(fleet).await;

        let mut trucks = Vec::with_capacity(outcomes.len());
        for outcome in outcomes {
            if let Err(e) = outcome.result {
                tracing::error!("❌ Truck {} failed: {}", outcome.truck_id, e);
            }
            if let Some(truck) = outcome.truck {
                trucks.push(truck);
            }
        }

        Ok(Fleet::new(trucks))
    }

    /// 與 `process_fleet` 相同的並行處理，但會收集每台卡車的錯誤
    pub async fn process_fleet_collect(&self, fleet: Fleet) -> FleetReport {
        let outcomes = self.fan_out(fleet).await;

        let mut trucks = Vec::with_capacity(outcomes.len());
        let mut failures = Vec::new();
        for outcome in outcomes {
            if let Err(error) = outcome.result {
                tracing::warn!("Truck {} failed: {}", outcome.truck_id, error);
                failures.push(TruckFailure {
                    position: outcome.position,
                    truck_id: outcome.truck_id,
                    error,
                });
            }
            if let Some(truck) = outcome.truck {
                trucks.push(truck);
            }
        }

        FleetReport {
            fleet: Fleet::new(trucks),
            failures,
        }
    }

    /// 在目前的 task 上逐台處理，錯誤同樣只寫入日誌
    pub async fn process_fleet_sequential(&self, mut fleet: Fleet) -> Result<Fleet> {
        for truck in fleet.trucks.iter_mut() {
            if let Err(e) = process_truck(truck.as_mut(), &self.options).await {
                tracing::error!("❌ Truck {} failed: {}", truck.id(), e);
            }
        }

        Ok(fleet)
    }

    async fn fan_out(&self, fleet: Fleet) -> Vec<TruckOutcome> {
        let handles: Vec<_> = fleet
            .into_inner()
            .into_iter()
            .map(|mut truck| {
                let options = self.options;
                let truck_id = truck.id().to_string();
                let handle = tokio::spawn(async move {
                    let result = process_truck(truck.as_mut(), &options).await;
                    (truck, result)
                });
                (truck_id, handle)
            })
            .collect();

        tracing::debug!("Spawned {} truck tasks", handles.len());

        let mut outcomes = Vec::with_capacity(handles.len());
        for (position, (truck_id, handle)) in handles.into_iter().enumerate() {
            let outcome = match handle.await {
                Ok((truck, result)) => TruckOutcome {
                    position,
                    truck_id,
                    truck: Some(truck),
                    result,
                },
                Err(e) => TruckOutcome {
                    position,
                    truck_id: truck_id.clone(),
                    truck: None,
                    result: Err(FleetError::TaskJoin {
                        truck_id,
                        message: e.to_string(),
                    }),
                },
            };
            outcomes.push(outcome);
        }

        outcomes
    }
}

impl Default for FleetEngine {
    fn default() -> Self {
        Self::new(DispatchOptions::default())
    }
}
