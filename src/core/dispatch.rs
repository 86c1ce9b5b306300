use crate::core::Truck;
use crate::utils::error::{FleetError, Result};
use std::time::Duration;

pub const DEFAULT_DELAY: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchOptions {
    /// 裝貨前的模擬作業時間，為 0 時不暫停
    pub delay: Duration,
}

impl DispatchOptions {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn without_delay() -> Self {
        Self::new(Duration::ZERO)
    }
}

impl Default for DispatchOptions {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

/// 處理單一卡車：先裝貨再卸貨
///
/// 裝貨失敗時直接回傳錯誤，不會嘗試卸貨。
pub async fn process_truck(truck: &mut dyn Truck, options: &DispatchOptions) -> Result<()> {
    tracing::info!("🚚 Started processing truck {}", truck.status());

    if !options.delay.is_zero() {
        tracing::debug!("Simulating {:?} of work for {}", options.delay, truck.id());
        tokio::time::sleep(options.delay).await;
    }

    if let Err(e) = truck.load_cargo().await {
        return Err(FleetError::LoadCargo {
            truck_id: truck.id().to_string(),
            source: Box::new(e),
        });
    }

    if let Err(e) = truck.unload_cargo().await {
        return Err(FleetError::UnloadCargo {
            truck_id: truck.id().to_string(),
            source: Box::new(e),
        });
    }

    tracing::info!("✅ Finished processing truck {}", truck.status());

    Ok(())
}
