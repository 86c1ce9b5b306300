use crate::domain::model::TruckStatus;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::fmt::Debug;

/// 可裝卸貨物的卡車
///
/// 每台卡車只修改自己的狀態，因此可以各自在獨立的 task 中處理。
#[async_trait]
pub trait Truck: Send + Sync + Debug {
    fn id(&self) -> &str;

    async fn load_cargo(&mut self) -> Result<()>;

    async fn unload_cargo(&mut self) -> Result<()>;

    fn status(&self) -> TruckStatus;
}
