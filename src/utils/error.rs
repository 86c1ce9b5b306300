use thiserror::Error;

#[derive(Error, Debug)]
pub enum FleetError {
    #[error("error loading cargo: {source}")]
    LoadCargo {
        truck_id: String,
        #[source]
        source: Box<FleetError>,
    },

    #[error("error unloading cargo: {source}")]
    UnloadCargo {
        truck_id: String,
        #[source]
        source: Box<FleetError>,
    },

    #[error("Cargo operation failed: {message}")]
    CargoOperation { message: String },

    #[error("Task for truck {truck_id} did not complete: {message}")]
    TaskJoin { truck_id: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl FleetError {
    /// 發生錯誤的卡車 ID（若錯誤與特定卡車相關）
    pub fn truck_id(&self) -> Option<&str> {
        match self {
            FleetError::LoadCargo { truck_id, .. }
            | FleetError::UnloadCargo { truck_id, .. }
            | FleetError::TaskJoin { truck_id, .. } => Some(truck_id),
            _ => None,
        }
    }

    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            FleetError::ConfigValidationError { .. }
                | FleetError::InvalidConfigValueError { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, FleetError>;
