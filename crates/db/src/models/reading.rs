//! Sensor reading model and DTOs.

use fabmon_core::classification::SensorValues;
use fabmon_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::alert::Alert;

/// A row from the `sensor_readings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SensorReading {
    pub id: DbId,
    pub equipment_id: DbId,
    pub temperature: f64,
    pub pressure: f64,
    pub vibration: f64,
    pub timestamp: Timestamp,
}

impl SensorReading {
    pub fn values(&self) -> SensorValues {
        SensorValues {
            temperature: self.temperature,
            pressure: self.pressure,
            vibration: self.vibration,
        }
    }
}

/// DTO for ingesting a reading. The timestamp is assigned on insert.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSensorReading {
    pub equipment_id: DbId,
    pub temperature: f64,
    pub pressure: f64,
    pub vibration: f64,
}

impl CreateSensorReading {
    pub fn values(&self) -> SensorValues {
        SensorValues {
            temperature: self.temperature,
            pressure: self.pressure,
            vibration: self.vibration,
        }
    }
}

/// The rows written by one successful ingest.
#[derive(Debug, Clone)]
pub struct IngestedReading {
    pub reading: SensorReading,
    pub alert: Alert,
}
