pub mod alert;
pub mod dashboard;
pub mod equipment;
pub mod equipment_health;
pub mod reading;
