//! Row models and input DTOs.

pub mod alert;
pub mod equipment;
pub mod reading;
