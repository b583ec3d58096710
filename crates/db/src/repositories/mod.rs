//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods
//! that accept `&PgPool` as the first argument.

pub mod alert_repo;
pub mod dashboard_repo;
pub mod equipment_repo;
pub mod ingest_repo;
pub mod reading_repo;

pub use alert_repo::AlertRepo;
pub use dashboard_repo::DashboardRepo;
pub use equipment_repo::EquipmentRepo;
pub use ingest_repo::IngestRepo;
pub use reading_repo::ReadingRepo;
