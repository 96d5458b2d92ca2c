mod get_health;

pub use get_health::{HealthResponse, get_health};
