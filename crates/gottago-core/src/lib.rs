pub mod app_config;
pub mod category;
pub mod config;
pub mod distance;
pub mod place;
pub mod query;

pub use app_config::{AppConfig, Environment};
pub use category::{Category, CategoryParseError, Urgency, UrgencyParseError};
pub use config::{load_app_config, load_app_config_from_env, ConfigError};
pub use place::{Coordinates, OpenStatus, Place, ReferencePoint};
pub use query::build_search_query;
