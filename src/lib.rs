//! `meteo-toolbox` - geographic and meteorological formulas for scripts and rules
//!
//! This library provides small closed-form formulas (distance, humidex,
//! Beaufort scale, compass labels, sea-level pressure, Sager levels) and an
//! explicit registry that publishes them to a home-automation scripting host.

pub mod action_service;
pub mod config;
pub mod error;
pub mod formulas;
pub mod logging;
pub mod models;
pub mod registry;

// Re-export core types for public API
pub use action_service::ToolboxActionService;
pub use config::ToolboxConfig;
pub use error::ToolboxError;
pub use formulas::{
    CloudLevel, CompassRose, PressureTrend, ToolboxVariant, angle_difference, bearing_to_compass,
    beaufort_index, great_circle_distance, humidex, sager_cloud_level, sager_pressure_level,
    sager_pressure_trend, sea_level_pressure,
};
pub use models::{Coordinates, Value};
pub use registry::{ActionDoc, FunctionRegistry, ParamDoc, ParamKind};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, ToolboxError>;
