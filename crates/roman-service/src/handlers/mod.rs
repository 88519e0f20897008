//! HTTP request handlers for the Roman service.

pub mod convert;
pub mod health;
pub mod metrics;
pub mod ui;

pub use convert::convert_number;
pub use health::health_check;
pub use metrics::metrics_handler;
pub use ui::index;
