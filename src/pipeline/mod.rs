pub mod dispatch;
pub mod metrics;
