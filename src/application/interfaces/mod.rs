/// Device service interface
pub mod device;
/// Feed service interface
pub mod feed;
/// Scenario service interface
pub mod scenario;
