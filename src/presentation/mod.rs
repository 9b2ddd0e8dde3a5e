/// Device models
pub mod device;
/// Feed models
pub mod feed;
/// Scenario models
pub mod scenario;
