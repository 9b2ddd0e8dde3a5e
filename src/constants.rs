/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
/// User agent string used in HTTP requests to identify this client to the simulator backend
pub const USER_AGENT: &str = "wolk-simulator-client/0.1.0";
/// Default timeout in seconds for REST API requests
pub const DEFAULT_REST_TIMEOUT_SECS: u64 = 30;
/// Media type used when no `accept` header is configured
pub const APPLICATION_JSON: &str = "application/json";
/// Media type requested by every paging query
pub const APPLICATION_PAGE_JSON: &str = "application/vnd.page+json";
/// Media type requested when downloading media files
pub const APPLICATION_OCTET_STREAM: &str = "application/octet-stream";
/// Token prefixing media URLs that live on the configured backend
pub const INTERNAL_URL_PREFIX: &str = "{{host}}";
/// Path of the device resource
pub const DEVICES_PATH: &str = "/api/devices";
/// Path of the feed resource
pub const FEEDS_PATH: &str = "/api/feeds";
/// Path of the scenario resource
pub const SCENARIOS_PATH: &str = "/api/scenarios";
/// Status code reported when the request never reached the server
pub const NETWORK_ERROR_CODE: u16 = 0;
