/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
/// Capability trait of the REST client
pub mod api_client;
/// Normalization of transport failures
pub mod error_mapping;
/// `reqwest` implementation of the REST client
pub mod http_client;
/// Header, query and multipart builders
pub mod options;

pub use api_client::ApiClient;
pub use http_client::ApiClientService;
