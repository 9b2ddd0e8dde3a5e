/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
/// Pagination envelope and paging parameters
pub mod page;
/// Query parameters of the domain endpoints
pub mod parameters;
/// Request configuration and multipart models
pub mod request;
/// Response envelope and file models
pub mod response;
