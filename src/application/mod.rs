/// Authorization capability injected into the client
pub mod auth;
/// Application configuration module
pub mod config;
/// Service interfaces of the domain wrappers
pub mod interfaces;
/// Domain wrappers over the REST client
pub mod services;
