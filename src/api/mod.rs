/// API error types and the JSON failure envelope
pub mod errors;
/// HTTP handlers for the drink catalog and trivia endpoints
pub mod handlers;
/// Routes configuration and setup
pub mod routes;
/// HTTP server implementation
pub mod server;
