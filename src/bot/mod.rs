/// Command registry and per-command handler bodies
pub mod commands;
/// Dispatcher schema and update routing
pub mod handlers;
/// Outbound message delivery seam
pub mod outbound;
