/// Interfaces Layer - External Entry Points
///
/// This layer contains all external interfaces to the system.
///
/// ## Modules
/// - `cli`: Command-line interface (main.rs logic)
/// - `http`: REST API (axum)

pub mod cli;
pub mod http;
