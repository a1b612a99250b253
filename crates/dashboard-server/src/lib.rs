//! Dashboard server for the DFLN monitor
//!
//! Owns the explicit "latest round" state slot and exposes the derived
//! views over HTTP to the presentation layer. Rendering itself happens in
//! whatever consumes this JSON.

pub mod fallback;
pub mod http_server;
pub mod state;

pub use http_server::{DashboardServer, ServerContext};
pub use state::{RoundPhase, RoundState};
