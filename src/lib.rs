//! OdontoSys — scheduling core and typed REST client for a
//! dental-clinic management system.
//!
//! The backend owns the records; this crate owns the client-side
//! decisions: which days and hours are bookable, how a month of
//! occupancy looks, whether a dentist/instant pair can be booked, and
//! the shape of every request that crosses the wire. Rendering stays
//! with the UI layer consuming these types.

pub mod api;
pub mod availability;
pub mod booking;
pub mod config;
pub mod error;
pub mod models;
pub mod schedule;
pub mod session;

use tracing_subscriber::EnvFilter;

/// Initialize tracing for the host application. RUST_LOG wins; without
/// it, the crate logs at info.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} v{} starting", config::APP_NAME, config::APP_VERSION);
}
