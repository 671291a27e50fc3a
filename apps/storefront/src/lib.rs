//! # Cosmic Storefront Library
//!
//! Session setup for the storefront: configuration, logging, state and the
//! terminal shell.
//!
//! ## Module Organization
//! ```text
//! cosmic_storefront_lib/
//! ├── lib.rs          ◄─── You are here (setup & run)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── catalog.rs  ◄─── Loaded catalog
//! │   ├── cart.rs     ◄─── Session cart
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── product.rs  ◄─── Catalog reads
//! │   ├── cart.rs     ◄─── Cart manipulation and checkout
//! │   └── config.rs   ◄─── Configuration retrieval
//! ├── notify.rs       ◄─── "Added to cart" notifications
//! ├── shell.rs        ◄─── Terminal renderer
//! └── error.rs        ◄─── ApiError / AppError
//! ```

pub mod commands;
pub mod error;
pub mod notify;
pub mod shell;
pub mod state;

use std::io;

use tracing::{info, info_span};
use tracing_subscriber::EnvFilter;

use error::AppError;
use shell::Shell;
use state::{CartState, CatalogState, ConfigState};

/// Runs one storefront session on stdin/stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Initialize Logging (stderr, RUST_LOG or a crate-level default)     │
/// │  2. Read configuration from COSMIC_* environment variables             │
/// │  3. Load the catalog (file or built-in sample)                         │
/// │  4. Create an empty cart with a fresh session id                       │
/// │  5. Hand everything to the shell until `quit` / end of input           │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> Result<(), AppError> {
    init_tracing();

    info!("Starting Cosmic Store");

    let config = ConfigState::from_env();
    let catalog = CatalogState::load(&config)?;
    let cart = CartState::new();

    let span = info_span!("session", id = %cart.session_id());
    let _guard = span.enter();
    info!(store = %config.store_name, "Session started");

    let mut shell = Shell::new(config, catalog, cart);
    let stdin = io::stdin();
    let stdout = io::stdout();
    shell.run(stdin.lock(), &mut stdout.lock())?;

    info!(
        total_items = shell.cart().cart().totals().total_items,
        "Session ended"
    );
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so they never mix with the rendered store on stdout.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=cosmic_storefront_lib=trace` - Trace for this crate only
/// - Default: INFO, DEBUG for this crate
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,cosmic_storefront_lib=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
