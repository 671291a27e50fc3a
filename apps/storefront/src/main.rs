//! # Cosmic Store Entry Point
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Load configuration and catalog
//! 3. Create the session cart
//! 4. Run the terminal shell

use std::process::ExitCode;

fn main() -> ExitCode {
    // The actual setup is in lib.rs for better testability
    match cosmic_storefront_lib::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "Cosmic Store exited with an error");
            ExitCode::FAILURE
        }
    }
}
