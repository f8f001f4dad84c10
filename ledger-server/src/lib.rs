//! Cable Ledger Server - profitability of capacity sales orders
//!
//! # Architecture
//!
//! - **Engine** (`financials`): pure revenue/profit/margin computation per
//!   sales model and sales type
//! - **Store** (`store`): concurrent in-memory orders and inventory, seeded
//!   from a JSON snapshot
//! - **Dashboard** (`dashboard`): portfolio aggregates over the engine
//! - **HTTP API** (`api`): axum routes over the above
//!
//! # Layout
//!
//! ```text
//! ledger-server/src/
//! ├── core/          # config, state, server
//! ├── financials/    # computation engine
//! ├── store/         # MemoryStore, Snapshot
//! ├── dashboard/     # portfolio aggregates
//! ├── services/      # router and middleware
//! ├── api/           # HTTP handlers
//! └── utils/         # errors, logging, validation
//! ```

pub mod api;
pub mod core;
pub mod dashboard;
pub mod financials;
pub mod services;
pub mod store;
pub mod utils;

// Re-export public types
pub use crate::core::{Config, Server, ServerState};
pub use financials::{InventoryResolver, NoInventory, compute_order_financials, compute_with_resource};
pub use store::{MemoryStore, Snapshot};
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Load `.env` and initialize logging from the environment
///
/// Runs before [`Config::from_env`] so `.env` values are visible to it.
pub fn setup_environment() -> Result<Config, Box<dyn std::error::Error>> {
    if let Err(e) = dotenv::dotenv()
        && !e.not_found()
    {
        return Err(e.into());
    }

    let config = Config::from_env();
    init_logger_with_file(
        Some(&config.log_level),
        Some(config.is_production()),
        config.log_dir.as_deref(),
    );
    Ok(config)
}

pub fn print_banner() {
    println!(
        r#"
   ______      __    __        __             __
  / ____/___ _/ /_  / /__     / /   ___  ____/ /___ ____  _____
 / /   / __ `/ __ \/ / _ \   / /   / _ \/ __  / __ `/ _ \/ ___/
/ /___/ /_/ / /_/ / /  __/  / /___/  __/ /_/ / /_/ /  __/ /
\____/\__,_/_.___/_/\___/  /_____/\___/\__,_/\__, /\___/_/
                                            /____/
    "#
    );
}
