//! Predictions data - data access and normalization for on-chain price
//! prediction markets.
//!
//! Reads come from two sources: a GraphQL indexing service (the prediction
//! subgraph) for users, bets and round history, and the prediction contract
//! itself, queried in batches through Multicall3. Both are normalized into
//! the plain, serializable types in [`domain`].
//!
//! # Modules
//!
//! - [`domain`] - Entities, round results, history filters and the
//!   serialized big-number form
//! - [`port`] - Traits for the batch-call transport, the contract and the
//!   bet history source
//! - [`adapter`] - Subgraph client and alloy-backed contract readers
//! - [`infrastructure`] - Configuration, logging and client wiring
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use predictions_data::infrastructure::bootstrap;
//! use predictions_data::infrastructure::config::settings::Config;
//!
//! # async fn run() -> predictions_data::error::Result<()> {
//! let config = Config::load("config.toml")?;
//! config.init_logging();
//!
//! let subgraph = bootstrap::subgraph_client(&config);
//! let won = subgraph.get_total_won().await?;
//!
//! let reads = bootstrap::prediction_reads(&config)?;
//! let market = reads.get_prediction_data().await?;
//! println!("{won} BNB won, current epoch {}", market.current_epoch);
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;
