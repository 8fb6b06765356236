//! ibex - Terminal Indexer Explorer
//!
//! A terminal explorer for EVM chains whose history is served by an HTTP
//! indexer: transactions, blocks, balances and contract code, with
//! debounced search and paginated listings.

pub mod app;
pub mod config;
pub mod indexer;
pub mod logging;
pub mod pager;
pub mod search;
pub mod ui;

// Re-export commonly used types
pub use app::{App, BalanceDetail, BlockDetail, CodeDetail, NavLink, Screen, TxDetail};
pub use config::Config;
pub use indexer::{FetchError, IndexerClient};
