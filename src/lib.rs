//! # Livepeer Node Stats
//!
//! A status reporter for a locally running Livepeer node. It queries the
//! node's HTTP control API for identity, balance and role-specific economic
//! state and renders the results as bordered terminal tables.
//!
//! ## Architecture
//!
//! Each report section is self-contained and individually failable:
//!
//! - **`config`**: Immutable run configuration (host, ports, report mode)
//! - **`client`**: `NodeClient`, a thin reqwest wrapper over the control API
//! - **`models`**: Wire DTOs for the JSON endpoints
//! - **`format`**: Pure value-to-display-string helpers
//! - **`reports`**: Section builders (node, broadcaster, transcoder,
//!   delegator) and the top-level dispatcher
//!
//! ## Usage
//!
//! ```bash
//! # Broadcaster report (default) against a node on localhost:8935
//! livepeer-stats --host localhost --http-port 8935
//!
//! # Transcoder report instead
//! livepeer-stats --transcoder
//! ```
//!
//! Fetch failures never abort the run: structural failures skip their section
//! with a logged error, scalar field failures degrade to `"Unknown"`, and the
//! process always exits 0 after best-effort rendering.

pub mod client;
pub mod config;
pub mod format;
pub mod models;
pub mod reports;

pub use client::NodeClient;
pub use config::{
    Config,
    Mode,
};
