//! Report sections and the top-level dispatcher.
//!
//! Sections run strictly in sequence and print top-to-bottom in declared
//! order: node summary, the role-specific section, delegator summary, then
//! the current round. A failed section never takes its siblings with it.

pub mod broadcaster;
pub mod delegator;
pub mod node;
pub mod table;
pub mod transcoder;

use crate::{
    client::{
        NodeClient,
        UNKNOWN,
    },
    config::{
        Config,
        Mode,
    },
};
use alloy_primitives::U256;
use eyre::Result;
use std::{
    future::Future,
    pin::Pin,
};
use tracing::error;

/// Source of the current on-chain round, kept behind a trait because the
/// round lives on chain rather than in the node's own state.
pub trait RoundSource {
    fn current_round(&self) -> Pin<Box<dyn Future<Output = Result<U256>> + Send + '_>>;
}

/// The node proxies the round query through its control API.
impl RoundSource for NodeClient {
    fn current_round(&self) -> Pin<Box<dyn Future<Output = Result<U256>> + Send + '_>> {
        Box::pin(async move {
            let body = self.fetch_text("/currentRound").await?;
            Ok(body.trim().parse::<U256>()?)
        })
    }
}

/// Assemble the full report. Best-effort: structural section failures are
/// logged and skipped, and the result is whatever rendered successfully.
pub async fn run(client: &NodeClient, config: &Config, rounds: &dyn RoundSource) -> String {
    let mut report = String::new();

    if let Some(section) = node::format(client, config).await {
        report.push_str(&section);
    }

    match config.mode {
        Mode::Transcoder => {
            if let Some(section) = transcoder::format(client).await {
                report.push_str(&section);
            }
        }
        Mode::Broadcaster => {
            report.push_str(&broadcaster::format(client).await);
        }
    }

    if let Some(section) = delegator::format(client).await {
        report.push_str(&section);
    }

    let round = match rounds.current_round().await {
        Ok(round) => round.to_string(),
        Err(err) => {
            error!("Error getting current round: {err}");
            UNKNOWN.to_string()
        }
    };
    report.push_str(&format!("CURRENT ROUND: {round}\n"));

    report
}
