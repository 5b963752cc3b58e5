//! Node identity and balance section.

use crate::{
    client::NodeClient,
    config::Config,
    format,
    reports::table::{
        self,
        StatsRows,
    },
};
use alloy_primitives::Address;
use tracing::error;

/// Build the NODE STATS section.
///
/// The contract address map is the one authoritative dependency: if that
/// fetch fails the whole section is skipped. Every other field degrades to
/// `"Unknown"` on its own.
pub async fn format(client: &NodeClient, config: &Config) -> Option<String> {
    let addresses = match client.contract_addresses().await {
        Ok(map) => map,
        Err(err) => {
            error!("Error getting contract addresses: {err}");
            return None;
        }
    };

    let contract = |name: &str| {
        let account = addresses.get(name).copied().unwrap_or(Address::ZERO);
        format::address(account)
    };

    let rows: StatsRows = vec![
        ("Node ID", client.node_id().await),
        ("Node Addr", client.node_addrs().await),
        ("RTMP Port", config.rtmp_port.to_string()),
        ("HTTP Port", config.http_port.to_string()),
        ("Controller Address", contract("Controller")),
        ("LivepeerToken Address", contract("LivepeerToken")),
        ("LivepeerTokenFaucet Address", contract("LivepeerTokenFaucet")),
        ("ETH Account", client.eth_addr().await),
        ("LPT Balance", client.token_balance().await),
        ("ETH Balance", client.eth_balance().await),
    ];

    Some(table::render("NODE STATS", &rows))
}
