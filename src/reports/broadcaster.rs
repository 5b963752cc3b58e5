//! Broadcaster deposit and broadcast configuration section.

use crate::{
    client::NodeClient,
    format,
    reports::table::{
        self,
        StatsRows,
    },
};
use alloy_primitives::U256;
use tracing::error;

/// Build the BROADCASTER STATS section. Always renders: a failed broadcast
/// config fetch is logged and degrades to a zero price and empty options
/// rather than dropping the section.
pub async fn format(client: &NodeClient) -> String {
    let (price, transcoding_options) = match client.broadcast_config().await {
        Ok(config) => (config.max_price_per_segment, config.transcoding_options),
        Err(err) => {
            error!("Error getting broadcast config: {err}");
            // Matches the node CLI's historical behavior: a zero-value price
            // renders as "0", not "Unknown".
            (U256::ZERO, String::new())
        }
    };

    let rows: StatsRows = vec![
        ("Deposit", client.broadcaster_deposit().await),
        ("Broadcast Price Per Segment", format::big_int(price)),
        ("Broadcast Transcoding Options", transcoding_options),
    ];

    table::render("BROADCASTER STATS", &rows)
}
