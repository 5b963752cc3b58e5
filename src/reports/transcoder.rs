//! Transcoder registration and economic parameters section.

use crate::{
    client::NodeClient,
    format,
    reports::table::{
        self,
        StatsRows,
    },
};
use tracing::error;

/// Build the TRANSCODER STATS section. Any fetch or decode error skips the
/// whole section; there is no partial table.
pub async fn format(client: &NodeClient) -> Option<String> {
    let info = match client.transcoder_info().await {
        Ok(info) => info,
        Err(err) => {
            error!("Error getting transcoder info: {err}");
            return None;
        }
    };

    let rows: StatsRows = vec![
        ("Status", info.status),
        ("Active", format::boolean(info.active)),
        ("Delegated Stake", format::units(info.delegated_stake, "LPT")),
        ("Reward Cut (%)", format::percentage(info.block_reward_cut)),
        ("Fee Share (%)", format::percentage(info.fee_share)),
        ("Price Per Segment", format::units(info.price_per_segment, "ETH")),
        (
            "Pending Reward Cut (%)",
            format::percentage(info.pending_block_reward_cut),
        ),
        ("Pending Fee Share (%)", format::percentage(info.pending_fee_share)),
        (
            "Pending Price Per Segment",
            format::units(info.pending_price_per_segment, "ETH"),
        ),
        ("Last Reward Round", format::big_int(info.last_reward_round)),
    ];

    Some(table::render("TRANSCODER STATS", &rows))
}
