//! Delegator stake and bonding lifecycle section.

use crate::{
    client::NodeClient,
    format,
    reports::table::{
        self,
        StatsRows,
    },
};
use tracing::error;

/// Build the DELEGATOR STATS section. Same policy as the transcoder section:
/// any fetch or decode error skips it entirely.
pub async fn format(client: &NodeClient) -> Option<String> {
    let info = match client.delegator_info().await {
        Ok(info) => info,
        Err(err) => {
            error!("Error getting delegator info: {err}");
            return None;
        }
    };

    let rows: StatsRows = vec![
        ("Status", info.status),
        ("Stake", format::big_int(info.bonded_amount)),
        ("Collected Fees", format::big_int(info.fees)),
        ("Pending Stake", format::big_int(info.pending_stake)),
        ("Pending Fees", format::big_int(info.pending_fees)),
        ("Delegated Stake", format::big_int(info.delegated_amount)),
        ("Delegate Address", format::address(info.delegate_address)),
        ("Last Claim Round", format::big_int(info.last_claim_round)),
        ("Start Round", format::big_int(info.start_round)),
        ("Withdraw Round", format::big_int(info.withdraw_round)),
    ];

    Some(table::render("DELEGATOR STATS", &rows))
}
