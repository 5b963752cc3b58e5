//! Pure value-to-display-string helpers.
//!
//! Callers only pass values that already decoded successfully, so nothing
//! here can fail. None of these rescale: amounts render in whatever
//! denomination the node served them in.

use alloy_primitives::{
    Address,
    U256,
};

/// Render an amount with a trailing unit label, e.g. `"150 LPT"`.
pub fn units(amount: U256, unit: &str) -> String {
    format!("{amount} {unit}")
}

/// Render a fixed-point percentage (hundredths of a percent) as a plain
/// number: `1050` becomes `"10.5"`, `400` becomes `"4"`. The `%` sign is
/// left to the row label.
pub fn percentage(value: U256) -> String {
    let hundred = U256::from(100u64);
    let whole = value / hundred;
    let frac = (value % hundred).to::<u64>();
    if frac == 0 {
        whole.to_string()
    } else if frac % 10 == 0 {
        format!("{whole}.{}", frac / 10)
    } else {
        format!("{whole}.{frac:02}")
    }
}

pub fn boolean(value: bool) -> String {
    value.to_string()
}

/// Render a 20-byte account as EIP-55 checksummed `0x…` hex. Deterministic:
/// the same bytes always produce the same string.
pub fn address(account: Address) -> String {
    account.to_checksum(None)
}

/// Exact decimal rendering, no rounding, no separators.
pub fn big_int(value: U256) -> String {
    value.to_string()
}
