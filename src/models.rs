//! Wire DTOs for the node's JSON control endpoints.
//!
//! Field names on the wire are the PascalCase identifiers the node emits;
//! amounts and round numbers arrive as decimal bigint strings and are decoded
//! into [`U256`] to avoid precision loss.

use alloy_primitives::{
    Address,
    U256,
};
use serde::{
    Deserialize,
    Serialize,
};
use std::collections::HashMap;

/// Contract name to account address, as served by `/contractAddresses`.
///
/// The known keys are `Controller`, `LivepeerToken` and
/// `LivepeerTokenFaucet`; a key absent from the response renders as the zero
/// address.
pub type ContractAddresses = HashMap<String, Address>;

/// Response of `/getBroadcastConfig`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BroadcastConfig {
    #[serde(with = "u256_dec")]
    pub max_price_per_segment: U256,
    pub transcoding_options: String,
}

/// Response of `/transcoderInfo`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TranscoderInfo {
    /// Registration status label, e.g. `"Registered"` or `"NotRegistered"`.
    pub status: String,
    pub active: bool,
    #[serde(with = "u256_dec")]
    pub delegated_stake: U256,
    /// Reward cut as a fixed-point percentage (hundredths of a percent).
    #[serde(with = "u256_dec")]
    pub block_reward_cut: U256,
    #[serde(with = "u256_dec")]
    pub fee_share: U256,
    #[serde(with = "u256_dec")]
    pub price_per_segment: U256,
    #[serde(with = "u256_dec")]
    pub pending_block_reward_cut: U256,
    #[serde(with = "u256_dec")]
    pub pending_fee_share: U256,
    #[serde(with = "u256_dec")]
    pub pending_price_per_segment: U256,
    #[serde(with = "u256_dec")]
    pub last_reward_round: U256,
}

/// Response of `/delegatorInfo`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DelegatorInfo {
    pub status: String,
    #[serde(with = "u256_dec")]
    pub bonded_amount: U256,
    #[serde(with = "u256_dec")]
    pub fees: U256,
    #[serde(with = "u256_dec")]
    pub pending_stake: U256,
    #[serde(with = "u256_dec")]
    pub pending_fees: U256,
    #[serde(with = "u256_dec")]
    pub delegated_amount: U256,
    pub delegate_address: Address,
    #[serde(rename = "LastClaimTokenPoolsSharesRound", with = "u256_dec")]
    pub last_claim_round: U256,
    #[serde(with = "u256_dec")]
    pub start_round: U256,
    #[serde(with = "u256_dec")]
    pub withdraw_round: U256,
}

/// (De)serialize a [`U256`] as a decimal string, the node's bigint wire
/// format.
mod u256_dec {
    use alloy_primitives::U256;
    use serde::{
        de,
        Deserialize,
        Deserializer,
        Serializer,
    };

    pub fn serialize<S>(value: &U256, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<U256, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse::<U256>().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;
    use pretty_assertions::assert_eq;

    #[test]
    fn transcoder_info_decodes_wire_names() {
        let json = r#"{
            "Status": "Registered",
            "Active": true,
            "DelegatedStake": "123456789012345678901234567890",
            "BlockRewardCut": "1050",
            "FeeShare": "400",
            "PricePerSegment": "150",
            "PendingBlockRewardCut": "1100",
            "PendingFeeShare": "450",
            "PendingPricePerSegment": "160",
            "LastRewardRound": "1337"
        }"#;

        let info: TranscoderInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.status, "Registered");
        assert!(info.active);
        assert_eq!(
            info.delegated_stake,
            "123456789012345678901234567890".parse::<U256>().unwrap()
        );
        assert_eq!(info.last_reward_round, U256::from(1337u64));
    }

    #[test]
    fn delegator_info_decodes_legacy_round_name() {
        let json = r#"{
            "Status": "Bonded",
            "BondedAmount": "5000",
            "Fees": "12",
            "PendingStake": "0",
            "PendingFees": "0",
            "DelegatedAmount": "0",
            "DelegateAddress": "0x2222222222222222222222222222222222222222",
            "LastClaimTokenPoolsSharesRound": "99",
            "StartRound": "10",
            "WithdrawRound": "0"
        }"#;

        let info: DelegatorInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.last_claim_round, U256::from(99u64));
        assert_eq!(
            info.delegate_address,
            address!("2222222222222222222222222222222222222222")
        );
    }

    #[test]
    fn broadcast_config_round_trips() {
        let config = BroadcastConfig {
            max_price_per_segment: U256::from(150u64),
            transcoding_options: "P240p30fps16x9".to_string(),
        };

        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"MaxPricePerSegment\":\"150\""));

        let decoded: BroadcastConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.max_price_per_segment, config.max_price_per_segment);
        assert_eq!(decoded.transcoding_options, config.transcoding_options);
    }

    #[test]
    fn malformed_bigint_string_is_an_error() {
        let json = r#"{"MaxPricePerSegment": "not-a-number", "TranscodingOptions": ""}"#;
        assert!(serde_json::from_str::<BroadcastConfig>(json).is_err());
    }
}
