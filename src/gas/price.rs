//! Gas price value types.
//!
//! A gas price is one of two disjoint field sets, tagged by shape: a legacy
//! `{gasPrice}` object or an EIP-1559 `{baseFee, maxPriorityFeePerGas,
//! maxFeePerGas}` object. Amounts cross the HTTP and cache boundaries as
//! decimal strings because they exceed native integer range.

use alloy::primitives::U256;
use serde::{Deserialize, Serialize};

/// Decimal-string serde for [`U256`] boundary values.
mod decimal {
    use alloy::primitives::U256;
    use serde::{de, Deserialize, Deserializer, Serializer};
    use std::str::FromStr;

    /// Serializes a `U256` as its decimal string representation.
    pub fn serialize<S: Serializer>(value: &U256, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    /// Deserializes a `U256` from a decimal string.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<U256, D::Error> {
        let raw = String::deserialize(deserializer)?;
        U256::from_str(&raw).map_err(de::Error::custom)
    }
}

/// The recommended gas price, in the format the chain supports.
///
/// The Eip1559 variant is only ever constructed with
/// `max_fee_per_gas == base_fee + max_priority_fee_per_gas`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GasPrice {
    /// Fee-market pricing for chains past the EIP-1559 upgrade
    #[serde(rename_all = "camelCase")]
    Eip1559 {
        /// Base fee per gas of the pending block
        #[serde(with = "decimal")]
        base_fee: U256,
        /// Priority fee (tip) per gas unit offered to the block producer
        #[serde(with = "decimal")]
        max_priority_fee_per_gas: U256,
        /// Total fee cap, always `base_fee + max_priority_fee_per_gas`
        #[serde(with = "decimal")]
        max_fee_per_gas: U256,
    },
    /// Single-price pricing for chains without a fee market
    #[serde(rename_all = "camelCase")]
    Legacy {
        /// Gas price for legacy transactions
        #[serde(with = "decimal")]
        gas_price: U256,
    },
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_serializes_as_single_decimal_field() {
        let price = GasPrice::Legacy {
            gas_price: U256::from(10_000_000_000u64),
        };
        assert_eq!(
            serde_json::to_string(&price).unwrap(),
            r#"{"gasPrice":"10000000000"}"#
        );
    }

    #[test]
    fn test_eip1559_serializes_as_camel_case_decimal_fields() {
        let price = GasPrice::Eip1559 {
            base_fee: U256::from(10_000_000_000u64),
            max_priority_fee_per_gas: U256::from(2_000_000_000u64),
            max_fee_per_gas: U256::from(12_000_000_000u64),
        };
        assert_eq!(
            serde_json::to_string(&price).unwrap(),
            r#"{"baseFee":"10000000000","maxPriorityFeePerGas":"2000000000","maxFeePerGas":"12000000000"}"#
        );
    }

    #[test]
    fn test_variant_is_selected_by_field_shape() {
        let legacy: GasPrice = serde_json::from_str(r#"{"gasPrice":"7"}"#).unwrap();
        assert!(matches!(legacy, GasPrice::Legacy { .. }));

        let eip1559: GasPrice = serde_json::from_str(
            r#"{"baseFee":"5","maxPriorityFeePerGas":"2","maxFeePerGas":"7"}"#,
        )
        .unwrap();
        assert!(matches!(eip1559, GasPrice::Eip1559 { .. }));
    }

    #[test]
    fn test_amounts_beyond_u64_survive_a_round_trip() {
        let price = GasPrice::Legacy {
            gas_price: U256::from_str_radix("340282366920938463463374607431768211456", 10).unwrap(),
        };
        let raw = serde_json::to_string(&price).unwrap();
        assert_eq!(serde_json::from_str::<GasPrice>(&raw).unwrap(), price);
    }
}
