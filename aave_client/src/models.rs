use serde::{Deserialize, Serialize};

/// Decoded result of `Pool.getUserAccountData`. Every field is a decimal
/// string already shifted by its on-chain scale: USD aggregates by 1e8,
/// percentages by 1e2, the health factor by 1e18 (or `"∞"` when the account
/// carries no debt).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccountData {
    pub total_collateral_base: String,
    pub total_debt_base: String,
    pub available_borrows_base: String,
    pub current_liquidation_threshold: String,
    pub ltv: String,
    pub health_factor: String,
}

/// One query result: account aggregates plus the network and address they
/// were fetched for. Constructed fresh per request, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPosition {
    pub account_data: UserAccountData,
    pub network: String,
    pub user_address: String,
}

/// ERC-20 metadata for a reserve token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenInfo {
    pub symbol: String,
    pub decimals: u8,
}
