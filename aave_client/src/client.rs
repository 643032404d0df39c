use alloy::{
    network::Ethereum,
    primitives::Address,
    providers::{Provider, ProviderBuilder},
    transports::http::reqwest::Url,
};
use tracing::{debug, warn};

use crate::{
    config::NetworkConfig,
    contracts::{AaveOracle, AavePool, AaveProtocolDataProvider, Erc20},
    error::{ClientError, ClientResult},
    models::{TokenInfo, UserAccountData, UserPosition},
    units,
};

/// Read-only client over one network's Aave V3 deployment. Holds typed
/// contract handles for the pool, the protocol data provider and the price
/// oracle, all bound to a single HTTP provider.
///
/// Clients are cheap value objects meant to be constructed per request from
/// the immutable registry; nothing is shared or pooled across them.
pub struct AaveV3Client<P: Provider<Ethereum>> {
    network: NetworkConfig,
    provider: P,
    pool: AavePool::AavePoolInstance<(), P>,
    data_provider: AaveProtocolDataProvider::AaveProtocolDataProviderInstance<(), P>,
    oracle: AaveOracle::AaveOracleInstance<(), P>,
}

/// Resolve a network slug and open a client against its configured endpoint.
/// Registry lookup happens first, so an unsupported slug fails before any
/// provider is built.
pub fn connect(slug: &str) -> ClientResult<AaveV3Client<impl Provider<Ethereum> + Clone>> {
    let network = NetworkConfig::for_slug(slug)?;
    let provider = build_provider(&network)?;
    AaveV3Client::with_provider(network, provider)
}

/// Build an HTTP provider for the given network endpoint. One connection per
/// client; no reuse across requests.
pub fn build_provider(network: &NetworkConfig) -> ClientResult<impl Provider<Ethereum> + Clone> {
    let url: Url = network
        .rpc_url
        .parse()
        .map_err(|e| ClientError::Unknown(format!("invalid RPC URL {}: {e}", network.rpc_url)))?;
    Ok(ProviderBuilder::new().on_http(url))
}

/// Check the canonical 20-byte hex address format: "0x" prefix followed by
/// 40 hex characters, any casing. Fails fast with [`ClientError::InvalidAddress`]
/// so no remote call is ever attempted for malformed input.
pub fn validate_address(address: &str) -> ClientResult<Address> {
    let trimmed = address.trim();
    let hex = trimmed.strip_prefix("0x").ok_or(ClientError::InvalidAddress)?;
    if hex.len() != 40 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ClientError::InvalidAddress);
    }
    trimmed.parse().map_err(|_| ClientError::InvalidAddress)
}

impl<P: Provider<Ethereum> + Clone> AaveV3Client<P> {
    /// Bind the contract handles of `network` to an already-built provider.
    pub fn with_provider(network: NetworkConfig, provider: P) -> ClientResult<Self> {
        let pool = AavePool::new(parse_contract_address(network.pool)?, provider.clone());
        let data_provider = AaveProtocolDataProvider::new(
            parse_contract_address(network.pool_data_provider)?,
            provider.clone(),
        );
        let oracle = AaveOracle::new(parse_contract_address(network.price_oracle)?, provider.clone());

        Ok(Self {
            network,
            provider,
            pool,
            data_provider,
            oracle,
        })
    }

    pub fn network(&self) -> &NetworkConfig {
        &self.network
    }

    /// Fetch and decode the account-level aggregates for `address`.
    ///
    /// The remote call returns six unsigned integers in a fixed order;
    /// each is shifted by its field scale into a decimal string, with the
    /// unbounded-health-factor sentinel handled before scaling.
    pub async fn get_user_account_data(&self, address: &str) -> ClientResult<UserAccountData> {
        let user = validate_address(address)?;
        debug!("Fetching account data for {} on {}", user, self.network.name);

        let raw = self
            .pool
            .getUserAccountData(user)
            .call()
            .await
            .map_err(|e| ClientError::classify(e.to_string()))?;

        decode_account_data(&raw)
    }

    /// The primary query: account aggregates tagged with the network display
    /// name and the queried address.
    pub async fn get_user_position(&self, address: &str) -> ClientResult<UserPosition> {
        let account_data = self.get_user_account_data(address).await?;
        Ok(UserPosition {
            account_data,
            network: self.network.name.to_string(),
            user_address: address.trim().to_string(),
        })
    }

    /// Enumerate the reserve tokens known to the protocol data provider.
    pub async fn get_all_reserves_tokens(
        &self,
    ) -> ClientResult<Vec<AaveProtocolDataProvider::TokenData>> {
        let raw = self
            .data_provider
            .getAllReservesTokens()
            .call()
            .await
            .map_err(|e| ClientError::classify(e.to_string()))?;
        Ok(raw.tokens)
    }

    /// Per-asset position of `user` in the `asset` reserve, raw on-chain units.
    pub async fn get_user_reserve_data(
        &self,
        asset: &str,
        user: &str,
    ) -> ClientResult<AaveProtocolDataProvider::getUserReserveDataReturn> {
        let asset = validate_address(asset)?;
        let user = validate_address(user)?;
        self.data_provider
            .getUserReserveData(asset, user)
            .call()
            .await
            .map_err(|e| ClientError::classify(e.to_string()))
    }

    /// aToken / stable-debt / variable-debt token addresses for a reserve.
    pub async fn get_reserve_tokens_addresses(
        &self,
        asset: &str,
    ) -> ClientResult<AaveProtocolDataProvider::getReserveTokensAddressesReturn> {
        let asset = validate_address(asset)?;
        self.data_provider
            .getReserveTokensAddresses(asset)
            .call()
            .await
            .map_err(|e| ClientError::classify(e.to_string()))
    }

    /// Oracle spot price for `asset`, as a USD decimal string.
    pub async fn get_asset_price(&self, asset: &str) -> ClientResult<String> {
        let asset = validate_address(asset)?;
        let raw = self
            .oracle
            .getAssetPrice(asset)
            .call()
            .await
            .map_err(|e| ClientError::classify(e.to_string()))?;
        units::format_scaled(raw._0, units::PRICE_DECIMALS)
    }

    /// Symbol and decimals for an ERC-20 token. Tokens with broken metadata
    /// degrade to ("Unknown", 18) instead of failing the caller.
    pub async fn get_token_info(&self, token: &str) -> ClientResult<TokenInfo> {
        let token = validate_address(token)?;
        let erc20 = Erc20::new(token, self.provider.clone());

        let symbol = erc20.symbol().call().await;
        let decimals = erc20.decimals().call().await;

        match (symbol, decimals) {
            (Ok(symbol), Ok(decimals)) => Ok(TokenInfo {
                symbol: symbol._0,
                decimals: decimals._0,
            }),
            _ => {
                warn!("Failed to read ERC-20 metadata for {}", token);
                Ok(TokenInfo {
                    symbol: "Unknown".to_string(),
                    decimals: 18,
                })
            }
        }
    }
}

fn parse_contract_address(address: &str) -> ClientResult<Address> {
    address
        .parse()
        .map_err(|_| ClientError::Unknown(format!("invalid contract address in registry: {address}")))
}

/// Decode the six raw integers into their decimal-string form. Deterministic:
/// the same inputs always produce the same tuple.
pub fn decode_account_data(
    raw: &AavePool::getUserAccountDataReturn,
) -> ClientResult<UserAccountData> {
    Ok(UserAccountData {
        total_collateral_base: units::format_scaled(raw.totalCollateralBase, units::USD_BASE_DECIMALS)?,
        total_debt_base: units::format_scaled(raw.totalDebtBase, units::USD_BASE_DECIMALS)?,
        available_borrows_base: units::format_scaled(raw.availableBorrowsBase, units::USD_BASE_DECIMALS)?,
        current_liquidation_threshold: units::format_scaled(
            raw.currentLiquidationThreshold,
            units::PERCENTAGE_DECIMALS,
        )?,
        ltv: units::format_scaled(raw.ltv, units::PERCENTAGE_DECIMALS)?,
        health_factor: units::format_health_factor(raw.healthFactor)?,
    })
}
