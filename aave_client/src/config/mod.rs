mod env_helper;

pub use env_helper::env_or;

use crate::error::ClientError;

/// Network slugs the registry resolves. Every entry must map to a complete
/// [`NetworkConfig`].
pub const SUPPORTED_NETWORKS: [&str; 2] = ["arbitrum", "avalanche"];

/// Static per-network configuration: JSON-RPC endpoint plus the Aave V3
/// core contract addresses. Read-only after construction.
#[derive(Debug, Clone)]
pub struct NetworkConfig {
    pub name: &'static str,
    pub slug: &'static str,
    pub chain_id: u64,
    pub rpc_url: String,
    pub pool: &'static str,
    pub pool_data_provider: &'static str,
    pub price_oracle: &'static str,
}

impl NetworkConfig {
    /// Resolve a network slug to its configuration. The RPC endpoint can be
    /// overridden per network via `<NETWORK>_RPC_URL`; contract addresses
    /// and chain ids are compiled in.
    pub fn for_slug(slug: &str) -> Result<Self, ClientError> {
        match slug {
            "arbitrum" => Ok(Self {
                name: "Arbitrum One",
                slug: "arbitrum",
                chain_id: 42161,
                rpc_url: env_or("ARBITRUM_RPC_URL", "https://arb1.arbitrum.io/rpc"),
                pool: "0x794a61358D6845594F94dc1DB02A252b5b4814aD",
                pool_data_provider: "0x69FA688f1Dc47d4B5d8029D5a35FB7a548310654",
                price_oracle: "0xb56c2F0B653B2e0b10C9b928C8580Ac5Df02C7C7",
            }),
            "avalanche" => Ok(Self {
                name: "Avalanche C-Chain",
                slug: "avalanche",
                chain_id: 43114,
                rpc_url: env_or("AVALANCHE_RPC_URL", "https://api.avax.network/ext/bc/C/rpc"),
                pool: "0x794a61358D6845594F94dc1DB02A252b5b4814aD",
                pool_data_provider: "0x69FA688f1Dc47d4B5d8029D5a35FB7a548310654",
                price_oracle: "0xEBd36016B3eD09D4693Ed4251c67Bd858c3c7C9C",
            }),
            _ => Err(ClientError::UnsupportedNetwork(slug.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloy::primitives::Address;

    use super::*;

    #[test]
    fn every_supported_network_resolves_to_a_complete_config() {
        for slug in SUPPORTED_NETWORKS {
            let config = NetworkConfig::for_slug(slug).unwrap();
            assert_eq!(config.slug, slug);
            assert!(!config.name.is_empty());
            assert_ne!(config.chain_id, 0);
            assert!(!config.rpc_url.is_empty());
            assert!(config.pool.parse::<Address>().is_ok());
            assert!(config.pool_data_provider.parse::<Address>().is_ok());
            assert!(config.price_oracle.parse::<Address>().is_ok());
        }
    }

    #[test]
    fn unsupported_slug_is_rejected_with_the_offending_slug() {
        let err = NetworkConfig::for_slug("polygon").unwrap_err();
        assert_eq!(err, ClientError::UnsupportedNetwork("polygon".to_string()));
        assert_eq!(err.code(), "UNSUPPORTED_NETWORK");
        assert!(err.to_string().contains("polygon"));
    }
}
