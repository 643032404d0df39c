use alloy::primitives::{
    utils::{ParseUnits, Unit},
    U256,
};

use crate::error::ClientError;

/// USD-denominated aggregates from the pool (collateral, debt, borrow limit).
pub const USD_BASE_DECIMALS: u8 = 8;
/// Basis-point percentages (liquidation threshold, loan-to-value).
pub const PERCENTAGE_DECIMALS: u8 = 2;
/// Health factor in WAD (1e18 = 1.0).
pub const HEALTH_FACTOR_DECIMALS: u8 = 18;
/// Oracle spot prices.
pub const PRICE_DECIMALS: u8 = 8;

/// Display value for the no-debt health factor sentinel.
pub const UNBOUNDED_HEALTH_FACTOR: &str = "∞";

/// Convert an on-chain fixed-point integer to its decimal string by shifting
/// the decimal point left `decimals` places. The fractional part keeps its
/// full width, so the conversion is exact.
pub fn format_scaled(value: U256, decimals: u8) -> Result<String, ClientError> {
    let unit = Unit::new(decimals)
        .ok_or_else(|| ClientError::Unknown(format!("invalid decimal scale: {decimals}")))?;
    Ok(ParseUnits::U256(value).format_units(unit))
}

/// Health factor decoding. A raw value of `U256::MAX` means the account has
/// no debt and the factor is unbounded; it renders as the infinity symbol
/// rather than a number.
pub fn format_health_factor(value: U256) -> Result<String, ClientError> {
    if value == U256::MAX {
        return Ok(UNBOUNDED_HEALTH_FACTOR.to_string());
    }
    format_scaled(value, HEALTH_FACTOR_DECIMALS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shifts_the_decimal_point_by_the_field_scale() {
        let raw = U256::from(123456789012u64);
        assert_eq!(format_scaled(raw, 8).unwrap(), "1234.56789012");
        assert_eq!(format_scaled(raw, 2).unwrap(), "1234567890.12");
        assert_eq!(format_scaled(raw, 18).unwrap(), "0.000000123456789012");
    }

    #[test]
    fn keeps_full_fractional_width() {
        assert_eq!(
            format_scaled(U256::from(50_000_000_000u64), USD_BASE_DECIMALS).unwrap(),
            "500.00000000"
        );
        assert_eq!(format_scaled(U256::ZERO, USD_BASE_DECIMALS).unwrap(), "0.00000000");
    }

    #[test]
    fn is_deterministic() {
        let raw = U256::from(987654321u64);
        assert_eq!(
            format_scaled(raw, USD_BASE_DECIMALS).unwrap(),
            format_scaled(raw, USD_BASE_DECIMALS).unwrap()
        );
    }

    #[test]
    fn max_health_factor_decodes_to_infinity() {
        assert_eq!(format_health_factor(U256::MAX).unwrap(), "∞");
    }

    #[test]
    fn finite_health_factor_decodes_to_a_number() {
        let one_point_five = U256::from(15u64) * U256::from(10u64).pow(U256::from(17u64));
        assert_eq!(format_health_factor(one_point_five).unwrap(), "1.500000000000000000");
    }
}
