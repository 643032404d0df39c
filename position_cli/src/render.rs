use aave_client::{units, UserPosition};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";

/// Canonical health-factor policy: Healthy at 2.0 and above, Moderate at
/// 1.5 and above, At Risk below that. An unbounded factor is Healthy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthTier {
    Healthy,
    Moderate,
    AtRisk,
}

impl HealthTier {
    pub fn for_factor(health_factor: f64) -> Self {
        if health_factor >= 2.0 {
            Self::Healthy
        } else if health_factor >= 1.5 {
            Self::Moderate
        } else {
            Self::AtRisk
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Healthy => "Healthy",
            Self::Moderate => "Moderate",
            Self::AtRisk => "At Risk",
        }
    }

    fn color(&self) -> &'static str {
        match self {
            Self::Healthy => GREEN,
            Self::Moderate => YELLOW,
            Self::AtRisk => RED,
        }
    }
}

/// Three mutually exclusive render states: summary for a funded account,
/// empty state when collateral is zero. Errors are the third branch and are
/// rendered by [`render_error`] at the call site.
pub fn render_result(position: &UserPosition) {
    if has_active_position(position) {
        render_summary(position);
    } else {
        render_empty_state(&position.user_address, &position.network);
    }
}

pub fn has_active_position(position: &UserPosition) -> bool {
    parse_amount(&position.account_data.total_collateral_base) > 0.0
}

fn render_summary(position: &UserPosition) {
    let data = &position.account_data;
    let health_factor = parse_amount(&data.health_factor);
    let tier = HealthTier::for_factor(health_factor);

    println!();
    println!("{BOLD}Account Summary - {}{RESET}", position.network);
    println!(
        "Address: {} {DIM}({}){RESET}",
        shorten_address(&position.user_address),
        position.user_address
    );
    println!("Status: {}{}{RESET}", tier.color(), tier.label());
    println!();
    println!(
        "  Total Collateral       {}",
        format_currency(parse_amount(&data.total_collateral_base))
    );
    println!(
        "  Total Debt             {}",
        format_currency(parse_amount(&data.total_debt_base))
    );
    println!(
        "  Available to Borrow    {}",
        format_currency(parse_amount(&data.available_borrows_base))
    );
    println!(
        "  Health Factor          {}{}{RESET}",
        tier.color(),
        format_health_factor(health_factor)
    );
    println!();
    println!("  Loan to Value          {}", format_percentage(parse_amount(&data.ltv)));
    println!(
        "  Liquidation Threshold  {}",
        format_percentage(parse_amount(&data.current_liquidation_threshold))
    );
}

pub fn render_empty_state(address: &str, network: &str) {
    println!();
    println!("{BOLD}No Active Positions{RESET}");
    println!("No active positions found for this address on {network}.");
    println!("{DIM}{address}{RESET}");
}

pub fn render_error(message: &str) {
    eprintln!("{RED}Error: {message}{RESET}");
}

pub fn print_banner() {
    println!("{BOLD}Wallet Token Analyzer{RESET}");
    println!("Analyze your DeFi positions across multiple networks");
    println!();
}

/// Numeric view of a decoded decimal string; the unbounded health factor
/// maps to infinity.
pub fn parse_amount(value: &str) -> f64 {
    if value == units::UNBOUNDED_HEALTH_FACTOR {
        return f64::INFINITY;
    }
    value.parse().unwrap_or(0.0)
}

pub fn shorten_address(address: &str) -> String {
    if address.len() <= 10 {
        return address.to_string();
    }
    format!("{}...{}", &address[..6], &address[address.len() - 4..])
}

pub fn format_currency(amount: f64) -> String {
    let fixed = format!("{amount:.2}");
    match fixed.split_once('.') {
        Some((dollars, cents)) => format!("${}.{}", group_thousands(dollars), cents),
        None => format!("${fixed}"),
    }
}

pub fn format_percentage(value: f64) -> String {
    format!("{value:.2}%")
}

pub fn format_health_factor(health_factor: f64) -> String {
    if health_factor.is_infinite() {
        return units::UNBOUNDED_HEALTH_FACTOR.to_string();
    }
    format!("{health_factor:.2}")
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use aave_client::UserAccountData;

    use super::*;

    fn position(collateral: &str, health_factor: &str) -> UserPosition {
        UserPosition {
            account_data: UserAccountData {
                total_collateral_base: collateral.to_string(),
                total_debt_base: "0.00000000".to_string(),
                available_borrows_base: "0.00000000".to_string(),
                current_liquidation_threshold: "0.00".to_string(),
                ltv: "0.00".to_string(),
                health_factor: health_factor.to_string(),
            },
            network: "Arbitrum One".to_string(),
            user_address: "0xBeb18cbbAD4Bb3586018D45c02047a2DD5777EaF".to_string(),
        }
    }

    #[test]
    fn zero_collateral_selects_the_empty_state_branch() {
        assert!(!has_active_position(&position("0.00000000", "∞")));
        assert!(has_active_position(&position("500.00000000", "1.31")));
    }

    #[test]
    fn collateral_renders_in_currency_form() {
        assert_eq!(format_currency(parse_amount("500.00000000")), "$500.00");
        assert_eq!(format_currency(1234567.891), "$1,234,567.89");
        assert_eq!(format_currency(0.0), "$0.00");
    }

    #[test]
    fn tier_boundaries_follow_the_three_tier_policy() {
        assert_eq!(HealthTier::for_factor(2.0), HealthTier::Healthy);
        assert_eq!(HealthTier::for_factor(1.5), HealthTier::Moderate);
        assert_eq!(HealthTier::for_factor(1.49), HealthTier::AtRisk);
        assert_eq!(HealthTier::for_factor(f64::INFINITY), HealthTier::Healthy);
        assert_eq!(HealthTier::for_factor(2.0).label(), "Healthy");
        assert_eq!(HealthTier::for_factor(1.5).label(), "Moderate");
        assert_eq!(HealthTier::for_factor(0.9).label(), "At Risk");
    }

    #[test]
    fn unbounded_health_factor_round_trips_as_infinity() {
        let parsed = parse_amount("∞");
        assert!(parsed.is_infinite());
        assert_eq!(format_health_factor(parsed), "∞");
        assert_eq!(format_health_factor(1.311111), "1.31");
    }

    #[test]
    fn addresses_shorten_to_prefix_and_suffix() {
        assert_eq!(
            shorten_address("0xBeb18cbbAD4Bb3586018D45c02047a2DD5777EaF"),
            "0xBeb1...7EaF"
        );
        assert_eq!(shorten_address("0x1234"), "0x1234");
    }

    #[test]
    fn percentages_render_with_two_decimals() {
        assert_eq!(format_percentage(77.73), "77.73%");
        assert_eq!(format_percentage(0.0), "0.00%");
    }
}
