use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_range, Validate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const PREFERRED_TIER: &str = "preferente";
pub const VIP_TIER: &str = "vip";

/// Discount rate per customer tier. Tiers that are not listed get no discount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiscountPolicy {
    rates: BTreeMap<String, f64>,
}

impl Default for DiscountPolicy {
    fn default() -> Self {
        let rates = BTreeMap::from([
            (PREFERRED_TIER.to_string(), 0.1),
            (VIP_TIER.to_string(), 0.2),
        ]);
        Self { rates }
    }
}

impl DiscountPolicy {
    pub fn from_rates(rates: impl IntoIterator<Item = (String, f64)>) -> Self {
        Self {
            rates: rates.into_iter().collect(),
        }
    }

    pub fn rate_for(&self, tier: &str) -> f64 {
        self.rates.get(tier).copied().unwrap_or(0.0)
    }

    pub fn apply(&self, price: f64, tier: &str) -> f64 {
        price * (1.0 - self.rate_for(tier))
    }

    pub fn tiers(&self) -> impl Iterator<Item = (&str, f64)> {
        self.rates.iter().map(|(tier, rate)| (tier.as_str(), *rate))
    }
}

impl Validate for DiscountPolicy {
    fn validate(&self) -> Result<()> {
        for (tier, rate) in &self.rates {
            validate_non_empty_string("discounts", tier)?;
            validate_range(&format!("discounts.{}", tier), *rate, 0.0, 1.0)?;
        }
        Ok(())
    }
}

/// Price after the default tier discount: 10% for "preferente", 20% for
/// "vip", full price for anything else.
pub fn calculate_discount(price: f64, tier: &str) -> f64 {
    DiscountPolicy::default().apply(price, tier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preferred() {
        assert_eq!(calculate_discount(100.0, "preferente"), 90.0);
    }

    #[test]
    fn test_vip() {
        assert_eq!(calculate_discount(200.0, "vip"), 160.0);
    }

    #[test]
    fn test_other_tiers_pay_full_price() {
        assert_eq!(calculate_discount(50.0, "normal"), 50.0);
        assert_eq!(calculate_discount(73.25, ""), 73.25);
        assert_eq!(calculate_discount(73.25, "VIP"), 73.25);
    }

    #[test]
    fn test_custom_policy() {
        let policy = DiscountPolicy::from_rates([("gold".to_string(), 0.5)]);

        assert_eq!(policy.apply(80.0, "gold"), 40.0);
        assert_eq!(policy.apply(80.0, "vip"), 80.0);
        assert!(policy.validate().is_ok());
    }

    #[test]
    fn test_policy_validation() {
        assert!(DiscountPolicy::default().validate().is_ok());
        assert!(DiscountPolicy::from_rates([("gold".to_string(), 1.2)])
            .validate()
            .is_err());
        assert!(DiscountPolicy::from_rates([(" ".to_string(), 0.1)])
            .validate()
            .is_err());
    }
}
