//! Generator configuration.
//!
//! The defaults describe the canonical dashboard dataset (120
//! customers, 10 recent samples, a 12-month series). A JSON file can
//! override any field; unknown fields are rejected so typos surface
//! instead of silently falling back to defaults.

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Customers in the generated population.
    pub customer_count: usize,
    /// Entries in the recent-subscription feed.
    pub recent_subscription_count: usize,
    /// Points in each monthly series.
    pub series_months: usize,
    /// MRR carried into the first series month.
    pub base_mrr: f64,
    /// Probability a subscription bills yearly (remainder bill monthly).
    pub yearly_share: f64,
    /// Probability a subscription pays by invoice (remainder pay by card).
    pub invoice_share: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            customer_count: 120,
            recent_subscription_count: 10,
            series_months: 12,
            base_mrr: 50_000.0,
            yearly_share: 0.4,
            invoice_share: 0.2,
        }
    }
}

impl GeneratorConfig {
    pub fn from_json_str(raw: &str) -> CoreResult<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: &str) -> CoreResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    fn validate(&self) -> CoreResult<()> {
        if self.customer_count == 0 {
            return Err(CoreError::Config("customer_count must be > 0".into()));
        }
        if self.series_months == 0 {
            return Err(CoreError::Config("series_months must be > 0".into()));
        }
        for (name, share) in [
            ("yearly_share", self.yearly_share),
            ("invoice_share", self.invoice_share),
        ] {
            if !(0.0..=1.0).contains(&share) {
                return Err(CoreError::Config(format!("{name} must be within [0, 1]")));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_canonical_shape() {
        let config = GeneratorConfig::default();
        assert_eq!(config.customer_count, 120);
        assert_eq!(config.recent_subscription_count, 10);
        assert_eq!(config.series_months, 12);
    }

    #[test]
    fn json_overrides_apply() {
        let config = GeneratorConfig::from_json_str(r#"{"customer_count": 40}"#).unwrap();
        assert_eq!(config.customer_count, 40);
        assert_eq!(config.series_months, 12, "untouched fields keep defaults");
    }

    #[test]
    fn out_of_range_share_is_rejected() {
        let err = GeneratorConfig::from_json_str(r#"{"yearly_share": 1.5}"#);
        assert!(err.is_err(), "yearly_share=1.5 should fail validation");
    }

    #[test]
    fn unknown_field_is_rejected() {
        let err = GeneratorConfig::from_json_str(r#"{"customer_cuont": 40}"#);
        assert!(err.is_err(), "typoed field should be rejected");
    }
}
