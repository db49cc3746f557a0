//! Dataset assembly — the entry point for generation.
//!
//! EXECUTION ORDER (fixed, documented, never reordered):
//!   1. Customers
//!   2. Subscriptions (derived from the customer population)
//!   3. Recent-subscription feed
//!   4. MRR series
//!   5. User-growth series
//!   6. Fixed aggregates (revenue by plan, acquisition, cohorts, KPIs)
//!
//! RULES:
//!   - Each stage draws from its own RNG stream out of the RngBank,
//!     so adding a stage never perturbs existing stages' streams.
//!   - The returned dataset is immutable: queries derive views from
//!     it and never write back.

use crate::{
    config::GeneratorConfig,
    customer::{generate_customers, Customer},
    rng::{RngBank, StageSlot},
    series::{
        acquisition_sources, cohort_retention, generate_growth_series, generate_mrr_series,
        kpi_summary, revenue_by_plan, AcquisitionSource, CohortRow, GrowthPoint, KpiSummary,
        MrrPoint, PlanRevenue,
    },
    subscription::{
        derive_subscriptions, generate_recent_subscriptions, RecentSubscription, Subscription,
    },
    types::Status,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything the dashboard renders, generated once per process start
/// and read-only thereafter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    pub customers: Vec<Customer>,
    pub subscriptions: Vec<Subscription>,
    pub recent_subscriptions: Vec<RecentSubscription>,
    pub mrr_series: Vec<MrrPoint>,
    pub growth_series: Vec<GrowthPoint>,
    pub revenue_by_plan: Vec<PlanRevenue>,
    pub acquisition_sources: Vec<AcquisitionSource>,
    pub cohorts: Vec<CohortRow>,
    pub kpis: KpiSummary,
}

impl Dataset {
    /// Build a full dataset from a master seed and an anchor instant.
    ///
    /// Total function: every seed yields a valid dataset. All dates
    /// are relative to `as_of` so callers (and tests) control time.
    pub fn generate(config: &GeneratorConfig, seed: u64, as_of: DateTime<Utc>) -> Dataset {
        let bank = RngBank::new(seed);

        let mut rng = bank.for_stage(StageSlot::Customers);
        let customers = generate_customers(config, &mut rng, as_of);

        let mut rng = bank.for_stage(StageSlot::Subscriptions);
        let subscriptions = derive_subscriptions(&customers, config, &mut rng, as_of);

        let mut rng = bank.for_stage(StageSlot::RecentSubscriptions);
        let recent_subscriptions = generate_recent_subscriptions(config, &mut rng, as_of);

        let mut rng = bank.for_stage(StageSlot::MrrSeries);
        let mrr_series = generate_mrr_series(config, &mut rng);

        let mut rng = bank.for_stage(StageSlot::UserGrowth);
        let growth_series = generate_growth_series(config, &mut rng);

        log::info!(
            "dataset generated: {} customers, {} subscriptions, {} series months (seed={seed})",
            customers.len(),
            subscriptions.len(),
            mrr_series.len()
        );

        Dataset {
            customers,
            subscriptions,
            recent_subscriptions,
            mrr_series,
            growth_series,
            revenue_by_plan: revenue_by_plan(),
            acquisition_sources: acquisition_sources(),
            cohorts: cohort_retention(),
            kpis: kpi_summary(),
        }
    }

    /// Resolve a customer by id.
    pub fn customer_by_id(&self, id: &str) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id == id)
    }

    /// Sum of MRR contributions across active customers.
    pub fn active_mrr(&self) -> f64 {
        self.customers
            .iter()
            .filter(|c| c.status == Status::Active)
            .map(|c| c.mrr)
            .sum()
    }
}
