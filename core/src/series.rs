//! Time-series aggregates and headline figures for the dashboard.
//!
//! The MRR and user-growth series are random walks drawn from a stage
//! RNG. The revenue/acquisition/cohort/KPI figures are fixed seed
//! data with no random component.

use crate::{config::GeneratorConfig, rng::GeneratorRng};
use serde::{Deserialize, Serialize};

pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// One month of the MRR waterfall.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MrrPoint {
    pub month: String,
    pub new_mrr: f64,
    pub expansion: f64,
    pub churn: f64,
    /// Running total: previous total + new + expansion − churn.
    pub total: f64,
}

/// One month of per-plan user counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthPoint {
    pub month: String,
    pub free: u64,
    pub trial: u64,
    pub basic: u64,
    pub pro: u64,
    pub enterprise: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanRevenue {
    pub plan: String,
    pub revenue: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcquisitionSource {
    pub name: String,
    pub value: u64,
    /// Chart swatch color, as a CSS hex string.
    pub color: String,
}

/// Retention percentages for one acquisition cohort. Values are
/// non-increasing month over month; 0 marks a month the cohort has
/// not yet reached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CohortRow {
    pub cohort: String,
    pub retention: Vec<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KpiSummary {
    pub mrr: f64,
    pub mrr_growth: f64,
    pub active_users: u64,
    pub active_users_growth: f64,
    pub conversion_rate: f64,
    pub conversion_rate_change: f64,
    pub churn_rate: f64,
    pub churn_rate_change: f64,
}

/// Generate the monthly MRR series.
///
/// Draws are rounded to whole dollars before accumulating, so the
/// stored totals satisfy the recurrence exactly:
/// `total[i] == total[i-1] + new_mrr[i] + expansion[i] - churn[i]`.
pub fn generate_mrr_series(config: &GeneratorConfig, rng: &mut GeneratorRng) -> Vec<MrrPoint> {
    let mut points = Vec::with_capacity(config.series_months);
    let mut total = config.base_mrr;

    for i in 0..config.series_months {
        let new_mrr = rng.in_range(8_000.0, 12_000.0).round();
        let expansion = rng.in_range(2_000.0, 4_000.0).round();
        let churn = rng.in_range(1_500.0, 2_500.0).round();
        total = total + new_mrr + expansion - churn;

        points.push(MrrPoint {
            month: MONTH_LABELS[i % 12].to_string(),
            new_mrr,
            expansion,
            churn,
            total,
        });
    }

    points
}

/// Generate the monthly per-plan user-growth series. Each plan's count
/// takes a bounded random step per month (trial counts can shrink);
/// counts are clamped at zero.
pub fn generate_growth_series(config: &GeneratorConfig, rng: &mut GeneratorRng) -> Vec<GrowthPoint> {
    let mut points = Vec::with_capacity(config.series_months);
    let (mut free, mut trial, mut basic, mut pro, mut enterprise) = (200i64, 30i64, 40i64, 25i64, 5i64);

    for i in 0..config.series_months {
        free += rng.in_range_i64(10, 40);
        trial += rng.in_range_i64(-2, 8);
        basic += rng.in_range_i64(2, 10);
        pro += rng.in_range_i64(2, 8);
        enterprise += rng.in_range_i64(0, 3);

        points.push(GrowthPoint {
            month: MONTH_LABELS[i % 12].to_string(),
            free: free.max(0) as u64,
            trial: trial.max(0) as u64,
            basic: basic.max(0) as u64,
            pro: pro.max(0) as u64,
            enterprise: enterprise.max(0) as u64,
        });
    }

    points
}

/// Fixed revenue-by-plan figures for the plan breakdown chart.
pub fn revenue_by_plan() -> Vec<PlanRevenue> {
    [("Basic", 28_400.0), ("Pro", 52_300.0), ("Enterprise", 41_850.0)]
        .into_iter()
        .map(|(plan, revenue)| PlanRevenue {
            plan: plan.to_string(),
            revenue,
        })
        .collect()
}

/// Fixed acquisition-source counts for the channel chart.
pub fn acquisition_sources() -> Vec<AcquisitionSource> {
    [
        ("Organic", 1_847, "#10b981"),
        ("Paid", 982, "#6366f1"),
        ("Referral", 534, "#f59e0b"),
        ("Direct", 184, "#ef4444"),
    ]
    .into_iter()
    .map(|(name, value, color)| AcquisitionSource {
        name: name.to_string(),
        value,
        color: color.to_string(),
    })
    .collect()
}

/// Fixed cohort-retention table. Each row starts at 100% and decays;
/// trailing zeros mark months the cohort has not yet reached.
pub fn cohort_retention() -> Vec<CohortRow> {
    [
        ("Jan 2024", [100, 87, 79, 74, 71, 68]),
        ("Feb 2024", [100, 89, 82, 78, 75, 0]),
        ("Mar 2024", [100, 91, 85, 81, 0, 0]),
        ("Apr 2024", [100, 88, 83, 0, 0, 0]),
        ("May 2024", [100, 92, 0, 0, 0, 0]),
        ("Jun 2024", [100, 0, 0, 0, 0, 0]),
    ]
    .into_iter()
    .map(|(cohort, retention)| CohortRow {
        cohort: cohort.to_string(),
        retention: retention.to_vec(),
    })
    .collect()
}

/// Fixed headline KPI figures.
pub fn kpi_summary() -> KpiSummary {
    KpiSummary {
        mrr: 122_550.0,
        mrr_growth: 12.5,
        active_users: 3_547,
        active_users_growth: 8.3,
        conversion_rate: 24.7,
        conversion_rate_change: 3.2,
        churn_rate: 3.8,
        churn_rate_change: -0.5,
    }
}
