//! Customer population generation.

use crate::{
    config::GeneratorConfig,
    names::NameGenerator,
    rng::GeneratorRng,
    types::{CustomerId, Plan, Segment, Status},
};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Weighted draw slices. Relative frequency is expressed by
/// repetition, matching the dashboard's observed population mix.
const STATUS_MIX: [Status; 11] = [
    Status::Active,
    Status::Active,
    Status::Active,
    Status::Active,
    Status::Active,
    Status::Active,
    Status::Active,
    Status::Trial,
    Status::Trial,
    Status::Canceled,
    Status::PastDue,
];

const PLAN_MIX: [Plan; 7] = [
    Plan::Free,
    Plan::Basic,
    Plan::Basic,
    Plan::Pro,
    Plan::Pro,
    Plan::Pro,
    Plan::Enterprise,
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
    pub company: String,
    pub plan: Plan,
    pub status: Status,
    pub mrr: f64,
    pub registered_at: DateTime<Utc>,
    pub segment: Segment,
    /// Present only for active customers (0..100).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub churn_risk: Option<f64>,
    /// Present only for trialing customers (0..100).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trial_progress: Option<f64>,
}

/// Generate the customer population.
///
/// Postcondition: customers are sorted by registration date
/// descending (most recent first) — "recent activity" views depend
/// on this ordering. Registration dates fall within the trailing
/// year before `as_of`.
pub fn generate_customers(
    config: &GeneratorConfig,
    rng: &mut GeneratorRng,
    as_of: DateTime<Utc>,
) -> Vec<Customer> {
    let mut customers = Vec::with_capacity(config.customer_count);

    for i in 0..config.customer_count {
        let first = NameGenerator::first_name(rng);
        let last = NameGenerator::last_name(rng);
        let company = NameGenerator::company(rng);
        let plan = *rng.pick(&PLAN_MIX);
        let status = *rng.pick(&STATUS_MIX);

        // Enterprise plans are always the Enterprise segment; pro
        // plans split on a coin flip; everything else is SMB.
        let segment = if plan == Plan::Enterprise || (plan == Plan::Pro && rng.chance(0.5)) {
            Segment::Enterprise
        } else {
            Segment::Smb
        };

        let days_ago = rng.next_u64_below(365) as i64;
        let churn_risk = if status == Status::Active {
            Some(rng.next_f64() * 100.0)
        } else {
            None
        };
        let trial_progress = if status == Status::Trial {
            Some(rng.next_f64() * 100.0)
        } else {
            None
        };

        customers.push(Customer {
            id: format!("cus_{i:06}"),
            name: format!("{first} {last}"),
            email: NameGenerator::email(first, last, &company),
            company,
            plan,
            status,
            mrr: plan.monthly_price(),
            registered_at: as_of - Duration::days(days_ago),
            segment,
            churn_risk,
            trial_progress,
        });
    }

    customers.sort_by(|a, b| b.registered_at.cmp(&a.registered_at));
    customers
}
