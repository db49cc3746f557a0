//! Subscription derivation and the recent-subscription feed.

use crate::{
    config::GeneratorConfig,
    customer::Customer,
    names::NameGenerator,
    rng::GeneratorRng,
    types::{BillingCycle, CustomerId, PaymentMethod, Plan, Status, SubscriptionId},
};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subscription {
    pub id: SubscriptionId,
    pub customer_id: CustomerId,
    pub customer_name: String,
    pub plan: Plan,
    pub billing_cycle: BillingCycle,
    /// Plan base price ×1 for monthly billing, ×10 for yearly.
    pub amount: f64,
    pub status: Status,
    pub next_payment: DateTime<Utc>,
    pub start_date: DateTime<Utc>,
    pub payment_method: PaymentMethod,
}

/// An entry in the "recent subscriptions" activity feed. Standalone
/// sample data, not tied to the customer population.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentSubscription {
    pub id: String,
    pub customer_name: String,
    pub plan: Plan,
    pub amount: f64,
    pub status: Status,
    pub date: DateTime<Utc>,
}

/// A customer qualifies for a subscription when they pay for a plan
/// and the subscription is still collectible.
pub fn qualifies(customer: &Customer) -> bool {
    customer.plan != Plan::Free && matches!(customer.status, Status::Active | Status::PastDue)
}

/// Derive subscriptions 1:1 from the qualifying subset of customers,
/// preserving customer name, plan, and status.
pub fn derive_subscriptions(
    customers: &[Customer],
    config: &GeneratorConfig,
    rng: &mut GeneratorRng,
    as_of: DateTime<Utc>,
) -> Vec<Subscription> {
    customers
        .iter()
        .filter(|c| qualifies(c))
        .enumerate()
        .map(|(i, customer)| {
            let billing_cycle = if rng.chance(config.yearly_share) {
                BillingCycle::Yearly
            } else {
                BillingCycle::Monthly
            };
            let (multiplier, days_to_payment) = match billing_cycle {
                BillingCycle::Monthly => (1.0, 30),
                BillingCycle::Yearly => (10.0, 365),
            };
            let payment_method = if rng.chance(config.invoice_share) {
                PaymentMethod::Invoice
            } else {
                PaymentMethod::Card
            };

            Subscription {
                id: format!("sub_{i:06}"),
                customer_id: customer.id.clone(),
                customer_name: customer.name.clone(),
                plan: customer.plan,
                billing_cycle,
                amount: customer.plan.monthly_price() * multiplier,
                status: customer.status,
                next_payment: as_of + Duration::days(days_to_payment),
                start_date: customer.registered_at,
                payment_method,
            }
        })
        .collect()
}

const RECENT_PLAN_MIX: [Plan; 3] = [Plan::Basic, Plan::Pro, Plan::Enterprise];

const RECENT_STATUS_MIX: [Status; 4] = [
    Status::Active,
    Status::Active,
    Status::Active,
    Status::Trial,
];

/// Generate the recent-subscription feed: one entry per trailing day,
/// newest first, paid plans only.
pub fn generate_recent_subscriptions(
    config: &GeneratorConfig,
    rng: &mut GeneratorRng,
    as_of: DateTime<Utc>,
) -> Vec<RecentSubscription> {
    (0..config.recent_subscription_count)
        .map(|i| {
            let first = NameGenerator::first_name(rng);
            let last = NameGenerator::last_name(rng);
            let plan = *rng.pick(&RECENT_PLAN_MIX);
            let status = *rng.pick(&RECENT_STATUS_MIX);

            RecentSubscription {
                id: format!("sub_recent_{i}"),
                customer_name: format!("{first} {last}"),
                plan,
                amount: plan.monthly_price(),
                status,
                date: as_of - Duration::days(i as i64),
            }
        })
        .collect()
}
