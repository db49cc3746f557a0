//! The view query engine.
//!
//! Pure, synchronous functions the presentation layer calls on every
//! filter-state change: dataset + criteria → result view. Nothing
//! here mutates the dataset; identical inputs always yield identical,
//! order-preserving results.

use crate::{
    customer::Customer,
    subscription::Subscription,
    types::{BillingCycle, Plan, Status},
};
use serde::{Deserialize, Serialize};

/// Rows per table page in the dashboard.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Assumed retention horizon, in billing periods, for lifetime value.
pub const LTV_HORIZON_PERIODS: f64 = 24.0;

/// Criteria for the customer table. `None` means "no constraint";
/// an empty search string matches everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomerFilter {
    pub search: String,
    pub plan: Option<Plan>,
    pub status: Option<Status>,
}

/// Criteria for the subscription table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SubscriptionFilter {
    pub search: String,
    pub plan: Option<Plan>,
    pub status: Option<Status>,
    pub billing_cycle: Option<BillingCycle>,
}

/// One page of a filtered collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

/// Select the customers matching every active criterion, preserving
/// input order. Search is a case-insensitive substring match over
/// name, email, and company.
pub fn filter_customers(customers: &[Customer], filter: &CustomerFilter) -> Vec<Customer> {
    let needle = filter.search.to_lowercase();
    customers
        .iter()
        .filter(|c| {
            let matches_search = needle.is_empty()
                || c.name.to_lowercase().contains(&needle)
                || c.email.to_lowercase().contains(&needle)
                || c.company.to_lowercase().contains(&needle);
            let matches_plan = filter.plan.map_or(true, |p| c.plan == p);
            let matches_status = filter.status.map_or(true, |s| c.status == s);
            matches_search && matches_plan && matches_status
        })
        .cloned()
        .collect()
}

/// Select the subscriptions matching every active criterion,
/// preserving input order. Search matches the customer name only.
pub fn filter_subscriptions(
    subscriptions: &[Subscription],
    filter: &SubscriptionFilter,
) -> Vec<Subscription> {
    let needle = filter.search.to_lowercase();
    subscriptions
        .iter()
        .filter(|s| {
            let matches_search = needle.is_empty() || s.customer_name.to_lowercase().contains(&needle);
            let matches_plan = filter.plan.map_or(true, |p| s.plan == p);
            let matches_status = filter.status.map_or(true, |st| s.status == st);
            let matches_cycle = filter.billing_cycle.map_or(true, |b| s.billing_cycle == b);
            matches_search && matches_plan && matches_status && matches_cycle
        })
        .cloned()
        .collect()
}

/// Slice one page out of a collection.
///
/// `total_pages = ceil(len / page_size)`, with a floor of 1: an empty
/// collection reports a single empty page rather than zero pages.
/// `page` is clamped into `[1, total_pages]`, so out-of-range page
/// numbers never panic and never produce an out-of-range slice.
///
/// Panics if `page_size` is 0 — page size is a positive constant at
/// every call site, not user input.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Page<T> {
    assert!(page_size > 0, "page_size must be > 0");

    let total_pages = items.len().div_ceil(page_size).max(1);
    let current_page = page.clamp(1, total_pages);
    let start = (current_page - 1) * page_size;
    let end = (start + page_size).min(items.len());
    let page_items = if start >= items.len() {
        Vec::new()
    } else {
        items[start..end].to_vec()
    };

    Page {
        items: page_items,
        current_page,
        total_pages,
        total_items: items.len(),
    }
}

/// Mean subscription amount projected over the assumed retention
/// horizon. Returns 0.0 for an empty collection.
pub fn average_lifetime_value(subscriptions: &[Subscription]) -> f64 {
    if subscriptions.is_empty() {
        return 0.0;
    }
    let total: f64 = subscriptions.iter().map(|s| s.amount).sum();
    total / subscriptions.len() as f64 * LTV_HORIZON_PERIODS
}

/// Monthly vs yearly subscription counts for the billing-cycle chart.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CycleBreakdown {
    pub monthly: usize,
    pub yearly: usize,
}

pub fn billing_cycle_breakdown(subscriptions: &[Subscription]) -> CycleBreakdown {
    let monthly = subscriptions
        .iter()
        .filter(|s| s.billing_cycle == BillingCycle::Monthly)
        .count();
    CycleBreakdown {
        monthly,
        yearly: subscriptions.len() - monthly,
    }
}
