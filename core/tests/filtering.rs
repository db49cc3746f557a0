//! View query engine tests: filtering semantics.

use chrono::{DateTime, TimeZone, Utc};
use subdash_core::{
    config::GeneratorConfig,
    customer::Customer,
    dataset::Dataset,
    query::{filter_customers, filter_subscriptions, CustomerFilter, SubscriptionFilter},
    types::{BillingCycle, Plan, Segment, Status},
};

fn anchor() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
}

fn build(seed: u64) -> Dataset {
    Dataset::generate(&GeneratorConfig::default(), seed, anchor())
}

fn sample_customer(id: &str, name: &str, plan: Plan, status: Status) -> Customer {
    Customer {
        id: id.to_string(),
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        company: "TechCorp Inc".to_string(),
        plan,
        status,
        mrr: plan.monthly_price(),
        registered_at: anchor(),
        segment: Segment::Smb,
        churn_risk: None,
        trial_progress: None,
    }
}

#[test]
fn empty_criteria_is_the_identity() {
    let dataset = build(42);
    let filtered = filter_customers(&dataset.customers, &CustomerFilter::default());
    assert_eq!(filtered.len(), dataset.customers.len());
    for (original, kept) in dataset.customers.iter().zip(filtered.iter()) {
        assert_eq!(original.id, kept.id, "Identity filter must preserve every record in order");
    }

    let filtered = filter_subscriptions(&dataset.subscriptions, &SubscriptionFilter::default());
    assert_eq!(filtered.len(), dataset.subscriptions.len());
}

#[test]
fn result_is_an_order_preserving_subsequence() {
    let dataset = build(42);
    let filter = CustomerFilter {
        plan: Some(Plan::Pro),
        ..Default::default()
    };
    let filtered = filter_customers(&dataset.customers, &filter);

    // Every kept id appears in the original, in the same relative order.
    let original_ids: Vec<&str> = dataset.customers.iter().map(|c| c.id.as_str()).collect();
    let mut cursor = 0;
    for kept in &filtered {
        let position = original_ids[cursor..]
            .iter()
            .position(|id| *id == kept.id)
            .unwrap_or_else(|| panic!("Foreign or reordered record: {}", kept.id));
        cursor += position + 1;
    }
}

#[test]
fn filtering_is_idempotent() {
    let dataset = build(42);
    let filter = CustomerFilter {
        search: "tech".to_string(),
        status: Some(Status::Active),
        ..Default::default()
    };
    let once = filter_customers(&dataset.customers, &filter);
    let twice = filter_customers(&once, &filter);
    assert_eq!(
        once.iter().map(|c| &c.id).collect::<Vec<_>>(),
        twice.iter().map(|c| &c.id).collect::<Vec<_>>(),
        "Filtering an already-filtered collection must be a no-op"
    );
}

#[test]
fn filtering_does_not_mutate_the_input() {
    let dataset = build(42);
    let before = serde_json::to_string(&dataset.customers).unwrap();
    let _ = filter_customers(
        &dataset.customers,
        &CustomerFilter {
            plan: Some(Plan::Enterprise),
            ..Default::default()
        },
    );
    let after = serde_json::to_string(&dataset.customers).unwrap();
    assert_eq!(before, after, "Input collection must be untouched");
}

#[test]
fn plan_and_status_criteria_select_exactly() {
    let customers = vec![
        sample_customer("cus_000000", "Ann", Plan::Pro, Status::Active),
        sample_customer("cus_000001", "Bo", Plan::Free, Status::Trial),
    ];

    let by_plan = filter_customers(
        &customers,
        &CustomerFilter {
            plan: Some(Plan::Pro),
            ..Default::default()
        },
    );
    assert_eq!(by_plan.len(), 1);
    assert_eq!(by_plan[0].name, "Ann");

    let by_status = filter_customers(
        &customers,
        &CustomerFilter {
            status: Some(Status::Trial),
            ..Default::default()
        },
    );
    assert_eq!(by_status.len(), 1);
    assert_eq!(by_status[0].name, "Bo");
}

#[test]
fn search_matches_name_email_and_company_case_insensitively() {
    let customers = vec![
        sample_customer("cus_000000", "Ann", Plan::Pro, Status::Active),
        sample_customer("cus_000001", "Bo", Plan::Basic, Status::Active),
    ];

    let by_name = filter_customers(
        &customers,
        &CustomerFilter {
            search: "aNn".to_string(),
            ..Default::default()
        },
    );
    assert_eq!(by_name.len(), 1, "Search must be case-insensitive on names");

    let by_email = filter_customers(
        &customers,
        &CustomerFilter {
            search: "bo@example".to_string(),
            ..Default::default()
        },
    );
    assert_eq!(by_email.len(), 1, "Search must cover email");

    let by_company = filter_customers(
        &customers,
        &CustomerFilter {
            search: "TECHCORP".to_string(),
            ..Default::default()
        },
    );
    assert_eq!(by_company.len(), 2, "Search must cover company");
}

#[test]
fn criteria_compose_with_logical_and() {
    let dataset = build(42);
    let filter = CustomerFilter {
        plan: Some(Plan::Pro),
        status: Some(Status::Active),
        ..Default::default()
    };
    let filtered = filter_customers(&dataset.customers, &filter);
    assert!(!filtered.is_empty(), "Default dataset should contain active pro customers");
    for c in &filtered {
        assert_eq!(c.plan, Plan::Pro);
        assert_eq!(c.status, Status::Active);
    }
}

#[test]
fn subscription_filter_covers_billing_cycle() {
    let dataset = build(42);
    let filter = SubscriptionFilter {
        billing_cycle: Some(BillingCycle::Yearly),
        ..Default::default()
    };
    let filtered = filter_subscriptions(&dataset.subscriptions, &filter);
    assert!(!filtered.is_empty(), "Default dataset should contain yearly subscriptions");
    for s in &filtered {
        assert_eq!(s.billing_cycle, BillingCycle::Yearly);
    }
}

#[test]
fn subscription_search_matches_customer_name_only() {
    let dataset = build(42);
    let target = &dataset.subscriptions[0];
    let filter = SubscriptionFilter {
        search: target.customer_name.to_uppercase(),
        ..Default::default()
    };
    let filtered = filter_subscriptions(&dataset.subscriptions, &filter);
    assert!(
        filtered.iter().any(|s| s.id == target.id),
        "Search on the customer name must find the subscription"
    );
    for s in &filtered {
        assert!(
            s.customer_name
                .to_lowercase()
                .contains(&target.customer_name.to_lowercase()),
            "Matched on something other than the customer name: {}",
            s.id
        );
    }
}
