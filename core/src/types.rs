//! Shared domain vocabulary used across the entire crate.

use serde::{Deserialize, Serialize};

/// A stable customer identifier ("cus_000042").
pub type CustomerId = String;

/// A stable subscription identifier ("sub_000007").
pub type SubscriptionId = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Plan {
    Free,
    Basic,
    Pro,
    Enterprise,
}

impl Plan {
    /// The canonical plan-to-price table (USD per month).
    /// Customer MRR and subscription amounts must BOTH derive from
    /// this table — no independent price drift.
    pub fn monthly_price(&self) -> f64 {
        match self {
            Self::Free => 0.0,
            Self::Basic => 29.0,
            Self::Pro => 79.0,
            Self::Enterprise => 299.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Free => "Free",
            Self::Basic => "Basic",
            Self::Pro => "Pro",
            Self::Enterprise => "Enterprise",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Active,
    Trial,
    Canceled,
    PastDue,
    Churned,
}

impl Status {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Trial => "Trial",
            Self::Canceled => "Canceled",
            Self::PastDue => "Past Due",
            Self::Churned => "Churned",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingCycle {
    Monthly,
    Yearly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Segment {
    Smb,
    Enterprise,
}

impl Segment {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Smb => "SMB",
            Self::Enterprise => "Enterprise",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Card,
    Invoice,
}
