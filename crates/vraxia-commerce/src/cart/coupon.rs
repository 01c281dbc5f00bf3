//! Coupon validation.
//!
//! Coupons are immutable inputs: validation never mutates the usage
//! counter. Bumping `times_used` after a placed order is the coupon
//! bookkeeper's concern, outside this core.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A coupon definition as delivered by the coupon source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coupon {
    /// Code, stored normalized (upper-case).
    pub code: String,
    /// Percentage off the subtotal, 0-100.
    pub discount_percent: f64,
    /// Instant after which the coupon no longer applies.
    pub expires_at: DateTime<Utc>,
    /// Maximum number of redemptions; `None` means unlimited.
    pub usage_limit: Option<i64>,
    /// Redemptions so far.
    pub times_used: i64,
}

impl Coupon {
    /// Create a coupon with an unlimited usage budget.
    pub fn new(code: impl Into<String>, discount_percent: f64, expires_at: DateTime<Utc>) -> Self {
        Self {
            code: normalize_code(&code.into()),
            discount_percent,
            expires_at,
            usage_limit: None,
            times_used: 0,
        }
    }

    /// Cap the number of redemptions.
    pub fn with_usage_limit(mut self, limit: i64) -> Self {
        self.usage_limit = Some(limit);
        self
    }

    /// Set the redemption count.
    pub fn with_times_used(mut self, times_used: i64) -> Self {
        self.times_used = times_used;
        self
    }

    /// Whether the coupon has expired at `now`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    /// Whether a finite usage budget has been spent.
    pub fn is_exhausted(&self) -> bool {
        self.usage_limit
            .map(|limit| self.times_used >= limit)
            .unwrap_or(false)
    }
}

/// Why a coupon code was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "reason")]
pub enum RejectReason {
    /// Blank input. Callers treat this as "no coupon applied", not as a
    /// user-facing failure.
    Empty,
    /// No coupon with that code.
    NotFound,
    /// Past its expiration instant.
    Expired,
    /// Finite usage budget spent.
    LimitReached {
        /// The budget, echoed for the user-facing message.
        limit: i64,
    },
}

impl RejectReason {
    /// The inline message shown to the shopper.
    pub fn message(&self) -> String {
        match self {
            RejectReason::Empty => String::new(),
            RejectReason::NotFound => "This coupon doesn't exist".to_string(),
            RejectReason::Expired => "Coupon has expired".to_string(),
            RejectReason::LimitReached { limit } => {
                format!("Coupon was available only for {} users", limit)
            }
        }
    }
}

/// Result of validating a coupon code.
///
/// Rejection is an expected outcome the caller displays inline, never an
/// error to propagate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "outcome")]
pub enum CouponOutcome {
    /// The coupon applies at this percentage.
    Accepted {
        /// Percentage off the subtotal, 0-100.
        discount_percent: f64,
    },
    /// The code was rejected.
    Rejected(RejectReason),
}

impl CouponOutcome {
    /// The accepted discount percentage, if any.
    pub fn discount_percent(&self) -> Option<f64> {
        match self {
            CouponOutcome::Accepted { discount_percent } => Some(*discount_percent),
            CouponOutcome::Rejected(_) => None,
        }
    }

    /// Whether the coupon was accepted.
    pub fn is_accepted(&self) -> bool {
        matches!(self, CouponOutcome::Accepted { .. })
    }
}

/// Normalize a raw coupon code: trim surrounding whitespace, upper-case.
pub fn normalize_code(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Validate a coupon code against the current clock.
///
/// `lookup` resolves a normalized code to its coupon definition. The checks
/// run in a fixed order and the first failure wins: empty, then existence,
/// then expiry, then usage limit. Callers rely on this order for consistent
/// user-facing messages.
pub fn validate<'a, F>(code: &str, now: DateTime<Utc>, lookup: F) -> CouponOutcome
where
    F: FnOnce(&str) -> Option<&'a Coupon>,
{
    let normalized = normalize_code(code);
    if normalized.is_empty() {
        return CouponOutcome::Rejected(RejectReason::Empty);
    }

    let Some(coupon) = lookup(&normalized) else {
        return CouponOutcome::Rejected(RejectReason::NotFound);
    };

    if coupon.is_expired(now) {
        return CouponOutcome::Rejected(RejectReason::Expired);
    }

    if let Some(limit) = coupon.usage_limit {
        if coupon.times_used >= limit {
            return CouponOutcome::Rejected(RejectReason::LimitReached { limit });
        }
    }

    CouponOutcome::Accepted {
        discount_percent: coupon.discount_percent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 8, 1, 12, 0, 0).unwrap()
    }

    fn summer20() -> Coupon {
        Coupon::new("SUMMER20", 20.0, Utc.with_ymd_and_hms(2025, 9, 30, 23, 59, 59).unwrap())
            .with_usage_limit(100)
            .with_times_used(45)
    }

    #[test]
    fn test_valid_coupon_accepted() {
        let coupons = [summer20()];
        let outcome = validate("SUMMER20", now(), |code| {
            coupons.iter().find(|c| c.code == code)
        });
        assert_eq!(outcome, CouponOutcome::Accepted { discount_percent: 20.0 });
    }

    #[test]
    fn test_code_is_normalized() {
        let coupons = [summer20()];
        let outcome = validate("  summer20 ", now(), |code| {
            coupons.iter().find(|c| c.code == code)
        });
        assert!(outcome.is_accepted());
    }

    #[test]
    fn test_empty_code_is_not_a_lookup() {
        let lookup = |_: &str| -> Option<&'static Coupon> {
            panic!("lookup must not run for an empty code")
        };
        let outcome = validate("   ", now(), lookup);
        assert_eq!(outcome, CouponOutcome::Rejected(RejectReason::Empty));
    }

    #[test]
    fn test_unknown_code_rejected() {
        let coupons = [summer20()];
        let outcome = validate("NOPE", now(), |code| {
            coupons.iter().find(|c| c.code == code)
        });
        assert_eq!(outcome, CouponOutcome::Rejected(RejectReason::NotFound));
    }

    #[test]
    fn test_expired_rejected_regardless_of_usage() {
        // Plenty of budget left, but past the expiration instant.
        let coupons = [Coupon::new("OLD10", 10.0, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
            .with_usage_limit(100)];
        let outcome = validate("OLD10", now(), |code| {
            coupons.iter().find(|c| c.code == code)
        });
        assert_eq!(outcome, CouponOutcome::Rejected(RejectReason::Expired));
    }

    #[test]
    fn test_limit_reached_rejected() {
        let coupons = [summer20().with_times_used(100)];
        let outcome = validate("SUMMER20", now(), |code| {
            coupons.iter().find(|c| c.code == code)
        });
        assert_eq!(
            outcome,
            CouponOutcome::Rejected(RejectReason::LimitReached { limit: 100 })
        );
    }

    #[test]
    fn test_expiry_checked_before_limit() {
        // Both expired and exhausted; expiry wins because it is checked first.
        let coupons = [Coupon::new("DEAD", 10.0, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
            .with_usage_limit(10)
            .with_times_used(10)];
        let outcome = validate("DEAD", now(), |code| {
            coupons.iter().find(|c| c.code == code)
        });
        assert_eq!(outcome, CouponOutcome::Rejected(RejectReason::Expired));
    }

    #[test]
    fn test_unlimited_coupon_ignores_times_used() {
        let coupons = [Coupon::new("VRAXIA5", 5.0, Utc.with_ymd_and_hms(2026, 12, 31, 0, 0, 0).unwrap())
            .with_times_used(120)];
        let outcome = validate("VRAXIA5", now(), |code| {
            coupons.iter().find(|c| c.code == code)
        });
        assert_eq!(outcome, CouponOutcome::Accepted { discount_percent: 5.0 });
    }

    #[test]
    fn test_reject_messages() {
        assert_eq!(RejectReason::NotFound.message(), "This coupon doesn't exist");
        assert_eq!(
            RejectReason::LimitReached { limit: 10 }.message(),
            "Coupon was available only for 10 users"
        );
    }
}
