use anyhow::{Result, anyhow};
use chrono::Utc;

use synova_db::{Database, parse_timestamp};
use synova_types::Tier;

/// Outcome of the per-user quota gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuotaDecision {
    Allowed,
    Exhausted,
    UnknownUser,
}

/// Daily-quota gate for the query pipeline.
///
/// Unmetered tiers always pass once the user record exists. Metered tiers get
/// the UTC-midnight rollover applied first: the first check on a calendar day
/// after `last_reset` zeroes the stored counter, then the counter is compared
/// against `daily_quota`.
pub fn check_quota(
    db: &Database,
    user_id: &str,
    tier: Tier,
    daily_quota: i64,
) -> Result<QuotaDecision> {
    let Some(user) = db.get_user_by_id(user_id)? else {
        return Ok(QuotaDecision::UnknownUser);
    };

    if !tier.is_metered() {
        return Ok(QuotaDecision::Allowed);
    }

    let last_reset = parse_timestamp(&user.last_reset)
        .ok_or_else(|| anyhow!("corrupt last_reset '{}' for user {}", user.last_reset, user.id))?;

    let mut count = user.message_count;
    if Utc::now().date_naive() > last_reset.date_naive() {
        db.reset_message_count(user_id)?;
        count = 0;
    }

    if count < daily_quota {
        Ok(QuotaDecision::Allowed)
    } else {
        Ok(QuotaDecision::Exhausted)
    }
}
