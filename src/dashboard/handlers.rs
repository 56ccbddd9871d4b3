/**
 * Dashboard Stats Handler
 *
 * GET /api/dashboard/stats. Five owner-scoped counts over disjoint
 * predicates, issued concurrently since they are read-only. The "today"
 * window is the server-local calendar day.
 */

use axum::{extract::State, response::Json};
use chrono::{DateTime, Duration, Local, NaiveTime, Utc};
use serde::Serialize;

use crate::contacts::db as contacts_db;
use crate::emails::db as emails_db;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::server::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub contacts: i64,
    pub emails: i64,
    pub unread_emails: i64,
    pub important_emails: i64,
    pub today_emails: i64,
}

/// The current local calendar day as a half-open UTC window.
fn today_window() -> (DateTime<Utc>, DateTime<Utc>) {
    let now = Local::now();
    // with_time is ambiguous around DST shifts; falling back to `now`
    // shrinks the window for that one hour a year rather than panicking.
    let start = now.with_time(NaiveTime::MIN).single().unwrap_or(now);
    let end = start + Duration::days(1);
    (start.with_timezone(&Utc), end.with_timezone(&Utc))
}

pub async fn get_stats(
    State(state): State<AppState>,
    AuthUser(auth): AuthUser,
) -> Result<Json<StatsResponse>, ApiError> {
    let (today_start, today_end) = today_window();
    let pool = &state.pool;
    let user_id = auth.user_id;

    let (contacts, emails, unread_emails, important_emails, today_emails) = tokio::try_join!(
        contacts_db::count_for_user(pool, user_id),
        emails_db::count_for_user(pool, user_id),
        emails_db::count_unread(pool, user_id),
        emails_db::count_important(pool, user_id),
        emails_db::count_received_between(pool, user_id, today_start, today_end),
    )?;

    Ok(Json(StatsResponse {
        contacts,
        emails,
        unread_emails,
        important_emails,
        today_emails,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_today_window_contains_now() {
        let (start, end) = today_window();
        let now = Utc::now();
        assert!(start <= now);
        assert!(now < end);
        assert!(end - start <= Duration::days(1));
    }
}
