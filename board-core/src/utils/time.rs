use time::OffsetDateTime;

/// Istante corrente in UTC, troncato ai microsecondi come un TIMESTAMPTZ di Postgres.
pub fn now_timestamp() -> OffsetDateTime {
    let now = OffsetDateTime::now_utc();
    now.replace_nanosecond(now.nanosecond() / 1_000 * 1_000)
        .unwrap_or(now)
}
