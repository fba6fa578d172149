use crate::DbConn;
use crate::{error::Result, queries::books};
use chrono::Local;
use serde::Serialize;

/// Aggregate reading statistics for one user.
///
/// Field names are the wire contract the dashboard widget consumes.
#[derive(Debug, Clone, Serialize)]
pub struct Metrics {
    /// Books finished within the current calendar month.
    pub progress_mensal_count: i64,
    /// Mean of all non-null ratings, rounded to one decimal; 0.0 when no
    /// book has been rated.
    pub performance_anual: f64,
}

/// Computes both aggregates fresh from the store; nothing is cached.
pub async fn compute_metrics(conn: &mut DbConn, user_id: i64) -> Result<Metrics> {
    let current_month = Local::now().format("%Y-%m").to_string();

    let progress_mensal_count = books::count_finished_with_prefix(conn, user_id, &current_month).await?;
    let performance_anual = books::average_rating(conn, user_id)
        .await?
        .map(round_to_one_decimal)
        .unwrap_or(0.0);

    Ok(Metrics {
        progress_mensal_count,
        performance_anual,
    })
}

fn round_to_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
