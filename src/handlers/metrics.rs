use axum::{
    Json,
    extract::{Extension, State},
};

use crate::{
    error::{Error, Result},
    middleware::auth::AuthenticatedUser,
    services::metrics::{self, Metrics},
    state::AppState,
};

/// GET /api/metrics
///
/// Computes the authenticated user's reading metrics fresh per request:
/// books finished in the current calendar month and the mean of non-null
/// ratings rounded to one decimal (0.0 when nothing is rated).
///
/// # HTTP Status Codes
/// - `200 OK`: `{progress_mensal_count, performance_anual}`
/// - `401 UNAUTHORIZED`: No valid session
/// - `500 INTERNAL_SERVER_ERROR`: Database error
pub async fn get_metrics(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
) -> Result<Json<Metrics>> {
    let mut conn = state.pool.acquire().await.map_err(|e| {
        Error::Internal(format!("Failed to acquire database connection: {}", e))
    })?;

    let metrics = metrics::compute_metrics(&mut conn, auth_user.id).await?;

    Ok(Json(metrics))
}
