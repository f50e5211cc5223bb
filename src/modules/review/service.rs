use super::repository;
use crate::modules::turf;
use crate::modules::turf::repository::Sport;
use crate::types::Context;
use std::sync::Arc;

/// Recomputes a turf's stored rating from all of its reviews. Failures are
/// logged and swallowed: the review write that triggered the refresh has
/// already succeeded. With no reviews left the stored rating is kept as is.
pub async fn refresh_turf_rating(ctx: Arc<Context>, sport: Sport, turf_id: String) {
    let ratings =
        match repository::find_ratings_by_turf(&ctx.db_conn.pool, sport, turf_id.clone()).await {
            Ok(ratings) => ratings,
            Err(_) => {
                tracing::error!("Skipping rating refresh for turf {}", turf_id);
                return;
            }
        };

    let Some((rating, total_reviews)) = repository::average_rating(&ratings) else {
        return;
    };

    if turf::repository::update_rating(&ctx.db_conn.pool, turf_id.clone(), rating, total_reviews)
        .await
        .is_err()
    {
        tracing::error!("Failed to store refreshed rating for turf {}", turf_id);
    }
}
