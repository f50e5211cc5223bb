use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::PgExecutor;
use ulid::Ulid;

use crate::modules::turf::repository::Sport;

#[derive(Serialize, Deserialize, Clone, Debug, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub sport: String,
    pub turf_id: String,
    pub user_id: String,
    pub user_email: String,
    pub rating: i32,
    pub comment: String,
    pub created_at: NaiveDateTime,
}

pub struct CreateReviewPayload {
    pub sport: Sport,
    pub turf_id: String,
    pub user_id: String,
    pub user_email: String,
    pub rating: i32,
    pub comment: String,
}

pub enum Error {
    UnexpectedError,
}

/// Arithmetic mean of the ratings, rounded to one decimal, together with
/// the review count. None when there are no reviews to average.
pub fn average_rating(ratings: &[i32]) -> Option<(BigDecimal, i32)> {
    if ratings.is_empty() {
        return None;
    }

    let sum: i64 = ratings.iter().map(|rating| i64::from(*rating)).sum();
    let average = BigDecimal::from(sum) / BigDecimal::from(ratings.len() as i64);
    Some((average.round(1), ratings.len() as i32))
}

pub async fn create<'e, E: PgExecutor<'e>>(
    e: E,
    payload: CreateReviewPayload,
) -> Result<Review, Error> {
    sqlx::query_as::<_, Review>(
        "
        INSERT INTO reviews (id, sport, turf_id, user_id, user_email, rating, comment)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.sport.to_string())
    .bind(payload.turf_id)
    .bind(payload.user_id)
    .bind(payload.user_email)
    .bind(payload.rating)
    .bind(payload.comment)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to create a review: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<Option<Review>, Error> {
    sqlx::query_as::<_, Review>("SELECT * FROM reviews WHERE id = $1")
        .bind(id.clone())
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while trying to fetch review {}: {}", id, err);
            Error::UnexpectedError
        })
}

pub async fn find_many_by_turf<'e, E: PgExecutor<'e>>(
    e: E,
    sport: Sport,
    turf_id: String,
) -> Result<Vec<Review>, Error> {
    sqlx::query_as::<_, Review>(
        "
        SELECT * FROM reviews
        WHERE sport = $1 AND turf_id = $2
        ORDER BY created_at DESC
        ",
    )
    .bind(sport.to_string())
    .bind(turf_id)
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to fetch reviews: {}", err);
        Error::UnexpectedError
    })
}

pub async fn delete_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<(), Error> {
    sqlx::query("DELETE FROM reviews WHERE id = $1")
        .bind(id.clone())
        .execute(e)
        .await
        .map(|_| ())
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to delete review {}: {}",
                id,
                err
            );
            Error::UnexpectedError
        })
}

pub async fn find_ratings_by_turf<'e, E: PgExecutor<'e>>(
    e: E,
    sport: Sport,
    turf_id: String,
) -> Result<Vec<i32>, Error> {
    sqlx::query_scalar::<_, i32>("SELECT rating FROM reviews WHERE sport = $1 AND turf_id = $2")
        .bind(sport.to_string())
        .bind(turf_id)
        .fetch_all(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while trying to fetch ratings: {}", err);
            Error::UnexpectedError
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn decimal(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    #[test]
    fn averages_to_one_decimal() {
        let (rating, count) = average_rating(&[5, 4]).unwrap();
        assert_eq!(rating, decimal("4.5"));
        assert_eq!(count, 2);
    }

    #[test]
    fn rounds_a_repeating_mean() {
        let (rating, count) = average_rating(&[4, 4, 5]).unwrap();
        assert_eq!(rating, decimal("4.3"));
        assert_eq!(count, 3);
    }

    #[test]
    fn a_single_review_is_its_own_average() {
        let (rating, count) = average_rating(&[1]).unwrap();
        assert_eq!(rating, decimal("1"));
        assert_eq!(count, 1);
    }

    #[test]
    fn no_reviews_means_no_average() {
        assert!(average_rating(&[]).is_none());
    }
}
