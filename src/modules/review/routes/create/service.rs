use super::types::{request, response};
use crate::modules::auth::middleware::Auth;
use crate::modules::review::{repository, service as review_service};
use crate::modules::turf::repository::Sport;
use crate::types::Context;
use serde_json::Value;
use std::sync::Arc;

const MAX_COMMENT_LENGTH: usize = 1000;

/// Coerces the submitted rating the way the SPA does: numbers and numeric
/// strings are accepted, and the value must be an integer in [1, 5].
fn parse_rating(raw: &Value) -> Option<i32> {
    let number = match raw {
        Value::Number(number) => number.as_f64()?,
        Value::String(raw) => raw.parse::<f64>().ok()?,
        _ => return None,
    };

    if number.fract() != 0.0 || !(1.0..=5.0).contains(&number) {
        return None;
    }
    Some(number as i32)
}

fn truncate_comment(comment: String) -> String {
    comment.chars().take(MAX_COMMENT_LENGTH).collect()
}

pub async fn service(
    ctx: Arc<Context>,
    auth: Auth,
    payload: request::Payload,
) -> response::Response {
    let (sport, turf_id, rating, comment) = match (
        payload.sport,
        payload.turf_id,
        payload.rating,
        payload.comment,
    ) {
        (Some(sport), Some(turf_id), Some(rating), Some(comment)) if !comment.is_empty() => {
            (sport, turf_id, rating, comment)
        }
        _ => return Err(response::Error::MissingFields),
    };

    let sport = sport
        .parse::<Sport>()
        .map_err(|_| response::Error::InvalidSport)?;
    let rating = parse_rating(&rating).ok_or(response::Error::InvalidRating)?;

    let review = repository::create(
        &ctx.db_conn.pool,
        repository::CreateReviewPayload {
            sport,
            turf_id: turf_id.clone(),
            user_id: auth.user.uid.clone(),
            user_email: auth.user.email.clone(),
            rating,
            comment: truncate_comment(comment),
        },
    )
    .await
    .map_err(|_| response::Error::FailedToCreateReview)?;

    review_service::refresh_turf_rating(ctx, sport, turf_id).await;

    Ok(response::Success::ReviewCreated(review))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_integer_ratings_between_one_and_five() {
        assert_eq!(parse_rating(&json!(1)), Some(1));
        assert_eq!(parse_rating(&json!(5)), Some(5));
        assert_eq!(parse_rating(&json!(3)), Some(3));
    }

    #[test]
    fn coerces_numeric_strings() {
        assert_eq!(parse_rating(&json!("4")), Some(4));
        assert_eq!(parse_rating(&json!("4.5")), None);
        assert_eq!(parse_rating(&json!("four")), None);
    }

    #[test]
    fn rejects_out_of_range_ratings() {
        assert_eq!(parse_rating(&json!(0)), None);
        assert_eq!(parse_rating(&json!(6)), None);
        assert_eq!(parse_rating(&json!(-3)), None);
    }

    #[test]
    fn rejects_non_integer_ratings() {
        assert_eq!(parse_rating(&json!(4.5)), None);
        assert_eq!(parse_rating(&json!(true)), None);
        assert_eq!(parse_rating(&json!(null)), None);
    }

    #[test]
    fn long_comments_are_truncated() {
        let comment = "x".repeat(1200);
        assert_eq!(truncate_comment(comment).len(), MAX_COMMENT_LENGTH);
    }
}
