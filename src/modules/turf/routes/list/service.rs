use super::types::{request, response};
use crate::modules::turf::repository::{self, Sport, Turf};
use crate::types::Context;
use bigdecimal::BigDecimal;
use std::sync::Arc;

fn parse_available(raw: &str) -> bool {
    raw == "true" || raw == "1"
}

fn parse_price(raw: Option<&String>) -> Option<BigDecimal> {
    raw.and_then(|value| value.parse::<i64>().ok())
        .map(BigDecimal::from)
}

fn within_price_range(turf: &Turf, min: Option<&BigDecimal>, max: Option<&BigDecimal>) -> bool {
    if let Some(min) = min {
        if turf.price_per_hour < *min {
            return false;
        }
    }
    if let Some(max) = max {
        if turf.price_per_hour > *max {
            return false;
        }
    }
    true
}

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let sport = payload
        .sport
        .parse::<Sport>()
        .map_err(|_| response::Error::InvalidSport)?;

    let filters = repository::FindManyFilters {
        city: payload.filters.city.clone(),
        available: payload.filters.available.as_deref().map(parse_available),
    };

    let turfs = repository::find_many(&ctx.db_conn.pool, sport, filters)
        .await
        .map_err(|_| response::Error::FailedToFetchTurfs)?;

    // Price bounds are applied over the fetched set; unparseable bounds are
    // ignored.
    let min = parse_price(payload.filters.min_price.as_ref());
    let max = parse_price(payload.filters.max_price.as_ref());
    let turfs = turfs
        .into_iter()
        .filter(|turf| within_price_range(turf, min.as_ref(), max.as_ref()))
        .collect();

    Ok(response::Success::Turfs(turfs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn turf(price: i64) -> Turf {
        Turf {
            id: String::from("01J0000000000000000000000"),
            sport: String::from("football"),
            name: String::from("Green Arena"),
            address: String::from("12 Main Road"),
            city: String::from("Pune"),
            image: String::new(),
            price_per_hour: BigDecimal::from(price),
            facilities: vec![],
            size: String::new(),
            description: String::new(),
            owner_id: String::new(),
            available: true,
            rating: BigDecimal::from(0),
            total_reviews: 0,
            created_at: NaiveDateTime::default(),
            updated_at: None,
        }
    }

    #[test]
    fn keeps_turfs_inside_the_price_range() {
        let min = BigDecimal::from(500);
        let max = BigDecimal::from(1500);
        assert!(within_price_range(&turf(1000), Some(&min), Some(&max)));
        assert!(!within_price_range(&turf(400), Some(&min), Some(&max)));
        assert!(!within_price_range(&turf(2000), Some(&min), Some(&max)));
    }

    #[test]
    fn missing_bounds_keep_everything() {
        assert!(within_price_range(&turf(1), None, None));
    }

    #[test]
    fn unparseable_bounds_are_ignored() {
        assert_eq!(parse_price(Some(&String::from("abc"))), None);
        assert_eq!(parse_price(Some(&String::from("750"))), Some(BigDecimal::from(750)));
    }

    #[test]
    fn parses_the_available_flag() {
        assert!(parse_available("true"));
        assert!(parse_available("1"));
        assert!(!parse_available("false"));
        assert!(!parse_available("yes"));
    }
}
