use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::{PgExecutor, QueryBuilder};
use std::str::FromStr;
use ulid::Ulid;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Sport {
    Football,
    Cricket,
    Basketball,
    Badminton,
}

pub const ALLOWED_SPORTS: [Sport; 4] = [
    Sport::Football,
    Sport::Cricket,
    Sport::Basketball,
    Sport::Badminton,
];

impl ToString for Sport {
    fn to_string(&self) -> String {
        match self {
            Sport::Football => String::from("football"),
            Sport::Cricket => String::from("cricket"),
            Sport::Basketball => String::from("basketball"),
            Sport::Badminton => String::from("badminton"),
        }
    }
}

impl FromStr for Sport {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "football" => Ok(Sport::Football),
            "cricket" => Ok(Sport::Cricket),
            "basketball" => Ok(Sport::Basketball),
            "badminton" => Ok(Sport::Badminton),
            _ => Err(format!("'{}' is not a valid Sport", s)),
        }
    }
}

pub fn allowed_sports_label() -> String {
    ALLOWED_SPORTS
        .iter()
        .map(|sport| sport.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Serialize, Deserialize, Clone, Debug, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Turf {
    pub id: String,
    pub sport: String,
    pub name: String,
    pub address: String,
    pub city: String,
    pub image: String,
    pub price_per_hour: BigDecimal,
    pub facilities: Vec<String>,
    pub size: String,
    pub description: String,
    pub owner_id: String,
    pub available: bool,
    pub rating: BigDecimal,
    pub total_reviews: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

pub struct CreateTurfPayload {
    pub sport: Sport,
    pub name: String,
    pub address: String,
    pub city: String,
    pub image: String,
    pub price_per_hour: BigDecimal,
    pub facilities: Vec<String>,
    pub size: String,
    pub description: String,
    pub owner_id: String,
}

#[derive(Default)]
pub struct UpdateTurfPayload {
    pub name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub image: Option<String>,
    pub price_per_hour: Option<BigDecimal>,
    pub facilities: Option<Vec<String>>,
    pub size: Option<String>,
    pub description: Option<String>,
    pub available: Option<bool>,
    pub owner_id: Option<String>,
}

#[derive(Clone, Default)]
pub struct FindManyFilters {
    pub city: Option<String>,
    pub available: Option<bool>,
}

pub enum Error {
    UnexpectedError,
}

pub async fn create<'e, E: PgExecutor<'e>>(
    e: E,
    payload: CreateTurfPayload,
) -> Result<Turf, Error> {
    sqlx::query_as::<_, Turf>(
        "
        INSERT INTO turfs (
            id,
            sport,
            name,
            address,
            city,
            image,
            price_per_hour,
            facilities,
            size,
            description,
            owner_id
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.sport.to_string())
    .bind(payload.name)
    .bind(payload.address)
    .bind(payload.city)
    .bind(payload.image)
    .bind(payload.price_per_hour)
    .bind(payload.facilities)
    .bind(payload.size)
    .bind(payload.description)
    .bind(payload.owner_id)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to create a turf: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_by_sport_and_id<'e, E: PgExecutor<'e>>(
    e: E,
    sport: Sport,
    id: String,
) -> Result<Option<Turf>, Error> {
    sqlx::query_as::<_, Turf>("SELECT * FROM turfs WHERE sport = $1 AND id = $2")
        .bind(sport.to_string())
        .bind(id.clone())
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while trying to fetch turf {}: {}", id, err);
            Error::UnexpectedError
        })
}

pub async fn find_many<'e, E: PgExecutor<'e>>(
    e: E,
    sport: Sport,
    filters: FindManyFilters,
) -> Result<Vec<Turf>, Error> {
    let mut query = QueryBuilder::new("SELECT * FROM turfs WHERE sport = ");
    query.push_bind(sport.to_string());

    if let Some(city) = filters.city {
        query.push(" AND city = ");
        query.push_bind(city);
    }
    if let Some(available) = filters.available {
        query.push(" AND available = ");
        query.push_bind(available);
    }
    query.push(" ORDER BY created_at DESC");

    query
        .build_query_as::<Turf>()
        .fetch_all(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while trying to fetch turfs: {}", err);
            Error::UnexpectedError
        })
}

pub async fn update_by_sport_and_id<'e, E: PgExecutor<'e>>(
    e: E,
    sport: Sport,
    id: String,
    payload: UpdateTurfPayload,
) -> Result<Option<Turf>, Error> {
    let mut query = QueryBuilder::new("UPDATE turfs SET updated_at = NOW()");

    if let Some(name) = payload.name {
        query.push(", name = ");
        query.push_bind(name);
    }
    if let Some(address) = payload.address {
        query.push(", address = ");
        query.push_bind(address);
    }
    if let Some(city) = payload.city {
        query.push(", city = ");
        query.push_bind(city);
    }
    if let Some(image) = payload.image {
        query.push(", image = ");
        query.push_bind(image);
    }
    if let Some(price_per_hour) = payload.price_per_hour {
        query.push(", price_per_hour = ");
        query.push_bind(price_per_hour);
    }
    if let Some(facilities) = payload.facilities {
        query.push(", facilities = ");
        query.push_bind(facilities);
    }
    if let Some(size) = payload.size {
        query.push(", size = ");
        query.push_bind(size);
    }
    if let Some(description) = payload.description {
        query.push(", description = ");
        query.push_bind(description);
    }
    if let Some(available) = payload.available {
        query.push(", available = ");
        query.push_bind(available);
    }
    if let Some(owner_id) = payload.owner_id {
        query.push(", owner_id = ");
        query.push_bind(owner_id);
    }

    query.push(" WHERE sport = ");
    query.push_bind(sport.to_string());
    query.push(" AND id = ");
    query.push_bind(id.clone());
    query.push(" RETURNING *");

    query
        .build_query_as::<Turf>()
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while trying to update turf {}: {}", id, err);
            Error::UnexpectedError
        })
}

pub async fn delete_by_sport_and_id<'e, E: PgExecutor<'e>>(
    e: E,
    sport: Sport,
    id: String,
) -> Result<(), Error> {
    sqlx::query("DELETE FROM turfs WHERE sport = $1 AND id = $2")
        .bind(sport.to_string())
        .bind(id.clone())
        .execute(e)
        .await
        .map(|_| ())
        .map_err(|err| {
            tracing::error!("Error occurred while trying to delete turf {}: {}", id, err);
            Error::UnexpectedError
        })
}

pub async fn find_by_owner_id<'e, E: PgExecutor<'e>>(
    e: E,
    owner_id: String,
) -> Result<Vec<Turf>, Error> {
    sqlx::query_as::<_, Turf>("SELECT * FROM turfs WHERE owner_id = $1 ORDER BY created_at DESC")
        .bind(owner_id.clone())
        .fetch_all(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to fetch turfs for owner {}: {}",
                owner_id,
                err
            );
            Error::UnexpectedError
        })
}

pub async fn count_by_sport<'e, E: PgExecutor<'e>>(e: E, sport: Sport) -> Result<i64, Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM turfs WHERE sport = $1")
        .bind(sport.to_string())
        .fetch_one(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while trying to count turfs: {}", err);
            Error::UnexpectedError
        })
}

pub async fn update_rating<'e, E: PgExecutor<'e>>(
    e: E,
    id: String,
    rating: BigDecimal,
    total_reviews: i32,
) -> Result<(), Error> {
    sqlx::query("UPDATE turfs SET rating = $2, total_reviews = $3 WHERE id = $1")
        .bind(id.clone())
        .bind(rating)
        .bind(total_reviews)
        .execute(e)
        .await
        .map(|_| ())
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to update rating for turf {}: {}",
                id,
                err
            );
            Error::UnexpectedError
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_allowed_sport() {
        for sport in ALLOWED_SPORTS {
            let label = sport.to_string();
            let parsed = match label.parse::<Sport>() {
                Ok(parsed) => parsed,
                Err(_) => panic!("expected '{}' to parse", label),
            };
            assert_eq!(parsed, sport);
        }
    }

    #[test]
    fn rejects_sports_outside_the_allow_list() {
        assert!("tennis".parse::<Sport>().is_err());
        assert!("Football".parse::<Sport>().is_err());
        assert!("".parse::<Sport>().is_err());
    }

    #[test]
    fn labels_the_allow_list_for_error_messages() {
        assert_eq!(
            allowed_sports_label(),
            "football, cricket, basketball, badminton"
        );
    }
}
