use super::types::{request, response};
use crate::modules::turf::repository::{self, Sport};
use crate::types::Context;
use bigdecimal::{BigDecimal, FromPrimitive};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let sport = payload
        .sport
        .parse::<Sport>()
        .map_err(|_| response::Error::InvalidSport)?;

    let body = payload.body;
    let name = body
        .name
        .filter(|name| !name.is_empty())
        .ok_or(response::Error::MissingFields)?;
    let address = body
        .address
        .filter(|address| !address.is_empty())
        .ok_or(response::Error::MissingFields)?;
    let city = body
        .city
        .filter(|city| !city.is_empty())
        .ok_or(response::Error::MissingFields)?;
    let price_per_hour = body
        .price_per_hour
        .filter(|price| *price > 0.0)
        .and_then(BigDecimal::from_f64)
        .ok_or(response::Error::MissingFields)?;

    repository::create(
        &ctx.db_conn.pool,
        repository::CreateTurfPayload {
            sport,
            name,
            address,
            city,
            image: body.image,
            price_per_hour,
            facilities: body.facilities,
            size: body.size,
            description: body.description,
            owner_id: body.owner_id,
        },
    )
    .await
    .map_err(|_| response::Error::FailedToCreateTurf)
    .map(response::Success::TurfCreated)
}
