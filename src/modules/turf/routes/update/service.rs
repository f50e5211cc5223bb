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
    let price_per_hour = match body.price_per_hour {
        Some(price) => Some(BigDecimal::from_f64(price).ok_or(response::Error::InvalidPrice)?),
        None => None,
    };

    repository::update_by_sport_and_id(
        &ctx.db_conn.pool,
        sport,
        payload.id,
        repository::UpdateTurfPayload {
            name: body.name,
            address: body.address,
            city: body.city,
            image: body.image,
            price_per_hour,
            facilities: body.facilities,
            size: body.size,
            description: body.description,
            available: body.available,
            owner_id: body.owner_id,
        },
    )
    .await
    .map_err(|_| response::Error::FailedToUpdateTurf)?
    .ok_or(response::Error::TurfNotFound)
    .map(response::Success::TurfUpdated)
}
