use super::types::{request, response};
use crate::modules::auth::middleware::Auth;
use crate::modules::owner::repository;
use crate::types::Context;
use crate::utils::mail::templates;
use std::sync::Arc;
use validator::Validate;

pub async fn service(
    ctx: Arc<Context>,
    auth: Auth,
    payload: request::Payload,
) -> response::Response {
    payload.validate().map_err(|errors| {
        tracing::warn!("Failed to validate owner registration: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let (full_name, phone, business_name, business_address, city) = match (
        payload.full_name,
        payload.phone,
        payload.business_name,
        payload.business_address,
        payload.city,
    ) {
        (
            Some(full_name),
            Some(phone),
            Some(business_name),
            Some(business_address),
            Some(city),
        ) if !full_name.is_empty()
            && !business_name.is_empty()
            && !business_address.is_empty()
            && !city.is_empty() =>
        {
            (full_name, phone, business_name, business_address, city)
        }
        _ => return Err(response::Error::MissingFields),
    };

    let owner = repository::create(
        &ctx.db_conn.pool,
        repository::CreateOwnerPayload {
            uid: auth.user.uid.clone(),
            email: auth.user.email.clone(),
            full_name: full_name.clone(),
            phone,
            business_name: business_name.clone(),
            business_address,
            city,
            sport_types: payload.sport_types,
            description: payload.description,
        },
    )
    .await
    .map_err(|err| match err {
        repository::Error::AlreadyRegistered => response::Error::AlreadyRegistered,
        repository::Error::UnexpectedError => response::Error::FailedToRegister,
    })?;

    if let Err(err) = ctx
        .mailer
        .send(
            auth.user.email.as_str(),
            "TurfNow - Owner Registration Received",
            templates::owner_registration_pending(templates::OwnerRegistrationPending {
                full_name: full_name.as_str(),
                business_name: business_name.as_str(),
            }),
        )
        .await
    {
        tracing::error!("Failed to send registration email: {:?}", err);
    }

    Ok(response::Success::RegistrationSubmitted { uid: owner.uid })
}
