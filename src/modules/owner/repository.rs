use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::{PgExecutor, QueryBuilder};
use std::str::FromStr;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum OwnerStatus {
    Pending,
    Approved,
    Rejected,
}

impl ToString for OwnerStatus {
    fn to_string(&self) -> String {
        match self {
            OwnerStatus::Pending => String::from("pending"),
            OwnerStatus::Approved => String::from("approved"),
            OwnerStatus::Rejected => String::from("rejected"),
        }
    }
}

impl FromStr for OwnerStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(OwnerStatus::Pending),
            "approved" => Ok(OwnerStatus::Approved),
            "rejected" => Ok(OwnerStatus::Rejected),
            _ => Err(format!("'{}' is not a valid OwnerStatus", s)),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    pub uid: String,
    pub email: String,
    pub full_name: String,
    pub phone: String,
    pub business_name: String,
    pub business_address: String,
    pub city: String,
    pub sport_types: Vec<String>,
    pub description: String,
    pub status: String,
    pub approved_by: Option<String>,
    pub approved_at: Option<NaiveDateTime>,
    pub rejected_by: Option<String>,
    pub rejected_at: Option<NaiveDateTime>,
    pub rejection_reason: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

pub struct CreateOwnerPayload {
    pub uid: String,
    pub email: String,
    pub full_name: String,
    pub phone: String,
    pub business_name: String,
    pub business_address: String,
    pub city: String,
    pub sport_types: Vec<String>,
    pub description: String,
}

#[derive(Default)]
pub struct UpdateOwnerProfilePayload {
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub business_name: Option<String>,
    pub business_address: Option<String>,
    pub city: Option<String>,
    pub description: Option<String>,
}

pub enum Error {
    AlreadyRegistered,
    UnexpectedError,
}

pub async fn create<'e, E: PgExecutor<'e>>(
    e: E,
    payload: CreateOwnerPayload,
) -> Result<Owner, Error> {
    sqlx::query_as::<_, Owner>(
        "
        INSERT INTO owners (
            uid,
            email,
            full_name,
            phone,
            business_name,
            business_address,
            city,
            sport_types,
            description,
            status
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        RETURNING *
        ",
    )
    .bind(payload.uid)
    .bind(payload.email)
    .bind(payload.full_name)
    .bind(payload.phone)
    .bind(payload.business_name)
    .bind(payload.business_address)
    .bind(payload.city)
    .bind(payload.sport_types)
    .bind(payload.description)
    .bind(OwnerStatus::Pending.to_string())
    .fetch_one(e)
    .await
    .map_err(|err| match err {
        sqlx::Error::Database(db_err)
            if matches!(db_err.kind(), sqlx::error::ErrorKind::UniqueViolation) =>
        {
            Error::AlreadyRegistered
        }
        err => {
            tracing::error!(
                "Error occurred while trying to create an owner registration: {}",
                err
            );
            Error::UnexpectedError
        }
    })
}

pub async fn find_by_uid<'e, E: PgExecutor<'e>>(e: E, uid: String) -> Result<Option<Owner>, Error> {
    sqlx::query_as::<_, Owner>("SELECT * FROM owners WHERE uid = $1")
        .bind(uid.clone())
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while trying to fetch owner {}: {}", uid, err);
            Error::UnexpectedError
        })
}

pub async fn find_many<'e, E: PgExecutor<'e>>(
    e: E,
    status: Option<String>,
) -> Result<Vec<Owner>, Error> {
    let mut query = QueryBuilder::new("SELECT * FROM owners");
    if let Some(status) = status {
        query.push(" WHERE status = ");
        query.push_bind(status);
    }
    query.push(" ORDER BY created_at DESC");

    query
        .build_query_as::<Owner>()
        .fetch_all(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while trying to fetch owners: {}", err);
            Error::UnexpectedError
        })
}

pub async fn update_profile_by_uid<'e, E: PgExecutor<'e>>(
    e: E,
    uid: String,
    payload: UpdateOwnerProfilePayload,
) -> Result<Option<Owner>, Error> {
    let mut query = QueryBuilder::new("UPDATE owners SET updated_at = NOW()");

    if let Some(full_name) = payload.full_name {
        query.push(", full_name = ");
        query.push_bind(full_name);
    }
    if let Some(phone) = payload.phone {
        query.push(", phone = ");
        query.push_bind(phone);
    }
    if let Some(business_name) = payload.business_name {
        query.push(", business_name = ");
        query.push_bind(business_name);
    }
    if let Some(business_address) = payload.business_address {
        query.push(", business_address = ");
        query.push_bind(business_address);
    }
    if let Some(city) = payload.city {
        query.push(", city = ");
        query.push_bind(city);
    }
    if let Some(description) = payload.description {
        query.push(", description = ");
        query.push_bind(description);
    }

    query.push(" WHERE uid = ");
    query.push_bind(uid.clone());
    query.push(" RETURNING *");

    query
        .build_query_as::<Owner>()
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to update owner {}: {}",
                uid,
                err
            );
            Error::UnexpectedError
        })
}

pub async fn approve_by_uid<'e, E: PgExecutor<'e>>(
    e: E,
    uid: String,
    admin_uid: String,
) -> Result<Option<Owner>, Error> {
    sqlx::query_as::<_, Owner>(
        "
        UPDATE owners
        SET status = $3, approved_by = $2, approved_at = NOW(), updated_at = NOW()
        WHERE uid = $1
        RETURNING *
        ",
    )
    .bind(uid.clone())
    .bind(admin_uid)
    .bind(OwnerStatus::Approved.to_string())
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to approve owner {}: {}",
            uid,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn reject_by_uid<'e, E: PgExecutor<'e>>(
    e: E,
    uid: String,
    admin_uid: String,
    reason: String,
) -> Result<Option<Owner>, Error> {
    sqlx::query_as::<_, Owner>(
        "
        UPDATE owners
        SET status = $4,
            rejected_by = $2,
            rejected_at = NOW(),
            rejection_reason = $3,
            updated_at = NOW()
        WHERE uid = $1
        RETURNING *
        ",
    )
    .bind(uid.clone())
    .bind(admin_uid)
    .bind(reason)
    .bind(OwnerStatus::Rejected.to_string())
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to reject owner {}: {}",
            uid,
            err
        );
        Error::UnexpectedError
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_statuses_round_trip_through_their_labels() {
        for status in [
            OwnerStatus::Pending,
            OwnerStatus::Approved,
            OwnerStatus::Rejected,
        ] {
            let label = status.to_string();
            let parsed = match label.parse::<OwnerStatus>() {
                Ok(parsed) => parsed,
                Err(_) => panic!("expected '{}' to parse", label),
            };
            assert_eq!(parsed, status);
        }
        assert!("banned".parse::<OwnerStatus>().is_err());
    }
}
