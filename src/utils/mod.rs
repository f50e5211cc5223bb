pub mod database;
pub mod identity;
pub mod mail;
pub mod payment;
pub mod rate_limit;
pub mod sanitize;
pub mod validation;
