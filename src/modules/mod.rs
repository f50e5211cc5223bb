pub mod admin;
pub mod auth;
pub mod booking;
pub mod owner;
pub mod payment;
pub mod review;
pub mod turf;
pub mod user;

mod router;
pub use router::{get_router, health};
