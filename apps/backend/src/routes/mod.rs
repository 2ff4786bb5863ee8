//! HTTP route wiring.

pub mod health;
pub mod session;

use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    health::configure(cfg);
    session::configure_routes(cfg);
}
