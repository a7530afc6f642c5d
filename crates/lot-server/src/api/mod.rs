//! API routes for the flight tracking server.

pub mod drones;
mod error;
pub mod flights;
pub mod operators;
pub mod request_id;
mod routes;
pub mod trasy;

use axum::Router;

pub fn routes() -> Router<std::sync::Arc<crate::state::AppState>> {
    routes::create_router()
}

#[cfg(test)]
mod tests;
