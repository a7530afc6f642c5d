//! Persistence layer for the flight tracking server.
//!
//! Every function here is a single parameterized SQL statement against the
//! shared PostGIS-enabled database; geography columns are written with
//! `ST_SetSRID(ST_MakePoint(...), 4326)` and read back via `ST_X`/`ST_Y`
//! projections.

pub mod db;
pub mod drones;
pub mod flight_types;
pub mod flights;
pub mod metadata;
pub mod operators;
pub mod routes;

pub use db::{init_database, Database};
