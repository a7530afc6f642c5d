//! Domain models and validation shared across the flight tracking services.

pub mod models;
pub mod validation;

pub use models::{
    Certificate, ColumnInfo, DroneInstance, DroneModel, DroneModelWithCount, FlightClosed,
    FlightDetail, FlightRoutePoint, FlightStarted, FlightSummary, FlightType, Operator,
    OperatorAddress, Route, RoutePoint, TableStat, TelemetryInserted, TelemetryRecord, TrasaPoint,
    TrasaSummary, STATUS_ABORTED, STATUS_FINISHED, STATUS_STARTED,
};
pub use validation::{
    parse_optional_date, telemetry_timestamp, validate_coordinates, CoordinateError,
};
