pub mod bounds;
pub mod coercion;
pub mod date_parser;
pub mod pattern;
