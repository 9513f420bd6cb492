//! Manifest schema tests
//!
//! Split by concern: parsing, serialization round-trips, file I/O, default
//! values, and property-based suites.

mod default_values;
