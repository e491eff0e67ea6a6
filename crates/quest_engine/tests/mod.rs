//! Tests for quest data records
//!
//! These tests verify schema validation of entity fields, the layered map
//! container and the id-sorted tileset container, including their file
//! round trips.
