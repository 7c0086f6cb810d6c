//! Integration tests for Layer 2: Encode
//!
//! Tests for the map-to-facts translation boundary.

mod facts;
