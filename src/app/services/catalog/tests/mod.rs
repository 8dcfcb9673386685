//! Tests for the catalog field table
