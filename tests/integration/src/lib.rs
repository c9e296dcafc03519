//! Integration tests for Pets Explorer
//!
//! This test suite validates, against fake dog and cat providers:
//! - Listing aggregation (tagged dog images, cat image backfill)
//! - Detail and gallery resolution, including not-found outcomes
//! - The HTTP service end to end (pages, suggestions, status codes)

pub mod test_utils;
