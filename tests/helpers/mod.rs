// ABOUTME: Shared helpers for integration tests
// ABOUTME: Re-exports the axum request helper used by route-level tests

pub mod axum_test;
