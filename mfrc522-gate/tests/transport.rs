// Aggregator for transport integration tests in `tests/transport/`.

#[path = "transport/register_access_test.rs"]
mod register_access_test;

#[path = "transport/transport_error_test.rs"]
mod transport_error_test;
