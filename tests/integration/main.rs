//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that exercises the core against mock
//! ports.  No UI toolkit or host lifecycle is involved.

mod app_service_tests;
mod mock_ports;
mod scenario_tests;
