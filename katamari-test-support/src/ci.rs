//! CI-facing helpers shared by the test suites.

pub mod property_test_profile;
