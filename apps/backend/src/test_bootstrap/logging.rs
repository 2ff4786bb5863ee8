//! Unit-test logging bootstrap; delegates to the shared test-support crate.

pub fn init() {
    backend_test_support::test_logging::init();
}
