//! Filename-derived expectations. Samples named `invalid_*` are expected
//! to fail schema validation; everything else is expected to pass. Keeping
//! the policy behind one function makes it swappable for explicit metadata
//! later.

/// Reserved filename prefix marking a sample as expected-invalid.
pub const INVALID_PREFIX: &str = "invalid_";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expectation {
    Valid,
    Invalid,
}

pub fn expected_outcome(file_name: &str) -> Expectation {
    if file_name.starts_with(INVALID_PREFIX) {
        Expectation::Invalid
    } else {
        Expectation::Valid
    }
}
