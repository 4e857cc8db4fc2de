//! Property-based tests for the mapping engine
//!
//! ## Test Modules
//!
//! - `mapper_props`: axis index and interpolation
//!   - Axis index is a bijection onto 0..=7 for every characteristic
//!   - Endpoints reproduce the rounded range bounds
//!   - Values are monotonic along each characteristic's direction
//!   - Constant ranges are constant everywhere
//!   - Duplicate characteristics keep distinct keys
//!
//! - `tags_props`: description tags
//!   - Formatting then parsing reproduces the ranges (up to id)
//!   - Substituting a generated description yields exactly the values
//!   - Placed cards keep their prose and resolve every tag
//!
//! By default, proptest runs 256 cases per property. This can be configured
//! via the `PROPTEST_CASES` environment variable:
//!
//! ```sh
//! PROPTEST_CASES=1000 cargo test property
//! ```

mod mapper_props;
mod tags_props;
