//! Property-based tests for lexcover
//!
//! Property tests verify invariants that should hold for all inputs, rather
//! than testing specific cases.
//!
//! ## Running Property Tests
//!
//! ```sh
//! cargo test property --release
//! ```
//!
//! ## Test Modules
//!
//! - `coverage_props`: Tests for the lexical coverage engine
//!   - One entry per distinct target, in first-occurrence order
//!   - Same inputs give the same output
//!   - Appending text never removes coverage
//!   - Single-word coverage equals lemma membership
//!   - Tokenization never panics and numbers tokens sequentially
//!
//! By default, proptest runs 256 cases per property. This can be configured
//! via the `PROPTEST_CASES` environment variable.

mod coverage_props;
