//! # Sigchain Testkit
//!
//! Testing utilities for sigchain sig ID derivation.
//!
//! ## Overview
//!
//! - **Golden vectors**: real links with the sig IDs the server assigned them
//! - **Fixtures**: synthetic chains signed with deterministic Ed25519 keys
//! - **Generators**: proptest strategies for property-based testing
//!
//! ## Golden Vectors
//!
//! ```rust
//! use sigchain_testkit::vectors::verify_all_vectors;
//!
//! for (label, matches, sig_id) in verify_all_vectors() {
//!     assert!(matches, "{}: {}", label, sig_id);
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use sigchain_testkit::generators::{packet_from_params, LinkParams};
//!
//! proptest! {
//!     #[test]
//!     fn envelope_is_deterministic(params: LinkParams) {
//!         let packet = packet_from_params(&params);
//!         prop_assert_eq!(
//!             sigchain_core::canonical_envelope(&packet),
//!             sigchain_core::canonical_envelope(&packet)
//!         );
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use sigchain_testkit::fixtures::ChainFixture;
//!
//! let fixture = ChainFixture::with_seed([7; 32]);
//! let chain = fixture.make_chain(3);
//! assert_eq!(chain[2].seqno, 3);
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{
    multi_party_fixtures, ChainFixture, FixtureLink, FIXTURE_CLIENT_NAME, FIXTURE_CLIENT_VERSION,
};
pub use generators::{packet_from_params, LinkParams};
pub use vectors::{all_vectors, verify_all_vectors, GoldenVector, CLIENT_NAME};
