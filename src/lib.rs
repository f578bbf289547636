//! Password profiling library
//!
//! This library estimates password strength from two angles: an
//! information-theoretic entropy estimate (charset cardinality × length)
//! and a fuzzy check against a configurable list of common words, using
//! Damerau-Levenshtein distance with a sliding-window substring search.
//!
//! # Features
//!
//! - `async` (default): Enables cancellation support and the channel-based
//!   report variant
//! - `tracing`: Enables logging via tracing crate
//! - `serde`: Enables serialization of the configuration types
//!
//! # Example
//!
//! ```rust
//! use pwd_profile::Password;
//!
//! let mut profile = Password::new("Tr0ub4dor&3", None, None);
//!
//! // Not close to "password", "123456" or "secret".
//! assert!(profile.is_common_password());
//! println!("charset: {}", profile.charset_size());
//! println!("entropy: {:.1} bits", profile.entropy_bits());
//!
//! #[cfg(feature = "async")]
//! let report = profile.strength_report(None);
//!
//! #[cfg(not(feature = "async"))]
//! let report = profile.strength_report();
//!
//! println!("Strength: {:?}", report.strength());
//!
//! profile.clean();
//! assert_eq!(profile.profile(), "");
//! ```

// Internal modules
mod analysis;
mod config;
mod password;
mod report;
mod wordlist;

// Public API
pub use analysis::{DEFAULT_COST_CAP, charset_size, damerau_levenshtein, entropy_bits, is_forbidden};
pub use config::{DEFAULT_COMMON_WORDS, PasswordConfig, PasswordConfigUpdate};
pub use password::{ChangeCallback, Password};
pub use report::{Strength, StrengthReport};
pub use wordlist::{WordlistError, load_wordlist};
