// Allow manual modulo checks since .is_multiple_of() is nightly-only
#![allow(clippy::manual_is_multiple_of)]

//! impress-isbn: ISBN check digit computation and verification.
//!
//! Computes the check digit of ISBN-10 (ISO 2108, mod 11) and ISBN-13
//! (EAN-13, mod 10) identifiers from their payload digits, and routes a
//! raw piece of text to the right algorithm by counting its digits.
//!
//! Formatting characters are ignored everywhere: `0-201-53992-6`,
//! `0 201 53992 6` and `0201539926` all describe the same identifier.
//!
//! # Examples
//! ```
//! use impress_isbn::{checksum10, checksum13, verify_at_point, CheckDigit};
//!
//! assert_eq!(checksum10("0-201-53992-6").unwrap(), CheckDigit::Digit(6));
//! assert_eq!(checksum10("91-85668-01-X").unwrap(), CheckDigit::Ten);
//! assert_eq!(checksum13("978-1-61262-294-1").unwrap(), CheckDigit::Digit(1));
//! assert_eq!(verify_at_point("9780062802187").unwrap().to_string(), "7");
//! ```

#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();

pub mod checksum;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod extract;
pub mod host;
pub mod normalize;
pub mod output;
pub mod verify;

pub use checksum::*;
pub use config::*;
pub use dispatch::*;
pub use error::*;
pub use extract::*;
pub use host::*;
pub use normalize::*;
pub use output::*;
pub use verify::*;
