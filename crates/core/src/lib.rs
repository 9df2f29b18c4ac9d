//! Core library for casetools
//!
//! This crate implements the **Functional Core** of the casetools application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! - **`casetools_core`** (this crate): Pure text transformations with zero I/O
//! - **`casetools`**: CLI and MCP transports (the Imperative Shell)
//!
//! Every function here is pure and stateless: the same input always produces
//! the same output, and calls can run concurrently from any thread.
//!
//! # Module Organization
//!
//! - [`diacritics`]: Latinization (NFD, drop nonspacing marks, NFC) and diacritic detection
//! - [`ascii`]: ASCII and printable-ASCII filters, applied after latinization
//! - [`words`]: Tokenizer splitting text into `[A-Za-z0-9]` runs
//! - [`style`]: The eight case styles (flat, kebab, camel, pascal, snake, upper, train, ada)
//! - [`case`]: Simple one-to-one case mapping shared by elite, sponge and the vowel check
//! - [`vowel`]: Vowel classification used by elite-case
//! - [`alternate`]: Elite-case and sponge-case letter transforms
//! - [`operation`]: The closed set of thirteen operations and their dispatch
//!
//! # Example Usage
//!
//! ```rust
//! use casetools_core::Operation;
//!
//! let op: Operation = "kebab".parse().unwrap();
//! assert_eq!(op.execute("Crème Brûlée!"), "creme-brulee");
//! assert_eq!(Operation::Ascii.execute("Hello 世界!"), "Hello !");
//! ```

pub mod alternate;
pub mod ascii;
pub mod case;
pub mod diacritics;
pub mod error;
pub mod operation;
pub mod style;
pub mod vowel;
pub mod words;

pub use error::{Error, Result};
pub use operation::{Operation, OperationInfo, INPUT_PARAMETER};
pub use style::CaseStyle;
