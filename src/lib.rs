//! # jagged_array
//!
//! Ragged, arbitrarily nested arrays for hierarchically structured text.
//!
//! ## What is a jagged array?
//!
//! A jagged array is a tree of sequences where every level may have a
//! different length and every branch may reach a different depth. It models
//! texts such as book → chapter → verse, where chapters hold different numbers
//! of verses, some verses are still missing, and some works have an extra
//! level of nesting. A jagged array of depth zero is a single bare value.
//!
//! ## Key Features
//!
//! - **Coordinate addressing**: every node is reachable by a path of indices
//! - **Range extraction**: [`Node::subarray`] cuts an inclusive range across
//!   levels, keeping the shape of what it retains
//! - **Shape queries**: verse counts, sections, full/empty checks, presence
//!   masks, overlap detection
//! - **Persistent transforms**: trimming and resizing return new trees and never
//!   touch the input
//! - **Serde compatible**: reads and writes plain nested sequences, e.g. JSON
//!   `[["1:1", "1:2"], ["2:1"]]`
//!
//! ## Quick Start
//!
//! ```rust
//! use jagged_array::{jagged, JaggedIntArray, JaggedTextArray};
//!
//! let genesis: JaggedTextArray = jagged!([
//!     ["In the beginning", "And the earth", ""],
//!     ["Thus the heavens"],
//! ]);
//!
//! assert_eq!(genesis.verse_count(), 4);
//! assert_eq!(genesis.word_count(), 9);
//! assert!(!genesis.is_full());
//!
//! let mask: JaggedIntArray = jagged!([[1, 1, 0], [1]]);
//! assert_eq!(genesis.mask(), mask);
//!
//! let trimmed = genesis.trim_ending_whitespace();
//! assert!(trimmed.is_full());
//!
//! let opening = genesis.subarray(&[0, 1], &[1, 0]).unwrap();
//! assert_eq!(opening, jagged!([["And the earth", ""], ["Thus the heavens"]]));
//! ```
//!
//! ## Serialization
//!
//! ```rust
//! use jagged_array::JaggedTextArray;
//!
//! let chapter: JaggedTextArray = serde_json::from_str(r#"["a", ["b", "c"]]"#).unwrap();
//! assert_eq!(chapter.verse_count(), 3);
//! assert_eq!(serde_json::to_string(&chapter).unwrap(), r#"["a",["b","c"]]"#);
//! ```
//!
//! ## Logging
//!
//! Range extraction and resizing are instrumented with [`tracing`] spans at
//! `debug` level, and rejected requests are logged before the error is
//! returned. No subscriber is installed by this crate.
//!
//! ## Demos
//!
//! See the `demos/` directory:
//!
//! - **`simple.rs`** - Building a text and querying its shape
//! - **`ranges.rs`** - Coordinates, sections and range extraction
//!
//! Run any demo with: `cargo run --example <name>`

pub mod error;
pub mod int;
pub mod leaf;
pub mod macros;
pub mod node;
pub mod options;
pub mod shape;
pub mod text;

pub use error::{Error, Result};
pub use int::JaggedIntArray;
pub use leaf::LeafValue;
pub use node::{Leaves, Node};
pub use options::{CharUnit, CountOptions, WordBoundary};
pub use text::JaggedTextArray;
