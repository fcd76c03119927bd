//! Building a jagged text and querying its shape.
//!
//! Run with: cargo run --example simple

use jagged_array::{jagged, JaggedTextArray};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let psalm: JaggedTextArray = jagged!([
        ["Happy is the man", "But his delight", "He shall be like a tree", ""],
        ["Why do the nations rage", ""],
        []
    ]);

    println!("Text: {}", psalm);
    println!("Verses: {}", psalm.verse_count());
    println!("Words: {}", psalm.word_count());
    println!("Characters: {}", psalm.char_count());
    println!("Full: {}, empty: {}", psalm.is_full(), psalm.is_empty());
    println!("Mask: {}", psalm.mask());

    let trimmed = psalm.trim_ending_whitespace();
    println!("Trimmed: {}", trimmed);
    assert!(trimmed.is_full());

    // Persist as plain nested JSON and read it back
    let json = serde_json::to_string(&trimmed)?;
    println!("JSON: {}", json);
    let back: JaggedTextArray = serde_json::from_str(&json)?;
    assert_eq!(back, trimmed);
    println!("✓ Round-trip successful");

    Ok(())
}
