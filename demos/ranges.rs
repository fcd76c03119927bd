//! Coordinates, sections and range extraction.
//!
//! Run with: cargo run --example ranges

use jagged_array::{jagged, JaggedTextArray};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let book: JaggedTextArray = jagged!([
        [
            ["1:1:1", "1:1:2", "1:1:3"],
            ["1:2:1", "1:2:2"]
        ],
        [
            ["2:1:1", "2:1:2"],
            ["2:2:1", "2:2:2", "2:2:3"]
        ]
    ]);

    println!("Depth: {}", book.depth());
    println!("Sections: {:?}", book.sections());

    let range = book.subarray(&[0, 1, 1], &[1, 1, 0])?;
    println!("[0,1,1]..[1,1,0]: {}", range);

    let part = book.subarray(&[1], &[1])?;
    println!("Part 2: {}", part);

    println!("First verse: {:?}", book.next_index(None));
    println!("Last verse: {:?}", book.prev_index(None));

    match book.subarray(&[0, 5, 0], &[1, 0, 0]) {
        Ok(_) => unreachable!("chapter 6 does not exist"),
        Err(err) => println!("Rejected: {}", err),
    }

    let wrapped = book.resize(1)?;
    println!("Wrapped depth: {}", wrapped.depth());
    assert_eq!(wrapped.resize(-1)?, book);

    Ok(())
}
