use jagged_array::{jagged, Error, JaggedIntArray, JaggedTextArray, Node};

fn twoby() -> JaggedTextArray {
    jagged!([
        ["Line 1:1", "This is the first second", "First third"],
        ["Chapter 2, Verse 1", "2:2", "2:3"],
        ["Third first", "Third second", "Third third"]
    ])
}

fn two_by_mask() -> JaggedIntArray {
    jagged!([[1, 1, 1], [1, 1, 1], [1, 1, 1]])
}

fn threeby() -> JaggedTextArray {
    jagged!([
        [
            ["Part 1 Line 1:1", "This is the first second", "First third"],
            ["Chapter 2, Verse 1", "2:2", "2:3"],
            ["Third first", "Third second", "Third third"]
        ],
        [
            ["Part 2 Line 1:1", "This is the first second", "First third"],
            ["Chapter 2, Verse 1", "2:2", "2:3"],
            ["Third first", "Third second", "Third third"]
        ],
        [
            ["Part 3 Line 1:1", "This is the first second", "First third"],
            ["Chapter 2, Verse 1", "2:2", "2:3"],
            ["Third first", "Third second", "Third third"]
        ]
    ])
}

fn text(json: &str) -> JaggedTextArray {
    serde_json::from_str(json).unwrap()
}

#[test]
fn test_count_words() {
    assert_eq!(twoby().word_count(), 21);
    assert_eq!(threeby().word_count(), 69);
}

#[test]
fn test_count_chars() {
    assert_eq!(twoby().char_count(), 101);
    assert_eq!(threeby().char_count(), 324);
}

#[test]
fn test_verse_count() {
    assert_eq!(twoby().verse_count(), 9);
    assert_eq!(threeby().verse_count(), 27);
}

#[test]
fn test_equality() {
    assert_eq!(twoby(), twoby());
    assert_eq!(threeby(), threeby());
    assert_ne!(twoby(), threeby());
}

#[test]
fn test_subarray() {
    let three = threeby();
    let parts = three.children().unwrap();

    assert_eq!(three.subarray(&[0], &[0]).unwrap(), parts[0]);
    assert_eq!(three.subarray(&[1], &[1]).unwrap(), parts[1]);
    assert_eq!(
        three.subarray(&[1, 1, 1], &[1, 2, 1]).unwrap(),
        jagged!([["2:2", "2:3"], ["Third first", "Third second"]])
    );
}

#[test]
fn test_subarray_across_parts() {
    let range = threeby().subarray(&[0, 2, 2], &[1, 0, 0]).unwrap();
    assert_eq!(
        range,
        jagged!([[["Third third"]], [["Part 2 Line 1:1"]]])
    );
}

#[test]
fn test_subarray_whole_parts() {
    let three = threeby();
    let range = three.subarray(&[0], &[2]).unwrap();
    assert_eq!(range, three);
}

#[test]
fn test_subarray_out_of_range_reports_level() {
    let err = threeby().subarray(&[1, 1, 1], &[1, 1, 9]).unwrap_err();
    assert_eq!(err, Error::OutOfRange { level: 2, index: 9, len: 3 });
}

#[test]
fn test_mask() {
    assert_eq!(twoby().mask(), two_by_mask());

    let ragged = text(r#"[["a",[],[],["",""],["b"]],["a",[],["","a"],["",""],["b"]]]"#);
    let expected: JaggedIntArray = jagged!([
        [1, [], [], [0, 0], [1]],
        [1, [], [0, 1], [0, 0], [1]]
    ]);
    assert_eq!(ragged.mask(), expected);
}

#[test]
fn test_is_full() {
    assert!(twoby().is_full());
    assert!(threeby().is_full());
    assert!(!text("[]").is_full());
    assert!(!text("[[]]").is_full());
    assert!(!text(r#"[[""]]"#).is_full());
    assert!(!text(r#"[["a","b","c",""]]"#).is_full());
    assert!(!text(r#"[["a","b","c",[""]]]"#).is_full());
}

#[test]
fn test_is_empty() {
    assert!(!twoby().is_empty());
    assert!(!threeby().is_empty());
    assert!(text("[]").is_empty());
    assert!(text("[[]]").is_empty());
    assert!(text(r#"[[""]]"#).is_empty());
    assert!(!text(r#"[["a","b","c",""]]"#).is_empty());
    assert!(!text(r#"[["a","b","c",[""]]]"#).is_empty());
}

#[test]
fn test_sections() {
    assert_eq!(twoby().sections(), vec![vec![0], vec![1], vec![2]]);

    let expected: Vec<Vec<usize>> = (0..3)
        .flat_map(|part| (0..3).map(move |chapter| vec![part, chapter]))
        .collect();
    assert_eq!(threeby().sections(), expected);
}

#[test]
fn test_trim_ending_whitespace() {
    // do no harm
    assert_eq!(twoby().trim_ending_whitespace(), twoby());
    assert_eq!(threeby().trim_ending_whitespace(), threeby());

    let twoby_with_space: JaggedTextArray = jagged!([
        ["Line 1:1", "This is the first second", "First third", "", "", ""],
        ["Chapter 2, Verse 1", "2:2", "2:3", ""],
        ["Third first", "Third second", "Third third"]
    ]);
    let threeby_with_space: JaggedTextArray = jagged!([
        [
            ["Part 1 Line 1:1", "This is the first second", "First third", "", "", ""],
            ["Chapter 2, Verse 1", "2:2", "2:3", "", ""],
            ["Third first", "Third second", "Third third", ""]
        ],
        [
            ["Part 2 Line 1:1", "This is the first second", "First third"],
            ["Chapter 2, Verse 1", "2:2", "2:3", "", "", ""],
            ["Third first", "Third second", "Third third"]
        ],
        [
            ["Part 3 Line 1:1", "This is the first second", "First third"],
            ["Chapter 2, Verse 1", "2:2", "2:3"],
            ["Third first", "Third second", "Third third", ""]
        ]
    ]);

    let flat: JaggedTextArray = jagged!(["a", "b", "c", "", ""]);
    assert_eq!(flat.trim_ending_whitespace(), jagged!(["a", "b", "c"]));
    assert_eq!(twoby_with_space.trim_ending_whitespace(), twoby());
    assert_eq!(threeby_with_space.trim_ending_whitespace(), threeby());
}

#[test]
fn test_overlap() {
    let a = text(r#"[["","b",""],["d","","f"],["","h",""]]"#);
    let b = text(r#"[["","","c"],["","e",""],["g","",""]]"#);
    let c = text(r#"[["","",""],["","q",""],["","",""]]"#);
    assert!(!a.overlaps(&b).unwrap());
    assert!(!a.overlaps(&c).unwrap());
    assert!(b.overlaps(&c).unwrap());
}

#[test]
fn test_resize() {
    assert_eq!(twoby().resize(1).unwrap().resize(-1).unwrap(), twoby());
}

#[test]
fn test_resize_too_far() {
    assert_eq!(
        twoby().resize(1).unwrap().resize(-2),
        Err(Error::InvalidResize {
            requested: 2,
            unwrapped: 1
        })
    );
}

#[test]
fn test_depth_0() {
    let j: JaggedTextArray = jagged!("Fee Fi Fo Fum");
    assert_eq!(j, Node::Leaf("Fee Fi Fo Fum".to_string()));
    assert!(j.is_full());
    assert!(!j.is_empty());
    assert_eq!(j.verse_count(), 1);
    assert_eq!(j.mask(), Node::Leaf(1));
    assert_eq!(j.trim_ending_whitespace(), j);
}

#[test]
fn test_depth_0_from_json() {
    let j = text(r#""Fee Fi Fo Fum""#);
    assert!(j.is_leaf());
    assert_eq!(j.word_count(), 4);
    assert_eq!(j.char_count(), 13);
}

#[test]
fn test_next_and_prev_index() {
    let sparse = text(r#"[["", "b"], [], ["", ""], ["e"]]"#);
    assert_eq!(sparse.next_index(None), Some(vec![0, 1]));
    assert_eq!(sparse.next_index(Some(&[0, 1])), Some(vec![3, 0]));
    assert_eq!(sparse.prev_index(Some(&[3, 0])), Some(vec![0, 1]));
    assert_eq!(sparse.prev_index(Some(&[0, 1])), None);
}
