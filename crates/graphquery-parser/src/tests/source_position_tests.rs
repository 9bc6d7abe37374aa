//! Tests for [`SourcePosition`].

use crate::SourcePosition;

#[test]
fn start_is_line_one_column_one() {
    assert_eq!(SourcePosition::START.line(), 1);
    assert_eq!(SourcePosition::START.column(), 1);
    assert_eq!(SourcePosition::START.byte_offset(), 0);
    assert_eq!(SourcePosition::default(), SourcePosition::START);
}

#[test]
fn accessors() {
    let pos = SourcePosition::new(4, 12, 87);
    assert_eq!(pos.line(), 4);
    assert_eq!(pos.column(), 12);
    assert_eq!(pos.byte_offset(), 87);
}

#[test]
fn displays_as_line_colon_column() {
    assert_eq!(SourcePosition::new(4, 12, 87).to_string(), "4:12");
}
