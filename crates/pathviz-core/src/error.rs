use crate::geom::Cell;

/// Errors that can occur when parsing an ASCII grid map.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MapError {
    /// The map has no rows or no columns.
    #[error("map is empty")]
    Empty,
    /// A row is wider or narrower than the first one.
    #[error("map row {row} has width {found}, expected {expected}")]
    InconsistentWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A character outside `.#SE1-9` was found.
    #[error("map contains invalid character \u{201c}{ch}\u{201d} at {cell}")]
    InvalidChar { ch: char, cell: Cell },
    /// A second start (`S`) or end (`E`) marker was found.
    #[error("map has more than one \u{201c}{ch}\u{201d} marker, second at {cell}")]
    DuplicateMarker { ch: char, cell: Cell },
}
