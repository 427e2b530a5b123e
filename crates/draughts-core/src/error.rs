//! Error types for board diagram parsing.

/// Errors that occur when parsing a board diagram.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiagramError {
    /// The diagram does not have exactly 8 rows.
    #[error("expected 8 rows in board diagram, found {found}")]
    WrongRowCount {
        /// Number of rows found.
        found: usize,
    },
    /// A row describes more or fewer than 8 cells.
    #[error("row {row} describes {length} cells, expected 8")]
    BadRowLength {
        /// Zero-based row index.
        row: usize,
        /// Number of cells described.
        length: usize,
    },
    /// An unrecognized character appeared in a row.
    #[error("invalid cell character: '{character}'")]
    InvalidCellChar {
        /// The invalid character.
        character: char,
    },
}

#[cfg(test)]
mod tests {
    use super::DiagramError;

    #[test]
    fn diagram_error_display() {
        let err = DiagramError::WrongRowCount { found: 4 };
        assert_eq!(format!("{err}"), "expected 8 rows in board diagram, found 4");
        let err = DiagramError::InvalidCellChar { character: 'k' };
        assert_eq!(format!("{err}"), "invalid cell character: 'k'");
    }
}
