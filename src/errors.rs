// Create the Error, ErrorKind, ResultExt, and Result types.
// Other modules `use crate::errors::*;` to get the `?` conversions and `chain_err`.
use error_chain::*;

error_chain! {

    foreign_links {
        Io(::std::io::Error);
    }

    errors {
        InvalidDimensions(rows: usize, columns: usize) {
            description("maze dimensions must both be at least 1")
            display("invalid maze dimensions: {} rows x {} columns", rows, columns)
        }

        StartOutOfBounds(row: usize, column: usize, rows: usize, columns: usize) {
            description("start cell outside the grid")
            display("start cell ({}, {}) is outside a {} x {} grid", row, column, rows, columns)
        }

        InvariantViolation(detail: String) {
            description("generated maze is not a spanning tree")
            display("generated maze is not a spanning tree: {}", detail)
        }
    }
}
