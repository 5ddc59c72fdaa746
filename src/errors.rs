//! Error types for grid construction and grid access.
//!
//! `error_chain!` creates the `Error`, `ErrorKind`, `ResultExt` and `Result` types.
//! Other modules `use errors::*;` to get access to everything.

#![allow(deprecated)] // error-chain still implements `Error::description`

use error_chain::error_chain;

error_chain! {
    errors {
        /// A grid access at a coordinate outside `[0, width) x [0, height)`.
        OutOfBounds(x: usize, z: usize, width: usize, height: usize) {
            description("grid coordinate out of bounds")
            display("cell ({}, {}) lies outside the {}x{} grid", x, z, width, height)
        }

        /// A grid with no cells along one of its axes.
        InvalidDimensions(width: usize, height: usize) {
            description("invalid grid dimensions")
            display("grid dimensions {}x{} must both be positive", width, height)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_message_names_coordinate_and_grid() {
        let err: Error = ErrorKind::OutOfBounds(10, 3, 10, 10).into();
        assert_eq!(err.to_string(), "cell (10, 3) lies outside the 10x10 grid");
    }

    #[test]
    fn invalid_dimensions_message() {
        let err: Error = ErrorKind::InvalidDimensions(0, 4).into();
        assert_eq!(err.to_string(), "grid dimensions 0x4 must both be positive");
    }
}
