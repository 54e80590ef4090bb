// Copyright (c) 2024 Frank Fischer <frank-fischer@shadow-soft.de>
//
// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see  <http://www.gnu.org/licenses/>
//

//! Errors raised when building the input of an algorithm.

use thiserror::Error;

/// The category of an [`Error`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller supplied malformed input, e.g. a non-square matrix.
    InvalidInput,
}

/// Error when constructing a data structure from caller supplied data.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid input: row {row} has {len} entries, expected {size}")]
    NotSquare { row: usize, len: usize, size: usize },
    #[error("invalid input: vertex {vertex} out of range for {size} vertices")]
    VertexOutOfRange { vertex: usize, size: usize },
    #[error("invalid input: {len} entries do not form a {size}x{size} matrix")]
    WrongLength { len: usize, size: usize },
}

impl Error {
    /// Return the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NotSquare { .. } | Error::VertexOutOfRange { .. } | Error::WrongLength { .. } => {
                ErrorKind::InvalidInput
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::{Error, ErrorKind};

    #[test]
    fn test_kind_and_message() {
        let err = Error::NotSquare { row: 2, len: 1, size: 3 };
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert_eq!(err.to_string(), "invalid input: row 2 has 1 entries, expected 3");

        let err = Error::VertexOutOfRange { vertex: 7, size: 4 };
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert_eq!(err.to_string(), "invalid input: vertex 7 out of range for 4 vertices");

        let err = Error::WrongLength { len: 2, size: 3 };
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert_eq!(err.to_string(), "invalid input: 2 entries do not form a 3x3 matrix");
    }
}
