// Copyright (c) The tt-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::cover::Cover;
use itertools::{Itertools, Position};
use std::{borrow::Cow, fmt};

/// Displays a cover one cube per row, e.g. `0 - 1`.
#[derive(Clone, Debug)]
pub struct CoverMatrixDisplay<'a> {
    cover: &'a Cover,
    internal_separator: Cow<'a, str>,
    cube_separator: (Cow<'a, str>, bool),
}

impl<'a> CoverMatrixDisplay<'a> {
    pub fn new(cover: &'a Cover) -> Self {
        Self {
            cover,
            internal_separator: Cow::Borrowed(" "),
            cube_separator: (Cow::Borrowed("\n"), true),
        }
    }

    pub fn with_internal_separator(mut self, separator: impl Into<Cow<'a, str>>) -> Self {
        self.internal_separator = separator.into();
        self
    }

    pub fn with_cube_separator(
        mut self,
        separator: impl Into<Cow<'a, str>>,
        print_last: bool,
    ) -> Self {
        self.cube_separator = (separator.into(), print_last);
        self
    }
}

impl<'a> fmt::Display for CoverMatrixDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let cube_count = self.cover.cube_count();
        for (elem_ix, elem) in self.cover.elements().iter().enumerate() {
            for (trit_ix, &trit) in elem.trits().iter().enumerate() {
                write!(f, "{}", trit.to_char())?;
                if trit_ix < elem.width() - 1 {
                    write!(f, "{}", self.internal_separator)?;
                }
            }

            let (cube_separator, print_last) = &self.cube_separator;
            if *print_last || elem_ix < cube_count - 1 {
                write!(f, "{}", cube_separator)?;
            }
        }

        Ok(())
    }
}

/// Displays a cover as a sum of products over cube strings, e.g.
/// `0-1 + 1-0`. This is the interchange encoding: each cube renders as an
/// n-character string over `{0,1,-}`.
pub struct CoverSopDisplay<'a> {
    cover: &'a Cover,
    separator: Cow<'a, str>,
}

impl<'a> CoverSopDisplay<'a> {
    pub fn new(cover: &'a Cover) -> Self {
        Self {
            cover,
            separator: Cow::Borrowed(" + "),
        }
    }

    pub fn with_separator(mut self, separator: impl Into<Cow<'a, str>>) -> Self {
        self.separator = separator.into();
        self
    }
}

impl<'a> fmt::Display for CoverSopDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.cover.is_empty() {
            return write!(f, "(none)");
        }
        for elem in self.cover.elements().iter().with_position() {
            match elem {
                Position::First(cube) | Position::Middle(cube) => {
                    write!(f, "{}{}", cube, self.separator)?;
                }
                Position::Last(cube) | Position::Only(cube) => {
                    write!(f, "{}", cube)?;
                }
            }
        }
        Ok(())
    }
}

/// Displays a cover in algebraic notation, e.g. `a'b + ab'`.
pub struct CoverAlgebraicDisplay<'a> {
    cover: &'a Cover,
}

impl<'a> CoverAlgebraicDisplay<'a> {
    pub fn new(cover: &'a Cover) -> Self {
        Self { cover }
    }
}

impl<'a> fmt::Display for CoverAlgebraicDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.cover.is_empty() {
            return write!(f, "(none)");
        }
        for elem in self.cover.elements().iter().with_position() {
            match elem {
                Position::First(cube) | Position::Middle(cube) => {
                    write!(f, "{} + ", cube.algebraic_display())?;
                }
                Position::Last(cube) | Position::Only(cube) => {
                    write!(f, "{}", cube.algebraic_display())?;
                }
            }
        }
        Ok(())
    }
}

impl Cover {
    #[inline]
    pub fn algebraic_display(&self) -> CoverAlgebraicDisplay<'_> {
        CoverAlgebraicDisplay::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sop_display() {
        let cover = Cover::from_strings(["0-1", "1-0"]).unwrap();
        assert_eq!(cover.sop_display().to_string(), "0-1 + 1-0");
        assert_eq!(
            cover.sop_display().with_separator(" | ").to_string(),
            "0-1 | 1-0"
        );
        assert_eq!(Cover::new().sop_display().to_string(), "(none)");
    }

    #[test]
    fn test_matrix_display() {
        let cover = Cover::from_strings(["0-1", "1-0"]).unwrap();
        assert_eq!(cover.matrix_display().to_string(), "0 - 1\n1 - 0\n");
        assert_eq!(
            cover
                .matrix_display()
                .with_internal_separator("")
                .with_cube_separator(", ", false)
                .to_string(),
            "0-1, 1-0"
        );
    }

    #[test]
    fn test_algebraic_display() {
        let cover = Cover::from_strings(["0-1", "1-0"]).unwrap();
        assert_eq!(cover.algebraic_display().to_string(), "a'c + ac'");
    }
}
