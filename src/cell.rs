use std::fmt::{Display, Formatter};

/// A single binary grid cell.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Cell {
    /// Shaded; part of some run.
    Filled,
    /// Blank.
    #[default]
    Empty,
}

impl Cell {
    /// Whether this is [`Cell::Filled`].
    #[inline]
    pub fn is_filled(self) -> bool {
        self == Self::Filled
    }

    /// `1` for [`Cell::Filled`], `0` for [`Cell::Empty`].
    #[inline]
    pub fn bit(self) -> u8 {
        match self {
            Self::Filled => 1,
            Self::Empty => 0,
        }
    }
}

impl From<bool> for Cell {
    fn from(filled: bool) -> Self {
        if filled { Self::Filled } else { Self::Empty }
    }
}

impl From<u8> for Cell {
    /// Any nonzero value is filled.
    fn from(value: u8) -> Self {
        Self::from(value != 0)
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.pad(if self.is_filled() { "1" } else { "0" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn honours_width_and_alignment() {
        assert_eq!(format!("{:>3}", Cell::Filled), "  1");
        assert_eq!(format!("{:<2}|", Cell::Empty), "0 |");
        assert_eq!(Cell::Empty.to_string(), "0");
    }
}
