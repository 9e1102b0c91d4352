use core::fmt;

use crate::errors::StrandError;

/// One element of a strand.
///
/// `Acid` is a `Copy` wrapper around a single `char`. No biological alphabet
/// is enforced: any Unicode scalar value can be stored. Use
/// [`Acid::try_from`] when the character must also be printable inside a
/// whitespace-separated rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Acid(char);

impl Acid {
    /// Wrap `c` without validation.
    #[inline(always)]
    pub const fn new(c: char) -> Self {
        Self(c)
    }

    /// Return the wrapped character.
    #[inline(always)]
    pub const fn to_char(self) -> char {
        self.0
    }

    /// Return true if this acid can appear in a space-separated rendering
    /// and be read back as a single token.
    #[inline]
    pub fn is_token_safe(self) -> bool {
        !self.0.is_whitespace() && !self.0.is_control()
    }
}

impl TryFrom<char> for Acid {
    type Error = StrandError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        let acid = Self(c);
        if acid.is_token_safe() {
            Ok(acid)
        } else {
            Err(StrandError::InvalidChar(c))
        }
    }
}

impl From<Acid> for char {
    #[inline(always)]
    fn from(acid: Acid) -> char {
        acid.0
    }
}

impl fmt::Display for Acid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
