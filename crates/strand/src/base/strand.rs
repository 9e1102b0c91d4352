use super::Acid;
use crate::errors::StrandError;
use std::fmt;
use std::ops::{Add, Range};
use std::slice;
use std::str::FromStr;

/// Sentinel returned by [`Strand::find_position`] when the pattern is absent.
pub const NOT_FOUND: i64 = -1;

/// Owned, ordered sequence of acids.
///
/// `Strand` exclusively owns its elements: cloning produces independent
/// storage and dropping releases it. The read order of the strand is the
/// insertion order of its acids.
///
/// Positions taken by [`Strand::substr`], [`Strand::try_substr`],
/// [`Strand::acid_at`] and returned by [`Strand::find`] are **1-based**.
/// [`Strand::get`] keeps the 0-based convention of slices.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Strand(Vec<Acid>);

impl Strand {
    /// Create a new, empty `Strand`.
    ///
    /// ```rust
    /// # use dnastrand::Strand;
    /// let strand = Strand::new();
    /// assert_eq!(strand.len(), 0);
    /// ```
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Create a `Strand` with reserved capacity for `capacity` acids.
    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    /// Create a `Strand` from a vector of acids.
    pub fn from_acids(acids: Vec<Acid>) -> Self {
        Self(acids)
    }

    /// Create a `Strand` holding every character of `text`, in order.
    ///
    /// Unlike parsing through [`FromStr`], no character is rejected.
    pub fn from_text(text: &str) -> Self {
        text.chars().collect()
    }

    /// Return the number of acids in the strand.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Return `true` if the strand holds no acids.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Return the acid at 0-based `index`, or `None` if out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Acid> {
        self.0.get(index).copied()
    }

    /// Return the acid at 1-based `position`.
    pub fn acid_at(&self, position: usize) -> Result<Acid, StrandError> {
        if self.is_empty() {
            return Err(StrandError::EmptyStrand);
        }
        let range = self.range(position, 1)?;
        Ok(self.0[range.start])
    }

    /// Borrow the underlying acid slice.
    #[inline]
    pub fn as_slice(&self) -> &[Acid] {
        &self.0
    }

    /// Iterate over the acids in read order.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Acid> {
        self.0.iter()
    }

    /// Append `acid` to the end of the strand.
    #[inline]
    pub fn push(&mut self, acid: Acid) {
        self.0.push(acid);
    }

    /// Replace the contents of `self` with a copy of `source`.
    ///
    /// The previous acids are released and the existing allocation is reused
    /// where it is large enough. Either side may be empty.
    pub fn assign(&mut self, source: &Strand) {
        self.clone_from(source);
    }

    /// Return a new strand holding `self` followed by `other`.
    ///
    /// Neither operand is modified.
    pub fn concat(&self, other: &Strand) -> Strand {
        let mut acids = Vec::with_capacity(self.len() + other.len());
        acids.extend_from_slice(&self.0);
        acids.extend_from_slice(&other.0);
        Self(acids)
    }

    /// Return a new strand with the acids of `self` in opposite order.
    pub fn reversed(&self) -> Strand {
        self.0.iter().rev().copied().collect()
    }

    /// Return `width` acids starting at 1-based position `begin`.
    ///
    /// Requests that do not fit inside the strand (including `begin == 0`)
    /// produce an empty strand. Use [`Strand::try_substr`] to receive an
    /// error instead.
    ///
    /// ```rust
    /// # use dnastrand::Strand;
    /// let strand: Strand = "ACGAAGTCAGGGT".parse().unwrap();
    /// assert_eq!(strand.substr(10, 4), "GGGT".parse::<Strand>().unwrap());
    /// assert!(strand.substr(11, 4).is_empty());
    /// ```
    pub fn substr(&self, begin: usize, width: usize) -> Strand {
        self.try_substr(begin, width).unwrap_or_default()
    }

    /// Return `width` acids starting at 1-based position `begin`, or
    /// `RangeOutOfBounds` if the range does not fit.
    pub fn try_substr(&self, begin: usize, width: usize) -> Result<Strand, StrandError> {
        let range = self.range(begin, width)?;
        Ok(Self(self.0[range].to_vec()))
    }

    /// Return the 1-based position of the first occurrence of `pattern`.
    ///
    /// The scan restarts the pattern at every position of `self`, so the
    /// worst case is proportional to the product of both lengths. An empty
    /// pattern matches at position 1.
    pub fn find(&self, pattern: &Strand) -> Option<usize> {
        if pattern.is_empty() {
            return Some(1);
        }
        self.0
            .windows(pattern.len())
            .position(|window| window == pattern.as_slice())
            .map(|index| index + 1)
    }

    /// Like [`Strand::find`], returning [`NOT_FOUND`] when absent.
    pub fn find_position(&self, pattern: &Strand) -> i64 {
        self.find(pattern)
            .and_then(|position| i64::try_from(position).ok())
            .unwrap_or(NOT_FOUND)
    }

    /// Render the acids without separators (e.g. `"ACGT"`).
    pub fn to_compact_string(&self) -> String {
        self.0.iter().map(|acid| acid.to_char()).collect()
    }

    // Converts a 1-based (begin, width) request to a 0-based slice range.
    fn range(&self, begin: usize, width: usize) -> Result<Range<usize>, StrandError> {
        let out_of_bounds = || StrandError::RangeOutOfBounds {
            begin,
            width,
            len: self.len(),
        };
        let start = begin.checked_sub(1).ok_or_else(out_of_bounds)?;
        let end = start
            .checked_add(width)
            .filter(|&end| end <= self.len())
            .ok_or_else(out_of_bounds)?;
        Ok(start..end)
    }
}

impl Default for Strand {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for Strand {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }

    fn clone_from(&mut self, source: &Self) {
        self.0.clone_from(&source.0);
    }
}

/// Acids separated by single spaces, e.g. `"A C G T"`.
impl fmt::Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut acids = self.0.iter();
        if let Some(first) = acids.next() {
            write!(f, "{first}")?;
            for acid in acids {
                write!(f, " {acid}")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Strand {
    type Err = StrandError;

    /// Parse a token such as `"ACGT"` into a `Strand`.
    ///
    /// Whitespace and control characters produce `InvalidChar`. Any other
    /// character becomes one acid; there is no alphabet check.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let acids: Result<Vec<Acid>, _> = s.chars().map(Acid::try_from).collect();
        Ok(Self(acids?))
    }
}

impl FromIterator<Acid> for Strand {
    fn from_iter<I: IntoIterator<Item = Acid>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl FromIterator<char> for Strand {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self(iter.into_iter().map(Acid::new).collect())
    }
}

impl<'a> IntoIterator for &'a Strand {
    type Item = &'a Acid;
    type IntoIter = slice::Iter<'a, Acid>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Add<&Strand> for &Strand {
    type Output = Strand;

    fn add(self, rhs: &Strand) -> Strand {
        self.concat(rhs)
    }
}

impl Add<&Strand> for Strand {
    type Output = Strand;

    fn add(mut self, rhs: &Strand) -> Strand {
        self.0.extend_from_slice(&rhs.0);
        self
    }
}

impl Add for Strand {
    type Output = Strand;

    fn add(self, rhs: Strand) -> Strand {
        self + &rhs
    }
}
