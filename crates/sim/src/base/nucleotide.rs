use core::fmt;

use serde::{Deserialize, Serialize};
use crate::errors::InvalidNucleotide;

/// A DNA nucleotide base.
///
/// `Nucleotide` is a compact, Copyable representation of DNA bases backed by
/// a single byte (u8). The mapping of variants to integers is stable and is
/// used to index the substitution weight matrix (A=0, C=1, G=2, T=3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Nucleotide {
    A = 0,
    C = 1,
    G = 2,
    T = 3,
}

impl Nucleotide {
    /// All four bases in index order.
    pub const ALL: [Nucleotide; 4] = [Self::A, Self::C, Self::G, Self::T];

    /// Matrix index of this base.
    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Convert from an ASCII byte. Lowercase input is accepted.
    #[inline]
    pub const fn from_ascii(byte: u8) -> Option<Self> {
        match byte {
            b'A' | b'a' => Some(Self::A),
            b'C' | b'c' => Some(Self::C),
            b'G' | b'g' => Some(Self::G),
            b'T' | b't' => Some(Self::T),
            _ => None,
        }
    }

    /// Convert from a `char`. Non-ASCII characters are rejected.
    #[inline]
    pub fn from_char(c: char) -> Option<Self> {
        if c.is_ascii() {
            Self::from_ascii(c as u8)
        } else {
            None
        }
    }

    /// Convert to an uppercase ASCII byte representing this nucleotide.
    #[inline(always)]
    pub const fn to_ascii(self) -> u8 {
        match self {
            Self::A => b'A',
            Self::C => b'C',
            Self::G => b'G',
            Self::T => b'T',
        }
    }

    /// Convert to an uppercase `char` representing this nucleotide.
    #[inline(always)]
    pub const fn to_char(self) -> char {
        self.to_ascii() as char
    }

    /// Return the complementary base (A <-> T, C <-> G).
    #[inline(always)]
    pub const fn complement(self) -> Self {
        match self {
            Self::A => Self::T,
            Self::T => Self::A,
            Self::C => Self::G,
            Self::G => Self::C,
        }
    }

    /// Return true if the nucleotide is a purine (A or G).
    #[inline(always)]
    pub const fn is_purine(self) -> bool {
        matches!(self, Self::A | Self::G)
    }

    /// Return true if the nucleotide is a pyrimidine (C or T).
    #[inline(always)]
    pub const fn is_pyrimidine(self) -> bool {
        matches!(self, Self::C | Self::T)
    }

    /// The base reached from `self` by a transition (A <-> G, C <-> T).
    #[inline(always)]
    pub const fn transition_partner(self) -> Self {
        match self {
            Self::A => Self::G,
            Self::G => Self::A,
            Self::C => Self::T,
            Self::T => Self::C,
        }
    }

    /// True when `self -> other` is a transition: both purines or both
    /// pyrimidines, and not the same base.
    #[inline]
    pub const fn is_transition_to(self, other: Self) -> bool {
        (self as u8) != (other as u8)
            && ((self.is_purine() && other.is_purine())
                || (self.is_pyrimidine() && other.is_pyrimidine()))
    }

    /// The three bases other than `self`, in index order.
    #[inline]
    pub fn alternatives(self) -> [Nucleotide; 3] {
        match self {
            Self::A => [Self::C, Self::G, Self::T],
            Self::C => [Self::A, Self::G, Self::T],
            Self::G => [Self::A, Self::C, Self::T],
            Self::T => [Self::A, Self::C, Self::G],
        }
    }
}

impl TryFrom<u8> for Nucleotide {
    type Error = InvalidNucleotide;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        Self::from_ascii(byte).ok_or(InvalidNucleotide(byte))
    }
}

impl From<Nucleotide> for char {
    #[inline(always)]
    fn from(nuc: Nucleotide) -> char {
        nuc.to_char()
    }
}

impl fmt::Display for Nucleotide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
