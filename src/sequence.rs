use rand::Rng;
use std::fmt;

/// One of the four DNA bases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nucleotide {
    A,
    C,
    G,
    T,
}

impl Nucleotide {
    pub const ALL: [Nucleotide; 4] = [Nucleotide::A, Nucleotide::C, Nucleotide::G, Nucleotide::T];

    pub fn as_char(self) -> char {
        match self {
            Nucleotide::A => 'A',
            Nucleotide::C => 'C',
            Nucleotide::G => 'G',
            Nucleotide::T => 'T',
        }
    }

    /// Exact, case-sensitive match: a lowercase `a` in a label is not a base.
    pub fn from_char(c: char) -> Option<Nucleotide> {
        match c {
            'A' => Some(Nucleotide::A),
            'C' => Some(Nucleotide::C),
            'G' => Some(Nucleotide::G),
            'T' => Some(Nucleotide::T),
            _ => None,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Nucleotide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Random DNA sequence of exactly `length` bases, each drawn uniformly from ACGT.
pub fn generate_sequence<R: Rng + ?Sized>(length: usize, rng: &mut R) -> String {
    (0..length)
        .map(|_| Nucleotide::ALL[rng.random_range(0..Nucleotide::ALL.len())].as_char())
        .collect()
}

/// Result of splicing a label into a sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inserted {
    pub sequence: String,
    /// Character offset the label starts at.
    pub offset: usize,
}

/// Splices `label` into `sequence` at an offset drawn uniformly from `0..=len`.
pub fn insert_label<R: Rng + ?Sized>(sequence: &str, label: &str, rng: &mut R) -> Inserted {
    let len = sequence.chars().count();
    let offset = rng.random_range(0..=len);
    Inserted {
        sequence: insert_label_at(sequence, label, offset),
        offset,
    }
}

/// Splices `label` into `sequence` before the character at `offset`.
///
/// Offsets past the end append the label.
pub fn insert_label_at(sequence: &str, label: &str, offset: usize) -> String {
    let split = sequence
        .char_indices()
        .nth(offset)
        .map(|(i, _)| i)
        .unwrap_or(sequence.len());

    let mut out = String::with_capacity(sequence.len() + label.len());
    out.push_str(&sequence[..split]);
    out.push_str(label);
    out.push_str(&sequence[split..]);
    out
}
