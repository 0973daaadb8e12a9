use crate::sequence::Nucleotide;

/// Base composition of a (post-insertion) sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceStats {
    /// Occurrences of A, C, G, T in that order.
    pub counts: [usize; 4],
    /// Share of each base among all counted bases, rounded to one decimal.
    pub percentages: [f64; 4],
    /// (C+G)/(A+T) as a percentage, rounded to one decimal.
    pub cg_at_ratio: f64,
}

impl SequenceStats {
    pub fn count(&self, nuc: Nucleotide) -> usize {
        self.counts[nuc.index()]
    }

    pub fn percentage(&self, nuc: Nucleotide) -> f64 {
        self.percentages[nuc.index()]
    }

    /// Number of A/C/G/T characters; label characters that are not bases are excluded.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// Counts bases in `content` and derives percentages and the CG/AT ratio.
///
/// Empty content (or content without any base) yields all-zero percentages.
pub fn calculate_statistics(content: &str) -> SequenceStats {
    let mut counts = [0usize; 4];
    for nuc in content.chars().filter_map(Nucleotide::from_char) {
        counts[nuc.index()] += 1;
    }

    let total: usize = counts.iter().sum();
    let percentages = counts.map(|count| {
        if total == 0 {
            0.0
        } else {
            round1(count as f64 / total as f64 * 100.0)
        }
    });

    let cg = counts[Nucleotide::C.index()] + counts[Nucleotide::G.index()];
    let at = counts[Nucleotide::A.index()] + counts[Nucleotide::T.index()];
    let cg_at_ratio = if at > 0 {
        round1(cg as f64 / at as f64 * 100.0)
    } else {
        0.0
    };

    SequenceStats {
        counts,
        percentages,
        cg_at_ratio,
    }
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}
