use crate::sequence::Nucleotide;
use crate::stats::SequenceStats;
use std::fmt::Write;
use std::path::Path;

/// Console summary printed after the file has been written.
pub fn render(path: &Path, stats: &SequenceStats) -> String {
    let mut out = String::new();
    writeln!(out).unwrap();
    writeln!(out, "Sekwencja została zapisana do pliku {}", path.display()).unwrap();
    writeln!(out, "Statystyki sekwencji:").unwrap();
    for nuc in Nucleotide::ALL {
        writeln!(
            out,
            "{}: {} ({:.1}%)",
            nuc,
            stats.count(nuc),
            stats.percentage(nuc)
        ).unwrap();
    }
    writeln!(out, "%CG (stosunek CG do AT): {:.1}", stats.cg_at_ratio).unwrap();
    out
}
