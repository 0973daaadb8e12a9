use crate::fasta::{self, FastaRecord};
use crate::input::Inputs;
use crate::sequence::{generate_sequence, insert_label};
use crate::stats::{calculate_statistics, SequenceStats};
use anyhow::Result;
use log::debug;
use rand::Rng;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub out_dir: PathBuf,
    pub line_width: usize,
    pub compress: bool,
    /// Compute statistics on a second, independently labelled copy instead of the saved sequence.
    pub independent_stats_insertion: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            out_dir: PathBuf::from("."),
            line_width: fasta::DEFAULT_LINE_WIDTH,
            compress: false,
            independent_stats_insertion: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RunOutput {
    pub path: PathBuf,
    pub record: FastaRecord,
    /// Where the label sits in the saved sequence.
    pub label_offset: usize,
    pub stats: SequenceStats,
}

/// Generates, labels, measures and writes one FASTA record.
pub fn run<R: Rng + ?Sized>(inputs: &Inputs, config: &RunConfig, rng: &mut R) -> Result<RunOutput> {
    let dna = generate_sequence(inputs.length, rng);
    debug!("generated {} bases", dna.len());

    let saved = insert_label(&dna, &inputs.label, rng);
    debug!("label inserted at offset {}", saved.offset);

    let stats = if config.independent_stats_insertion {
        let copy = insert_label(&dna, &inputs.label, rng);
        debug!("statistics copy has the label at offset {}", copy.offset);
        calculate_statistics(&copy.sequence)
    } else {
        calculate_statistics(&saved.sequence)
    };

    let path = fasta::output_path(&config.out_dir, &inputs.id, config.compress);
    let record = FastaRecord::new(inputs.id.clone(), inputs.description.clone(), saved.sequence);
    fasta::write_fasta(&path, &record, config.line_width)?;
    debug!("wrote {}", path.display());

    Ok(RunOutput {
        path,
        record,
        label_offset: saved.offset,
        stats,
    })
}
