// lib.rs - random labelled DNA sequences written as FASTA

pub mod fasta;
pub mod input;
pub mod logger;
pub mod report;
pub mod run;
pub mod sequence;
pub mod stats;

pub use fasta::{format_fasta_sequence, write_fasta, FastaRecord, DEFAULT_LINE_WIDTH};
pub use input::{collect_inputs, parse_length, Inputs, LengthError, Overrides};
pub use run::{run, RunConfig, RunOutput};
pub use sequence::{generate_sequence, insert_label, insert_label_at, Inserted, Nucleotide};
pub use stats::{calculate_statistics, SequenceStats};
