use anyhow::{Context, Result};
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub const DEFAULT_LINE_WIDTH: usize = 60;

/// Wraps `seq` into lines of at most `line_width` characters joined by `\n`.
///
/// No trailing newline. A width of 0 keeps everything on one line.
pub fn format_fasta_sequence(seq: &str, line_width: usize) -> String {
    if line_width == 0 {
        return seq.to_string();
    }

    let mut out = String::with_capacity(seq.len() + seq.len() / line_width);
    for (i, c) in seq.chars().enumerate() {
        if i > 0 && i % line_width == 0 {
            out.push('\n');
        }
        out.push(c);
    }
    out
}

#[derive(Debug, Clone)]
pub struct FastaRecord {
    pub id: String,
    pub description: String,
    pub sequence: String,
}

impl FastaRecord {
    pub fn new(id: String, description: String, sequence: String) -> Self {
        FastaRecord {
            id,
            description,
            sequence,
        }
    }

    pub fn header(&self) -> String {
        format!(">{} {}", self.id, self.description)
    }

    // header line, then the wrapped body, each newline-terminated
    pub fn write_to_bytes(&self, buffer: &mut Vec<u8>, line_width: usize) {
        buffer.extend_from_slice(self.header().as_bytes());
        buffer.push(b'\n');
        buffer.extend_from_slice(format_fasta_sequence(&self.sequence, line_width).as_bytes());
        buffer.push(b'\n');
    }
}

/// `<out_dir>/<id>.fasta`, or `.fasta.gz` when compressing. The id is used verbatim.
pub fn output_path(out_dir: &Path, id: &str, compress: bool) -> PathBuf {
    let extension = if compress { ".fasta.gz" } else { ".fasta" };
    out_dir.join(format!("{}{}", id, extension))
}

/// Writes a single record to `path`, gzip-compressed if the path ends in `.gz`.
pub fn write_fasta(path: &Path, record: &FastaRecord, line_width: usize) -> Result<()> {
    let mut buffer = Vec::with_capacity(record.sequence.len() + 64);
    record.write_to_bytes(&mut buffer, line_width);

    let file = File::create(path)
        .with_context(|| format!("failed to create FASTA file {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    if path.extension().and_then(|s| s.to_str()) == Some("gz") {
        let mut encoder = GzEncoder::new(writer, Compression::default());
        encoder
            .write_all(&buffer)
            .with_context(|| format!("failed to write {}", path.display()))?;
        writer = encoder
            .finish()
            .with_context(|| format!("failed to finish gzip stream {}", path.display()))?;
    } else {
        writer
            .write_all(&buffer)
            .with_context(|| format!("failed to write {}", path.display()))?;
    }

    writer
        .flush()
        .with_context(|| format!("failed to flush {}", path.display()))?;
    Ok(())
}
