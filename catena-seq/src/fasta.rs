//! FASTA-style ingest and plain-text chain export.
//!
//! Reading parses `>label` + sequence records into [`FastaRecord`]s; the
//! decoded text payload is what the processing pipeline consumes. Export
//! writes a chain's populated fields as `>label-suffix` blocks, one per
//! strand/protein, blank-line separated.

use std::path::{Path, PathBuf};

use catena_core::{CatenaError, Result};
use needletail::parse_fastx_file;

use crate::chain::Chain;

/// One record from a FASTA file: a label and its sequence text.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FastaRecord {
    /// The first whitespace-delimited token of the header line.
    pub label: String,
    /// The sequence with all whitespace stripped, case as given.
    pub sequence: String,
}

/// Parse a FASTA file into labeled sequence records.
///
/// The sequence text is not validated here; validation happens when a
/// record is fed into a [`Chain`] processing method.
pub fn read_fasta(path: impl AsRef<Path>) -> Result<Vec<FastaRecord>> {
    let path = path.as_ref();
    let mut reader = parse_fastx_file(path).map_err(|e| CatenaError::Parse(e.to_string()))?;

    let mut records = Vec::new();
    while let Some(record) = reader.next() {
        let record = record.map_err(|e| CatenaError::Parse(e.to_string()))?;
        let label = String::from_utf8_lossy(record.id())
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .to_string();
        let sequence = String::from_utf8_lossy(&record.seq()).into_owned();
        records.push(FastaRecord { label, sequence });
    }
    Ok(records)
}

/// Write a chain's populated fields to `<dir>/chains-<info>.txt`.
///
/// Each populated field becomes a `>info-suffix` header line followed by the
/// sequence and a blank line, in the order DNA1, DNA2, RNA, protein.
/// Returns the path written.
pub fn export_chain(dir: impl AsRef<Path>, chain: &Chain) -> Result<PathBuf> {
    let path = dir.as_ref().join(format!("chains-{}.txt", chain.info()));

    let mut out = String::new();
    let mut block = |suffix: &str, seq: String| {
        out.push_str(&format!(">{}-{}\n{}\n\n", chain.info(), suffix, seq));
    };
    if let Some(dna1) = chain.dna1() {
        block("DNA1", dna1.to_string());
    }
    if let Some(dna2) = chain.dna2() {
        block("DNA2", dna2.to_string());
    }
    if let Some(rna) = chain.rna() {
        block("RNA", rna.to_string());
    }
    if let Some(protein) = chain.protein() {
        block("protein", protein.to_string());
    }

    std::fs::write(&path, out).map_err(|e| {
        CatenaError::Io(std::io::Error::new(
            e.kind(),
            format!("{}: {}", path.display(), e),
        ))
    })?;
    Ok(path)
}
