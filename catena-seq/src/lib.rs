//! Deterministic DNA/RNA/protein chain processing.
//!
//! Models three stages of molecular information flow as strict,
//! grammar-validated symbol transformations:
//!
//! - **Alphabets** — [`DnaAlphabet`], [`RnaAlphabet`], [`ProteinAlphabet`]
//! - **Sequences** — [`DnaSequence`], [`RnaSequence`], [`ProteinSequence`]
//! - **Codon translation** — standard genetic code with strict reading-frame
//!   validation (leading AUG, in-frame stop)
//! - **Chain records** — [`Chain`] holds one sample's raw input and every
//!   derived strand, with on-demand [`ChainStats`]
//! - **FASTA plumbing** — [`read_fasta`] ingest and [`export_chain`] output
//!
//! # Example
//!
//! ```
//! use catena_seq::Chain;
//!
//! // DNA replication: raw input → validated strand + complement
//! let mut chain = Chain::new("sample", "ATGAAAGCT");
//! let dna2 = chain.replicate().unwrap();
//! assert_eq!(dna2.as_ref(), b"TACTTTCGA");
//!
//! // Complementary transcription of the same raw input
//! let rna = chain.transcribe().unwrap();
//! assert_eq!(rna.as_ref(), b"UACUUUCGA");
//!
//! // Translation requires a leading AUG and an in-frame stop codon;
//! // the stop marker appears once at the end of the protein.
//! let mut coding = Chain::new("coding", "AUGUUUUAA");
//! let protein = coding.translate().unwrap();
//! assert_eq!(protein.as_ref(), b"MF*");
//!
//! // Statistics are derived from whatever fields are populated.
//! let stats = chain.stats();
//! assert_eq!(stats.nucleotides, Some(9));
//! assert_eq!(stats.codons, Some(3));
//! ```

pub mod alphabet;
pub mod chain;
pub mod codon;
pub mod fasta;
pub mod seq;
pub mod types;

// Re-export alphabet types
pub use alphabet::{Alphabet, DnaAlphabet, ProteinAlphabet, RnaAlphabet};

// Re-export the generic sequence type
pub use seq::ValidatedSeq;

// Re-export concrete type aliases and their methods
pub use types::{DnaSequence, ProteinSequence, RnaSequence};

// Re-export codon translation and frame validation
pub use codon::{
    is_start_codon, is_stop_codon, translate_codon, validate_reading_frame, START_CODON,
    STOP_CODONS,
};

// Re-export the chain record and statistics
pub use chain::{Chain, ChainStats};

// Re-export FASTA plumbing
pub use fasta::{export_chain, read_fasta, FastaRecord};
