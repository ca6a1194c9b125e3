//! Concrete sequence type aliases and strand operations.
//!
//! - [`DnaSequence`] — complement (replication), transcription, GC-content
//! - [`RnaSequence`] — reverse transcription, translation
//! - [`ProteinSequence`] — monoisotopic mass

use catena_core::Result;

use crate::alphabet::{DnaAlphabet, ProteinAlphabet, RnaAlphabet};
use crate::codon;
use crate::seq::ValidatedSeq;

/// A validated DNA strand.
pub type DnaSequence = ValidatedSeq<DnaAlphabet>;

/// A validated RNA strand.
pub type RnaSequence = ValidatedSeq<RnaAlphabet>;

/// A validated amino acid sequence, possibly ending in the stop marker `*`.
pub type ProteinSequence = ValidatedSeq<ProteinAlphabet>;

// ---------------------------------------------------------------------------
// Substitution tables
// ---------------------------------------------------------------------------

/// DNA base pairing: A↔T, C↔G.
const fn dna_complement(b: u8) -> u8 {
    match b {
        b'A' => b'T',
        b'T' => b'A',
        b'C' => b'G',
        b'G' => b'C',
        other => other,
    }
}

/// Complementary transcription: A→U, T→A, C→G, G→C.
const fn dna_to_rna(b: u8) -> u8 {
    match b {
        b'A' => b'U',
        b'T' => b'A',
        b'C' => b'G',
        b'G' => b'C',
        other => other,
    }
}

/// Reverse transcription: A→T, U→A, C→G, G→C.
const fn rna_to_dna(b: u8) -> u8 {
    match b {
        b'A' => b'T',
        b'U' => b'A',
        b'C' => b'G',
        b'G' => b'C',
        other => other,
    }
}

// ---------------------------------------------------------------------------
// DNA methods
// ---------------------------------------------------------------------------

impl DnaSequence {
    /// Return the complementary strand (the replication product).
    ///
    /// Position-wise substitution; the result is not reversed.
    pub fn complement(&self) -> DnaSequence {
        let dna: Vec<u8> = self.iter().map(|&b| dna_complement(b)).collect();
        DnaSequence::from_validated(dna)
    }

    /// Transcribe DNA to RNA by complementary substitution.
    pub fn transcribe(&self) -> RnaSequence {
        let rna: Vec<u8> = self.iter().map(|&b| dna_to_rna(b)).collect();
        RnaSequence::from_validated(rna)
    }

    /// GC-content as a percentage in [0.0, 100.0].
    ///
    /// Returns 0.0 for empty sequences.
    pub fn gc_content(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        let gc = self.iter().filter(|&&b| b == b'G' || b == b'C').count();
        gc as f64 * 100.0 / self.len() as f64
    }
}

// ---------------------------------------------------------------------------
// RNA methods
// ---------------------------------------------------------------------------

impl RnaSequence {
    /// Reverse-transcribe RNA to DNA.
    pub fn reverse_transcribe(&self) -> DnaSequence {
        let dna: Vec<u8> = self.iter().map(|&b| rna_to_dna(b)).collect();
        DnaSequence::from_validated(dna)
    }

    /// Translate RNA to protein.
    ///
    /// Requires a valid reading frame (length divisible by 3, leading AUG,
    /// in-frame stop codon present); stops after emitting the first `*`.
    pub fn translate(&self) -> Result<ProteinSequence> {
        codon::translate(self)
    }
}

// ---------------------------------------------------------------------------
// Protein methods
// ---------------------------------------------------------------------------

/// Monoisotopic residue masses (Da). The stop marker weighs nothing.
fn residue_mass(aa: u8) -> f64 {
    match aa {
        b'A' => 71.03711,
        b'C' => 103.00919,
        b'D' => 115.02694,
        b'E' => 129.04259,
        b'F' => 147.06841,
        b'G' => 57.02146,
        b'H' => 137.05891,
        b'I' => 113.08406,
        b'K' => 128.09496,
        b'L' => 113.08406,
        b'M' => 131.04049,
        b'N' => 114.04293,
        b'P' => 97.05276,
        b'Q' => 128.05858,
        b'R' => 156.10111,
        b'S' => 87.03203,
        b'T' => 101.04768,
        b'V' => 99.06841,
        b'W' => 186.07931,
        b'Y' => 163.06333,
        _ => 0.0,
    }
}

impl ProteinSequence {
    /// Monoisotopic mass in Daltons: the sum of residue masses.
    ///
    /// The stop marker `*` contributes 0.
    pub fn mass(&self) -> f64 {
        self.iter().map(|&aa| residue_mass(aa)).sum()
    }
}
