//! Codon lookup, reading-frame validation, and RNA→protein translation.
//!
//! The standard genetic code is stored as a 64-element amino acid array
//! indexed by 2-bit base encoding. Translation is strict: the frame must be
//! a whole number of codons, open with AUG, and contain an in-frame stop
//! codon; the emitted protein ends with a single `*` at the first stop.

use catena_core::{CatenaError, Result};

use crate::types::{ProteinSequence, RnaSequence};

// ---------------------------------------------------------------------------
// Base encoding: A=0, C=1, G=2, U=3
// ---------------------------------------------------------------------------

fn base_index(b: u8) -> Option<usize> {
    match b {
        b'A' => Some(0),
        b'C' => Some(1),
        b'G' => Some(2),
        b'U' => Some(3),
        _ => None,
    }
}

/// Convert a 3-base RNA codon to an index in [0, 64).
fn codon_index(codon: &[u8]) -> Option<usize> {
    if codon.len() != 3 {
        return None;
    }
    let b1 = base_index(codon[0])?;
    let b2 = base_index(codon[1])?;
    let b3 = base_index(codon[2])?;
    Some(b1 * 16 + b2 * 4 + b3)
}

// ---------------------------------------------------------------------------
// Standard genetic code
// ---------------------------------------------------------------------------

// Codon order: AAA, AAC, AAG, AAU, ACA, ACC, ACG, ACU, AGA, AGC, AGG, AGU,
//              AUA, AUC, AUG, AUU, CAA, CAC, CAG, CAU, CCA, CCC, CCG, CCU,
//              CGA, CGC, CGG, CGU, CUA, CUC, CUG, CUU, GAA, GAC, GAG, GAU,
//              GCA, GCC, GCG, GCU, GGA, GGC, GGG, GGU, GUA, GUC, GUG, GUU,
//              UAA, UAC, UAG, UAU, UCA, UCC, UCG, UCU, UGA, UGC, UGG, UGU,
//              UUA, UUC, UUG, UUU

/// Amino acid (or `*` for stop) per codon index.
const CODON_AA: [u8; 64] = [
    b'K', b'N', b'K', b'N', b'T', b'T', b'T', b'T', b'R', b'S', b'R', b'S',
    b'I', b'I', b'M', b'I', b'Q', b'H', b'Q', b'H', b'P', b'P', b'P', b'P',
    b'R', b'R', b'R', b'R', b'L', b'L', b'L', b'L', b'E', b'D', b'E', b'D',
    b'A', b'A', b'A', b'A', b'G', b'G', b'G', b'G', b'V', b'V', b'V', b'V',
    b'*', b'Y', b'*', b'Y', b'S', b'S', b'S', b'S', b'*', b'C', b'W', b'C',
    b'L', b'F', b'L', b'F',
];

/// The translation start codon.
pub const START_CODON: &[u8; 3] = b"AUG";

/// The three translation stop codons.
pub const STOP_CODONS: [&[u8; 3]; 3] = [b"UAA", b"UAG", b"UGA"];

/// Translate a single RNA codon to an amino acid.
///
/// Stop codons yield `Some(b'*')`. Returns `None` for anything that is not a
/// 3-base codon over `AUCG`.
pub fn translate_codon(codon: &[u8]) -> Option<u8> {
    codon_index(codon).map(|idx| CODON_AA[idx])
}

/// Check whether a codon is the start codon AUG.
pub fn is_start_codon(codon: &[u8]) -> bool {
    codon == START_CODON
}

/// Check whether a codon is one of the three stop codons.
pub fn is_stop_codon(codon: &[u8]) -> bool {
    codon_index(codon).map_or(false, |idx| CODON_AA[idx] == b'*')
}

// ---------------------------------------------------------------------------
// Reading-frame validation
// ---------------------------------------------------------------------------

/// Validate that an RNA strand forms a translatable reading frame.
///
/// Checks, in order: the strand is non-empty, its length is divisible by 3,
/// the first codon is AUG, and a stop codon occurs at a codon boundary.
/// Out-of-frame stop triplets do not count. Alphabet membership is already
/// guaranteed by the [`RnaSequence`] type.
pub fn validate_reading_frame(rna: &RnaSequence) -> Result<()> {
    if rna.is_empty() {
        return Err(CatenaError::Processing(
            "cannot translate an empty RNA chain".to_string(),
        ));
    }
    if rna.len() % 3 != 0 {
        return Err(CatenaError::Processing(format!(
            "RNA length must be divisible by 3, current length is {}",
            rna.len()
        )));
    }
    if !is_start_codon(&rna[..3]) {
        return Err(CatenaError::Processing(
            "RNA must start with the AUG start codon".to_string(),
        ));
    }
    if !rna.chunks_exact(3).any(is_stop_codon) {
        return Err(CatenaError::Processing(
            "RNA must contain an in-frame stop codon (UAA / UAG / UGA)".to_string(),
        ));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Translation
// ---------------------------------------------------------------------------

/// Translate an RNA strand to protein.
///
/// Validates the reading frame, then scans codon-by-codon from position 0,
/// appending each codon's residue. Iteration stops immediately after the `*`
/// emitted for the first stop codon; trailing sequence is discarded.
pub fn translate(rna: &RnaSequence) -> Result<ProteinSequence> {
    validate_reading_frame(rna)?;
    let mut protein = Vec::with_capacity(rna.len() / 3);
    for codon in rna.chunks_exact(3) {
        // Frame validation guarantees every chunk is a well-formed codon.
        let idx = codon_index(codon).ok_or_else(|| {
            CatenaError::Processing(format!(
                "untranslatable codon {}",
                String::from_utf8_lossy(codon)
            ))
        })?;
        let aa = CODON_AA[idx];
        protein.push(aa);
        if aa == b'*' {
            break;
        }
    }
    Ok(ProteinSequence::from_validated(protein))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Sense (non-stop, non-start-relevant) codons for frame construction.
    fn sense_codon() -> impl Strategy<Value = [u8; 3]> {
        prop_oneof![
            Just(*b"UUU"),
            Just(*b"CUG"),
            Just(*b"GCU"),
            Just(*b"AAA"),
            Just(*b"GGC"),
            Just(*b"ACG"),
            Just(*b"UAC"),
            Just(*b"CAU"),
        ]
    }

    proptest! {
        #[test]
        fn coding_frame_translates_to_expected_length(
            body in proptest::collection::vec(sense_codon(), 0..50)
        ) {
            let mut seq = b"AUG".to_vec();
            for codon in &body {
                seq.extend_from_slice(codon);
            }
            seq.extend_from_slice(b"UAA");
            let rna = RnaSequence::new(&seq).unwrap();
            let protein = translate(&rna).unwrap();
            // Met + one residue per body codon + the stop marker.
            prop_assert_eq!(protein.len(), body.len() + 2);
            prop_assert_eq!(protein[0], b'M');
            prop_assert_eq!(protein[protein.len() - 1], b'*');
            prop_assert_eq!(protein.iter().filter(|&&aa| aa == b'*').count(), 1);
        }
    }
}
