//! The chain record: one sample's raw input and everything derived from it.
//!
//! A [`Chain`] is created from an info label and a raw sequence string, then
//! mutated only by its own processing methods:
//!
//! - [`Chain::replicate`] — raw DNA → complementary strand
//! - [`Chain::transcribe`] — raw DNA → RNA
//! - [`Chain::translate`] — raw RNA → protein
//! - [`Chain::stats`] — derived statistics over the populated fields
//!
//! Each derivation validates the raw input, fully populates its target
//! field and returns it, or fails without touching the other fields.

use catena_core::{Annotated, CatenaError, Result, Summarizable};

use crate::codon;
use crate::types::{DnaSequence, ProteinSequence, RnaSequence};

/// The unit of work: an info label, the raw input, and derived strands.
#[derive(Debug, Clone, Default)]
pub struct Chain {
    info: String,
    raw: String,
    dna1: Option<DnaSequence>,
    dna2: Option<DnaSequence>,
    rna: Option<RnaSequence>,
    protein: Option<ProteinSequence>,
}

impl Chain {
    /// Create a chain from an info label and a raw sequence string.
    ///
    /// The raw input is kept as given; validation and case normalization
    /// happen when a processing method runs.
    pub fn new(info: impl Into<String>, raw: impl Into<String>) -> Self {
        Chain {
            info: info.into(),
            raw: raw.into(),
            ..Chain::default()
        }
    }

    /// Create a chain with a timestamp-derived info label.
    pub fn with_generated_info(raw: impl Into<String>) -> Self {
        let info = format!(
            "catena-{}",
            chrono::Local::now().format("%Y%m%d-%H%M%S")
        );
        Chain::new(info, raw)
    }

    /// The sample label.
    pub fn info(&self) -> &str {
        &self.info
    }

    /// The raw input sequence, as given.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The validated first DNA strand, if replication or transcription ran.
    pub fn dna1(&self) -> Option<&DnaSequence> {
        self.dna1.as_ref()
    }

    /// The complementary DNA strand, if replication ran.
    pub fn dna2(&self) -> Option<&DnaSequence> {
        self.dna2.as_ref()
    }

    /// The RNA strand, if transcription or translation ran.
    pub fn rna(&self) -> Option<&RnaSequence> {
        self.rna.as_ref()
    }

    /// The protein, if translation ran.
    pub fn protein(&self) -> Option<&ProteinSequence> {
        self.protein.as_ref()
    }

    /// Validate the raw input as DNA and return it as the first strand.
    fn validated_dna(&self) -> Result<DnaSequence> {
        if self.raw.is_empty() {
            return Err(CatenaError::Processing("input chain is empty".to_string()));
        }
        DnaSequence::new(self.raw.as_bytes())
    }

    /// DNA → DNA: populate `dna1` from the raw input and derive the
    /// complementary `dna2`.
    pub fn replicate(&mut self) -> Result<&DnaSequence> {
        let dna1 = self.validated_dna()?;
        let dna2 = dna1.complement();
        self.dna1 = Some(dna1);
        Ok(self.dna2.insert(dna2))
    }

    /// DNA → RNA: populate `dna1` from the raw input and derive `rna` by
    /// complementary transcription.
    pub fn transcribe(&mut self) -> Result<&RnaSequence> {
        let dna1 = self.validated_dna()?;
        let rna = dna1.transcribe();
        self.dna1 = Some(dna1);
        Ok(self.rna.insert(rna))
    }

    /// RNA → protein: validate the raw input as a translatable reading frame,
    /// populate `rna`, and derive `protein`.
    ///
    /// The protein truncates at the first in-frame stop codon, which appears
    /// once in the output as `*`.
    pub fn translate(&mut self) -> Result<&ProteinSequence> {
        if self.raw.is_empty() {
            return Err(CatenaError::Processing("input chain is empty".to_string()));
        }
        // Length check runs before alphabet validation; first failure wins.
        if self.raw.len() % 3 != 0 {
            return Err(CatenaError::Processing(format!(
                "RNA length must be divisible by 3, current length is {}",
                self.raw.len()
            )));
        }
        let rna = RnaSequence::new(self.raw.as_bytes())?;
        let protein = codon::translate(&rna)?;
        self.rna = Some(rna);
        Ok(self.protein.insert(protein))
    }

    /// Compute statistics over whichever fields are populated.
    ///
    /// Each statistic is computed independently; the result ranges from
    /// empty to fully populated. Nothing is cached on the chain.
    pub fn stats(&self) -> ChainStats {
        let mut stats = ChainStats::default();
        if let Some(dna1) = &self.dna1 {
            stats.nucleotides = Some(dna1.len());
            stats.codons = Some(dna1.len() / 3);
            stats.gc_content = Some(round_to(dna1.gc_content(), 6));
        }
        if let Some(protein) = &self.protein {
            stats.mass = Some(round_to(protein.mass(), 3));
        }
        stats
    }
}

impl Annotated for Chain {
    fn name(&self) -> &str {
        &self.info
    }
}

impl Summarizable for Chain {
    fn summary(&self) -> String {
        let mut derived = Vec::new();
        if self.dna1.is_some() {
            derived.push("dna1");
        }
        if self.dna2.is_some() {
            derived.push("dna2");
        }
        if self.rna.is_some() {
            derived.push("rna");
        }
        if self.protein.is_some() {
            derived.push("protein");
        }
        if derived.is_empty() {
            format!("chain '{}': raw {} nt", self.info, self.raw.len())
        } else {
            format!(
                "chain '{}': raw {} nt, derived {}",
                self.info,
                self.raw.len(),
                derived.join("/")
            )
        }
    }
}

/// Statistics derived from a chain's populated fields.
///
/// `nucleotides`, `codons`, and `gc_content` describe the first DNA strand;
/// `mass` describes the protein. A field is `None` when its source is absent.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChainStats {
    pub nucleotides: Option<usize>,
    pub codons: Option<usize>,
    /// GC percentage, rounded to 6 decimal digits.
    pub gc_content: Option<f64>,
    /// Protein monoisotopic mass in Daltons, rounded to 3 decimal digits.
    pub mass: Option<f64>,
}

fn round_to(value: f64, digits: u32) -> f64 {
    let factor = 10f64.powi(digits as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- Replication ---

    #[test]
    fn replicate_populates_both_strands() {
        let mut chain = Chain::new("s", "ATCG");
        let dna2 = chain.replicate().unwrap();
        assert_eq!(dna2.as_ref(), b"TAGC");
        assert_eq!(chain.dna1().unwrap().as_ref(), b"ATCG");
        assert_eq!(chain.dna2().unwrap().as_ref(), b"TAGC");
    }

    #[test]
    fn replicate_twice_is_identity_across_chains() {
        let mut first = Chain::new("a", "ATGAAAGCT");
        let dna2 = first.replicate().unwrap().to_string();
        let mut second = Chain::new("b", dna2);
        let back = second.replicate().unwrap();
        assert_eq!(back.as_ref(), b"ATGAAAGCT");
    }

    #[test]
    fn replicate_normalizes_case() {
        let mut chain = Chain::new("s", "atcg");
        assert_eq!(chain.replicate().unwrap().as_ref(), b"TAGC");
        assert_eq!(chain.raw(), "atcg");
    }

    #[test]
    fn replicate_rejects_invalid_symbol() {
        let mut chain = Chain::new("s", "ATCGX");
        let err = chain.replicate().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains('X') && msg.contains("position 4"), "{msg}");
        assert!(chain.dna1().is_none());
        assert!(chain.dna2().is_none());
    }

    #[test]
    fn replicate_rejects_empty() {
        let mut chain = Chain::new("s", "");
        assert!(chain.replicate().is_err());
    }

    // --- Transcription ---

    #[test]
    fn transcribe_populates_dna1_and_rna() {
        let mut chain = Chain::new("s", "ATCG");
        let rna = chain.transcribe().unwrap();
        assert_eq!(rna.as_ref(), b"UAGC");
        assert_eq!(chain.dna1().unwrap().as_ref(), b"ATCG");
        assert!(chain.dna2().is_none());
    }

    #[test]
    fn transcribe_rejects_empty() {
        let mut chain = Chain::new("s", "");
        assert!(chain.transcribe().is_err());
    }

    #[test]
    fn replicate_then_transcribe_share_dna1() {
        let mut chain = Chain::new("s", "ATCG");
        chain.replicate().unwrap();
        chain.transcribe().unwrap();
        assert_eq!(chain.dna1().unwrap().as_ref(), b"ATCG");
        assert_eq!(chain.dna2().unwrap().as_ref(), b"TAGC");
        assert_eq!(chain.rna().unwrap().as_ref(), b"UAGC");
    }

    // --- Translation ---

    #[test]
    fn translate_populates_rna_and_protein() {
        let mut chain = Chain::new("s", "AUGUUUUAA");
        let protein = chain.translate().unwrap();
        assert_eq!(protein.as_ref(), b"MF*");
        assert_eq!(chain.rna().unwrap().as_ref(), b"AUGUUUUAA");
    }

    #[test]
    fn translate_requires_start_codon() {
        let mut chain = Chain::new("s", "UUUAUGUAA");
        let err = chain.translate().unwrap_err();
        assert!(err.to_string().contains("AUG"));
        assert!(chain.rna().is_none());
        assert!(chain.protein().is_none());
    }

    #[test]
    fn translate_requires_stop_codon() {
        let mut chain = Chain::new("s", "AUGUUU");
        let err = chain.translate().unwrap_err();
        assert!(err.to_string().contains("stop codon"));
    }

    #[test]
    fn translate_length_error_reported_before_alphabet() {
        // Contains T (invalid RNA) and has ragged length; length wins.
        let mut chain = Chain::new("s", "AUGT");
        let err = chain.translate().unwrap_err();
        assert!(err.to_string().contains("divisible by 3"));
    }

    #[test]
    fn translate_rejects_dna_input() {
        let mut chain = Chain::new("s", "ATGTTTTAA");
        let err = chain.translate().unwrap_err();
        assert!(err.to_string().contains('T'));
    }

    #[test]
    fn translate_rejects_empty() {
        let mut chain = Chain::new("s", "");
        assert!(chain.translate().is_err());
    }

    #[test]
    fn failed_translation_leaves_fields_unset() {
        let mut chain = Chain::new("s", "AUGUUU");
        assert!(chain.translate().is_err());
        assert!(chain.rna().is_none());
        assert!(chain.protein().is_none());
        assert!(chain.dna1().is_none());
    }

    // --- Stats ---

    #[test]
    fn stats_empty_before_processing() {
        let chain = Chain::new("s", "ATCG");
        assert_eq!(chain.stats(), ChainStats::default());
    }

    #[test]
    fn stats_after_replication() {
        let mut chain = Chain::new("s", "ATCG");
        chain.replicate().unwrap();
        let stats = chain.stats();
        assert_eq!(stats.nucleotides, Some(4));
        assert_eq!(stats.codons, Some(1));
        assert_eq!(stats.gc_content, Some(50.0));
        assert_eq!(stats.mass, None);
    }

    #[test]
    fn stats_gc_content_rounded_to_six_digits() {
        // 2 of 6 bases are G/C: 33.333333...% rounds to 33.333333.
        let mut chain = Chain::new("s", "ATATGC");
        chain.replicate().unwrap();
        assert_eq!(chain.stats().gc_content, Some(33.333333));
    }

    #[test]
    fn stats_mass_after_translation() {
        // AUG UGG UAA → "MW*": 131.04049 + 186.07931 + 0 → 317.12.
        let mut chain = Chain::new("s", "AUGUGGUAA");
        chain.translate().unwrap();
        let stats = chain.stats();
        assert_eq!(stats.mass, Some(317.12));
        // Translation alone populates no DNA strand.
        assert_eq!(stats.nucleotides, None);
        assert_eq!(stats.codons, None);
    }

    #[test]
    fn stats_recomputed_fresh() {
        let mut chain = Chain::new("s", "ATCG");
        let before = chain.stats();
        chain.replicate().unwrap();
        let after = chain.stats();
        assert_eq!(before, ChainStats::default());
        assert_ne!(after, before);
    }

    // --- Labels ---

    #[test]
    fn generated_info_has_prefix() {
        let chain = Chain::with_generated_info("ATCG");
        assert!(chain.info().starts_with("catena-"));
    }

    #[test]
    fn summary_lists_derived_fields() {
        let mut chain = Chain::new("s", "ATCG");
        chain.replicate().unwrap();
        let summary = chain.summary();
        assert!(summary.contains("dna1") && summary.contains("dna2"));
    }
}
