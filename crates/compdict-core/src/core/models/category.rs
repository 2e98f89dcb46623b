use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a chemical component by its role in a polymer chain,
/// derived from the raw textual `type` field of a component definition.
///
/// The raw text is parser input only; all downstream logic branches on this
/// enum. Unrecognized or absent type text maps to [`ResidueCategory::Unknown`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResidueCategory {
    DPeptideLinking,
    LPeptideLinking,
    /// The achiral "peptide linking" form (glycine).
    PeptideLinking,
    PeptideLike,
    DPeptideAminoTerminus,
    LPeptideAminoTerminus,
    DPeptideCarboxyTerminus,
    LPeptideCarboxyTerminus,
    DnaLinking,
    Dna3PrimeTerminus,
    Dna5PrimeTerminus,
    RnaLinking,
    Rna3PrimeTerminus,
    Rna5PrimeTerminus,
    DSaccharide,
    LSaccharide,
    Saccharide,
    NonPolymer,
    Other,
    #[default]
    Unknown,
}

/// The kind of polymer a residue category belongs to. Implied entirely by
/// [`ResidueCategory`]; never set independently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PolymerCategory {
    Peptide,
    DPeptide,
    PeptideLike,
    Dna,
    Rna,
    Saccharide,
    NonPolymer,
    Other,
    #[default]
    Unknown,
}

impl ResidueCategory {
    /// Parses the raw `type` text of a component definition.
    ///
    /// Matching is case-insensitive because deposited definitions vary between
    /// e.g. `L-PEPTIDE LINKING` and `L-peptide linking`. Anything unrecognized
    /// becomes [`ResidueCategory::Unknown`].
    pub fn from_type_field(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "d-peptide linking" => ResidueCategory::DPeptideLinking,
            "l-peptide linking" => ResidueCategory::LPeptideLinking,
            "peptide linking" => ResidueCategory::PeptideLinking,
            "peptide-like" => ResidueCategory::PeptideLike,
            "d-peptide nh3 amino terminus" => ResidueCategory::DPeptideAminoTerminus,
            "l-peptide nh3 amino terminus" => ResidueCategory::LPeptideAminoTerminus,
            "d-peptide cooh carboxy terminus" => ResidueCategory::DPeptideCarboxyTerminus,
            "l-peptide cooh carboxy terminus" => ResidueCategory::LPeptideCarboxyTerminus,
            "dna linking" => ResidueCategory::DnaLinking,
            "dna oh 3 prime terminus" => ResidueCategory::Dna3PrimeTerminus,
            "dna oh 5 prime terminus" => ResidueCategory::Dna5PrimeTerminus,
            "rna linking" => ResidueCategory::RnaLinking,
            "rna oh 3 prime terminus" => ResidueCategory::Rna3PrimeTerminus,
            "rna oh 5 prime terminus" => ResidueCategory::Rna5PrimeTerminus,
            "d-saccharide" => ResidueCategory::DSaccharide,
            "l-saccharide" => ResidueCategory::LSaccharide,
            "saccharide" => ResidueCategory::Saccharide,
            "non-polymer" => ResidueCategory::NonPolymer,
            "other" => ResidueCategory::Other,
            _ => ResidueCategory::Unknown,
        }
    }

    /// The polymer category implied by this residue category.
    pub fn polymer_category(self) -> PolymerCategory {
        match self {
            ResidueCategory::LPeptideLinking
            | ResidueCategory::PeptideLinking
            | ResidueCategory::LPeptideAminoTerminus
            | ResidueCategory::LPeptideCarboxyTerminus => PolymerCategory::Peptide,
            ResidueCategory::DPeptideLinking
            | ResidueCategory::DPeptideAminoTerminus
            | ResidueCategory::DPeptideCarboxyTerminus => PolymerCategory::DPeptide,
            ResidueCategory::PeptideLike => PolymerCategory::PeptideLike,
            ResidueCategory::DnaLinking
            | ResidueCategory::Dna3PrimeTerminus
            | ResidueCategory::Dna5PrimeTerminus => PolymerCategory::Dna,
            ResidueCategory::RnaLinking
            | ResidueCategory::Rna3PrimeTerminus
            | ResidueCategory::Rna5PrimeTerminus => PolymerCategory::Rna,
            ResidueCategory::DSaccharide
            | ResidueCategory::LSaccharide
            | ResidueCategory::Saccharide => PolymerCategory::Saccharide,
            ResidueCategory::NonPolymer => PolymerCategory::NonPolymer,
            ResidueCategory::Other => PolymerCategory::Other,
            ResidueCategory::Unknown => PolymerCategory::Unknown,
        }
    }
}

impl PolymerCategory {
    /// Whether components of this category form polypeptide chains.
    pub fn is_peptide(self) -> bool {
        matches!(self, PolymerCategory::Peptide | PolymerCategory::DPeptide)
    }

    /// Whether components of this category form nucleic-acid chains.
    pub fn is_nucleotide(self) -> bool {
        matches!(self, PolymerCategory::Dna | PolymerCategory::Rna)
    }
}

impl fmt::Display for ResidueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ResidueCategory::DPeptideLinking => "D-peptide linking",
                ResidueCategory::LPeptideLinking => "L-peptide linking",
                ResidueCategory::PeptideLinking => "peptide linking",
                ResidueCategory::PeptideLike => "peptide-like",
                ResidueCategory::DPeptideAminoTerminus => "D-peptide NH3 amino terminus",
                ResidueCategory::LPeptideAminoTerminus => "L-peptide NH3 amino terminus",
                ResidueCategory::DPeptideCarboxyTerminus => "D-peptide COOH carboxy terminus",
                ResidueCategory::LPeptideCarboxyTerminus => "L-peptide COOH carboxy terminus",
                ResidueCategory::DnaLinking => "DNA linking",
                ResidueCategory::Dna3PrimeTerminus => "DNA OH 3 prime terminus",
                ResidueCategory::Dna5PrimeTerminus => "DNA OH 5 prime terminus",
                ResidueCategory::RnaLinking => "RNA linking",
                ResidueCategory::Rna3PrimeTerminus => "RNA OH 3 prime terminus",
                ResidueCategory::Rna5PrimeTerminus => "RNA OH 5 prime terminus",
                ResidueCategory::DSaccharide => "D-saccharide",
                ResidueCategory::LSaccharide => "L-saccharide",
                ResidueCategory::Saccharide => "saccharide",
                ResidueCategory::NonPolymer => "non-polymer",
                ResidueCategory::Other => "other",
                ResidueCategory::Unknown => "unknown",
            }
        )
    }
}

impl fmt::Display for PolymerCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                PolymerCategory::Peptide => "peptide",
                PolymerCategory::DPeptide => "D-peptide",
                PolymerCategory::PeptideLike => "peptide-like",
                PolymerCategory::Dna => "DNA",
                PolymerCategory::Rna => "RNA",
                PolymerCategory::Saccharide => "saccharide",
                PolymerCategory::NonPolymer => "non-polymer",
                PolymerCategory::Other => "other",
                PolymerCategory::Unknown => "unknown",
            }
        )
    }
}
