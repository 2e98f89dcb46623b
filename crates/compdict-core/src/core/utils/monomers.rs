use crate::core::models::component::ChemComp;
use phf::{Map, phf_map};

/// The 20 canonical amino acids, keyed by three-letter code.
static STANDARD_AMINO_ACIDS: Map<&'static str, char> = phf_map! {
    "ALA" => 'A', "ARG" => 'R', "ASN" => 'N', "ASP" => 'D', "CYS" => 'C',
    "GLN" => 'Q', "GLU" => 'E', "GLY" => 'G', "HIS" => 'H', "ILE" => 'I',
    "LEU" => 'L', "LYS" => 'K', "MET" => 'M', "PHE" => 'F', "PRO" => 'P',
    "SER" => 'S', "THR" => 'T', "TRP" => 'W', "TYR" => 'Y', "VAL" => 'V',
};

/// The canonical nucleotides, keyed by component id (DNA carries a `D` prefix).
static STANDARD_NUCLEOTIDES: Map<&'static str, char> = phf_map! {
    "DA" => 'A', "DC" => 'C', "DG" => 'G', "DT" => 'T', "DI" => 'I',
    "A" => 'A', "C" => 'C', "G" => 'G', "U" => 'U', "I" => 'I',
};

/// Looks up the one-letter code of a standard amino acid by three-letter code.
pub fn standard_amino_one_letter(three_letter: &str) -> Option<char> {
    STANDARD_AMINO_ACIDS.get(three_letter.trim()).copied()
}

/// Looks up the one-letter code of a standard nucleotide by component id.
pub fn standard_nucleotide_one_letter(id: &str) -> Option<char> {
    STANDARD_NUCLEOTIDES.get(id.trim()).copied()
}

/// Decides whether a component canonically represents one of the unmodified
/// biological monomers.
///
/// A component is standard iff its id matches an entry of the amino-acid or
/// nucleotide table consistent with its polymer category, its one-letter code
/// agrees with that entry, and it has no parent distinct from itself.
pub fn is_standard_component(comp: &ChemComp) -> bool {
    let Some(id) = comp.id.as_deref() else {
        return false;
    };
    if let Some(parent) = comp.parent_id() {
        if parent != "?" && !parent.eq_ignore_ascii_case(id) {
            return false;
        }
    }
    let Some(one) = comp.one_letter_code() else {
        return false;
    };

    let polymer = comp.polymer_category();
    let expected = if polymer.is_peptide() {
        standard_amino_one_letter(id)
    } else if polymer.is_nucleotide() {
        standard_nucleotide_one_letter(id)
    } else {
        None
    };

    match expected {
        Some(code) => {
            let mut chars = one.trim().chars();
            matches!((chars.next(), chars.next()), (Some(c), None) if c.eq_ignore_ascii_case(&code))
        }
        None => false,
    }
}
