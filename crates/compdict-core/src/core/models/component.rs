use super::category::{PolymerCategory, ResidueCategory};
use crate::core::utils::monomers;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Placeholder emitted by definition sources for an absent value. Preserved
/// verbatim on records; predicates treat it as "not set".
pub const PLACEHOLDER: &str = "?";

/// Three-letter code carried by the empty sentinel record.
pub const EMPTY_THREE_LETTER_CODE: &str = "???";

/// One fully described chemical component (an amino acid, nucleotide, ligand,
/// or modified residue) as defined by a component dictionary entry.
///
/// Raw descriptive fields are optional text taken verbatim from the definition
/// source; absence in the source is encoded as the literal [`PLACEHOLDER`]
/// rather than `None`, so `None` means the field was never emitted at all.
///
/// Three fields are derived and kept consistent by the record itself:
/// `residue_category` and `polymer_category` follow the raw textual type, and
/// `standard` follows the one-letter code and parent id. Only those setters
/// recompute; every other field is plain data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChemComp {
    pub id: Option<String>,
    pub name: Option<String>,
    component_type: Option<String>,
    pub pdbx_type: Option<String>,
    pub formula: Option<String>,
    pub formula_weight: Option<String>,
    one_letter_code: Option<String>,
    pub three_letter_code: Option<String>,
    parent_id: Option<String>,
    pub replaces: Option<String>,
    pub replaced_by: Option<String>,
    pub synonyms: Option<String>,
    pub formal_charge: Option<String>,
    pub initial_date: Option<String>,
    pub modified_date: Option<String>,
    pub ambiguous_flag: Option<String>,
    pub release_status: Option<String>,
    pub model_coordinates_details: Option<String>,
    pub model_coordinates_missing_flag: Option<String>,
    pub ideal_coordinates_details: Option<String>,
    pub ideal_coordinates_missing_flag: Option<String>,
    pub model_coordinates_db_code: Option<String>,
    pub subcomponent_list: Option<String>,
    pub processing_site: Option<String>,
    pub nonstandard_flag: Option<String>,

    residue_category: ResidueCategory,
    polymer_category: PolymerCategory,
    standard: bool,
}

impl ChemComp {
    /// Starts a builder that computes all derived fields once from the
    /// complete raw field set.
    pub fn builder() -> ChemCompBuilder {
        ChemCompBuilder::new()
    }

    /// Creates the empty sentinel record: no id, one-letter code `"?"`,
    /// three-letter code `"???"`, unknown categories, non-standard.
    pub fn empty() -> Self {
        ChemComp {
            one_letter_code: Some(PLACEHOLDER.to_string()),
            three_letter_code: Some(EMPTY_THREE_LETTER_CODE.to_string()),
            ..ChemComp::default()
        }
    }

    /// Creates the empty sentinel record tagged with the requested identifier,
    /// the shape providers hand out when no definition can be resolved.
    pub fn empty_with_id(id: impl Into<String>) -> Self {
        let mut comp = ChemComp::empty();
        comp.id = Some(id.into());
        comp
    }

    /// True for the sentinel shape: id absent, or three-letter code absent or
    /// equal to `"???"`. The three-letter code is the main signal.
    pub fn is_empty(&self) -> bool {
        self.id.is_none()
            || self
                .three_letter_code
                .as_deref()
                .is_none_or(|code| code == EMPTY_THREE_LETTER_CODE)
    }

    /// True iff a parent component id is present and not the placeholder.
    pub fn has_parent(&self) -> bool {
        self.parent_id.as_deref().is_some_and(|pid| pid != PLACEHOLDER)
    }

    pub fn component_type(&self) -> Option<&str> {
        self.component_type.as_deref()
    }

    /// Sets the raw textual type and re-derives both category fields.
    pub fn set_component_type(&mut self, raw: impl Into<String>) {
        let raw = raw.into();
        self.residue_category = ResidueCategory::from_type_field(&raw);
        self.polymer_category = self.residue_category.polymer_category();
        self.component_type = Some(raw);
    }

    pub fn one_letter_code(&self) -> Option<&str> {
        self.one_letter_code.as_deref()
    }

    /// Sets the one-letter code and re-derives the standard flag.
    pub fn set_one_letter_code(&mut self, code: impl Into<String>) {
        self.one_letter_code = Some(code.into());
        self.refresh_standard();
    }

    pub fn parent_id(&self) -> Option<&str> {
        self.parent_id.as_deref()
    }

    /// Sets the parent component id and re-derives the standard flag.
    pub fn set_parent_id(&mut self, parent: impl Into<String>) {
        self.parent_id = Some(parent.into());
        self.refresh_standard();
    }

    pub fn residue_category(&self) -> ResidueCategory {
        self.residue_category
    }

    pub fn polymer_category(&self) -> PolymerCategory {
        self.polymer_category
    }

    /// Whether this component canonically represents an unmodified biological
    /// monomer. Recomputed only when the one-letter code or parent id is set.
    pub fn is_standard(&self) -> bool {
        self.standard
    }

    fn refresh_standard(&mut self) {
        self.standard = monomers::is_standard_component(self);
    }
}

impl PartialOrd for ChemComp {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ChemComp {
    /// Records order lexicographically by id; ids compare before any other
    /// field is considered, and an absent id sorts first.
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl fmt::Display for ChemComp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ChemComp {} {} {} poly:{} resi:{} {} {}",
            self.id.as_deref().unwrap_or(PLACEHOLDER),
            self.one_letter_code.as_deref().unwrap_or(PLACEHOLDER),
            self.three_letter_code.as_deref().unwrap_or(PLACEHOLDER),
            self.polymer_category,
            self.residue_category,
            if self.standard { "standard" } else { "modified" },
            self.name.as_deref().unwrap_or(PLACEHOLDER),
        )
    }
}

/// Assembles a [`ChemComp`] from a complete raw field set.
///
/// Derivation runs once in [`build`](ChemCompBuilder::build), after every raw
/// field is in place, so construction cannot observe a half-derived record
/// whatever order the fields were supplied in.
#[derive(Debug, Clone, Default)]
pub struct ChemCompBuilder {
    comp: ChemComp,
    component_type: Option<String>,
    one_letter_code: Option<String>,
    parent_id: Option<String>,
}

macro_rules! builder_field {
    ($($field:ident),+ $(,)?) => {
        $(
            pub fn $field(mut self, value: impl Into<String>) -> Self {
                self.comp.$field = Some(value.into());
                self
            }
        )+
    };
}

impl ChemCompBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    builder_field!(
        id,
        name,
        pdbx_type,
        formula,
        formula_weight,
        three_letter_code,
        replaces,
        replaced_by,
        synonyms,
        formal_charge,
        initial_date,
        modified_date,
        ambiguous_flag,
        release_status,
        model_coordinates_details,
        model_coordinates_missing_flag,
        ideal_coordinates_details,
        ideal_coordinates_missing_flag,
        model_coordinates_db_code,
        subcomponent_list,
        processing_site,
        nonstandard_flag,
    );

    pub fn component_type(mut self, value: impl Into<String>) -> Self {
        self.component_type = Some(value.into());
        self
    }

    pub fn one_letter_code(mut self, value: impl Into<String>) -> Self {
        self.one_letter_code = Some(value.into());
        self
    }

    pub fn parent_id(mut self, value: impl Into<String>) -> Self {
        self.parent_id = Some(value.into());
        self
    }

    /// Finalizes the record, deriving categories and the standard flag from
    /// the assembled field set.
    pub fn build(self) -> ChemComp {
        let ChemCompBuilder {
            mut comp,
            component_type,
            one_letter_code,
            parent_id,
        } = self;
        if let Some(raw) = component_type {
            comp.set_component_type(raw);
        }
        if let Some(parent) = parent_id {
            comp.set_parent_id(parent);
        }
        if let Some(code) = one_letter_code {
            comp.set_one_letter_code(code);
        }
        comp
    }
}
