use super::component::{ChemComp, PLACEHOLDER};
use std::collections::HashMap;
use tracing::warn;

/// An id-keyed index over chemical-component records with two auxiliary maps
/// tracking historical replacement links.
///
/// The auxiliary maps are populated only as a side effect of [`insert`] and
/// only from the `replaces`/`replaced_by` fields of inserted records, so the
/// final state is independent of insertion order. All resolution is single-hop
/// by design, mirroring the one-hop semantics of the source fields: a caller
/// walking a multi-generation replacement history iterates [`resolve_current`]
/// itself and must guard against cycles on its own.
///
/// A populated dictionary is safe for concurrent read-only queries; inserts
/// carry no internal synchronization.
///
/// [`insert`]: ComponentDictionary::insert
/// [`resolve_current`]: ComponentDictionary::resolve_current
#[derive(Debug, Clone, Default)]
pub struct ComponentDictionary {
    records: HashMap<String, ChemComp>,
    replaces: HashMap<String, String>,
    replaced_by: HashMap<String, String>,
}

impl ComponentDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a record under its id, overwriting any previous entry for that id.
    ///
    /// Records without an id cannot be keyed and are dropped with a warning.
    /// Replacement fields equal to the `"?"` placeholder are not mirrored into
    /// the auxiliary maps.
    pub fn insert(&mut self, comp: ChemComp) {
        let Some(id) = comp.id.clone() else {
            warn!("Skipping component record without an id");
            return;
        };
        if let Some(rep) = comp.replaces.as_deref().filter(|v| *v != PLACEHOLDER) {
            self.replaces.insert(id.clone(), rep.to_string());
        }
        if let Some(rep) = comp.replaced_by.as_deref().filter(|v| *v != PLACEHOLDER) {
            self.replaced_by.insert(id.clone(), rep.to_string());
        }
        self.records.insert(id, comp);
    }

    /// True iff a newer component supersedes `id`.
    pub fn is_replaced(&self, id: &str) -> bool {
        self.replaced_by.contains_key(id)
    }

    /// True iff `id` supersedes an older component.
    pub fn is_replacer(&self, id: &str) -> bool {
        self.replaces.contains_key(id)
    }

    /// Resolves one hop towards the current generation: the record that
    /// replaced `id` if one is known, otherwise the record at `id` itself.
    ///
    /// Returns `None` when the target id is absent from the dictionary; a
    /// record is never fabricated. If the replacement target is itself
    /// replaced, the caller must re-query.
    pub fn resolve_current(&self, id: &str) -> Option<&ChemComp> {
        match self.replaced_by.get(id) {
            Some(newer) => self.records.get(newer),
            None => self.records.get(id),
        }
    }

    /// Resolves one hop towards the prior generation: the record that `id`
    /// replaced if one is known, otherwise the record at `id` itself.
    pub fn resolve_prior(&self, id: &str) -> Option<&ChemComp> {
        match self.replaces.get(id) {
            Some(older) => self.records.get(older),
            None => self.records.get(id),
        }
    }

    /// Resolves the parent component of a modified residue.
    ///
    /// Returns `None` when the record has no parent (or only the placeholder)
    /// or when the parent id is not present in this dictionary; never the
    /// record itself.
    pub fn resolve_parent(&self, comp: &ChemComp) -> Option<&ChemComp> {
        if comp.has_parent() {
            self.records.get(comp.parent_id()?)
        } else {
            None
        }
    }

    /// Direct lookup; unknown ids yield `None`, never a placeholder record.
    pub fn get(&self, id: &str) -> Option<&ChemComp> {
        self.records.get(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comp(id: &str) -> ChemComp {
        ChemComp::builder()
            .id(id)
            .three_letter_code(id)
            .component_type("non-polymer")
            .build()
    }

    fn replacement_pair() -> (ChemComp, ChemComp) {
        // ABC was withdrawn in favor of XYZ; the source data sets both links.
        let mut old = comp("ABC");
        old.replaced_by = Some("XYZ".to_string());
        let mut new = comp("XYZ");
        new.replaces = Some("ABC".to_string());
        (old, new)
    }

    #[test]
    fn lookup_returns_record_equal_to_inserted() {
        let mut dict = ComponentDictionary::new();
        let ala = ChemComp::builder()
            .id("ALA")
            .component_type("L-peptide linking")
            .one_letter_code("A")
            .three_letter_code("ALA")
            .build();
        dict.insert(ala.clone());
        assert_eq!(dict.get("ALA"), Some(&ala));
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn lookup_of_unknown_id_is_none() {
        let dict = ComponentDictionary::new();
        assert!(dict.get("ZZZ").is_none());
        assert!(dict.resolve_current("ZZZ").is_none());
        assert!(dict.resolve_prior("ZZZ").is_none());
    }

    #[test]
    fn insert_skips_records_without_id() {
        let mut dict = ComponentDictionary::new();
        dict.insert(ChemComp::empty());
        assert!(dict.is_empty());
    }

    #[test]
    fn reinsert_overwrites_previous_entry() {
        let mut dict = ComponentDictionary::new();
        dict.insert(comp("ABC"));
        let mut renamed = comp("ABC");
        renamed.name = Some("updated".to_string());
        dict.insert(renamed.clone());
        assert_eq!(dict.len(), 1);
        assert_eq!(dict.get("ABC"), Some(&renamed));
    }

    #[test]
    fn resolve_current_without_replacement_equals_lookup() {
        let mut dict = ComponentDictionary::new();
        dict.insert(comp("ABC"));
        assert_eq!(dict.resolve_current("ABC"), dict.get("ABC"));
    }

    #[test]
    fn replacement_links_resolve_one_hop_in_both_directions() {
        let (old, new) = replacement_pair();
        let mut dict = ComponentDictionary::new();
        dict.insert(old.clone());
        dict.insert(new.clone());

        assert!(dict.is_replaced("ABC"));
        assert!(!dict.is_replaced("XYZ"));
        assert!(dict.is_replacer("XYZ"));
        assert!(!dict.is_replacer("ABC"));
        assert_eq!(dict.resolve_current("ABC"), Some(&new));
        assert_eq!(dict.resolve_prior("XYZ"), Some(&old));
    }

    #[test]
    fn insertion_order_does_not_affect_replacement_state() {
        let (old, new) = replacement_pair();

        let mut forward = ComponentDictionary::new();
        forward.insert(old.clone());
        forward.insert(new.clone());

        let mut reverse = ComponentDictionary::new();
        reverse.insert(new.clone());
        reverse.insert(old.clone());

        assert_eq!(forward.resolve_current("ABC"), reverse.resolve_current("ABC"));
        assert_eq!(forward.resolve_prior("XYZ"), reverse.resolve_prior("XYZ"));
        assert_eq!(forward.len(), reverse.len());
    }

    #[test]
    fn placeholder_replacement_fields_are_not_recorded() {
        let mut dict = ComponentDictionary::new();
        let mut c = comp("ABC");
        c.replaces = Some("?".to_string());
        c.replaced_by = Some("?".to_string());
        dict.insert(c);
        assert!(!dict.is_replaced("ABC"));
        assert!(!dict.is_replacer("ABC"));
    }

    #[test]
    fn replacement_link_to_missing_record_resolves_to_none() {
        // The link is recorded but the target was never inserted.
        let (old, _) = replacement_pair();
        let mut dict = ComponentDictionary::new();
        dict.insert(old);
        assert!(dict.is_replaced("ABC"));
        assert!(dict.resolve_current("ABC").is_none());
    }

    #[test]
    fn resolve_parent_returns_parent_record() {
        let mut dict = ComponentDictionary::new();
        let met = ChemComp::builder()
            .id("MET")
            .component_type("L-peptide linking")
            .one_letter_code("M")
            .three_letter_code("MET")
            .build();
        let mse = ChemComp::builder()
            .id("MSE")
            .component_type("L-peptide linking")
            .one_letter_code("M")
            .three_letter_code("MSE")
            .parent_id("MET")
            .build();
        dict.insert(met.clone());
        dict.insert(mse.clone());
        assert_eq!(dict.resolve_parent(&mse), Some(&met));
    }

    #[test]
    fn resolve_parent_is_none_without_parent_or_for_placeholder() {
        let mut dict = ComponentDictionary::new();
        dict.insert(comp("ABC"));
        let no_parent = dict.get("ABC").unwrap().clone();
        assert!(dict.resolve_parent(&no_parent).is_none());

        let mut placeholder = comp("DEF");
        placeholder.set_parent_id("?");
        dict.insert(placeholder.clone());
        assert!(dict.resolve_parent(&placeholder).is_none());
    }

    #[test]
    fn resolve_parent_never_falls_back_to_the_record_itself() {
        let dict = ComponentDictionary::new();
        let mut orphan = comp("ABC");
        orphan.set_parent_id("MISSING");
        assert!(dict.resolve_parent(&orphan).is_none());
    }
}
