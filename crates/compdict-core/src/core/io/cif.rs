use crate::core::io::traits::ComponentFormat;
use crate::core::models::component::ChemCompBuilder;
use crate::core::models::dictionary::ComponentDictionary;
use std::io::{self, BufRead};
use thiserror::Error;

/// Tag prefix of the category this reader cares about. The trailing dot
/// matters: `_chem_comp_atom.` and `_chem_comp_bond.` are different categories
/// and are skipped.
const CHEM_COMP_PREFIX: &str = "_chem_comp.";

#[derive(Debug, Error)]
pub enum CifError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Syntax error on line {line}: {kind}")]
    Syntax { line: usize, kind: CifSyntaxErrorKind },
}

#[derive(Debug, Error)]
pub enum CifSyntaxErrorKind {
    #[error("Unterminated quoted value")]
    UnterminatedQuote,
    #[error("Unterminated multi-line text field")]
    UnterminatedTextField,
    #[error("Tag '{tag}' has no value")]
    MissingValue { tag: String },
    #[error("Component loop contains {values} values for {tags} tags")]
    LoopMismatch { tags: usize, values: usize },
}

fn syntax(line: usize, kind: CifSyntaxErrorKind) -> CifError {
    CifError::Syntax { line, kind }
}

#[derive(Debug, Clone)]
struct Token {
    line: usize,
    text: String,
    /// Quoted and `;`-delimited values never act as tags or keywords.
    quoted: bool,
}

impl Token {
    fn is_tag(&self) -> bool {
        !self.quoted && self.text.starts_with('_')
    }

    fn is_loop(&self) -> bool {
        !self.quoted && self.text.eq_ignore_ascii_case("loop_")
    }

    fn is_data_block(&self) -> bool {
        !self.quoted
            && self
                .text
                .get(..5)
                .is_some_and(|prefix| prefix.eq_ignore_ascii_case("data_"))
    }

    fn is_structural(&self) -> bool {
        self.is_tag() || self.is_loop() || self.is_data_block()
    }
}

fn tokenize(input: &str) -> Result<Vec<Token>, CifError> {
    let lines: Vec<&str> = input.lines().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];
        let line_num = i + 1;

        // Multi-line text field: a line-leading ';' opens it, the next
        // line-leading ';' closes it.
        if let Some(first) = line.strip_prefix(';') {
            let mut text = first.to_string();
            let mut j = i + 1;
            loop {
                match lines.get(j) {
                    Some(l) if l.starts_with(';') => break,
                    Some(l) => {
                        if !text.is_empty() {
                            text.push('\n');
                        }
                        text.push_str(l);
                        j += 1;
                    }
                    None => {
                        return Err(syntax(line_num, CifSyntaxErrorKind::UnterminatedTextField));
                    }
                }
            }
            tokens.push(Token {
                line: line_num,
                text,
                quoted: true,
            });
            i = j + 1;
            continue;
        }

        let mut rest = line;
        loop {
            rest = rest.trim_start();
            let Some(first) = rest.chars().next() else {
                break;
            };
            match first {
                '#' => break,
                '\'' | '"' => {
                    let body = &rest[1..];
                    let Some(end) = body.find(first) else {
                        return Err(syntax(line_num, CifSyntaxErrorKind::UnterminatedQuote));
                    };
                    tokens.push(Token {
                        line: line_num,
                        text: body[..end].to_string(),
                        quoted: true,
                    });
                    rest = &body[end + 1..];
                }
                _ => {
                    let end = rest
                        .find(|c: char| c.is_whitespace())
                        .unwrap_or(rest.len());
                    tokens.push(Token {
                        line: line_num,
                        text: rest[..end].to_string(),
                        quoted: false,
                    });
                    rest = &rest[end..];
                }
            }
        }
        i += 1;
    }

    Ok(tokens)
}

struct CifReader {
    tokens: Vec<Token>,
    cursor: usize,
    dictionary: ComponentDictionary,
    current: Option<ChemCompBuilder>,
}

impl CifReader {
    fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            cursor: 0,
            dictionary: ComponentDictionary::new(),
            current: None,
        }
    }

    fn run(mut self) -> Result<ComponentDictionary, CifError> {
        while let Some(token) = self.peek().cloned() {
            if token.is_data_block() {
                self.cursor += 1;
                self.flush_current();
            } else if token.is_loop() {
                self.cursor += 1;
                self.parse_loop(token.line)?;
            } else if token.is_tag() {
                self.cursor += 1;
                let value = self.next_value(&token)?;
                if let Some(field) = chem_comp_field(&token.text) {
                    let builder = self.current.take().unwrap_or_default();
                    self.current = Some(assign_field(builder, field, &value.text));
                }
            } else {
                self.cursor += 1;
            }
        }
        self.flush_current();
        Ok(self.dictionary)
    }

    fn flush_current(&mut self) {
        if let Some(builder) = self.current.take() {
            self.dictionary.insert(builder.build());
        }
    }

    fn parse_loop(&mut self, loop_line: usize) -> Result<(), CifError> {
        let mut tags = Vec::new();
        while let Some(token) = self.peek() {
            if token.is_tag() {
                tags.push(token.text.clone());
                self.cursor += 1;
            } else {
                break;
            }
        }

        let mut values = Vec::new();
        while let Some(token) = self.peek() {
            if token.is_structural() {
                break;
            }
            values.push(token.text.clone());
            self.cursor += 1;
        }

        let fields: Vec<Option<&'static str>> =
            tags.iter().map(|tag| chem_comp_field(tag)).collect();
        if !fields.iter().any(Option::is_some) {
            // Some other category (atoms, bonds, descriptors); not ours.
            return Ok(());
        }
        if values.len() % tags.len() != 0 {
            return Err(syntax(
                loop_line,
                CifSyntaxErrorKind::LoopMismatch {
                    tags: tags.len(),
                    values: values.len(),
                },
            ));
        }

        for row in values.chunks(tags.len()) {
            let mut builder = ChemCompBuilder::new();
            for (field, value) in fields.iter().zip(row.iter()) {
                if let Some(field) = field {
                    builder = assign_field(builder, field, value);
                }
            }
            self.dictionary.insert(builder.build());
        }
        Ok(())
    }

    fn next_value(&mut self, tag: &Token) -> Result<Token, CifError> {
        match self.peek() {
            Some(token) if !token.is_structural() => {
                let token = token.clone();
                self.cursor += 1;
                Ok(token)
            }
            _ => Err(syntax(
                tag.line,
                CifSyntaxErrorKind::MissingValue {
                    tag: tag.text.clone(),
                },
            )),
        }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.cursor)
    }
}

/// Maps a `_chem_comp.*` tag to its canonical field name, or `None` for tags
/// of other categories and unrecognized attributes.
fn chem_comp_field(tag: &str) -> Option<&'static str> {
    let lower = tag.to_ascii_lowercase();
    let attribute = lower.strip_prefix(CHEM_COMP_PREFIX)?;
    let field = match attribute {
        "id" => "id",
        "name" => "name",
        "type" => "component_type",
        "pdbx_type" => "pdbx_type",
        "formula" => "formula",
        "formula_weight" => "formula_weight",
        "one_letter_code" => "one_letter_code",
        "three_letter_code" => "three_letter_code",
        "mon_nstd_parent_comp_id" => "parent_id",
        "mon_nstd_flag" => "nonstandard_flag",
        "pdbx_replaces" => "replaces",
        "pdbx_replaced_by" => "replaced_by",
        "pdbx_synonyms" => "synonyms",
        "pdbx_formal_charge" => "formal_charge",
        "pdbx_initial_date" => "initial_date",
        "pdbx_modified_date" => "modified_date",
        "pdbx_ambiguous_flag" => "ambiguous_flag",
        "pdbx_release_status" => "release_status",
        "pdbx_model_coordinates_details" => "model_coordinates_details",
        "pdbx_model_coordinates_missing_flag" => "model_coordinates_missing_flag",
        "pdbx_ideal_coordinates_details" => "ideal_coordinates_details",
        "pdbx_ideal_coordinates_missing_flag" => "ideal_coordinates_missing_flag",
        "pdbx_model_coordinates_db_code" => "model_coordinates_db_code",
        "pdbx_subcomponent_list" => "subcomponent_list",
        "pdbx_processing_site" => "processing_site",
        _ => return None,
    };
    Some(field)
}

/// Values are stored verbatim; the `?` and `.` placeholders are part of the
/// record's interface and must survive round to the caller.
fn assign_field(builder: ChemCompBuilder, field: &str, value: &str) -> ChemCompBuilder {
    match field {
        "id" => builder.id(value),
        "name" => builder.name(value),
        "component_type" => builder.component_type(value),
        "pdbx_type" => builder.pdbx_type(value),
        "formula" => builder.formula(value),
        "formula_weight" => builder.formula_weight(value),
        "one_letter_code" => builder.one_letter_code(value),
        "three_letter_code" => builder.three_letter_code(value),
        "parent_id" => builder.parent_id(value),
        "nonstandard_flag" => builder.nonstandard_flag(value),
        "replaces" => builder.replaces(value),
        "replaced_by" => builder.replaced_by(value),
        "synonyms" => builder.synonyms(value),
        "formal_charge" => builder.formal_charge(value),
        "initial_date" => builder.initial_date(value),
        "modified_date" => builder.modified_date(value),
        "ambiguous_flag" => builder.ambiguous_flag(value),
        "release_status" => builder.release_status(value),
        "model_coordinates_details" => builder.model_coordinates_details(value),
        "model_coordinates_missing_flag" => builder.model_coordinates_missing_flag(value),
        "ideal_coordinates_details" => builder.ideal_coordinates_details(value),
        "ideal_coordinates_missing_flag" => builder.ideal_coordinates_missing_flag(value),
        "model_coordinates_db_code" => builder.model_coordinates_db_code(value),
        "subcomponent_list" => builder.subcomponent_list(value),
        "processing_site" => builder.processing_site(value),
        _ => builder,
    }
}

/// Reader for CIF chemical-component definitions.
///
/// Only the `_chem_comp` category is consumed; atom, bond, and descriptor
/// loops are tolerated and skipped. Both the per-component scalar form
/// (`_chem_comp.id ALA`) and the tabular `loop_` form yield one record per
/// definition or row.
pub struct CifComponentFile;

impl CifComponentFile {
    /// Parses definition text directly.
    pub fn read_str(input: &str) -> Result<ComponentDictionary, CifError> {
        CifReader::new(tokenize(input)?).run()
    }
}

impl ComponentFormat for CifComponentFile {
    type Error = CifError;

    fn read_from(reader: &mut impl BufRead) -> Result<ComponentDictionary, Self::Error> {
        let mut input = String::new();
        reader.read_to_string(&mut input)?;
        Self::read_str(&input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::category::{PolymerCategory, ResidueCategory};

    const ALA_SCALAR: &str = r#"
data_ALA
_chem_comp.id                    ALA
_chem_comp.name                  ALANINE
_chem_comp.type                  "L-PEPTIDE LINKING"
_chem_comp.pdbx_type             ATOMP
_chem_comp.formula               "C3 H7 N O2"
_chem_comp.mon_nstd_parent_comp_id ?
_chem_comp.pdbx_synonyms         ?
_chem_comp.pdbx_formal_charge    0
_chem_comp.pdbx_release_status   REL
_chem_comp.pdbx_replaced_by      ?
_chem_comp.pdbx_replaces         ?
_chem_comp.formula_weight        89.093
_chem_comp.one_letter_code       A
_chem_comp.three_letter_code     ALA
_chem_comp.pdbx_processing_site  RCSB
"#;

    #[test]
    fn scalar_form_yields_one_record() {
        let dict = CifComponentFile::read_str(ALA_SCALAR).expect("parse");
        assert_eq!(dict.len(), 1);
        let ala = dict.get("ALA").expect("ALA present");
        assert_eq!(ala.name.as_deref(), Some("ALANINE"));
        assert_eq!(ala.residue_category(), ResidueCategory::LPeptideLinking);
        assert_eq!(ala.polymer_category(), PolymerCategory::Peptide);
        assert!(ala.is_standard());
        assert!(!ala.is_empty());
    }

    #[test]
    fn placeholder_values_survive_verbatim() {
        let dict = CifComponentFile::read_str(ALA_SCALAR).expect("parse");
        let ala = dict.get("ALA").unwrap();
        assert_eq!(ala.parent_id(), Some("?"));
        assert_eq!(ala.synonyms.as_deref(), Some("?"));
        assert_eq!(ala.replaced_by.as_deref(), Some("?"));
        assert!(!ala.has_parent());
        assert!(!dict.is_replaced("ALA"));
    }

    #[test]
    fn loop_form_yields_one_record_per_row() {
        let cif = r#"
data_components
loop_
_chem_comp.id
_chem_comp.name
_chem_comp.type
_chem_comp.one_letter_code
_chem_comp.three_letter_code
ALA ALANINE "L-peptide linking" A ALA
GLY GLYCINE "peptide linking" G GLY
"#;
        let dict = CifComponentFile::read_str(cif).expect("parse");
        assert_eq!(dict.len(), 2);
        assert!(dict.get("ALA").unwrap().is_standard());
        assert!(dict.get("GLY").unwrap().is_standard());
    }

    #[test]
    fn scalar_and_loop_forms_produce_equal_records() {
        let scalar = CifComponentFile::read_str(
            "data_GLY\n_chem_comp.id GLY\n_chem_comp.type \"peptide linking\"\n_chem_comp.one_letter_code G\n_chem_comp.three_letter_code GLY\n",
        )
        .expect("scalar");
        let looped = CifComponentFile::read_str(
            "loop_\n_chem_comp.id\n_chem_comp.type\n_chem_comp.one_letter_code\n_chem_comp.three_letter_code\nGLY \"peptide linking\" G GLY\n",
        )
        .expect("loop");
        assert_eq!(scalar.get("GLY"), looped.get("GLY"));
    }

    #[test]
    fn multiple_data_blocks_yield_multiple_records() {
        let cif = "\
data_ABC
_chem_comp.id ABC
_chem_comp.three_letter_code ABC
_chem_comp.pdbx_replaced_by XYZ
data_XYZ
_chem_comp.id XYZ
_chem_comp.three_letter_code XYZ
_chem_comp.pdbx_replaces ABC
";
        let dict = CifComponentFile::read_str(cif).expect("parse");
        assert_eq!(dict.len(), 2);
        assert!(dict.is_replaced("ABC"));
        assert_eq!(
            dict.resolve_current("ABC").unwrap().id.as_deref(),
            Some("XYZ")
        );
    }

    #[test]
    fn multiline_text_field_is_one_value() {
        let cif = "\
data_ABC
_chem_comp.id ABC
_chem_comp.name
;a long component name
split over two lines
;
_chem_comp.three_letter_code ABC
";
        let dict = CifComponentFile::read_str(cif).expect("parse");
        let comp = dict.get("ABC").unwrap();
        assert_eq!(
            comp.name.as_deref(),
            Some("a long component name\nsplit over two lines")
        );
        assert_eq!(comp.three_letter_code.as_deref(), Some("ABC"));
    }

    #[test]
    fn other_categories_are_skipped() {
        let cif = "\
data_ALA
_chem_comp.id ALA
_chem_comp.three_letter_code ALA
loop_
_chem_comp_atom.comp_id
_chem_comp_atom.atom_id
ALA N
ALA CA
_chem_comp.name ALANINE
";
        let dict = CifComponentFile::read_str(cif).expect("parse");
        assert_eq!(dict.len(), 1);
        assert_eq!(dict.get("ALA").unwrap().name.as_deref(), Some("ALANINE"));
    }

    #[test]
    fn comments_and_quotes_are_handled() {
        let cif = "\
# full component definition
data_ABC
_chem_comp.id ABC # trailing comment
_chem_comp.name 'name with spaces'
_chem_comp.three_letter_code ABC
";
        let dict = CifComponentFile::read_str(cif).expect("parse");
        assert_eq!(
            dict.get("ABC").unwrap().name.as_deref(),
            Some("name with spaces")
        );
    }

    #[test]
    fn quoted_value_may_look_like_a_tag() {
        let cif = "data_A\n_chem_comp.id A\n_chem_comp.name '_chem_comp.weird'\n";
        let dict = CifComponentFile::read_str(cif).expect("parse");
        assert_eq!(
            dict.get("A").unwrap().name.as_deref(),
            Some("_chem_comp.weird")
        );
    }

    #[test]
    fn missing_scalar_value_is_a_syntax_error() {
        let cif = "data_A\n_chem_comp.id\n_chem_comp.name ALANINE\n";
        let err = CifComponentFile::read_str(cif).unwrap_err();
        assert!(matches!(
            err,
            CifError::Syntax {
                line: 2,
                kind: CifSyntaxErrorKind::MissingValue { .. }
            }
        ));
    }

    #[test]
    fn unterminated_quote_is_a_syntax_error() {
        let err = CifComponentFile::read_str("_chem_comp.id 'ALA\n").unwrap_err();
        assert!(matches!(
            err,
            CifError::Syntax {
                line: 1,
                kind: CifSyntaxErrorKind::UnterminatedQuote
            }
        ));
    }

    #[test]
    fn unterminated_text_field_is_a_syntax_error() {
        let err = CifComponentFile::read_str("_chem_comp.name\n;never closed\n").unwrap_err();
        assert!(matches!(
            err,
            CifError::Syntax {
                kind: CifSyntaxErrorKind::UnterminatedTextField,
                ..
            }
        ));
    }

    #[test]
    fn ragged_component_loop_is_a_syntax_error() {
        let cif = "loop_\n_chem_comp.id\n_chem_comp.name\nALA\n";
        let err = CifComponentFile::read_str(cif).unwrap_err();
        assert!(matches!(
            err,
            CifError::Syntax {
                kind: CifSyntaxErrorKind::LoopMismatch { tags: 2, values: 1 },
                ..
            }
        ));
    }

    #[test]
    fn read_from_accepts_any_bufread() {
        use crate::core::io::traits::ComponentFormat;
        let mut reader = std::io::Cursor::new(ALA_SCALAR.as_bytes());
        let dict = CifComponentFile::read_from(&mut reader).expect("parse");
        assert_eq!(dict.len(), 1);
    }
}
