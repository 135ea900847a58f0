//! Structured types

/// The word class token SAOL uses for nouns.
pub const NOUN: &str = "substantiv";
/// The word class token SAOL uses for verbs.
pub const VERB: &str = "verb";
/// The word class token SAOL uses for adjectives.
pub const ADJECTIVE: &str = "adjektiv";

/// Abbreviated word class labels used on disambiguation pages, and what they expand to.
const ABBREVIATIONS: &[(&str, &str)] = &[("subst.", NOUN)];

/// Represents a single resolved entry from Svenska Akademiens ordlista
///
/// # HTML Source
/// Parsed from a `<div class="lemma">` element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordRecord {
    /// The canonical citation form of the word
    ///
    /// Examples: `bil`, `bok`, `vara`
    ///
    /// Parsed from the `<span class="grundform">` element
    pub base_form: String,

    /// The grammatical category of the word
    ///
    /// Examples: `substantiv`, `verb`, `adjektiv`
    ///
    /// Parsed from the `<a class="ordklass">` element
    pub word_class: String,

    /// Sense glosses, in the order they appear on the page
    ///
    /// Parsed from `<span class="lexemid">` elements, with zero-width spaces removed
    pub meanings: Vec<String>,

    /// Which optional sections of the inflection table exist for this word
    pub rules: Rules,

    /// Class-specific inflection data, selected by [`WordRecord::word_class`]
    pub class_data: ClassData,
}

/// Flags for the optional sections of an inflection table.
///
/// # HTML Source
/// Set from `<th class="ordformth">` header cells in `<table class="tabell">`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rules {
    /// The table has a "Plural" section
    pub plural: bool,
    /// The table has an "Övrig(a) form(er)" section
    pub other_forms: bool,
}

/// Inflection data specific to a word class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassData {
    /// A noun and its inflection table.
    Noun(NounData),
    /// A verb. Its inflections are not parsed yet.
    Verb,
    /// An adjective. Its inflections are not parsed yet.
    Adjective,
    /// Any other word class.
    None,
}

/// The inflection table of a noun.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NounData {
    /// The inflection ending hint shown next to the headword
    ///
    /// Examples: `~en ~ar`, `~en böcker`
    ///
    /// Parsed from the `<span class="bojning">` element
    pub suffix: String,
    /// The singular forms
    pub singular: NounForms,
    /// The plural forms, present only when [`Rules::plural`] is set
    pub plural: Option<NounForms>,
    /// Additional forms and their descriptions, present only when [`Rules::other_forms`] is set
    pub other_forms: Vec<OtherForm>,
}

/// The four forms of a noun in either singular or plural.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NounForms {
    /// Obestämd form, e.g. `en bil`
    pub indefinite: String,
    /// Obestämd form genitiv, e.g. `en bils`
    pub indefinite_genitive: String,
    /// Bestämd form, e.g. `bilen`
    pub definite: String,
    /// Bestämd form genitiv, e.g. `bilens`
    pub definite_genitive: String,
}

/// A form listed under "Övrig(a) form(er)", e.g. `bil-` described as `i sammansättningar`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtherForm {
    /// The form itself
    pub form: String,
    /// A description of when the form is used
    pub label: String,
}

/// A candidate entry listed on a disambiguation page.
///
/// # HTML Source
/// Parsed from the `<a>` elements within `<div class="cshow">`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisambiguationOption {
    /// The normalized word class of the candidate, e.g. `substantiv`
    ///
    /// Parsed from the `<span class="wordclass">` element
    pub word_class: String,
    /// The link to the candidate, e.g. `/saol/?id=1234`
    ///
    /// Found in the `href` attribute of the link
    pub href: String,
}

impl DisambiguationOption {
    /// Returns the entry identifier carried in the `?id=` parameter of the link, if any.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        let (_, rest) = self.href.split_once("?id=")?;
        let id = rest.split('&').next().unwrap_or(rest);

        if id.is_empty() { None } else { Some(id) }
    }
}

/// Normalizes a word class label so it can be compared with the word class of a lemma.
///
/// All whitespace is removed, the label is lowercased and known abbreviations are expanded.
///
/// # Example
///
/// ```rust
/// use saol::types::normalize_word_class;
/// assert_eq!(normalize_word_class(" subst. "), "substantiv");
/// assert_eq!(normalize_word_class("Verb"), "verb");
/// ```
#[must_use]
pub fn normalize_word_class(label: &str) -> String {
    let label: String = label.split_whitespace().collect::<String>().to_lowercase();

    ABBREVIATIONS
        .iter()
        .find(|(abbreviation, _)| *abbreviation == label)
        .map_or(label, |(_, expanded)| (*expanded).to_string())
}
