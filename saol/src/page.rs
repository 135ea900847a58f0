//! Interpretation of SAOL result pages.
use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use tracing::{trace, warn};

use crate::Error;
use crate::grammar;
use crate::types::{
    self, ADJECTIVE, ClassData, DisambiguationOption, NOUN, Rules, VERB, WordRecord,
};

static LEMMA: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.lemma").expect("lemma selector"));
static BASE_FORM: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("span.grundform").expect("base form selector"));
static WORD_CLASS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a.ordklass").expect("word class selector"));
static MEANING: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("span.lexemid").expect("meaning selector"));
static SUFFIX: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("span.bojning").expect("suffix selector"));
static TABLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("table.tabell").expect("table selector"));
static TABLE_HEADER: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("th.ordformth").expect("table header selector"));
static TABLE_CELL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("tr td").expect("table cell selector"));
static OPTION_LINK: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.cshow a").expect("option link selector"));
static OPTION_CLASS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("span.wordclass").expect("option word class selector"));

/// Text of the header that marks the plural section of an inflection table.
const PLURAL_HEADER: &str = "Plural";
/// Text of the header that marks the "other forms" section of an inflection table.
const OTHER_FORMS_HEADER: &str = "Övrig(a) form(er)";
/// Zero-width space, which SAOL sprinkles inside meanings.
const ZERO_WIDTH_SPACE: char = '\u{200b}';

/// The outcome of looking for an entry on a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// The page held a lemma matching the requested word class.
    Found(WordRecord),
    /// The page held lemmas, but none of the requested word class.
    Mismatch {
        /// The word class of the first lemma on the page.
        word_class: String,
    },
    /// The page held no lemma at all.
    Missing,
}

/// Looks for a lemma block in `html` and extracts the word it describes.
///
/// If `type_filter` is given, lemmas of any other word class are skipped. Of the remaining
/// lemmas, the first one is used. A lemma without any `span.lexemid` meanings is rejected
/// rather than rendered with an empty meaning list.
///
/// # Errors
///
/// Returns [`Error::MalformedInput`] if the matching lemma has no meanings, or if its inflection
/// table does not have the shape its word class requires.
pub fn interpret(html: &str, type_filter: Option<&str>) -> Result<Lookup, Error> {
    let document = Html::parse_document(html);
    let mut first_class = None;

    for lemma in document.select(&LEMMA) {
        let base_form = child_text(&lemma, &BASE_FORM);
        let word_class = child_text(&lemma, &WORD_CLASS);

        if base_form.is_empty() {
            trace!("skipping lemma without base form");
            continue;
        }

        if let Some(filter) = type_filter
            && filter != word_class
        {
            trace!(%base_form, %word_class, %filter, "skipping lemma of other word class");
            first_class.get_or_insert(word_class);
            continue;
        }

        return parse_lemma(&lemma, base_form, word_class).map(Lookup::Found);
    }

    Ok(first_class.map_or(Lookup::Missing, |word_class| Lookup::Mismatch { word_class }))
}

/// Extracts the word class variants listed on a disambiguation page.
///
/// Returns an empty list if the page has no list of variants.
#[must_use]
pub fn disambiguation_options(html: &str) -> Vec<DisambiguationOption> {
    let document = Html::parse_document(html);

    document
        .select(&OPTION_LINK)
        .filter_map(|link| {
            let Some(href) = link.attr("href") else {
                warn!("skipping disambiguation link without href");
                return None;
            };
            let label = child_text(&link, &OPTION_CLASS);

            Some(DisambiguationOption {
                word_class: types::normalize_word_class(&label),
                href: href.to_string(),
            })
        })
        .collect()
}

fn parse_lemma(
    lemma: &ElementRef<'_>,
    base_form: String,
    word_class: String,
) -> Result<WordRecord, Error> {
    let meanings: Vec<String> = lemma
        .select(&MEANING)
        .map(|span| element_text(span).replace(ZERO_WIDTH_SPACE, "").trim().to_string())
        .collect();

    if meanings.is_empty() {
        return Err(Error::MalformedInput(format!(
            "lemma {base_form} has no meanings"
        )));
    }

    let mut rules = Rules::default();
    let mut cells = Vec::new();

    if let Some(table) = lemma.select(&TABLE).next() {
        for header in table.select(&TABLE_HEADER) {
            match element_text(header).trim() {
                PLURAL_HEADER => rules.plural = true,
                OTHER_FORMS_HEADER => rules.other_forms = true,
                _ => {}
            }
        }

        cells.extend(
            table
                .select(&TABLE_CELL)
                .map(|cell| element_text(cell).trim().to_string()),
        );
    }

    trace!(%base_form, %word_class, ?rules, num_cells = cells.len(), "parsed lemma");

    let class_data = match word_class.as_str() {
        NOUN => {
            let suffix = child_text(lemma, &SUFFIX);

            ClassData::Noun(grammar::extract_noun(&cells, rules, &suffix)?)
        }
        VERB => ClassData::Verb,
        ADJECTIVE => ClassData::Adjective,
        _ => ClassData::None,
    };

    Ok(WordRecord {
        base_form,
        word_class,
        meanings,
        rules,
        class_data,
    })
}

/// Returns the trimmed text of the first descendant of `elem` matching `selector`, or an empty
/// string if there is none.
fn child_text(elem: &ElementRef<'_>, selector: &Selector) -> String {
    elem.select(selector)
        .next()
        .map(|child| element_text(child).trim().to_string())
        .unwrap_or_default()
}

fn element_text(elem: ElementRef<'_>) -> String {
    elem.text().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BIL: &str = include_str!("../tests/fixtures/queries/bil.html");
    const BOK: &str = include_str!("../tests/fixtures/queries/bok.html");
    const VARA: &str = include_str!("../tests/fixtures/queries/vara.html");
    const VARA_VERB: &str = include_str!("../tests/fixtures/queries/vara-verb.html");
    const MISSING: &str = include_str!("../tests/fixtures/queries/missing.html");

    fn found(lookup: Lookup) -> WordRecord {
        match lookup {
            Lookup::Found(word) => word,
            other => panic!("expected a word, got {other:?}"),
        }
    }

    #[test]
    fn interpret_single_noun() {
        let word = found(interpret(BIL, None).unwrap());

        assert_eq!(word.base_form, "bil");
        assert_eq!(word.word_class, NOUN);
        assert_eq!(word.meanings, ["motordrivet fordon för persontransport"]);
        assert_eq!(word.rules, Rules::default());

        let ClassData::Noun(noun) = word.class_data else {
            panic!("expected noun data");
        };
        assert_eq!(noun.suffix, "~en ~ar");
        assert_eq!(noun.singular.indefinite, "en bil");
        assert_eq!(noun.singular.definite_genitive, "bilens");
        assert_eq!(noun.plural, None);
    }

    #[test]
    fn interpret_strips_zero_width_spaces() {
        let word = found(interpret(BIL, None).unwrap());

        assert!(word.meanings.iter().all(|m| !m.contains(ZERO_WIDTH_SPACE)));
    }

    #[test]
    fn interpret_reads_rule_headers() {
        let word = found(interpret(BOK, None).unwrap());

        assert!(word.rules.plural);
        assert!(word.rules.other_forms);
        assert_eq!(word.meanings.len(), 2);

        let ClassData::Noun(noun) = word.class_data else {
            panic!("expected noun data");
        };
        assert_eq!(noun.plural.map(|p| p.definite), Some("böckerna".to_string()));
        assert_eq!(noun.other_forms.len(), 2);
        assert_eq!(noun.other_forms[0].form, "bok-");
        assert_eq!(noun.other_forms[0].label, "i sammansättningar");
    }

    #[test]
    fn interpret_matching_filter() {
        assert!(matches!(interpret(BIL, Some(NOUN)), Ok(Lookup::Found(word)) if word.base_form == "bil"));
    }

    #[test]
    fn interpret_mismatching_filter() {
        assert_eq!(
            interpret(BIL, Some(VERB)).unwrap(),
            Lookup::Mismatch {
                word_class: NOUN.to_string()
            }
        );
    }

    #[test]
    fn interpret_verb_has_stub_data() {
        let word = found(interpret(VARA_VERB, None).unwrap());

        assert_eq!(word.word_class, VERB);
        assert_eq!(word.class_data, ClassData::Verb);
    }

    #[test]
    fn interpret_page_without_lemma() {
        assert_eq!(interpret(VARA, None).unwrap(), Lookup::Missing);
        assert_eq!(interpret(MISSING, Some(NOUN)).unwrap(), Lookup::Missing);
    }

    #[test]
    fn interpret_lemma_without_meanings_is_malformed() {
        let html = r#"<div class="lemma"><span class="grundform">x</span>
            <a class="ordklass">substantiv</a></div>"#;

        assert!(matches!(
            interpret(html, None),
            Err(Error::MalformedInput(_))
        ));
    }

    #[test]
    fn interpret_noun_with_short_table_is_malformed() {
        let html = r#"<div class="lemma"><span class="grundform">x</span>
            <a class="ordklass">substantiv</a><span class="lexemid">y</span>
            <table class="tabell"><tr><td>en x</td><td>obestämd form</td></tr></table></div>"#;

        assert!(matches!(
            interpret(html, None),
            Err(Error::MalformedInput(_))
        ));
    }

    #[test]
    fn options_are_normalized() {
        let options = disambiguation_options(VARA);
        let classes: Vec<&str> = options.iter().map(|o| o.word_class.as_str()).collect();
        let ids: Vec<Option<&str>> = options.iter().map(DisambiguationOption::id).collect();

        assert_eq!(classes, [NOUN, VERB]);
        assert_eq!(ids, [Some("1"), Some("2")]);
    }

    #[test]
    fn options_missing_on_lemma_page() {
        assert!(disambiguation_options(BIL).is_empty());
        assert!(disambiguation_options(MISSING).is_empty());
    }
}
