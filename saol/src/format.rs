//! Human-readable reports of resolved words, laid out like the tables on SAOL's website.

use std::fmt::{self, Display};

use crate::Error;
use crate::types::{ClassData, NounData, NounForms, WordRecord};

/// Labels of the four forms in a singular or plural section, in display order.
const FORM_LABELS: [&str; 4] = [
    "obestämd form",
    "obestämd form genitiv",
    "bestämd form",
    "bestämd form genitiv",
];

/// Renders `word` as a multi-line report.
///
/// # Errors
///
/// Returns [`Error::UnsupportedWordClass`] if the word is not a noun.
pub fn format(word: &WordRecord) -> Result<String, Error> {
    match &word.class_data {
        ClassData::Noun(noun) => Ok(NounFormatter { word, noun }.to_string()),
        ClassData::Verb | ClassData::Adjective | ClassData::None => {
            Err(Error::UnsupportedWordClass(word.word_class.clone()))
        }
    }
}

struct NounFormatter<'a> {
    word: &'a WordRecord,
    noun: &'a NounData,
}

impl Display for NounFormatter<'_> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        let WordRecord {
            base_form,
            word_class,
            meanings,
            rules,
            ..
        } = self.word;
        let suffix = &self.noun.suffix;

        writeln!(fmt, "{base_form} {word_class} {suffix}")?;

        if let [meaning] = meanings.as_slice() {
            writeln!(fmt, "•{meaning}")?;
        } else {
            for (n, meaning) in meanings.iter().enumerate() {
                writeln!(fmt, "{}. {meaning}", n + 1)?;
            }
        }

        write_forms(fmt, "Singular", &self.noun.singular)?;

        if rules.plural
            && let Some(plural) = &self.noun.plural
        {
            write_forms(fmt, "Plural", plural)?;
        }

        if rules.other_forms {
            write!(fmt, "\nÖvrig(a) form(er)\n")?;

            // The last pair is not followed by a newline
            for (i, other) in self.noun.other_forms.iter().enumerate() {
                if i > 0 {
                    writeln!(fmt)?;
                }
                write!(fmt, "{}\t {}", other.form, other.label)?;
            }
        }

        Ok(())
    }
}

fn write_forms(fmt: &mut fmt::Formatter<'_>, heading: &str, forms: &NounForms) -> fmt::Result {
    let values = [
        &forms.indefinite,
        &forms.indefinite_genitive,
        &forms.definite,
        &forms.definite_genitive,
    ];

    write!(fmt, "\n{heading}\n")?;

    for (value, label) in values.iter().zip(FORM_LABELS) {
        writeln!(fmt, "{value}\t {label}")?;
    }

    Ok(())
}
