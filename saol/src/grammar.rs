//! Mapping of flat inflection table cells into typed records.
//!
//! SAOL renders an inflection table as rows of `<td>` pairs, where the first cell holds a form and
//! the second holds a description of it (e.g. "en bil" / "obestämd form"). Flattened in document
//! order, the forms end up at the even positions.

use crate::Error;
use crate::types::{NounData, NounForms, OtherForm, Rules};

/// Position of the first singular form.
const SINGULAR_OFFSET: usize = 0;
/// Position of the first plural form.
const PLURAL_OFFSET: usize = 8;
/// Position of the first cell in the "Övrig(a) form(er)" section.
const OTHER_FORMS_OFFSET: usize = 16;

/// Builds the inflection table of a noun from the flattened `cells` of its grammar table.
///
/// The singular forms are always read. The plural forms and the other forms are only read when
/// the corresponding flag in `rules` is set.
///
/// # Errors
///
/// Returns [`Error::MalformedInput`] if `cells` is too short for the active `rules`, or if the
/// "Övrig(a) form(er)" section does not consist of (form, description) pairs.
pub fn extract_noun(cells: &[String], rules: Rules, suffix: &str) -> Result<NounData, Error> {
    let singular = forms_at(cells, SINGULAR_OFFSET)?;
    let plural = if rules.plural {
        Some(forms_at(cells, PLURAL_OFFSET)?)
    } else {
        None
    };
    let other_forms = if rules.other_forms {
        pair_other_forms(cells)?
    } else {
        Vec::new()
    };

    Ok(NounData {
        suffix: suffix.to_string(),
        singular,
        plural,
        other_forms,
    })
}

/// Reads the four forms starting at `offset`, skipping the description cell after each one.
fn forms_at(cells: &[String], offset: usize) -> Result<NounForms, Error> {
    let cell = |index: usize| {
        cells.get(offset + index * 2).cloned().ok_or_else(|| {
            Error::MalformedInput(format!(
                "expected at least {} grammar cells, got {}",
                offset + index * 2 + 1,
                cells.len()
            ))
        })
    };

    Ok(NounForms {
        indefinite: cell(0)?,
        indefinite_genitive: cell(1)?,
        definite: cell(2)?,
        definite_genitive: cell(3)?,
    })
}

fn pair_other_forms(cells: &[String]) -> Result<Vec<OtherForm>, Error> {
    let trailing = cells.get(OTHER_FORMS_OFFSET..).ok_or_else(|| {
        Error::MalformedInput(format!(
            "expected at least {OTHER_FORMS_OFFSET} grammar cells before other forms, got {}",
            cells.len()
        ))
    })?;

    if trailing.len() % 2 != 0 {
        return Err(Error::MalformedInput(format!(
            "other forms must come in pairs, got {} cell(s)",
            trailing.len()
        )));
    }

    Ok(trailing
        .chunks_exact(2)
        .map(|pair| OtherForm {
            form: pair[0].clone(),
            label: pair[1].clone(),
        })
        .collect())
}
