//! Parsing of typed answers

use crate::catalog::{Catalog, Selection, EMPTY_SELECTION_MESSAGE};
use crate::{ProjectsError, Result};

/// Parse a multi-select answer into catalog indices, sorted and unique.
///
/// Tokens are separated by commas, or by whitespace when the answer has no
/// comma. Each token is a 1-based number, an inclusive range such as `2-4`,
/// a project type name (any case) or `all`.
pub fn parse_selection_indices(answer: &str, catalog: &Catalog) -> Result<Vec<usize>> {
    let tokens: Vec<&str> = if answer.contains(',') {
        answer.split(',').map(str::trim).filter(|t| !t.is_empty()).collect()
    } else {
        answer.split_whitespace().collect()
    };

    if tokens.is_empty() {
        return Err(ProjectsError::Validation(EMPTY_SELECTION_MESSAGE.to_string()));
    }

    let mut indices = Vec::new();
    for token in tokens {
        if token.eq_ignore_ascii_case("all") || token == "*" {
            indices.extend(0..catalog.len());
        } else if let Some(index) = catalog.position_ignore_case(token) {
            indices.push(index);
        } else if let Ok(number) = token.parse::<usize>() {
            indices.push(to_index(number, catalog.len())?);
        } else if let Some((from, to)) = parse_range(token) {
            let (from, to) = (to_index(from, catalog.len())?, to_index(to, catalog.len())?);
            if from > to {
                return Err(ProjectsError::Validation(format!(
                    "Range '{}' goes backwards.",
                    token
                )));
            }
            indices.extend(from..=to);
        } else {
            return Err(ProjectsError::Validation(format!(
                "Unknown project type '{}'.",
                token
            )));
        }
    }

    indices.sort_unstable();
    indices.dedup();
    Ok(indices)
}

/// Parse a multi-select answer straight into a selection of folder names
pub fn parse_selection(answer: &str, catalog: &Catalog) -> Result<Selection> {
    let indices = parse_selection_indices(answer, catalog)?;
    selection_from_indices(&indices, catalog)
}

/// Build a selection from catalog positions, ignoring out-of-range ones
pub fn selection_from_indices(indices: &[usize], catalog: &Catalog) -> Result<Selection> {
    let types = catalog.as_slice();
    Selection::new(
        indices
            .iter()
            .filter_map(|&i| types.get(i))
            .map(|t| t.identifier.clone()),
    )
}

/// `Some(answer)` for a recognised yes/no reply, the default for a blank one
pub fn parse_confirm(answer: &str, default: bool) -> Option<bool> {
    match answer.trim().to_lowercase().as_str() {
        "" => Some(default),
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

fn parse_range(token: &str) -> Option<(usize, usize)> {
    let (from, to) = token.split_once('-')?;
    Some((from.trim().parse().ok()?, to.trim().parse().ok()?))
}

fn to_index(number: usize, len: usize) -> Result<usize> {
    if number == 0 || number > len {
        return Err(ProjectsError::Validation(format!(
            "'{}' is not between 1 and {}.",
            number, len
        )));
    }
    Ok(number - 1)
}
