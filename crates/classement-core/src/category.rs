use std::collections::BTreeSet;

use crate::{field::Field, record::Dataset};

/// Distinct non-empty categories in lexicographic order, for the category selector.
pub fn categories(ds: &Dataset) -> Vec<String> {
    ds.records()
        .iter()
        .filter_map(|r| r.get(Field::Categorie))
        .filter(|c| !c.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_owned)
        .collect()
}
