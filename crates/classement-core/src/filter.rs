use crate::{
    field::Field,
    normalize::fold,
    record::{Dataset, Record},
};

/// Current contents of the three filter controls. An empty text imposes no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub bib:      String,
    pub name:     String,
    pub category: String,
}

impl FilterState {
    fn matcher(&self) -> Matcher<'_> {
        Matcher {
            bib:      self.bib.to_lowercase(),
            name:     fold(&self.name),
            category: &self.category,
        }
    }
}

/// Filter texts normalized once per pass instead of once per row.
struct Matcher<'a> {
    bib:      String,
    name:     String,
    category: &'a str,
}

impl Matcher<'_> {
    fn matches(&self, record: &Record) -> bool {
        record.text(Field::Dossard).to_lowercase().contains(&self.bib)
            && fold(record.text(Field::Nom)).contains(&self.name)
            && (self.category.is_empty() || record.text(Field::Categorie) == self.category)
    }
}

/// Indices of the rows of `ds` passing all three predicates, in dataset order.
pub fn filter(ds: &Dataset, state: &FilterState) -> Vec<usize> {
    let matcher = state.matcher();
    ds.records()
        .iter()
        .enumerate()
        .filter_map(|(i, r)| matcher.matches(r).then_some(i))
        .collect()
}
