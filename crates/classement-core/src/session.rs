//! The page session: one dataset plus the filter and sort state driven by user events.

use tracing::{debug, error, info};

use crate::{
    category::categories,
    config::Config,
    error::LoadError,
    field::Field,
    filter::{FilterState, filter},
    parse::parse_csv,
    record::{Dataset, Record},
    render::Render,
    sort::{SortState, sort_view},
};

/// Input coming from the table's controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    BibInput(String),
    NameInput(String),
    /// Empty selects every category.
    CategorySelected(String),
    HeaderClicked(Field),
}

#[derive(Debug, Default)]
pub struct Session {
    dataset:    Dataset,
    categories: Vec<String>,
    filter:     FilterState,
    sort:       SortState,
    view:       Vec<usize>,
    error:      Option<LoadError>,
}

impl Session {
    pub fn new(dataset: Dataset) -> Self {
        let categories = categories(&dataset);
        let mut session = Self {
            dataset,
            categories,
            ..Default::default()
        };
        session.refresh();
        session
    }

    pub fn from_text(text: &str, delimiter: u8) -> Self {
        Self::new(parse_csv(text, delimiter))
    }

    /// A session whose load failed: no rows, and the error is what gets rendered.
    pub fn failed(err: LoadError) -> Self {
        Self {
            error: Some(err),
            ..Default::default()
        }
    }

    /// Fetch and parse the configured feed. Failure is kept in the session, not retried.
    pub fn load(config: &Config) -> Self {
        match config.source.fetch() {
            Ok(text) => {
                let session = Self::from_text(&text, config.delimiter);
                info!(
                    "loaded {} results in {} categories from {}",
                    session.dataset.len(),
                    session.categories.len(),
                    config.source
                );
                session
            },
            Err(e) => {
                error!("failed to load {}: {e}", config.source);
                Self::failed(e)
            },
        }
    }

    /// Apply one control event, recompute the view and hand it to `out`.
    pub fn handle(&mut self, event: Event, out: &mut impl Render) {
        self.apply(event);
        self.render(out);
    }

    pub fn apply(&mut self, event: Event) {
        debug!("{event:?}");
        match event {
            Event::BibInput(text) => self.filter.bib = text,
            Event::NameInput(text) => self.filter.name = text,
            Event::CategorySelected(category) => self.filter.category = category,
            Event::HeaderClicked(field) => self.sort.toggle(field),
        }
        self.refresh();
    }

    /// Filter the full dataset, then order it by the current sort state.
    pub fn refresh(&mut self) {
        let mut view = filter(&self.dataset, &self.filter);
        let (field, direction) = self.sort.effective();
        sort_view(&self.dataset, &mut view, field, direction);
        self.view = view;
    }

    pub fn render(&self, out: &mut impl Render) {
        match &self.error {
            Some(err) => out.error(err),
            None => out.rows(&self.rows().collect::<Vec<_>>()),
        }
    }

    /// Rows of the current view, in display order.
    pub fn rows(&self) -> impl Iterator<Item = &Record> {
        self.dataset.select(&self.view)
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn sort(&self) -> &SortState {
        &self.sort
    }

    pub fn error(&self) -> Option<&LoadError> {
        self.error.as_ref()
    }

    /// Number of rows currently shown.
    pub fn len(&self) -> usize {
        self.view.len()
    }

    pub fn is_empty(&self) -> bool {
        self.view.is_empty()
    }
}
