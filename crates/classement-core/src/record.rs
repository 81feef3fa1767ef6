use std::array;

use strum::EnumCount;

use crate::field::Field;

/// One results row. Slots are indexed by [`Field`]; `None` means the source line
/// ran out of values before reaching that column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    values: [Option<String>; Field::COUNT],
}

impl Default for Record {
    fn default() -> Self {
        Self {
            values: array::from_fn(|_| None),
        }
    }
}

impl Record {
    pub fn builder() -> RecordBuilder {
        RecordBuilder::default()
    }

    #[inline]
    pub fn get(&self, field: Field) -> Option<&str> {
        self.values[field.index()].as_deref()
    }

    /// The value as displayed and as filtered: absent reads as `""`.
    #[inline]
    pub fn text(&self, field: Field) -> &str {
        self.get(field).unwrap_or("")
    }

    pub(crate) fn set(&mut self, field: Field, value: impl Into<String>) {
        self.values[field.index()] = Some(value.into());
    }

    /// Values in display order.
    pub fn cells(&self) -> impl Iterator<Item = (Field, &str)> {
        Field::all().map(move |f| (f, self.text(f)))
    }
}

/// Test and fixture helper for building records field by field.
#[derive(Debug, Default)]
pub struct RecordBuilder {
    record: Record,
}

impl RecordBuilder {
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.record.set(field, value);
        self
    }

    pub fn build(self) -> Record {
        self.record
    }
}

/// All rows of a feed in file order. Never mutated after load; views index into it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[inline]
    pub fn get(&self, idx: usize) -> Option<&Record> {
        self.records.get(idx)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Resolve a view into record references, skipping stale indices.
    pub fn select<'a>(&'a self, view: &'a [usize]) -> impl Iterator<Item = &'a Record> + 'a {
        view.iter().filter_map(|&i| self.records.get(i))
    }
}

impl FromIterator<Record> for Dataset {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
