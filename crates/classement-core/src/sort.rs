use std::cmp::Ordering;

use crate::{
    field::{ColumnKind, Field},
    record::{Dataset, Record},
    timecode,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

impl Direction {
    #[must_use]
    pub const fn flip(self) -> Self {
        match self {
            Direction::Ascending => Direction::Descending,
            Direction::Descending => Direction::Ascending,
        }
    }

    #[inline]
    pub const fn apply(self, ord: Ordering) -> Ordering {
        match self {
            Direction::Ascending => ord,
            Direction::Descending => ord.reverse(),
        }
    }
}

/// The column chosen from the table header, if any. Survives filter changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    pub column:    Option<Field>,
    pub direction: Direction,
}

impl SortState {
    /// Column and direction actually applied: `place` ascending until a header is clicked.
    pub fn effective(&self) -> (Field, Direction) {
        match self.column {
            Some(field) => (field, self.direction),
            None => (Field::Place, Direction::Ascending),
        }
    }

    /// Header click: same column flips, another column starts ascending.
    pub fn toggle(&mut self, field: Field) {
        if self.column == Some(field) {
            self.direction = self.direction.flip();
        } else {
            self.column = Some(field);
            self.direction = Direction::Ascending;
        }
    }
}

/// Leading-integer parse: optional whitespace, optional sign, then a digit run.
/// `"12b"` -> `Some(12)`, `"b12"` -> `None`. Out-of-range values saturate.
pub fn parse_int(value: &str) -> Option<i64> {
    let s = value.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let magnitude = digits[..end].bytes().try_fold(0_i64, |acc, b| {
        acc.checked_mul(10)?.checked_add(i64::from(b - b'0'))
    });
    Some(match (magnitude, negative) {
        (Some(n), true) => -n,
        (Some(n), false) => n,
        (None, true) => i64::MIN,
        (None, false) => i64::MAX,
    })
}

/// Ascending order of two records on `field`, by the column's kind.
///
/// Numeric columns order unparsable values before every number.
pub fn compare(a: &Record, b: &Record, field: Field) -> Ordering {
    let (x, y) = (a.get(field), b.get(field));
    match field.kind() {
        ColumnKind::Numeric => {
            let x = x.and_then(parse_int);
            let y = y.and_then(parse_int);
            x.cmp(&y)
        },
        ColumnKind::Time => timecode::to_seconds(x).cmp(&timecode::to_seconds(y)),
        ColumnKind::Text => cmp_ignore_case(x.unwrap_or(""), y.unwrap_or("")),
    }
}

#[inline]
fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

/// Reorder `view` (indices into `ds`) by `field`.
///
/// `slice::sort_by` is stable and the direction is applied to the comparator, so
/// rows with equal keys keep their incoming order in both directions.
pub fn sort_view(ds: &Dataset, view: &mut [usize], field: Field, direction: Direction) {
    view.sort_by(|&i, &j| match (ds.get(i), ds.get(j)) {
        (Some(a), Some(b)) => direction.apply(compare(a, b, field)),
        _ => Ordering::Equal,
    });
}
