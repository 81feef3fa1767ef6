use std::io::{self, Write};

use tabwriter::TabWriter;

use crate::{error::LoadError, field::Field, record::Record};

/// Prefix of the single message shown in place of the table when loading fails.
pub const LOAD_ERROR_PREFIX: &str = "Erreur de chargement des données";

/// Draws one view of the results table.
///
/// Implementations show the eight [`Field`] columns in [`Field::all`] order under
/// [`Field::label`] headings. An empty slice means an empty table body.
pub trait Render {
    fn rows(&mut self, rows: &[&Record]);

    /// Replace the whole table with a single full-width message.
    fn error(&mut self, err: &LoadError);
}

pub fn error_message(err: &LoadError) -> String {
    format!("{LOAD_ERROR_PREFIX}: {err}")
}

/// Column-aligned plain text output.
pub struct TextTable<W: Write> {
    wtr:    TabWriter<W>,
    status: io::Result<()>,
}

impl<W: Write> TextTable<W> {
    pub fn new(inner: W) -> Self {
        Self {
            wtr:    TabWriter::new(inner),
            status: Ok(()),
        }
    }

    /// Flush and hand back the writer, reporting the first write failure if any.
    pub fn into_inner(mut self) -> io::Result<W> {
        self.status?;
        self.wtr.flush()?;
        self.wtr
            .into_inner()
            .map_err(|e| io::Error::other(e.to_string()))
    }

    fn write_line<'a>(&mut self, cells: impl Iterator<Item = &'a str>) {
        if self.status.is_err() {
            return;
        }
        let mut line = cells.collect::<Vec<_>>().join("\t");
        line.push('\n');
        self.status = self.wtr.write_all(line.as_bytes());
    }
}

impl<W: Write> Render for TextTable<W> {
    fn rows(&mut self, rows: &[&Record]) {
        self.write_line(Field::all().map(Field::label));
        for record in rows {
            self.write_line(record.cells().map(|(_, v)| v));
        }
    }

    fn error(&mut self, err: &LoadError) {
        if self.status.is_ok() {
            self.status = writeln!(self.wtr, "{}", error_message(err));
        }
    }
}
