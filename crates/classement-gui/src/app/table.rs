use classement_core::{
    Field, LoadError, Record, Render, SortState,
    render::error_message,
    sort::Direction,
};
use egui::{Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};

/// Last view handed over by the session, as display strings.
#[derive(Debug, Default)]
pub struct ResultsTable {
    rows:  Vec<Vec<String>>,
    error: Option<String>,
}

impl Render for ResultsTable {
    fn rows(&mut self, rows: &[&Record]) {
        self.error = None;
        self.rows = rows
            .iter()
            .map(|r| r.cells().map(|(_, v)| v.to_owned()).collect())
            .collect();
    }

    fn error(&mut self, err: &LoadError) {
        self.rows.clear();
        self.error = Some(error_message(err));
    }
}

fn header_text(field: Field, sort: &SortState) -> String {
    match sort.column {
        Some(active) if active == field => {
            let arrow = match sort.direction {
                Direction::Ascending => "▲",
                Direction::Descending => "▼",
            };
            format!("{} {arrow}", field.label())
        },
        _ => field.label().to_owned(),
    }
}

impl ResultsTable {
    /// Draw the table. Returns the header the user clicked this frame, if any.
    pub fn show(&self, ui: &mut Ui, sort: &SortState) -> Option<Field> {
        if let Some(err) = &self.error {
            ui.centered_and_justified(|ui| {
                ui.colored_label(Color32::RED, err.as_str());
            });
            return None;
        }

        let mut clicked = None;
        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .columns(Column::auto().at_least(60.0), Field::all().count())
            .header(22.0, |mut header| {
                for field in Field::all() {
                    header.col(|ui| {
                        let label = RichText::new(header_text(field, sort)).strong();
                        if ui.button(label).clicked() {
                            clicked = Some(field);
                        }
                    });
                }
            })
            .body(|body| {
                body.rows(18.0, self.rows.len(), |mut row| {
                    let idx = row.index();
                    for cell in &self.rows[idx] {
                        row.col(|ui| {
                            ui.label(cell.as_str());
                        });
                    }
                });
            });
        clicked
    }
}
