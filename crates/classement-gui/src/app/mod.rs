use classement_core::{Event, Session};
use eframe::egui::{self, ComboBox, TextEdit};

mod table;

use table::ResultsTable;

const ALL_CATEGORIES: &str = "Toutes";

pub struct ClassementApp {
    session:  Session,
    table:    ResultsTable,
    bib:      String,
    name:     String,
    category: String,
}

impl ClassementApp {
    pub fn new(session: Session) -> Self {
        let mut table = ResultsTable::default();
        session.render(&mut table);
        Self {
            session,
            table,
            bib: String::new(),
            name: String::new(),
            category: String::new(),
        }
    }

    fn send(&mut self, event: Event) {
        self.session.handle(event, &mut self.table);
    }

    fn show_filters(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Dossard:");
            let bib = ui.add(
                TextEdit::singleline(&mut self.bib)
                    .hint_text("numéro")
                    .desired_width(90.0),
            );
            if bib.changed() {
                self.send(Event::BibInput(self.bib.clone()));
            }

            ui.add_space(12.0);
            ui.label("Nom:");
            let name = ui.add(
                TextEdit::singleline(&mut self.name)
                    .hint_text("nom du coureur")
                    .desired_width(200.0),
            );
            if name.changed() {
                self.send(Event::NameInput(self.name.clone()));
            }

            ui.add_space(12.0);
            let before = self.category.clone();
            let selected = if self.category.is_empty() {
                ALL_CATEGORIES
            } else {
                self.category.as_str()
            };
            ComboBox::from_label("Catégorie")
                .selected_text(selected.to_owned())
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut self.category, String::new(), ALL_CATEGORIES);
                    for c in self.session.categories() {
                        ui.selectable_value(&mut self.category, c.clone(), c.as_str());
                    }
                });
            if self.category != before {
                self.send(Event::CategorySelected(self.category.clone()));
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!(
                    "{} / {} coureurs",
                    self.session.len(),
                    self.session.dataset().len()
                ));
            });
        });
    }
}

impl eframe::App for ClassementApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("filters").show(ctx, |ui| {
            ui.add_space(6.0);
            self.show_filters(ui);
            ui.add_space(6.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(field) = self.table.show(ui, self.session.sort()) {
                self.send(Event::HeaderClicked(field));
            }
        });
    }
}
