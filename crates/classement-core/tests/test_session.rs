use std::io::Write;

use classement_core::{
    Config, Direction, Event, Field, LoadError, Render, Session, Source, TextTable,
};

fn fixture() -> Session {
    let path = format!("{}/tests/data/results.csv", env!("CARGO_MANIFEST_DIR"));
    Session::load(&Config::builder().source(path.as_str()).build())
}

fn column<'a>(s: &'a Session, field: Field) -> Vec<&'a str> {
    s.rows().map(|r| r.text(field)).collect()
}

#[test]
fn loads_fixture_feed() {
    let s = fixture();
    assert!(s.error().is_none());
    assert_eq!(s.dataset().len(), 7);
    assert_eq!(s.categories(), ["JU", "SE", "V1", "V2"]);
    assert_eq!(column(&s, Field::Place), ["1", "2", "3", "4", "5", "6", "7"]);

    let leo = &s.dataset().records()[5];
    assert_eq!(leo.text(Field::Nom), "Léo Ferré");
    assert_eq!(leo.get(Field::Temps), Some(""));
}

#[test]
fn bib_filter_alone_is_substring_match() {
    let mut s = fixture();
    s.apply(Event::BibInput("12".into()));
    assert_eq!(column(&s, Field::Dossard), ["112", "1203", "312"]);
}

#[test]
fn accent_insensitive_name_filter() {
    let mut s = fixture();
    s.apply(Event::NameInput("elea".into()));
    assert_eq!(column(&s, Field::Nom), ["Éléa Dupont"]);
    s.apply(Event::NameInput("ANAIS".into()));
    assert_eq!(column(&s, Field::Nom), ["Anaïs Roux"]);
}

#[test]
fn time_sort_with_ties_and_blanks() {
    let mut s = fixture();
    s.apply(Event::HeaderClicked(Field::Temps));
    // blank time is 0; the 0:41:30 tie keeps place order
    assert_eq!(column(&s, Field::Place), ["6", "1", "2", "3", "4", "5", "7"]);
    s.apply(Event::HeaderClicked(Field::Temps));
    assert_eq!(column(&s, Field::Place), ["7", "4", "5", "3", "2", "1", "6"]);
}

#[test]
fn non_numeric_bib_sorts_first() {
    let mut s = fixture();
    s.apply(Event::HeaderClicked(Field::Dossard));
    assert_eq!(column(&s, Field::Dossard)[0], "DNS");
    s.apply(Event::HeaderClicked(Field::Dossard));
    assert_eq!(column(&s, Field::Dossard).last(), Some(&"DNS"));
}

#[test]
fn three_row_feed_click_temps_twice() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        "Place,Dossard,Nom,Catégorie,Temps,Temps puce,Place par catégorie,Ecart par catégorie\n\
         1,10,Ana,SE,0:50:00,0:49:58,1,0:00:00\n\
         2,20,Bob,SE,0:40:00,0:39:58,2,-0:10:00\n\
         3,30,Cyd,V1,1:05:00,1:04:50,1,0:00:00\n"
    )
    .unwrap();

    let cfg = Config::builder()
        .source(Source::Path(file.path().to_path_buf()))
        .build();
    let mut s = Session::load(&cfg);

    s.apply(Event::HeaderClicked(Field::Temps));
    assert_eq!(s.sort().effective(), (Field::Temps, Direction::Ascending));
    let ascending: Vec<String> = column(&s, Field::Nom).into_iter().map(String::from).collect();
    assert_eq!(ascending, ["Bob", "Ana", "Cyd"]);

    s.apply(Event::HeaderClicked(Field::Temps));
    assert_eq!(s.sort().effective(), (Field::Temps, Direction::Descending));
    let mut inverted = ascending.clone();
    inverted.reverse();
    assert_eq!(column(&s, Field::Nom), inverted);
}

#[derive(Default)]
struct Capture {
    rows:  Vec<Vec<String>>,
    error: Option<String>,
}

impl Render for Capture {
    fn rows(&mut self, rows: &[&classement_core::Record]) {
        self.rows = rows
            .iter()
            .map(|r| r.cells().map(|(_, v)| v.to_owned()).collect())
            .collect();
    }

    fn error(&mut self, err: &LoadError) {
        self.error = Some(err.to_string());
    }
}

#[test]
fn handle_renders_each_event() {
    let mut s = fixture();
    let mut out = Capture::default();

    s.handle(Event::CategorySelected("V2".into()), &mut out);
    assert_eq!(out.rows.len(), 2);
    assert!(out.rows.iter().all(|r| r.len() == 8 && r[3] == "V2"));

    s.handle(Event::NameInput("nobody".into()), &mut out);
    assert!(out.rows.is_empty());
    assert!(out.error.is_none());
}

#[test]
fn missing_feed_renders_single_error() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = Config::builder()
        .source(Source::Path(dir.path().join("results2.csv")))
        .build();
    let s = Session::load(&cfg);
    assert!(s.dataset().is_empty());

    let mut table = TextTable::new(Vec::new());
    s.render(&mut table);
    let out = String::from_utf8(table.into_inner().unwrap()).unwrap();
    assert_eq!(out.lines().count(), 1);
    assert!(out.starts_with("Erreur de chargement des données: cannot read"));
}
