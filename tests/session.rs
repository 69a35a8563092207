use anyhow::{anyhow, Result};
use cd_inventory::ui::{Prompt, Session};
use cd_inventory::Config;
use std::collections::VecDeque;
use tempfile::TempDir;

/// Feeds canned answers to the menu loop.
struct Scripted {
    answers: VecDeque<String>,
}

impl Scripted {
    fn new(answers: &[&str]) -> Self {
        Scripted {
            answers: answers.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Prompt for Scripted {
    fn line(&mut self, prompt: &str) -> Result<String> {
        self.answers
            .pop_front()
            .ok_or_else(|| anyhow!("no answer scripted for {prompt:?}"))
    }
}

fn run(config: &Config, answers: &[&str]) -> String {
    let mut session = Session::new(Scripted::new(answers), Vec::new(), config);
    session.load_on_start().unwrap();
    session.run().unwrap();
    String::from_utf8(session.into_output()).unwrap()
}

#[test]
fn add_save_and_reload_in_a_new_session() {
    let dir = TempDir::new().unwrap();
    let config = Config::with_data_file(dir.path().join("CDInventory.dat"));

    let first = run(
        &config,
        &["a", "101", "Abbey Road", "The Beatles", "i", "s", "y", "x"],
    );
    assert!(first.contains("101\tAbbey Road (by:The Beatles)"));
    assert!(first.contains("Inventory saved to"));

    let second = run(&config, &["i", "x"]);
    assert_eq!(second.matches("101\tAbbey Road (by:The Beatles)").count(), 1);
    assert!(!second.contains("No saved inventory"));
}

#[test]
fn confirmed_reload_discards_unsaved_changes() {
    let dir = TempDir::new().unwrap();
    let config = Config::with_data_file(dir.path().join("CDInventory.dat"));
    run(&config, &["a", "1", "Kept", "A", "s", "y", "x"]);

    let mut session = Session::new(
        Scripted::new(&["a", "2", "Unsaved", "B", "l", "yes", "x"]),
        Vec::new(),
        &config,
    );
    session.load_on_start().unwrap();
    session.run().unwrap();

    let titles: Vec<&str> = session
        .inventory()
        .records()
        .iter()
        .map(|r| r.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Kept"]);
}

#[test]
fn corrupt_file_on_reload_keeps_current_inventory() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("CDInventory.dat");
    let config = Config::with_data_file(&path);

    let mut session = Session::new(
        Scripted::new(&["a", "3", "Three", "C", "l", "yes", "x"]),
        Vec::new(),
        &config,
    );
    session.load_on_start().unwrap();
    std::fs::write(&path, b"garbage").unwrap();
    session.run().unwrap();

    assert_eq!(session.inventory().len(), 1);
    let out = String::from_utf8(session.into_output()).unwrap();
    assert!(out.contains("is not a valid inventory snapshot"));
    assert!(out.contains("Inventory data NOT reloaded."));
}

#[test]
fn corrupt_file_at_start_begins_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("CDInventory.dat");
    std::fs::write(&path, b"garbage").unwrap();

    let out = run(&Config::with_data_file(&path), &["x"]);
    assert!(out.contains("Starting with an empty inventory."));
}
