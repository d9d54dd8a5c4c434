mod common;
use common::setup_test_home;
use std::fs;
use trackese::errors::AppError;
use trackese::models::Section;
use trackese::registry::SectionRegistry;

#[test]
fn test_defaults_seeded_and_persisted() {
    let home = setup_test_home("registry_defaults");
    let path = home.join("batch_sections.json");

    let mut registry = SectionRegistry::new(&path);
    let sections = registry.list_all().expect("list").to_vec();

    assert_eq!(
        sections,
        vec![
            Section::new("58", "C"),
            Section::new("58", "D"),
            Section::new("58", "E"),
        ]
    );
    assert!(path.exists());
}

#[test]
fn test_add_is_case_insensitive() {
    let home = setup_test_home("registry_add_case");
    let mut registry = SectionRegistry::new(home.join("batch_sections.json"));

    let created = registry.add("59", "Alpha").expect("add");
    assert_eq!(created, Section::new("59", "Alpha"));

    let again = registry.add("59", "ALPHA").expect("add again");
    assert_eq!(again, Section::new("59", "Alpha"));

    let existing = registry.add("58", "c").expect("add default");
    assert_eq!(existing, Section::new("58", "C"));

    assert_eq!(registry.list_all().expect("list").len(), 4);
}

#[test]
fn test_add_rejects_empty_names() {
    let home = setup_test_home("registry_add_empty");
    let mut registry = SectionRegistry::new(home.join("batch_sections.json"));

    assert!(matches!(
        registry.add("  ", "C"),
        Err(AppError::InvalidSection(_))
    ));
}

#[test]
fn test_changes_survive_restart() {
    let home = setup_test_home("registry_restart");
    let path = home.join("batch_sections.json");

    {
        let mut registry = SectionRegistry::new(&path);
        registry.add("60", "B").expect("add");
        assert!(registry.remove(&Section::new("58", "D")).expect("remove"));
    }

    let mut reopened = SectionRegistry::new(&path);
    let sections = reopened.list_all().expect("list").to_vec();
    assert_eq!(
        sections,
        vec![
            Section::new("58", "C"),
            Section::new("58", "E"),
            Section::new("60", "B"),
        ]
    );
}

#[test]
fn test_remove_uses_exact_equality() {
    let home = setup_test_home("registry_remove_exact");
    let mut registry = SectionRegistry::new(home.join("batch_sections.json"));

    assert!(!registry.remove(&Section::new("58", "c")).expect("remove"));
    assert_eq!(registry.list_all().expect("list").len(), 3);
}

#[test]
fn test_resolve() {
    let home = setup_test_home("registry_resolve");
    let mut registry = SectionRegistry::new(home.join("batch_sections.json"));

    assert_eq!(
        registry.resolve("58", "e").expect("resolve"),
        Section::new("58", "E")
    );
    assert!(matches!(
        registry.resolve("99", "Z"),
        Err(AppError::SectionNotFound(_))
    ));
}

#[test]
fn test_corrupt_file_is_reported_not_overwritten() {
    let home = setup_test_home("registry_corrupt");
    let path = home.join("batch_sections.json");
    fs::write(&path, "not json").expect("write");

    let mut registry = SectionRegistry::new(&path);
    assert!(matches!(registry.list_all(), Err(AppError::Json(_))));
    assert_eq!(fs::read_to_string(&path).expect("read"), "not json");
}
