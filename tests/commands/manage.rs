use pman::commands::alias::set_alias;
use pman::commands::delete::delete_project;
use pman::commands::index::index_dirs;
use pman::commands::list::list_projects;
use pman::commands::set::set_status;
use pman::commands::status::get_status;
use pman::core::error::PmanError;
use pman::core::schemas::{Bucket, LAST_REFRESH_TIME_KEY};
use pman::core::store::Store;
use std::collections::HashMap;
use std::fs;
use tempfile::{TempDir, tempdir};

/// Indexed store with projects `alpha`, `beta`, `gamma`.
fn indexed() -> (TempDir, Store) {
    let tmp = tempdir().unwrap();
    let code = tmp.path().join("code");
    for name in ["alpha", "beta", "gamma"] {
        fs::create_dir_all(code.join(name)).unwrap();
        fs::write(code.join(name).join("README.md"), format!("# {}", name)).unwrap();
    }
    let store = Store::new(tmp.path().join("projects.db"));
    index_dirs(&store, &[code]).unwrap();
    (tmp, store)
}

fn set(store: &Store, project: &str, status: &str) {
    set_status(store, &[project.to_string(), status.to_string()], false).unwrap();
}

#[test]
fn test_alias_then_status_lookup() {
    let (_tmp, store) = indexed();
    set_alias(&store, "alpha", "a").unwrap();
    set(&store, "a", "Started");

    assert_eq!(
        get_status(&store, "a").unwrap(),
        ("alpha".to_string(), "Started".to_string())
    );
    assert_eq!(
        get_status(&store, "beta").unwrap(),
        ("beta".to_string(), "Indexed".to_string())
    );
    assert!(get_status(&store, "nope").unwrap_err().is_not_found());
}

#[test]
fn test_alias_rules() {
    let (_tmp, store) = indexed();
    assert!(matches!(
        set_alias(&store, "ghost", "g").unwrap_err(),
        PmanError::UnknownProject { .. }
    ));
    assert!(matches!(
        set_alias(&store, "alpha", "beta").unwrap_err(),
        PmanError::ValidationError(_)
    ));
    assert!(matches!(
        set_alias(&store, "alpha", "  ").unwrap_err(),
        PmanError::ValidationError(_)
    ));

    set_alias(&store, "alpha", "x").unwrap();
    set_alias(&store, "beta", "x").unwrap();
    assert_eq!(store.get_record("x", Bucket::ProjectAliases).unwrap(), "beta");
}

#[test]
fn test_delete_project_by_alias_removes_everything() {
    let (_tmp, store) = indexed();
    set_alias(&store, "gamma", "g").unwrap();
    set_alias(&store, "gamma", "gm").unwrap();
    set_alias(&store, "beta", "b").unwrap();

    let report = delete_project(&store, "g").unwrap();
    assert_eq!(report.project, "gamma");
    assert_eq!(report.aliases_removed, vec!["g".to_string(), "gm".to_string()]);

    assert!(store.get_record("gamma", Bucket::ProjectPaths).is_err());
    assert!(store.get_record("gamma", Bucket::Status).is_err());
    assert!(store.get_record("gamma", Bucket::LastEdited).is_err());
    assert_eq!(store.get_record("b", Bucket::ProjectAliases).unwrap(), "beta");

    assert!(matches!(
        delete_project(&store, "gamma").unwrap_err(),
        PmanError::UnknownProject { .. }
    ));
}

#[test]
fn test_list_projects_filters_and_attaches_aliases() {
    let (_tmp, store) = indexed();
    set(&store, "alpha", "Done");
    set(&store, "gamma", "Done");
    set_alias(&store, "alpha", "a").unwrap();
    set_alias(&store, "alpha", "al").unwrap();

    let all = list_projects(&store, &[]).unwrap();
    assert_eq!(all.len(), 3);

    let done = list_projects(&store, &["Done".to_string()]).unwrap();
    let mut names: Vec<&str> = done.iter().map(|r| r.name.as_str()).collect();
    names.sort();
    assert_eq!(names, vec!["alpha", "gamma"]);

    let alpha = done.iter().find(|r| r.name == "alpha").unwrap();
    assert_eq!(alpha.aliases, vec!["a".to_string(), "al".to_string()]);
    assert!(alpha.last_edited.starts_with("Today "), "got {}", alpha.last_edited);
    assert!(alpha.path.ends_with("alpha"));

    assert!(list_projects(&store, &["done".to_string()]).unwrap().is_empty());
}

#[test]
fn test_list_projects_sorted_by_last_edited() {
    let (_tmp, store) = indexed();
    let edited = HashMap::from([
        ("alpha".to_string(), "01 Mar 21 10:00".to_string()),
        ("beta".to_string(), "01 Mar 23 10:00".to_string()),
        ("gamma".to_string(), "01 Mar 22 10:00".to_string()),
    ]);
    store.write_to_db(&edited, Bucket::LastEdited).unwrap();

    let rows = list_projects(&store, &[]).unwrap();
    let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["beta", "gamma", "alpha"]);
    assert_eq!(rows[0].last_edited, "01 Mar 23 10:00");
}

#[test]
fn test_list_projects_refreshes_stale_cache() {
    let (_tmp, store) = indexed();
    let stale = HashMap::from([("alpha".to_string(), "01 Mar 21 10:00".to_string())]);
    store.write_to_db(&stale, Bucket::LastEdited).unwrap();
    let old = HashMap::from([(LAST_REFRESH_TIME_KEY.to_string(), "0".to_string())]);
    store.write_to_db(&old, Bucket::Config).unwrap();

    let rows = list_projects(&store, &[]).unwrap();
    let alpha = rows.iter().find(|r| r.name == "alpha").unwrap();
    assert!(alpha.last_edited.starts_with("Today "), "got {}", alpha.last_edited);
    assert_ne!(
        store.get_record(LAST_REFRESH_TIME_KEY, Bucket::Config).unwrap(),
        "0"
    );
}

#[test]
fn test_list_projects_empty_store() {
    let tmp = tempdir().unwrap();
    let store = Store::new(tmp.path().join("projects.db"));
    assert!(list_projects(&store, &[]).unwrap().is_empty());
}
