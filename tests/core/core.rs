use pman::core::error::PmanError;
use pman::core::resolve::{
    Resolution, canonical_name, get_project_path, read_readme, resolve_project,
};
use pman::core::schemas::{Bucket, LAST_REFRESH_TIME_KEY};
use pman::core::store::Store;
use pman::core::time::{self, LOOKUP_FAILED_LABEL};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tempfile::{TempDir, tempdir};

fn setup() -> (TempDir, Store) {
    let tmp = tempdir().unwrap();
    let store = Store::new(tmp.path().join("data").join("projects.db"));
    (tmp, store)
}

fn put(store: &Store, bucket: Bucket, pairs: &[(&str, &str)]) {
    let rec: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    store.write_to_db(&rec, bucket).unwrap();
}

fn project_dir(root: &Path, name: &str, readme: Option<&str>) -> String {
    let dir = root.join(name);
    fs::create_dir_all(&dir).unwrap();
    if let Some(body) = readme {
        fs::write(dir.join("README.md"), body).unwrap();
    }
    dir.to_string_lossy().to_string()
}

#[test]
fn test_resolve_direct_alias_dangling_and_unknown() {
    let (_tmp, store) = setup();
    put(&store, Bucket::ProjectPaths, &[("pman", "/src/pman")]);
    put(
        &store,
        Bucket::ProjectAliases,
        &[("pm", "pman"), ("old", "retired")],
    );

    assert!(matches!(
        resolve_project(&store, "pman").unwrap(),
        Resolution::Direct { ref name, .. } if name == "pman"
    ));
    assert_eq!(
        resolve_project(&store, "pm").unwrap(),
        Resolution::Aliased {
            alias: "pm".to_string(),
            name: "pman".to_string(),
            path: "/src/pman".into(),
        }
    );
    assert_eq!(
        resolve_project(&store, "old").unwrap(),
        Resolution::DanglingAlias {
            alias: "old".to_string(),
            target: "retired".to_string(),
        }
    );
    assert_eq!(
        resolve_project(&store, "nothing").unwrap(),
        Resolution::Unresolved {
            name: "nothing".to_string()
        }
    );
}

#[test]
fn test_canonical_name_falls_back_to_literal() {
    let (_tmp, store) = setup();
    put(&store, Bucket::ProjectAliases, &[("pm", "pman")]);
    assert_eq!(canonical_name(&store, "pm").unwrap(), "pman");
    assert_eq!(canonical_name(&store, "other").unwrap(), "other");
}

#[test]
fn test_get_project_path_errors() {
    let (tmp, store) = setup();
    let with_readme = project_dir(tmp.path(), "docs", Some("# docs"));
    let without = project_dir(tmp.path(), "bare", None);
    put(
        &store,
        Bucket::ProjectPaths,
        &[("docs", with_readme.as_str()), ("bare", without.as_str())],
    );
    put(&store, Bucket::ProjectAliases, &[("d", "docs"), ("x", "gone")]);

    let p = get_project_path(&store, "d").unwrap();
    assert_eq!(p, Path::new(&with_readme).join("README.md"));

    assert!(matches!(
        get_project_path(&store, "bare").unwrap_err(),
        PmanError::ReadmeNotFound(_)
    ));
    assert!(matches!(
        get_project_path(&store, "x").unwrap_err(),
        PmanError::DanglingAlias { .. }
    ));
    assert!(matches!(
        get_project_path(&store, "nope").unwrap_err(),
        PmanError::UnknownProject { .. }
    ));
}

#[test]
fn test_read_readme_contents_and_placeholder() {
    let (tmp, store) = setup();
    let docs = project_dir(tmp.path(), "docs", Some("# Docs\n\nhello\n"));
    let bare = project_dir(tmp.path(), "bare", None);
    put(&store, Bucket::ProjectPaths, &[("docs", docs.as_str()), ("bare", bare.as_str())]);

    assert_eq!(read_readme(&store, "docs").unwrap(), b"# Docs\n\nhello\n");
    assert_eq!(
        read_readme(&store, "bare").unwrap(),
        b"# README does not exist for bare".to_vec()
    );
    assert!(matches!(
        read_readme(&store, "unknown").unwrap_err(),
        PmanError::UnknownProject { .. }
    ));
}

#[test]
fn test_read_readme_that_is_a_directory_is_a_read_error() {
    let (tmp, store) = setup();
    let odd = project_dir(tmp.path(), "odd", None);
    fs::create_dir_all(Path::new(&odd).join("README.md")).unwrap();
    put(&store, Bucket::ProjectPaths, &[("odd", odd.as_str())]);

    let err = read_readme(&store, "odd").unwrap_err();
    assert!(matches!(err, PmanError::ReadReadme { .. }));
    assert!(err.to_string().contains("error reading README for odd"));
}

#[test]
fn test_last_modified_time() {
    let (tmp, store) = setup();
    let dir = project_dir(tmp.path(), "proj", Some("# proj"));
    put(&store, Bucket::ProjectPaths, &[("proj", dir.as_str())]);

    let stamp = time::get_last_modified_time(&store, "proj");
    let (label, ts) = time::parse_time(&stamp);
    assert!(label.starts_with("Today "), "got {}", label);
    assert!(ts > 0);

    assert_eq!(
        time::get_last_modified_time(&store, "missing"),
        LOOKUP_FAILED_LABEL
    );
}

#[test]
fn test_refresh_last_edited_updates_config() {
    let (tmp, store) = setup();
    let dir = project_dir(tmp.path(), "proj", Some("# proj"));
    put(&store, Bucket::ProjectPaths, &[("proj", dir.as_str())]);

    let edited = time::refresh_last_edited(&store).unwrap();
    assert!(edited.contains_key("proj"));
    assert_eq!(
        store.get_record("proj", Bucket::LastEdited).unwrap(),
        edited["proj"]
    );

    let refreshed = store.get_record(LAST_REFRESH_TIME_KEY, Bucket::Config).unwrap();
    assert!(!time::day_passed(&refreshed));
}
