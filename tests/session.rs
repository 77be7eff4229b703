use std::fs;

use job_scraper::{Error, SessionStore, StoredCookie};

fn cookie(name: &str, expires: Option<f64>) -> StoredCookie {
    StoredCookie {
        name: name.to_string(),
        value: "opaque".to_string(),
        domain: ".indeed.com".to_string(),
        path: "/".to_string(),
        secure: true,
        http_only: false,
        expires,
    }
}

#[test]
fn missing_file_means_no_prior_session() {
    let dir = tempfile::tempdir().unwrap();
    let store = SessionStore::new(dir.path().join("indeed_cookies.json"));

    assert!(store.load().unwrap().is_empty());
}

#[test]
fn stored_cookies_load_back() {
    let dir = tempfile::tempdir().unwrap();
    let store = SessionStore::new(dir.path().join("state").join("indeed_cookies.json"));
    let cookies = vec![cookie("CTK", Some(1_900_000_000.0)), cookie("session_id", None)];

    store.store(&cookies).unwrap();

    assert_eq!(store.load().unwrap(), cookies);
}

#[test]
fn store_overwrites_previous_state() {
    let dir = tempfile::tempdir().unwrap();
    let store = SessionStore::new(dir.path().join("monster_cookies.json"));

    store.store(&[cookie("old", None), cookie("older", None)]).unwrap();
    store.store(&[cookie("new", None)]).unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].name, "new");
}

#[test]
fn file_uses_protocol_field_names() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("zip_cookies.json");
    SessionStore::new(&path)
        .store(&[cookie("__cf_bm", None)])
        .unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("\"httpOnly\": false"));
    assert!(!content.contains("expires"));
}

#[test]
fn corrupt_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("simplyhired_cookies.json");
    fs::write(&path, "not json").unwrap();

    let err = SessionStore::new(&path).load().unwrap_err();
    assert!(matches!(err, Error::Session(_)));
    assert!(!err.is_fatal());
}
