use rstartpage::{
    BackgroundPicker, BookmarkForm, BookmarkStore, NewBookmark, Session, SessionConfig,
    StartPageError, ThemeState, DEFAULT_ICON,
};
use rstartpage::data_uri;
use anyhow::Result;
use std::collections::HashSet;
use std::env;
use std::fs;

fn names(session: &Session, query: &str) -> Vec<String> {
    session.search(query).iter().map(|b| b.name.clone()).collect()
}

#[test]
fn test_seed_add_search_remove_scenario() -> Result<()> {
    let mut session = Session::new();
    assert_eq!(names(&session, ""), ["GitHub", "Gmail", "Drive"]);
    let original = session.bookmarks.entries().to_vec();

    let docs = session.add_bookmark(NewBookmark::new("Docs", "https://docs.google.com", "📄"));
    assert_eq!(session.bookmarks.len(), 4);
    assert_eq!(session.bookmarks.entries().last(), Some(&docs));
    assert!(original.iter().all(|b| b.id != docs.id));

    assert_eq!(names(&session, "d"), ["Drive", "Docs"]);

    session.remove_bookmark(docs.id);
    assert_eq!(session.bookmarks.entries(), original.as_slice());
    Ok(())
}

#[test]
fn test_ids_unique_across_many_adds() -> Result<()> {
    let mut store = BookmarkStore::with_default_seed();
    for i in 0..200 {
        store.add(NewBookmark::new(format!("site {i}"), format!("https://{i}.example"), "🌐"));
    }
    let ids: HashSet<_> = store.entries().iter().map(|b| b.id).collect();
    assert_eq!(ids.len(), 203);
    Ok(())
}

#[test]
fn test_removed_ids_never_come_back() -> Result<()> {
    let mut store = BookmarkStore::with_default_seed();
    let added = store.add(NewBookmark::new("Temp", "https://temp.example", "⏳"));

    store.remove(added.id);
    store.remove(added.id);

    assert!(store.search("").iter().all(|b| b.id != added.id));
    assert_eq!(store.len(), 3);
    Ok(())
}

#[test]
fn test_search_matches_case_insensitively() -> Result<()> {
    let session = Session::new();
    for query in ["git", "GIT", "Hub", "github"] {
        assert!(names(&session, query).contains(&"GitHub".to_string()), "query {query}");
    }
    assert!(names(&session, "xyz").is_empty());
    // Search never mutates
    assert_eq!(session.bookmarks.len(), 3);
    Ok(())
}

#[test]
fn test_form_drives_store() -> Result<()> {
    let mut session = Session::new();
    let mut form = BookmarkForm::new();

    form.name = "Docs".to_string();
    assert!(form.submit(&mut session.bookmarks).is_none());
    assert_eq!(session.bookmarks.len(), 3);

    form.url = "https://docs.google.com".to_string();
    form.icon.clear();
    let entry = form.submit(&mut session.bookmarks).expect("valid form");
    assert_eq!(entry.icon, DEFAULT_ICON);
    assert_eq!(form, BookmarkForm::default());
    assert_eq!(names(&session, "docs"), ["Docs"]);
    Ok(())
}

#[test]
fn test_theme_toggle_and_background() -> Result<()> {
    let mut session = Session::new();
    let original = session.theme().clone();

    session.toggle_dark_mode();
    session.toggle_dark_mode();
    assert_eq!(session.theme(), &original);

    let mut picker = BackgroundPicker::new();
    picker.url = "https://example.com/mountains.jpg".to_string();
    let next = picker.submit_url(session.theme()).expect("url submitted");
    session.replace_theme(next);

    let theme = session.theme();
    assert!(theme.is_custom_background);
    assert_eq!(theme.is_dark, original.is_dark);
    assert_eq!(theme.name, original.name);
    Ok(())
}

#[test]
fn test_uploaded_background_becomes_data_uri() -> Result<()> {
    let path = env::temp_dir().join("rstartpage_integration_bg.gif");
    // GIF89a magic is enough for format detection
    fs::write(&path, b"GIF89a\x01\x00\x01\x00\x00\x00\x00;")?;

    let theme = ThemeState::default();
    let next = BackgroundPicker::apply_upload(&theme, data_uri::read_image_file(&path))
        .expect("image accepted");
    assert!(next.background.starts_with("data:image/gif;base64,"));
    assert!(next.is_custom_background);

    let _ = fs::remove_file(&path);
    Ok(())
}

#[test]
fn test_non_image_upload_leaves_theme_alone() -> Result<()> {
    let path = env::temp_dir().join("rstartpage_integration_notes.txt");
    fs::write(&path, "just some notes")?;

    let result = data_uri::read_image_file(&path);
    assert!(matches!(result, Err(StartPageError::NotAnImage { .. })));
    assert!(BackgroundPicker::apply_upload(&ThemeState::default(), result).is_none());

    let _ = fs::remove_file(&path);
    Ok(())
}

#[test]
fn test_session_from_config_file() -> Result<()> {
    let path = env::temp_dir().join("rstartpage_integration_config.json");
    fs::write(
        &path,
        r#"{
            "bookmarks": [
                { "id": 7, "name": "Crates", "url": "https://crates.io", "icon": "📦" },
                { "id": 7, "name": "Docs.rs", "url": "https://docs.rs" }
            ],
            "theme": { "name": "light", "isDark": false }
        }"#,
    )?;

    let config = SessionConfig::load(&path)?;
    let mut session = Session::from_config(&config);

    assert_eq!(names(&session, ""), ["Crates", "Docs.rs"]);
    let ids: HashSet<_> = session.bookmarks.entries().iter().map(|b| b.id).collect();
    assert_eq!(ids.len(), 2);
    assert!(!session.theme().is_dark);
    assert!(!session.theme().is_custom_background);

    let added = session.add_bookmark(NewBookmark::new("Rust", "https://rust-lang.org", "🦀"));
    assert!(!ids.contains(&added.id));

    let _ = fs::remove_file(&path);
    Ok(())
}

#[test]
fn test_seed_at_top_of_id_range_keeps_ids_unique() -> Result<()> {
    let config = SessionConfig::from_json(
        r#"{ "bookmarks": [ { "id": 18446744073709551615, "name": "Edge", "url": "https://edge.example" } ] }"#,
    )?;
    let mut session = Session::from_config(&config);

    let a = session.add_bookmark(NewBookmark::new("A", "https://a.example", "🅰"));
    let b = session.add_bookmark(NewBookmark::new("B", "https://b.example", "🅱"));
    let ids: HashSet<_> = session.bookmarks.entries().iter().map(|e| e.id).collect();
    assert_eq!(ids.len(), 3);

    session.remove_bookmark(a.id);
    assert_eq!(names(&session, ""), ["Edge", "B"]);
    assert!(session.bookmarks.get(b.id).is_some());
    Ok(())
}
