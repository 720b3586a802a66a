use std::fs;

use super::*;
use crate::test_fixtures::{
    TEXT_BYTES, create_temp_dir, create_wallpaper_dir, write_bytes, write_image,
};

#[test]
fn test_scan_filters_non_images() {
    let temp = create_wallpaper_dir(&["a.png", "b.jpg", "c.gif"]);
    write_bytes(temp.path(), "notes.txt", TEXT_BYTES);

    let catalog = Catalog::scan(temp.path()).unwrap();
    assert_eq!(catalog.len(), 3);
    assert!(!catalog.contains("notes.txt"));
}

#[test]
fn test_scan_uses_content_not_extension() {
    let temp = create_temp_dir();
    write_bytes(temp.path(), "readme.png", TEXT_BYTES);
    write_image(temp.path(), "no_extension");

    let catalog = Catalog::scan(temp.path()).unwrap();
    let ids: Vec<&str> = catalog.entries().iter().map(CatalogEntry::id).collect();
    assert_eq!(ids, vec!["no_extension"]);
}

#[test]
fn test_scan_skips_subdirectories() {
    let temp = create_wallpaper_dir(&["top.png"]);
    let nested = temp.path().join("nested");
    fs::create_dir(&nested).unwrap();
    write_image(&nested, "deep.png");

    let catalog = Catalog::scan(temp.path()).unwrap();
    assert_eq!(catalog.len(), 1);
    assert!(catalog.contains("top.png"));
    assert!(!catalog.contains("deep.png"));
    assert!(!catalog.contains("nested"));
}

#[test]
fn test_scan_missing_directory() {
    let temp = create_temp_dir();
    let missing = temp.path().join("gone");

    let err = Catalog::scan(&missing).unwrap_err();
    assert!(matches!(err, WallshuffleError::DirectoryUnavailable { .. }));
}

#[test]
fn test_scan_file_is_not_a_directory() {
    let temp = create_temp_dir();
    let file = write_image(temp.path(), "a.png");

    let err = Catalog::scan(&file).unwrap_err();
    assert!(matches!(err, WallshuffleError::DirectoryUnavailable { .. }));
}

#[test]
fn test_scan_empty_directory_is_empty_catalog() {
    let temp = create_temp_dir();
    let catalog = Catalog::scan(temp.path()).unwrap();
    assert!(catalog.is_empty());
}

#[test]
fn test_entries_sorted_and_paths_inside_dir() {
    let temp = create_wallpaper_dir(&["c.png", "a.png", "b.png"]);
    let catalog = Catalog::scan(temp.path()).unwrap();

    let ids: Vec<&str> = catalog.entries().iter().map(CatalogEntry::id).collect();
    assert_eq!(ids, vec!["a.png", "b.png", "c.png"]);
    for entry in catalog.entries() {
        assert_eq!(entry.path().parent(), Some(temp.path()));
    }
}

#[test]
fn test_entry_kind_from_content() {
    let temp = create_wallpaper_dir(&["photo.jpg"]);
    let catalog = Catalog::scan(temp.path()).unwrap();
    assert_eq!(catalog.get("photo.jpg").map(|e| e.kind().name()), Some("jpg"));
}

#[test]
fn test_rescan_unchanged_has_no_drift() {
    let temp = create_wallpaper_dir(&["a.png", "b.png"]);
    let first = Catalog::scan(temp.path()).unwrap();
    let second = Catalog::scan(temp.path()).unwrap();
    assert_eq!(second.drift_from(&first), None);
}

#[test]
fn test_adding_file_drifts_once() {
    let temp = create_wallpaper_dir(&["a.png", "b.png"]);
    let first = Catalog::scan(temp.path()).unwrap();

    write_image(temp.path(), "c.png");
    let second = Catalog::scan(temp.path()).unwrap();
    assert_eq!(
        second.drift_from(&first),
        Some(Drift {
            previous: 2,
            current: 3
        })
    );

    let third = Catalog::scan(temp.path()).unwrap();
    assert_eq!(third.drift_from(&second), None);
}

#[test]
fn test_removing_file_drifts() {
    let temp = create_wallpaper_dir(&["a.png", "b.png"]);
    let first = Catalog::scan(temp.path()).unwrap();

    fs::remove_file(temp.path().join("a.png")).unwrap();
    let second = Catalog::scan(temp.path()).unwrap();
    let drift = second.drift_from(&first).unwrap();
    assert_eq!(drift.current, 1);
    assert!(drift.to_string().contains("shrank from 2 to 1"));
}

#[test]
fn test_adding_non_image_does_not_drift() {
    let temp = create_wallpaper_dir(&["a.png"]);
    let first = Catalog::scan(temp.path()).unwrap();

    write_bytes(temp.path(), "todo.txt", TEXT_BYTES);
    let second = Catalog::scan(temp.path()).unwrap();
    assert_eq!(second.drift_from(&first), None);
}

#[cfg(unix)]
#[test]
fn test_symlinked_image_is_included() {
    let images = create_wallpaper_dir(&["real.png"]);
    let watched = create_temp_dir();
    std::os::unix::fs::symlink(images.path().join("real.png"), watched.path().join("link.png"))
        .unwrap();
    std::os::unix::fs::symlink(images.path(), watched.path().join("dir-link")).unwrap();

    let catalog = Catalog::scan(watched.path()).unwrap();
    let ids: Vec<&str> = catalog.entries().iter().map(CatalogEntry::id).collect();
    assert_eq!(ids, vec!["link.png"]);
}
