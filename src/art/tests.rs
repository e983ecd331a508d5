use super::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn touch(dir: &Path, name: &str) {
    fs::write(dir.join(name), b"img").unwrap();
}

#[test]
fn first_candidate_in_priority_order_wins() {
    let dir = tempdir().unwrap();
    touch(dir.path(), "AlbumArtSmall.jpg");
    touch(dir.path(), "cover.png");
    touch(dir.path(), "Folder.jpg");

    let found = find_album_art(dir.path(), &DEFAULT_CANDIDATES).unwrap();
    assert_eq!(found.file_name().unwrap(), "Folder.jpg");

    touch(dir.path(), "cover.jpg");
    let found = find_album_art(dir.path(), &DEFAULT_CANDIDATES).unwrap();
    assert_eq!(found.file_name().unwrap(), "cover.jpg");
}

#[test]
fn candidates_must_be_regular_files() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("cover.jpg")).unwrap();
    touch(dir.path(), "AlbumArt.jpg");

    let found = find_album_art(dir.path(), &DEFAULT_CANDIDATES).unwrap();
    assert_eq!(found.file_name().unwrap(), "AlbumArt.jpg");
}

#[test]
fn no_candidate_means_not_found() {
    let dir = tempdir().unwrap();
    touch(dir.path(), "front.jpg");
    assert_eq!(
        resolve_art(dir.path(), None, &DEFAULT_CANDIDATES),
        ArtLookup::NotFound
    );
}

#[test]
fn resolved_paths_are_absolute() {
    let dir = tempdir().unwrap();
    touch(dir.path(), "cover.png");
    let found = find_album_art(dir.path(), &DEFAULT_CANDIDATES).unwrap();
    assert!(found.is_absolute());
}

#[test]
fn album_scenario_resolves_cover_png() {
    let dir = tempdir().unwrap();
    let album = dir.path().join("album");
    fs::create_dir(&album).unwrap();
    for name in ["a.mp3", "b.flac", "notes.txt", "cover.png"] {
        touch(&album, name);
    }

    let mut resolver = AlbumArtResolver::default();
    assert_eq!(
        resolver.resolve(&album),
        ArtLookup::Changed(album.join("cover.png"))
    );
}

#[test]
fn resolving_same_folder_twice_is_unchanged() {
    let dir = tempdir().unwrap();
    touch(dir.path(), "folder.jpg");

    let mut resolver = AlbumArtResolver::default();
    let first = resolver.resolve(dir.path());
    assert_eq!(first, ArtLookup::Changed(dir.path().join("folder.jpg")));
    assert_eq!(resolver.resolve(dir.path()), ArtLookup::Unchanged);
    assert_eq!(resolver.current(), Some(dir.path().join("folder.jpg").as_path()));
    assert_eq!(resolver.source_dir(), Some(dir.path()));
}

#[test]
fn resolve_art_compares_against_last_path() {
    let dir = tempdir().unwrap();
    touch(dir.path(), "cover.jpg");
    let last = dir.path().join("cover.jpg");
    assert_eq!(
        resolve_art(dir.path(), Some(&last), &DEFAULT_CANDIDATES),
        ArtLookup::Unchanged
    );
    assert_eq!(
        resolve_art(dir.path(), Some(Path::new("/elsewhere/cover.jpg")), &DEFAULT_CANDIDATES),
        ArtLookup::Changed(last)
    );
}

#[test]
fn placeholder_in_between_forces_reload() {
    let root = tempdir().unwrap();
    let with_art = root.path().join("with");
    let without = root.path().join("without");
    fs::create_dir(&with_art).unwrap();
    fs::create_dir(&without).unwrap();
    touch(&with_art, "cover.jpg");

    let mut resolver = AlbumArtResolver::default();
    assert!(matches!(resolver.resolve(&with_art), ArtLookup::Changed(_)));
    assert_eq!(resolver.resolve(&without), ArtLookup::NotFound);
    assert!(resolver.current().is_none());
    assert!(matches!(resolver.resolve(&with_art), ArtLookup::Changed(_)));
}

#[test]
fn custom_candidates_are_honoured() {
    let dir = tempdir().unwrap();
    touch(dir.path(), "cover.jpg");
    touch(dir.path(), "front.png");

    let mut resolver = AlbumArtResolver::new(vec!["front.png".into(), "cover.jpg".into()]);
    assert_eq!(
        resolver.resolve(dir.path()),
        ArtLookup::Changed(dir.path().join("front.png"))
    );
}

#[test]
fn aspect_ratio_of_zero_height_is_square() {
    assert_eq!(aspect_ratio(640, 0), 1.0);
    assert_eq!(aspect_ratio(0, 0), 1.0);
    assert_eq!(aspect_ratio(600, 300), 2.0);
    assert_eq!(ArtDimensions { width: 300, height: 600 }.aspect_ratio(), 0.5);
}

#[test]
fn fit_within_keeps_aspect_inside_box() {
    assert_eq!(fit_within(40, 20, 1.0), (20, 20));
    assert_eq!(fit_within(40, 40, 2.0), (40, 20));
    assert_eq!(fit_within(10, 40, 0.5), (10, 20));
    assert_eq!(fit_within(30, 30, f32::NAN), (30, 30));
    assert_eq!(fit_within(30, 30, 0.0), (30, 30));
}

#[test]
fn probe_dimensions_reads_real_images_only() {
    let dir = tempdir().unwrap();
    let png = dir.path().join("cover.png");
    ::image::RgbImage::new(4, 2).save(&png).unwrap();

    assert_eq!(
        probe_dimensions(&png),
        Some(ArtDimensions { width: 4, height: 2 })
    );

    touch(dir.path(), "cover.jpg");
    assert_eq!(probe_dimensions(&dir.path().join("cover.jpg")), None);
}
