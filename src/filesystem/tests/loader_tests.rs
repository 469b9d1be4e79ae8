//! Folder walking, filtering, import, and error reporting.

use crate::{
    filesystem::{
        adapters::{JsonImporter, TextImporter},
        domain::{LoadOptions, LoadedFile, NameFilter},
        services::FolderLoader,
    },
    terminal::{Terminal, TerminalConfig},
    test_support::{FixedClock, SharedBuffer},
};
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8::Dir};
use regex::Regex;
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use std::sync::Arc;
use tempfile::TempDir;

/// Scratch folder populated with files; removed on drop.
struct Scratch {
    _temp: TempDir,
    root: Utf8PathBuf,
}

impl Scratch {
    fn with_files(files: &[(&str, &str)]) -> Self {
        let temp = TempDir::new().expect("temp dir");
        let root = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).expect("utf-8 temp path");
        let dir = Dir::open_ambient_dir(&root, ambient_authority()).expect("open temp dir");
        for (relative, contents) in files {
            let path = Utf8Path::new(relative);
            if let Some(parent) = path.parent().filter(|parent| !parent.as_str().is_empty()) {
                dir.create_dir_all(parent).expect("create parent");
            }
            dir.write(path, contents).expect("write file");
        }
        Self { _temp: temp, root }
    }

    fn mkdir(&self, relative: &str) {
        Dir::open_ambient_dir(&self.root, ambient_authority())
            .and_then(|dir| dir.create_dir_all(relative))
            .expect("create dir");
    }
}

struct Harness<I> {
    loader: FolderLoader<I, FixedClock>,
    output: SharedBuffer,
}

fn harness<I: crate::filesystem::ports::FileImporter>(importer: I) -> Harness<I> {
    let output = SharedBuffer::default();
    let terminal = Terminal::new(
        Arc::new(FixedClock::reference()),
        TerminalConfig::default().with_colors(false),
        output.clone(),
    );
    Harness {
        loader: FolderLoader::with_terminal(importer, Arc::new(terminal)),
        output,
    }
}

#[fixture]
fn json() -> Harness<JsonImporter> {
    harness(JsonImporter)
}

fn names<T>(files: &[LoadedFile<T>]) -> Vec<&str> {
    files.iter().map(|file| file.name.as_str()).collect()
}

#[rstest]
#[tokio::test]
async fn loads_recursively_in_name_order(json: Harness<JsonImporter>) {
    let scratch = Scratch::with_files(&[
        ("b.json", "1"),
        ("sub/c.json", "2"),
        ("a.json", "3"),
        ("sub/deeper/d.json", "4"),
    ]);

    let files = json.loader.load(&scratch.root, &LoadOptions::default()).await;

    assert_eq!(names(&files), vec!["a.json", "b.json", "c.json", "d.json"]);
    assert_eq!(
        files.iter().map(|file| file.content.clone()).collect::<Vec<_>>(),
        vec![Some(json!(3)), Some(json!(1)), Some(json!(2)), Some(json!(4))]
    );
}

#[rstest]
#[tokio::test]
async fn paths_are_absolute(json: Harness<JsonImporter>) {
    let scratch = Scratch::with_files(&[("sub/x.json", "null")]);

    let files = json.loader.load(&scratch.root, &LoadOptions::listing()).await;

    let path = files.first().map(|file| file.path.clone()).expect("one file");
    assert!(path.is_absolute());
    assert_eq!(path, scratch.root.join("sub").join("x.json"));
}

#[rstest]
#[tokio::test]
async fn non_recursive_load_stays_at_top_level(json: Harness<JsonImporter>) {
    let scratch = Scratch::with_files(&[("top.json", "1"), ("sub/nested.json", "2")]);

    let files = json
        .loader
        .load(&scratch.root, &LoadOptions::default().with_recursive(false))
        .await;

    assert_eq!(names(&files), vec!["top.json"]);
}

#[rstest]
#[tokio::test]
async fn ignore_files_accepts_names_and_patterns(json: Harness<JsonImporter>) {
    let scratch = Scratch::with_files(&[
        ("valid.json", "1"),
        ("ignore-me.json", "2"),
        ("fixture.spec.json", "3"),
    ]);
    let options = LoadOptions::default().with_ignore_files([
        NameFilter::from("ignore-me.json"),
        NameFilter::from(Regex::new(r"\.spec\.json$").expect("valid pattern")),
    ]);

    let files = json.loader.load(&scratch.root, &options).await;

    assert_eq!(names(&files), vec!["valid.json"]);
}

#[rstest]
#[tokio::test]
async fn ignore_folders_skips_whole_subtrees(json: Harness<JsonImporter>) {
    let scratch = Scratch::with_files(&[
        ("root.json", "1"),
        ("node_modules/lib.json", "2"),
        ("src/main.json", "3"),
    ]);

    let files = json
        .loader
        .load(&scratch.root, &LoadOptions::default().with_ignore_folders(["node_modules"]))
        .await;

    assert_eq!(names(&files), vec!["root.json", "main.json"]);
}

#[rstest]
#[tokio::test]
async fn filter_files_keeps_matching_files(json: Harness<JsonImporter>) {
    let scratch = Scratch::with_files(&[
        ("include.json", "1"),
        ("exclude.txt", "x"),
        ("also_include.cfg", "2"),
    ]);
    let options = LoadOptions::default().with_filter_files([
        NameFilter::from(Regex::new(r"\.json$").expect("valid pattern")),
        NameFilter::from("also_include.cfg"),
    ]);

    let files = json.loader.load(&scratch.root, &options).await;

    assert_eq!(names(&files), vec!["also_include.cfg", "include.json"]);
}

#[rstest]
#[tokio::test]
async fn filter_folders_limits_descent(json: Harness<JsonImporter>) {
    let scratch = Scratch::with_files(&[
        ("file1.json", "1"),
        ("include_this/file2.json", "2"),
        ("exclude_this/file3.json", "3"),
    ]);

    let files = json
        .loader
        .load(&scratch.root, &LoadOptions::default().with_filter_folders(["include_this"]))
        .await;

    assert_eq!(names(&files), vec!["file1.json", "file2.json"]);
}

#[rstest]
#[tokio::test]
async fn file_filters_do_not_prune_folders(json: Harness<JsonImporter>) {
    let scratch = Scratch::with_files(&[("top.json", "1"), ("nested/deep.json", "2")]);
    let options = LoadOptions::default()
        .with_filter_files([NameFilter::from(Regex::new(r"\.json$").expect("valid pattern"))]);

    let files = json.loader.load(&scratch.root, &options).await;

    assert_eq!(names(&files), vec!["deep.json", "top.json"]);
}

#[rstest]
#[tokio::test]
async fn on_file_sees_every_file_in_load_order(json: Harness<JsonImporter>) {
    let scratch = Scratch::with_files(&[("a.json", "1"), ("z/b.json", "2"), ("c.json", "3")]);
    let mut seen = Vec::new();

    let files = json
        .loader
        .load_with(&scratch.root, &LoadOptions::default(), |file| {
            seen.push(file.name.clone());
        })
        .await;

    assert_eq!(seen, vec!["a.json", "c.json", "b.json"]);
    assert_eq!(names(&files), seen);
}

#[rstest]
#[tokio::test]
async fn auto_default_unwraps_default_export(json: Harness<JsonImporter>) {
    let scratch = Scratch::with_files(&[("route.json", r#"{"default": {"path": "/users"}, "meta": 1}"#)]);

    let unwrapped = json.loader.load(&scratch.root, &LoadOptions::default()).await;
    let raw = json
        .loader
        .load(&scratch.root, &LoadOptions::default().with_auto_default(false))
        .await;

    assert_eq!(
        unwrapped.first().and_then(|file| file.content.clone()),
        Some(json!({"path": "/users"}))
    );
    assert_eq!(
        raw.first().and_then(|file| file.content.clone()),
        Some(json!({"default": {"path": "/users"}, "meta": 1}))
    );
}

#[rstest]
#[tokio::test]
async fn import_failure_is_logged_and_content_left_empty(json: Harness<JsonImporter>) {
    let scratch = Scratch::with_files(&[("broken.json", "{oops")]);

    let files = json.loader.load(&scratch.root, &LoadOptions::default()).await;

    assert_eq!(files.len(), 1);
    assert_eq!(files.first().and_then(|file| file.content.clone()), None::<Value>);
    let output = json.output.contents();
    assert!(output.contains("[FILESYSTEM] Failed to import file: "), "{output}");
    assert!(output.contains("broken.json"), "{output}");
}

#[rstest]
#[tokio::test]
async fn listing_skips_reading_entirely(json: Harness<JsonImporter>) {
    let scratch = Scratch::with_files(&[("broken.json", "{oops")]);

    let files = json.loader.load(&scratch.root, &LoadOptions::listing()).await;

    assert_eq!(files.len(), 1);
    assert!(files.iter().all(|file| file.content.is_none()));
    assert!(json.output.contents().is_empty());
}

#[rstest]
#[tokio::test]
async fn missing_folder_yields_nothing(json: Harness<JsonImporter>) {
    let scratch = Scratch::with_files(&[]);
    let mut calls = 0_usize;

    let files = json
        .loader
        .load_with(scratch.root.join("NON_EXISTENT"), &LoadOptions::default(), |_| {
            calls += 1;
        })
        .await;

    assert!(files.is_empty());
    assert_eq!(calls, 0);
}

#[rstest]
#[tokio::test]
async fn file_as_root_yields_nothing(json: Harness<JsonImporter>) {
    let scratch = Scratch::with_files(&[("plain.json", "1")]);

    let files = json
        .loader
        .load(scratch.root.join("plain.json"), &LoadOptions::default())
        .await;

    assert!(files.is_empty());
}

#[rstest]
#[tokio::test]
async fn empty_folders_contribute_nothing(json: Harness<JsonImporter>) {
    let scratch = Scratch::with_files(&[("a.json", "1")]);
    scratch.mkdir("empty/also_empty");

    let files = json.loader.load(&scratch.root, &LoadOptions::default()).await;

    assert_eq!(names(&files), vec!["a.json"]);
}

#[rstest]
#[tokio::test]
async fn text_importer_loads_raw_text() {
    let text = harness(TextImporter);
    let scratch = Scratch::with_files(&[("README.md", "# zyro\n")]);

    let files = text.loader.load(&scratch.root, &LoadOptions::default()).await;

    assert_eq!(
        files,
        vec![LoadedFile {
            name: "README.md".to_owned(),
            path: scratch.root.join("README.md"),
            content: Some("# zyro\n".to_owned()),
        }]
    );
}

#[cfg(unix)]
#[rstest]
#[tokio::test]
async fn symlinks_are_not_followed(json: Harness<JsonImporter>) {
    let scratch = Scratch::with_files(&[("real/a.json", "1")]);
    std::os::unix::fs::symlink(scratch.root.join("real"), scratch.root.join("link"))
        .expect("create symlink");

    let files = json.loader.load(&scratch.root, &LoadOptions::default()).await;

    assert_eq!(names(&files), vec!["a.json"]);
    assert!(files.iter().all(|file| file.path.starts_with(scratch.root.join("real"))));
}

#[cfg(unix)]
#[rstest]
#[tokio::test]
async fn symlinked_files_are_skipped(json: Harness<JsonImporter>) {
    let scratch = Scratch::with_files(&[("real.json", "1")]);
    std::os::unix::fs::symlink(scratch.root.join("real.json"), scratch.root.join("alias.json"))
        .expect("create symlink");

    let files = json.loader.load(&scratch.root, &LoadOptions::default()).await;

    assert_eq!(names(&files), vec!["real.json"]);
    assert!(json.output.contents().is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn reads_run_on_a_multi_threaded_runtime(json: Harness<JsonImporter>) {
    let scratch = Scratch::with_files(&[("a.json", "1"), ("b/c.json", "2"), ("d.json", "3")]);

    let files = json.loader.load(&scratch.root, &LoadOptions::default()).await;

    let contents: Vec<_> = files.iter().map(|file| file.content.clone()).collect();
    assert_eq!(contents, vec![Some(json!(1)), Some(json!(2)), Some(json!(3))]);
}
