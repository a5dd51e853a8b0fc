// tests/library_api.rs

use content_collector::filtering::{should_skip, GitignoreCache, DEFAULT_EXCLUDE_SET};
use content_collector::{collect, Collector, TraversalRequest};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread;
use tempfile::{tempdir, TempDir};

// --- Test Harness for reducing boilerplate ---

/// A temporary project directory plus a request rooted at it.
struct TestHarness {
    _temp_dir: TempDir,
    root: PathBuf,
}

impl TestHarness {
    fn new() -> Self {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    fn file(&self, path: &str, content: &[u8]) {
        let full_path = self.root.join(path);
        fs::create_dir_all(full_path.parent().unwrap()).unwrap();
        fs::write(full_path, content).unwrap();
    }

    fn request(&self) -> TraversalRequest {
        TraversalRequest::new(&self.root, "proj")
            .with_roots(vec![self.root.clone()])
            .with_sorted_entries(true)
    }

    fn path(&self, rel: &str) -> PathBuf {
        self.root.join(rel)
    }
}

#[test]
fn test_collect_is_repeatable() {
    let h = TestHarness::new();
    h.file("a.txt", b"A");
    h.file("src/b.rs", b"B");
    let request = h.request();

    let first = collect(&request);
    let second = collect(&request);
    assert_eq!(first, second);
    assert_eq!(first, "Path: proj/a.txt\nA\n---\nPath: proj/src/b.rs\nB\n---\n");
}

#[test]
fn test_invalid_utf8_becomes_error_marker() {
    let h = TestHarness::new();
    h.file("bin.dat", &[0xff, 0xfe, 0x00, 0x41]);
    h.file("ok.txt", b"fine");

    let output = collect(&h.request());
    assert!(output.starts_with("Path: proj/bin.dat\n[ERROR] Could not read proj/bin.dat → "));
    assert!(output.contains("Path: proj/ok.txt\nfine\n---\n"));
}

#[test]
fn test_empty_file_still_emits_block() {
    let h = TestHarness::new();
    h.file("empty.txt", b"");
    assert_eq!(collect(&h.request()), "Path: proj/empty.txt\n\n---\n");
}

#[test]
fn test_windows_style_user_excludes() {
    let h = TestHarness::new();
    h.file("src/generated/a.rs", b"gen");
    h.file("src/lib.rs", b"lib");

    let request = h
        .request()
        .with_user_excludes(vec![r"src\generated".to_string()]);
    assert_eq!(collect(&request), "Path: proj/src/lib.rs\nlib\n---\n");
}

#[test]
fn test_file_root_is_emitted_directly() {
    let h = TestHarness::new();
    h.file("docs/readme.md", b"hello");
    h.file("docs/other.md", b"other");

    let request = h.request().with_roots(vec![h.path("docs/readme.md")]);
    assert_eq!(collect(&request), "Path: proj/docs/readme.md\nhello\n---\n");
}

#[test]
fn test_extension_filter_applies_to_file_roots() {
    let h = TestHarness::new();
    h.file("notes.txt", b"notes");

    let request = h
        .request()
        .with_roots(vec![h.path("notes.txt")])
        .with_extensions(["md"]);
    assert_eq!(collect(&request), "");
}

#[test]
fn test_dotfiles_match_extension_after_leading_dot() {
    let h = TestHarness::new();
    h.file(".env", b"SECRET=1");
    h.file("a.env", b"A=1");
    h.file("b.txt", b"B");

    let request = h.request().with_extensions(["env"]);
    assert_eq!(
        collect(&request),
        "Path: proj/.env\nSECRET=1\n---\nPath: proj/a.env\nA=1\n---\n"
    );
}

#[test]
fn test_session_cache_keeps_first_patterns() {
    let h = TestHarness::new();
    h.file(".gitignore", b"*.log\n");
    h.file("a.log", b"log");
    h.file("b.tmp", b"tmp");

    let collector = Collector::new();
    let request = h.request().with_extensions(["log", "tmp"]);
    assert_eq!(collector.collect(&request), "Path: proj/b.tmp\ntmp\n---\n");

    // The cached set is still used after the file changes on disk.
    h.file(".gitignore", b"*.tmp\n");
    assert_eq!(collector.collect(&request), "Path: proj/b.tmp\ntmp\n---\n");

    assert!(collector.gitignore_cache().invalidate(&h.root));
    assert_eq!(collector.collect(&request), "Path: proj/a.log\nlog\n---\n");
}

#[test]
fn test_concurrent_collects_share_one_session() {
    let h = TestHarness::new();
    for i in 0..20 {
        h.file(&format!("dir{}/f{}.txt", i % 4, i), format!("{}", i).as_bytes());
    }
    h.file(".gitignore", b"dir3\n");

    let collector = Arc::new(Collector::new());
    let request = Arc::new(h.request().with_extensions(["txt"]));
    let expected = collector.collect(&request);
    collector.gitignore_cache().clear();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let collector = Arc::clone(&collector);
            let request = Arc::clone(&request);
            thread::spawn(move || collector.collect(&request))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
    assert_eq!(collector.gitignore_cache().len(), 1);
    assert!(!expected.contains("dir3/"));
}

#[test]
fn test_should_skip_is_usable_standalone() {
    let cache = GitignoreCache::new();
    assert!(cache.is_empty());
    let patterns = cache.get_or_load(Path::new("/definitely/not/a/real/dir"));
    assert!(patterns.is_empty());

    assert!(should_skip(".git/config", &[], &DEFAULT_EXCLUDE_SET, Some(&*patterns)));
    assert!(!should_skip("src/main.rs", &[], &DEFAULT_EXCLUDE_SET, Some(&*patterns)));
}
