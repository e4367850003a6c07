use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use tempfile::tempdir;

use same_same::normalize::normalize_file;
use same_same::scanner::{self, FileFilter};
use same_same::{
    CompareEngine, Error, FileNormalizer, ProgressReporter, ResultTable, SilentReporter,
};

#[derive(Default)]
struct CountingReporter {
    last_visited: AtomicU64,
    last_total: AtomicU64,
    calls: AtomicU64,
}

impl ProgressReporter for CountingReporter {
    fn on_compare_progress(&self, visited: u64, total_visits: u64) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.last_visited.store(visited, Ordering::SeqCst);
        self.last_total.store(total_visits, Ordering::SeqCst);
    }
}

/// Layout:
///   root/
///     a.txt   ("hello world")
///     b.txt   ("hello  world")   ← same as a.txt once whitespace collapses
///     c.txt   ("goodbye")
fn create_test_tree(root: &Path) {
    fs::write(root.join("a.txt"), "hello world").unwrap();
    fs::write(root.join("b.txt"), "hello  world").unwrap();
    fs::write(root.join("c.txt"), "goodbye").unwrap();
}

fn txt_files(root: &Path) -> Vec<PathBuf> {
    let filter = FileFilter::new(&["txt"], &[]).unwrap();
    scanner::discover_files(root, &filter).unwrap()
}

fn file_name(path: &Path) -> &str {
    path.file_name().unwrap().to_str().unwrap()
}

#[test]
fn test_three_file_scenario() {
    let tmp = tempdir().unwrap();
    create_test_tree(tmp.path());

    let files = txt_files(tmp.path());
    assert_eq!(files.len(), 3);

    let engine = CompareEngine::new(files);
    let reporter = CountingReporter::default();
    let outcome = engine.compare(&FileNormalizer, &reporter).unwrap();

    assert_eq!(outcome.pairs.len(), 3);
    assert_eq!(outcome.total_visits, 9);
    assert_eq!(reporter.calls.load(Ordering::SeqCst), 9);
    assert_eq!(reporter.last_visited.load(Ordering::SeqCst), 9);
    assert_eq!(reporter.last_total.load(Ordering::SeqCst), 9);

    let ranked = outcome.pairs.into_ranked();
    let names: Vec<(&str, &str)> = ranked
        .iter()
        .map(|p| (file_name(p.first()), file_name(p.second())))
        .collect();
    assert_eq!(names, vec![("a.txt", "b.txt"), ("a.txt", "c.txt"), ("b.txt", "c.txt")]);

    let top = ranked[0].scores();
    assert_eq!(top.jaccard, 1.0);
    assert_eq!(top.jaro_winkler, 1.0);
    assert_eq!(top.lcs_length, 11);
    assert_eq!(top.fuzzy_score, 31);
    assert_eq!(ranked[0].composite(), 2.0);
    assert!(ranked[1..].iter().all(|p| p.composite() < 2.0));

    // a.txt and b.txt normalize identically, so both pairs with c.txt tie
    assert_eq!(ranked[1].scores(), ranked[2].scores());
}

#[test]
fn test_report_for_three_file_scenario() {
    let tmp = tempdir().unwrap();
    create_test_tree(tmp.path());

    let files = txt_files(tmp.path());
    let path_width = scanner::max_path_width(&files);
    let engine = CompareEngine::new(files);
    let outcome = engine.compare(&FileNormalizer, &SilentReporter).unwrap();

    let table = ResultTable::new(outcome.pairs.into_ranked())
        .with_total_visits(outcome.total_visits)
        .with_path_width(path_width);
    let rendered = table.to_string();
    let lines: Vec<&str> = rendered.lines().collect();

    // separator, header, separator, then a row and separator per pair
    assert_eq!(lines.len(), 3 + 2 * 3);
    assert!(lines[1].starts_with("|   | Jaccard | Jaro    | LCS     | Fuzzy   | File 1"));
    assert!(lines[3].starts_with("| 1 | 1.00000 | 1.00000 | 11      | 31      |"));
    assert!(lines[3].contains(" | winmerge   "));
    assert!(lines[5].starts_with("| 2 |"));
    assert!(lines[7].starts_with("| 3 |"));

    let separator_len = lines[0].chars().count();
    assert!(lines.iter().step_by(2).all(|l| l.chars().count() == separator_len));
}

#[test]
fn test_missing_file_aborts_run() {
    let tmp = tempdir().unwrap();
    create_test_tree(tmp.path());
    let files = txt_files(tmp.path());

    fs::remove_file(tmp.path().join("c.txt")).unwrap();

    let engine = CompareEngine::new(files);
    let reporter = CountingReporter::default();
    let err = engine.compare(&FileNormalizer, &reporter).unwrap_err();

    match err {
        Error::Compare {
            source_file,
            destination_file,
            cause,
        } => {
            assert_eq!(file_name(&source_file), "a.txt");
            assert_eq!(file_name(&destination_file), "c.txt");
            assert_eq!(cause.kind(), io::ErrorKind::NotFound);
        }
        other => panic!("expected compare error, got {other}"),
    }
    // (a,a) (a,b) (a,c) visited before the abort
    assert_eq!(reporter.calls.load(Ordering::SeqCst), 3);
}

#[test]
fn test_file_deleted_mid_run_aborts() {
    let tmp = tempdir().unwrap();
    create_test_tree(tmp.path());
    let files = txt_files(tmp.path());
    let victim = tmp.path().join("b.txt");

    let reads = AtomicU64::new(0);
    let normalizer = |path: &Path| -> io::Result<String> {
        // the first comparison reads a.txt then b.txt; drop b.txt before that
        if reads.fetch_add(1, Ordering::SeqCst) == 0 {
            fs::remove_file(&victim)?;
        }
        normalize_file(path)
    };

    let engine = CompareEngine::new(files);
    let err = engine.compare(&normalizer, &SilentReporter).unwrap_err();
    assert!(matches!(err, Error::Compare { .. }));
    assert!(err.to_string().contains("b.txt"));
}

#[test]
fn test_single_file_has_no_pairs() {
    let tmp = tempdir().unwrap();
    fs::write(tmp.path().join("only.txt"), "alone").unwrap();

    let engine = CompareEngine::new(txt_files(tmp.path()));
    let reporter = CountingReporter::default();
    let outcome = engine.compare(&FileNormalizer, &reporter).unwrap();

    assert!(outcome.pairs.is_empty());
    assert_eq!(outcome.total_visits, 1);
    assert_eq!(reporter.calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_discovery_order_decides_pair_direction() {
    let tmp = tempdir().unwrap();
    fs::create_dir_all(tmp.path().join("d")).unwrap();
    fs::write(tmp.path().join("d/z.txt"), "xyz abc").unwrap();
    fs::write(tmp.path().join("d-x.txt"), "abc").unwrap();

    let files = txt_files(tmp.path());
    assert_eq!(file_name(&files[0]), "d-x.txt");
    assert_eq!(file_name(&files[1]), "z.txt");

    let outcome = CompareEngine::new(files)
        .compare(&FileNormalizer, &SilentReporter)
        .unwrap();
    let ranked = outcome.pairs.into_ranked();
    assert_eq!(ranked.len(), 1);

    // "abc" is the term, so the leading 'x' of the query is never found
    let pair = &ranked[0];
    assert_eq!(file_name(pair.first()), "d-x.txt");
    assert_eq!(file_name(pair.second()), "z.txt");
    assert_eq!(pair.scores().fuzzy_score, 0);
}
