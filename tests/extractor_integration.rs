use std::fs;

use selfdeps::core::{
    AnalysisError, DependencyGraphExtractor, Edge, FileSystemLocator, SourceLocator,
};

fn write(dir: &std::path::Path, rel: &str, code: &str) {
    let path = dir.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, code).unwrap();
}

#[test]
fn extracts_edges_for_a_class_found_in_a_directory_tree() {
    let dir = tempfile::TempDir::new().unwrap();
    write(
        dir.path(),
        "pkg/curves.py",
        r#"
class Curve:
    def level(self):
        return self._smooth()

    def _smooth(self):
        return self.raw

    def raw(self):
        return 1.0
"#,
    );
    write(dir.path(), "pkg/other.py", "class Other:\n    pass\n");

    let extractor = DependencyGraphExtractor::new(FileSystemLocator::new(dir.path()));
    let graph = extractor.extract("Curve").unwrap();

    assert_eq!(graph, vec![Edge::new("raw", "level")]);
}

#[test]
fn missing_class_is_a_hard_error() {
    let dir = tempfile::TempDir::new().unwrap();
    write(dir.path(), "mod.py", "class Present:\n    pass\n");

    let extractor = DependencyGraphExtractor::new(FileSystemLocator::new(dir.path()));
    let err = extractor.extract("Absent").unwrap_err();

    assert!(matches!(err, AnalysisError::ClassNotFound(name) if name == "Absent"));
}

#[test]
fn nested_class_definitions_are_not_module_top_level() {
    let dir = tempfile::TempDir::new().unwrap();
    write(
        dir.path(),
        "mod.py",
        r#"
def factory():
    class Inner:
        pass
    return Inner
"#,
    );

    let extractor = DependencyGraphExtractor::new(FileSystemLocator::new(dir.path()));
    assert!(matches!(
        extractor.extract("Inner"),
        Err(AnalysisError::ClassNotFound(_))
    ));
}

#[test]
fn textual_match_inside_a_string_is_not_a_definition() {
    let dir = tempfile::TempDir::new().unwrap();
    write(
        dir.path(),
        "mod.py",
        "DOC = \"\"\"\nclass Ghost:\n    pass\n\"\"\"\n",
    );

    let extractor = DependencyGraphExtractor::new(FileSystemLocator::new(dir.path()));
    assert!(matches!(
        extractor.extract("Ghost"),
        Err(AnalysisError::ClassNotFound(_))
    ));
}

#[test]
fn locator_prefers_lexicographically_smallest_path() {
    let dir = tempfile::TempDir::new().unwrap();
    let code = "class Dup:\n    def a(self):\n        return self.b\n";
    write(dir.path(), "b_mod.py", code);
    write(dir.path(), "a_mod.py", code);

    let located = FileSystemLocator::new(dir.path()).locate("Dup").unwrap();
    assert!(located.path.ends_with("a_mod.py"));
}

#[test]
fn syntax_errors_in_the_defining_file_are_fatal() {
    let dir = tempfile::TempDir::new().unwrap();
    write(
        dir.path(),
        "broken.py",
        "class Broken:\n    def m(self:\n        return 1\n",
    );

    let extractor = DependencyGraphExtractor::new(FileSystemLocator::new(dir.path()));
    assert!(matches!(
        extractor.extract("Broken"),
        Err(AnalysisError::Parse(_))
    ));
}

#[test]
fn extraction_is_idempotent() {
    let dir = tempfile::TempDir::new().unwrap();
    write(
        dir.path(),
        "mod.py",
        r#"
class Model:
    def a(self):
        return self.b + self.c

    def b(self):
        return 1

    def c(self):
        return 2
"#,
    );

    let extractor = DependencyGraphExtractor::new(FileSystemLocator::new(dir.path()));
    assert_eq!(
        extractor.extract("Model").unwrap(),
        extractor.extract("Model").unwrap()
    );
}

#[test]
fn extract_many_reports_per_class_results_in_input_order() {
    let dir = tempfile::TempDir::new().unwrap();
    write(
        dir.path(),
        "first.py",
        "class First:\n    def a(self):\n        return self.b\n",
    );
    write(
        dir.path(),
        "second.py",
        "class Second:\n    def x(self):\n        return self.y\n",
    );

    let extractor = DependencyGraphExtractor::new(FileSystemLocator::new(dir.path()));
    let names = vec![
        "First".to_string(),
        "Missing".to_string(),
        "Second".to_string(),
    ];
    let results = extractor.extract_many(&names);

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].0, "First");
    assert_eq!(
        results[0].1.as_ref().unwrap(),
        &vec![Edge::new("b", "a")]
    );
    assert!(matches!(
        results[1].1,
        Err(AnalysisError::ClassNotFound(_))
    ));
    assert_eq!(
        results[2].1.as_ref().unwrap(),
        &vec![Edge::new("y", "x")]
    );
}

#[test]
fn single_file_roots_are_searched_directly() {
    let dir = tempfile::TempDir::new().unwrap();
    write(
        dir.path(),
        "solo.py",
        "class Solo:\n    def a(self):\n        return self.b\n",
    );

    let locator = FileSystemLocator::new(dir.path().join("solo.py"));
    let extractor = DependencyGraphExtractor::new(locator);
    assert_eq!(
        extractor.extract("Solo").unwrap(),
        vec![Edge::new("b", "a")]
    );
}
