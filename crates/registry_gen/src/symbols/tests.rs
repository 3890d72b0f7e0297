use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;
use rstest::rstest;
use tempfile::TempDir;

use super::*;

fn write(root: &Path, rel: &str, content: &str) {
	let path = root.join(rel);
	fs::create_dir_all(path.parent().unwrap()).unwrap();
	fs::write(path, content).unwrap();
}

fn qualified(symbols: &[MarkedSymbol]) -> Vec<String> {
	let mut paths: Vec<_> = symbols.iter().map(|s| s.qualified_path("crate")).collect();
	paths.sort();
	paths
}

/// Walks `mod a;` declarations into both `a.rs` and `a/mod.rs` layouts.
#[test]
fn test_resolves_flat_and_nested_modules() {
	let dir = TempDir::new().unwrap();
	write(dir.path(), "lib.rs", "mod file;\nmod modifiers;\n#[unique_member]\npub struct Root;\n");
	write(dir.path(), "file.rs", "#[unique_member]\npub struct Package { pub path: String }\npub struct Import;\n");
	write(dir.path(), "modifiers/mod.rs", "mod class;\n");
	write(dir.path(), "modifiers/class.rs", "#[kotfild_macros::unique_member]\npub enum Visibility { Public }\n");

	let tree = SourceTree::new(dir.path().join("lib.rs"));
	let symbols = tree.symbols_with_marker("unique_member").unwrap();

	assert_eq!(
		qualified(&symbols),
		vec![
			"crate::Root".to_string(),
			"crate::file::Package".to_string(),
			"crate::modifiers::class::Visibility".to_string(),
		]
	);
}

/// Children of a non-`mod.rs` file resolve inside the directory named after it.
#[test]
fn test_child_modules_of_flat_file() {
	let dir = TempDir::new().unwrap();
	write(dir.path(), "lib.rs", "pub mod class;\n");
	write(dir.path(), "class.rs", "mod companion;\n");
	write(dir.path(), "class/companion.rs", "#[unique_member]\npub struct CompanionObject;\n");

	let symbols = SourceTree::new(dir.path().join("lib.rs"))
		.symbols_with_marker("unique_member")
		.unwrap();

	assert_eq!(qualified(&symbols), vec!["crate::class::companion::CompanionObject".to_string()]);
	assert_eq!(symbols[0].source_file, dir.path().join("class/companion.rs"));
}

#[test]
fn test_inline_modules_extend_the_path() {
	let dir = TempDir::new().unwrap();
	write(dir.path(), "lib.rs", "mod outer {\n\tpub mod inner {\n\t\t#[unique_member]\n\t\tpub struct Shebang;\n\t}\n}\n");

	let symbols = SourceTree::new(dir.path().join("lib.rs"))
		.symbols_with_marker("unique_member")
		.unwrap();

	assert_eq!(qualified(&symbols), vec!["crate::outer::inner::Shebang".to_string()]);
}

#[test]
fn test_skips_cfg_test_modules_and_items() {
	let dir = TempDir::new().unwrap();
	write(
		dir.path(),
		"lib.rs",
		r#"
#[cfg(test)]
mod tests;

#[cfg(test)]
#[unique_member]
struct Fixture;

#[cfg(test)]
mod inline {
	#[unique_member]
	struct Other;
}
"#,
	);

	let symbols = SourceTree::new(dir.path().join("lib.rs"))
		.symbols_with_marker("unique_member")
		.unwrap();

	assert!(symbols.is_empty(), "test-only symbols leaked: {symbols:?}");
}

#[test]
fn test_ignores_markers_on_non_type_items() {
	let dir = TempDir::new().unwrap();
	write(dir.path(), "lib.rs", "#[unique_member]\nfn helper() {}\n#[other]\nstruct Plain;\n");

	let symbols = SourceTree::new(dir.path().join("lib.rs"))
		.symbols_with_marker("unique_member")
		.unwrap();

	assert!(symbols.is_empty());
}

#[test]
fn test_path_attribute_overrides_lookup() {
	let dir = TempDir::new().unwrap();
	write(dir.path(), "lib.rs", "#[path = \"nodes/file_nodes.rs\"]\nmod file;\n");
	write(dir.path(), "nodes/file_nodes.rs", "#[unique_member]\npub struct Package;\n");

	let symbols = SourceTree::new(dir.path().join("lib.rs"))
		.symbols_with_marker("unique_member")
		.unwrap();

	assert_eq!(qualified(&symbols), vec!["crate::file::Package".to_string()]);
}

#[test]
fn test_missing_module_is_an_error() {
	let dir = TempDir::new().unwrap();
	write(dir.path(), "lib.rs", "mod absent;\n");

	let err = SourceTree::new(dir.path().join("lib.rs"))
		.symbols_with_marker("unique_member")
		.unwrap_err();

	assert!(matches!(err, GenerateError::MissingModule { ref module, .. } if module == "absent"));
}

#[test]
fn test_unparsable_file_is_an_error() {
	let dir = TempDir::new().unwrap();
	write(dir.path(), "lib.rs", "pub struct {");

	let err = SourceTree::new(dir.path().join("lib.rs"))
		.symbols_with_marker("unique_member")
		.unwrap_err();

	assert!(matches!(err, GenerateError::Parse { .. }));
}

/// A marked type behind any cfg stays out of the registry, whether the cfg
/// sits on its module or on the type itself.
#[rstest]
#[case::all_test("all(test, unix)")]
#[case::any_test("any(test, feature = \"fixtures\")")]
#[case::feature("feature = \"extra\"")]
#[case::platform("target_os = \"linux\"")]
fn test_skips_cfg_gated_symbols(#[case] predicate: &str) {
	let dir = TempDir::new().unwrap();
	write(
		dir.path(),
		"lib.rs",
		&format!(
			"#[cfg({predicate})]\nmod fixtures {{\n\t#[unique_member]\n\tpub struct FakeNode;\n}}\n\n\
			 #[cfg({predicate})]\nmod gated;\n\n\
			 #[cfg({predicate})]\n#[unique_member]\npub struct Gated;\n\n\
			 #[unique_member]\npub struct Kept;\n"
		),
	);

	let symbols = SourceTree::new(dir.path().join("lib.rs"))
		.symbols_with_marker("unique_member")
		.unwrap();

	assert_eq!(qualified(&symbols), vec!["crate::Kept".to_string()]);
}
