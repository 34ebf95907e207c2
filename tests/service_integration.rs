// Integration test for the public API
use featgrep::{Catalog, FeatgrepError, FeatureIndex, FeatureRecord, Result, SearchService, VERSION};
use std::collections::HashSet;
use std::io::Write;

#[test]
fn public_api_exports() {
    let _version: &str = VERSION;

    let index: FeatureIndex = FeatureIndex::new();
    assert!(index.is_empty());

    let catalog: Catalog = Catalog::builtin();
    let _service: SearchService = SearchService::new(catalog);

    let error: FeatgrepError = FeatgrepError::QueryTooShort { min: 2 };
    match error {
        FeatgrepError::QueryTooShort { min } => assert_eq!(min, 2),
        _ => panic!("unexpected error variant"),
    }

    let ok: Result<i32> = Ok(42);
    assert!(ok.is_ok());
}

#[test]
fn version_constant_matches_manifest() {
    assert!(!VERSION.is_empty());
    assert_eq!(VERSION, env!("CARGO_PKG_VERSION"));
}

#[test]
fn builtin_catalog_end_to_end() {
    let service = SearchService::with_builtin_catalog();
    assert_eq!(service.len(), 7);

    // Case-insensitive exact hit.
    let hit = service.lookup("ECONOMIA").expect("economia should resolve");
    assert_eq!(hit.name, "economia");
    assert_eq!(hit.path, "Dashboard > Economia");

    // Prefix search over the stock entries.
    let names: HashSet<String> = service
        .search("alt")
        .unwrap()
        .into_iter()
        .map(|r| r.name)
        .collect();
    assert_eq!(
        names,
        HashSet::from(["alterar_perfil".to_string(), "alterar_senha".to_string()])
    );

    // No matches is an empty list, not an error.
    assert!(service.search("zz").unwrap().is_empty());
}

#[test]
fn duplicate_names_keep_the_first_record() {
    let mut index = FeatureIndex::new();
    index.insert(FeatureRecord::new("economia", "p1", "original", "c1"));
    index.insert(FeatureRecord::new("economia", "p2", "replacement", "c2"));

    assert_eq!(index.len(), 1);
    assert_eq!(index.find_exact("economia").unwrap().description, "original");
}

#[test]
fn catalog_loads_from_a_toml_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(
        file,
        r#"
[[feature]]
name = "relatorios"
path = "Dashboard > Relatórios"
description = "Gerar relatórios mensais"
category = "Análise"

[[feature]]
name = "exportar"
path = "Dashboard > Exportar"
description = "Exportar dados"
category = "Análise"
"#
    )
    .expect("write catalog");

    let service = SearchService::from_catalog_path(file.path()).expect("catalog loads");
    assert_eq!(service.len(), 2);

    let results = service.search("re").unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "relatorios");
}

#[test]
fn bad_catalog_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, "[[feature]]\nname = \"\"\npath = \"p\"\ndescription = \"d\"\ncategory = \"c\"")
        .expect("write catalog");

    let err = SearchService::from_catalog_path(file.path()).unwrap_err();
    assert!(matches!(err, FeatgrepError::EmptyFeatureName { position: 1 }));

    let err = SearchService::from_catalog_path(std::path::Path::new("/nonexistent/catalog.toml"))
        .unwrap_err();
    assert!(matches!(err, FeatgrepError::Io(_)));
}
