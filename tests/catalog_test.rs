// ==========================================
// 品种目录集成测试
// ==========================================
// 场景: 内置目录导入 → 内存目录查询; 文件导入失败路径
// ==========================================

mod helpers;

use std::io::Write;

use helpers::{catalog_of, embedded_catalog, BreedBuilder};
use poultry_cross::importer::{CatalogImporter, DqLevel, ImportError};
use tempfile::NamedTempFile;

// ==========================================
// 目录查询
// ==========================================

#[test]
fn test_embedded_catalog_lookup() {
    let catalog = embedded_catalog();

    assert_eq!(catalog.len().unwrap(), 30);
    let silkie = catalog.get_breed_by_id("silkie").unwrap().unwrap();
    assert_eq!(silkie.name, "Silkie");
    assert!(catalog.get_breed_by_id("dodo").unwrap().is_none());
}

#[test]
fn test_list_is_sorted_by_name() {
    let breeds = embedded_catalog().list_breeds().unwrap();
    let names: Vec<&str> = breeds.iter().map(|b| b.name.as_str()).collect();

    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
    assert_eq!(names[0], "Ameraucana");
}

#[test]
fn test_search_is_case_insensitive_substring() {
    let catalog = embedded_catalog();

    let ids: Vec<String> = catalog
        .search_breeds("MARANS")
        .unwrap()
        .into_iter()
        .map(|b| b.id)
        .collect();
    assert_eq!(ids, vec!["black-copper-marans", "marans"]);

    assert!(catalog.search_breeds("no-such-bird").unwrap().is_empty());
}

#[test]
fn test_category_queries() {
    let catalog = embedded_catalog();

    let meat: Vec<String> = catalog
        .list_breeds_by_category("meat")
        .unwrap()
        .into_iter()
        .map(|b| b.id)
        .collect();
    assert_eq!(meat, vec!["dorking", "la-fleche"]);

    assert!(catalog.list_breeds_by_category("penguin").unwrap().is_empty());

    assert_eq!(
        catalog.categories().unwrap(),
        vec!["dual", "dual-purpose", "egg", "layer", "meat", "ornamental"]
    );
}

#[test]
fn test_catalog_of_custom_records() {
    let catalog = catalog_of(vec![
        BreedBuilder::new("b").name("Beta").build(),
        BreedBuilder::new("a").name("Alpha").build(),
    ]);
    let names: Vec<String> = catalog
        .list_breeds()
        .unwrap()
        .into_iter()
        .map(|b| b.name)
        .collect();
    assert_eq!(names, vec!["Alpha", "Beta"]);
}

// ==========================================
// 文件导入
// ==========================================

fn write_catalog(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

#[test]
fn test_import_file_round_trips_records() {
    let records = vec![
        BreedBuilder::new("alpha").build(),
        BreedBuilder::new("beta").build(),
    ];
    let file = write_catalog(&serde_json::to_string(&records).unwrap());

    let imported = CatalogImporter::new().import_file(file.path()).unwrap();
    assert_eq!(imported.records, records);
    assert_eq!(imported.report.total_records, 2);
    assert_eq!(imported.report.accepted, 2);
}

#[test]
fn test_import_missing_file() {
    let err = CatalogImporter::new()
        .import_file("/nonexistent/dir/breeds.json")
        .unwrap_err();
    assert!(matches!(err, ImportError::FileNotFound(_)));
}

#[test]
fn test_unknown_enum_value_is_parse_error() {
    let mut value = serde_json::to_value(vec![BreedBuilder::new("odd").build()]).unwrap();
    value[0]["physicalTraits"]["bodySize"] = serde_json::json!("enormous");
    let file = write_catalog(&serde_json::to_string_pretty(&value).unwrap());

    let err = CatalogImporter::new().import_file(file.path()).unwrap_err();
    match err {
        ImportError::JsonParseError { line, message, .. } => {
            assert!(line > 0);
            assert!(message.contains("enormous"));
        }
        other => panic!("期望 JsonParseError, 实际 {:?}", other),
    }
}

#[test]
fn test_invalid_record_blocks_import() {
    let records = vec![
        BreedBuilder::new("ok").build(),
        BreedBuilder::new("bad").egg_production(300, 100).build(),
    ];
    let json = serde_json::to_string(&records).unwrap();

    let err = CatalogImporter::new().import_str(&json).unwrap_err();
    match err {
        ImportError::ValidationFailed {
            error_count,
            violations,
        } => {
            assert_eq!(error_count, 1);
            let error = violations
                .iter()
                .find(|v| v.level == DqLevel::Error)
                .unwrap();
            assert_eq!(error.index, 1);
            assert_eq!(error.breed_id.as_deref(), Some("bad"));
        }
        other => panic!("期望 ValidationFailed, 实际 {:?}", other),
    }
}

#[test]
fn test_empty_catalog_rejected() {
    let err = CatalogImporter::new().import_str("[]").unwrap_err();
    assert!(matches!(err, ImportError::EmptyCatalog));
}
