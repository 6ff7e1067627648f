use crate::limits::MAX_TRAVERSAL_DEPTH;
use crate::options::AnalysisOptions;

#[test]
fn test_default_options() {
    let options = AnalysisOptions::default();
    assert_eq!(options.constructor_name, "<init>");
    assert_eq!(options.max_traversal_depth, MAX_TRAVERSAL_DEPTH);
    assert!(options.is_constructor_name("<init>"));
    assert!(!options.is_constructor_name("init"));
}

#[test]
fn test_options_from_partial_json() {
    let options = AnalysisOptions::from_json(r#"{ "maxTraversalDepth": 16 }"#)
        .expect("partial options should parse");
    assert_eq!(options.max_traversal_depth, 16);
    assert_eq!(
        options.constructor_name, "<init>",
        "missing fields should keep their defaults"
    );
}

#[test]
fn test_options_from_full_json() {
    let options =
        AnalysisOptions::from_json(r#"{ "constructorName": "__ctor", "maxTraversalDepth": 8 }"#)
            .expect("options should parse");
    assert!(options.is_constructor_name("__ctor"));
    assert_eq!(options.max_traversal_depth, 8);
}

#[test]
fn test_options_rejects_malformed_json() {
    assert!(AnalysisOptions::from_json("{ constructorName: ").is_err());
    assert!(AnalysisOptions::from_json(r#"{ "maxTraversalDepth": "deep" }"#).is_err());
}

#[test]
fn test_with_max_traversal_depth() {
    let options = AnalysisOptions::default().with_max_traversal_depth(3);
    assert_eq!(options.max_traversal_depth, 3);
}
