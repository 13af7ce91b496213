use pretty_assertions::assert_eq;
use yin_diagnostic::ErrorCode;
use yin_ir::{Delimiter, Expr, ExprKind, FileId, Ident, PreKind, Properties, StringInterner};

use super::{name, parse_err, parse_one, sp1};
use crate::{ErrorCategory, Parser};

fn unpack_record(expr: &Expr) -> (Ident, Option<&[Ident]>, &Properties) {
    match &expr.kind {
        ExprKind::RecordDef {
            name,
            parents,
            properties,
        } => (*name, parents.as_deref(), properties),
        other => panic!("expected record, got {other:?}"),
    }
}

fn field_names<'a>(properties: &Properties, interner: &'a StringInterner) -> Vec<&'a str> {
    properties.names().map(|n| interner.lookup(n)).collect()
}

#[test]
fn test_record_without_parents() {
    let (expr, interner) = parse_one("(record Point [x Int] [y Int])");
    let (record_name, parents, properties) = unpack_record(&expr);
    assert_eq!(interner.lookup(record_name.name), "Point");
    assert_eq!(record_name.span, sp1(8, 13));
    assert!(parents.is_none());
    assert_eq!(field_names(properties, &interner), vec!["x", "y"]);
    assert_eq!(
        properties.field(name(&interner, "y")).map(|f| f.span),
        Some(sp1(23, 24))
    );
}

#[test]
fn test_record_with_parents() {
    let (expr, interner) = parse_one("(record Dog (Animal) [name String])");
    let (_, parents, properties) = unpack_record(&expr);
    let parents = parents.unwrap();
    assert_eq!(parents.len(), 1);
    assert_eq!(interner.lookup(parents[0].name), "Animal");
    assert_eq!(parents[0].span, sp1(13, 19));
    assert_eq!(field_names(properties, &interner), vec!["name"]);

    let (expr, _) = parse_one("(record Animal [name String])");
    let (_, parents, _) = unpack_record(&expr);
    assert!(parents.is_none());
}

#[test]
fn test_record_with_empty_parent_list() {
    let (expr, _) = parse_one("(record Dog () [x Int])");
    let (_, parents, properties) = unpack_record(&expr);
    assert_eq!(parents, Some(&[][..]));
    assert_eq!(properties.len(), 1);
}

#[test]
fn test_record_with_parents_only() {
    let (expr, _) = parse_one("(record Dog (Animal Pet))");
    let (_, parents, properties) = unpack_record(&expr);
    assert_eq!(parents.map(<[Ident]>::len), Some(2));
    assert!(properties.is_empty());
}

#[test]
fn test_non_square_fields_are_skipped() {
    let (expr, interner) = parse_one("(record Dog [x Int] (ignored) {also} y)");
    let (_, _, properties) = unpack_record(&expr);
    assert_eq!(field_names(properties, &interner), vec!["x"]);
}

#[test]
fn test_duplicate_field_fails() {
    let err = parse_err("(record Point [x Int] [x Int])");
    assert_eq!(err.code, ErrorCode::E1016);
    assert_eq!(err.message, "duplicated field name: x");
    assert_eq!(err.span, sp1(23, 24));
    assert_eq!(err.category(), ErrorCategory::SemanticShape);
}

#[test]
fn test_record_shape_errors() {
    let err = parse_err("(record Dog)");
    assert_eq!(err.code, ErrorCode::E1011);
    assert_eq!(err.message, "syntax error in record type definition");

    let err = parse_err("(record 1 [x Int])");
    assert_eq!(err.code, ErrorCode::E1012);
    assert_eq!(err.message, "syntax error in record name: 1");
    assert_eq!(err.span, sp1(8, 9));

    let err = parse_err("(record Dog (Animal 1) [x Int])");
    assert_eq!(err.code, ErrorCode::E1013);
    assert_eq!(err.span, sp1(20, 21));
    assert_eq!(err.category(), ErrorCategory::Kind);
}

#[test]
fn test_field_spec_errors() {
    let err = parse_err("(record Dog [x])");
    assert_eq!(err.code, ErrorCode::E1014);
    assert_eq!(err.message, "empty record slot not allowed");
    assert_eq!(err.span, sp1(12, 15));

    let err = parse_err("(record Dog [1 Int])");
    assert_eq!(err.code, ErrorCode::E1015);
    assert_eq!(err.message, "expect field name, but got: 1");
    assert_eq!(err.span, sp1(13, 14));
}

#[test]
fn test_field_attributes_keep_order() {
    let (expr, interner) = parse_one("(record P [x Int :default 0 :mutable 1])");
    let (_, _, properties) = unpack_record(&expr);
    let attrs = properties.get(name(&interner, "x")).unwrap();
    let keys: Vec<&str> = attrs.keys().map(|k| interner.lookup(k)).collect();
    assert_eq!(keys, vec!["type", "default", "mutable"]);
    assert_eq!(
        attrs.get(name(&interner, "default")).map(|e| &e.kind),
        Some(&ExprKind::Int(0))
    );
}

#[test]
fn test_type_keyword_overrides_positional_type() {
    let (expr, interner) = parse_one("(record P [x Int :type Float])");
    let (_, _, properties) = unpack_record(&expr);
    let attrs = properties.get(name(&interner, "x")).unwrap();
    assert_eq!(attrs.len(), 1);
    assert_eq!(
        attrs.get(name(&interner, "type")).and_then(Expr::as_ident),
        Some(name(&interner, "Float"))
    );
}

#[test]
fn test_repeated_keyword_replaces_in_place() {
    let (expr, interner) = parse_one("(record P [x Int :d 1 :e 2 :d 3])");
    let (_, _, properties) = unpack_record(&expr);
    let attrs = properties.get(name(&interner, "x")).unwrap();
    let entries: Vec<(&str, &ExprKind)> = attrs
        .iter()
        .map(|(k, v)| (interner.lookup(k), &v.kind))
        .collect();
    assert_eq!(
        entries,
        vec![
            ("type", &ExprKind::Ident(name(&interner, "Int"))),
            ("d", &ExprKind::Int(3)),
            ("e", &ExprKind::Int(2)),
        ]
    );
}

#[test]
fn test_keyword_map_errors_in_field() {
    let err = parse_err("(record P [x Int :a])");
    assert_eq!(err.code, ErrorCode::E1017);
    assert_eq!(
        err.message,
        "must be of the form (:key1 value1 :key2 value2), but got: (:a)"
    );
    assert_eq!(err.span, sp1(10, 20));

    let err = parse_err("(record P [x Int a 1])");
    assert_eq!(err.code, ErrorCode::E1018);
    assert_eq!(err.message, "key must be a keyword, but got: a");
    assert_eq!(err.span, sp1(17, 18));
}

/// Parse the elements of the single tuple in `source`.
fn tuple_elements(source: &str, interner: &StringInterner) -> Vec<Expr> {
    let pre = yin_reader::read(source, FileId::DUMMY, interner).unwrap();
    let PreKind::Block(statements) = &pre.kind else {
        panic!("expected block");
    };
    let (_, elements) = statements[0].as_tuple().unwrap();
    Parser::new(interner).parse_list(elements).unwrap()
}

#[test]
fn test_parse_keyword_map() {
    let interner = StringInterner::new();
    let parser = Parser::new(&interner);

    let items = tuple_elements("(:a 1 :b 2)", &interner);
    let attrs = parser.parse_keyword_map(&items, sp1(0, 11)).unwrap();
    let entries: Vec<(&str, &ExprKind)> = attrs
        .iter()
        .map(|(k, v)| (interner.lookup(k), &v.kind))
        .collect();
    assert_eq!(
        entries,
        vec![("a", &ExprKind::Int(1)), ("b", &ExprKind::Int(2))]
    );

    let items = tuple_elements("(:a 1 :b)", &interner);
    let err = parser.parse_keyword_map(&items, sp1(0, 9)).unwrap_err();
    assert_eq!(err.code, ErrorCode::E1017);
    assert_eq!(err.span, sp1(0, 9));
    assert_eq!(err.category(), ErrorCategory::Shape);

    let items = tuple_elements("(a 1)", &interner);
    let err = parser.parse_keyword_map(&items, sp1(0, 5)).unwrap_err();
    assert_eq!(err.code, ErrorCode::E1018);
    assert_eq!(err.span, sp1(1, 2));

    let empty = parser.parse_keyword_map(&[], sp1(0, 0)).unwrap();
    assert!(empty.is_empty());
}

#[test]
fn test_parse_properties_directly() {
    let interner = StringInterner::new();
    let pre = yin_reader::read("[a Int] x [b Str :k 1]", FileId::DUMMY, &interner).unwrap();
    let PreKind::Block(fields) = &pre.kind else {
        panic!("expected block");
    };
    let properties = Parser::new(&interner).parse_properties(fields).unwrap();
    assert_eq!(field_names(&properties, &interner), vec!["a", "b"]);
    assert!(fields[0].is_tuple_with(Delimiter::Square));
}
