use super::*;
use path::TreePath;
use test_case::test_case;

fn sample() -> Tree {
    Tree::record([
        ("type", Tree::from("bgp")),
        (
            "patterns",
            Tree::seq([
                Tree::record([
                    ("subject", "?s"),
                    ("predicate", "http://example.org/p"),
                    ("object", "_:b0"),
                ]),
                Tree::record([
                    ("subject", "_:b0"),
                    ("predicate", "http://example.org/q"),
                    ("object", "?o"),
                ]),
            ]),
        ),
    ])
}

#[test_case("?x", Some(IdKind::Variable); "variable")]
#[test_case("_:b", Some(IdKind::BlankNode); "blank node")]
#[test_case("_b", None; "underscore without colon")]
#[test_case("x?", None; "question mark not leading")]
#[test_case("http://example.org/", None; "iri")]
#[test_case("", None; "empty")]
fn id_kind(txt: &str, exp: Option<IdKind>) {
    assert_eq!(IdKind::of(txt), exp);
    assert_eq!(Scalar::from(txt).id_kind(), exp);
}

#[test]
fn float_equality() {
    assert_eq!(Scalar::from(f64::NAN), Scalar::from(f64::NAN));
    assert_eq!(Tree::seq([f64::NAN]), Tree::seq([f64::NAN]));
    assert_ne!(Scalar::from(0.0), Scalar::from(-0.0));
    assert_ne!(Scalar::from(1.0), Scalar::from(1));
}

#[test]
fn only_strings_are_renameable() {
    assert_eq!(Scalar::Bool(true).id_kind(), None);
    assert_eq!(Scalar::Integer(42).id_kind(), None);
    assert_eq!(Scalar::Null.id_kind(), None);
}

#[test]
fn shapes() {
    let t = sample();
    assert_eq!(t.shape(), Shape::Record);
    assert_eq!(t.get("patterns").unwrap().shape(), Shape::Sequence);
    assert_eq!(t.get("type").unwrap().shape(), Shape::Scalar);
    assert_eq!(t.get("type").unwrap().as_str(), Some("bgp"));
    assert!(t.get("nope").is_none());
    assert!(Tree::from(1).get("type").is_none());
}

#[test]
fn at() {
    let t = sample();
    let p = TreePath::root().field("patterns").index(1).field("object");
    assert_eq!(t.at(&p), Some(&Tree::from("?o")));
    assert_eq!(t.at(&TreePath::root()), Some(&t));
    assert!(t.at(&TreePath::root().field("patterns").index(2)).is_none());
    assert!(t.at(&TreePath::root().field("type").index(0)).is_none());
}

#[test]
fn identifiers() {
    let t = sample();
    let ids: Vec<_> = t.identifiers().into_iter().collect();
    assert_eq!(ids, vec!["?o", "?s", "_:b0"]);
    assert!(Tree::seq(["a", "b"]).identifiers().is_empty());
}

#[test]
fn map_identifiers() {
    let t = sample();
    let renamed = t.map_identifiers(|_, id| format!("{id}2"));
    let ids: Vec<_> = renamed.identifiers().into_iter().collect();
    assert_eq!(ids, vec!["?o2", "?s2", "_:b02"]);
    assert_eq!(renamed.get("type"), t.get("type"));
    assert_eq!(
        renamed.at(&TreePath::root().field("patterns").index(0).field("predicate")),
        Some(&Tree::from("http://example.org/p")),
    );
}

#[test]
fn display() {
    let t = Tree::record([
        ("a", Tree::seq([Tree::from(1), Tree::from(true), Tree::null()])),
        ("b", Tree::from("?x")),
    ]);
    assert_eq!(t.to_string(), r#"{"a": [1, true, null], "b": "?x"}"#);
    assert_eq!(Tree::seq(Vec::<Tree>::new()).to_string(), "[]");
}

#[test]
fn record_last_value_wins() {
    let t = Tree::record([("a", 1), ("a", 2)]);
    assert_eq!(t.as_record().unwrap().len(), 1);
    assert_eq!(t.get("a"), Some(&Tree::from(2)));
}
