use super::{Scalar, Tree};
use serde::{
    de::{self, MapAccess, SeqAccess, Visitor},
    ser::{SerializeMap, SerializeSeq},
    Deserialize, Deserializer, Serialize, Serializer,
};
use std::collections::BTreeMap;
use std::fmt;

impl Serialize for Scalar {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Scalar::Null => serializer.serialize_unit(),
            Scalar::Bool(b) => serializer.serialize_bool(*b),
            Scalar::Integer(i) => serializer.serialize_i64(*i),
            Scalar::Float(x) => serializer.serialize_f64(*x),
            Scalar::Str(txt) => serializer.serialize_str(txt),
        }
    }
}

impl Serialize for Tree {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Tree::Scalar(s) => s.serialize(serializer),
            Tree::Sequence(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Tree::Record(fields) => {
                let mut map = serializer.serialize_map(Some(fields.len()))?;
                for (name, value) in fields {
                    map.serialize_entry(name, value)?;
                }
                map.end()
            }
        }
    }
}

struct ScalarVisitor;

impl<'de> Visitor<'de> for ScalarVisitor {
    type Value = Scalar;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("null, a boolean, a number or a string")
    }

    fn visit_unit<E>(self) -> Result<Scalar, E>
    where
        E: de::Error,
    {
        Ok(Scalar::Null)
    }

    fn visit_none<E>(self) -> Result<Scalar, E>
    where
        E: de::Error,
    {
        Ok(Scalar::Null)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Scalar, D::Error>
    where
        D: Deserializer<'de>,
    {
        Scalar::deserialize(deserializer)
    }

    fn visit_bool<E>(self, v: bool) -> Result<Scalar, E>
    where
        E: de::Error,
    {
        Ok(Scalar::Bool(v))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Scalar, E>
    where
        E: de::Error,
    {
        Ok(Scalar::Integer(v))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Scalar, E>
    where
        E: de::Error,
    {
        Ok(match i64::try_from(v) {
            Ok(i) => Scalar::Integer(i),
            Err(_) => Scalar::Float(v as f64),
        })
    }

    fn visit_f64<E>(self, v: f64) -> Result<Scalar, E>
    where
        E: de::Error,
    {
        Ok(Scalar::Float(v))
    }

    fn visit_str<E>(self, v: &str) -> Result<Scalar, E>
    where
        E: de::Error,
    {
        Ok(Scalar::from(v))
    }

    fn visit_string<E>(self, v: String) -> Result<Scalar, E>
    where
        E: de::Error,
    {
        Ok(Scalar::Str(v))
    }
}

impl<'de> Deserialize<'de> for Scalar {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ScalarVisitor)
    }
}

struct TreeVisitor;

// scalars are delegated to ScalarVisitor
impl<'de> Visitor<'de> for TreeVisitor {
    type Value = Tree;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a scalar, a sequence or a record")
    }

    fn visit_unit<E>(self) -> Result<Tree, E>
    where
        E: de::Error,
    {
        ScalarVisitor.visit_unit().map(Tree::Scalar)
    }

    fn visit_none<E>(self) -> Result<Tree, E>
    where
        E: de::Error,
    {
        ScalarVisitor.visit_none().map(Tree::Scalar)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Tree, D::Error>
    where
        D: Deserializer<'de>,
    {
        Tree::deserialize(deserializer)
    }

    fn visit_bool<E>(self, v: bool) -> Result<Tree, E>
    where
        E: de::Error,
    {
        ScalarVisitor.visit_bool(v).map(Tree::Scalar)
    }

    fn visit_i64<E>(self, v: i64) -> Result<Tree, E>
    where
        E: de::Error,
    {
        ScalarVisitor.visit_i64(v).map(Tree::Scalar)
    }

    fn visit_u64<E>(self, v: u64) -> Result<Tree, E>
    where
        E: de::Error,
    {
        ScalarVisitor.visit_u64(v).map(Tree::Scalar)
    }

    fn visit_f64<E>(self, v: f64) -> Result<Tree, E>
    where
        E: de::Error,
    {
        ScalarVisitor.visit_f64(v).map(Tree::Scalar)
    }

    fn visit_str<E>(self, v: &str) -> Result<Tree, E>
    where
        E: de::Error,
    {
        ScalarVisitor.visit_str(v).map(Tree::Scalar)
    }

    fn visit_string<E>(self, v: String) -> Result<Tree, E>
    where
        E: de::Error,
    {
        ScalarVisitor.visit_string(v).map(Tree::Scalar)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Tree, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(Tree::Sequence(items))
    }

    fn visit_map<A>(self, mut map: A) -> Result<Tree, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut fields = BTreeMap::new();
        while let Some((name, value)) = map.next_entry::<String, Tree>()? {
            fields.insert(name, value);
        }
        Ok(Tree::Record(fields))
    }
}

impl<'de> Deserialize<'de> for Tree {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(TreeVisitor)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::IdKind;
    use serde_json::json;

    #[test]
    fn from_json() {
        let value = json!({
            "type": "slice",
            "start": 0,
            "length": 2.5,
            "distinct": true,
            "missing": null,
            "input": ["?x", "_:b0"],
        });
        let tree: Tree = serde_json::from_value(value).unwrap();
        assert_eq!(tree.get("type"), Some(&Tree::from("slice")));
        assert_eq!(tree.get("start"), Some(&Tree::from(0)));
        assert_eq!(tree.get("length"), Some(&Tree::from(2.5)));
        assert_eq!(tree.get("distinct"), Some(&Tree::from(true)));
        assert_eq!(tree.get("missing"), Some(&Tree::null()));
        assert_eq!(tree.get("input"), Some(&Tree::seq(["?x", "_:b0"])));
    }

    #[test]
    fn huge_unsigned() {
        let tree: Tree = serde_json::from_str("18446744073709551615").unwrap();
        assert!(matches!(tree, Tree::Scalar(Scalar::Float(_))));
    }

    #[test]
    fn scalar_json() {
        for txt in ["null", "true", "-3", "2.5", r#""?x""#, r#""_:b0""#] {
            let scalar: Scalar = serde_json::from_str(txt).unwrap();
            assert_eq!(serde_json::to_string(&scalar).unwrap(), txt);
        }
        let scalar: Scalar = serde_json::from_str(r#""?x""#).unwrap();
        assert_eq!(scalar.id_kind(), Some(IdKind::Variable));
        assert!(serde_json::from_str::<Scalar>("[1]").is_err());
        assert!(serde_json::from_str::<Scalar>(r#"{"a": 1}"#).is_err());
    }

    #[test]
    fn to_json() {
        let tree = Tree::record([
            ("type", Tree::from("triple")),
            ("subject", Tree::from("?s")),
            ("args", Tree::seq([1, 2])),
        ]);
        let txt = serde_json::to_string(&tree).unwrap();
        assert_eq!(txt, r#"{"args":[1,2],"subject":"?s","type":"triple"}"#);
        let back: Tree = serde_json::from_str(&txt).unwrap();
        assert_eq!(back, tree);
    }
}
