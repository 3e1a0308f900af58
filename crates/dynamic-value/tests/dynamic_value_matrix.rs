use dynamic_value::{Dynamic, DynamicError, Kind, SharedDynamic};

fn all_variants() -> Vec<Dynamic> {
    vec![
        Dynamic::Undefined,
        Dynamic::Null,
        Dynamic::Bool(true),
        Dynamic::Bool(false),
        Dynamic::Integer(0),
        Dynamic::Integer(-123),
        Dynamic::Float(1.1),
        Dynamic::Float(-12321.321123),
        Dynamic::Str("".into()),
        Dynamic::Str("abc123".into()),
        Dynamic::Bytes(vec![]),
        Dynamic::Bytes(vec![4, 5, 6]),
        Dynamic::Array(vec![Dynamic::Integer(1), Dynamic::Null]),
        {
            let mut obj = Dynamic::object();
            obj.set("a", 1i64).unwrap();
            obj.set("b", "two").unwrap();
            obj
        },
    ]
}

#[test]
fn variant_exclusivity_matrix() {
    for v in all_variants() {
        let predicates = [
            (Kind::Undefined, v.is_undefined()),
            (Kind::Null, v.is_null()),
            (Kind::Bool, v.is_bool()),
            (Kind::Integer, v.is_integer()),
            (Kind::Float, v.is_float()),
            (Kind::Str, v.is_str()),
            (Kind::Bytes, v.is_bytes()),
            (Kind::Array, v.is_array()),
            (Kind::Object, v.is_object()),
        ];
        for (kind, hit) in predicates {
            assert_eq!(hit, v.kind() == kind, "predicate mismatch for {v:?}");
        }
        assert_eq!(
            predicates.iter().filter(|(_, hit)| *hit).count(),
            1,
            "exactly one predicate must hold for {v:?}"
        );
    }
}

#[test]
fn wrong_variant_access_matrix() {
    for v in all_variants() {
        if !v.is_str() {
            assert_eq!(
                v.as_str(),
                Err(DynamicError::InvalidAccess {
                    expected: Kind::Str,
                    actual: v.kind(),
                }),
                "as_str must reject {v:?}"
            );
        }
        if !v.is_integer() {
            assert!(v.as_integer().is_err(), "as_integer must reject {v:?}");
        }
        if !v.is_array() {
            assert!(v.as_array().is_err(), "as_array must reject {v:?}");
        }
        if !v.is_object() {
            assert!(v.as_object().is_err(), "as_object must reject {v:?}");
        }
    }
}

#[test]
fn native_round_trip_matrix() {
    assert_eq!(Dynamic::from(true).as_bool(), Ok(true));
    assert_eq!(Dynamic::from(123i64).as_integer(), Ok(123));
    assert_eq!(Dynamic::from(-7i32).as_integer(), Ok(-7));
    assert_eq!(Dynamic::from(42.0f64).as_float(), Ok(42.0));
    assert_eq!(Dynamic::from("Hello world").as_str(), Ok("Hello world"));
    assert_eq!(
        Dynamic::from(vec![1u8, 2, 3]).as_bytes(),
        Ok([1u8, 2, 3].as_slice())
    );
}

#[test]
fn equality_is_reflexive_and_symmetric() {
    let values = all_variants();
    for v in &values {
        assert_eq!(v, v, "equality must be reflexive for {v:?}");
    }
    for a in &values {
        for b in &values {
            assert_eq!(a == b, b == a, "equality must be symmetric for {a:?}/{b:?}");
        }
    }
}

#[test]
fn cross_variant_equality_is_false() {
    let values = all_variants();
    for (i, a) in values.iter().enumerate() {
        for (j, b) in values.iter().enumerate() {
            if a.kind() != b.kind() {
                assert_ne!(a, b, "cross-variant equality must fail ({i}/{j})");
            }
        }
    }
}

#[test]
fn scenario_scalar_reassignment() {
    let mut d = Dynamic::default();
    assert!(d.is_undefined());

    d = Dynamic::from(123);
    assert!(d.is_integer());
    assert_eq!(d.as_integer(), Ok(123));

    d = Dynamic::from(42.0);
    assert!(d.is_float());

    d = Dynamic::from("Hello world");
    assert!(d.is_str());
    assert_eq!(d.as_str(), Ok("Hello world"));
}

#[test]
fn scenario_object_insert_and_lookup() {
    let mut obj = Dynamic::object();
    obj.set("key", 42i64).unwrap();
    assert_eq!(obj.contains_key("key"), Ok(true));
    assert_eq!(obj.get("key").unwrap().as_integer(), Ok(42));
}

#[test]
fn scenario_array_prefill_and_push() {
    let mut arr = Dynamic::array_with(3);
    for item in arr.as_array().unwrap() {
        assert!(item.is_undefined());
    }
    arr.push(42i64).unwrap();
    assert_eq!(arr.len(), Some(4));
    assert_eq!(arr.at_index(3).unwrap().as_integer(), Ok(42));
}

#[test]
fn scenario_shared_clone_independence() {
    let mut a = SharedDynamic::new(Dynamic::object());
    a.set("k", 42i64).unwrap();
    let mut clone = a.deep_clone();
    assert_eq!(clone.get("k").unwrap(), a.get("k").unwrap());
    clone.set("k", 0i64).unwrap();
    assert_eq!(a.get("k").unwrap().as_integer(), Ok(42));
}

#[test]
fn copy_independence_for_containers() {
    let mut original = Dynamic::object();
    original.set("list", Dynamic::array_with(1)).unwrap();
    let mut copy = original.clone();
    copy.entry("list").unwrap().push("added").unwrap();
    copy.set("extra", true).unwrap();

    assert_eq!(original.get("list").unwrap().len(), Some(1));
    assert_eq!(original.contains_key("extra"), Ok(false));
}

#[test]
fn nested_structure_round_trip() {
    let mut root = Dynamic::object();
    root.set("title", "doc").unwrap();
    root.set("tags", Dynamic::array()).unwrap();
    root.entry("tags").unwrap().push("a").unwrap();
    root.entry("tags").unwrap().push("b").unwrap();
    root.set("meta", Dynamic::object()).unwrap();
    root.entry("meta").unwrap().set("rev", 3i64).unwrap();
    root.set("payload", b"\x00\x01").unwrap();

    assert_eq!(root.get("title").unwrap(), &Dynamic::from("doc"));
    assert_eq!(root.get("tags").unwrap().at_index(1).unwrap().as_str(), Ok("b"));
    assert_eq!(
        root.get("meta").unwrap().get("rev").unwrap().as_integer(),
        Ok(3)
    );
    assert_eq!(root.get("payload").unwrap().as_bytes(), Ok([0u8, 1].as_slice()));

    let deep = root.clone();
    assert_eq!(deep, root);
}

#[test]
fn move_semantics_reset_source() {
    let mut source = Dynamic::array_with(2);
    let moved = source.take();
    assert!(source.is_undefined());
    assert_eq!(moved.len(), Some(2));
}
