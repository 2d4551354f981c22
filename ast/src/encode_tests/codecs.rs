use crate::{
    codec::{CodecRegistry, EncodeContext},
    custom,
    definitions::Expression,
    encoder::Encoder,
    error::Error,
    expressions::*,
    fields::Fields,
};
use bson::{bson, Bson};
use serde::Serialize;
use std::any::type_name;

#[derive(Debug)]
struct Money {
    cents: i64,
}

#[derive(Serialize)]
struct Point {
    x: i32,
    y: i32,
}

struct Unregistered;

struct Namespaced;

fn registry() -> CodecRegistry {
    CodecRegistry::new()
        .register::<Money, _>(|m, _| Ok(Bson::Double(m.cents as f64 / 100.0)))
        .register_serde::<Point>()
}

#[test]
fn registered_codec_encodes_custom_value() {
    let context = EncodeContext::new(registry());
    let expr = gt(field("price"), custom(Money { cents: 1999 }));
    assert_eq!(
        Ok(bson!({"$gt": ["$price", 19.99]})),
        Encoder::new(&context).encode_expression(&expr)
    );
}

#[test]
fn serde_codec_encodes_custom_value() {
    let context = EncodeContext::new(registry());
    let expr: Expression = Fields::new()
        .add("origin", custom(Point { x: 1, y: 2 }))
        .into();
    assert_eq!(
        Ok(bson!({"origin": {"x": 1, "y": 2}})),
        Encoder::new(&context).encode_expression(&expr)
    );
}

#[test]
fn codecs_see_the_namespace() {
    let registry = CodecRegistry::new().register::<Namespaced, _>(|_, context| {
        Ok(Bson::String(format!(
            "{}.{}",
            context.database().unwrap_or_default(),
            context.collection().unwrap_or_default()
        )))
    });
    let context = EncodeContext::new(registry).with_namespace("shop", "orders");
    assert_eq!(
        Ok(Bson::String("shop.orders".to_string())),
        Encoder::new(&context).encode_expression(&custom(Namespaced))
    );
}

test_encode_error!(
    unregistered_type_fails,
    expected = Error::NoCodec(type_name::<Money>().to_string()),
    input = custom(Money { cents: 1 })
);

test_encode_error!(
    nested_unregistered_type_fails_whole_tree,
    expected = Error::NoCodec(type_name::<Unregistered>().to_string()),
    input = add([field("a"), sum([custom(Unregistered)])])
);

#[test]
fn failing_codec_propagates() {
    let registry = CodecRegistry::new().register::<Money, _>(|m, _| {
        Err(Error::Codec {
            type_name: "Money".to_string(),
            message: format!("{} cents is negative", m.cents),
        })
    });
    let context = EncodeContext::new(registry);
    let expr = wrap_in_array(custom(Money { cents: -5 }));
    assert_eq!(
        Err(Error::Codec {
            type_name: "Money".to_string(),
            message: "-5 cents is negative".to_string(),
        }),
        Encoder::new(&context).encode_expression(&expr)
    );
}

fn wrap_in_array(expr: Expression) -> Expression {
    crate::wrap(vec![crate::value(1), expr])
}

#[test]
fn later_registration_replaces_earlier() {
    let registry = CodecRegistry::new()
        .register::<Money, _>(|_, _| Ok(Bson::Int32(1)))
        .register::<Money, _>(|_, _| Ok(Bson::Int32(2)));
    assert_eq!(1, registry.len());
    assert!(registry.contains::<Money>());
    assert!(!registry.contains::<Point>());
    let context = EncodeContext::new(registry);
    assert_eq!(
        Ok(Bson::Int32(2)),
        Encoder::new(&context).encode_expression(&custom(Money { cents: 0 }))
    );
}

#[test]
fn duplicate_field_names_keep_last_value_at_first_position() {
    let fields = Fields::new().add("a", 1).add("b", 2).add("a", 3);
    assert_eq!(r#"{"a":3,"b":2}"#, serde_json::to_string(&fields).unwrap());
}

#[test]
fn custom_values_compare_by_identity() {
    let a = custom(Money { cents: 1 });
    let b = custom(Money { cents: 1 });
    assert_eq!(a, a.clone());
    assert_ne!(a, b);
    match a {
        Expression::Custom(c) => {
            assert_eq!(Some(1), c.downcast_ref::<Money>().map(|m| m.cents));
            assert_eq!(type_name::<Money>(), c.type_name());
        }
        other => panic!("expected a custom value, found {other:?}"),
    }
}
