use crate::{
    codec::EncodeContext,
    definitions::{Expression, Sort, TimeUnit},
    encoder::Encoder,
    error::Error,
    expressions::*,
    value,
};

test_encode_expr!(
    top_single_sort_is_document,
    expected = r#"{"$top":{"sortBy":{"score":-1},"output":["$name","$score"]}}"#,
    input = top(
        value(vec![field("name"), field("score")]),
        [Sort::descending("score")]
    )
    .unwrap()
);

test_encode_expr!(
    top_two_sorts_is_array,
    expected = r#"{"$top":{"sortBy":[{"score":-1},{"name":1}],"output":"$name"}}"#,
    input = top(
        field("name"),
        [Sort::descending("score"), Sort::ascending("name")]
    )
    .unwrap()
);

test_encode_expr!(
    top_n_puts_n_first,
    expected = r#"{"$topN":{"n":3,"sortBy":{"score":-1},"output":"$name"}}"#,
    input = top_n(field("name"), [Sort::descending("score")], 3).unwrap()
);

test_encode_expr!(
    bottom_single_sort,
    expected = r#"{"$bottom":{"sortBy":{"age":1},"output":"$name"}}"#,
    input = bottom(field("name"), [Sort::ascending("age")]).unwrap()
);

test_encode_expr!(
    bottom_n_two_sorts,
    expected = r#"{"$bottomN":{"n":"$k","sortBy":[{"a":1},{"b":-1}],"output":"$x"}}"#,
    input = bottom_n(
        field("x"),
        vec![Sort::ascending("a"), Sort::descending("b")],
        field("k")
    )
    .unwrap()
);

#[test]
fn ranked_results_require_a_sort() {
    assert_eq!(
        Err(Error::MissingSort { operator: "$top" }),
        top(field("a"), Vec::<Sort>::new())
    );
    assert_eq!(
        Err(Error::MissingSort {
            operator: "$bottomN"
        }),
        bottom_n(field("a"), Vec::<Sort>::new(), 2)
    );
}

test_encode_expr!(
    push_single_value,
    expected = r#"{"$push":"$item"}"#,
    input = push().single(field("item")).unwrap()
);

test_encode_expr!(
    push_document,
    expected = r#"{"$push":{"item":"$item","qty":"$qty"}}"#,
    input = push()
        .field("item", field("item"))
        .and_then(|p| p.field("qty", field("qty")))
        .unwrap()
);

#[test]
fn push_rejects_fields_after_single() {
    let result = push().single(field("a")).and_then(|p| p.field("b", 1));
    assert_eq!(Err(Error::MixedModes { operator: "$push" }), result);
}

#[test]
fn push_rejects_single_after_fields() {
    let result = push().field("b", 1).and_then(|p| p.single(field("a")));
    assert_eq!(Err(Error::MixedModes { operator: "$push" }), result);
}

#[test]
fn if_null_rejects_mixed_modes_in_both_orders() {
    assert_eq!(
        Err(Error::MixedModes {
            operator: "$ifNull"
        }),
        if_null().target(field("a")).and_then(|i| i.field("b", 1))
    );
    assert_eq!(
        Err(Error::MixedModes {
            operator: "$ifNull"
        }),
        if_null().field("b", 1).and_then(|i| i.target(field("a")))
    );
}

#[test]
fn unset_push_cannot_be_encoded() {
    let expr: Expression = push().into();
    let context = EncodeContext::default();
    assert!(matches!(
        Encoder::new(&context).encode_expression(&expr),
        Err(Error::Unsupported(_))
    ));
}

#[test]
fn if_null_without_replacement_cannot_be_encoded() {
    let expr: Expression = if_null().target(field("a")).unwrap().into();
    let context = EncodeContext::default();
    assert!(matches!(
        Encoder::new(&context).encode_expression(&expr),
        Err(Error::Unsupported(_))
    ));
}

test_encode_expr!(
    avg_single_is_bare,
    expected = r#"{"$avg":"$x"}"#,
    input = avg([field("x")])
);

test_encode_expr!(
    max_many_is_array,
    expected = r#"{"$max":["$a","$b"]}"#,
    input = max([field("a"), field("b")])
);

test_encode_expr!(
    std_dev_samp_single,
    expected = r#"{"$stdDevSamp":"$x"}"#,
    input = std_dev_samp([field("x")])
);

test_encode_expr!(
    add_to_set_value,
    expected = r#"{"$addToSet":"$tag"}"#,
    input = add_to_set(field("tag"))
);

test_encode_expr!(
    first_and_last,
    expected = r#"{"$subtract":[{"$last":"$t"},{"$first":"$t"}]}"#,
    input = subtract(last(field("t")), first(field("t")))
);

test_encode_expr!(count_is_empty_document, expected = r#"{"$count":{}}"#, input = count());

test_encode_expr!(
    covariance_pop_pair,
    expected = r#"{"$covariancePop":["$x","$y"]}"#,
    input = covariance_pop(field("x"), field("y"))
);

test_encode_expr!(
    median_is_approximate,
    expected = r#"{"$median":{"input":"$x","method":"approximate"}}"#,
    input = median(field("x"))
);

test_encode_expr!(
    percentile_list,
    expected = r#"{"$percentile":{"input":"$x","p":[0.5,0.9],"method":"approximate"}}"#,
    input = percentile(field("x"), [0.5, 0.9])
);

test_encode_expr!(
    accumulator_all_fields,
    expected = r#"{"$accumulator":{"init":"function(s) { return {count: 0, seed: s}; }","initArgs":["$seed"],"accumulate":"function(state, n) { state.count += n; return state; }","accumulateArgs":["$n"],"merge":"function(a, b) { return {count: a.count + b.count}; }","finalize":"function(state) { return state.count; }","lang":"js"}}"#,
    input = accumulator(
        "function(s) { return {count: 0, seed: s}; }",
        "function(state, n) { state.count += n; return state; }",
        [field("n")],
        "function(a, b) { return {count: a.count + b.count}; }"
    )
    .finalize("function(state) { return state.count; }")
    .init_args([field("seed")])
);

test_encode_expr!(
    accumulator_without_options,
    expected = r#"{"$accumulator":{"init":"function() { return 0; }","accumulate":"function(s, n) { return s + n; }","accumulateArgs":["$n"],"merge":"function(a, b) { return a + b; }","lang":"js"}}"#,
    input = accumulator(
        "function() { return 0; }",
        "function(s, n) { return s + n; }",
        [field("n")],
        "function(a, b) { return a + b; }"
    )
);

test_encode_expr!(rank_marker, expected = r#"{"$rank":{}}"#, input = rank());

test_encode_expr!(
    dense_rank_marker,
    expected = r#"{"$denseRank":{}}"#,
    input = dense_rank()
);

test_encode_expr!(
    document_number_marker,
    expected = r#"{"$documentNumber":{}}"#,
    input = document_number()
);

test_encode_expr!(
    derivative_with_unit,
    expected = r#"{"$derivative":{"input":"$x","unit":"hour"}}"#,
    input = derivative(field("x")).unit(TimeUnit::Hour)
);

test_encode_expr!(
    integral_without_unit,
    expected = r#"{"$integral":{"input":"$x"}}"#,
    input = integral(field("x"))
);

test_encode_expr!(
    exp_moving_avg_window,
    expected = r#"{"$expMovingAvg":{"input":"$price","N":2}}"#,
    input = exp_moving_avg(field("price"), 2)
);

test_encode_expr!(
    exp_moving_avg_decay,
    expected = r#"{"$expMovingAvg":{"input":"$price","alpha":0.75}}"#,
    input = exp_moving_avg_alpha(field("price"), 0.75)
);

test_encode_expr!(
    shift_with_default,
    expected = r#"{"$shift":{"output":"$x","by":-1,"default":0}}"#,
    input = shift(field("x"), -1).default_value(0)
);

test_encode_expr!(
    shift_without_default,
    expected = r#"{"$shift":{"output":"$x","by":1}}"#,
    input = shift(field("x"), 1)
);

test_encode_expr!(locf_is_bare, expected = r#"{"$locf":"$x"}"#, input = locf(field("x")));
