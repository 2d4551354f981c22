use crate::{
    definitions::{ConvertType, Direction, Sort},
    expressions::{variables::root, *},
    fields::Fields,
    value,
};

test_encode_expr!(
    get_field_plain_name,
    expected = r#"{"$getField":{"field":"qty"}}"#,
    input = get_field("qty")
);

test_encode_expr!(
    get_field_dollar_name_is_literal,
    expected = r#"{"$getField":{"field":{"$literal":"$price"},"input":"$$ROOT"}}"#,
    input = get_field("$price").input(root())
);

test_encode_expr!(
    set_field_order,
    expected = r#"{"$setField":{"field":"a.b","input":"$$ROOT","value":1}}"#,
    input = set_field("a.b", root(), 1)
);

test_encode_expr!(
    unset_field_plain_name,
    expected = r#"{"$unsetField":{"field":"x","input":"$doc"}}"#,
    input = unset_field("x", field("doc"))
);

test_encode_expr!(
    unset_field_dollar_name_is_literal,
    expected = r#"{"$unsetField":{"field":{"$literal":"$x"},"input":"$doc"}}"#,
    input = unset_field("$x", field("doc"))
);

test_encode_expr!(
    switch_with_default,
    expected = r#"{"$switch":{"branches":[{"case":{"$eq":["$a",1]},"then":"one"},{"case":{"$eq":["$a",2]},"then":"two"}],"default":"many"}}"#,
    input = switch()
        .branch(eq(field("a"), 1), "one")
        .branch(eq(field("a"), 2), "two")
        .default_value("many")
);

test_encode_expr!(
    switch_without_default,
    expected = r#"{"$switch":{"branches":[{"case":true,"then":1}]}}"#,
    input = switch().branch(true, 1)
);

test_encode_expr!(
    let_binds_variables,
    expected = r#"{"$let":{"vars":{"total":{"$add":["$a","$b"]}},"in":{"$multiply":["$$total",2]}}}"#,
    input = let_vars(
        Fields::new().add("total", add([field("a"), field("b")])),
        multiply([variable("total"), value(2)])
    )
);

test_encode_expr!(
    convert_with_fallbacks,
    expected = r#"{"$convert":{"input":"$a","to":"int","onError":0,"onNull":-1}}"#,
    input = convert(field("a"), ConvertType::Int).on_null(-1).on_error(0)
);

test_encode_expr!(
    convert_to_object_id,
    expected = r#"{"$convert":{"input":"$id","to":"objectId"}}"#,
    input = convert(field("id"), ConvertType::ObjectId)
);

test_encode_expr!(
    if_null_single_target,
    expected = r#"{"$ifNull":["$a","none"]}"#,
    input = if_null().target(field("a")).unwrap().replacement("none")
);

test_encode_expr!(
    if_null_document_target,
    expected = r#"{"$ifNull":[{"x":"$a","y":1},0]}"#,
    input = if_null()
        .field("x", field("a"))
        .and_then(|i| i.field("y", 1))
        .unwrap()
        .replacement(0)
);

test_encode_expr!(
    regex_match_with_options,
    expected = r#"{"$regexMatch":{"input":"$s","regex":"^a","options":"i"}}"#,
    input = regex_match(field("s"), "^a").options("i")
);

test_encode_expr!(
    regex_find_all_without_options,
    expected = r#"{"$regexFindAll":{"input":"$s","regex":"\\d+"}}"#,
    input = regex_find_all(field("s"), r"\d+")
);

test_encode_expr!(
    trim_whitespace,
    expected = r#"{"$trim":{"input":"$s"}}"#,
    input = trim(field("s"))
);

test_encode_expr!(
    ltrim_chars,
    expected = r#"{"$ltrim":{"input":"$s","chars":"0"}}"#,
    input = ltrim(field("s")).chars("0")
);

test_encode_expr!(
    replace_all_order,
    expected = r#"{"$replaceAll":{"input":"$s","find":"a","replacement":"b"}}"#,
    input = replace_all(field("s"), "a", "b")
);

test_encode_expr!(
    index_of_cp_without_bounds,
    expected = r#"{"$indexOfCP":["$s","a"]}"#,
    input = index_of_cp(field("s"), "a")
);

test_encode_expr!(
    index_of_bytes_with_bounds,
    expected = r#"{"$indexOfBytes":["$s","a",1,5]}"#,
    input = index_of_bytes(field("s"), "a").end(5).start(1)
);

test_encode_expr!(
    index_of_array_end_starts_at_zero,
    expected = r#"{"$indexOfArray":["$xs",3,0,5]}"#,
    input = index_of_array(field("xs"), 3).end(5)
);

test_encode_expr!(
    index_of_array_start_only,
    expected = r#"{"$indexOfArray":["$xs",3,2]}"#,
    input = index_of_array(field("xs"), 3).start(2)
);

test_encode_expr!(
    filter_with_alias_and_limit,
    expected = r#"{"$filter":{"input":"$items","as":"item","cond":{"$gt":["$$item.price",10]},"limit":2}}"#,
    input = filter(field("items"), gt(variable("item.price"), 10))
        .as_var("item")
        .limit(2)
);

test_encode_expr!(
    map_default_variable,
    expected = r#"{"$map":{"input":"$xs","in":{"$multiply":["$$this",2]}}}"#,
    input = map(field("xs"), multiply([variable("this"), value(2)]))
);

test_encode_expr!(
    reduce_order,
    expected = r#"{"$reduce":{"input":"$xs","initialValue":0,"in":{"$add":["$$value","$$this"]}}}"#,
    input = reduce(
        field("xs"),
        0,
        add([variable("value"), variable("this")])
    )
);

test_encode_expr!(
    sort_array_by_value,
    expected = r#"{"$sortArray":{"input":"$xs","sortBy":-1}}"#,
    input = sort_array(field("xs"), Direction::Descending)
);

test_encode_expr!(
    sort_array_by_keys,
    expected = r#"{"$sortArray":{"input":"$docs","sortBy":{"a":1,"b":-1}}}"#,
    input = sort_array_by(
        field("docs"),
        [Sort::ascending("a"), Sort::descending("b")]
    )
);

test_encode_expr!(
    zip_with_options,
    expected = r#"{"$zip":{"inputs":["$a","$b"],"useLongestLength":true,"defaults":[0,0]}}"#,
    input = zip([field("a"), field("b")])
        .use_longest_length(true)
        .defaults([0, 0])
);

test_encode_expr!(
    zip_inputs_only,
    expected = r#"{"$zip":{"inputs":["$a","$b"]}}"#,
    input = zip([field("a"), field("b")])
);

test_encode_expr!(
    first_n_of_array,
    expected = r#"{"$firstN":{"input":"$xs","n":3}}"#,
    input = first_n(field("xs"), 3)
);

test_encode_expr!(
    max_n_of_array,
    expected = r#"{"$maxN":{"input":"$xs","n":"$k"}}"#,
    input = max_n(field("xs"), field("k"))
);

test_encode_expr!(
    function_is_javascript,
    expected = r#"{"$function":{"body":"function(a) { return a; }","args":["$a"],"lang":"js"}}"#,
    input = function("function(a) { return a; }", [field("a")])
);
