use crate::{
    definitions::Expression,
    expressions::{variables::root, *},
    value, wrap,
};

test_encode_expr!(
    sum_of_values,
    expected = r#"{"$sum":[1,2,3]}"#,
    input = sum([value(1), value(2), value(3)])
);

test_encode_expr!(
    sum_of_single_field,
    expected = r#"{"$sum":"$qty"}"#,
    input = sum([field("qty")])
);

test_encode_expr!(
    and_without_arguments,
    expected = r#"{"$and":[]}"#,
    input = and(Vec::<Expression>::new())
);

test_encode_expr!(
    or_of_comparisons,
    expected = r#"{"$or":[{"$lt":["$a",0]},{"$gte":["$a",10]}]}"#,
    input = or([lt(field("a"), 0), gte(field("a"), 10)])
);

test_encode_expr!(
    cond_is_positional,
    expected = r#"{"$cond":[{"$gt":["$qty",250]},"big","small"]}"#,
    input = condition(gt(field("qty"), value(250)), value("big"), value("small"))
);

test_encode_expr!(
    not_takes_a_list,
    expected = r#"{"$not":[{"$eq":["$a",1]}]}"#,
    input = not(eq(field("a"), 1))
);

test_encode_expr!(
    null_is_encoded_not_omitted,
    expected = r#"{"$ne":["$a",null]}"#,
    input = ne(field("$a"), None::<i32>)
);

test_encode_expr!(
    add_mixes_refs_and_values,
    expected = r#"{"$add":["$a",2,1.5]}"#,
    input = add([field("a"), value(2), value(1.5)])
);

test_encode_expr!(
    multiply_variable,
    expected = r#"{"$multiply":["$$this",2]}"#,
    input = multiply([variable("this"), value(2)])
);

test_encode_expr!(
    round_to_place,
    expected = r#"{"$round":["$x",2]}"#,
    input = round_to(field("x"), 2)
);

test_encode_expr!(
    trunc_to_integer,
    expected = r#"{"$trunc":["$x"]}"#,
    input = trunc(field("x"))
);

test_encode_expr!(
    modulo_and_pow,
    expected = r#"{"$pow":[{"$mod":["$a",3]},2]}"#,
    input = pow(modulo(field("a"), 3), 2)
);

test_encode_expr!(abs_is_bare, expected = r#"{"$abs":"$a"}"#, input = abs(field("a")));

test_encode_expr!(
    log_with_base,
    expected = r#"{"$log":["$a",2]}"#,
    input = log(field("a"), 2)
);

test_encode_expr!(
    atan2_order,
    expected = r#"{"$atan2":["$y","$x"]}"#,
    input = atan2(field("y"), field("x"))
);

test_encode_expr!(
    degrees_to_radians_is_bare,
    expected = r#"{"$degreesToRadians":"$angle"}"#,
    input = degrees_to_radians(field("angle"))
);

test_encode_expr!(
    literal_protects_dollar_strings,
    expected = r#"{"$literal":"$notAField"}"#,
    input = literal("$notAField")
);

test_encode_expr!(
    raw_strings_are_not_refs,
    expected = r#"{"$concat":["$first"," ","$last"]}"#,
    input = concat([field("first"), value(" "), field("last")])
);

test_encode_expr!(rand_is_empty_document, expected = r#"{"$rand":{}}"#, input = rand());

test_encode_expr!(
    meta_keyword,
    expected = r#"{"$meta":"textScore"}"#,
    input = meta("textScore")
);

test_encode_expr!(
    in_array_wraps_vectors,
    expected = r#"{"$in":["$a",[1,2,3]]}"#,
    input = in_array(field("a"), vec![1, 2, 3])
);

test_encode_expr!(
    nested_arrays,
    expected = r#"[[1,2],[3],"$a"]"#,
    input = wrap(vec![wrap(vec![1, 2]), wrap(vec![3]), field("a")])
);

test_encode_expr!(
    to_string_conversion,
    expected = r#"{"$toString":"$n"}"#,
    input = to_string(field("n"))
);

test_encode_expr!(
    type_of_value,
    expected = r#"{"$type":"$n"}"#,
    input = type_of(field("n"))
);

test_encode_expr!(
    is_number_takes_a_list,
    expected = r#"{"$isNumber":["$n"]}"#,
    input = is_number(field("n"))
);

test_encode_expr!(
    set_union_of_fields,
    expected = r#"{"$setUnion":["$a","$b"]}"#,
    input = set_union([field("a"), field("b")])
);

test_encode_expr!(
    set_is_subset_pair,
    expected = r#"{"$setIsSubset":["$a",["x","y"]]}"#,
    input = set_is_subset(field("a"), vec!["x", "y"])
);

test_encode_expr!(
    any_element_true_list,
    expected = r#"{"$anyElementTrue":["$flags"]}"#,
    input = any_element_true(field("flags"))
);

test_encode_expr!(
    merge_objects_single,
    expected = r#"{"$mergeObjects":"$a"}"#,
    input = merge_objects([field("a")])
);

test_encode_expr!(
    merge_objects_many,
    expected = r#"{"$mergeObjects":["$a",{"b":1}]}"#,
    input = merge_objects([field("a"), document().add("b", 1).into()])
);

test_encode_expr!(
    array_elem_at_index,
    expected = r#"{"$arrayElemAt":["$xs",-1]}"#,
    input = array_elem_at(field("xs"), -1)
);

test_encode_expr!(
    slice_from_position,
    expected = r#"{"$slice":["$xs",1,2]}"#,
    input = slice_from(field("xs"), 1, 2)
);

test_encode_expr!(
    range_with_step,
    expected = r#"{"$range":[0,10,2]}"#,
    input = range_step(0, 10, 2)
);

test_encode_expr!(size_is_bare, expected = r#"{"$size":"$xs"}"#, input = size(field("xs")));

test_encode_expr!(
    substr_cp_arguments,
    expected = r#"{"$substrCP":["$s",0,3]}"#,
    input = substr_cp(field("s"), 0, 3)
);

test_encode_expr!(
    split_on_delimiter,
    expected = r#"{"$split":["$s",","]}"#,
    input = split(field("s"), ",")
);

test_encode_expr!(
    bson_size_of_root,
    expected = r#"{"$bsonSize":"$$ROOT"}"#,
    input = bson_size(root())
);

test_encode_expr!(
    strcasecmp_pair,
    expected = r#"{"$strcasecmp":["$a","B"]}"#,
    input = strcasecmp(field("a"), "B")
);

test_encode_expr!(
    cmp_pair,
    expected = r#"{"$cmp":["$a","$b"]}"#,
    input = cmp(field("a"), field("b"))
);

test_encode_expr!(
    sample_rate_value,
    expected = r#"{"$sampleRate":0.25}"#,
    input = sample_rate(0.25)
);
