// Expected values are compact JSON so that key order is part of every assertion; bson documents
// compare equal regardless of order.

macro_rules! test_encode_expr {
    ($func_name:ident, expected = $expected:expr, input = $input:expr) => {
        #[test]
        fn $func_name() {
            use crate::definitions::Expression;

            let input: Expression = $input.into();
            let output = serde_json::to_string(&input).unwrap();
            assert_eq!($expected, output);
        }
    };
}

macro_rules! test_encode_stage {
    ($func_name:ident, expected = $expected:expr, input = $input:expr) => {
        #[test]
        fn $func_name() {
            use crate::stages::Stage;

            let input: Stage = $input.into();
            let output = serde_json::to_string(&input).unwrap();
            assert_eq!($expected, output);
        }
    };
}

macro_rules! test_encode_error {
    ($func_name:ident, expected = $expected:expr, input = $input:expr) => {
        #[test]
        fn $func_name() {
            use crate::{codec::EncodeContext, definitions::Expression, encoder::Encoder};

            let input: Expression = $input.into();
            let context = EncodeContext::default();
            assert_eq!(Err($expected), Encoder::new(&context).encode_expression(&input));
        }
    };
}

#[cfg(test)]
mod accumulators;
#[cfg(test)]
mod codecs;
#[cfg(test)]
mod date_ops;
#[cfg(test)]
mod tagged_ops;
#[cfg(test)]
mod untagged_ops;
