//! Typed builders for MongoDB aggregation expressions and stages, and the encoder turning them
//! into BSON.
//!
//! ```
//! use agg_ast::{expressions::*, EncodeContext, Encoder, TimeUnit};
//! use bson::bson;
//!
//! let truncated = date_trunc(field("date"), TimeUnit::Day).bin_size(2);
//! let encoded = Encoder::new(&EncodeContext::default())
//!     .encode_expression(&truncated.into())
//!     .unwrap();
//! assert_eq!(
//!     bson!({"$dateTrunc": {"date": "$date", "unit": "day", "binSize": 2}}),
//!     encoded
//! );
//! ```

pub mod codec;
pub mod custom_serde;
pub mod definitions;
pub mod encoder;
pub mod error;
pub mod expressions;
pub mod fields;
pub mod stages;
pub mod value;

#[cfg(test)]
mod encode_tests;

pub use codec::{CodecRegistry, CustomValue, EncodeContext};
pub use definitions::{ConvertType, DayOfWeek, Direction, Expression, Sort, TimeUnit};
pub use encoder::Encoder;
pub use error::{Error, Result};
pub use fields::Fields;
pub use stages::{Pipeline, Stage};
pub use value::{custom, value, wrap};
