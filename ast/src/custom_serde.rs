use crate::{
    codec::EncodeContext,
    definitions::{Expression, Ref, UntaggedOperatorName},
    encoder::Encoder,
    fields::Fields,
    stages::{Pipeline, Stage},
};
use serde::{
    de::{self, Deserialize, Deserializer},
    ser::{self, Serialize, SerializeSeq, Serializer},
};
use std::fmt;

// The Serialize implementations below run the encoder with an empty codec registry, so trees can
// be rendered directly with serde_json or bson::to_bson. Trees holding custom values need an
// explicit `Encoder` with a populated registry; through serde they fail with the encoder's error.

macro_rules! serialize_with_encoder {
    ($t:ty, $method:ident) => {
        impl Serialize for $t {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                let context = EncodeContext::default();
                Encoder::new(&context)
                    .$method(self)
                    .map_err(<S::Error as ser::Error>::custom)?
                    .serialize(serializer)
            }
        }
    };
}

serialize_with_encoder!(Expression, encode_expression);
serialize_with_encoder!(Fields, encode_fields);
serialize_with_encoder!(Stage, encode_stage);

impl Serialize for Pipeline {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let context = EncodeContext::default();
        let stages = Encoder::new(&context)
            .encode_pipeline(self)
            .map_err(<S::Error as ser::Error>::custom)?;
        let mut seq = serializer.serialize_seq(Some(stages.len()))?;
        for stage in stages.iter() {
            seq.serialize_element(stage)?;
        }
        seq.end()
    }
}

impl TryFrom<String> for UntaggedOperatorName {
    type Error = String;

    fn try_from(value: String) -> Result<Self, String> {
        UntaggedOperatorName::try_from(value.as_str())
    }
}

impl From<UntaggedOperatorName> for String {
    fn from(value: UntaggedOperatorName) -> Self {
        value.name().to_string()
    }
}

struct RefVisitor;

impl de::Visitor<'_> for RefVisitor {
    type Value = Ref;

    fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ref::parse(s).ok_or_else(|| de::Error::invalid_value(de::Unexpected::Str(s), &self))
    }

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a string beginning with '$'")
    }
}

impl<'de> Deserialize<'de> for Ref {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(RefVisitor)
    }
}

impl Serialize for Ref {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_path())
    }
}
