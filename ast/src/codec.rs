use crate::error::{Error, Result};
use bson::Bson;
use serde::Serialize;
use std::{
    any::{type_name, Any, TypeId},
    collections::HashMap,
    fmt,
    sync::Arc,
};
use tracing::{event, Level};

type CodecFn = dyn Fn(&(dyn Any + Send + Sync), &EncodeContext) -> Result<Bson> + Send + Sync;

/// A host value whose BSON form is only known to a codec registered at runtime.
///
/// The value is reference counted so expression trees holding it stay cheap to clone and can be
/// shared between threads. Two custom values are equal when they point at the same allocation.
#[derive(Clone)]
pub struct CustomValue {
    type_id: TypeId,
    type_name: &'static str,
    value: Arc<dyn Any + Send + Sync>,
}

impl CustomValue {
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        CustomValue {
            type_id: TypeId::of::<T>(),
            type_name: type_name::<T>(),
            value: Arc::new(value),
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.value.downcast_ref::<T>()
    }
}

impl PartialEq for CustomValue {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.value), Arc::as_ptr(&other.value))
    }
}

impl fmt::Debug for CustomValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomValue")
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}

/// CodecRegistry maps runtime types to functions producing their BSON form. Values of types known
/// to the crate never go through the registry; only `Expression::Custom` does.
#[derive(Clone, Default)]
pub struct CodecRegistry {
    codecs: HashMap<TypeId, Arc<CodecFn>>,
}

impl CodecRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `codec` for values of type `T`, replacing any earlier codec for that type.
    pub fn register<T, F>(mut self, codec: F) -> Self
    where
        T: Any + Send + Sync,
        F: Fn(&T, &EncodeContext) -> Result<Bson> + Send + Sync + 'static,
    {
        let codec: Arc<CodecFn> =
            Arc::new(
                move |value: &(dyn Any + Send + Sync), context: &EncodeContext| match value
                    .downcast_ref::<T>()
                {
                    Some(value) => codec(value, context),
                    None => Err(Error::Codec {
                        type_name: type_name::<T>().to_string(),
                        message: "value does not have the registered type".to_string(),
                    }),
                },
            );
        self.codecs.insert(TypeId::of::<T>(), codec);
        self
    }

    /// Registers a codec that maps `T` through its serde implementation.
    pub fn register_serde<T>(self) -> Self
    where
        T: Any + Send + Sync + Serialize,
    {
        self.register::<T, _>(|value, _| {
            bson::to_bson(value).map_err(|e| Error::Codec {
                type_name: type_name::<T>().to_string(),
                message: e.to_string(),
            })
        })
    }

    pub fn contains<T: Any>(&self) -> bool {
        self.codecs.contains_key(&TypeId::of::<T>())
    }

    pub fn len(&self) -> usize {
        self.codecs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codecs.is_empty()
    }

    pub fn encode(&self, value: &CustomValue, context: &EncodeContext) -> Result<Bson> {
        match self.codecs.get(&value.type_id) {
            Some(codec) => codec(value.value.as_ref(), context),
            None => {
                event!(Level::DEBUG, type_name = value.type_name, "no codec registered");
                Err(Error::NoCodec(value.type_name.to_string()))
            }
        }
    }
}

impl fmt::Debug for CodecRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CodecRegistry")
            .field("codecs", &self.codecs.len())
            .finish()
    }
}

/// EncodeContext is handed unchanged through every recursive encode call. It carries the codec
/// registry and the namespace the pipeline targets, both of which codecs may consult.
#[derive(Clone, Debug, Default)]
pub struct EncodeContext {
    registry: CodecRegistry,
    database: Option<String>,
    collection: Option<String>,
}

impl EncodeContext {
    pub fn new(registry: CodecRegistry) -> Self {
        EncodeContext {
            registry,
            database: None,
            collection: None,
        }
    }

    pub fn with_namespace(
        self,
        database: impl Into<String>,
        collection: impl Into<String>,
    ) -> Self {
        EncodeContext {
            database: Some(database.into()),
            collection: Some(collection.into()),
            ..self
        }
    }

    pub fn registry(&self) -> &CodecRegistry {
        &self.registry
    }

    pub fn database(&self) -> Option<&str> {
        self.database.as_deref()
    }

    pub fn collection(&self) -> Option<&str> {
        self.collection.as_deref()
    }
}
