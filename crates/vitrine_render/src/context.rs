//! Typed per-request context storage.

use core::any::{Any, TypeId};

use hashbrown::HashMap;

/// Errors from context lookups.
#[derive(Debug, thiserror::Error)]
pub enum ContextError {
    /// No provider installed a value of the requested type.
    #[error("context value not found: {0}")]
    NotFound(&'static str),
}

/// Type-keyed storage for the values supplied to a request.
///
/// One `Context` exists per server request. Providers install values before
/// rendering starts; pages and shells resolve them during render. Requests
/// are single-threaded-cooperative, so lookups hand out plain references;
/// the only mutable shared state (the store) carries its own lock.
///
/// # Example
///
/// ```
/// use vitrine_render::Context;
///
/// struct Flag(bool);
///
/// let mut ctx = Context::new();
/// ctx.insert(Flag(true));
///
/// assert!(ctx.get::<Flag>().unwrap().0);
/// ```
#[derive(Default)]
pub struct Context {
    storage: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl Context {
    /// Creates an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs a value, returning the previous value of the same type if
    /// one was already installed.
    pub fn insert<T: Send + Sync + 'static>(&mut self, value: T) -> Option<T> {
        self.storage
            .insert(TypeId::of::<T>(), Box::new(value))
            .and_then(|old| old.downcast::<T>().ok().map(|boxed| *boxed))
    }

    /// Looks up an installed value.
    ///
    /// # Errors
    ///
    /// [`ContextError::NotFound`] if no provider installed the type.
    pub fn get<T: Send + Sync + 'static>(&self) -> Result<&T, ContextError> {
        self.storage
            .get(&TypeId::of::<T>())
            .and_then(|value| value.downcast_ref::<T>())
            .ok_or(ContextError::NotFound(core::any::type_name::<T>()))
    }

    /// Returns `true` if a value of type `T` is installed.
    #[must_use]
    pub fn contains<T: Send + Sync + 'static>(&self) -> bool {
        self.storage.contains_key(&TypeId::of::<T>())
    }

    /// Returns the number of installed values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Returns `true` if nothing is installed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

impl core::fmt::Debug for Context {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Context")
            .field("values", &self.len())
            .finish()
    }
}
