//! Provider trait and ordered composition.

use core::any::TypeId;

use hashbrown::HashSet;
use vitrine_render::Context;

// ─────────────────────────────────────────────────────────────────────────────
// ProviderId
// ─────────────────────────────────────────────────────────────────────────────

/// Unique identifier for a provider type.
///
/// Used for dependency checking and duplicate detection. Based on
/// [`TypeId`], so each provider type has exactly one `ProviderId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProviderId {
    type_id: TypeId,
    type_name: &'static str,
}

impl ProviderId {
    /// Creates a `ProviderId` for the given provider type.
    #[must_use]
    pub fn of<P: Provider>() -> Self {
        Self {
            type_id: TypeId::of::<P>(),
            type_name: core::any::type_name::<P>(),
        }
    }

    /// Returns the type name for error messages.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Provider Trait
// ─────────────────────────────────────────────────────────────────────────────

/// A context-supplying wrapper in the composition.
///
/// A provider installs the value(s) it supplies into the request [`Context`]
/// and may declare providers that must have been installed before it.
///
/// # Example
///
/// ```
/// use vitrine_providers::{Context, Provider};
///
/// struct Locale(String);
///
/// struct LocaleProvider;
///
/// impl Provider for LocaleProvider {
///     fn install(&self, ctx: &mut Context) {
///         ctx.insert(Locale("en_US".to_string()));
///     }
/// }
/// ```
pub trait Provider: Send + Sync + 'static {
    /// Installs this provider's values into the request context.
    fn install(&self, ctx: &mut Context);

    /// Providers that must be installed before this one.
    fn dependencies(&self) -> Vec<ProviderId> {
        Vec::new()
    }

    /// Returns the provider's name for logging and error messages.
    fn name(&self) -> &str {
        core::any::type_name::<Self>()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// ProviderStack
// ─────────────────────────────────────────────────────────────────────────────

/// Errors from composing a provider stack.
#[derive(Debug, thiserror::Error)]
pub enum ComposeError {
    /// A provider's dependency was not installed earlier in the stack.
    #[error("provider '{provider}' requires '{dependency}' to be installed before it")]
    MissingDependency {
        /// Provider whose dependency is unsatisfied.
        provider: &'static str,
        /// The missing dependency.
        dependency: &'static str,
    },

    /// The same provider type appears twice in the stack.
    #[error("provider '{0}' is already in the stack")]
    Duplicate(&'static str),
}

/// A boxed provider with its captured [`ProviderId`], preserving type
/// identity for dependency checking after boxing.
struct BoxedProvider {
    id: ProviderId,
    provider: Box<dyn Provider>,
}

/// An ordered list of providers, composed outermost-first.
///
/// Composition installs each provider in turn and verifies ordering: a
/// provider whose declared dependency has not been installed yet fails the
/// composition, surfacing reorder mistakes as errors rather than
/// provider-not-found lookups at render time.
#[derive(Default)]
pub struct ProviderStack {
    providers: Vec<BoxedProvider>,
}

impl ProviderStack {
    /// Creates an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a provider at the innermost position.
    #[must_use]
    #[expect(
        clippy::should_implement_trait,
        reason = "This is a builder method, not std::ops::Add"
    )]
    pub fn add<P: Provider>(mut self, provider: P) -> Self {
        self.providers.push(BoxedProvider {
            id: ProviderId::of::<P>(),
            provider: Box::new(provider),
        });
        self
    }

    /// Returns the number of providers in the stack.
    #[must_use]
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Returns `true` if the stack contains no providers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Installs all providers in order, producing the request context.
    ///
    /// # Errors
    ///
    /// - [`ComposeError::Duplicate`] if a provider type appears twice
    /// - [`ComposeError::MissingDependency`] if a dependency would resolve
    ///   only later (or never)
    pub fn compose(&self) -> Result<Context, ComposeError> {
        let mut ctx = Context::new();
        let mut installed: HashSet<ProviderId> = HashSet::new();

        for entry in &self.providers {
            if installed.contains(&entry.id) {
                return Err(ComposeError::Duplicate(entry.id.type_name()));
            }

            for dependency in entry.provider.dependencies() {
                if !installed.contains(&dependency) {
                    return Err(ComposeError::MissingDependency {
                        provider: entry.id.type_name(),
                        dependency: dependency.type_name(),
                    });
                }
            }

            entry.provider.install(&mut ctx);
            installed.insert(entry.id);
            tracing::debug!(provider = entry.provider.name(), "installed provider");
        }

        Ok(ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ValueA(u8);
    struct ValueB(u8);

    struct ProviderA;
    impl Provider for ProviderA {
        fn install(&self, ctx: &mut Context) {
            ctx.insert(ValueA(1));
        }
    }

    struct ProviderB;
    impl Provider for ProviderB {
        fn install(&self, ctx: &mut Context) {
            ctx.insert(ValueB(2));
        }

        fn dependencies(&self) -> Vec<ProviderId> {
            vec![ProviderId::of::<ProviderA>()]
        }
    }

    #[test]
    fn compose_installs_in_order() {
        let ctx = ProviderStack::new()
            .add(ProviderA)
            .add(ProviderB)
            .compose()
            .unwrap();

        assert_eq!(ctx.get::<ValueA>().unwrap().0, 1);
        assert_eq!(ctx.get::<ValueB>().unwrap().0, 2);
    }

    #[test]
    fn missing_dependency_fails_composition() {
        let result = ProviderStack::new().add(ProviderB).compose();

        assert!(matches!(
            result,
            Err(ComposeError::MissingDependency { .. })
        ));
    }

    #[test]
    fn dependency_after_dependent_fails_composition() {
        // Reordering is an error, not a silent lookup miss.
        let result = ProviderStack::new()
            .add(ProviderB)
            .add(ProviderA)
            .compose();

        assert!(matches!(
            result,
            Err(ComposeError::MissingDependency { .. })
        ));
    }

    #[test]
    fn duplicate_provider_fails_composition() {
        let result = ProviderStack::new()
            .add(ProviderA)
            .add(ProviderA)
            .compose();

        assert!(matches!(result, Err(ComposeError::Duplicate(_))));
    }

    #[test]
    fn provider_id_equality() {
        assert_eq!(ProviderId::of::<ProviderA>(), ProviderId::of::<ProviderA>());
        assert_ne!(ProviderId::of::<ProviderA>(), ProviderId::of::<ProviderB>());
    }
}
