//! Scoped theme provider
//!
//! A [`ThemeProvider`] owns the active color scheme for one subtree. It is an
//! ordinary value created when the subtree mounts and dropped when it unmounts;
//! descendants reach it through a borrowed [`Scope`] rather than a global.
//!
//! Every published [`ThemeContext`] carries a [`Generation`] minted from a
//! process-wide counter. Caches key on the generation instead of on pointer
//! identity, so a scheme switch invalidates them everywhere in the subtree.
//!
//! ```rust
//! use std::sync::Arc;
//! use tessera_theme::{presets, use_theme, ColorScheme, NoPreference, Scope, ThemeProvider};
//!
//! let mut provider = ThemeProvider::new(Arc::new(presets::default_table()), NoPreference);
//! assert_eq!(use_theme(&provider.scope()).unwrap().color_scheme(), ColorScheme::Light);
//!
//! provider.set_color_scheme(Some(ColorScheme::Dark));
//! assert_eq!(use_theme(&provider.scope()).unwrap().color_scheme(), ColorScheme::Dark);
//!
//! assert!(use_theme(&Scope::root()).is_err());
//! ```

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::config::ProviderConfig;
use crate::error::{Result, ThemeError};
use crate::platform::SchemePreference;
use crate::theme::{ColorScheme, Theme, ThemeTable};

/// Source of theme generations, shared by every provider in the process
static NEXT_GENERATION: AtomicU64 = AtomicU64::new(1);

/// Monotonically increasing id of a published theme context
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct Generation(u64);

impl Generation {
    fn next() -> Self {
        Self(NEXT_GENERATION.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "gen#{}", self.0)
    }
}

/// Value published by a provider to its subtree
#[derive(Debug)]
pub struct ThemeContext {
    table: Arc<ThemeTable>,
    theme: Arc<Theme>,
    color_scheme: ColorScheme,
    breakpoint: String,
    generation: Generation,
}

impl ThemeContext {
    /// Active theme
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Shared handle to the active theme
    pub fn theme_arc(&self) -> &Arc<Theme> {
        &self.theme
    }

    pub fn color_scheme(&self) -> ColorScheme {
        self.color_scheme
    }

    /// Responsive breakpoint used for typography presets
    pub fn breakpoint(&self) -> &str {
        &self.breakpoint
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn table(&self) -> &Arc<ThemeTable> {
        &self.table
    }
}

/// Owner of the active color scheme and theme table for a subtree
pub struct ThemeProvider {
    table: Arc<ThemeTable>,
    color_scheme: Option<ColorScheme>,
    preference: Box<dyn SchemePreference>,
    config: ProviderConfig,
    context: Arc<ThemeContext>,
}

impl ThemeProvider {
    /// Mount a provider with no explicit scheme override
    pub fn new(table: Arc<ThemeTable>, preference: impl SchemePreference + 'static) -> Self {
        Self::with_config(table, preference, ProviderConfig::default())
    }

    /// Mount a provider with explicit configuration
    pub fn with_config(
        table: Arc<ThemeTable>,
        preference: impl SchemePreference + 'static,
        config: ProviderConfig,
    ) -> Self {
        let preference: Box<dyn SchemePreference> = Box::new(preference);
        let scheme = resolve_scheme(None, preference.as_ref(), &config);
        let context = publish(&table, scheme, &config.breakpoint);
        Self {
            table,
            color_scheme: None,
            preference,
            config,
            context,
        }
    }

    /// Builder-style explicit override
    pub fn with_color_scheme(mut self, scheme: Option<ColorScheme>) -> Self {
        self.set_color_scheme(scheme);
        self
    }

    /// Set or clear the explicit scheme override
    ///
    /// Returns whether a new context was published.
    pub fn set_color_scheme(&mut self, scheme: Option<ColorScheme>) -> bool {
        self.color_scheme = scheme;
        self.update()
    }

    /// Flip the active scheme by setting an explicit override
    pub fn toggle_scheme(&mut self) -> bool {
        let next = self.context.color_scheme.toggle();
        self.set_color_scheme(Some(next))
    }

    /// Replace the theme table
    pub fn set_table(&mut self, table: Arc<ThemeTable>) -> bool {
        self.table = table;
        self.update()
    }

    /// Change the typography breakpoint
    pub fn set_breakpoint(&mut self, breakpoint: impl Into<String>) -> bool {
        self.config.breakpoint = breakpoint.into();
        self.update()
    }

    /// Re-read the host preference, as on a provider update
    pub fn refresh(&mut self) -> bool {
        self.update()
    }

    /// Currently published context
    pub fn context(&self) -> &Arc<ThemeContext> {
        &self.context
    }

    /// Scope handed to descendants
    pub fn scope(&self) -> Scope<'_> {
        Scope {
            context: Some(&self.context),
        }
    }

    /// Recompute the context; keeps the current one unless an input changed
    fn update(&mut self) -> bool {
        let scheme = resolve_scheme(self.color_scheme, self.preference.as_ref(), &self.config);
        let current = &self.context;
        if current.color_scheme == scheme
            && Arc::ptr_eq(&current.table, &self.table)
            && current.breakpoint == self.config.breakpoint
        {
            return false;
        }

        tracing::debug!(
            "ThemeProvider::update - {:?} -> {:?} ({})",
            current.color_scheme,
            scheme,
            self.table.name()
        );
        self.context = publish(&self.table, scheme, &self.config.breakpoint);
        true
    }
}

impl fmt::Debug for ThemeProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeProvider")
            .field("table", &self.table.name())
            .field("color_scheme", &self.color_scheme)
            .field("config", &self.config)
            .field("context", &self.context)
            .finish()
    }
}

/// Override, then host preference, then the configured default
fn resolve_scheme(
    explicit: Option<ColorScheme>,
    preference: &dyn SchemePreference,
    config: &ProviderConfig,
) -> ColorScheme {
    explicit
        .or_else(|| preference.preferred_scheme())
        .unwrap_or(config.default_scheme)
}

fn publish(table: &Arc<ThemeTable>, scheme: ColorScheme, breakpoint: &str) -> Arc<ThemeContext> {
    let generation = Generation::next();
    tracing::debug!("publishing {} theme context {}", scheme, generation);
    Arc::new(ThemeContext {
        table: Arc::clone(table),
        theme: Arc::clone(table.for_scheme(scheme)),
        color_scheme: scheme,
        breakpoint: breakpoint.to_string(),
        generation,
    })
}

/// Position in the tree from which theme consumers read
#[derive(Clone, Copy, Debug, Default)]
pub struct Scope<'a> {
    context: Option<&'a Arc<ThemeContext>>,
}

impl<'a> Scope<'a> {
    /// A scope with no provider above it
    pub fn root() -> Self {
        Self { context: None }
    }

    /// Context of the nearest provider, failing with `consumer` in the error
    pub fn context(&self, consumer: &'static str) -> Result<&'a Arc<ThemeContext>> {
        self.context.ok_or(ThemeError::MissingProvider { consumer })
    }
}

/// Theme context of the nearest provider
pub fn use_theme<'a>(scope: &Scope<'a>) -> Result<&'a ThemeContext> {
    scope.context("use_theme").map(Arc::as_ref)
}

/// Active color scheme of the nearest provider
pub fn use_color_scheme(scope: &Scope<'_>) -> Result<ColorScheme> {
    scope
        .context("use_color_scheme")
        .map(|context| context.color_scheme)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{FixedPreference, NoPreference};
    use crate::presets;

    fn table() -> Arc<ThemeTable> {
        Arc::new(presets::default_table())
    }

    #[test]
    fn generations_increase() {
        let a = Generation::next();
        let b = Generation::next();
        assert!(b > a);
    }

    #[test]
    fn override_beats_preference_beats_default() {
        let config = ProviderConfig {
            default_scheme: ColorScheme::Dark,
            ..ProviderConfig::default()
        };
        assert_eq!(
            resolve_scheme(None, &NoPreference, &config),
            ColorScheme::Dark
        );
        assert_eq!(
            resolve_scheme(None, &FixedPreference(ColorScheme::Light), &config),
            ColorScheme::Light
        );
        assert_eq!(
            resolve_scheme(
                Some(ColorScheme::Dark),
                &FixedPreference(ColorScheme::Light),
                &config
            ),
            ColorScheme::Dark
        );
    }

    #[test]
    fn unchanged_inputs_keep_context_identity() {
        let mut provider = ThemeProvider::new(table(), NoPreference);
        let before = Arc::clone(provider.context());

        assert!(!provider.refresh());
        assert!(!provider.set_color_scheme(Some(ColorScheme::Light)));
        assert!(Arc::ptr_eq(&before, provider.context()));
    }

    #[test]
    fn table_swap_publishes_new_context() {
        let mut provider = ThemeProvider::new(table(), NoPreference);
        let before = provider.context().generation();

        assert!(provider.set_table(table()));
        assert!(provider.context().generation() > before);
    }

    #[test]
    fn toggle_flips_scheme() {
        let mut provider = ThemeProvider::new(table(), FixedPreference(ColorScheme::Dark));
        assert_eq!(provider.context().color_scheme(), ColorScheme::Dark);
        assert!(provider.toggle_scheme());
        assert_eq!(provider.context().color_scheme(), ColorScheme::Light);
    }
}
