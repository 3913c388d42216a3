//! Host color scheme preference
//!
//! The provider asks a [`SchemePreference`] for the host's preferred scheme
//! whenever it mounts or refreshes. Hosts wire in their own source (an OS
//! appearance API, a settings store); the sources here cover the common cases.

use crate::theme::ColorScheme;

/// Environment variable read by [`EnvPreference::default`]
pub const COLOR_SCHEME_ENV: &str = "TESSERA_COLOR_SCHEME";

/// A source of the host platform's preferred color scheme
pub trait SchemePreference {
    /// The preferred scheme, or `None` when the host has no preference
    fn preferred_scheme(&self) -> Option<ColorScheme>;
}

impl<F> SchemePreference for F
where
    F: Fn() -> Option<ColorScheme>,
{
    fn preferred_scheme(&self) -> Option<ColorScheme> {
        self()
    }
}

/// Host reports no preference
#[derive(Clone, Copy, Debug, Default)]
pub struct NoPreference;

impl SchemePreference for NoPreference {
    fn preferred_scheme(&self) -> Option<ColorScheme> {
        None
    }
}

/// Host always reports the same scheme
#[derive(Clone, Copy, Debug)]
pub struct FixedPreference(pub ColorScheme);

impl SchemePreference for FixedPreference {
    fn preferred_scheme(&self) -> Option<ColorScheme> {
        Some(self.0)
    }
}

/// Reads the preference from an environment variable (`light` / `dark`)
///
/// Unset, empty or unrecognised values count as no preference.
#[derive(Clone, Debug)]
pub struct EnvPreference {
    var: String,
}

impl EnvPreference {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvPreference {
    fn default() -> Self {
        Self::new(COLOR_SCHEME_ENV)
    }
}

impl SchemePreference for EnvPreference {
    fn preferred_scheme(&self) -> Option<ColorScheme> {
        let raw = std::env::var(&self.var).ok()?;
        match raw.parse() {
            Ok(scheme) => Some(scheme),
            Err(err) => {
                if !raw.trim().is_empty() {
                    tracing::warn!("ignoring {}: {}", self.var, err);
                }
                None
            }
        }
    }
}

/// Detect the system color scheme from [`COLOR_SCHEME_ENV`]
pub fn detect_system_color_scheme() -> Option<ColorScheme> {
    EnvPreference::default().preferred_scheme()
}
