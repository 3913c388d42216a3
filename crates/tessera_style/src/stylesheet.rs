//! Theme-aware stylesheets
//!
//! A [`StyleSheetBuilder`] wraps a factory producing styles from the active
//! theme. The factory runs again only when the theme generation or the
//! caller's dependency value changes; otherwise the previous result is
//! handed back by reference.
//!
//! ```rust
//! use std::sync::Arc;
//! use tessera_style::{resolve_view_style, Lx, StyleSheet, StyleSheetBuilder};
//! use tessera_theme::{presets, NoPreference, ThemeProvider};
//!
//! let provider = ThemeProvider::new(Arc::new(presets::default_table()), NoPreference);
//! let mut builder = StyleSheetBuilder::new(|theme, _: &()| {
//!     let card = resolve_view_style(theme, &Lx::new().padding("s16").bg("surface"), None)?;
//!     Ok(StyleSheet::new().with_static("card", card))
//! });
//!
//! let first = builder.build(&provider.scope(), &()).unwrap();
//! let second = builder.build(&provider.scope(), &()).unwrap();
//! assert!(std::rc::Rc::ptr_eq(&first, &second));
//! assert_eq!(builder.factory_calls(), 1);
//! ```

use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;
use tessera_theme::{use_theme, Generation, Scope, Theme};

use crate::error::{Result, StyleError};
use crate::style::Style;
use crate::value::StyleValue;

/// Memoizing wrapper around a stylesheet factory
pub struct StyleSheetBuilder<S, D = ()> {
    factory: Box<dyn Fn(&Theme, &D) -> Result<S>>,
    cache: Option<(Generation, D, Rc<S>)>,
    factory_calls: usize,
}

impl<S, D: Clone + PartialEq> StyleSheetBuilder<S, D> {
    pub fn new(factory: impl Fn(&Theme, &D) -> Result<S> + 'static) -> Self {
        Self {
            factory: Box::new(factory),
            cache: None,
            factory_calls: 0,
        }
    }

    /// Styles for the theme in `scope`
    ///
    /// Fails with a missing-provider error outside a provider. A failing
    /// factory leaves the previous cache entry untouched.
    pub fn build(&mut self, scope: &Scope<'_>, deps: &D) -> Result<Rc<S>> {
        let context = use_theme(scope)?;
        let generation = context.generation();

        if let Some((cached_gen, cached_deps, sheet)) = &self.cache {
            if *cached_gen == generation && cached_deps == deps {
                return Ok(Rc::clone(sheet));
            }
        }

        tracing::debug!("building stylesheet for {}", generation);
        self.factory_calls += 1;
        let sheet = Rc::new((self.factory)(context.theme(), deps)?);
        self.cache = Some((generation, deps.clone(), Rc::clone(&sheet)));
        Ok(sheet)
    }

    /// Number of times the factory has run
    pub fn factory_calls(&self) -> usize {
        self.factory_calls
    }
}

impl<S, D> fmt::Debug for StyleSheetBuilder<S, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyleSheetBuilder")
            .field("cached", &self.cache.as_ref().map(|(generation, _, _)| *generation))
            .field("factory_calls", &self.factory_calls)
            .finish()
    }
}

/// Style computed from call-time arguments
pub type ParametricStyle = Rc<dyn Fn(&[StyleValue]) -> Style>;

/// A stylesheet entry
#[derive(Clone)]
pub enum StyleSlot {
    Static(Style),
    Parametric(ParametricStyle),
}

impl StyleSlot {
    fn kind(&self) -> &'static str {
        match self {
            StyleSlot::Static(_) => "static",
            StyleSlot::Parametric(_) => "parametric",
        }
    }
}

impl fmt::Debug for StyleSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleSlot::Static(style) => f.debug_tuple("Static").field(style).finish(),
            StyleSlot::Parametric(_) => f.write_str("Parametric(..)"),
        }
    }
}

/// Named style slots
#[derive(Clone, Debug, Default)]
pub struct StyleSheet {
    slots: IndexMap<String, StyleSlot>,
}

impl StyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_static(mut self, name: impl Into<String>, style: Style) -> Self {
        self.slots.insert(name.into(), StyleSlot::Static(style));
        self
    }

    pub fn with_parametric(
        mut self,
        name: impl Into<String>,
        f: impl Fn(&[StyleValue]) -> Style + 'static,
    ) -> Self {
        self.slots.insert(name.into(), StyleSlot::Parametric(Rc::new(f)));
        self
    }

    pub fn slot(&self, name: &str) -> Option<&StyleSlot> {
        self.slots.get(name)
    }

    /// Static slot by name
    pub fn get(&self, name: &str) -> Result<&Style> {
        match self.lookup(name)? {
            StyleSlot::Static(style) => Ok(style),
            other => Err(kind_error(name, "static", other)),
        }
    }

    /// Evaluate a parametric slot
    pub fn call(&self, name: &str, args: &[StyleValue]) -> Result<Style> {
        match self.lookup(name)? {
            StyleSlot::Parametric(f) => Ok(f(args)),
            other => Err(kind_error(name, "parametric", other)),
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.slots.keys().map(String::as_str)
    }

    fn lookup(&self, name: &str) -> Result<&StyleSlot> {
        self.slots
            .get(name)
            .ok_or_else(|| StyleError::UnknownSlot(name.to_string()))
    }
}

fn kind_error(name: &str, expected: &'static str, actual: &StyleSlot) -> StyleError {
    StyleError::SlotKind {
        slot: name.to_string(),
        expected,
        actual: actual.kind(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::StyleKey;

    fn sheet() -> StyleSheet {
        StyleSheet::new()
            .with_static("container", Style::new().with(StyleKey::Flex, 1))
            .with_parametric("inset", |args| {
                let px = args.first().and_then(StyleValue::as_f64).unwrap_or(0.0);
                Style::new().with(StyleKey::Padding, px)
            })
    }

    #[test]
    fn parametric_slots_take_arguments() {
        let sheet = sheet();
        let style = sheet.call("inset", &[StyleValue::Number(12.0)]).unwrap();
        assert_eq!(style.get(&StyleKey::Padding), Some(&StyleValue::Number(12.0)));
        assert_eq!(sheet.names().collect::<Vec<_>>(), ["container", "inset"]);
    }

    #[test]
    fn slot_misuse_is_reported() {
        let sheet = sheet();
        assert!(matches!(sheet.get("missing"), Err(StyleError::UnknownSlot(_))));
        assert!(matches!(
            sheet.get("inset"),
            Err(StyleError::SlotKind { expected: "static", actual: "parametric", .. })
        ));
        assert!(matches!(
            sheet.call("container", &[]),
            Err(StyleError::SlotKind { expected: "parametric", .. })
        ));
    }
}
