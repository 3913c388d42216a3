//! Caller style inputs
//!
//! The `style` prop of a styled component accepts a static [`Style`], a
//! function of the interaction state, or an array mixing both where `None`
//! entries are skipped. Arrays may nest.
//!
//! ```rust
//! use tessera_style::{InteractionState, Style, StyleInput, StyleKey};
//!
//! let input = StyleInput::composite([
//!     Some(StyleInput::Static(Style::new().with(StyleKey::Padding, 10))),
//!     Some(StyleInput::dynamic(|state| {
//!         Style::new().with(StyleKey::Opacity, if state.pressed { 0.5 } else { 1.0 })
//!     })),
//!     None,
//! ]);
//!
//! let pressed = input.resolve(&InteractionState::pressed());
//! assert_eq!(pressed.get(&StyleKey::Opacity).and_then(|v| v.as_f64()), Some(0.5));
//! ```

use std::fmt;
use std::rc::Rc;

use crate::style::Style;

/// Interaction state handed to dynamic style functions
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct InteractionState {
    pub pressed: bool,
    pub hovered: bool,
    pub focused: bool,
}

impl InteractionState {
    /// Nothing is pressed, hovered or focused
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn pressed() -> Self {
        Self {
            pressed: true,
            ..Self::default()
        }
    }
}

/// Style computed from the interaction state
pub type DynamicStyle = Rc<dyn Fn(&InteractionState) -> Style>;

/// Value of a `style` prop
#[derive(Clone)]
pub enum StyleInput {
    Static(Style),
    Dynamic(DynamicStyle),
    /// Entries merged left to right, later entries winning
    Composite(Vec<Option<StyleInput>>),
}

impl StyleInput {
    pub fn dynamic(f: impl Fn(&InteractionState) -> Style + 'static) -> Self {
        StyleInput::Dynamic(Rc::new(f))
    }

    pub fn composite(entries: impl IntoIterator<Item = Option<StyleInput>>) -> Self {
        StyleInput::Composite(entries.into_iter().collect())
    }

    /// Whether any branch depends on the interaction state
    pub fn is_dynamic(&self) -> bool {
        match self {
            StyleInput::Static(_) => false,
            StyleInput::Dynamic(_) => true,
            StyleInput::Composite(entries) => entries.iter().flatten().any(StyleInput::is_dynamic),
        }
    }

    /// Merge every entry for the given state
    pub fn resolve(&self, state: &InteractionState) -> Style {
        let mut out = Style::new();
        self.resolve_into(state, &mut out);
        out
    }

    fn resolve_into(&self, state: &InteractionState, out: &mut Style) {
        match self {
            StyleInput::Static(style) => out.extend_from(style),
            StyleInput::Dynamic(f) => out.extend_from(&f(state)),
            StyleInput::Composite(entries) => {
                for entry in entries.iter().flatten() {
                    entry.resolve_into(state, out);
                }
            }
        }
    }

    /// Collapse to a plain style, or to a single deferred function when any
    /// branch is dynamic
    pub fn flatten(&self) -> FlatStyle {
        if !self.is_dynamic() {
            return FlatStyle::Static(self.resolve(&InteractionState::idle()));
        }
        let input = self.clone();
        FlatStyle::Deferred(Rc::new(move |state: &InteractionState| input.resolve(state)))
    }

    /// Shallow identity used for re-render skipping
    ///
    /// Static styles compare by value, functions by pointer.
    pub fn same_as(&self, other: &StyleInput) -> bool {
        match (self, other) {
            (StyleInput::Static(a), StyleInput::Static(b)) => a == b,
            (StyleInput::Dynamic(a), StyleInput::Dynamic(b)) => Rc::ptr_eq(a, b),
            (StyleInput::Composite(a), StyleInput::Composite(b)) => {
                a.len() == b.len()
                    && a.iter().zip(b).all(|pair| match pair {
                        (Some(a), Some(b)) => a.same_as(b),
                        (None, None) => true,
                        _ => false,
                    })
            }
            _ => false,
        }
    }
}

impl From<Style> for StyleInput {
    fn from(style: Style) -> Self {
        StyleInput::Static(style)
    }
}

impl fmt::Debug for StyleInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleInput::Static(style) => f.debug_tuple("Static").field(style).finish(),
            StyleInput::Dynamic(_) => f.write_str("Dynamic(..)"),
            StyleInput::Composite(entries) => f.debug_tuple("Composite").field(entries).finish(),
        }
    }
}

/// Style handed to a primitive
#[derive(Clone)]
pub enum FlatStyle {
    Static(Style),
    /// Evaluated by the primitive with its live interaction state
    Deferred(DynamicStyle),
}

impl FlatStyle {
    /// Style for a given state
    pub fn at(&self, state: &InteractionState) -> Style {
        match self {
            FlatStyle::Static(style) => style.clone(),
            FlatStyle::Deferred(f) => f(state),
        }
    }

    pub fn is_deferred(&self) -> bool {
        matches!(self, FlatStyle::Deferred(_))
    }

    /// Layer `bottom` under and `top` over this style
    pub(crate) fn layered(self, bottom: Style, top: Style) -> FlatStyle {
        match self {
            FlatStyle::Static(style) => {
                let mut out = bottom;
                out.extend_from(&style);
                out.extend_from(&top);
                FlatStyle::Static(out)
            }
            FlatStyle::Deferred(f) => FlatStyle::Deferred(Rc::new(move |state: &InteractionState| {
                let mut out = bottom.clone();
                out.extend_from(&f(state));
                out.extend_from(&top);
                out
            })),
        }
    }
}

impl Default for FlatStyle {
    fn default() -> Self {
        FlatStyle::Static(Style::new())
    }
}

impl fmt::Debug for FlatStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlatStyle::Static(style) => f.debug_tuple("Static").field(style).finish(),
            FlatStyle::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}
