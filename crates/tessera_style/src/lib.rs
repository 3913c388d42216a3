//! Tessera Style
//!
//! Turns style intents written with design-token names into flat platform
//! styles, reading tokens from the theme in scope.
//!
//! # Overview
//!
//! - [`Lx`]: style-intent object, token names for tokenized properties and
//!   literals for everything else
//! - [`Resolver`]: view and text resolution of an [`Lx`] into a [`Style`]
//! - [`StyleSheetBuilder`]: theme-aware stylesheets memoized on theme
//!   generation and caller dependencies
//! - [`styled_view`], [`styled_text`], [`styled_pressable`]: wrap a
//!   host [`Primitive`] so it accepts `lx`
//!
//! # Quick Start
//!
//! ```rust
//! use tessera_style::{resolve_view_style, Lx, Style, StyleKey};
//! use tessera_theme::Theme;
//!
//! let theme = Theme::light();
//! let style = resolve_view_style(&theme, &Lx::new().padding("s16").width("full"), None).unwrap();
//! assert_eq!(
//!     style,
//!     Style::new().with(StyleKey::Padding, 16).with(StyleKey::Width, "100%")
//! );
//! ```

pub mod config;
pub mod error;
pub mod input;
pub mod key;
pub mod lx;
pub mod primitive;
pub mod resolve;
pub mod style;
pub mod styled;
pub mod stylesheet;
pub mod value;

pub use config::{ResolverConfig, UnknownTokenPolicy};
pub use error::{Result, StyleError};
pub use input::{DynamicStyle, FlatStyle, InteractionState, StyleInput};
pub use key::{PropertyClass, StyleKey};
pub use lx::Lx;
pub use primitive::{NodeRef, Primitive};
pub use resolve::{
    resolve_text_style, resolve_view_style, typography_style, Resolver, Typography, Variant,
    FULL_SIZE,
};
pub use style::Style;
pub use styled::{
    styled_pressable, styled_text, styled_view, PressableKind, Styled, StyledKind, StyledProps,
    TextKind, ViewKind,
};
pub use stylesheet::{ParametricStyle, StyleSheet, StyleSheetBuilder, StyleSlot};
pub use value::{BoxShadow, StyleValue};
