//! Pressable styled components

use tessera_theme::ThemeContext;

use super::{Styled, StyledKind};
use crate::error::Result;
use crate::input::{FlatStyle, StyleInput};
use crate::lx::Lx;
use crate::primitive::Primitive;
use crate::resolve::Resolver;
use crate::style::Style;

/// Flavor for pressable primitives
///
/// When any entry of the caller's style is a function, the primitive
/// receives a deferred style and evaluates it with its own interaction
/// state. The resolved `lx` is applied on top for every state.
#[derive(Clone, Copy, Debug)]
pub struct PressableKind;

impl StyledKind for PressableKind {
    const NAME: &'static str = "StyledPressable";
    type Extra = ();

    fn compose(
        resolver: &Resolver,
        context: &ThemeContext,
        lx: &Lx,
        style: Option<&StyleInput>,
        _: &(),
    ) -> Result<FlatStyle> {
        let caller = style.map(StyleInput::flatten).unwrap_or_default();
        let resolved = resolver.resolve_view(context.theme(), lx, None)?;
        Ok(caller.layered(Style::new(), resolved))
    }
}

/// Wrap a pressable primitive
pub fn styled_pressable<P: Primitive>(base: P) -> Styled<P, PressableKind> {
    Styled::new(base)
}
