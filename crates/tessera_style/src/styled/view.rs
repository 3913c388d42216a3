//! Box/layout styled components

use tessera_theme::ThemeContext;

use super::{Styled, StyledKind};
use crate::error::Result;
use crate::input::{FlatStyle, InteractionState, StyleInput};
use crate::lx::Lx;
use crate::primitive::Primitive;
use crate::resolve::Resolver;
use crate::style::Style;

/// Flavor for box/layout primitives
///
/// Style functions are evaluated once with the idle interaction state.
#[derive(Clone, Copy, Debug)]
pub struct ViewKind;

impl StyledKind for ViewKind {
    const NAME: &'static str = "StyledView";
    type Extra = ();

    fn compose(
        resolver: &Resolver,
        context: &ThemeContext,
        lx: &Lx,
        style: Option<&StyleInput>,
        _: &(),
    ) -> Result<FlatStyle> {
        let caller = style
            .map(|style| style.resolve(&InteractionState::idle()))
            .unwrap_or_default();
        let resolved = resolver.resolve_view(context.theme(), lx, None)?;
        Ok(FlatStyle::Static(caller).layered(Style::new(), resolved))
    }
}

/// Wrap a box/layout primitive
pub fn styled_view<P: Primitive>(base: P) -> Styled<P, ViewKind> {
    Styled::new(base)
}
