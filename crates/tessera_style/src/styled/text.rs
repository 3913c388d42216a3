//! Text styled components

use tessera_theme::ThemeContext;

use super::{Styled, StyledKind, StyledProps};
use crate::error::Result;
use crate::input::{FlatStyle, InteractionState, StyleInput};
use crate::lx::Lx;
use crate::primitive::Primitive;
use crate::resolve::{typography_style, Resolver, Typography};
use crate::style::Style;

/// Flavor for text primitives
///
/// The typography preset, read at the provider's breakpoint, sits below the
/// caller's style, which sits below the resolved `lx`.
#[derive(Clone, Copy, Debug)]
pub struct TextKind;

impl StyledKind for TextKind {
    const NAME: &'static str = "StyledText";
    type Extra = Option<Typography>;

    fn compose(
        resolver: &Resolver,
        context: &ThemeContext,
        lx: &Lx,
        style: Option<&StyleInput>,
        typography: &Option<Typography>,
    ) -> Result<FlatStyle> {
        let theme = context.theme();
        let preset = match typography {
            Some(typography) => typography_style(theme, context.breakpoint(), typography)?,
            None => Style::new(),
        };
        let caller = style
            .map(|style| style.resolve(&InteractionState::idle()))
            .unwrap_or_default();
        let resolved = resolver.resolve_text(theme, lx, None)?;
        Ok(FlatStyle::Static(caller).layered(preset, resolved))
    }
}

impl<P: Primitive> StyledProps<P, TextKind> {
    pub fn typography(mut self, typography: Typography) -> Self {
        self.extra = Some(typography);
        self
    }
}

/// Wrap a text primitive
pub fn styled_text<P: Primitive>(base: P) -> Styled<P, TextKind> {
    Styled::new(base)
}
