//! Styled component factories
//!
//! A styled component wraps a base [`Primitive`] and adds the `lx` prop. On
//! each render it resolves `lx` against the theme in scope, merges it over
//! the caller's `style` and hands the result to the primitive together with
//! the caller's ref.
//!
//! Three flavors exist:
//!
//! - [`styled_view`]: box/layout primitives
//! - [`styled_text`]: text primitives, with an optional typography preset
//! - [`styled_pressable`]: primitives that evaluate style functions against
//!   their live interaction state
//!
//! Re-rendering with shallow-equal props under the same theme generation
//! returns the previous node without resolving anything.

mod pressable;
mod text;
mod view;

pub use pressable::{styled_pressable, PressableKind};
pub use text::{styled_text, TextKind};
pub use view::{styled_view, ViewKind};

use std::fmt;
use std::marker::PhantomData;

use tessera_theme::{Generation, Scope, ThemeContext};

use crate::config::ResolverConfig;
use crate::error::Result;
use crate::input::{FlatStyle, StyleInput};
use crate::lx::Lx;
use crate::primitive::{NodeRef, Primitive};
use crate::resolve::Resolver;

/// How a flavor of styled component composes its final style
pub trait StyledKind {
    /// Display-name prefix, also reported by missing-provider errors
    const NAME: &'static str;

    /// Flavor-specific props
    type Extra: Clone + PartialEq + Default;

    fn compose(
        resolver: &Resolver,
        context: &ThemeContext,
        lx: &Lx,
        style: Option<&StyleInput>,
        extra: &Self::Extra,
    ) -> Result<FlatStyle>;
}

/// Props of a styled component
pub struct StyledProps<P: Primitive, K: StyledKind> {
    pub props: P::Props,
    pub lx: Lx,
    pub style: Option<StyleInput>,
    pub extra: K::Extra,
    pub node_ref: Option<NodeRef<P::Handle>>,
}

impl<P: Primitive, K: StyledKind> StyledProps<P, K> {
    pub fn new(props: P::Props) -> Self {
        Self {
            props,
            lx: Lx::new(),
            style: None,
            extra: K::Extra::default(),
            node_ref: None,
        }
    }

    pub fn lx(mut self, lx: Lx) -> Self {
        self.lx = lx;
        self
    }

    pub fn style(mut self, style: impl Into<StyleInput>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn node_ref(mut self, node_ref: &NodeRef<P::Handle>) -> Self {
        self.node_ref = Some(node_ref.clone());
        self
    }
}

impl<P: Primitive, K: StyledKind> Clone for StyledProps<P, K> {
    fn clone(&self) -> Self {
        Self {
            props: self.props.clone(),
            lx: self.lx.clone(),
            style: self.style.clone(),
            extra: self.extra.clone(),
            node_ref: self.node_ref.clone(),
        }
    }
}

struct Memo<P: Primitive, K: StyledKind> {
    generation: Generation,
    props: StyledProps<P, K>,
    node: P::Node,
}

impl<P: Primitive, K: StyledKind> Memo<P, K> {
    fn matches(&self, generation: Generation, props: &StyledProps<P, K>) -> bool {
        self.generation == generation
            && self.props.lx == props.lx
            && same_style(self.props.style.as_ref(), props.style.as_ref())
            && self.props.props == props.props
            && self.props.extra == props.extra
            && same_ref(self.props.node_ref.as_ref(), props.node_ref.as_ref())
    }
}

fn same_style(a: Option<&StyleInput>, b: Option<&StyleInput>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a.same_as(b),
        (None, None) => true,
        _ => false,
    }
}

fn same_ref<H>(a: Option<&NodeRef<H>>, b: Option<&NodeRef<H>>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a.ptr_eq(b),
        (None, None) => true,
        _ => false,
    }
}

/// A primitive wrapped with token resolution
pub struct Styled<P: Primitive, K: StyledKind> {
    base: P,
    resolver: Resolver,
    display_name: String,
    memo: Option<Memo<P, K>>,
    resolve_count: usize,
    _kind: PhantomData<K>,
}

impl<P: Primitive, K: StyledKind> Styled<P, K> {
    pub(crate) fn new(base: P) -> Self {
        let display_name = format!("{}({})", K::NAME, base.display_name());
        Self {
            base,
            resolver: Resolver::default(),
            display_name,
            memo: None,
            resolve_count: 0,
            _kind: PhantomData,
        }
    }

    /// Use a non-default resolver config
    pub fn with_resolver(mut self, config: ResolverConfig) -> Self {
        self.resolver = Resolver::new(config);
        self.memo = None;
        self
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn base(&self) -> &P {
        &self.base
    }

    /// Number of renders that resolved styles instead of reusing the last node
    pub fn resolve_count(&self) -> usize {
        self.resolve_count
    }

    /// Render under the theme in `scope`
    pub fn render(&mut self, scope: &Scope<'_>, props: &StyledProps<P, K>) -> Result<P::Node> {
        let context = scope.context(K::NAME)?;
        let generation = context.generation();

        if let Some(memo) = &self.memo {
            if memo.matches(generation, props) {
                tracing::trace!(
                    "{}: props unchanged at {}, skipping",
                    self.display_name,
                    generation
                );
                return Ok(memo.node.clone());
            }
        }

        let style = K::compose(
            &self.resolver,
            context,
            &props.lx,
            props.style.as_ref(),
            &props.extra,
        )?;
        self.resolve_count += 1;

        let node = self.base.render(&props.props, &style, props.node_ref.as_ref());
        self.memo = Some(Memo {
            generation,
            props: props.clone(),
            node: node.clone(),
        });
        Ok(node)
    }
}

impl<P: Primitive, K: StyledKind> fmt::Debug for Styled<P, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Styled")
            .field("display_name", &self.display_name)
            .field("resolver", &self.resolver)
            .field("resolve_count", &self.resolve_count)
            .finish()
    }
}
