use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;

use pretty_assertions::assert_eq;
use tessera_style::{
    styled_pressable, styled_text, styled_view, FlatStyle, InteractionState, Lx, NodeRef,
    PressableKind, Primitive, Style, StyleError, StyleInput, StyleKey, StyledProps, TextKind,
    Typography, ViewKind,
};
use tessera_theme::{presets, NoPreference, Scope, ThemeError, ThemeProvider};

/// What the fake primitive produced
#[derive(Clone, Debug, PartialEq)]
struct Rendered {
    label: String,
    idle: Style,
    pressed: Style,
    deferred: bool,
}

/// Host primitive that records how often it renders and mounts a handle
struct Fake {
    name: &'static str,
    renders: Rc<Cell<usize>>,
}

impl Fake {
    fn new(name: &'static str) -> Self {
        Self {
            name,
            renders: Rc::new(Cell::new(0)),
        }
    }
}

impl Primitive for Fake {
    type Props = String;
    type Handle = &'static str;
    type Node = Rendered;

    fn display_name(&self) -> &str {
        self.name
    }

    fn render(
        &self,
        label: &String,
        style: &FlatStyle,
        node_ref: Option<&NodeRef<&'static str>>,
    ) -> Rendered {
        self.renders.set(self.renders.get() + 1);
        if let Some(node_ref) = node_ref {
            node_ref.set(self.name);
        }
        Rendered {
            label: label.clone(),
            idle: style.at(&InteractionState::idle()),
            pressed: style.at(&InteractionState::pressed()),
            deferred: style.is_deferred(),
        }
    }
}

type ViewProps = StyledProps<Fake, ViewKind>;
type TextProps = StyledProps<Fake, TextKind>;
type PressableProps = StyledProps<Fake, PressableKind>;

fn provider() -> ThemeProvider {
    ThemeProvider::new(Arc::new(presets::default_table()), NoPreference)
}

fn opacity_on_press() -> StyleInput {
    StyleInput::dynamic(|state| {
        Style::new().with(StyleKey::Opacity, if state.pressed { 0.5 } else { 1.0 })
    })
}

#[test]
fn display_names_wrap_the_base_name() {
    assert_eq!(styled_view(Fake::new("View")).display_name(), "StyledView(View)");
    assert_eq!(styled_text(Fake::new("Text")).display_name(), "StyledText(Text)");
    assert_eq!(
        styled_pressable(Fake::new("Pressable")).display_name(),
        "StyledPressable(Pressable)"
    );
}

#[test]
fn pressable_defers_style_functions() {
    let provider = provider();
    let mut button = styled_pressable(Fake::new("Pressable"));
    let props = PressableProps::new("ok".to_string()).style(StyleInput::composite([
        Some(StyleInput::Static(Style::new().with(StyleKey::Padding, 10))),
        Some(opacity_on_press()),
        Some(StyleInput::Static(Style::new().with(StyleKey::Margin, 5))),
    ]));

    let node = button.render(&provider.scope(), &props).unwrap();
    assert!(node.deferred);
    assert_eq!(
        node.idle,
        Style::new()
            .with(StyleKey::Padding, 10)
            .with(StyleKey::Opacity, 1.0)
            .with(StyleKey::Margin, 5)
    );
    assert_eq!(
        node.pressed,
        Style::new()
            .with(StyleKey::Padding, 10)
            .with(StyleKey::Opacity, 0.5)
            .with(StyleKey::Margin, 5)
    );
}

#[test]
fn pressable_lx_applies_in_every_state() {
    let provider = provider();
    let mut button = styled_pressable(Fake::new("Pressable"));
    let props = PressableProps::new("ok".to_string())
        .lx(Lx::new().padding("s16"))
        .style(StyleInput::composite([
            Some(StyleInput::Static(Style::new().with(StyleKey::Padding, 10))),
            Some(opacity_on_press()),
        ]));

    let node = button.render(&provider.scope(), &props).unwrap();
    assert_eq!(node.idle.get(&StyleKey::Padding), node.pressed.get(&StyleKey::Padding));
    assert_eq!(node.pressed.get_named("padding").and_then(|v| v.as_f64()), Some(16.0));
}

#[test]
fn static_pressable_style_is_eager() {
    let provider = provider();
    let mut button = styled_pressable(Fake::new("Pressable"));
    let props = PressableProps::new(String::new()).style(Style::new().with(StyleKey::Opacity, 0.9));
    assert!(!button.render(&provider.scope(), &props).unwrap().deferred);
}

#[test]
fn view_tolerates_null_entries() {
    let provider = provider();
    let mut view = styled_view(Fake::new("View"));
    let props = ViewProps::new(String::new()).style(StyleInput::composite([
        None,
        Some(StyleInput::Static(Style::new().with(StyleKey::Opacity, 0.8))),
        None,
    ]));

    let node = view.render(&provider.scope(), &props).unwrap();
    assert_eq!(node.idle, Style::new().with(StyleKey::Opacity, 0.8));
}

#[test]
fn view_evaluates_functions_at_rest() {
    let provider = provider();
    let mut view = styled_view(Fake::new("View"));
    let props = ViewProps::new(String::new()).style(opacity_on_press());

    let node = view.render(&provider.scope(), &props).unwrap();
    assert!(!node.deferred);
    assert_eq!(node.pressed, Style::new().with(StyleKey::Opacity, 1.0));
}

#[test]
fn lx_overrides_caller_style() {
    let provider = provider();
    let mut view = styled_view(Fake::new("View"));
    let props = ViewProps::new(String::new())
        .lx(Lx::new().padding("s16"))
        .style(Style::new().with(StyleKey::Padding, 24).with(StyleKey::Flex, 1));

    let node = view.render(&provider.scope(), &props).unwrap();
    assert_eq!(
        node.idle,
        Style::new()
            .with(StyleKey::Padding, 16)
            .with(StyleKey::Flex, 1)
    );
}

#[test]
fn equal_props_skip_resolution() {
    let provider = provider();
    let base = Fake::new("View");
    let renders = base.renders.clone();
    let mut view = styled_view(base);
    let style = StyleInput::composite([Some(opacity_on_press())]);

    let props = || {
        ViewProps::new("card".to_string())
            .lx(Lx::new().padding("s16").bg("surface"))
            .style(style.clone())
    };

    let first = view.render(&provider.scope(), &props()).unwrap();
    let second = view.render(&provider.scope(), &props()).unwrap();
    assert_eq!(first, second);
    assert_eq!(view.resolve_count(), 1);
    assert_eq!(renders.get(), 1);

    let changed = props().lx(Lx::new().padding("s8").bg("surface"));
    view.render(&provider.scope(), &changed).unwrap();
    view.render(&provider.scope(), &changed).unwrap();
    assert_eq!(view.resolve_count(), 2);
    assert_eq!(renders.get(), 2);
}

#[test]
fn new_style_function_is_a_change() {
    let provider = provider();
    let mut view = styled_view(Fake::new("View"));

    view.render(&provider.scope(), &ViewProps::new(String::new()).style(opacity_on_press()))
        .unwrap();
    view.render(&provider.scope(), &ViewProps::new(String::new()).style(opacity_on_press()))
        .unwrap();
    assert_eq!(view.resolve_count(), 2);
}

#[test]
fn refs_reach_the_primitive() {
    let provider = provider();
    let mut view = styled_view(Fake::new("View"));
    let node_ref = NodeRef::<&'static str>::new();
    assert_eq!(node_ref.get(), None);

    view.render(&provider.scope(), &ViewProps::new(String::new()).node_ref(&node_ref))
        .unwrap();
    assert_eq!(node_ref.get(), Some("View"));
}

#[test]
fn text_merges_typography_under_style_under_lx() {
    let provider = provider();
    let mut text = styled_text(Fake::new("Text"));
    let props = TextProps::new("hello".to_string())
        .typography(Typography::body("body2"))
        .style(
            Style::new()
                .with(StyleKey::FontSize, 18)
                .with(StyleKey::Color, "red"),
        )
        .lx(Lx::new().color("muted"));

    let node = text.render(&provider.scope(), &props).unwrap();
    assert_eq!(node.label, "hello");
    assert_eq!(
        node.idle,
        Style::new()
            .with(StyleKey::FontSize, 18)
            .with(StyleKey::FontWeight, "400")
            .with(StyleKey::LineHeight, 20.0)
            .with(StyleKey::LetterSpacing, 0.0)
            .with(StyleKey::Color, "#52525B")
    );
}

#[test]
fn typography_change_rerenders_text() {
    let provider = provider();
    let mut text = styled_text(Fake::new("Text"));
    let body1 = TextProps::new(String::new()).typography(Typography::body("body1"));
    let body3 = TextProps::new(String::new()).typography(Typography::body("body3"));

    text.render(&provider.scope(), &body1).unwrap();
    text.render(&provider.scope(), &body1.clone()).unwrap();
    let node = text.render(&provider.scope(), &body3).unwrap();
    assert_eq!(text.resolve_count(), 2);
    assert_eq!(node.idle.get_named("fontSize").and_then(|v| v.as_f64()), Some(12.0));
}

#[test]
fn unknown_typography_preset_fails() {
    let provider = provider();
    let mut text = styled_text(Fake::new("Text"));
    let props = TextProps::new(String::new()).typography(Typography::heading("h9"));
    let err = text.render(&provider.scope(), &props).unwrap_err();
    assert!(err.is_unknown_token());
}

#[test]
fn rendering_outside_a_provider_fails() {
    let mut view = styled_view(Fake::new("View"));
    let err = view
        .render(&Scope::root(), &ViewProps::new(String::new()))
        .unwrap_err();
    assert!(matches!(
        err,
        StyleError::Theme(ThemeError::MissingProvider { consumer: "StyledView" })
    ));
    assert_eq!(view.resolve_count(), 0);
}
