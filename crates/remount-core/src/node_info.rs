use std::fmt;
use std::rc::Rc;

use smallvec::SmallVec;

use crate::{Color, Edges};

pub type Callback = Rc<dyn Fn()>;
pub type LongClickCallback = Rc<dyn Fn() -> bool>;
pub type FocusCallback = Rc<dyn Fn(bool)>;
pub type TouchCallback = Rc<dyn Fn(TouchPhase) -> bool>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchPhase {
    Down,
    Move,
    Up,
    Cancel,
}

/// Accessibility delegate hooks a component can override.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AccessibilityHook {
    DispatchPopulateEvent,
    InitializeEvent,
    InitializeNodeInfo,
    PopulateEvent,
    RequestSendEvent,
    PerformAction,
    SendEvent,
    SendEventUnchecked,
}

/// Interaction and accessibility data for one mounted item.
///
/// Shared between mount records through [`Descriptor`](crate::Descriptor).
#[derive(Clone, Default)]
pub struct NodeInfo {
    pub content_description: Option<String>,
    pub view_tag: Option<String>,
    click: Option<Callback>,
    long_click: Option<LongClickCallback>,
    focus_change: Option<FocusCallback>,
    touch: Option<TouchCallback>,
    intercept_touch: Option<TouchCallback>,
    accessibility: SmallVec<[(AccessibilityHook, Callback); 2]>,
}

impl NodeInfo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content_description(mut self, text: impl Into<String>) -> Self {
        self.content_description = Some(text.into());
        self
    }

    pub fn view_tag(mut self, tag: impl Into<String>) -> Self {
        self.view_tag = Some(tag.into());
        self
    }

    pub fn on_click(mut self, f: impl Fn() + 'static) -> Self {
        self.click = Some(Rc::new(f));
        self
    }

    pub fn on_long_click(mut self, f: impl Fn() -> bool + 'static) -> Self {
        self.long_click = Some(Rc::new(f));
        self
    }

    pub fn on_focus_change(mut self, f: impl Fn(bool) + 'static) -> Self {
        self.focus_change = Some(Rc::new(f));
        self
    }

    pub fn on_touch(mut self, f: impl Fn(TouchPhase) -> bool + 'static) -> Self {
        self.touch = Some(Rc::new(f));
        self
    }

    pub fn on_intercept_touch(mut self, f: impl Fn(TouchPhase) -> bool + 'static) -> Self {
        self.intercept_touch = Some(Rc::new(f));
        self
    }

    /// Installs an accessibility delegate hook, replacing any previous one for
    /// the same hook.
    pub fn on_accessibility(mut self, hook: AccessibilityHook, f: impl Fn() + 'static) -> Self {
        self.accessibility.retain(|(h, _)| *h != hook);
        self.accessibility.push((hook, Rc::new(f)));
        self
    }

    pub fn click_handler(&self) -> Option<&Callback> {
        self.click.as_ref()
    }

    pub fn long_click_handler(&self) -> Option<&LongClickCallback> {
        self.long_click.as_ref()
    }

    pub fn focus_change_handler(&self) -> Option<&FocusCallback> {
        self.focus_change.as_ref()
    }

    pub fn touch_handler(&self) -> Option<&TouchCallback> {
        self.touch.as_ref()
    }

    pub fn intercept_touch_handler(&self) -> Option<&TouchCallback> {
        self.intercept_touch.as_ref()
    }

    pub fn accessibility_handler(&self, hook: AccessibilityHook) -> Option<&Callback> {
        self.accessibility
            .iter()
            .find(|(h, _)| *h == hook)
            .map(|(_, f)| f)
    }

    /// True if any accessibility delegate hook is installed.
    pub fn has_accessibility_handlers(&self) -> bool {
        !self.accessibility.is_empty()
    }

    pub fn has_touch_event_handlers(&self) -> bool {
        self.click.is_some()
            || self.long_click.is_some()
            || self.touch.is_some()
            || self.intercept_touch.is_some()
    }
}

impl fmt::Debug for NodeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hooks: SmallVec<[AccessibilityHook; 2]> =
            self.accessibility.iter().map(|(h, _)| *h).collect();
        f.debug_struct("NodeInfo")
            .field("content_description", &self.content_description)
            .field("view_tag", &self.view_tag)
            .field("on_click", &self.click.is_some())
            .field("on_long_click", &self.long_click.is_some())
            .field("on_focus_change", &self.focus_change.is_some())
            .field("on_touch", &self.touch.is_some())
            .field("on_intercept_touch", &self.intercept_touch.is_some())
            .field("accessibility", &hooks)
            .finish()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LayoutDirection {
    #[default]
    Inherit,
    Ltr,
    Rtl,
}

/// Metadata that only applies when the content is a view.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewNodeInfo {
    pub background: Option<Color>,
    pub foreground: Option<Color>,
    pub padding: Option<Edges>,
    pub layout_direction: LayoutDirection,
    /// Extra hit area around the view's bounds.
    pub touch_expansion: Option<Edges>,
}

impl ViewNodeInfo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background(mut self, c: Color) -> Self {
        self.background = Some(c);
        self
    }

    pub fn foreground(mut self, c: Color) -> Self {
        self.foreground = Some(c);
        self
    }

    pub fn padding(mut self, e: Edges) -> Self {
        self.padding = Some(e);
        self
    }

    pub fn layout_direction(mut self, d: LayoutDirection) -> Self {
        self.layout_direction = d;
        self
    }

    pub fn touch_expansion(mut self, e: Edges) -> Self {
        self.touch_expansion = Some(e);
        self
    }

    pub fn has_padding(&self) -> bool {
        self.padding.is_some_and(|p| !p.is_zero())
    }
}
