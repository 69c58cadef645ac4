//! A single-line text input with a tappable clear icon.
//!
//! [`ClearableLineEdit`] wraps a [`LineEdit`] and decorates it with a clear
//! icon while the field contains text. Tapping the icon empties the field.
//! The icon sits on the trailing edge of the field: the right edge in
//! left-to-right layouts, the left edge in right-to-left layouts, resolved
//! once at construction from the active locale.
//!
//! # Example
//!
//! ```
//! use clearedit::widget::widgets::ClearableLineEdit;
//! use clearedit::platform::TextDirection;
//!
//! clearedit_core::init_global_registry();
//!
//! let mut edit = ClearableLineEdit::with_text("search terms")
//!     .with_layout_direction(TextDirection::Ltr);
//!
//! edit.set_on_clear(|edit| {
//!     assert_eq!(edit.text(), "");
//! });
//! ```

use clearedit_core::{Object, ObjectId};
use clearedit_render::{Color, Icon, StateColorList};

use crate::icons;
use crate::platform::{SystemLocale, TextDirection};
use crate::widget::{
    MouseButton, MouseCancelEvent, PaintContext, SizeHint, Widget, WidgetBase, WidgetEvent,
};

use super::line_edit::LineEdit;

/// Extra tappable margin beyond the drawn icon, in layout units.
///
/// The hit region extends this far past the icon's own width so the tap
/// target stays forgiving on small fields.
pub const EXTRA_TAP_MARGIN: f32 = 20.0;

/// Styling attributes consumed by [`ClearableLineEdit`] at construction.
///
/// All attributes are optional: the icon name defaults to the built-in
/// clear glyph, and with neither tint configured the icon renders with its
/// native colors. When both a flat tint and a tint list are supplied, the
/// tint is applied first and the list after it, so the list wins.
#[derive(Debug, Clone)]
pub struct ClearIconStyle {
    /// Name of the icon to resolve through the icon registry.
    icon_name: String,
    /// Flat tint color.
    tint: Option<Color>,
    /// State-dependent tint colors.
    tint_list: Option<StateColorList>,
}

impl ClearIconStyle {
    /// Create a style with all defaults.
    pub fn new() -> Self {
        Self {
            icon_name: icons::EDIT_CLEAR.to_string(),
            tint: None,
            tint_list: None,
        }
    }

    /// Use a different icon from the icon registry.
    pub fn with_icon_name(mut self, name: impl Into<String>) -> Self {
        self.icon_name = name.into();
        self
    }

    /// Apply a flat tint to the icon.
    pub fn with_tint(mut self, tint: Color) -> Self {
        self.tint = Some(tint);
        self
    }

    /// Apply state-dependent tint colors to the icon.
    pub fn with_tint_list(mut self, list: StateColorList) -> Self {
        self.tint_list = Some(list);
        self
    }

    /// The configured icon name.
    pub fn icon_name(&self) -> &str {
        &self.icon_name
    }
}

impl Default for ClearIconStyle {
    fn default() -> Self {
        Self::new()
    }
}

/// Handler invoked after the field was cleared by an icon tap.
type ClearHandler = Box<dyn FnMut(&ClearableLineEdit) + Send + Sync>;

/// A single-line text input that clears itself when its clear icon is
/// tapped.
///
/// The clear icon is shown if and only if the field contains text; this is
/// re-evaluated synchronously on every text change and at construction, so
/// a pre-populated field starts with the icon visible.
///
/// On a mouse release inside the icon's hit region the widget empties the
/// field, suppresses the release's default click effect (the wrapped field
/// sees a cancelled interaction instead), and invokes the registered clear
/// handler. Releases outside the region, and all other events, are
/// delegated to the wrapped [`LineEdit`] unchanged.
pub struct ClearableLineEdit {
    /// The wrapped text field.
    edit: LineEdit,

    /// The resolved clear icon. `None` when the configured icon name did
    /// not resolve; every icon behavior is a no-op in that case.
    clear_icon: Option<Icon>,

    /// Layout direction, resolved once at construction.
    direction: TextDirection,

    /// The clear handler slot. Single slot: the last registration wins.
    on_clear: Option<ClearHandler>,
}

impl ClearableLineEdit {
    /// Create an empty field with default styling.
    pub fn new() -> Self {
        Self::with_style(ClearIconStyle::default())
    }

    /// Create an empty field from styling attributes.
    ///
    /// Resolves the configured icon once through the icon registry and the
    /// layout direction once from the active locale, then evaluates the
    /// initial icon visibility against the current text.
    pub fn with_style(style: ClearIconStyle) -> Self {
        let clear_icon = icons::resolve(style.icon_name()).map(|mut icon| {
            // Application order matters: flat tint first, then the state
            // list, so the list overrides it.
            if let Some(tint) = style.tint {
                icon.set_tint(tint);
            }
            if let Some(list) = style.tint_list {
                icon.set_tint_list(list);
            }
            icon
        });

        let mut widget = Self {
            edit: LineEdit::new(),
            clear_icon,
            direction: SystemLocale::direction(),
            on_clear: None,
        };
        widget.refresh_clear_icon();
        widget
    }

    /// Create a field pre-populated with text, default styling.
    pub fn with_text(text: impl Into<String>) -> Self {
        let mut widget = Self::new();
        widget.edit.set_text(text);
        widget.refresh_clear_icon();
        widget
    }

    /// Override the layout direction resolved at construction.
    ///
    /// The locale query is ambient state; this is the deterministic seam
    /// for hosts (and tests) that manage direction themselves.
    pub fn with_layout_direction(mut self, direction: TextDirection) -> Self {
        self.direction = direction;
        self.refresh_clear_icon();
        self
    }

    /// Set the placeholder text shown while the field is empty.
    pub fn with_placeholder(mut self, text: impl Into<String>) -> Self {
        self.edit.set_placeholder(text);
        self
    }

    // =========================================================================
    // Text Access
    // =========================================================================

    /// Get the current text.
    pub fn text(&self) -> &str {
        self.edit.text()
    }

    /// Set the text content.
    ///
    /// The icon visibility is re-evaluated in the same call, before control
    /// returns to the caller.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.edit.set_text(text);
        self.refresh_clear_icon();
    }

    /// Clear all text.
    pub fn clear(&mut self) {
        self.set_text("");
    }

    /// Get the text length in characters.
    pub fn text_length(&self) -> usize {
        self.edit.text_length()
    }

    /// Access the wrapped text field.
    pub fn line_edit(&self) -> &LineEdit {
        &self.edit
    }

    // =========================================================================
    // Clear Icon
    // =========================================================================

    /// The resolved clear icon, if the configured resource resolved.
    pub fn clear_icon(&self) -> Option<&Icon> {
        self.clear_icon.as_ref()
    }

    /// Whether the clear icon is currently shown.
    pub fn clear_icon_visible(&self) -> bool {
        self.edit.left_icon().is_some() || self.edit.right_icon().is_some()
    }

    /// The layout direction the widget was constructed with.
    pub fn layout_direction(&self) -> TextDirection {
        self.direction
    }

    /// Register the clear handler, replacing any previous one.
    ///
    /// A single slot: the last registration wins. The handler is invoked
    /// synchronously, after the text has been cleared, with a reference to
    /// this widget.
    pub fn set_on_clear<F>(&mut self, handler: F)
    where
        F: FnMut(&ClearableLineEdit) + Send + Sync + 'static,
    {
        self.on_clear = Some(Box::new(handler));
    }

    /// Re-evaluate icon visibility against the current text and place the
    /// icon on the trailing edge for the resolved direction.
    fn refresh_clear_icon(&mut self) {
        let Some(icon) = self.clear_icon.clone() else {
            return;
        };

        if self.edit.text().is_empty() {
            self.edit.clear_compound_icons();
        } else if self.direction.is_rtl() {
            self.edit.set_compound_icons(Some(icon), None);
        } else {
            self.edit.set_compound_icons(None, Some(icon));
        }
    }

    /// Whether an x coordinate falls inside the clear icon's hit region.
    ///
    /// The bound is computed from the icon's own display width plus
    /// [`EXTRA_TAP_MARGIN`], in the field-bounds coordinate space: at the
    /// right edge for left-to-right layouts and mirrored at the left edge
    /// for right-to-left layouts.
    fn hits_clear_region(&self, icon: &Icon, local_x: f32) -> bool {
        let bounds = self.edit.geometry();
        let icon_width = icon.display_size().width;
        let x = local_x + bounds.left();

        if self.direction.is_rtl() {
            x <= bounds.left() + icon_width + EXTRA_TAP_MARGIN
        } else {
            x >= bounds.right() - icon_width - EXTRA_TAP_MARGIN
        }
    }

    /// Invoke the clear handler, if one is registered.
    fn notify_cleared(&mut self) {
        if let Some(mut handler) = self.on_clear.take() {
            handler(&*self);
            self.on_clear = Some(handler);
        }
    }
}

impl Default for ClearableLineEdit {
    fn default() -> Self {
        Self::new()
    }
}

impl Object for ClearableLineEdit {
    fn object_id(&self) -> ObjectId {
        self.edit.object_id()
    }
}

impl Widget for ClearableLineEdit {
    fn widget_base(&self) -> &WidgetBase {
        self.edit.widget_base()
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        self.edit.widget_base_mut()
    }

    fn size_hint(&self) -> SizeHint {
        self.edit.size_hint()
    }

    fn paint(&self, ctx: &mut PaintContext<'_>) {
        self.edit.paint(ctx);
    }

    fn event(&mut self, event: &mut WidgetEvent) -> bool {
        let release_x = match event {
            WidgetEvent::MouseRelease(release) if release.button == MouseButton::Left => {
                Some(release.local_pos.x)
            }
            _ => None,
        };

        if let Some(x) = release_x {
            let hit = match &self.clear_icon {
                Some(icon) if self.clear_icon_visible() => self.hits_clear_region(icon, x),
                _ => false,
            };

            if hit {
                self.set_text("");
                event.accept();
                self.notify_cleared();

                // The wrapped field must not treat the consumed release as
                // a click, so it sees a cancelled interaction instead.
                let mut cancel = WidgetEvent::MouseCancel(MouseCancelEvent::new());
                self.edit.event(&mut cancel);
                return true;
            }

            return self.edit.event(event);
        }

        let handled = self.edit.event(event);
        if matches!(event, WidgetEvent::KeyPress(_)) {
            self.refresh_clear_icon();
        }
        handled
    }
}

static_assertions::assert_impl_all!(ClearableLineEdit: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Arc;

    use clearedit_core::init_global_registry;
    use clearedit_render::{
        DisplayListRenderer, DrawCommand, IconState, Point, Rect,
    };

    use crate::widget::{Key, KeyPressEvent, KeyboardModifiers, MouseReleaseEvent};

    fn setup() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("clearedit=trace")
            .try_init();
        init_global_registry();
    }

    fn ltr_edit(text: &str) -> ClearableLineEdit {
        let mut edit =
            ClearableLineEdit::with_text(text).with_layout_direction(TextDirection::Ltr);
        edit.set_geometry(Rect::new(0.0, 0.0, 300.0, 30.0));
        edit
    }

    fn rtl_edit(text: &str) -> ClearableLineEdit {
        let mut edit =
            ClearableLineEdit::with_text(text).with_layout_direction(TextDirection::Rtl);
        edit.set_geometry(Rect::new(0.0, 0.0, 300.0, 30.0));
        edit
    }

    fn release_at(x: f32) -> WidgetEvent {
        WidgetEvent::MouseRelease(MouseReleaseEvent::new(
            MouseButton::Left,
            Point::new(x, 15.0),
            KeyboardModifiers::NONE,
        ))
    }

    #[test]
    fn test_icon_visible_iff_text_nonempty() {
        setup();
        let mut edit = ltr_edit("hello");
        assert!(edit.clear_icon_visible());

        edit.set_text("");
        assert!(!edit.clear_icon_visible());

        edit.set_text("x");
        assert!(edit.clear_icon_visible());
    }

    #[test]
    fn test_empty_construction_starts_hidden() {
        setup();
        let edit = ClearableLineEdit::new().with_layout_direction(TextDirection::Ltr);
        assert!(!edit.clear_icon_visible());
        assert!(edit.clear_icon().is_some());
    }

    #[test]
    fn test_prepopulated_construction_starts_visible() {
        setup();
        let edit = ltr_edit("hello");
        assert!(edit.clear_icon_visible());
    }

    #[test]
    fn test_ltr_places_icon_on_right_edge() {
        setup();
        let edit = ltr_edit("hello");
        assert!(edit.line_edit().right_icon().is_some());
        assert!(edit.line_edit().left_icon().is_none());
    }

    #[test]
    fn test_rtl_places_icon_on_left_edge() {
        setup();
        let edit = rtl_edit("hello");
        assert!(edit.line_edit().left_icon().is_some());
        assert!(edit.line_edit().right_icon().is_none());
    }

    #[test]
    fn test_keyboard_editing_toggles_icon() {
        setup();
        let mut edit = ltr_edit("h");

        let mut backspace = WidgetEvent::KeyPress(KeyPressEvent::new(
            Key::Backspace,
            KeyboardModifiers::NONE,
            "",
        ));
        edit.event(&mut backspace);
        assert_eq!(edit.text(), "");
        assert!(!edit.clear_icon_visible());

        let mut input = WidgetEvent::KeyPress(KeyPressEvent::text_input("a"));
        edit.event(&mut input);
        assert!(edit.clear_icon_visible());
    }

    #[test]
    fn test_ltr_hit_region_clears() {
        setup();
        // Icon is 24 wide: the region is [300 - 24 - 20, 300] = [256, 300].
        let mut edit = ltr_edit("hello");
        let fired = Arc::new(AtomicUsize::new(0));
        let fired_clone = fired.clone();
        edit.set_on_clear(move |_| {
            fired_clone.fetch_add(1, Ordering::SeqCst);
        });

        let mut miss = release_at(255.0);
        assert!(!edit.event(&mut miss));
        assert!(!miss.is_accepted());
        assert_eq!(edit.text(), "hello");
        assert_eq!(fired.load(Ordering::SeqCst), 0);

        let mut hit = release_at(256.0);
        assert!(edit.event(&mut hit));
        assert!(hit.is_accepted());
        assert_eq!(edit.text(), "");
        assert!(!edit.clear_icon_visible());
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_rtl_hit_region_is_mirrored() {
        setup();
        // Field bounds left=0 width=300, icon 24: the region is [0, 44].
        let mut edit = rtl_edit("مرحبا");
        let fired = Arc::new(AtomicUsize::new(0));
        let fired_clone = fired.clone();
        edit.set_on_clear(move |_| {
            fired_clone.fetch_add(1, Ordering::SeqCst);
        });

        let mut miss = release_at(45.0);
        assert!(!edit.event(&mut miss));
        assert_eq!(fired.load(Ordering::SeqCst), 0);

        let mut hit = release_at(30.0);
        assert!(edit.event(&mut hit));
        assert_eq!(edit.text(), "");
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_empty_field_tap_is_noop() {
        setup();
        let mut edit = ltr_edit("");
        let fired = Arc::new(AtomicUsize::new(0));
        let fired_clone = fired.clone();
        edit.set_on_clear(move |_| {
            fired_clone.fetch_add(1, Ordering::SeqCst);
        });

        // Inside what would be the hit region, but the icon is hidden.
        let mut release = release_at(290.0);
        assert!(!edit.event(&mut release));
        assert!(!release.is_accepted());
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_unresolvable_icon_disables_all_icon_behavior() {
        setup();
        let style = ClearIconStyle::new().with_icon_name("no-such-icon");
        let mut edit = ClearableLineEdit::with_style(style)
            .with_layout_direction(TextDirection::Ltr);
        edit.set_text("hello");
        edit.set_geometry(Rect::new(0.0, 0.0, 300.0, 30.0));

        assert!(edit.clear_icon().is_none());
        assert!(!edit.clear_icon_visible());

        let fired = Arc::new(AtomicUsize::new(0));
        let fired_clone = fired.clone();
        edit.set_on_clear(move |_| {
            fired_clone.fetch_add(1, Ordering::SeqCst);
        });

        // Release falls through to the base field unmodified.
        let mut release = release_at(290.0);
        assert!(!edit.event(&mut release));
        assert!(!release.is_accepted());
        assert_eq!(edit.text(), "hello");
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_tint_list_takes_precedence_over_tint() {
        setup();
        let style = ClearIconStyle::new().with_tint(Color::RED).with_tint_list(
            StateColorList::new(Color::BLUE).with_state(IconState::Disabled, Color::GRAY),
        );
        let edit = ClearableLineEdit::with_style(style);

        let icon = edit.clear_icon().expect("built-in icon resolves");
        assert_eq!(icon.effective_tint(IconState::Normal), Some(Color::BLUE));
        assert_eq!(icon.effective_tint(IconState::Disabled), Some(Color::GRAY));
    }

    #[test]
    fn test_tint_alone_applies() {
        setup();
        let style = ClearIconStyle::new().with_tint(Color::RED);
        let edit = ClearableLineEdit::with_style(style);
        let icon = edit.clear_icon().unwrap();
        assert_eq!(icon.effective_tint(IconState::Normal), Some(Color::RED));
    }

    #[test]
    fn test_callback_last_registration_wins() {
        setup();
        let mut edit = ltr_edit("hello");

        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));

        let first_clone = first.clone();
        edit.set_on_clear(move |_| {
            first_clone.fetch_add(1, Ordering::SeqCst);
        });
        let second_clone = second.clone();
        edit.set_on_clear(move |_| {
            second_clone.fetch_add(1, Ordering::SeqCst);
        });

        let mut hit = release_at(290.0);
        edit.event(&mut hit);

        assert_eq!(first.load(Ordering::SeqCst), 0);
        assert_eq!(second.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_callback_sees_cleared_widget() {
        setup();
        let mut edit = ltr_edit("hello");

        let observed_empty = Arc::new(AtomicBool::new(false));
        let observed_clone = observed_empty.clone();
        edit.set_on_clear(move |edit| {
            observed_clone.store(
                edit.text().is_empty() && !edit.clear_icon_visible(),
                Ordering::SeqCst,
            );
        });

        let mut hit = release_at(290.0);
        edit.event(&mut hit);
        assert!(observed_empty.load(Ordering::SeqCst));
    }

    #[test]
    fn test_field_offset_shifts_hit_region() {
        setup();
        // Field at x=100, width 200: LTR region is [300 - 44, 300] in
        // parent coordinates, i.e. local x >= 156.
        let mut edit = ltr_edit("hello");
        edit.set_geometry(Rect::new(100.0, 0.0, 200.0, 30.0));

        let mut miss = release_at(150.0);
        assert!(!edit.event(&mut miss));
        assert_eq!(edit.text(), "hello");

        let mut hit = release_at(160.0);
        assert!(edit.event(&mut hit));
        assert_eq!(edit.text(), "");
    }

    #[test]
    fn test_paint_draws_icon_only_while_visible() {
        setup();
        let mut edit = ltr_edit("hello");

        let mut renderer = DisplayListRenderer::new();
        let mut ctx = PaintContext::new(&mut renderer, edit.rect());
        edit.paint(&mut ctx);
        let icon_draws = renderer
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::Image { .. }))
            .count();
        assert_eq!(icon_draws, 1);

        edit.set_text("");
        let mut renderer = DisplayListRenderer::new();
        let mut ctx = PaintContext::new(&mut renderer, edit.rect());
        edit.paint(&mut ctx);
        let icon_draws = renderer
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::Image { .. }))
            .count();
        assert_eq!(icon_draws, 0);
    }

    #[test]
    fn test_right_button_release_is_not_a_clear_tap() {
        setup();
        let mut edit = ltr_edit("hello");
        let mut release = WidgetEvent::MouseRelease(MouseReleaseEvent::new(
            MouseButton::Right,
            Point::new(290.0, 15.0),
            KeyboardModifiers::NONE,
        ));
        edit.event(&mut release);
        assert_eq!(edit.text(), "hello");
    }
}
