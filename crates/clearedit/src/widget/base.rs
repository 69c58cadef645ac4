//! Widget base implementation.
//!
//! This module provides `WidgetBase`, the common implementation details
//! for all widgets. It handles geometry, visibility, enabled state, focus,
//! and coordinates with the object system.

use clearedit_core::{Object, ObjectBase, ObjectId, ObjectResult, Signal};
use clearedit_render::{Point, Rect, Size};

use super::geometry::{SizePolicy, SizePolicyPair};

/// How a widget can receive keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPolicy {
    /// The widget never receives focus.
    #[default]
    NoFocus,
    /// The widget receives focus via Tab navigation.
    TabFocus,
    /// The widget receives focus via mouse click.
    ClickFocus,
    /// The widget receives focus via both Tab and mouse click.
    StrongFocus,
}

impl FocusPolicy {
    /// Whether this policy accepts focus via Tab navigation.
    pub fn accepts_tab(self) -> bool {
        matches!(self, Self::TabFocus | Self::StrongFocus)
    }

    /// Whether this policy accepts focus via mouse click.
    pub fn accepts_click(self) -> bool {
        matches!(self, Self::ClickFocus | Self::StrongFocus)
    }
}

/// The base implementation for all widgets.
///
/// This struct provides common functionality that all widgets need:
/// - Object system integration (ID, parent-child relationships)
/// - Geometry management (position, size)
/// - Size policies for layout
/// - Visibility, enabled state, and focus
/// - Coordinate mapping
///
/// Widget implementations include this as a field and delegate common
/// operations to it.
pub struct WidgetBase {
    /// The underlying object base for Object trait implementation.
    object_base: ObjectBase,

    /// The widget's geometry (position relative to parent and size).
    geometry: Rect,

    /// The widget's size policy for layout.
    size_policy: SizePolicyPair,

    /// Whether the widget is visible.
    visible: bool,

    /// Whether the widget is enabled (can receive input).
    enabled: bool,

    /// How the widget receives keyboard focus.
    focus_policy: FocusPolicy,

    /// Whether the widget currently has focus.
    focused: bool,

    /// Whether the mouse is currently over this widget.
    hovered: bool,

    /// Whether the widget needs to be repainted.
    needs_repaint: bool,

    /// Signal emitted when the geometry changes.
    pub geometry_changed: Signal<Rect>,

    /// Signal emitted when visibility changes.
    pub visible_changed: Signal<bool>,

    /// Signal emitted when enabled state changes.
    pub enabled_changed: Signal<bool>,
}

impl WidgetBase {
    /// Create a new widget base.
    ///
    /// # Panics
    ///
    /// Panics if the global object registry is not initialized.
    pub fn new<T: Object + 'static>() -> Self {
        Self {
            object_base: ObjectBase::new::<T>(),
            geometry: Rect::ZERO,
            size_policy: SizePolicyPair::default(),
            visible: true,
            enabled: true,
            focus_policy: FocusPolicy::NoFocus,
            focused: false,
            hovered: false,
            needs_repaint: true,
            geometry_changed: Signal::new(),
            visible_changed: Signal::new(),
            enabled_changed: Signal::new(),
        }
    }

    // =========================================================================
    // Object System Delegation
    // =========================================================================

    /// Get the widget's unique object ID.
    #[inline]
    pub fn object_id(&self) -> ObjectId {
        self.object_base.id()
    }

    /// Get the widget's name.
    pub fn name(&self) -> String {
        self.object_base.name()
    }

    /// Set the widget's name.
    pub fn set_name(&self, name: impl Into<String>) {
        self.object_base.set_name(name);
    }

    /// Get the parent widget's object ID.
    pub fn parent_id(&self) -> Option<ObjectId> {
        self.object_base.parent()
    }

    /// Set the parent widget.
    pub fn set_parent(&self, parent: Option<ObjectId>) -> ObjectResult<()> {
        self.object_base.set_parent(parent)
    }

    /// Get the IDs of child widgets.
    pub fn children_ids(&self) -> Vec<ObjectId> {
        self.object_base.children()
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// Get the widget's geometry (position and size).
    #[inline]
    pub fn geometry(&self) -> Rect {
        self.geometry
    }

    /// Set the widget's geometry.
    ///
    /// This will emit `geometry_changed` if the geometry actually changed.
    pub fn set_geometry(&mut self, rect: Rect) {
        if self.geometry != rect {
            self.geometry = rect;
            self.needs_repaint = true;
            self.geometry_changed.emit(rect);
        }
    }

    /// Get the widget's position relative to its parent.
    #[inline]
    pub fn pos(&self) -> Point {
        self.geometry.origin
    }

    /// Get the widget's size.
    #[inline]
    pub fn size(&self) -> Size {
        self.geometry.size
    }

    /// Set the widget's size.
    pub fn set_size(&mut self, size: Size) {
        if self.geometry.size != size {
            let new_geometry = Rect {
                origin: self.geometry.origin,
                size,
            };
            self.geometry = new_geometry;
            self.needs_repaint = true;
            self.geometry_changed.emit(new_geometry);
        }
    }

    /// Resize the widget.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.set_size(Size::new(width, height));
    }

    /// Get the widget's width.
    #[inline]
    pub fn width(&self) -> f32 {
        self.geometry.size.width
    }

    /// Get the widget's height.
    #[inline]
    pub fn height(&self) -> f32 {
        self.geometry.size.height
    }

    /// Get a rectangle representing the widget's local coordinate space.
    ///
    /// This is always positioned at (0, 0) with the widget's size.
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.geometry.size.width, self.geometry.size.height)
    }

    // =========================================================================
    // Size Policy
    // =========================================================================

    /// Get the widget's size policy.
    #[inline]
    pub fn size_policy(&self) -> SizePolicyPair {
        self.size_policy
    }

    /// Set the widget's size policy.
    pub fn set_size_policy(&mut self, policy: SizePolicyPair) {
        self.size_policy = policy;
    }

    /// Set horizontal size policy.
    pub fn set_horizontal_policy(&mut self, policy: SizePolicy) {
        self.size_policy.horizontal = policy;
    }

    /// Set vertical size policy.
    pub fn set_vertical_policy(&mut self, policy: SizePolicy) {
        self.size_policy.vertical = policy;
    }

    // =========================================================================
    // Visibility
    // =========================================================================

    /// Check if the widget is visible.
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Set whether the widget is visible.
    pub fn set_visible(&mut self, visible: bool) {
        if self.visible != visible {
            self.visible = visible;
            self.needs_repaint = true;
            self.visible_changed.emit(visible);
        }
    }

    /// Show the widget.
    pub fn show(&mut self) {
        self.set_visible(true);
    }

    /// Hide the widget.
    pub fn hide(&mut self) {
        self.set_visible(false);
    }

    // =========================================================================
    // Enabled State
    // =========================================================================

    /// Check if the widget is enabled.
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Set whether the widget is enabled.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled != enabled {
            self.enabled = enabled;
            self.needs_repaint = true;
            self.enabled_changed.emit(enabled);
        }
    }

    // =========================================================================
    // Focus
    // =========================================================================

    /// Get the widget's focus policy.
    #[inline]
    pub fn focus_policy(&self) -> FocusPolicy {
        self.focus_policy
    }

    /// Set the widget's focus policy.
    pub fn set_focus_policy(&mut self, policy: FocusPolicy) {
        self.focus_policy = policy;
    }

    /// Check if the widget can receive keyboard focus.
    #[inline]
    pub fn is_focusable(&self) -> bool {
        self.focus_policy != FocusPolicy::NoFocus && self.enabled && self.visible
    }

    /// Check if the widget currently has keyboard focus.
    #[inline]
    pub fn has_focus(&self) -> bool {
        self.focused
    }

    /// Set the focused state (used by the focus management system).
    pub(crate) fn set_focused(&mut self, focused: bool) {
        if self.focused != focused {
            self.focused = focused;
            self.needs_repaint = true;
        }
    }

    // =========================================================================
    // Hover State
    // =========================================================================

    /// Check if the mouse is currently over this widget.
    #[inline]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Set the hover state (used by the event system).
    #[allow(dead_code)]
    pub(crate) fn set_hovered(&mut self, hovered: bool) {
        if self.hovered != hovered {
            self.hovered = hovered;
            self.needs_repaint = true;
        }
    }

    // =========================================================================
    // Repaint
    // =========================================================================

    /// Check if the widget needs to be repainted.
    #[inline]
    pub fn needs_repaint(&self) -> bool {
        self.needs_repaint
    }

    /// Request a repaint of the widget.
    pub fn update(&mut self) {
        self.needs_repaint = true;
    }

    /// Clear the repaint flag (called after painting).
    pub fn clear_repaint_flag(&mut self) {
        self.needs_repaint = false;
    }

    // =========================================================================
    // Coordinate Mapping
    // =========================================================================

    /// Map a point from widget-local coordinates to parent coordinates.
    #[inline]
    pub fn map_to_parent(&self, point: Point) -> Point {
        Point::new(
            point.x + self.geometry.origin.x,
            point.y + self.geometry.origin.y,
        )
    }

    /// Map a point from parent coordinates to widget-local coordinates.
    #[inline]
    pub fn map_from_parent(&self, point: Point) -> Point {
        Point::new(
            point.x - self.geometry.origin.x,
            point.y - self.geometry.origin.y,
        )
    }

    /// Check if a point (in local coordinates) is inside the widget.
    #[inline]
    pub fn contains_point(&self, point: Point) -> bool {
        self.rect().contains(point)
    }
}

impl Object for WidgetBase {
    fn object_id(&self) -> ObjectId {
        self.object_base.id()
    }
}

// WidgetBase doesn't implement Drop because ObjectBase handles cleanup.

#[cfg(test)]
mod tests {
    use super::*;
    use clearedit_core::init_global_registry;

    struct Probe {
        base: WidgetBase,
    }

    impl Probe {
        fn new() -> Self {
            Self {
                base: WidgetBase::new::<Self>(),
            }
        }
    }

    impl Object for Probe {
        fn object_id(&self) -> ObjectId {
            self.base.object_id()
        }
    }

    fn setup() {
        init_global_registry();
    }

    #[test]
    fn test_geometry_signal() {
        setup();
        use std::sync::atomic::{AtomicBool, Ordering};
        use std::sync::Arc;

        let mut probe = Probe::new();
        let fired = Arc::new(AtomicBool::new(false));
        let fired_clone = fired.clone();
        probe.base.geometry_changed.connect(move |_| {
            fired_clone.store(true, Ordering::SeqCst);
        });

        probe.base.set_geometry(Rect::new(0.0, 0.0, 100.0, 30.0));
        assert!(fired.load(Ordering::SeqCst));
        assert_eq!(probe.base.width(), 100.0);
        assert_eq!(probe.base.rect(), Rect::new(0.0, 0.0, 100.0, 30.0));
    }

    #[test]
    fn test_focus_policy() {
        setup();
        let mut probe = Probe::new();
        assert!(!probe.base.is_focusable());

        probe.base.set_focus_policy(FocusPolicy::StrongFocus);
        assert!(probe.base.is_focusable());
        assert!(probe.base.focus_policy().accepts_click());
        assert!(probe.base.focus_policy().accepts_tab());

        probe.base.set_enabled(false);
        assert!(!probe.base.is_focusable());
    }

    #[test]
    fn test_coordinate_mapping() {
        setup();
        let mut probe = Probe::new();
        probe.base.set_geometry(Rect::new(10.0, 20.0, 100.0, 30.0));

        assert_eq!(
            probe.base.map_to_parent(Point::new(5.0, 5.0)),
            Point::new(15.0, 25.0)
        );
        assert_eq!(
            probe.base.map_from_parent(Point::new(15.0, 25.0)),
            Point::new(5.0, 5.0)
        );
        assert!(probe.base.contains_point(Point::new(99.0, 29.0)));
        assert!(!probe.base.contains_point(Point::new(101.0, 10.0)));
    }
}
