//! Icon support for widgets.
//!
//! This module provides the [`Icon`] type for decoration images in widgets,
//! along with tinting. An icon can carry a flat tint color and a
//! state-dependent [`StateColorList`]; when both are configured the state
//! list is applied after the flat tint and therefore wins.
//!
//! # Example
//!
//! ```
//! use clearedit_render::{Color, Icon, IconState, Image, StateColorList};
//!
//! let image = Image::solid(24, 24, [96, 96, 96, 255]);
//! let icon = Icon::from_image(image)
//!     .with_tint(Color::RED)
//!     .with_tint_list(
//!         StateColorList::new(Color::BLACK).with_state(IconState::Disabled, Color::GRAY),
//!     );
//!
//! // The state list overrides the flat tint.
//! assert_eq!(icon.effective_tint(IconState::Normal), Some(Color::BLACK));
//! assert_eq!(icon.effective_tint(IconState::Disabled), Some(Color::GRAY));
//! ```

use crate::image::Image;
use crate::types::{Color, Size};

/// Widget interaction states an icon can be rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IconState {
    /// Normal/default state
    #[default]
    Normal,
    /// Disabled/inactive state - widget is not interactive
    Disabled,
    /// Active/pressed state - user is clicking
    Active,
    /// Selected/checked state - item is selected
    Selected,
    /// Focused state - keyboard navigation focus
    Focused,
}

impl IconState {
    /// Check if this is the normal state.
    pub fn is_normal(self) -> bool {
        matches!(self, IconState::Normal)
    }

    /// Check if this is a state that should reduce interactivity appearance.
    pub fn is_disabled(self) -> bool {
        matches!(self, IconState::Disabled)
    }
}

/// A state-dependent color set: a default color plus per-state overrides.
///
/// Lookup falls back to the default color for states without a dedicated
/// entry.
#[derive(Debug, Clone, PartialEq)]
pub struct StateColorList {
    /// The fallback color used for states without an entry.
    default: Color,
    /// Per-state overrides.
    entries: Vec<(IconState, Color)>,
}

impl StateColorList {
    /// Create a new list with the given default color.
    pub fn new(default: Color) -> Self {
        Self {
            default,
            entries: Vec::new(),
        }
    }

    /// Add or replace the color for a state (builder pattern).
    pub fn with_state(mut self, state: IconState, color: Color) -> Self {
        self.set_state(state, color);
        self
    }

    /// Add or replace the color for a state.
    pub fn set_state(&mut self, state: IconState, color: Color) {
        if let Some(entry) = self.entries.iter_mut().find(|(s, _)| *s == state) {
            entry.1 = color;
        } else {
            self.entries.push((state, color));
        }
    }

    /// Get the color for a state, falling back to the default.
    pub fn color_for(&self, state: IconState) -> Color {
        self.entries
            .iter()
            .find(|(s, _)| *s == state)
            .map(|(_, c)| *c)
            .unwrap_or(self.default)
    }

    /// Check if a dedicated entry exists for a state.
    pub fn has_state(&self, state: IconState) -> bool {
        self.entries.iter().any(|(s, _)| *s == state)
    }

    /// The default color.
    pub fn default_color(&self) -> Color {
        self.default
    }
}

/// An icon that can be displayed in widgets.
///
/// Icons wrap a decoded [`Image`] plus optional display-size and tint
/// configuration. The tint state is mutable for the icon's lifetime; each
/// widget owns its icon exclusively.
#[derive(Debug, Clone, PartialEq)]
pub struct Icon {
    /// The icon image.
    image: Image,

    /// Preferred display size. If None, uses the natural image size.
    preferred_size: Option<Size>,

    /// Flat tint applied to every pixel's color channels.
    tint: Option<Color>,

    /// State-dependent tint. Applied after the flat tint, so it wins for
    /// every state when configured.
    tint_list: Option<StateColorList>,
}

impl Icon {
    /// Create an icon from a decoded image.
    pub fn from_image(image: Image) -> Self {
        Self {
            image,
            preferred_size: None,
            tint: None,
            tint_list: None,
        }
    }

    /// Set the preferred display size.
    ///
    /// If not set, the icon is displayed at its natural image size.
    pub fn with_size(mut self, size: Size) -> Self {
        self.preferred_size = Some(size);
        self
    }

    /// Set the preferred display size with width and height.
    pub fn with_dimensions(self, width: f32, height: f32) -> Self {
        self.with_size(Size::new(width, height))
    }

    /// Set the flat tint (builder pattern).
    pub fn with_tint(mut self, tint: Color) -> Self {
        self.set_tint(tint);
        self
    }

    /// Set the flat tint.
    pub fn set_tint(&mut self, tint: Color) {
        self.tint = Some(tint);
    }

    /// Set the state-dependent tint list (builder pattern).
    pub fn with_tint_list(mut self, list: StateColorList) -> Self {
        self.set_tint_list(list);
        self
    }

    /// Set the state-dependent tint list.
    pub fn set_tint_list(&mut self, list: StateColorList) {
        self.tint_list = Some(list);
    }

    /// The flat tint, if configured.
    pub fn tint(&self) -> Option<Color> {
        self.tint
    }

    /// The state-dependent tint list, if configured.
    pub fn tint_list(&self) -> Option<&StateColorList> {
        self.tint_list.as_ref()
    }

    /// The tint to render with for a given widget state.
    ///
    /// The flat tint is applied first and the state list after it, so when
    /// both are configured the state list's color wins. `None` means the
    /// icon renders with its native colors.
    pub fn effective_tint(&self, state: IconState) -> Option<Color> {
        match &self.tint_list {
            Some(list) => Some(list.color_for(state)),
            None => self.tint,
        }
    }

    /// The underlying image.
    pub fn image(&self) -> &Image {
        &self.image
    }

    /// The preferred size, if set.
    pub fn preferred_size(&self) -> Option<Size> {
        self.preferred_size
    }

    /// The display size used for layout and hit testing.
    ///
    /// Returns the preferred size if set, otherwise the natural image size.
    pub fn display_size(&self) -> Size {
        self.preferred_size.unwrap_or_else(|| self.image.size())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_icon() -> Icon {
        Icon::from_image(Image::solid(24, 24, [96, 96, 96, 255]))
    }

    #[test]
    fn test_display_size_defaults_to_image() {
        let icon = test_icon();
        assert_eq!(icon.display_size(), Size::new(24.0, 24.0));
    }

    #[test]
    fn test_display_size_prefers_override() {
        let icon = test_icon().with_dimensions(16.0, 16.0);
        assert_eq!(icon.display_size(), Size::new(16.0, 16.0));
    }

    #[test]
    fn test_no_tint_means_native_colors() {
        let icon = test_icon();
        assert_eq!(icon.effective_tint(IconState::Normal), None);
        assert_eq!(icon.effective_tint(IconState::Disabled), None);
    }

    #[test]
    fn test_flat_tint_applies_to_all_states() {
        let icon = test_icon().with_tint(Color::RED);
        assert_eq!(icon.effective_tint(IconState::Normal), Some(Color::RED));
        assert_eq!(icon.effective_tint(IconState::Focused), Some(Color::RED));
    }

    #[test]
    fn test_tint_list_overrides_flat_tint() {
        let icon = test_icon().with_tint(Color::RED).with_tint_list(
            StateColorList::new(Color::BLUE).with_state(IconState::Disabled, Color::GRAY),
        );

        // Later application wins: the list, not the flat tint.
        assert_eq!(icon.effective_tint(IconState::Normal), Some(Color::BLUE));
        assert_eq!(icon.effective_tint(IconState::Disabled), Some(Color::GRAY));
    }

    #[test]
    fn test_state_color_list_fallback() {
        let list = StateColorList::new(Color::BLACK).with_state(IconState::Active, Color::RED);
        assert_eq!(list.color_for(IconState::Active), Color::RED);
        assert_eq!(list.color_for(IconState::Selected), Color::BLACK);
        assert!(list.has_state(IconState::Active));
        assert!(!list.has_state(IconState::Selected));
    }

    #[test]
    fn test_state_color_list_replace() {
        let mut list = StateColorList::new(Color::BLACK);
        list.set_state(IconState::Active, Color::RED);
        list.set_state(IconState::Active, Color::GREEN);
        assert_eq!(list.color_for(IconState::Active), Color::GREEN);
    }
}
