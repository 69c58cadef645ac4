//! Single-line text input widget.
//!
//! The LineEdit widget provides a single-line text editor with support for:
//! - Text editing with cursor and selection
//! - Placeholder text
//! - Read-only mode
//! - Compound icons on the left/right edge, outside the editable content
//!
//! # Example
//!
//! ```
//! use clearedit::widget::widgets::LineEdit;
//!
//! clearedit_core::init_global_registry();
//!
//! // Create a simple text input
//! let mut edit = LineEdit::new();
//! edit.set_placeholder("Enter your name...");
//!
//! // Connect to signals
//! edit.text_changed.connect(|text| {
//!     println!("Text changed: {}", text);
//! });
//! ```

use unicode_segmentation::UnicodeSegmentation;

use clearedit_core::{Object, ObjectId, Signal};
use clearedit_render::{Color, Font, Icon, IconState, Point, Rect, Size, Stroke};

use crate::widget::{
    FocusPolicy, Key, KeyPressEvent, MouseButton, MouseMoveEvent, MousePressEvent,
    MouseReleaseEvent, PaintContext, SizeHint, Widget, WidgetBase, WidgetEvent,
};

/// Horizontal padding between the widget border and its content.
const CONTENT_PADDING: f32 = 4.0;

/// Gap between a compound icon and the text area.
const ICON_GAP: f32 = 4.0;

/// A single-line text input widget.
///
/// LineEdit provides text editing capabilities including:
/// - Cursor movement and positioning
/// - Text selection (keyboard and mouse)
/// - Character insertion and deletion
/// - Placeholder text when empty
/// - Read-only mode
/// - Compound icons rendered inline at the field's edges
///
/// # Signals
///
/// - `text_changed`: Emitted when the text content changes
/// - `editing_finished`: Emitted when editing is finished (focus lost or Enter pressed)
/// - `return_pressed`: Emitted when Enter is pressed
///
/// # Keyboard Shortcuts
///
/// - Arrow keys: Move cursor
/// - Shift+Arrow keys: Extend selection
/// - Home/End: Move to start/end of line
/// - Backspace: Delete character before cursor
/// - Delete: Delete character after cursor
/// - Ctrl+A: Select all text
pub struct LineEdit {
    /// Widget base for common functionality.
    base: WidgetBase,

    /// The actual text content.
    text: String,

    /// Placeholder text displayed when empty.
    placeholder: String,

    /// Current cursor position (byte offset in text).
    cursor_pos: usize,

    /// Selection anchor position (byte offset). If Some, selection extends
    /// from anchor to cursor.
    selection_anchor: Option<usize>,

    /// Whether the widget is read-only.
    read_only: bool,

    /// The font for text rendering.
    font: Font,

    /// Text color.
    text_color: Color,

    /// Placeholder text color.
    placeholder_color: Color,

    /// Selection background color.
    selection_color: Color,

    /// Whether the cursor is currently visible (for blinking).
    cursor_visible: bool,

    /// Whether we're currently dragging to select.
    is_dragging: bool,

    /// Compound icon at the left edge.
    left_icon: Option<Icon>,

    /// Compound icon at the right edge.
    right_icon: Option<Icon>,

    // Signals

    /// Signal emitted when text changes.
    pub text_changed: Signal<String>,

    /// Signal emitted when editing is finished (focus lost or Enter pressed).
    pub editing_finished: Signal<()>,

    /// Signal emitted when Enter/Return is pressed.
    pub return_pressed: Signal<()>,
}

impl LineEdit {
    /// Create a new empty LineEdit.
    pub fn new() -> Self {
        let mut base = WidgetBase::new::<Self>();
        base.set_focus_policy(FocusPolicy::StrongFocus);

        Self {
            base,
            text: String::new(),
            placeholder: String::new(),
            cursor_pos: 0,
            selection_anchor: None,
            read_only: false,
            font: Font::default(),
            text_color: Color::BLACK,
            placeholder_color: Color::from_rgb8(160, 160, 160),
            selection_color: Color::from_rgba8(51, 153, 255, 128),
            cursor_visible: true,
            is_dragging: false,
            left_icon: None,
            right_icon: None,
            text_changed: Signal::new(),
            editing_finished: Signal::new(),
            return_pressed: Signal::new(),
        }
    }

    /// Create a new LineEdit with initial text.
    pub fn with_text(text: impl Into<String>) -> Self {
        let mut edit = Self::new();
        edit.text = text.into();
        edit.cursor_pos = edit.text.len();
        edit
    }

    // =========================================================================
    // Text Access
    // =========================================================================

    /// Get the current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Set the text content.
    ///
    /// This clears any selection and moves the cursor to the end.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let new_text = text.into();
        if self.text != new_text {
            self.text = new_text.clone();
            self.cursor_pos = self.text.len();
            self.selection_anchor = None;
            self.base.update();
            self.text_changed.emit(new_text);
        }
    }

    /// Clear all text.
    pub fn clear(&mut self) {
        self.set_text("");
    }

    /// Get the text length in characters.
    pub fn text_length(&self) -> usize {
        self.text.chars().count()
    }

    // =========================================================================
    // Placeholder
    // =========================================================================

    /// Get the placeholder text.
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Set the placeholder text.
    pub fn set_placeholder(&mut self, text: impl Into<String>) {
        self.placeholder = text.into();
        self.base.update();
    }

    /// Set placeholder using builder pattern.
    pub fn with_placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = text.into();
        self
    }

    // =========================================================================
    // Read-Only Mode
    // =========================================================================

    /// Check if the widget is read-only.
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Set read-only mode.
    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    /// Set read-only using builder pattern.
    pub fn with_read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    // =========================================================================
    // Compound Icons
    // =========================================================================

    /// Set the compound icons rendered inline at the field's edges.
    ///
    /// Passing `None` for a side removes that side's icon. The icons are
    /// decoration only; they are not part of the editable content, and the
    /// text area is inset so text never renders under them.
    pub fn set_compound_icons(&mut self, left: Option<Icon>, right: Option<Icon>) {
        self.left_icon = left;
        self.right_icon = right;
        self.base.update();
    }

    /// Remove all compound icons.
    pub fn clear_compound_icons(&mut self) {
        self.set_compound_icons(None, None);
    }

    /// The compound icon at the left edge, if any.
    pub fn left_icon(&self) -> Option<&Icon> {
        self.left_icon.as_ref()
    }

    /// The compound icon at the right edge, if any.
    pub fn right_icon(&self) -> Option<&Icon> {
        self.right_icon.as_ref()
    }

    // =========================================================================
    // Cursor and Selection
    // =========================================================================

    /// Get the cursor position (byte offset).
    pub fn cursor_position(&self) -> usize {
        self.cursor_pos
    }

    /// Set the cursor position.
    pub fn set_cursor_position(&mut self, pos: usize) {
        let pos = pos.min(self.text.len());
        let pos = self.snap_to_grapheme_boundary(pos);
        if self.cursor_pos != pos {
            self.cursor_pos = pos;
            self.selection_anchor = None;
            self.base.update();
        }
    }

    /// Check if there is a selection.
    pub fn has_selection(&self) -> bool {
        self.selection_anchor.is_some() && self.selection_anchor != Some(self.cursor_pos)
    }

    /// Get the selected text.
    pub fn selected_text(&self) -> &str {
        if let Some(anchor) = self.selection_anchor {
            let start = anchor.min(self.cursor_pos);
            let end = anchor.max(self.cursor_pos);
            &self.text[start..end]
        } else {
            ""
        }
    }

    /// Get the selection range (start, end) in byte offsets.
    pub fn selection_range(&self) -> Option<(usize, usize)> {
        self.selection_anchor.map(|anchor| {
            let start = anchor.min(self.cursor_pos);
            let end = anchor.max(self.cursor_pos);
            (start, end)
        })
    }

    /// Select all text.
    pub fn select_all(&mut self) {
        if !self.text.is_empty() {
            self.selection_anchor = Some(0);
            self.cursor_pos = self.text.len();
            self.base.update();
        }
    }

    /// Clear selection without deleting text.
    pub fn deselect(&mut self) {
        if self.selection_anchor.is_some() {
            self.selection_anchor = None;
            self.base.update();
        }
    }

    // =========================================================================
    // Font and Colors
    // =========================================================================

    /// Get the font.
    pub fn font(&self) -> &Font {
        &self.font
    }

    /// Set the font.
    pub fn set_font(&mut self, font: Font) {
        self.font = font;
        self.base.update();
    }

    /// Get the text color.
    pub fn text_color(&self) -> Color {
        self.text_color
    }

    /// Set the text color.
    pub fn set_text_color(&mut self, color: Color) {
        self.text_color = color;
        self.base.update();
    }

    // =========================================================================
    // Internal: Text Manipulation
    // =========================================================================

    /// Insert text at the cursor position.
    fn insert_text(&mut self, text: &str) {
        if self.read_only || text.is_empty() {
            return;
        }

        if self.has_selection() {
            self.delete_selection();
        }

        self.text.insert_str(self.cursor_pos, text);
        self.cursor_pos += text.len();
        self.base.update();
        self.text_changed.emit(self.text.clone());
    }

    /// Delete the selected text.
    fn delete_selection(&mut self) {
        if let Some((start, end)) = self.selection_range() {
            self.text.replace_range(start..end, "");
            self.cursor_pos = start;
            self.selection_anchor = None;
            self.base.update();
            self.text_changed.emit(self.text.clone());
        }
    }

    /// Delete character before cursor (backspace).
    fn delete_char_before(&mut self) {
        if self.read_only {
            return;
        }

        if self.has_selection() {
            self.delete_selection();
            return;
        }

        if self.cursor_pos > 0 {
            let prev_pos = self.prev_grapheme_boundary(self.cursor_pos);
            self.text.replace_range(prev_pos..self.cursor_pos, "");
            self.cursor_pos = prev_pos;
            self.base.update();
            self.text_changed.emit(self.text.clone());
        }
    }

    /// Delete character after cursor (delete).
    fn delete_char_after(&mut self) {
        if self.read_only {
            return;
        }

        if self.has_selection() {
            self.delete_selection();
            return;
        }

        if self.cursor_pos < self.text.len() {
            let next_pos = self.next_grapheme_boundary(self.cursor_pos);
            self.text.replace_range(self.cursor_pos..next_pos, "");
            self.base.update();
            self.text_changed.emit(self.text.clone());
        }
    }

    // =========================================================================
    // Internal: Cursor Movement
    // =========================================================================

    /// Move cursor left by one grapheme.
    fn move_cursor_left(&mut self, extend_selection: bool) {
        if extend_selection {
            if self.selection_anchor.is_none() {
                self.selection_anchor = Some(self.cursor_pos);
            }
        } else if self.has_selection() {
            // Collapse to the start of the selection.
            let (start, _) = self.selection_range().unwrap();
            self.cursor_pos = start;
            self.selection_anchor = None;
            self.base.update();
            return;
        }

        if self.cursor_pos > 0 {
            self.cursor_pos = self.prev_grapheme_boundary(self.cursor_pos);
            self.base.update();
        }
    }

    /// Move cursor right by one grapheme.
    fn move_cursor_right(&mut self, extend_selection: bool) {
        if extend_selection {
            if self.selection_anchor.is_none() {
                self.selection_anchor = Some(self.cursor_pos);
            }
        } else if self.has_selection() {
            // Collapse to the end of the selection.
            let (_, end) = self.selection_range().unwrap();
            self.cursor_pos = end;
            self.selection_anchor = None;
            self.base.update();
            return;
        }

        if self.cursor_pos < self.text.len() {
            self.cursor_pos = self.next_grapheme_boundary(self.cursor_pos);
            self.base.update();
        }
    }

    /// Move cursor to start of line.
    fn move_cursor_to_start(&mut self, extend_selection: bool) {
        if extend_selection {
            if self.selection_anchor.is_none() {
                self.selection_anchor = Some(self.cursor_pos);
            }
        } else {
            self.selection_anchor = None;
        }

        self.cursor_pos = 0;
        self.base.update();
    }

    /// Move cursor to end of line.
    fn move_cursor_to_end(&mut self, extend_selection: bool) {
        if extend_selection {
            if self.selection_anchor.is_none() {
                self.selection_anchor = Some(self.cursor_pos);
            }
        } else {
            self.selection_anchor = None;
        }

        self.cursor_pos = self.text.len();
        self.base.update();
    }

    // =========================================================================
    // Internal: Grapheme Boundaries
    // =========================================================================

    /// Find the previous grapheme boundary.
    fn prev_grapheme_boundary(&self, pos: usize) -> usize {
        if pos == 0 {
            return 0;
        }

        let mut offset = 0;
        let mut prev_offset = 0;
        for grapheme in self.text.graphemes(true) {
            if offset >= pos {
                return prev_offset;
            }
            prev_offset = offset;
            offset += grapheme.len();
        }
        prev_offset
    }

    /// Find the next grapheme boundary.
    fn next_grapheme_boundary(&self, pos: usize) -> usize {
        let mut offset = 0;
        for grapheme in self.text.graphemes(true) {
            if offset >= pos {
                return offset + grapheme.len();
            }
            offset += grapheme.len();
        }
        self.text.len()
    }

    /// Snap a position to the nearest grapheme boundary.
    fn snap_to_grapheme_boundary(&self, pos: usize) -> usize {
        let mut offset = 0;
        for grapheme in self.text.graphemes(true) {
            let next_offset = offset + grapheme.len();
            if pos <= offset {
                return offset;
            }
            if pos < next_offset {
                // Return the closer boundary.
                if pos - offset <= next_offset - pos {
                    return offset;
                } else {
                    return next_offset;
                }
            }
            offset = next_offset;
        }
        self.text.len()
    }

    // =========================================================================
    // Internal: Layout
    // =========================================================================

    /// The rectangle text is laid out in, inset for padding and icons.
    fn text_rect(&self) -> Rect {
        let rect = self.base.rect();
        let mut left = rect.left() + CONTENT_PADDING;
        let mut right = rect.right() - CONTENT_PADDING;

        if let Some(icon) = &self.left_icon {
            left += icon.display_size().width + ICON_GAP;
        }
        if let Some(icon) = &self.right_icon {
            right -= icon.display_size().width + ICON_GAP;
        }

        Rect::new(left, rect.top(), (right - left).max(0.0), rect.height())
    }

    /// Map an x coordinate (widget-local) to the nearest grapheme boundary.
    fn cursor_index_at(&self, x: f32) -> usize {
        let text_x = x - self.text_rect().left();
        if text_x <= 0.0 {
            return 0;
        }

        let mut acc = 0.0;
        for (offset, grapheme) in self.text.grapheme_indices(true) {
            let width = self.font.measure(grapheme);
            if text_x < acc + width / 2.0 {
                return offset;
            }
            acc += width;
        }
        self.text.len()
    }

    // =========================================================================
    // Event Handling
    // =========================================================================

    /// Handle a key press event.
    fn handle_key_press(&mut self, event: &KeyPressEvent) -> bool {
        let shift = event.modifiers.shift;
        let ctrl = event.modifiers.control || event.modifiers.meta;

        match event.key {
            // Navigation
            Key::ArrowLeft => {
                self.move_cursor_left(shift);
                true
            }
            Key::ArrowRight => {
                self.move_cursor_right(shift);
                true
            }
            Key::Home => {
                self.move_cursor_to_start(shift);
                true
            }
            Key::End => {
                self.move_cursor_to_end(shift);
                true
            }

            // Deletion
            Key::Backspace => {
                self.delete_char_before();
                true
            }
            Key::Delete => {
                self.delete_char_after();
                true
            }

            // Enter
            Key::Enter => {
                self.return_pressed.emit(());
                self.editing_finished.emit(());
                true
            }

            // Select all
            Key::A if ctrl => {
                self.select_all();
                true
            }

            // Character input
            _ => {
                if !event.text.is_empty() && !ctrl && !event.modifiers.alt {
                    self.insert_text(&event.text);
                    true
                } else {
                    false
                }
            }
        }
    }

    /// Handle a mouse press event.
    fn handle_mouse_press(&mut self, event: &MousePressEvent) -> bool {
        if event.button != MouseButton::Left {
            return false;
        }

        if self.base.focus_policy().accepts_click() {
            self.base.set_focused(true);
        }

        let pos = self.cursor_index_at(event.local_pos.x);

        if event.modifiers.shift {
            // Extend selection
            if self.selection_anchor.is_none() {
                self.selection_anchor = Some(self.cursor_pos);
            }
        } else {
            // Start new selection
            self.selection_anchor = Some(pos);
        }

        self.cursor_pos = pos;
        self.is_dragging = true;
        self.base.update();

        true
    }

    /// Handle a mouse release event.
    ///
    /// Only meaningful while a drag is in progress; a stray release is left
    /// unhandled so ancestors can react to it.
    fn handle_mouse_release(&mut self, event: &MouseReleaseEvent) -> bool {
        if event.button != MouseButton::Left || !self.is_dragging {
            return false;
        }

        self.is_dragging = false;

        // Collapse an empty selection from a plain click.
        if let Some(anchor) = self.selection_anchor {
            if anchor == self.cursor_pos {
                self.selection_anchor = None;
            }
        }

        true
    }

    /// Handle a mouse move event.
    fn handle_mouse_move(&mut self, event: &MouseMoveEvent) -> bool {
        if !self.is_dragging {
            return false;
        }

        let pos = self.cursor_index_at(event.local_pos.x.max(0.0));
        if self.cursor_pos != pos {
            self.cursor_pos = pos;
            self.base.update();
        }

        true
    }

    /// Handle a cancelled pointer interaction: abandon the drag without any
    /// click side effects.
    fn handle_mouse_cancel(&mut self) -> bool {
        self.is_dragging = false;
        true
    }

    /// Handle focus gained.
    fn handle_focus_in(&mut self) {
        self.base.set_focused(true);
        self.cursor_visible = true;
        self.base.update();
    }

    /// Handle focus lost.
    fn handle_focus_out(&mut self) {
        self.base.set_focused(false);
        self.cursor_visible = false;
        self.is_dragging = false;
        self.editing_finished.emit(());
        self.base.update();
    }

    // =========================================================================
    // Rendering Helpers
    // =========================================================================

    /// Get the effective text color based on state.
    fn effective_text_color(&self) -> Color {
        if !self.base.is_enabled() {
            Color::from_rgb8(160, 160, 160)
        } else {
            self.text_color
        }
    }

    /// The widget state compound icons are rendered in.
    fn icon_state(&self) -> IconState {
        if !self.base.is_enabled() {
            IconState::Disabled
        } else if self.base.has_focus() {
            IconState::Focused
        } else {
            IconState::Normal
        }
    }

    /// Paint one compound icon into its slot rectangle.
    fn paint_icon(&self, ctx: &mut PaintContext<'_>, icon: &Icon, x: f32) {
        let rect = ctx.rect();
        let size = icon.display_size();
        let y = rect.top() + (rect.height() - size.height) / 2.0;
        let dest = Rect::new(x, y, size.width, size.height);
        let tint = icon.effective_tint(self.icon_state());
        ctx.renderer().draw_image(icon.image(), dest, tint);
    }
}

impl Default for LineEdit {
    fn default() -> Self {
        Self::new()
    }
}

impl Object for LineEdit {
    fn object_id(&self) -> ObjectId {
        self.base.object_id()
    }
}

impl Widget for LineEdit {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn size_hint(&self) -> SizeHint {
        // Fixed height based on font, expanding width.
        let line_height = self.font.line_height();
        let padding = 8.0;
        let min_width = 80.0;
        let preferred_width = 200.0;

        SizeHint::new(Size::new(preferred_width, line_height + padding))
            .with_minimum_dimensions(min_width, line_height + padding)
    }

    fn paint(&self, ctx: &mut PaintContext<'_>) {
        let rect = ctx.rect();

        // Background
        let bg_color = if self.base.is_enabled() {
            Color::WHITE
        } else {
            Color::from_rgb8(245, 245, 245)
        };
        ctx.renderer().fill_rect(rect, bg_color);

        // Border
        let border_color = if self.base.has_focus() {
            Color::from_rgb8(51, 153, 255)
        } else {
            Color::from_rgb8(200, 200, 200)
        };
        ctx.renderer()
            .stroke_rect(rect, &Stroke::new(border_color, 1.0));

        // Compound icons
        if let Some(icon) = &self.left_icon {
            self.paint_icon(ctx, icon, rect.left() + CONTENT_PADDING);
        }
        if let Some(icon) = &self.right_icon {
            let x = rect.right() - CONTENT_PADDING - icon.display_size().width;
            self.paint_icon(ctx, icon, x);
        }

        let text_rect = self.text_rect();
        let line_height = self.font.line_height();
        let y = rect.top() + (rect.height() - line_height) / 2.0;

        let show_placeholder = self.text.is_empty() && !self.placeholder.is_empty();

        if show_placeholder {
            ctx.renderer().draw_text(
                &self.placeholder,
                Point::new(text_rect.left(), y),
                &self.font,
                self.placeholder_color,
            );
            return;
        }

        // Selection background
        if self.has_selection() && self.base.has_focus() {
            if let Some((start, end)) = self.selection_range() {
                let sel_x = text_rect.left() + self.font.measure(&self.text[..start]);
                let sel_width = self.font.measure(&self.text[start..end]);
                ctx.renderer().fill_rect(
                    Rect::new(sel_x, y, sel_width, line_height),
                    self.selection_color,
                );
            }
        }

        // Text
        ctx.renderer().draw_text(
            &self.text,
            Point::new(text_rect.left(), y),
            &self.font,
            self.effective_text_color(),
        );

        // Cursor
        if self.base.has_focus() && self.cursor_visible {
            let cursor_x = text_rect.left() + self.font.measure(&self.text[..self.cursor_pos]);
            ctx.renderer().fill_rect(
                Rect::new(cursor_x, y, 1.5, line_height),
                self.text_color,
            );
        }
    }

    fn event(&mut self, event: &mut WidgetEvent) -> bool {
        match event {
            WidgetEvent::KeyPress(e) => {
                if self.handle_key_press(e) {
                    event.accept();
                    true
                } else {
                    false
                }
            }
            WidgetEvent::MousePress(e) => {
                if self.handle_mouse_press(e) {
                    event.accept();
                    true
                } else {
                    false
                }
            }
            WidgetEvent::MouseRelease(e) => {
                if self.handle_mouse_release(e) {
                    event.accept();
                    true
                } else {
                    false
                }
            }
            WidgetEvent::MouseMove(e) => {
                if self.handle_mouse_move(e) {
                    event.accept();
                    true
                } else {
                    false
                }
            }
            WidgetEvent::MouseCancel(_) => {
                if self.handle_mouse_cancel() {
                    event.accept();
                    true
                } else {
                    false
                }
            }
            WidgetEvent::FocusIn(_) => {
                self.handle_focus_in();
                true
            }
            WidgetEvent::FocusOut(_) => {
                self.handle_focus_out();
                true
            }
            _ => false,
        }
    }
}

// Ensure LineEdit is Send + Sync
static_assertions::assert_impl_all!(LineEdit: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::KeyboardModifiers;
    use clearedit_core::init_global_registry;
    use clearedit_render::{DisplayListRenderer, DrawCommand, Image};

    fn setup() {
        init_global_registry();
    }

    fn icon24() -> Icon {
        Icon::from_image(Image::solid(24, 24, [96, 96, 96, 255]))
    }

    #[test]
    fn test_line_edit_creation() {
        setup();
        let edit = LineEdit::new();
        assert_eq!(edit.text(), "");
        assert_eq!(edit.cursor_position(), 0);
        assert!(!edit.has_selection());
        assert!(!edit.is_read_only());
        assert!(edit.left_icon().is_none());
        assert!(edit.right_icon().is_none());
    }

    #[test]
    fn test_line_edit_with_text() {
        setup();
        let edit = LineEdit::with_text("Hello");
        assert_eq!(edit.text(), "Hello");
        assert_eq!(edit.cursor_position(), 5);
    }

    #[test]
    fn test_set_text() {
        setup();
        let mut edit = LineEdit::new();
        edit.set_text("Test");
        assert_eq!(edit.text(), "Test");
        assert_eq!(edit.cursor_position(), 4);
    }

    #[test]
    fn test_placeholder() {
        setup();
        let edit = LineEdit::new().with_placeholder("Enter text...");
        assert_eq!(edit.placeholder(), "Enter text...");
    }

    #[test]
    fn test_read_only_blocks_editing() {
        setup();
        let mut edit = LineEdit::with_text("Hello").with_read_only(true);
        edit.insert_text("x");
        edit.delete_char_before();
        assert_eq!(edit.text(), "Hello");
    }

    #[test]
    fn test_cursor_movement() {
        setup();
        let mut edit = LineEdit::with_text("Hello");

        edit.move_cursor_left(false);
        assert_eq!(edit.cursor_position(), 4);

        edit.move_cursor_right(false);
        assert_eq!(edit.cursor_position(), 5);

        edit.move_cursor_to_start(false);
        assert_eq!(edit.cursor_position(), 0);

        edit.move_cursor_to_end(false);
        assert_eq!(edit.cursor_position(), 5);
    }

    #[test]
    fn test_selection() {
        setup();
        let mut edit = LineEdit::with_text("Hello World");

        edit.select_all();
        assert!(edit.has_selection());
        assert_eq!(edit.selected_text(), "Hello World");

        edit.deselect();
        assert!(!edit.has_selection());
    }

    #[test]
    fn test_selection_with_shift() {
        setup();
        let mut edit = LineEdit::with_text("Hello");
        edit.set_cursor_position(0);

        // Select "He" by moving right twice with shift
        edit.move_cursor_right(true);
        edit.move_cursor_right(true);

        assert!(edit.has_selection());
        assert_eq!(edit.selected_text(), "He");
    }

    #[test]
    fn test_backspace() {
        setup();
        let mut edit = LineEdit::with_text("Hello");

        edit.delete_char_before();
        assert_eq!(edit.text(), "Hell");
    }

    #[test]
    fn test_delete() {
        setup();
        let mut edit = LineEdit::with_text("Hello");
        edit.set_cursor_position(0);

        edit.delete_char_after();
        assert_eq!(edit.text(), "ello");
    }

    #[test]
    fn test_grapheme_boundaries() {
        setup();
        let edit = LineEdit::with_text("Héllo"); // é is 2 bytes

        let next = edit.next_grapheme_boundary(0);
        assert_eq!(next, 1); // After 'H'

        let next = edit.next_grapheme_boundary(1);
        assert!(next > 2); // After 'é' (multi-byte)
    }

    #[test]
    fn test_clear() {
        setup();
        let mut edit = LineEdit::with_text("Hello");
        edit.clear();
        assert_eq!(edit.text(), "");
    }

    #[test]
    fn test_text_changed_signal() {
        setup();
        use std::sync::atomic::{AtomicBool, Ordering};
        use std::sync::Arc;

        let mut edit = LineEdit::new();
        let signal_received = Arc::new(AtomicBool::new(false));
        let signal_clone = signal_received.clone();

        edit.text_changed.connect(move |_| {
            signal_clone.store(true, Ordering::SeqCst);
        });

        edit.set_text("Hello");
        assert!(signal_received.load(Ordering::SeqCst));
    }

    #[test]
    fn test_set_text_same_value_does_not_emit() {
        setup();
        use std::sync::atomic::{AtomicUsize, Ordering};
        use std::sync::Arc;

        let mut edit = LineEdit::with_text("same");
        let count = Arc::new(AtomicUsize::new(0));
        let count_clone = count.clone();
        edit.text_changed.connect(move |_| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        edit.set_text("same");
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_size_hint() {
        setup();
        let edit = LineEdit::new();
        let hint = edit.size_hint();

        assert!(hint.preferred.width > 0.0);
        assert!(hint.preferred.height > 0.0);
        assert!(hint.minimum.is_some());
    }

    #[test]
    fn test_compound_icons_inset_text_rect() {
        setup();
        let mut edit = LineEdit::new();
        edit.widget_base_mut()
            .set_geometry(Rect::new(0.0, 0.0, 300.0, 30.0));
        let plain = edit.text_rect();

        edit.set_compound_icons(None, Some(icon24()));
        let with_right = edit.text_rect();
        assert_eq!(with_right.left(), plain.left());
        assert!(with_right.right() < plain.right());

        edit.set_compound_icons(Some(icon24()), None);
        let with_left = edit.text_rect();
        assert!(with_left.left() > plain.left());
        assert_eq!(with_left.right(), plain.right());

        edit.clear_compound_icons();
        assert_eq!(edit.text_rect(), plain);
    }

    #[test]
    fn test_key_events_edit_text() {
        setup();
        let mut edit = LineEdit::new();

        let mut press = WidgetEvent::KeyPress(KeyPressEvent::text_input("hi"));
        assert!(edit.event(&mut press));
        assert_eq!(edit.text(), "hi");

        let mut backspace = WidgetEvent::KeyPress(KeyPressEvent::new(
            Key::Backspace,
            KeyboardModifiers::NONE,
            "",
        ));
        assert!(edit.event(&mut backspace));
        assert_eq!(edit.text(), "h");
    }

    #[test]
    fn test_mouse_press_places_cursor_and_focuses() {
        setup();
        let mut edit = LineEdit::with_text("Hello");
        edit.widget_base_mut()
            .set_geometry(Rect::new(0.0, 0.0, 300.0, 30.0));

        // Click far to the right of the text: cursor at end.
        let mut press = WidgetEvent::MousePress(MousePressEvent::new(
            MouseButton::Left,
            Point::new(290.0, 15.0),
            KeyboardModifiers::NONE,
        ));
        assert!(edit.event(&mut press));
        assert_eq!(edit.cursor_position(), 5);
        assert!(edit.has_focus());

        // Click at the very left: cursor at start.
        let mut press = WidgetEvent::MousePress(MousePressEvent::new(
            MouseButton::Left,
            Point::new(4.0, 15.0),
            KeyboardModifiers::NONE,
        ));
        assert!(edit.event(&mut press));
        assert_eq!(edit.cursor_position(), 0);
    }

    #[test]
    fn test_stray_release_is_unhandled() {
        setup();
        let mut edit = LineEdit::with_text("Hello");
        edit.widget_base_mut()
            .set_geometry(Rect::new(0.0, 0.0, 300.0, 30.0));

        let mut release = WidgetEvent::MouseRelease(MouseReleaseEvent::new(
            MouseButton::Left,
            Point::new(100.0, 15.0),
            KeyboardModifiers::NONE,
        ));
        assert!(!edit.event(&mut release));
        assert!(!release.is_accepted());
    }

    #[test]
    fn test_cancel_abandons_drag() {
        setup();
        let mut edit = LineEdit::with_text("Hello");
        edit.widget_base_mut()
            .set_geometry(Rect::new(0.0, 0.0, 300.0, 30.0));

        let mut press = WidgetEvent::MousePress(MousePressEvent::new(
            MouseButton::Left,
            Point::new(10.0, 15.0),
            KeyboardModifiers::NONE,
        ));
        edit.event(&mut press);
        assert!(edit.is_dragging);

        let mut cancel = WidgetEvent::MouseCancel(crate::widget::MouseCancelEvent::new());
        assert!(edit.event(&mut cancel));
        assert!(!edit.is_dragging);

        // The release that would have completed the interaction is now stray.
        let mut release = WidgetEvent::MouseRelease(MouseReleaseEvent::new(
            MouseButton::Left,
            Point::new(10.0, 15.0),
            KeyboardModifiers::NONE,
        ));
        assert!(!edit.event(&mut release));
    }

    #[test]
    fn test_paint_records_icon_draw() {
        setup();
        let mut edit = LineEdit::with_text("Hello");
        edit.widget_base_mut()
            .set_geometry(Rect::new(0.0, 0.0, 300.0, 30.0));
        edit.set_compound_icons(None, Some(icon24()));

        let mut renderer = DisplayListRenderer::new();
        let mut ctx = PaintContext::new(&mut renderer, edit.rect());
        edit.paint(&mut ctx);

        let image_cmds: Vec<_> = renderer
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Image { dest, .. } => Some(*dest),
                _ => None,
            })
            .collect();
        assert_eq!(image_cmds.len(), 1);
        // Right-aligned inside the padding.
        assert_eq!(image_cmds[0].right(), 300.0 - CONTENT_PADDING);
    }
}
