//! Form control widgets
//!
//! One-row renderings of the controls in `ace_app::form`. A text box keeps
//! its last column for the error icon so the icon never moves with the value.

use ace_app::form::{FileInput, SliderInput, TextInput, ToggleInput};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use super::{truncate, truncate_start};
use crate::theme::{palette, styles};

/// Glyph drawn in a text box's last column when it carries an error
pub const ERROR_ICON: &str = "!";

fn well_style(focused: bool) -> Style {
    let style = Style::default().bg(palette::INPUT_BG);
    if focused {
        style.fg(palette::TEXT_PRIMARY).add_modifier(Modifier::UNDERLINED)
    } else {
        style.fg(palette::TEXT_SECONDARY)
    }
}

fn render_well(area: Rect, buf: &mut Buffer, text: String, style: Style, error: bool) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    buf.set_style(Rect::new(area.x, area.y, area.width, 1), style);
    buf.set_stringn(area.x, area.y, text, usize::from(area.width - 1), style);

    if error {
        buf.set_string(
            area.right() - 1,
            area.y,
            ERROR_ICON,
            styles::status_red()
                .bg(palette::INPUT_BG)
                .add_modifier(Modifier::BOLD),
        );
    }
}

/// Editable text box
pub struct TextInputView<'a> {
    input: &'a TextInput,
    focused: bool,
}

impl<'a> TextInputView<'a> {
    pub fn new(input: &'a TextInput) -> Self {
        Self {
            input,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for TextInputView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let room = usize::from(area.width.saturating_sub(1));
        let mut text = self.input.value().to_string();
        if self.focused && !self.input.is_read_only() {
            text.push('▏');
        }
        // Keep the caret in view while typing
        let text = if self.focused {
            truncate_start(&text, room)
        } else {
            truncate(&text, room)
        };
        render_well(
            area,
            buf,
            text,
            well_style(self.focused),
            self.input.error().is_some(),
        );
    }
}

/// Read-only path display that opens the file dialog when activated
pub struct FileInputView<'a> {
    input: &'a FileInput,
    focused: bool,
}

impl<'a> FileInputView<'a> {
    pub fn new(input: &'a FileInput) -> Self {
        Self {
            input,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for FileInputView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let room = usize::from(area.width.saturating_sub(3));
        let value = self.input.value();
        let text = if value.is_empty() {
            "(none)".to_string()
        } else {
            truncate_start(value, room)
        };
        let style = if value.is_empty() {
            well_style(self.focused).fg(palette::TEXT_MUTED)
        } else {
            well_style(self.focused)
        };
        render_well(
            area,
            buf,
            text,
            style,
            self.input.input.error().is_some(),
        );

        if area.width > 3 {
            let browse = if self.focused {
                styles::accent_bold()
            } else {
                styles::text_muted()
            };
            buf.set_string(area.right() - 2, area.y, "…", browse.bg(palette::INPUT_BG));
        }
    }
}

/// Horizontal slider with its value as a percentage
pub struct SliderView<'a> {
    slider: &'a SliderInput,
    focused: bool,
}

impl<'a> SliderView<'a> {
    pub fn new(slider: &'a SliderInput) -> Self {
        Self {
            slider,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for SliderView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let label = format!(" {:>4.0}%", self.slider.value() * 100.0);
        let track_width = usize::from(area.width).saturating_sub(label.width());
        if track_width < 2 {
            Paragraph::new(label).render(area, buf);
            return;
        }

        let knob = ((track_width - 1) as f64 * self.slider.fraction()).round() as usize;
        let knob_style = if self.focused {
            styles::accent_bold()
        } else {
            styles::text_primary()
        };

        let line = Line::from(vec![
            Span::styled("━".repeat(knob), styles::accent()),
            Span::styled("●", knob_style),
            Span::styled(
                "─".repeat(track_width - knob - 1),
                styles::text_muted(),
            ),
            Span::styled(label, styles::text_secondary()),
        ]);
        Paragraph::new(line).render(area, buf);
    }
}

/// Checkbox with a label
pub struct ToggleView<'a> {
    toggle: &'a ToggleInput,
    label: &'a str,
    focused: bool,
}

impl<'a> ToggleView<'a> {
    pub fn new(toggle: &'a ToggleInput, label: &'a str) -> Self {
        Self {
            toggle,
            label,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for ToggleView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (mark, mark_style) = if self.toggle.checked {
            ("[x] ", styles::status_green())
        } else {
            ("[ ] ", styles::text_muted())
        };
        let label_style = if self.focused {
            styles::accent_bold()
        } else {
            styles::text_primary()
        };
        let room = usize::from(area.width).saturating_sub(mark.width());
        let line = Line::from(vec![
            Span::styled(mark, mark_style),
            Span::styled(truncate(self.label, room), label_style),
        ]);
        Paragraph::new(line).render(area, buf);
    }
}

/// One-line hint shown next to a hovered error icon
pub struct Tooltip<'a> {
    text: &'a str,
}

impl<'a> Tooltip<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }

    /// Area for the tooltip below `anchor`, shifted left to stay inside `bounds`
    pub fn area(&self, anchor: (u16, u16), bounds: Rect) -> Option<Rect> {
        let width = (self.text.width() as u16).saturating_add(2).min(bounds.width);
        let y = anchor.1.saturating_add(1);
        if width == 0 || y >= bounds.bottom() {
            return None;
        }
        let x = anchor
            .0
            .min(bounds.right().saturating_sub(width))
            .max(bounds.x);
        Some(Rect::new(x, y, width, 1))
    }
}

impl Widget for Tooltip<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = Style::default()
            .fg(palette::TEXT_PRIMARY)
            .bg(palette::STATUS_RED);
        buf.set_style(area, style);
        let text = truncate(self.text, usize::from(area.width.saturating_sub(2)));
        buf.set_string(area.x.saturating_add(1), area.y, text, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ace_host::OpenDialogOptions;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (buf.area.left()..buf.area.right())
            .map(|x| buf[(x, y)].symbol())
            .collect()
    }

    #[test]
    fn test_text_input_shows_value() {
        let input = TextInput::new("name").with_value("A320");
        let area = Rect::new(0, 0, 12, 1);
        let mut buf = Buffer::empty(area);
        TextInputView::new(&input).render(area, &mut buf);

        assert!(row_text(&buf, 0).starts_with("A320"));
        assert_eq!(buf[(11, 0)].symbol(), " ");
    }

    #[test]
    fn test_error_icon_in_last_column() {
        let mut input = TextInput::new("name");
        input.set_error(Some("Project name cannot be empty".into()));
        let area = Rect::new(0, 0, 12, 1);
        let mut buf = Buffer::empty(area);
        TextInputView::new(&input).render(area, &mut buf);

        assert_eq!(buf[(11, 0)].symbol(), ERROR_ICON);
        assert_eq!(buf[(11, 0)].fg, palette::STATUS_RED);
    }

    #[test]
    fn test_long_path_keeps_its_end() {
        let input = FileInput::new("instruments", OpenDialogOptions::directory())
            .with_value("/projects/a320/panel/instruments");
        let area = Rect::new(0, 0, 16, 1);
        let mut buf = Buffer::empty(area);
        FileInputView::new(&input).render(area, &mut buf);

        let text = row_text(&buf, 0);
        assert!(text.starts_with('…'));
        assert!(text.contains("instrument"));
    }

    #[test]
    fn test_slider_shows_percentage() {
        let slider = SliderInput::new(0.25, 4.0, 0.05, 1.0);
        let area = Rect::new(0, 0, 20, 1);
        let mut buf = Buffer::empty(area);
        SliderView::new(&slider).render(area, &mut buf);

        let text = row_text(&buf, 0);
        assert!(text.contains("100%"));
        assert!(text.contains('●'));
    }

    #[test]
    fn test_toggle_mark() {
        let toggle = ToggleInput::new(true);
        let area = Rect::new(0, 0, 30, 1);
        let mut buf = Buffer::empty(area);
        ToggleView::new(&toggle, "Interactive").render(area, &mut buf);

        assert!(row_text(&buf, 0).starts_with("[x] Interactive"));
    }

    #[test]
    fn test_tooltip_stays_inside_bounds() {
        let tooltip = Tooltip::new("Project name cannot be empty");
        let bounds = Rect::new(0, 0, 40, 10);

        let area = tooltip.area((28, 4), bounds).unwrap();
        assert_eq!(area.y, 5);
        assert!(area.right() <= bounds.right());

        assert_eq!(tooltip.area((28, 9), bounds), None);
    }
}
