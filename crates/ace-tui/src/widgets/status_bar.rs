//! Status bar and notice banner
//!
//! The status bar shows the element count, zoom level and input mode on the
//! left and key hints on the right. The notice banner sits on the top row of
//! the canvas until dismissed.

use ace_app::state::{AppState, Notice, NoticeLevel};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use super::truncate;
use crate::theme::{palette, styles};

/// Status bar widget showing canvas state
pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn mode(&self) -> Span<'static> {
        if self.state.drag.is_active() {
            Span::styled(
                "DRAG",
                styles::status_yellow().add_modifier(Modifier::BOLD),
            )
        } else if self.state.interactive.checked {
            Span::styled(
                "INTERACTIVE",
                styles::status_green().add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled("EDIT", styles::accent_bold())
        }
    }

    fn summary(&self) -> Vec<Span<'static>> {
        let elements = self.state.project.elements().len();
        let loading = self.state.simvars.status.is_loading()
            || self.state.project.instruments_status.is_loading();

        let mut spans = vec![
            Span::raw(" "),
            self.mode(),
            Span::styled(" │ ", styles::text_muted()),
            Span::styled(
                format!(
                    "{} element{}",
                    elements,
                    if elements == 1 { "" } else { "s" }
                ),
                styles::text_primary(),
            ),
            Span::styled(" │ ", styles::text_muted()),
            Span::styled(
                format!("Zoom {:.0}%", self.state.viewport.scale * 100.0),
                styles::text_primary(),
            ),
        ];
        if loading {
            spans.push(Span::styled(" │ ", styles::text_muted()));
            spans.push(Span::styled("Loading…", styles::status_yellow()));
        }
        spans
    }

    fn hints(&self) -> &'static str {
        if self.state.file_dialog.is_some() {
            "Enter select  Esc cancel "
        } else if self.state.context_menu.is_open() {
            "↑↓ move  Enter choose  Esc close "
        } else if self.state.focus.is_some() {
            "Tab next  Esc done "
        } else {
            "m menu  s simvars  p project  i interact  q quit "
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bar = Style::default().bg(palette::PANEL_BG);
        buf.set_style(area, bar);

        let summary = Line::from(self.summary());
        let summary_width = summary.width() as u16;
        Paragraph::new(summary).render(area, buf);

        let hints = self.hints();
        let hints_width = hints.width() as u16;
        if summary_width + hints_width < area.width {
            buf.set_string(area.right() - hints_width, area.y, hints, styles::keybinding());
        }
    }
}

/// One-line notice, errors in red
pub struct NoticeBanner<'a> {
    notice: &'a Notice,
}

impl<'a> NoticeBanner<'a> {
    pub fn new(notice: &'a Notice) -> Self {
        Self { notice }
    }
}

impl Widget for NoticeBanner<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (bg, label) = match self.notice.level {
            NoticeLevel::Error => (palette::STATUS_RED, " ERROR "),
            NoticeLevel::Info => (palette::STATUS_BLUE, " INFO "),
        };
        let style = Style::default().fg(palette::TEXT_PRIMARY).bg(bg);
        buf.set_style(area, style);

        let dismiss = " x dismiss ";
        let room = usize::from(area.width)
            .saturating_sub(label.width())
            .saturating_sub(dismiss.width());
        let line = Line::from(vec![
            Span::styled(label, style.add_modifier(Modifier::BOLD)),
            Span::styled(truncate(&self.notice.message, room), style),
        ]);
        Paragraph::new(line).render(area, buf);

        let dismiss_width = dismiss.width() as u16;
        if area.width > dismiss_width {
            buf.set_string(
                area.right() - dismiss_width,
                area.y,
                dismiss,
                style.add_modifier(Modifier::DIM),
            );
        }
    }
}
