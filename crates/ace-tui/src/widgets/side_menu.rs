//! Side menu widget
//!
//! Tabs for the SimVars menu and the project settings panel, the load
//! status of both stores, pinned SimVars and the interactive toggle. Row
//! positions come from `ace_app::layout::SideMenuLayout` so clicks land on
//! what is drawn.

use ace_app::layout::ScreenRect;
use ace_app::project_form::{ProjectField, ProjectForm};
use ace_app::state::{AppState, MenuTab};
use ace_app::LoadStatus;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::form_controls::{FileInputView, SliderView, TextInputView, ToggleView};
use super::truncate;
use crate::layout::rect;
use crate::theme::{palette, styles};

pub const INTERACTIVE_LABEL: &str = "Interactive instruments";

pub struct SideMenu<'a> {
    state: &'a AppState,
}

impl<'a> SideMenu<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn render_tab(&self, tab: MenuTab, area: ScreenRect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let open = self.state.menu_tab == Some(tab);
        let (label, status) = match tab {
            MenuTab::SimVars => ("SimVars", self.simvars_badge()),
            MenuTab::Project => ("Project", None),
        };

        let style = if open {
            styles::focused_selected()
        } else {
            styles::text_primary()
        };
        let marker = if open { "▾ " } else { "▸ " };

        let mut spans = vec![Span::styled(marker, style), Span::styled(label, style)];
        if let Some(badge) = status {
            spans.push(Span::raw(" "));
            spans.push(badge);
        }

        let area = rect(area);
        buf.set_style(area, style);
        Paragraph::new(Line::from(spans)).render(area, buf);
    }

    fn simvars_badge(&self) -> Option<Span<'static>> {
        status_span(&self.state.simvars.status, self.state.simvars.len())
    }

    fn render_project_form(&self, form: &ProjectForm, buf: &mut Buffer) {
        let side = &self.state.layout.side;
        for field in ProjectField::ALL {
            let control = side.field(field);
            if control.is_empty() || control.y == 0 {
                continue;
            }
            let focused = self.state.focus == Some(field);

            let label_style = if focused {
                styles::accent_bold()
            } else {
                styles::text_secondary()
            };
            buf.set_stringn(
                control.x,
                control.y - 1,
                field.label(),
                usize::from(control.width),
                label_style,
            );

            let area = rect(control);
            match field {
                ProjectField::Name => {
                    TextInputView::new(&form.name)
                        .focused(focused)
                        .render(area, buf);
                }
                ProjectField::Zoom => {
                    SliderView::new(&form.zoom)
                        .focused(focused)
                        .render(area, buf);
                }
                path_field => {
                    if let Some(binding) = path_field.binding() {
                        FileInputView::new(form.file_input(binding))
                            .focused(focused)
                            .render(area, buf);
                    }
                }
            }
        }
    }

    /// Load status of both stores and the pinned SimVars
    fn render_overview(&self, inner: ScreenRect, buf: &mut Buffer) {
        let mut lines = vec![
            status_line(
                "SimVars",
                &self.state.simvars.status,
                self.state.simvars.len(),
            ),
            status_line(
                "Instruments",
                &self.state.project.instruments_status,
                self.state.project.instruments().len(),
            ),
            Line::default(),
            Line::styled(
                "Pinned",
                styles::text_secondary().add_modifier(Modifier::BOLD),
            ),
        ];

        let room = usize::from(inner.width);
        let mut pinned = self.state.simvars.pinned().peekable();
        if pinned.peek().is_none() {
            lines.push(Line::styled("  none", styles::text_muted()));
        }
        for var in pinned {
            let text = format!("  {} {} {}", var.key(), var.value, var.unit);
            lines.push(Line::styled(truncate(&text, room), styles::text_primary()));
        }

        // Rows 3 and up, stopping above the toggle
        let top = inner.y.saturating_add(3);
        let bottom = self.state.layout.side.interactive_toggle.y;
        if bottom <= top {
            return;
        }
        let area = Rect::new(inner.x, top, inner.width, bottom - top);
        Paragraph::new(lines).render(area, buf);
    }
}

impl Widget for SideMenu<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = self
            .state
            .project
            .name()
            .map(|name| truncate(name, usize::from(area.width.saturating_sub(4))))
            .unwrap_or_else(|| "No project".to_string());
        let block = styles::glass_block(self.state.menu_tab.is_some())
            .title(format!(" {} ", title))
            .style(Style::default().bg(palette::PANEL_BG));
        block.render(area, buf);

        let side = &self.state.layout.side;
        self.render_tab(MenuTab::SimVars, side.simvars_tab, buf);
        self.render_tab(MenuTab::Project, side.project_tab, buf);

        match (&self.state.menu_tab, &self.state.project_form) {
            (Some(MenuTab::Project), Some(form)) => self.render_project_form(form, buf),
            _ => self.render_overview(self.state.layout.side_menu.inner(), buf),
        }

        if !side.interactive_toggle.is_empty() {
            ToggleView::new(&self.state.interactive, INTERACTIVE_LABEL)
                .render(rect(side.interactive_toggle), buf);
        }
    }
}

fn status_span(status: &LoadStatus, count: usize) -> Option<Span<'static>> {
    match status {
        LoadStatus::Idle => None,
        LoadStatus::Loading => Some(Span::styled("…", styles::status_yellow())),
        LoadStatus::Loaded => Some(Span::styled(count.to_string(), styles::text_muted())),
        LoadStatus::Failed(_) => Some(Span::styled("!", styles::status_red())),
    }
}

fn status_line(label: &'static str, status: &LoadStatus, count: usize) -> Line<'static> {
    let state = match status {
        LoadStatus::Idle => Span::styled("not loaded", styles::text_muted()),
        LoadStatus::Loading => Span::styled("loading…", styles::status_yellow()),
        LoadStatus::Loaded => Span::styled(count.to_string(), styles::status_green()),
        LoadStatus::Failed(_) => Span::styled("failed", styles::status_red()),
    };
    Line::from(vec![
        Span::styled(format!("{:<12}", label), styles::text_secondary()),
        state,
    ])
}
