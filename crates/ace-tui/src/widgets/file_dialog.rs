//! File dialog modal
//!
//! A centered path prompt over the dimmed workspace.

use ace_app::file_dialog::FileDialogState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::form_controls::TextInputView;
use super::modal_overlay::{centered_rect, clear_area, dim_background, render_shadow};
use super::truncate;
use crate::theme::styles;

const DIALOG_WIDTH: u16 = 64;
const DIALOG_HEIGHT: u16 = 8;

pub struct FileDialog<'a> {
    dialog: &'a FileDialogState,
}

impl<'a> FileDialog<'a> {
    pub fn new(dialog: &'a FileDialogState) -> Self {
        Self { dialog }
    }

    /// What the dialog accepts, shown while there is no error
    fn hint(&self) -> String {
        let options = &self.dialog.options;
        if options.directory {
            return "Choose a directory".to_string();
        }
        let extensions: Vec<&str> = options
            .filters
            .iter()
            .flat_map(|f| f.extensions.iter().map(String::as_str))
            .collect();
        let mut hint = if extensions.is_empty() {
            "Choose a file".to_string()
        } else {
            format!("Choose a file ({})", extensions.join(", "))
        };
        if options.multiple {
            hint.push_str("; separate paths with ;");
        }
        hint
    }
}

impl Widget for FileDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        dim_background(buf, area);

        let modal = centered_rect(DIALOG_WIDTH, DIALOG_HEIGHT, area);
        clear_area(buf, modal);
        render_shadow(buf, modal);

        let title = format!(" {} ", self.dialog.title());
        let block = styles::popup_block(&title);
        let inner = block.inner(modal);
        block.render(modal, buf);
        if inner.height < 4 || inner.width < 4 {
            return;
        }

        let padded = Rect::new(inner.x + 1, inner.y, inner.width - 2, inner.height);
        let room = usize::from(padded.width);

        TextInputView::new(&self.dialog.input)
            .focused(true)
            .render(Rect::new(padded.x, padded.y + 1, padded.width, 1), buf);

        let message = match self.dialog.input.error() {
            Some(error) => Line::styled(truncate(error, room), styles::status_red()),
            None => Line::styled(truncate(&self.hint(), room), styles::text_muted()),
        };
        Paragraph::new(message).render(Rect::new(padded.x, padded.y + 2, padded.width, 1), buf);

        let keys = Line::from(vec![
            Span::styled("Enter", styles::keybinding()),
            Span::styled(" select  ", styles::text_secondary()),
            Span::styled("Esc", styles::keybinding()),
            Span::styled(" cancel", styles::text_secondary()),
        ]);
        Paragraph::new(keys).render(
            Rect::new(padded.x, padded.bottom().saturating_sub(1), padded.width, 1),
            buf,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ace_app::file_dialog::DialogTarget;
    use ace_app::project_store::PathBinding;
    use ace_host::{DialogFilter, OpenDialogOptions};
    use ratatui::{backend::TestBackend, Terminal};

    fn render(dialog: &FileDialogState) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| frame.render_widget(FileDialog::new(dialog), frame.area()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_title_and_seed_path() {
        let options = OpenDialogOptions::directory()
            .with_title("Select bundles directory")
            .with_default_path("/projects/a320/bundles");
        let dialog =
            FileDialogState::new(DialogTarget::ProjectPath(PathBinding::Bundles), options, "");

        let content = render(&dialog);
        assert!(content.contains("Select bundles directory"));
        assert!(content.contains("/projects/a320/bundles"));
        assert!(content.contains("Choose a directory"));
    }

    #[test]
    fn test_error_replaces_hint() {
        let options = OpenDialogOptions::directory();
        let mut dialog = FileDialogState::new(
            DialogTarget::ProjectPath(PathBinding::Instruments),
            options,
            "/definitely/not/here",
        );
        assert!(dialog.submit().is_none());

        let content = render(&dialog);
        assert!(content.contains("Not a directory"));
        assert!(!content.contains("Choose a directory"));
    }

    #[test]
    fn test_filter_hint_lists_extensions() {
        let options = OpenDialogOptions::default()
            .with_filter(DialogFilter::new("Panel", &["xml", "cfg"]))
            .with_multiple(true);
        let dialog = FileDialogState::new(
            DialogTarget::ProjectPath(PathBinding::HtmlUi),
            options,
            "",
        );

        let hint = FileDialog::new(&dialog).hint();
        assert!(hint.contains("xml, cfg"));
        assert!(hint.contains("separate paths"));
    }
}
