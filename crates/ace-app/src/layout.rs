//! Screen geometry shared by hit-testing and rendering
//!
//! The workspace is a fixed side menu on the left, the canvas filling the
//! rest, and a one-line status bar at the bottom. All coordinates are
//! terminal cells.

use crate::project_form::ProjectField;
use crate::state::MenuTab;

/// Rectangle in terminal cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenRect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl ScreenRect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    pub fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.x && column < self.right() && row >= self.y && row < self.bottom()
    }

    /// The area inside a one-cell border
    pub fn inner(&self) -> ScreenRect {
        ScreenRect::new(
            self.x.saturating_add(1),
            self.y.saturating_add(1),
            self.width.saturating_sub(2),
            self.height.saturating_sub(2),
        )
    }

    /// Move the rectangle so it lies inside `bounds` where possible
    pub fn fit_within(&self, bounds: ScreenRect) -> ScreenRect {
        let width = self.width.min(bounds.width);
        let height = self.height.min(bounds.height);
        let x = self.x.min(bounds.right().saturating_sub(width)).max(bounds.x);
        let y = self.y.min(bounds.bottom().saturating_sub(height)).max(bounds.y);
        ScreenRect::new(x, y, width, height)
    }
}

/// Where a pointer landed inside the side menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SideMenuTarget {
    Tab(MenuTab),
    Field(ProjectField),
    InteractiveToggle,
}

/// Rows of the side menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SideMenuLayout {
    pub simvars_tab: ScreenRect,
    pub project_tab: ScreenRect,
    /// One row per project field, in [`ProjectField::ALL`] order
    pub fields: [ScreenRect; ProjectField::COUNT],
    pub interactive_toggle: ScreenRect,
}

impl SideMenuLayout {
    fn compute(area: ScreenRect) -> Self {
        let inner = area.inner();
        let row = |offset: u16| {
            if offset < inner.height {
                ScreenRect::new(inner.x, inner.y + offset, inner.width, 1)
            } else {
                ScreenRect::default()
            }
        };

        let mut fields = [ScreenRect::default(); ProjectField::COUNT];
        for (i, field) in fields.iter_mut().enumerate() {
            // Two rows per field: label, then the control
            let label_row = 3 + 2 * i as u16;
            *field = row(label_row + 1);
        }

        let toggle_row = inner.height.saturating_sub(1);
        Self {
            simvars_tab: row(0),
            project_tab: row(1),
            fields,
            interactive_toggle: if inner.height > 2 {
                row(toggle_row)
            } else {
                ScreenRect::default()
            },
        }
    }

    pub fn field(&self, field: ProjectField) -> ScreenRect {
        self.fields[field.position()]
    }

    /// Cell holding the error icon of a field's text box
    pub fn error_icon(&self, field: ProjectField) -> Option<(u16, u16)> {
        let rect = self.field(field);
        (!rect.is_empty()).then(|| (rect.right() - 1, rect.y))
    }

    /// Hit-test a cell; project fields only exist while the Project tab is open
    pub fn hit(&self, column: u16, row: u16, project_tab_open: bool) -> Option<SideMenuTarget> {
        if self.simvars_tab.contains(column, row) {
            return Some(SideMenuTarget::Tab(MenuTab::SimVars));
        }
        if self.project_tab.contains(column, row) {
            return Some(SideMenuTarget::Tab(MenuTab::Project));
        }
        if self.interactive_toggle.contains(column, row) {
            return Some(SideMenuTarget::InteractiveToggle);
        }
        if project_tab_open {
            return ProjectField::ALL
                .iter()
                .copied()
                .find(|field| self.field(*field).contains(column, row))
                .map(SideMenuTarget::Field);
        }
        None
    }
}

/// Top-level regions of the workspace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WorkspaceLayout {
    pub screen: ScreenRect,
    pub side_menu: ScreenRect,
    pub canvas: ScreenRect,
    pub status: ScreenRect,
    pub side: SideMenuLayout,
}

impl WorkspaceLayout {
    pub fn compute(width: u16, height: u16, side_menu_width: u16) -> Self {
        let screen = ScreenRect::new(0, 0, width, height);
        let body_height = height.saturating_sub(1);
        let side_width = side_menu_width.min(width);

        let side_menu = ScreenRect::new(0, 0, side_width, body_height);
        let canvas = ScreenRect::new(side_width, 0, width - side_width, body_height);
        let status = if height > 0 {
            ScreenRect::new(0, body_height, width, 1)
        } else {
            ScreenRect::default()
        };

        Self {
            screen,
            side_menu,
            canvas,
            status,
            side: SideMenuLayout::compute(side_menu),
        }
    }
}
