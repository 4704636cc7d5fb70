//! Context menu register
//!
//! At most one pop-up menu is open. Opening another replaces it outright: the
//! replaced menu's exit logic does not run.

use ace_core::InstrumentConfig;
use unicode_width::UnicodeWidthStr;

use crate::layout::ScreenRect;

/// Width of the SimVars menu including its border
pub const SIMVARS_MENU_WIDTH: u16 = 44;

/// Menu opened by right-clicking the canvas background
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasMenu {
    /// Client column of the click
    pub x: u16,
    /// Client row of the click
    pub y: u16,
    pub selected: usize,
}

impl CanvasMenu {
    pub fn new(x: u16, y: u16) -> Self {
        Self { x, y, selected: 0 }
    }
}

/// Entry of the canvas menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanvasMenuItem {
    /// Place an instrument from the catalog, by index
    Place { index: String, name: String },
    ResetView,
}

impl CanvasMenuItem {
    pub fn label(&self) -> String {
        match self {
            CanvasMenuItem::Place { name, .. } => format!("Place {}", name),
            CanvasMenuItem::ResetView => "Reset view".to_string(),
        }
    }
}

/// Items of the canvas menu for the current catalog
pub fn canvas_menu_items(instruments: &[InstrumentConfig]) -> Vec<CanvasMenuItem> {
    instruments
        .iter()
        .map(|i| CanvasMenuItem::Place {
            index: i.index.clone(),
            name: i.name.clone(),
        })
        .chain(std::iter::once(CanvasMenuItem::ResetView))
        .collect()
}

/// Menu listing the SimVars, opened from the side menu
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimVarsMenu {
    pub selected: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActiveMenu {
    Canvas(CanvasMenu),
    SimVars(SimVarsMenu),
}

impl ActiveMenu {
    pub fn selected(&self) -> usize {
        match self {
            ActiveMenu::Canvas(menu) => menu.selected,
            ActiveMenu::SimVars(menu) => menu.selected,
        }
    }

    pub fn select(&mut self, index: usize) {
        match self {
            ActiveMenu::Canvas(menu) => menu.selected = index,
            ActiveMenu::SimVars(menu) => menu.selected = index,
        }
    }

    /// Move the selection by `delta`, wrapping within `len` items
    pub fn move_selection(&mut self, delta: isize, len: usize) {
        if len == 0 {
            return;
        }
        let current = self.selected().min(len - 1) as isize;
        let next = (current + delta).rem_euclid(len as isize) as usize;
        self.select(next);
    }
}

/// Single-slot register holding the open menu
#[derive(Debug, Default)]
pub struct ContextMenuState {
    active: Option<ActiveMenu>,
}

impl ContextMenuState {
    pub fn active(&self) -> Option<&ActiveMenu> {
        self.active.as_ref()
    }

    pub fn active_mut(&mut self) -> Option<&mut ActiveMenu> {
        self.active.as_mut()
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// Open a menu, returning whatever it replaced
    pub fn set(&mut self, menu: ActiveMenu) -> Option<ActiveMenu> {
        self.active.replace(menu)
    }

    pub fn clear(&mut self) -> Option<ActiveMenu> {
        self.active.take()
    }
}

/// Bordered rectangle of the canvas menu, anchored at the click
pub fn canvas_menu_rect(menu: &CanvasMenu, items: &[CanvasMenuItem], screen: ScreenRect) -> ScreenRect {
    let widest = items
        .iter()
        .map(|item| item.label().width())
        .max()
        .unwrap_or(0);
    let width = (widest as u16).saturating_add(4);
    let height = (items.len() as u16).saturating_add(2);
    ScreenRect::new(menu.x, menu.y, width, height).fit_within(screen)
}

/// Bordered rectangle of the SimVars menu, next to the side menu
pub fn simvars_menu_rect(item_count: usize, side_menu: ScreenRect, screen: ScreenRect) -> ScreenRect {
    let rows = item_count.max(1) as u16;
    ScreenRect::new(side_menu.right(), side_menu.y, SIMVARS_MENU_WIDTH, rows.saturating_add(2))
        .fit_within(screen)
}

/// Index of the menu item under a cell, if any
pub fn item_at(rect: ScreenRect, item_count: usize, column: u16, row: u16) -> Option<usize> {
    let inner = rect.inner();
    if !inner.contains(column, row) {
        return None;
    }
    let index = usize::from(row - inner.y);
    (index < item_count).then_some(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ace_host::test_utils::test_instrument;

    #[test]
    fn test_set_replaces_without_exit() {
        let mut menus = ContextMenuState::default();
        menus.set(ActiveMenu::SimVars(SimVarsMenu::default()));

        let replaced = menus.set(ActiveMenu::Canvas(CanvasMenu::new(5, 6)));
        assert_eq!(replaced, Some(ActiveMenu::SimVars(SimVarsMenu::default())));
        assert_eq!(menus.active(), Some(&ActiveMenu::Canvas(CanvasMenu::new(5, 6))));
    }

    #[test]
    fn test_clear() {
        let mut menus = ContextMenuState::default();
        assert!(menus.clear().is_none());
        menus.set(ActiveMenu::Canvas(CanvasMenu::new(0, 0)));
        assert!(menus.clear().is_some());
        assert!(!menus.is_open());
    }

    #[test]
    fn test_canvas_menu_items_from_catalog() {
        let items = canvas_menu_items(&[test_instrument("PFD", 1.0, 1.0)]);
        let labels: Vec<_> = items.iter().map(CanvasMenuItem::label).collect();
        assert_eq!(labels, vec!["Place PFD", "Reset view"]);
    }

    #[test]
    fn test_move_selection_wraps() {
        let mut menu = ActiveMenu::SimVars(SimVarsMenu::default());
        menu.move_selection(-1, 3);
        assert_eq!(menu.selected(), 2);
        menu.move_selection(1, 3);
        assert_eq!(menu.selected(), 0);
    }

    #[test]
    fn test_canvas_menu_rect_at_click() {
        let items = canvas_menu_items(&[]);
        let rect = canvas_menu_rect(&CanvasMenu::new(40, 10), &items, ScreenRect::new(0, 0, 120, 40));
        assert_eq!((rect.x, rect.y), (40, 10));
        assert_eq!(rect.height, 3);
    }

    #[test]
    fn test_canvas_menu_rect_fits_wide_labels() {
        // Each of these glyphs takes two terminal columns
        let items = canvas_menu_items(&[test_instrument("主要飛行表示", 1.0, 1.0)]);
        let rect = canvas_menu_rect(&CanvasMenu::new(0, 0), &items, ScreenRect::new(0, 0, 120, 40));
        assert_eq!(rect.width, "Place ".len() as u16 + 12 + 4);
    }

    #[test]
    fn test_item_at() {
        let rect = ScreenRect::new(10, 10, 20, 5);
        assert_eq!(item_at(rect, 3, 12, 11), Some(0));
        assert_eq!(item_at(rect, 3, 12, 13), Some(2));
        assert_eq!(item_at(rect, 3, 12, 10), None);
        assert_eq!(item_at(rect, 1, 12, 12), None);
    }
}
