//! Message types for the application (TEA pattern)

use ace_core::{InstrumentConfig, SimVarKey, SimVarMap};
use ace_host::DialogSelection;
use glam::DVec2;
use uuid::Uuid;

use crate::file_dialog::DialogTarget;
use crate::input_key::{InputKey, PointerEvent};
use crate::project_form::ProjectField;
use crate::project_store::PathBinding;
use crate::state::MenuTab;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    // ─────────────────────────────────────────────────────────
    // Terminal
    // ─────────────────────────────────────────────────────────
    /// Keyboard event from terminal
    Key(InputKey),

    /// Mouse event from terminal
    Pointer(PointerEvent),

    /// Terminal size changed (also sent once at startup)
    Resize { width: u16, height: u16 },

    /// Force quit (q, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Workspace Lifecycle
    // ─────────────────────────────────────────────────────────
    /// Workspace shown: issue the host loads
    Mount,

    /// Workspace torn down: abandon outstanding loads
    Unmount,

    /// `load_simvars` answered. `issued_for` is the project active when it was requested.
    SimVarsLoaded {
        mount_id: u64,
        issued_for: Option<String>,
        simvars: SimVarMap,
    },

    SimVarsLoadFailed {
        mount_id: u64,
        issued_for: Option<String>,
        error: String,
    },

    /// `load_instruments` answered
    InstrumentsLoaded {
        mount_id: u64,
        issued_for: Option<String>,
        instruments: Vec<InstrumentConfig>,
    },

    InstrumentsLoadFailed {
        mount_id: u64,
        issued_for: Option<String>,
        error: String,
    },

    // ─────────────────────────────────────────────────────────
    // Canvas
    // ─────────────────────────────────────────────────────────
    /// Pointer pressed on an element; positions are client pixels
    DragStarted {
        uuid: Uuid,
        pointer: DVec2,
        scale: Option<f64>,
    },

    DragMoved { pointer: DVec2 },

    /// Pointer released; `over_canvas` is true when released over the drop target
    DragEnded { over_canvas: bool },

    /// Esc or focus loss during a drag
    DragCancelled,

    /// Pan by a client-pixel delta
    PanBy { delta: DVec2 },

    /// Wheel ticks at a cell (positive zooms in)
    ZoomAt { column: u16, row: u16, ticks: i32 },

    /// Zoom about the canvas centre
    ZoomBy { ticks: i32 },

    ResetView,

    /// Remove the selected element from the project
    RemoveSelected,

    // ─────────────────────────────────────────────────────────
    // Context Menu
    // ─────────────────────────────────────────────────────────
    /// Right-click on the canvas background at client coordinates
    OpenCanvasMenu { x: u16, y: u16 },

    CloseMenu,

    /// Move the highlighted menu entry
    MenuMove { delta: isize },

    /// Run the menu entry at a position
    MenuActivate { index: usize },

    /// Exit of the SimVars menu; also closes the side-menu tab
    SimVarsMenuExited,

    ToggleSimVarPin(SimVarKey),

    // ─────────────────────────────────────────────────────────
    // Side Menu and Project Settings
    // ─────────────────────────────────────────────────────────
    SelectMenuTab(MenuTab),

    ToggleInteractive,

    /// Give a project field focus (`None` blurs)
    FocusField(Option<ProjectField>),

    /// Commit the name field to the project
    RenameProject { name: String },

    /// Zoom slider moved
    ZoomSliderChanged { value: f64 },

    OpenFileDialog(PathBinding),

    /// Text typed into the open file dialog
    FileDialogInput { text: String },

    /// Enter in the file dialog
    FileDialogSubmit,

    /// Dialog closed; `None` means cancelled
    FileDialogClosed {
        target: DialogTarget,
        selection: Option<DialogSelection>,
    },

    /// A file input's callback
    PathSelected {
        binding: PathBinding,
        selection: DialogSelection,
    },

    DismissNotice,
}
