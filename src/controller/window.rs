/// Screen position of the main window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowPosition {
    /// Horizontal offset in pixels
    pub x: i32,
    /// Vertical offset in pixels
    pub y: i32,
}

/// What the view has to do with the main window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowCommand {
    /// Hide the window, keeping the application alive
    Hide,

    /// Show the window, moving it to `restore` when known
    Show {
        /// Position saved at the last hide
        restore: Option<WindowPosition>,
    },

    /// Close the application
    Quit,
}

/// Visibility bookkeeping of the main window
///
/// Closing the window or pressing Escape only hides it; the tray icon
/// toggles it back. The position at hide time is remembered and handed back
/// on the next show. Views that cannot report a position pass `None` and
/// the previously saved one is kept.
///
/// Without a tray nothing can show the window again, so closing quits and
/// Escape leaves the window where it is.
#[derive(Debug, Clone, Default)]
pub struct WindowLifecycle {
    visible: bool,
    can_restore: bool,
    saved: Option<WindowPosition>,
}

impl WindowLifecycle {
    /// Start with the given visibility and no saved position.
    ///
    /// `can_restore` tells whether a tray icon exists to bring a hidden
    /// window back.
    pub fn new(visible: bool, can_restore: bool) -> Self {
        Self {
            visible,
            can_restore,
            saved: None,
        }
    }

    /// Whether the window is currently shown.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Position captured at the last hide.
    pub fn saved_position(&self) -> Option<WindowPosition> {
        self.saved
    }

    /// The close button was pressed.
    pub fn close_requested(&mut self, current: Option<WindowPosition>) -> WindowCommand {
        if !self.can_restore {
            self.visible = false;
            return WindowCommand::Quit;
        }
        self.hide(current)
    }

    /// Escape was pressed while the window had focus.
    pub fn escape_pressed(&mut self, current: Option<WindowPosition>) -> WindowCommand {
        if !self.can_restore {
            return WindowCommand::Show { restore: None };
        }
        self.hide(current)
    }

    /// The tray icon was activated: toggle visibility.
    pub fn tray_activated(&mut self, current: Option<WindowPosition>) -> WindowCommand {
        if self.visible {
            self.hide(current)
        } else {
            self.show()
        }
    }

    fn hide(&mut self, current: Option<WindowPosition>) -> WindowCommand {
        if current.is_some() {
            self.saved = current;
        }
        self.visible = false;
        WindowCommand::Hide
    }

    fn show(&mut self) -> WindowCommand {
        self.visible = true;
        WindowCommand::Show {
            restore: self.saved,
        }
    }
}

/// Label of the expander revealing the secondary controls
pub struct Expander;

impl Expander {
    /// Shown while the secondary controls are hidden.
    pub const COLLAPSED: &'static str = "More";

    /// Shown while the secondary controls are revealed.
    pub const EXPANDED: &'static str = "Less";

    /// Label to show after the expander switched to `expanded`.
    pub fn toggled(expanded: bool) -> &'static str {
        if expanded {
            Self::EXPANDED
        } else {
            Self::COLLAPSED
        }
    }
}
