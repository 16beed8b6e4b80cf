// src/window_state.rs

/// Three-way dialog sizing mode shared by every window that supports
/// minimize/maximize, including ones that do not embed the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowMode {
    Normal,
    Maximized,
    Minimized,
}

/// Normal/Maximized/Minimized controller with pre-minimize memory. One
/// instance per dialog; instances share nothing, so two open dialogs cannot
/// clobber each other's remembered size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowStateMachine {
    initial: WindowMode,
    mode: WindowMode,
    pre_minimize: WindowMode,
}

impl WindowStateMachine {
    /// `initial` is caller-supplied; dialogs differ on whether they open
    /// Normal or Maximized. A Minimized initial makes no sense and is
    /// treated as Normal.
    pub fn new(initial: WindowMode) -> Self {
        let initial = if initial == WindowMode::Minimized {
            WindowMode::Normal
        } else {
            initial
        };
        Self {
            initial,
            mode: initial,
            pre_minimize: initial,
        }
    }

    pub fn mode(&self) -> WindowMode {
        self.mode
    }

    pub fn is_minimized(&self) -> bool {
        self.mode == WindowMode::Minimized
    }

    /// Normal <-> Maximized. No-op while minimized. Returns true when the
    /// visible footprint changed, so callers know to notify an embedded map.
    pub fn toggle_maximize(&mut self) -> bool {
        match self.mode {
            WindowMode::Normal => {
                self.mode = WindowMode::Maximized;
                true
            }
            WindowMode::Maximized => {
                self.mode = WindowMode::Normal;
                true
            }
            WindowMode::Minimized => false,
        }
    }

    /// Records the current visible mode before shrinking. Only the first
    /// minimize from a visible state records; minimizing again while already
    /// minimized must not overwrite the memory.
    pub fn minimize(&mut self) -> bool {
        match self.mode {
            WindowMode::Normal | WindowMode::Maximized => {
                self.pre_minimize = self.mode;
                self.mode = WindowMode::Minimized;
                true
            }
            WindowMode::Minimized => false,
        }
    }

    /// Minimized -> remembered pre-minimize mode. No-op when not minimized.
    pub fn restore(&mut self) -> bool {
        if self.mode == WindowMode::Minimized {
            self.mode = self.pre_minimize;
            true
        } else {
            false
        }
    }

    /// Back to the configured initial mode. Called when the owning dialog is
    /// (re)opened so a dialog closed while minimized does not reopen as a
    /// corner card.
    pub fn reopen(&mut self) {
        self.mode = self.initial;
        self.pre_minimize = self.initial;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimize_then_restore_returns_to_normal() {
        let mut w = WindowStateMachine::new(WindowMode::Normal);
        assert!(w.minimize());
        assert_eq!(w.mode(), WindowMode::Minimized);
        assert!(w.restore());
        assert_eq!(w.mode(), WindowMode::Normal);
    }

    #[test]
    fn minimize_then_restore_returns_to_maximized() {
        let mut w = WindowStateMachine::new(WindowMode::Normal);
        assert!(w.toggle_maximize());
        assert!(w.minimize());
        assert!(w.restore());
        assert_eq!(w.mode(), WindowMode::Maximized);
    }

    #[test]
    fn restore_without_minimize_is_noop() {
        let mut w = WindowStateMachine::new(WindowMode::Normal);
        assert!(!w.restore());
        assert_eq!(w.mode(), WindowMode::Normal);
    }

    #[test]
    fn toggle_maximize_is_noop_while_minimized() {
        let mut w = WindowStateMachine::new(WindowMode::Normal);
        w.minimize();
        assert!(!w.toggle_maximize());
        assert_eq!(w.mode(), WindowMode::Minimized);
    }

    #[test]
    fn double_minimize_does_not_overwrite_memory() {
        let mut w = WindowStateMachine::new(WindowMode::Maximized);
        assert!(w.minimize());
        assert!(!w.minimize());
        assert!(w.restore());
        assert_eq!(w.mode(), WindowMode::Maximized);
    }

    #[test]
    fn instances_are_isolated() {
        let mut first = WindowStateMachine::new(WindowMode::Maximized);
        first.minimize();

        // A second dialog opens, does its own transitions, and closes.
        let mut second = WindowStateMachine::new(WindowMode::Normal);
        second.toggle_maximize();
        second.minimize();
        second.reopen();

        assert!(first.restore());
        assert_eq!(first.mode(), WindowMode::Maximized);
    }

    #[test]
    fn reopen_resets_a_dialog_closed_while_minimized() {
        let mut w = WindowStateMachine::new(WindowMode::Normal);
        w.toggle_maximize();
        w.minimize();
        w.reopen();
        assert_eq!(w.mode(), WindowMode::Normal);
        // Memory is reset too: a restore-less minimize after reopen records
        // the fresh state, not the pre-close one.
        w.minimize();
        w.restore();
        assert_eq!(w.mode(), WindowMode::Normal);
    }

    #[test]
    fn minimized_initial_is_clamped_to_normal() {
        let w = WindowStateMachine::new(WindowMode::Minimized);
        assert_eq!(w.mode(), WindowMode::Normal);
    }
}
