/// How a redirect updates the navigation history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationMode {
    /// Add a history entry.
    Push,
    /// Replace the pending entry, so back-navigation does not loop.
    Replace,
}

/// Outcome of a guard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Let the navigation proceed.
    Allow,
    /// Abort the navigation and go to `path` instead.
    RedirectTo { path: String, mode: NavigationMode },
}

impl GuardDecision {
    #[must_use]
    pub fn redirect(path: impl Into<String>) -> Self {
        Self::RedirectTo {
            path: path.into(),
            mode: NavigationMode::Push,
        }
    }

    #[must_use]
    pub fn replace(path: impl Into<String>) -> Self {
        Self::RedirectTo {
            path: path.into(),
            mode: NavigationMode::Replace,
        }
    }

    #[must_use]
    pub fn is_allow(&self) -> bool {
        matches!(self, Self::Allow)
    }

    /// Redirect target, if any.
    #[must_use]
    pub fn target(&self) -> Option<&str> {
        match self {
            Self::Allow => None,
            Self::RedirectTo { path, .. } => Some(path),
        }
    }
}
