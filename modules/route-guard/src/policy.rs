/// Default taken when a guard cannot reach a decision because a collaborator failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Treat the caller as signed out and let the navigation through.
    FailOpen,
    /// Redirect away from the page.
    FailClosed,
}

/// Classes of pages, each with its own guard and error policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClass {
    /// No guard.
    Public,
    /// Only for signed-out users (login, sign-up).
    Guest,
    /// Any signed-in user.
    Authenticated,
    /// Admin-only.
    Admin,
}

impl RouteClass {
    /// Guest pages carry no sensitive data and fail open; every protected class fails closed.
    #[must_use]
    pub const fn error_policy(self) -> ErrorPolicy {
        match self {
            Self::Public | Self::Guest => ErrorPolicy::FailOpen,
            Self::Authenticated | Self::Admin => ErrorPolicy::FailClosed,
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn only_unprotected_classes_fail_open() {
        assert_eq!(RouteClass::Public.error_policy(), ErrorPolicy::FailOpen);
        assert_eq!(RouteClass::Guest.error_policy(), ErrorPolicy::FailOpen);
        assert_eq!(
            RouteClass::Authenticated.error_policy(),
            ErrorPolicy::FailClosed
        );
        assert_eq!(RouteClass::Admin.error_policy(), ErrorPolicy::FailClosed);
    }
}
