use crate::decision::{GuardDecision, NavigationMode};

/// The routing layer's side of a redirect.
pub trait Navigator {
    fn navigate_to(&mut self, path: &str, mode: NavigationMode);
}

/// Apply a decision to the router.
///
/// Returns `true` when the original navigation should proceed.
pub fn apply<N: Navigator + ?Sized>(decision: &GuardDecision, navigator: &mut N) -> bool {
    match decision {
        GuardDecision::Allow => true,
        GuardDecision::RedirectTo { path, mode } => {
            navigator.navigate_to(path, *mode);
            false
        }
    }
}
