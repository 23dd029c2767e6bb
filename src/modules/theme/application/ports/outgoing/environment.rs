/// The environment's light/dark preference signal
/// (`prefers-color-scheme` in a browser).
pub trait ColorSchemePreference {
    fn prefers_dark(&self) -> bool;
}

/// Smooth-transition support around a visual change.
///
/// Implementations must run `change` exactly once, synchronously, whether or
/// not a transition is available, so the end state is the same either way.
pub trait ViewTransitions {
    fn is_supported(&self) -> bool;

    fn run(&self, change: &mut dyn FnMut());
}
