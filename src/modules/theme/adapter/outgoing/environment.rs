use std::sync::atomic::{AtomicUsize, Ordering};

use tracing::debug;

use crate::modules::theme::application::ports::outgoing::{ColorSchemePreference, ViewTransitions};

/// Preference signal fixed at construction, e.g. from configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedColorScheme {
    prefers_dark: bool,
}

impl FixedColorScheme {
    pub fn new(prefers_dark: bool) -> Self {
        Self { prefers_dark }
    }
}

impl ColorSchemePreference for FixedColorScheme {
    fn prefers_dark(&self) -> bool {
        self.prefers_dark
    }
}

/// No transition support: changes apply immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImmediateTransitions;

impl ViewTransitions for ImmediateTransitions {
    fn is_supported(&self) -> bool {
        false
    }

    fn run(&self, change: &mut dyn FnMut()) {
        change();
    }
}

/// Transition support that counts the transitions it wraps.
#[derive(Debug, Default)]
pub struct CountingTransitions {
    started: AtomicUsize,
}

impl CountingTransitions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn started(&self) -> usize {
        self.started.load(Ordering::SeqCst)
    }
}

impl ViewTransitions for CountingTransitions {
    fn is_supported(&self) -> bool {
        true
    }

    fn run(&self, change: &mut dyn FnMut()) {
        let n = self.started.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(transition = n, "Starting view transition");
        change();
    }
}

impl<T: ViewTransitions + ?Sized> ViewTransitions for std::sync::Arc<T> {
    fn is_supported(&self) -> bool {
        (**self).is_supported()
    }

    fn run(&self, change: &mut dyn FnMut()) {
        (**self).run(change)
    }
}
