//! Teardown handles returned by plugin setup

/// Reverses one plugin's setup. Consumed when run, so it runs at most once.
#[must_use = "dropping a teardown leaves the plugin attached"]
pub struct Teardown {
    undo: Box<dyn FnOnce() + Send>,
}

impl Teardown {
    pub fn new<F>(undo: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Self { undo: Box::new(undo) }
    }

    /// Teardown for a plugin that attached nothing
    pub fn noop() -> Self {
        Self::new(|| {})
    }

    pub fn run(self) {
        (self.undo)()
    }
}

impl std::fmt::Debug for Teardown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Teardown")
    }
}
