/// Where a batch of records came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    Local,
    Remote,
}

impl DataSource {
    pub fn label(&self) -> &'static str {
        match self {
            DataSource::Local => "localStorage",
            DataSource::Remote => "remote server",
        }
    }
}

/// Result of one "load local" / "load remote" click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Rendered { count: usize, source: DataSource },
    Failed(String),
    /// A newer load was issued while this one was in flight; its result was dropped.
    Superseded,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_labels() {
        assert_eq!(DataSource::Local.label(), "localStorage");
        assert_eq!(DataSource::Remote.label(), "remote server");
    }
}
