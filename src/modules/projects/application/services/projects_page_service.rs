use std::sync::{Mutex, MutexGuard};

use tracing::{debug, error, info, warn};

use crate::modules::project_card::ProjectCard;
use crate::modules::projects::application::domain::entities::ProjectRecord;
use crate::modules::projects::application::ports::outgoing::{ProjectCache, ProjectFeed};
use crate::shared::loading::{DataSource, LoadOutcome};
use crate::shared::sequencing::{RequestSequencer, RequestToken};

pub const EMPTY_PLACEHOLDER: &str = "No projects to display.";
pub const REMOTE_LOADING_STATUS: &str = "Loading remote projects…";
pub const REMOTE_FAILED_STATUS: &str = "Failed to load remote projects. Please try again later.";

//
// ──────────────────────────────────────────────────────────
// Rendered region
// ──────────────────────────────────────────────────────────
//

/// The projects grid plus its status line.
#[derive(Debug, Clone, Default)]
pub struct ProjectsRegion {
    pub cards: Vec<ProjectCard>,
    /// Shown instead of cards when a load produced nothing.
    pub placeholder: Option<String>,
    pub status: String,
}

impl ProjectsRegion {
    pub fn to_html(&self) -> String {
        let grid = match &self.placeholder {
            Some(text) => crate::shared::html::escape(text),
            None => self.cards.iter().map(ProjectCard::to_html).collect(),
        };

        format!(
            "<div id=\"projects-grid\">{}</div>\n<p id=\"projects-status\">{}</p>",
            grid,
            crate::shared::html::escape(&self.status)
        )
    }
}

//
// ──────────────────────────────────────────────────────────
// Controller
// ──────────────────────────────────────────────────────────
//

/// Projects page: a "load local" and a "load remote" button over one grid.
///
/// Remote results are rendered but never written to the cache, and a failed
/// remote load never falls back to cached data.
pub struct ProjectsPageService<C, F>
where
    C: ProjectCache,
    F: ProjectFeed,
{
    cache: C,
    feed: F,
    region: Mutex<ProjectsRegion>,
    sequencer: RequestSequencer,
}

impl<C, F> ProjectsPageService<C, F>
where
    C: ProjectCache,
    F: ProjectFeed,
{
    /// Seeds the cache on first use, as page load does.
    pub fn new(cache: C, feed: F) -> Self {
        if let Err(e) = cache.ensure_seeded() {
            warn!(error = %e, "Could not seed local projects");
        }

        Self {
            cache,
            feed,
            region: Mutex::new(ProjectsRegion::default()),
            sequencer: RequestSequencer::new(),
        }
    }

    pub fn region(&self) -> ProjectsRegion {
        self.lock().clone()
    }

    pub fn load_local(&self) -> LoadOutcome {
        // Supersedes any remote load still in flight.
        let _ = self.sequencer.issue();

        if let Err(e) = self.cache.ensure_seeded() {
            warn!(error = %e, "Could not seed local projects");
        }
        let records = self.cache.load();
        self.render(records, DataSource::Local)
    }

    pub async fn load_remote(&self) -> LoadOutcome {
        let token = self.sequencer.issue();
        self.lock().status = REMOTE_LOADING_STATUS.to_string();

        let result = self.feed.fetch().await;

        if !self.is_current(token) {
            return LoadOutcome::Superseded;
        }

        match result {
            Ok(records) => self.render(records, DataSource::Remote),
            Err(e) => {
                error!(error = %e, "Remote project load failed");
                self.lock().status = REMOTE_FAILED_STATUS.to_string();
                LoadOutcome::Failed(e.to_string())
            }
        }
    }

    fn is_current(&self, token: RequestToken) -> bool {
        let current = self.sequencer.is_latest(token);
        if !current {
            debug!(token = token.value(), "Discarding stale project load");
        }
        current
    }

    fn render(&self, records: Vec<ProjectRecord>, source: DataSource) -> LoadOutcome {
        let mut region = self.lock();
        let count = records.len();

        if records.is_empty() {
            region.cards.clear();
            region.placeholder = Some(EMPTY_PLACEHOLDER.to_string());
            region.status = format!("No projects loaded from {}.", source.label());
        } else {
            region.cards = records
                .iter()
                .map(|record| {
                    let mut card = record.to_card();
                    card.attach();
                    card
                })
                .collect();
            region.placeholder = None;
            region.status = format!("Loaded {} project(s) from {}.", count, source.label());
        }

        info!(count, source = source.label(), "Rendered projects");
        LoadOutcome::Rendered { count, source }
    }

    fn lock(&self) -> MutexGuard<'_, ProjectsRegion> {
        self.region.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
