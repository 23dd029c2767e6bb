use std::sync::{Mutex, MutexGuard};

use tracing::{debug, error, info, warn};

use crate::modules::resume::application::domain::entities::ResumeDocument;
use crate::modules::resume::application::domain::view::ResumeView;
use crate::modules::resume::application::ports::outgoing::{ResumeCache, ResumeFeed};
use crate::shared::loading::{DataSource, LoadOutcome};
use crate::shared::sequencing::RequestSequencer;

pub const REMOTE_LOADING_STATUS: &str = "Loading resume data from remote…";
pub const REMOTE_FAILED_STATUS: &str =
    "Failed to load remote resume data. Please check JSONBin URL / key.";

#[derive(Debug, Clone, Default)]
pub struct ResumeRegion {
    pub view: ResumeView,
    pub status: String,
}

impl ResumeRegion {
    pub fn to_html(&self) -> String {
        format!(
            "{}\n<p id=\"resume-data-status\">{}</p>",
            self.view.to_html(),
            crate::shared::html::escape(&self.status)
        )
    }
}

/// Resume page: the same local/remote button pair as the projects page, over
/// six resume regions that are all replaced on every load.
pub struct ResumePageService<C, F>
where
    C: ResumeCache,
    F: ResumeFeed,
{
    cache: C,
    feed: F,
    region: Mutex<ResumeRegion>,
    sequencer: RequestSequencer,
}

impl<C, F> ResumePageService<C, F>
where
    C: ResumeCache,
    F: ResumeFeed,
{
    pub fn new(cache: C, feed: F) -> Self {
        if let Err(e) = cache.ensure_seeded() {
            warn!(error = %e, "Could not seed local resume");
        }

        Self {
            cache,
            feed,
            region: Mutex::new(ResumeRegion::default()),
            sequencer: RequestSequencer::new(),
        }
    }

    pub fn region(&self) -> ResumeRegion {
        self.lock().clone()
    }

    pub fn load_local(&self) -> LoadOutcome {
        let _ = self.sequencer.issue();

        if let Err(e) = self.cache.ensure_seeded() {
            warn!(error = %e, "Could not seed local resume");
        }
        let doc = self.cache.load();
        self.render(&doc, DataSource::Local)
    }

    pub async fn load_remote(&self) -> LoadOutcome {
        let token = self.sequencer.issue();
        self.lock().status = REMOTE_LOADING_STATUS.to_string();

        let result = self.feed.fetch().await;

        if !self.sequencer.is_latest(token) {
            debug!(token = token.value(), "Discarding stale resume load");
            return LoadOutcome::Superseded;
        }

        match result {
            Ok(doc) => self.render(&doc, DataSource::Remote),
            Err(e) => {
                error!(error = %e, "Remote resume load failed");
                self.lock().status = REMOTE_FAILED_STATUS.to_string();
                LoadOutcome::Failed(e.to_string())
            }
        }
    }

    fn render(&self, doc: &ResumeDocument, source: DataSource) -> LoadOutcome {
        let view = ResumeView::from(doc);
        let count = view.education.len()
            + view.entrepreneurial.len()
            + view.internship.len()
            + view.projects.len()
            + view.activities.len()
            + view.skills.len();

        let mut region = self.lock();
        region.view = view;
        region.status = format!("Loaded resume data from {}.", source.label());

        info!(entries = count, source = source.label(), "Rendered resume");
        LoadOutcome::Rendered { count, source }
    }

    fn lock(&self) -> MutexGuard<'_, ResumeRegion> {
        self.region.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use async_trait::async_trait;
    use mockall::mock;
    use serde_json::json;

    use crate::modules::resume::adapter::outgoing::{RemoteResumeFeed, StoredResumeCache};
    use crate::modules::resume::application::domain::entities::SkillEntry;
    use crate::modules::resume::application::ports::outgoing::RESUME_LOCAL_KEY;
    use crate::shared::remote::RemoteFetchError;
    use crate::shared::storage::{InMemoryStore, KeyValueStore};
    use crate::tests::support::stubs::{StubDocumentSource, UnavailableStore};

    mock! {
        pub Feed {}
        #[async_trait]
        impl ResumeFeed for Feed {
            async fn fetch(&self) -> Result<ResumeDocument, RemoteFetchError>;
        }
    }

    fn local_service(
        store: Arc<InMemoryStore>,
    ) -> ResumePageService<StoredResumeCache<Arc<InMemoryStore>>, MockFeed> {
        ResumePageService::new(StoredResumeCache::new(store), MockFeed::new())
    }

    #[test]
    fn first_local_load_renders_seeded_resume() {
        let store = Arc::new(InMemoryStore::new());
        let service = local_service(store.clone());

        service.load_local();

        let region = service.region();
        assert_eq!(region.view.education.len(), 2);
        assert_eq!(region.view.skills[0].label, "Programming & Software: ");
        assert_eq!(region.status, "Loaded resume data from localStorage.");
        assert!(store.contains(RESUME_LOCAL_KEY).unwrap());
    }

    #[test]
    fn corrupt_cache_renders_empty_sections() {
        let store = Arc::new(InMemoryStore::new());
        store.set_item(RESUME_LOCAL_KEY, "][").unwrap();
        let service = local_service(store);

        let outcome = service.load_local();

        assert_eq!(
            outcome,
            LoadOutcome::Rendered {
                count: 0,
                source: DataSource::Local
            }
        );
        assert_eq!(service.region().view, ResumeView::default());
    }

    #[test]
    fn unavailable_storage_renders_empty_sections() {
        let service =
            ResumePageService::new(StoredResumeCache::new(UnavailableStore), MockFeed::new());

        service.load_local();

        assert_eq!(service.region().view, ResumeView::default());
        assert_eq!(service.region().status, "Loaded resume data from localStorage.");
    }

    #[tokio::test]
    async fn remote_load_replaces_every_section() {
        let mut feed = MockFeed::new();
        feed.expect_fetch().times(1).returning(|| {
            Ok(ResumeDocument {
                skills: vec![SkillEntry {
                    label: Some("Rust".into()),
                    value: Some("async services".into()),
                }],
                ..Default::default()
            })
        });
        let service =
            ResumePageService::new(StoredResumeCache::new(Arc::new(InMemoryStore::new())), feed);
        service.load_local();

        service.load_remote().await;

        let region = service.region();
        assert!(region.view.education.is_empty());
        assert_eq!(region.view.skills.len(), 1);
        assert_eq!(region.status, "Loaded resume data from remote server.");
    }

    #[tokio::test]
    async fn remote_failure_keeps_previous_view() {
        let mut feed = MockFeed::new();
        feed.expect_fetch()
            .returning(|| Err(RemoteFetchError::Network("offline".into())));
        let service =
            ResumePageService::new(StoredResumeCache::new(Arc::new(InMemoryStore::new())), feed);
        service.load_local();

        let outcome = service.load_remote().await;

        assert!(matches!(outcome, LoadOutcome::Failed(msg) if msg.contains("offline")));
        let region = service.region();
        assert_eq!(region.status, REMOTE_FAILED_STATUS);
        assert_eq!(region.view.education.len(), 2);
    }

    #[tokio::test]
    async fn remote_wrapped_document_through_http_shape() {
        let service = ResumePageService::new(
            StoredResumeCache::new(Arc::new(InMemoryStore::new())),
            RemoteResumeFeed::new(StubDocumentSource::ok(json!({
                "record": {"activities": ["Hackathon mentor"]},
                "metadata": {"private": true}
            }))),
        );

        service.load_remote().await;

        assert_eq!(service.region().view.activities, vec!["Hackathon mentor"]);
    }

    #[tokio::test]
    async fn local_load_supersedes_pending_remote() {
        use tokio::sync::oneshot;

        struct GatedFeed(tokio::sync::Mutex<Option<oneshot::Receiver<ResumeDocument>>>);

        #[async_trait]
        impl ResumeFeed for GatedFeed {
            async fn fetch(&self) -> Result<ResumeDocument, RemoteFetchError> {
                let rx = self.0.lock().await.take();
                match rx {
                    Some(rx) => rx.await.map_err(|e| RemoteFetchError::Network(e.to_string())),
                    None => Err(RemoteFetchError::Network("no gate".into())),
                }
            }
        }

        let (tx, rx) = oneshot::channel();
        let service = Arc::new(ResumePageService::new(
            StoredResumeCache::new(Arc::new(InMemoryStore::new())),
            GatedFeed(tokio::sync::Mutex::new(Some(rx))),
        ));

        let pending = tokio::spawn({
            let service = service.clone();
            async move { service.load_remote().await }
        });
        tokio::task::yield_now().await;

        service.load_local();
        tx.send(ResumeDocument::default()).unwrap();

        assert_eq!(pending.await.unwrap(), LoadOutcome::Superseded);
        assert_eq!(service.region().view.education.len(), 2);
    }
}
