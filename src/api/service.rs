//! Cached access to the portfolio API.

use serde_json::Value;
use std::sync::Arc;

use super::client::{decode, PortfolioApi};
use super::resource::{Resource, ADMIN_PREFIX, PROFILE_PATH};
use crate::cache::RequestCache;
use crate::error::{FolioError, FolioResult};
use crate::models::{ContactMessage, Experience, LoginResponse, Post, Profile, Project, Skill};

/// Counts shown on the stats tab.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PortfolioStats {
    pub projects: usize,
    pub featured_projects: usize,
    pub experiences: usize,
    pub posts: usize,
    pub published_posts: usize,
    pub skills: usize,
    /// `None` when not signed in.
    pub unread_messages: Option<usize>,
}

/// Reads go through the cache keyed by resource path; writes go straight to
/// the API and, when they succeed, evict what they made stale.
pub struct PortfolioService {
    api: PortfolioApi,
    cache: Arc<RequestCache<Value>>,
}

impl PortfolioService {
    pub fn new(api: PortfolioApi, cache: Arc<RequestCache<Value>>) -> Self {
        Self { api, cache }
    }

    pub fn api(&self) -> &PortfolioApi {
        &self.api
    }

    pub fn cache(&self) -> &RequestCache<Value> {
        &self.cache
    }

    pub fn is_authenticated(&self) -> bool {
        self.api.is_authenticated()
    }

    async fn fetch(&self, path: &str) -> FolioResult<Value> {
        let result = self
            .cache
            .get_or_fetch(path, || self.api.get_json(path))
            .await;
        self.after_call(result)
    }

    /// A session the server rejected leaves no admin data behind.
    fn after_call<T>(&self, result: FolioResult<T>) -> FolioResult<T> {
        if let Err(FolioError::Auth(err)) = &result {
            if err.requires_reauth() {
                self.cache.clear_prefix(ADMIN_PREFIX);
            }
        }
        result
    }

    fn invalidate<R: Resource>(&self, id: Option<&str>) {
        self.cache.clear(&R::collection_path());
        if let Some(id) = id {
            self.cache.clear(&R::item_path(id));
        }
    }

    // ── Reads ─────────────────────────────────────────────────────────────

    pub async fn list<R: Resource>(&self) -> FolioResult<Vec<R>> {
        decode(self.fetch(&R::collection_path()).await?)
    }

    pub async fn get<R: Resource>(&self, id: &str) -> FolioResult<R> {
        decode(self.fetch(&R::item_path(id)).await?)
    }

    pub async fn profile(&self) -> FolioResult<Profile> {
        decode(self.fetch(PROFILE_PATH).await?)
    }

    pub async fn stats(&self) -> FolioResult<PortfolioStats> {
        let projects: Vec<Project> = self.list().await?;
        let experiences: Vec<Experience> = self.list().await?;
        let posts: Vec<Post> = self.list().await?;
        let skills: Vec<Skill> = self.list().await?;
        let unread_messages = if self.is_authenticated() {
            let messages: Vec<ContactMessage> = self.list().await?;
            Some(messages.iter().filter(|m| !m.read).count())
        } else {
            None
        };

        Ok(PortfolioStats {
            projects: projects.len(),
            featured_projects: projects.iter().filter(|p| p.featured).count(),
            experiences: experiences.len(),
            posts: posts.len(),
            published_posts: posts.iter().filter(|p| p.published).count(),
            skills: skills.len(),
            unread_messages,
        })
    }

    // ── Writes ────────────────────────────────────────────────────────────

    pub async fn create<R: Resource>(&self, item: &R) -> FolioResult<R> {
        let created = self.after_call(self.api.create(item).await)?;
        self.invalidate::<R>(created.id());
        Ok(created)
    }

    pub async fn update<R: Resource>(&self, id: &str, item: &R) -> FolioResult<R> {
        let updated = self.after_call(self.api.update(id, item).await)?;
        self.invalidate::<R>(Some(id));
        Ok(updated)
    }

    pub async fn delete<R: Resource>(&self, id: &str) -> FolioResult<()> {
        self.after_call(self.api.delete::<R>(id).await)?;
        self.invalidate::<R>(Some(id));
        Ok(())
    }

    pub async fn update_profile(&self, profile: &Profile) -> FolioResult<Profile> {
        let updated = self.after_call(self.api.update_profile(profile).await)?;
        self.cache.clear(PROFILE_PATH);
        Ok(updated)
    }

    // ── Session ───────────────────────────────────────────────────────────

    pub async fn login(&self, username: &str, password: &str) -> FolioResult<LoginResponse> {
        let login = self.api.login(username, password).await?;
        self.cache.clear_prefix(ADMIN_PREFIX);
        Ok(login)
    }

    /// Adopt a token restored from disk.
    pub fn restore_session(&self, token: String) {
        self.api.set_token(Some(token));
        self.cache.clear_prefix(ADMIN_PREFIX);
    }

    pub fn logout(&self) {
        self.api.logout();
        self.cache.clear_prefix(ADMIN_PREFIX);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{ManualClock, MockHttpClient, MockResponse};
    use crate::error::{AuthError, NetworkError};
    use crate::traits::{HttpError, Method};
    use serde_json::json;
    use std::time::Duration;

    const BASE: &str = "http://api.test";

    struct Fixture {
        service: PortfolioService,
        http: MockHttpClient,
        clock: ManualClock,
    }

    fn fixture() -> Fixture {
        let http = MockHttpClient::new();
        let clock = ManualClock::new();
        let cache = Arc::new(RequestCache::with_ttl(
            Arc::new(clock.clone()),
            Duration::from_millis(5000),
        ));
        let api = PortfolioApi::new(Arc::new(http.clone()), BASE);
        Fixture {
            service: PortfolioService::new(api, cache),
            http,
            clock,
        }
    }

    fn url(path: &str) -> String {
        format!("{BASE}/{path}")
    }

    fn script_projects(http: &MockHttpClient) {
        http.on(
            Method::Get,
            url("projects"),
            MockResponse::json(200, json!([{"id": 1, "title": "a", "featured": true}])),
        );
    }

    #[tokio::test]
    async fn test_reads_are_cached_within_ttl() {
        let f = fixture();
        script_projects(&f.http);

        f.service.list::<Project>().await.unwrap();
        f.clock.advance_ms(2000);
        f.service.list::<Project>().await.unwrap();
        assert_eq!(f.http.call_count(Method::Get, &url("projects")), 1);

        f.clock.advance_ms(4000);
        f.service.list::<Project>().await.unwrap();
        assert_eq!(f.http.call_count(Method::Get, &url("projects")), 2);
    }

    #[tokio::test]
    async fn test_successful_mutation_clears_collection_and_item() {
        let f = fixture();
        script_projects(&f.http);
        f.http.on(
            Method::Get,
            url("projects/1"),
            MockResponse::json(200, json!({"id": 1, "title": "a"})),
        );
        f.http.on(Method::Delete, url("projects/1"), MockResponse::status(204));
        f.service.restore_session("tok".into());

        f.service.list::<Project>().await.unwrap();
        f.service.get::<Project>("1").await.unwrap();
        assert_eq!(f.service.cache().len(), 2);

        f.service.delete::<Project>("1").await.unwrap();
        assert!(f.service.cache().is_empty());

        f.service.list::<Project>().await.unwrap();
        assert_eq!(f.http.call_count(Method::Get, &url("projects")), 2);
    }

    #[tokio::test]
    async fn test_failed_mutation_leaves_cache() {
        let f = fixture();
        script_projects(&f.http);
        f.http.on(
            Method::Delete,
            url("projects/1"),
            MockResponse::Fail(HttpError::Timeout("slow".into())),
        );

        f.service.list::<Project>().await.unwrap();
        let err = f.service.delete::<Project>("1").await.unwrap_err();
        assert!(matches!(err, FolioError::Network(NetworkError::Timeout { .. })));
        assert_eq!(f.service.cache().len(), 1);
    }

    #[tokio::test]
    async fn test_create_clears_collection_and_new_item() {
        let f = fixture();
        script_projects(&f.http);
        f.http.on(
            Method::Post,
            url("projects"),
            MockResponse::json(201, json!({"id": 2, "title": "b"})),
        );
        f.service.list::<Project>().await.unwrap();
        f.service.cache().set("projects/2", json!({"title": "stale"}));

        let created = f
            .service
            .create(&Project {
                title: "b".into(),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(created.id.as_deref(), Some("2"));
        assert!(f.service.cache().is_empty());
    }

    #[tokio::test]
    async fn test_logout_clears_admin_entries_only() {
        let f = fixture();
        script_projects(&f.http);
        f.http.on(
            Method::Get,
            url("admin/messages"),
            MockResponse::json(200, json!([{"name": "n", "email": "e", "message": "hi"}])),
        );
        f.service.restore_session("tok".into());

        f.service.list::<Project>().await.unwrap();
        f.service.list::<ContactMessage>().await.unwrap();
        assert_eq!(f.service.cache().len(), 2);

        f.service.logout();
        assert!(!f.service.is_authenticated());
        assert_eq!(f.service.cache().len(), 1);
        assert!(f.service.cache().get("projects").is_some());
    }

    #[tokio::test]
    async fn test_session_expiry_drops_admin_cache() {
        let f = fixture();
        f.service.restore_session("tok".into());
        f.service.cache().set("admin/messages/1", json!({}));
        f.http.on(
            Method::Get,
            url("admin/messages"),
            MockResponse::status(401),
        );

        let err = f.service.list::<ContactMessage>().await.unwrap_err();
        assert_eq!(err, FolioError::Auth(AuthError::SessionExpired));
        assert!(f.service.cache().is_empty());
        assert!(!f.service.is_authenticated());
    }

    #[tokio::test]
    async fn test_stats_counts() {
        let f = fixture();
        f.http.on(
            Method::Get,
            url("projects"),
            MockResponse::json(200, json!([{"title": "a", "featured": true}, {"title": "b"}])),
        );
        f.http.on(
            Method::Get,
            url("experiences"),
            MockResponse::json(
                200,
                json!([{"company": "c", "role": "r", "start_date": "2021-03-01"}]),
            ),
        );
        f.http.on(
            Method::Get,
            url("posts"),
            MockResponse::json(200, json!([{"title": "p", "published": true}, {"title": "d"}])),
        );
        f.http.on(Method::Get, url("skills"), MockResponse::json(200, json!([])));

        let stats = f.service.stats().await.unwrap();
        assert_eq!(
            stats,
            PortfolioStats {
                projects: 2,
                featured_projects: 1,
                experiences: 1,
                posts: 2,
                published_posts: 1,
                skills: 0,
                unread_messages: None,
            }
        );
        assert_eq!(f.http.call_count(Method::Get, &url("admin/messages")), 0);
    }
}
