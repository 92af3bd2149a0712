//! Portfolio REST API client
//!
//! One request per call: no retries, no caching, no timeout policy. Every
//! request takes a [`CancellationToken`] and resolves as
//! [`FolioError::Cancelled`] if the token fires before the response arrives.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::api::models::{
    self, AboutPage, ContactMessage, CoreExpertise, Education, Experience, ExperiencePage,
    HomePage, PersonalInfo, Project, ProjectCategory, SiteSettings, Skill, SkillsPage, SubmitAck,
    Testimonial, TimelineEntry, Tool,
};
use crate::api::resource::Resource;
use crate::api::transport::{HttpResponse, ReqwestTransport, Transport};
use crate::core::cancel::CancellationToken;
use crate::error::{FolioError, Result};

/// Query parameters accepted by the projects endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectFilter {
    /// Category slug
    pub category: Option<String>,
    /// Only featured projects
    pub featured: bool,
    /// Free-text search over title, description and technologies
    pub search: Option<String>,
}

impl ProjectFilter {
    pub fn is_empty(&self) -> bool {
        self.category.is_none() && !self.featured && self.search.is_none()
    }
}

/// Parse and normalize the API base address
///
/// The path always ends in `/` so resource paths join beneath it.
pub fn parse_base_url(raw: &str) -> Result<Url> {
    let raw = raw.trim();
    let invalid = |reason: String| FolioError::InvalidBaseUrl {
        url: raw.to_string(),
        reason,
    };

    let mut url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(invalid("expected an http or https address".into()));
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url.set_query(None);
    url.set_fragment(None);

    Ok(url)
}

/// Client for the portfolio backend
#[derive(Clone)]
pub struct PortfolioClient {
    base: Url,
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for PortfolioClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortfolioClient")
            .field("base", &self.base.as_str())
            .finish()
    }
}

impl PortfolioClient {
    /// Create a client using the reqwest transport
    pub fn new(base_url: &str) -> Result<Self> {
        let transport = ReqwestTransport::new().map_err(|e| FolioError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: format!("could not build HTTP client: {}", e),
        })?;
        Self::with_transport(base_url, Arc::new(transport))
    }

    /// Create a client with a custom transport
    pub fn with_transport(base_url: &str, transport: Arc<dyn Transport>) -> Result<Self> {
        Ok(Self {
            base: parse_base_url(base_url)?,
            transport,
        })
    }

    /// Absolute URL of a resource
    pub fn endpoint(&self, resource: Resource) -> Result<Url> {
        self.base
            .join(resource.path())
            .map_err(|e| FolioError::InvalidBaseUrl {
                url: self.base.to_string(),
                reason: e.to_string(),
            })
    }

    /// Fetch a resource and return its parsed body verbatim
    pub async fn fetch(&self, resource: Resource, cancel: &CancellationToken) -> Result<Value> {
        let url = self.endpoint(resource)?;
        self.get_json(resource, url, cancel).await
    }

    /// Fetch a resource and normalize it into a typed record
    pub async fn fetch_as<T: DeserializeOwned + Default>(
        &self,
        resource: Resource,
        cancel: &CancellationToken,
    ) -> Result<T> {
        let body = self.fetch(resource, cancel).await?;
        Ok(models::normalize(resource, body))
    }

    /// Fetch a list resource, keeping every entry that fits the record shape
    pub async fn fetch_list<T: DeserializeOwned>(
        &self,
        resource: Resource,
        cancel: &CancellationToken,
    ) -> Result<Vec<T>> {
        let body = self.fetch(resource, cancel).await?;
        Ok(models::normalize_list(resource, body))
    }

    async fn get_json(
        &self,
        resource: Resource,
        url: Url,
        cancel: &CancellationToken,
    ) -> Result<Value> {
        if cancel.is_cancelled() {
            return Err(FolioError::Cancelled);
        }

        tracing::debug!(resource = %resource, url = %url, "GET");

        let response = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(FolioError::Cancelled),
            response = self.transport.get(url) => response,
        };

        let response = response.map_err(|e| FolioError::fetch(resource, e.to_string()))?;
        if !response.is_success() {
            return Err(FolioError::fetch(
                resource,
                format!("HTTP {}", response.status),
            ));
        }

        serde_json::from_str(&response.body)
            .map_err(|e| FolioError::fetch(resource, format!("invalid JSON body: {}", e)))
    }

    // ─────────────────────────────────────────────────────────────────────
    // Typed accessors
    // ─────────────────────────────────────────────────────────────────────

    pub async fn personal_info(&self, cancel: &CancellationToken) -> Result<PersonalInfo> {
        self.fetch_as(Resource::PersonalInfo, cancel).await
    }

    pub async fn site_settings(&self, cancel: &CancellationToken) -> Result<SiteSettings> {
        self.fetch_as(Resource::SiteSettings, cancel).await
    }

    pub async fn projects(&self, cancel: &CancellationToken) -> Result<Vec<Project>> {
        self.fetch_list(Resource::Projects, cancel).await
    }

    pub async fn skills(&self, cancel: &CancellationToken) -> Result<Vec<Skill>> {
        self.fetch_list(Resource::Skills, cancel).await
    }

    pub async fn experience(&self, cancel: &CancellationToken) -> Result<Vec<Experience>> {
        self.fetch_list(Resource::Experience, cancel).await
    }

    pub async fn education(&self, cancel: &CancellationToken) -> Result<Vec<Education>> {
        self.fetch_list(Resource::Education, cancel).await
    }

    pub async fn testimonials(&self, cancel: &CancellationToken) -> Result<Vec<Testimonial>> {
        self.fetch_list(Resource::Testimonials, cancel).await
    }

    pub async fn timeline(&self, cancel: &CancellationToken) -> Result<Vec<TimelineEntry>> {
        self.fetch_list(Resource::Timeline, cancel).await
    }

    pub async fn core_expertise(&self, cancel: &CancellationToken) -> Result<Vec<CoreExpertise>> {
        self.fetch_list(Resource::CoreExpertise, cancel).await
    }

    pub async fn tools(&self, cancel: &CancellationToken) -> Result<Vec<Tool>> {
        self.fetch_list(Resource::Tools, cancel).await
    }

    pub async fn project_categories(
        &self,
        cancel: &CancellationToken,
    ) -> Result<Vec<ProjectCategory>> {
        self.fetch_list(Resource::ProjectCategories, cancel).await
    }

    pub async fn experience_page(&self, cancel: &CancellationToken) -> Result<ExperiencePage> {
        self.fetch_as(Resource::ExperiencePage, cancel).await
    }

    pub async fn home_page(&self, cancel: &CancellationToken) -> Result<HomePage> {
        self.fetch_as(Resource::HomePage, cancel).await
    }

    pub async fn about_page(&self, cancel: &CancellationToken) -> Result<AboutPage> {
        self.fetch_as(Resource::AboutPage, cancel).await
    }

    pub async fn skills_page(&self, cancel: &CancellationToken) -> Result<SkillsPage> {
        self.fetch_as(Resource::SkillsPage, cancel).await
    }

    // ─────────────────────────────────────────────────────────────────────
    // Projects
    // ─────────────────────────────────────────────────────────────────────

    /// URL of the projects endpoint with filter query parameters applied
    pub fn projects_url(&self, filter: &ProjectFilter) -> Result<Url> {
        let mut url = self.endpoint(Resource::Projects)?;
        if !filter.is_empty() {
            let mut query = url.query_pairs_mut();
            if let Some(category) = &filter.category {
                query.append_pair("category", category);
            }
            if filter.featured {
                query.append_pair("featured", "true");
            }
            if let Some(search) = &filter.search {
                query.append_pair("search", search);
            }
        }
        Ok(url)
    }

    /// URL of a single project's detail endpoint
    pub fn project_url(&self, slug: &str) -> Result<Url> {
        let slug = slug.trim().trim_matches('/');
        if slug.is_empty() {
            return Err(FolioError::InvalidInput(
                "Project slug cannot be empty".into(),
            ));
        }

        let mut url = self.endpoint(Resource::Projects)?;
        url.path_segments_mut()
            .map_err(|_| FolioError::InvalidBaseUrl {
                url: self.base.to_string(),
                reason: "address cannot hold a path".into(),
            })?
            .pop_if_empty()
            .push(slug)
            .push("");
        Ok(url)
    }

    /// Fetch projects with backend-side filtering, body verbatim
    pub async fn fetch_projects_filtered(
        &self,
        filter: &ProjectFilter,
        cancel: &CancellationToken,
    ) -> Result<Value> {
        let url = self.projects_url(filter)?;
        self.get_json(Resource::Projects, url, cancel).await
    }

    /// Fetch projects with backend-side filtering
    pub async fn projects_filtered(
        &self,
        filter: &ProjectFilter,
        cancel: &CancellationToken,
    ) -> Result<Vec<Project>> {
        let body = self.fetch_projects_filtered(filter, cancel).await?;
        Ok(models::normalize_list(Resource::Projects, body))
    }

    /// Fetch one project detail by slug, body verbatim
    pub async fn fetch_project(&self, slug: &str, cancel: &CancellationToken) -> Result<Value> {
        let url = self.project_url(slug)?;
        self.get_json(Resource::Projects, url, cancel).await
    }

    /// Fetch one project detail by slug
    pub async fn project(&self, slug: &str, cancel: &CancellationToken) -> Result<Project> {
        let body = self.fetch_project(slug, cancel).await?;
        Ok(models::normalize(Resource::Projects, body))
    }

    // ─────────────────────────────────────────────────────────────────────
    // Forms
    // ─────────────────────────────────────────────────────────────────────

    /// Submit the contact form
    pub async fn send_contact_message(&self, message: &ContactMessage) -> Result<SubmitAck> {
        let body = serde_json::to_value(message)?;
        self.submit("contact message", "contact/", body).await
    }

    /// Subscribe an address to the newsletter
    pub async fn subscribe_newsletter(&self, email: &str) -> Result<SubmitAck> {
        let body = serde_json::json!({ "email": email.trim() });
        self.submit("newsletter subscription", "newsletter/subscribe/", body)
            .await
    }

    async fn submit(&self, form: &'static str, path: &str, body: Value) -> Result<SubmitAck> {
        let url = self
            .base
            .join(path)
            .map_err(|e| FolioError::InvalidBaseUrl {
                url: self.base.to_string(),
                reason: e.to_string(),
            })?;

        tracing::debug!(form, url = %url, "POST");

        let response = self
            .transport
            .post_json(url, body)
            .await
            .map_err(|e| FolioError::Submit {
                form,
                message: e.to_string(),
            })?;

        if !response.is_success() {
            return Err(FolioError::Submit {
                form,
                message: rejection_message(&response),
            });
        }

        let ack = serde_json::from_str::<SubmitAck>(&response.body).unwrap_or_else(|e| {
            tracing::warn!(form, error = %e, "unexpected acknowledgement body");
            SubmitAck {
                success: true,
                message: String::new(),
            }
        });
        Ok(ack)
    }
}

/// Best human-readable reason from an error response
///
/// Prefers a `message`/`detail` field, then field validation errors
/// (`{"email": ["Enter a valid email address."]}`), then the status.
fn rejection_message(response: &HttpResponse) -> String {
    let fallback = format!("HTTP {}", response.status);
    let Ok(Value::Object(body)) = serde_json::from_str::<Value>(&response.body) else {
        return fallback;
    };

    for key in ["message", "detail"] {
        if let Some(Value::String(text)) = body.get(key) {
            return text.clone();
        }
    }

    let source = match body.get("errors") {
        Some(Value::Object(errors)) => errors,
        _ => &body,
    };
    let field_errors: Vec<String> = source
        .iter()
        .filter_map(|(field, errors)| {
            let texts: Vec<&str> = errors
                .as_array()?
                .iter()
                .filter_map(Value::as_str)
                .collect();
            (!texts.is_empty()).then(|| format!("{}: {}", field, texts.join(" ")))
        })
        .collect();

    if field_errors.is_empty() {
        fallback
    } else {
        field_errors.join("; ")
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use serde_json::json;

    use super::*;
    use crate::api::transport::{MockTransport, TransportError};
    use crate::core::cancel::CancellationSource;

    const BASE: &str = "http://localhost:8000/api";

    fn client_with(mock: MockTransport) -> PortfolioClient {
        PortfolioClient::with_transport(BASE, Arc::new(mock)).unwrap()
    }

    fn respond(status: u16, body: Value) -> MockTransport {
        let mut mock = MockTransport::new();
        mock.expect_get()
            .times(1)
            .returning(move |_| Ok(HttpResponse::new(status, body.to_string())));
        mock
    }

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let url = parse_base_url("http://localhost:8000/api").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/api/");

        let url = parse_base_url(" https://example.com ").unwrap();
        assert_eq!(url.as_str(), "https://example.com/");
    }

    #[test]
    fn test_invalid_base_urls() {
        assert!(matches!(
            parse_base_url("not a url"),
            Err(FolioError::InvalidBaseUrl { .. })
        ));
        assert!(parse_base_url("ftp://example.com/api").is_err());
        assert!(parse_base_url("mailto:me@example.com").is_err());
    }

    #[test]
    fn test_endpoints_join_beneath_base() {
        let client = client_with(MockTransport::new());
        assert_eq!(
            client.endpoint(Resource::PersonalInfo).unwrap().as_str(),
            "http://localhost:8000/api/personal-info/"
        );
        assert_eq!(
            client.endpoint(Resource::ExperiencePage).unwrap().as_str(),
            "http://localhost:8000/api/experience-page/"
        );
    }

    #[test]
    fn test_project_urls() {
        let client = client_with(MockTransport::new());
        assert_eq!(
            client.project_url("brand-refresh").unwrap().as_str(),
            "http://localhost:8000/api/projects/brand-refresh/"
        );
        assert!(client.project_url("  ").is_err());

        let filter = ProjectFilter {
            category: Some("web-design".into()),
            featured: true,
            search: Some("react native".into()),
        };
        assert_eq!(
            client.projects_url(&filter).unwrap().as_str(),
            "http://localhost:8000/api/projects/?category=web-design&featured=true&search=react+native"
        );
        assert_eq!(
            client.projects_url(&ProjectFilter::default()).unwrap().as_str(),
            "http://localhost:8000/api/projects/"
        );
    }

    #[tokio::test]
    async fn test_success_returns_body_unchanged_for_every_resource() {
        for &resource in Resource::all() {
            let body = json!({ "resource": resource.path(), "items": [1, 2, 3], "nested": { "ok": true } });
            let expected_url = format!("{}/{}", BASE, resource.path());

            let mut mock = MockTransport::new();
            let reply = body.to_string();
            mock.expect_get()
                .withf(move |url| url.as_str() == expected_url)
                .times(1)
                .returning(move |_| Ok(HttpResponse::new(200, reply.clone())));

            let client = client_with(mock);
            let fetched = client
                .fetch(resource, &CancellationToken::none())
                .await
                .unwrap();
            assert_eq!(fetched, body);
        }
    }

    #[tokio::test]
    async fn test_non_success_fails_with_resource_message() {
        for status in [301, 400, 404, 500, 503] {
            let client = client_with(respond(status, json!({ "detail": "nope" })));
            let err = client
                .fetch(Resource::PersonalInfo, &CancellationToken::none())
                .await
                .unwrap_err();
            assert_eq!(err.to_string(), "Failed to fetch personal info");
            assert!(
                matches!(err, FolioError::Fetch { resource: Resource::PersonalInfo, ref detail } if detail == &format!("HTTP {}", status))
            );
        }
    }

    #[tokio::test]
    async fn test_transport_failure_uses_same_kind() {
        let mut mock = MockTransport::new();
        mock.expect_get()
            .returning(|_| Err(TransportError("connection refused".into())));
        let client = client_with(mock);

        let err = client
            .fetch(Resource::Skills, &CancellationToken::none())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Failed to fetch skills");
    }

    #[tokio::test]
    async fn test_invalid_json_is_a_fetch_failure() {
        let mut mock = MockTransport::new();
        mock.expect_get()
            .returning(|_| Ok(HttpResponse::new(200, "<html>oops</html>")));
        let client = client_with(mock);

        let err = client
            .fetch(Resource::Tools, &CancellationToken::none())
            .await
            .unwrap_err();
        assert!(matches!(err, FolioError::Fetch { resource: Resource::Tools, .. }));
    }

    #[tokio::test]
    async fn test_typed_accessor_normalizes() {
        let client = client_with(respond(
            200,
            json!({ "name": "Jane Doe", "years_experience": 7, "github_url": null }),
        ));
        let info = client
            .personal_info(&CancellationToken::none())
            .await
            .unwrap();
        assert_eq!(info.name, "Jane Doe");
        assert_eq!(info.years_experience, 7);
        assert_eq!(info.tagline, "");
        assert_eq!(info.github_url, None);
    }

    #[tokio::test]
    async fn test_list_accessor_keeps_valid_entries() {
        let client = client_with(respond(
            200,
            json!([
                { "id": 1, "name": "Figma", "order": null },
                7,
                { "id": 2, "name": "Blender" }
            ]),
        ));
        let tools = client.tools(&CancellationToken::none()).await.unwrap();
        let names: Vec<_> = tools.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Figma", "Blender"]);
        assert_eq!(tools[0].order, 0);
    }

    #[tokio::test]
    async fn test_already_cancelled_token_skips_request() {
        let mut mock = MockTransport::new();
        mock.expect_get().times(0);
        let client = client_with(mock);

        let source = CancellationSource::new();
        source.cancel();
        let err = client
            .fetch(Resource::Projects, &source.token())
            .await
            .unwrap_err();
        assert!(err.is_cancelled());
    }

    struct SlowTransport;

    #[async_trait::async_trait]
    impl Transport for SlowTransport {
        async fn get(&self, _url: Url) -> std::result::Result<HttpResponse, TransportError> {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Ok(HttpResponse::new(200, "{}"))
        }

        async fn post_json(
            &self,
            _url: Url,
            _body: Value,
        ) -> std::result::Result<HttpResponse, TransportError> {
            unreachable!("not used")
        }
    }

    #[tokio::test]
    async fn test_cancel_interrupts_in_flight_request() {
        let client = PortfolioClient::with_transport(BASE, Arc::new(SlowTransport)).unwrap();
        let source = CancellationSource::new();
        let token = source.token();

        let request = tokio::spawn(async move { client.fetch(Resource::Timeline, &token).await });
        tokio::time::sleep(Duration::from_millis(20)).await;
        source.cancel();

        let result = tokio::time::timeout(Duration::from_secs(1), request)
            .await
            .expect("cancellation should resolve the request")
            .unwrap();
        assert!(matches!(result, Err(FolioError::Cancelled)));
    }

    #[tokio::test]
    async fn test_contact_submission() {
        let mut mock = MockTransport::new();
        mock.expect_post_json()
            .withf(|url, body| {
                url.as_str() == "http://localhost:8000/api/contact/"
                    && body["email"] == "jane@example.com"
                    && body["subject"] == "Project Inquiry"
            })
            .times(1)
            .returning(|_, _| {
                Ok(HttpResponse::new(
                    201,
                    json!({ "success": true, "message": "Thank you for your message!" })
                        .to_string(),
                ))
            });
        let client = client_with(mock);

        let ack = client
            .send_contact_message(&ContactMessage {
                name: "Jane".into(),
                email: "jane@example.com".into(),
                subject: "Project Inquiry".into(),
                message: "Hello".into(),
            })
            .await
            .unwrap();
        assert!(ack.success);
        assert_eq!(ack.message, "Thank you for your message!");
    }

    #[tokio::test]
    async fn test_newsletter_rejection_surfaces_backend_message() {
        let mut mock = MockTransport::new();
        mock.expect_post_json().returning(|_, _| {
            Ok(HttpResponse::new(
                400,
                json!({ "success": false, "message": "You are already subscribed to our newsletter." })
                    .to_string(),
            ))
        });
        let client = client_with(mock);

        let err = client
            .subscribe_newsletter("jane@example.com")
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Could not submit the newsletter subscription: You are already subscribed to our newsletter."
        );
    }

    #[test]
    fn test_rejection_message_from_field_errors() {
        let response = HttpResponse::new(
            400,
            json!({ "email": ["Enter a valid email address."] }).to_string(),
        );
        assert_eq!(
            rejection_message(&response),
            "email: Enter a valid email address."
        );

        let response = HttpResponse::new(502, "Bad Gateway");
        assert_eq!(rejection_message(&response), "HTTP 502");
    }
}
