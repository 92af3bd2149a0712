//! Fetch CLI command handler

use serde_json::Value;

use crate::api::{PortfolioClient, ProjectFilter, Resource};
use crate::cli::commands::FetchArgs;
use crate::core::cancel::CancellationToken;
use crate::error::{FolioError, Result};

/// Handle `folio fetch`
pub async fn handle_fetch(client: &PortfolioClient, args: FetchArgs) -> Result<()> {
    let body = fetch_body(client, args).await?;
    println!("{}", serde_json::to_string_pretty(&body)?);
    Ok(())
}

/// Fetch the verbatim body selected by the arguments
pub async fn fetch_body(client: &PortfolioClient, args: FetchArgs) -> Result<Value> {
    let resource = args.resource.to_resource();
    let cancel = CancellationToken::none();
    let filter = ProjectFilter {
        category: args.category,
        featured: args.featured,
        search: args.search,
    };

    if resource != Resource::Projects {
        if args.slug.is_some() || !filter.is_empty() {
            return Err(FolioError::InvalidInput(
                "--slug, --category, --featured and --search only apply to projects".into(),
            ));
        }
        return client.fetch(resource, &cancel).await;
    }

    match args.slug {
        Some(slug) if filter.is_empty() => client.fetch_project(&slug, &cancel).await,
        Some(_) => Err(FolioError::InvalidInput(
            "--slug cannot be combined with project filters".into(),
        )),
        None if filter.is_empty() => client.fetch(resource, &cancel).await,
        None => client.fetch_projects_filtered(&filter, &cancel).await,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use super::*;
    use crate::api::transport::{HttpResponse, MockTransport};
    use crate::cli::commands::ResourceArg;

    fn args(resource: ResourceArg) -> FetchArgs {
        FetchArgs {
            resource,
            slug: None,
            category: None,
            featured: false,
            search: None,
        }
    }

    fn client_expecting(url: &'static str, body: Value) -> PortfolioClient {
        let mut mock = MockTransport::new();
        let reply = body.to_string();
        mock.expect_get()
            .withf(move |u| u.as_str() == url)
            .times(1)
            .returning(move |_| Ok(HttpResponse::new(200, reply.clone())));
        PortfolioClient::with_transport("http://localhost:8000/api", Arc::new(mock)).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_plain_resource() {
        let client = client_expecting(
            "http://localhost:8000/api/tools/",
            json!([{ "id": 1, "name": "Figma" }]),
        );
        let body = fetch_body(&client, args(ResourceArg::Tools)).await.unwrap();
        assert_eq!(body, json!([{ "id": 1, "name": "Figma" }]));
    }

    #[tokio::test]
    async fn test_fetch_filtered_projects() {
        let client = client_expecting(
            "http://localhost:8000/api/projects/?featured=true",
            json!([]),
        );
        let mut fetch = args(ResourceArg::Projects);
        fetch.featured = true;
        assert_eq!(fetch_body(&client, fetch).await.unwrap(), json!([]));
    }

    #[tokio::test]
    async fn test_fetch_project_by_slug() {
        let client = client_expecting(
            "http://localhost:8000/api/projects/atlas/",
            json!({ "slug": "atlas" }),
        );
        let mut fetch = args(ResourceArg::Projects);
        fetch.slug = Some("atlas".into());
        assert_eq!(
            fetch_body(&client, fetch).await.unwrap(),
            json!({ "slug": "atlas" })
        );
    }

    #[tokio::test]
    async fn test_project_options_rejected_elsewhere() {
        let client = PortfolioClient::with_transport(
            "http://localhost:8000/api",
            Arc::new(MockTransport::new()),
        )
        .unwrap();
        let mut fetch = args(ResourceArg::Skills);
        fetch.search = Some("rust".into());
        assert!(matches!(
            fetch_body(&client, fetch).await,
            Err(FolioError::InvalidInput(_))
        ));
    }
}
