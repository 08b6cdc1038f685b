//! Generation endpoint logic: remote first, template fallback second

use std::time::Instant;

use crate::error::{NameForgeError, Result};
use crate::generator::{decorate, BatchGenerator};
use crate::llm::RemoteGenerator;
use crate::types::{GeneratedName, GenerationRequest, GenerationResponse, GenerationSource};

/// Outcome of one stage of the generation pipeline
#[derive(Debug)]
pub enum Attempt {
    Produced {
        names: Vec<GeneratedName>,
        source: GenerationSource,
    },
    Failed(NameForgeError),
}

/// Stateless request handler shared by every connection.
///
/// Holds no per-request state; the only suspension point is the remote call.
#[derive(Clone, Default)]
pub struct GenerationService {
    remote: Option<RemoteGenerator>,
}

impl GenerationService {
    pub fn new(remote: Option<RemoteGenerator>) -> Self {
        Self { remote }
    }

    /// Service that always uses the template generator
    pub fn fallback_only() -> Self {
        Self { remote: None }
    }

    pub fn has_remote(&self) -> bool {
        self.remote.is_some()
    }

    /// Handle one generation request.
    ///
    /// Only malformed requests and a fallback that produced nothing are errors;
    /// remote failures are absorbed.
    pub async fn handle(&self, request: GenerationRequest) -> Result<GenerationResponse> {
        request.validate()?;
        let start_time = Instant::now();

        let outcome = match self.try_remote(&request).await {
            produced @ Attempt::Produced { .. } => produced,
            Attempt::Failed(e) => {
                if self.remote.is_some() {
                    tracing::warn!(
                        category = %request.category,
                        batch_number = request.batch_number,
                        error = %e,
                        "Remote generation failed, using fallback generator"
                    );
                }
                self.fallback(&request)
            }
        };

        match outcome {
            Attempt::Produced { names, source } => {
                tracing::info!(
                    category = %request.category,
                    source = %source,
                    batch_number = request.batch_number,
                    names_count = names.len(),
                    duration_ms = %start_time.elapsed().as_millis(),
                    "Names generated"
                );
                Ok(GenerationResponse {
                    names,
                    source,
                    batch_number: request.batch_number,
                    has_more: request.has_more(),
                })
            }
            Attempt::Failed(e) => Err(e),
        }
    }

    /// First stage: the completion service, if one is configured
    pub async fn try_remote(&self, request: &GenerationRequest) -> Attempt {
        let Some(remote) = &self.remote else {
            return Attempt::Failed(NameForgeError::remote("none", "No remote provider configured"));
        };
        if !remote.is_ready() {
            return Attempt::Failed(NameForgeError::remote(
                remote.provider_name(),
                "Provider is not ready",
            ));
        }

        match remote.request(request).await {
            Ok(names) => Attempt::Produced {
                names,
                source: GenerationSource::Remote,
            },
            Err(e) => Attempt::Failed(e),
        }
    }

    /// Second stage: template names with simulated attributes
    pub fn fallback(&self, request: &GenerationRequest) -> Attempt {
        let mut rng = rand::thread_rng();
        let target = request.batch_size as usize;
        let raw = BatchGenerator::new(request.category, &request.filters).generate(target, &mut rng);

        if raw.is_empty() {
            return Attempt::Failed(crate::internal_error!(
                "Template generator produced no {} names",
                request.category
            ));
        }
        if raw.len() < target {
            tracing::debug!(
                category = %request.category,
                requested = target,
                generated = raw.len(),
                "Fallback batch is smaller than requested"
            );
        }

        let names = raw
            .into_iter()
            .map(|name| decorate(name, request.category, &request.filters, &mut rng))
            .collect();

        Attempt::Produced {
            names,
            source: GenerationSource::Fallback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::CompletionService;
    use crate::types::{Category, Filters};
    use async_trait::async_trait;
    use std::collections::HashSet;
    use std::sync::Arc;

    struct Fixed(Result<String>);

    /// Would answer, but reports itself as not configured
    struct Unready;

    #[async_trait]
    impl CompletionService for Unready {
        async fn complete(&self, _system: &str, _user: &str, _temperature: f32) -> Result<String> {
            Ok(r#"[{"name":"Unreachable"}]"#.to_string())
        }

        fn name(&self) -> &'static str {
            "unready"
        }

        fn model(&self) -> &str {
            "none"
        }

        fn is_ready(&self) -> bool {
            false
        }
    }

    #[async_trait]
    impl CompletionService for Fixed {
        async fn complete(&self, _system: &str, _user: &str, _temperature: f32) -> Result<String> {
            self.0.clone()
        }

        fn name(&self) -> &'static str {
            "fixed"
        }

        fn model(&self) -> &str {
            "fixed-1"
        }

        fn is_ready(&self) -> bool {
            true
        }
    }

    fn service(reply: Result<String>) -> GenerationService {
        GenerationService::new(Some(RemoteGenerator::new(Arc::new(Fixed(reply)))))
    }

    #[tokio::test]
    async fn test_remote_success_is_tagged_remote() {
        let service = service(Ok(r#"[{"name":"Lumen","meaning":"Light"}]"#.to_string()));
        let response = service.handle(GenerationRequest::new(Category::Baby)).await.unwrap();

        assert_eq!(response.source, GenerationSource::Remote);
        assert_eq!(response.names[0].name, "Lumen");
        assert_eq!(response.batch_number, 1);
        assert!(response.has_more);
    }

    #[tokio::test]
    async fn test_unready_provider_is_skipped() {
        let service = GenerationService::new(Some(RemoteGenerator::new(Arc::new(Unready))));
        let response = service.handle(GenerationRequest::new(Category::Pet)).await.unwrap();

        assert_eq!(response.source, GenerationSource::Fallback);
        assert!(response.names.iter().all(|n| n.name != "Unreachable"));
    }

    #[tokio::test]
    async fn test_unparseable_remote_falls_back() {
        let service = service(Ok("Sorry, no names today.".to_string()));
        let response = service.handle(GenerationRequest::new(Category::Business)).await.unwrap();

        assert_eq!(response.source, GenerationSource::Fallback);
        assert_eq!(response.names.len(), 20);
        assert!(response.names.iter().all(|n| n.seo_score.is_some()));
    }

    #[tokio::test]
    async fn test_no_remote_uses_fallback() {
        let service = GenerationService::fallback_only();
        let request = GenerationRequest::new(Category::Pet).with_filters(Filters {
            pet_type: Some("bird".to_string()),
            ..Default::default()
        });
        let response = service.handle(request).await.unwrap();

        assert_eq!(response.source, GenerationSource::Fallback);
        let unique: HashSet<_> = response.names.iter().map(|n| &n.name).collect();
        assert_eq!(unique.len(), response.names.len());
    }

    #[tokio::test]
    async fn test_has_more_tracks_batch_ceiling() {
        let service = GenerationService::fallback_only();
        let last = GenerationRequest::new(Category::Hashtag).with_batch(50, 20);
        assert!(!service.handle(last).await.unwrap().has_more);

        let earlier = GenerationRequest::new(Category::Hashtag).with_batch(49, 20);
        assert!(service.handle(earlier).await.unwrap().has_more);
    }

    #[tokio::test]
    async fn test_malformed_request_is_rejected() {
        let service = GenerationService::fallback_only();
        let err = service
            .handle(GenerationRequest::new(Category::Baby).with_batch(0, 20))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn test_fallback_respects_batch_size() {
        let service = GenerationService::fallback_only();
        let request = GenerationRequest::new(Category::Business).with_batch(1, 7);
        match service.fallback(&request) {
            Attempt::Produced { names, source } => {
                assert_eq!(names.len(), 7);
                assert_eq!(source, GenerationSource::Fallback);
            }
            Attempt::Failed(e) => panic!("fallback failed: {}", e),
        }
    }
}
