//! Dispatcher integration tests
//!
//! One scripted upstream answer per request; the recording backend shows
//! exactly which calls were made.

#[cfg(test)]
mod tests {
    use crate::assert_data_url;
    use crate::common::fixtures::{self, PNG_BASE64};
    use crate::common::RecordingBackend;
    use groovegen::core::dispatch::{
        Action, ActionOutput, Dispatcher, GroundedAnswer, RequestEnvelope,
    };
    use groovegen::core::providers::gemini::GeminiModels;
    use groovegen::core::providers::unified_provider::ProviderError;
    use groovegen::utils::error::GatewayError;
    use serde_json::json;
    use std::sync::Arc;

    fn dispatcher(backend: &Arc<RecordingBackend>) -> Dispatcher {
        Dispatcher::new(backend.clone(), GeminiModels::default())
    }

    // ==================== Normalization per action ====================

    #[tokio::test]
    async fn test_every_action_normalizes_success() {
        for (action, payload) in fixtures::envelopes() {
            let parsed: Action = action.parse().unwrap();
            let upstream = if parsed.produces_image() {
                fixtures::image_body("image/png", PNG_BASE64)
            } else if parsed == Action::ChatWithSearch {
                fixtures::grounded_body("grounded", &["https://a.com"])
            } else {
                fixtures::text_body("plain")
            };
            let backend = Arc::new(RecordingBackend::new().respond(fixtures::response(upstream)));

            let output = dispatcher(&backend)
                .dispatch(RequestEnvelope::new(action, payload))
                .await
                .unwrap_or_else(|e| panic!("{} failed: {}", action, e));

            match output {
                ActionOutput::Image(url) => {
                    assert!(parsed.produces_image());
                    assert_data_url!(&url, "image/png");
                    assert_eq!(url, format!("data:image/png;base64,{}", PNG_BASE64));
                }
                ActionOutput::Text(text) => assert_eq!(text, "plain"),
                ActionOutput::Grounded(answer) => {
                    assert_eq!(answer.text, "grounded");
                    assert_eq!(answer.grounding_urls, vec!["https://a.com"]);
                }
            }
            assert_eq!(backend.call_count(), 1, "{} must call upstream once", action);
        }
    }

    #[tokio::test]
    async fn test_models_follow_action_families() {
        let expected = [
            ("generateDanceVideo", "gemini-2.5-flash-image"),
            ("generateImage", "gemini-2.5-flash-image"),
            ("editImage", "gemini-2.5-flash-image"),
            ("analyzeContent", "gemini-3-flash-preview"),
            ("chatWithSearch", "gemini-3-flash-preview"),
            ("generateFastText", "gemini-2.5-flash-lite-latest"),
        ];

        for ((action, payload), (expected_action, model)) in
            fixtures::envelopes().into_iter().zip(expected)
        {
            assert_eq!(action, expected_action);
            let backend = Arc::new(RecordingBackend::new());
            let _ = dispatcher(&backend)
                .dispatch(RequestEnvelope::new(action, payload))
                .await;
            let calls = backend.calls();
            assert_eq!(calls.len(), 1);
            assert_eq!(calls[0].model, model, "model for {}", action);
        }
    }

    #[tokio::test]
    async fn test_dance_prompt_and_image_reach_upstream() {
        let backend = Arc::new(
            RecordingBackend::new().respond(fixtures::response(fixtures::image_body(
                "image/jpeg",
                "ZGFuY2U=",
            ))),
        );

        let output = dispatcher(&backend)
            .dispatch(RequestEnvelope::new(
                "generateDanceVideo",
                json!({"imageBase64": "cGhvdG8=", "imageMimeType": "image/jpeg", "prompt": "the robot"}),
            ))
            .await
            .unwrap();

        assert_eq!(output, ActionOutput::Image("data:image/jpeg;base64,ZGFuY2U=".into()));
        let request = &backend.calls()[0].request;
        let parts = &request.contents[0].parts;
        assert_eq!(parts[0].inline_data.as_ref().unwrap().data, "cGhvdG8=");
        assert_eq!(
            parts[1].text.as_deref(),
            Some("Generate a cinematic full-body shot of this person performing this dance move: the robot. Keep the character consistent.")
        );
    }

    #[tokio::test]
    async fn test_image_actions_fail_without_inline_data() {
        let cases = [
            ("generateDanceVideo", "Video/Image generation failed."),
            ("generateImage", "No image generated."),
            ("editImage", "Image editing failed."),
        ];
        let payloads = fixtures::envelopes();

        for (action, message) in cases {
            let payload = payloads
                .iter()
                .find(|(name, _)| *name == action)
                .map(|(_, p)| p.clone())
                .unwrap();
            let backend =
                Arc::new(RecordingBackend::new().respond(fixtures::response(fixtures::empty_body())));

            let err = dispatcher(&backend)
                .dispatch(RequestEnvelope::new(action, payload))
                .await
                .unwrap_err();

            assert!(matches!(err, GatewayError::MissingContent(_)));
            assert_eq!(err.to_string(), message);
        }
    }

    #[tokio::test]
    async fn test_edit_image_text_only_reply_is_error_with_text() {
        let backend = Arc::new(RecordingBackend::new().respond(fixtures::response(
            fixtures::text_body("I can't modify photos of real people."),
        )));

        let err = dispatcher(&backend)
            .dispatch(RequestEnvelope::new(
                "editImage",
                json!({"imageBase64": PNG_BASE64, "mimeType": "image/png", "prompt": "swap faces"}),
            ))
            .await
            .unwrap_err();

        assert!(err.to_string().contains("I can't modify photos of real people."));
        assert!(err.to_string().starts_with("Model returned text instead of image: "));
    }

    // ==================== Grounded chat ====================

    #[tokio::test]
    async fn test_chat_preserves_url_order_and_duplicates() {
        let backend = Arc::new(RecordingBackend::new().respond(fixtures::response(
            fixtures::grounded_body(
                "X is here.",
                &["https://a.com", "https://b.com", "https://a.com"],
            ),
        )));

        let output = dispatcher(&backend)
            .dispatch(RequestEnvelope::new(
                "chatWithSearch",
                json!({"history": [{"role": "model", "text": "hi"}], "newMessage": "find X"}),
            ))
            .await
            .unwrap();

        assert_eq!(
            output,
            ActionOutput::Grounded(GroundedAnswer {
                text: "X is here.".into(),
                grounding_urls: vec![
                    "https://a.com".into(),
                    "https://b.com".into(),
                    "https://a.com".into()
                ],
            })
        );

        let request = &backend.calls()[0].request;
        assert_eq!(request.contents.len(), 2);
        assert_eq!(request.contents[0].role.as_deref(), Some("model"));
        assert_eq!(request.contents[0].parts[0].text.as_deref(), Some("hi"));
        assert_eq!(request.contents[1].role.as_deref(), Some("user"));
        assert_eq!(request.contents[1].parts[0].text.as_deref(), Some("find X"));
        assert!(request.tools[0].google_search.is_some());
    }

    // ==================== Rejections ====================

    #[tokio::test]
    async fn test_unknown_action_names_value_and_skips_upstream() {
        for action in ["generateVideo", "GENERATEIMAGE", "", "chat"] {
            let backend = Arc::new(RecordingBackend::new());
            let err = dispatcher(&backend)
                .dispatch(RequestEnvelope::new(action, json!({})))
                .await
                .unwrap_err();

            assert!(matches!(err, GatewayError::UnknownAction(_)));
            assert!(err.to_string().contains(action));
            assert_eq!(backend.call_count(), 0);
        }
    }

    #[tokio::test]
    async fn test_missing_credential_fails_every_action_before_network() {
        let dispatcher = Dispatcher::unconfigured(GeminiModels::default());

        for (action, payload) in fixtures::envelopes() {
            let err = dispatcher
                .dispatch(RequestEnvelope::new(action, payload))
                .await
                .unwrap_err();
            assert!(matches!(err, GatewayError::Config(_)), "{}", action);
        }
    }

    #[tokio::test]
    async fn test_upstream_error_message_is_kept() {
        let backend = Arc::new(RecordingBackend::new().fail(ProviderError::rate_limit(
            "gemini",
            "Resource has been exhausted (e.g. check quota).",
            Some(30),
        )));

        let err = dispatcher(&backend)
            .dispatch(RequestEnvelope::new("generateFastText", json!({"prompt": "hi"})))
            .await
            .unwrap_err();

        assert!(matches!(err, GatewayError::Provider(_)));
        assert!(err.to_string().contains("Resource has been exhausted"));
        assert_eq!(backend.call_count(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_dispatches_do_not_interact() {
        let backend = Arc::new(
            RecordingBackend::new()
                .respond(fixtures::response(fixtures::text_body("same")))
                .respond(fixtures::response(fixtures::text_body("same")))
                .respond(fixtures::response(fixtures::text_body("same"))),
        );
        let dispatcher = Arc::new(dispatcher(&backend));

        let handles: Vec<_> = (0..3)
            .map(|i| {
                let dispatcher = dispatcher.clone();
                tokio::spawn(async move {
                    dispatcher
                        .dispatch(RequestEnvelope::new(
                            "generateFastText",
                            json!({"prompt": format!("prompt {}", i)}),
                        ))
                        .await
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.await.unwrap().unwrap().text(), Some("same"));
        }
        assert_eq!(backend.call_count(), 3);
    }

    // ==================== Advisory fields ====================

    #[tokio::test]
    async fn test_unrecognized_image_size_still_generates() {
        for size in [json!("8K"), json!("1k"), json!(null)] {
            let backend = Arc::new(RecordingBackend::new().respond(fixtures::response(
                fixtures::image_body("image/webp", "UklGRg=="),
            )));

            let output = dispatcher(&backend)
                .dispatch(RequestEnvelope::new(
                    "generateImage",
                    json!({"prompt": "disco ball", "size": size}),
                ))
                .await
                .unwrap_or_else(|e| panic!("size {} rejected: {}", size, e));

            match output {
                ActionOutput::Image(url) => assert_data_url!(&url, "image/webp"),
                other => panic!("expected image, got {:?}", other),
            }
            assert_eq!(backend.call_count(), 1);
        }
    }

    #[tokio::test]
    async fn test_non_boolean_is_video_still_analyzes() {
        let backend = Arc::new(
            RecordingBackend::new().respond(fixtures::response(fixtures::text_body("A clip."))),
        );

        let output = dispatcher(&backend)
            .dispatch(RequestEnvelope::new(
                "analyzeContent",
                json!({"fileBase64": "AAAA", "mimeType": "video/mp4", "prompt": "?", "isVideo": "yes"}),
            ))
            .await
            .unwrap();

        assert_eq!(output.text(), Some("A clip."));
    }
}
