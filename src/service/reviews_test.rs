#[cfg(test)]
mod tests {
    use crate::error::AppError;
    use crate::models::DealerId;
    use crate::service::reviews::{sentiment_label, ReviewService};
    use crate::upstream::Upstream;
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};
    use tracing_test::traced_test;

    /// Scripted upstream recording every sentiment request.
    struct FakeUpstream {
        reviews: Option<Value>,
        sentiments: Vec<Option<Value>>,
        analyzed: Mutex<Vec<String>>,
        posted: Mutex<Vec<Value>>,
        accept_posts: bool,
    }

    impl FakeUpstream {
        fn new(reviews: Option<Value>, sentiments: Vec<Option<Value>>) -> Self {
            Self {
                reviews,
                sentiments,
                analyzed: Mutex::new(Vec::new()),
                posted: Mutex::new(Vec::new()),
                accept_posts: true,
            }
        }
    }

    #[async_trait]
    impl Upstream for FakeUpstream {
        async fn get(&self, _endpoint: &str, _params: &[(&str, &str)]) -> Option<Value> {
            self.reviews.clone()
        }

        async fn post(&self, _endpoint: &str, body: &Value) -> Option<Value> {
            self.posted.lock().unwrap().push(body.clone());
            self.accept_posts.then(|| json!({"id": 1}))
        }

        async fn analyze_sentiment(&self, text: &str) -> Option<Value> {
            let mut analyzed = self.analyzed.lock().unwrap();
            let index = analyzed.len();
            analyzed.push(text.to_string());
            self.sentiments.get(index).cloned().flatten()
        }
    }

    fn dealer() -> DealerId {
        DealerId::parse("15").unwrap()
    }

    #[test]
    fn sentiment_label_defaults_to_neutral() {
        assert_eq!(sentiment_label(None), "neutral");
        assert_eq!(sentiment_label(Some(&json!({}))), "neutral");
        assert_eq!(sentiment_label(Some(&json!({"sentiment": 3}))), "neutral");
        assert_eq!(sentiment_label(Some(&json!({"sentiment": "positive"}))), "positive");
    }

    #[tokio::test]
    async fn each_review_gets_its_own_sentiment_in_order() {
        let upstream = Arc::new(FakeUpstream::new(
            Some(json!([
                {"id": 1, "review": "Fantastic services"},
                {"id": 2, "review": "Awful wait times"},
                {"id": 3, "review": "It was fine"}
            ])),
            vec![
                Some(json!({"sentiment": "positive"})),
                Some(json!({"sentiment": "negative"})),
                None,
            ],
        ));
        let service = ReviewService::new(upstream.clone());

        let reviews = service.dealer_reviews(dealer()).await.unwrap();

        let labels: Vec<_> = reviews.iter().map(|r| r["sentiment"].as_str().unwrap()).collect();
        assert_eq!(labels, vec!["positive", "negative", "neutral"]);
        assert_eq!(
            *upstream.analyzed.lock().unwrap(),
            vec!["Fantastic services", "Awful wait times", "It was fine"]
        );
        assert_eq!(reviews[0]["id"], 1);
    }

    #[tokio::test]
    async fn missing_sentiment_field_is_neutral() {
        let upstream = Arc::new(FakeUpstream::new(
            Some(json!([{"id": 1, "review": "ok"}])),
            vec![Some(json!({"label": "positive"}))],
        ));
        let service = ReviewService::new(upstream);

        let reviews = service.dealer_reviews(dealer()).await.unwrap();

        assert_eq!(reviews[0]["sentiment"], "neutral");
    }

    #[tokio::test]
    async fn review_without_text_is_analyzed_as_empty() {
        let upstream = Arc::new(FakeUpstream::new(Some(json!([{"id": 1}])), vec![None]));
        let service = ReviewService::new(upstream.clone());

        let reviews = service.dealer_reviews(dealer()).await.unwrap();

        assert_eq!(reviews[0]["sentiment"], "neutral");
        assert_eq!(*upstream.analyzed.lock().unwrap(), vec![String::new()]);
    }

    #[tokio::test]
    async fn empty_review_list_makes_no_sentiment_calls() {
        let upstream = Arc::new(FakeUpstream::new(Some(json!([])), vec![]));
        let service = ReviewService::new(upstream.clone());

        let reviews = service.dealer_reviews(dealer()).await.unwrap();

        assert!(reviews.is_empty());
        assert!(upstream.analyzed.lock().unwrap().is_empty());
    }

    #[tokio::test]
    #[traced_test]
    async fn null_review_list_is_an_upstream_failure() {
        let upstream = Arc::new(FakeUpstream::new(None, vec![]));
        let service = ReviewService::new(upstream.clone());

        let err = service.dealer_reviews(dealer()).await.unwrap_err();

        assert!(matches!(err, AppError::Upstream(ref msg) if msg.contains("Failed to fetch reviews")));
        assert!(upstream.analyzed.lock().unwrap().is_empty());
    }

    #[tokio::test]
    #[traced_test]
    async fn non_list_payload_is_an_upstream_failure() {
        let upstream = Arc::new(FakeUpstream::new(Some(json!({"error": "boom"})), vec![]));
        let service = ReviewService::new(upstream);

        let err = service.dealer_reviews(dealer()).await.unwrap_err();

        assert!(matches!(err, AppError::Upstream(_)));
        assert!(logs_contain("Expected a review list for dealer 15"));
    }

    #[tokio::test]
    async fn add_review_forwards_the_body() {
        let upstream = Arc::new(FakeUpstream::new(None, vec![]));
        let service = ReviewService::new(upstream.clone());
        let review = json!({"name": "Berkly Shepley", "dealership": 15, "review": "Total grid"});

        service.add_review(&review).await.unwrap();

        assert_eq!(*upstream.posted.lock().unwrap(), vec![review]);
    }

    #[tokio::test]
    #[traced_test]
    async fn add_review_fails_when_upstream_is_unavailable() {
        let mut fake = FakeUpstream::new(None, vec![]);
        fake.accept_posts = false;
        let service = ReviewService::new(Arc::new(fake));

        let err = service.add_review(&json!({"review": "x"})).await.unwrap_err();

        assert!(matches!(err, AppError::ReviewPost));
        assert!(logs_contain("Error posting review"));
    }
}
