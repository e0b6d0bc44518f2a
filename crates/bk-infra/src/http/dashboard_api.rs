use async_trait::async_trait;

use bk_core::dashboard::{BusinessHealthStatus, CashFlowSummary, DashboardSummary, Recommendation};
use bk_core::ports::{ApiError, DashboardApiPort};

use super::client::{endpoints, HttpApiClient};

#[async_trait]
impl DashboardApiPort for HttpApiClient {
    async fn summary(&self) -> Result<DashboardSummary, ApiError> {
        self.get_json(endpoints::DASHBOARD_SUMMARY, &[]).await
    }

    async fn cash_flow(&self, period: Option<&str>) -> Result<CashFlowSummary, ApiError> {
        match period {
            Some(period) => {
                self.get_json(endpoints::DASHBOARD_CASH_FLOW, &[("period", period)])
                    .await
            }
            None => self.get_json(endpoints::DASHBOARD_CASH_FLOW, &[]).await,
        }
    }

    async fn health_status(&self) -> Result<BusinessHealthStatus, ApiError> {
        self.get_json(endpoints::DASHBOARD_HEALTH_STATUS, &[]).await
    }

    async fn recommendations(&self) -> Result<Vec<Recommendation>, ApiError> {
        self.get_json(endpoints::DASHBOARD_RECOMMENDATIONS, &[]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token_store::InMemoryTokenStore;
    use bk_core::dashboard::{Priority, Trend};
    use mockito::{Matcher, Server};
    use std::sync::Arc;
    use std::time::Duration;

    const CASH_FLOW: &str = r#"{
        "total_income": 1000,
        "total_expenses": 400,
        "net_cash_flow": 600,
        "period": "month",
        "trend": "stable",
        "change_percentage": 0
    }"#;

    fn build_client(base_url: &str) -> HttpApiClient {
        HttpApiClient::new(
            base_url,
            Duration::from_secs(5),
            Arc::new(InMemoryTokenStore::new()),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn cash_flow_passes_period_query() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/dashboard/cash-flow")
            .match_query(Matcher::UrlEncoded("period".into(), "month".into()))
            .with_status(200)
            .with_body(CASH_FLOW)
            .create_async()
            .await;

        let client = build_client(&server.url());
        let summary = client.cash_flow(Some("month")).await.unwrap();

        mock.assert_async().await;
        assert_eq!(summary.trend, Trend::Stable);
        assert_eq!(summary.net_cash_flow, 600.0);
    }

    #[tokio::test]
    async fn cash_flow_without_period_sends_no_query() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/dashboard/cash-flow")
            .match_query(Matcher::Missing)
            .with_status(200)
            .with_body(CASH_FLOW)
            .create_async()
            .await;

        let client = build_client(&server.url());
        client.cash_flow(None).await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn recommendations_decode_list() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/dashboard/recommendations")
            .with_status(200)
            .with_body(
                r#"[{"id": "r1", "title": "Reduce stock", "description": "Slow movers",
                    "priority": "medium", "action": "Review", "category": "inventory"}]"#,
            )
            .create_async()
            .await;

        let client = build_client(&server.url());
        let recommendations = client.recommendations().await.unwrap();

        assert_eq!(recommendations.len(), 1);
        assert_eq!(recommendations[0].priority, Priority::Medium);
    }

    #[tokio::test]
    async fn server_error_without_body_has_no_message() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/dashboard/health-status")
            .with_status(503)
            .create_async()
            .await;

        let client = build_client(&server.url());
        let err = client.health_status().await.unwrap_err();

        assert_eq!(
            err.display_message("Failed to load health status"),
            "Failed to load health status"
        );
    }
}
