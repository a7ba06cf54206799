//! Data for the overview dashboard: record counts across every module and
//! the latest deals. Each list is fetched independently; a failing module
//! counts as empty instead of failing the whole dashboard.

use contracts::domain::a002_deal::Deal;
use contracts::system::health::HealthStatus;

use crate::domain::{
    a001_contact, a002_deal, a003_product, a004_sale_order, a005_invoice, a006_project,
};
use crate::shared::api_client::{ApiClient, ApiError, Transport};

/// Number of deals listed under "Recent Deals"
pub const RECENT_DEALS: usize = 5;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverviewSnapshot {
    pub contacts: usize,
    pub deals: usize,
    pub products: usize,
    pub orders: usize,
    pub invoices: usize,
    pub projects: usize,
    /// Newest first, at most [`RECENT_DEALS`]
    pub recent_deals: Vec<Deal>,
}

pub async fn load_overview<T: Transport>(client: &ApiClient<T>) -> OverviewSnapshot {
    let (contacts, deals, products, orders, invoices, projects) = futures::join!(
        a001_contact::api::fetch_all(client),
        a002_deal::api::fetch_all(client),
        a003_product::api::fetch_all(client),
        a004_sale_order::api::fetch_all(client),
        a005_invoice::api::fetch_all(client),
        a006_project::api::fetch_all(client),
    );

    OverviewSnapshot {
        contacts: contacts.len(),
        deals: deals.len(),
        products: products.len(),
        orders: orders.len(),
        invoices: invoices.len(),
        projects: projects.len(),
        // The backend lists deals newest first
        recent_deals: deals.into_iter().take(RECENT_DEALS).collect(),
    }
}

/// Backend status from the API root
pub async fn fetch_health<T: Transport>(client: &ApiClient<T>) -> Result<HealthStatus, ApiError> {
    client.get("/").await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api_client::testing::{client, MockTransport};
    use crate::system::auth::storage::Session;
    use futures::executor::block_on;

    fn deals_json(n: usize) -> String {
        let items: Vec<String> = (0..n)
            .map(|i| {
                format!(
                    r#"{{"id":{},"title":"Deal {}","amount":100.0,"stage":"new","contact_id":null}}"#,
                    n - i,
                    n - i
                )
            })
            .collect();
        format!("[{}]", items.join(","))
    }

    #[test]
    fn test_counts_and_recent_deals() {
        let api = client(
            Session::in_memory(),
            MockTransport::default()
                .respond_json(r#"[{"id":1,"name":"Ada"},{"id":2,"name":"Bob"}]"#)
                .respond_json(&deals_json(7))
                .respond_json("[]")
                .respond_json("[]")
                .respond_json("[]")
                .respond_json(r#"[{"id":1,"name":"Rollout","code":"P1"}]"#),
        );

        let snapshot = block_on(load_overview(&api));
        assert_eq!(snapshot.contacts, 2);
        assert_eq!(snapshot.deals, 7);
        assert_eq!(snapshot.projects, 1);
        assert_eq!(snapshot.recent_deals.len(), RECENT_DEALS);
        assert_eq!(snapshot.recent_deals[0].title, "Deal 7");
    }

    #[test]
    fn test_failures_count_as_empty() {
        let api = client(
            Session::in_memory(),
            MockTransport::default()
                .respond(500, None, "")
                .respond(500, None, "")
                .respond(500, None, "")
                .respond(500, None, "")
                .respond(500, None, "")
                .respond(500, None, ""),
        );

        assert_eq!(block_on(load_overview(&api)), OverviewSnapshot::default());
    }

    #[test]
    fn test_fetch_health() {
        let api = client(
            Session::in_memory(),
            MockTransport::default()
                .respond_json(r#"{"app":"OpenERP","version":"0.1.0","status":"ok"}"#),
        );

        let health = block_on(fetch_health(&api)).unwrap();
        assert!(health.is_ok());
        assert_eq!(api.transport().last_request().unwrap().url, "http://api.test/");
    }
}
