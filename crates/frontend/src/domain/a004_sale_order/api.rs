use contracts::domain::a004_sale_order::{SaleOrder, SaleOrderDto};

use crate::shared::api_client::{ApiClient, ApiError, Transport};

const ENDPOINT: &str = "/sales/";

pub async fn fetch_all<T: Transport>(client: &ApiClient<T>) -> Vec<SaleOrder> {
    client.list_or_empty(ENDPOINT).await
}

pub async fn create<T: Transport>(
    client: &ApiClient<T>,
    dto: &SaleOrderDto,
) -> Result<SaleOrder, ApiError> {
    client.post(ENDPOINT, dto).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api_client::testing::{client, MockTransport};
    use crate::system::auth::storage::Session;
    use contracts::enums::SaleOrderStatus;
    use futures::executor::block_on;

    #[test]
    fn test_fetch_all() {
        let api = client(
            Session::in_memory(),
            MockTransport::default().respond_json(
                r#"[{"id":4,"order_number":"SO-0004","contact_id":1,"status":"shipped","total":99.9}]"#,
            ),
        );

        let orders = block_on(fetch_all(&api));
        assert_eq!(orders[0].order_number, "SO-0004");
        assert_eq!(orders[0].status, SaleOrderStatus::Shipped);
        assert_eq!(
            api.transport().last_request().unwrap().url,
            "http://api.test/sales/"
        );
    }

    #[test]
    fn test_unrecognised_status_only_degrades_that_row() {
        let api = client(
            Session::in_memory(),
            MockTransport::default().respond_json(
                r#"[{"id":4,"order_number":"SO-0004","contact_id":null,"status":"returned","total":1.0},
                    {"id":5,"order_number":"SO-0005","contact_id":null,"status":"draft","total":2.0}]"#,
            ),
        );

        let orders = block_on(fetch_all(&api));
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].status, SaleOrderStatus::Unknown);
        assert_eq!(orders[1].status, SaleOrderStatus::Draft);
    }

    #[test]
    fn test_malformed_row_leaves_list_empty() {
        let api = client(
            Session::in_memory(),
            MockTransport::default().respond_json(
                r#"[{"id":"x","order_number":"SO-0004","status":"draft","total":1.0}]"#,
            ),
        );
        assert!(block_on(fetch_all(&api)).is_empty());
    }
}
