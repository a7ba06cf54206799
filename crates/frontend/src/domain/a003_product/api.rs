use contracts::domain::a003_product::{Product, ProductDto};

use crate::shared::api_client::{ApiClient, ApiError, Transport};

const ENDPOINT: &str = "/inventory/";

pub async fn fetch_all<T: Transport>(client: &ApiClient<T>) -> Vec<Product> {
    client.list_or_empty(ENDPOINT).await
}

pub async fn create<T: Transport>(
    client: &ApiClient<T>,
    dto: &ProductDto,
) -> Result<Product, ApiError> {
    client.post(ENDPOINT, dto).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api_client::testing::{client, MockTransport};
    use crate::system::auth::storage::Session;
    use contracts::enums::StockLevel;
    use futures::executor::block_on;

    #[test]
    fn test_fetch_all_stock_levels() {
        let api = client(
            Session::in_memory(),
            MockTransport::default().respond_json(
                r#"[{"id":1,"name":"Bolt","sku":"B-1","description":null,"price":0.5,"stock":0},
                    {"id":2,"name":"Nut","sku":"N-1","description":null,"price":0.25,"stock":9},
                    {"id":3,"name":"Gear","sku":"G-1","description":"steel","price":12.0,"stock":10}]"#,
            ),
        );

        let products = block_on(fetch_all(&api));
        let levels: Vec<StockLevel> = products.iter().map(|p| p.stock_level()).collect();
        assert_eq!(
            levels,
            vec![StockLevel::OutOfStock, StockLevel::Low, StockLevel::InStock]
        );
        assert_eq!(
            api.transport().last_request().unwrap().url,
            "http://api.test/inventory/"
        );
    }

    #[test]
    fn test_create_validation_error() {
        let api = client(
            Session::in_memory(),
            MockTransport::default().respond(
                400,
                Some("application/json"),
                r#"{"detail":"name and sku are required"}"#,
            ),
        );
        let dto = ProductDto {
            name: "Bolt".into(),
            ..Default::default()
        };

        let err = block_on(create(&api, &dto)).unwrap_err();
        assert_eq!(err.status(), Some(400));
        assert_eq!(err.user_message(), "name and sku are required");
    }
}
