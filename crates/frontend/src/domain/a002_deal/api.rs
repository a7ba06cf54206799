use contracts::domain::a002_deal::{Deal, DealDto};

use crate::shared::api_client::{ApiClient, ApiError, Transport};

const ENDPOINT: &str = "/deals/";

pub async fn fetch_all<T: Transport>(client: &ApiClient<T>) -> Vec<Deal> {
    client.list_or_empty(ENDPOINT).await
}

pub async fn create<T: Transport>(client: &ApiClient<T>, dto: &DealDto) -> Result<Deal, ApiError> {
    client.post(ENDPOINT, dto).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api_client::testing::{client, MockTransport};
    use crate::system::auth::storage::Session;
    use contracts::domain::a001_contact::ContactId;
    use contracts::enums::DealStage;
    use futures::executor::block_on;

    #[test]
    fn test_null_stage_decodes() {
        let api = client(
            Session::in_memory(),
            MockTransport::default().respond_json(
                r#"[{"id":1,"title":"Website","amount":50000.0,"stage":null,"contact_id":null},
                    {"id":2,"title":"ERP","amount":1200.5,"stage":"won","contact_id":3}]"#,
            ),
        );

        let deals = block_on(fetch_all(&api));
        assert_eq!(deals.len(), 2);
        assert_eq!(deals[0].effective_stage(), DealStage::New);
        assert_eq!(deals[1].stage, Some(DealStage::Won));
        assert_eq!(deals[1].contact_id, Some(ContactId(3)));
    }

    #[test]
    fn test_unrecognised_stage_keeps_the_rest_of_the_list() {
        let api = client(
            Session::in_memory(),
            MockTransport::default().respond_json(
                r#"[{"id":1,"title":"Website","amount":100.0,"stage":"qualified","contact_id":null},
                    {"id":2,"title":"ERP","amount":200.0,"stage":"negotiation","contact_id":null}]"#,
            ),
        );

        let deals = block_on(fetch_all(&api));
        assert_eq!(deals.len(), 2);
        assert_eq!(deals[0].effective_stage(), DealStage::Qualified);
        assert_eq!(deals[1].effective_stage(), DealStage::Unknown);
    }

    #[test]
    fn test_create_sends_stage_code() {
        let session = Session::in_memory();
        session.set_token("abc123");
        let api = client(
            session,
            MockTransport::default().respond_json(
                r#"{"id":5,"title":"Website","amount":50000.0,"stage":"proposal","contact_id":null}"#,
            ),
        );
        let dto = DealDto {
            title: "Website".into(),
            amount: 50000.0,
            stage: DealStage::Proposal,
            contact_id: None,
        };

        block_on(create(&api, &dto)).unwrap();

        let sent = api.transport().last_request().unwrap();
        assert_eq!(sent.url, "http://api.test/deals/");
        assert_eq!(sent.header("authorization"), Some("Bearer abc123"));
        let body: serde_json::Value = serde_json::from_str(sent.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["stage"], "proposal");
        assert_eq!(body["contact_id"], serde_json::Value::Null);
    }
}
