use contracts::domain::a006_project::{Project, ProjectDto};

use crate::shared::api_client::{ApiClient, ApiError, Transport};

const ENDPOINT: &str = "/projects/";

pub async fn fetch_all<T: Transport>(client: &ApiClient<T>) -> Vec<Project> {
    client.list_or_empty(ENDPOINT).await
}

pub async fn create<T: Transport>(
    client: &ApiClient<T>,
    dto: &ProjectDto,
) -> Result<Project, ApiError> {
    client.post(ENDPOINT, dto).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api_client::testing::{client, MockTransport};
    use crate::system::auth::storage::Session;
    use contracts::enums::ProjectStatus;
    use futures::executor::block_on;

    #[test]
    fn test_fetch_all() {
        let api = client(
            Session::in_memory(),
            MockTransport::default().respond_json(
                r#"[{"id":1,"name":"Rollout","code":"PRJ-1","description":null,"contact_id":null,
                     "status":"on_hold","start_date":"2024-01-15","end_date":null}]"#,
            ),
        );

        let projects = block_on(fetch_all(&api));
        assert_eq!(projects[0].status, ProjectStatus::OnHold);
        assert!(projects[0].start_date.is_some());
        assert_eq!(
            api.transport().last_request().unwrap().url,
            "http://api.test/projects/"
        );
    }

    #[test]
    fn test_create_rejected_without_token() {
        let api = client(
            Session::in_memory(),
            MockTransport::default().respond(401, Some("text/plain"), "invalid credentials"),
        );
        let dto = ProjectDto {
            name: "Rollout".into(),
            code: "PRJ-1".into(),
            ..Default::default()
        };

        let err = block_on(create(&api, &dto)).unwrap_err();
        assert_eq!(err.to_string(), "invalid credentials");
        assert_eq!(api.transport().last_request().unwrap().header("Authorization"), None);
    }
}
