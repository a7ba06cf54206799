use contracts::system::auth::{LoginRequest, LoginResponse};

use crate::shared::api_client::{ApiClient, ApiError, Transport};

/// Login with username and password.
///
/// On success the issued token is written to the client's session, so every
/// following call carries it.
pub async fn login<T: Transport>(
    client: &ApiClient<T>,
    username: String,
    password: String,
) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest { username, password };
    let response: LoginResponse = client.post("/auth/login", &request).await?;
    client.session().set_token(&response.token);
    log::info!("Signed in as {}", response.user.username);
    Ok(response)
}

/// Forget the stored token. The backend keeps no server-side session.
pub fn logout<T: Transport>(client: &ApiClient<T>) {
    client.session().clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api_client::testing::{client, MockTransport};
    use crate::shared::api_client::Method;
    use crate::system::auth::storage::Session;
    use futures::executor::block_on;

    #[test]
    fn test_login_stores_token() {
        let session = Session::in_memory();
        let api = client(
            session.clone(),
            MockTransport::default()
                .respond_json(r#"{"token":"t1","user":{"id":1,"username":"admin","email":null,"role_id":1}}"#),
        );

        let res = block_on(login(&api, "admin".into(), "admin123".into())).unwrap();
        assert_eq!(res.token, "t1");
        assert_eq!(session.token().as_deref(), Some("t1"));

        let sent = api.transport().last_request().unwrap();
        assert_eq!(sent.method, Method::Post);
        assert_eq!(sent.url, "http://api.test/auth/login");
        let body: serde_json::Value = serde_json::from_str(sent.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"username": "admin", "password": "admin123"}));
    }

    #[test]
    fn test_failed_login_keeps_session_empty() {
        let session = Session::in_memory();
        let api = client(
            session.clone(),
            MockTransport::default().respond(401, Some("application/json"), r#"{"detail":"invalid credentials"}"#),
        );

        let err = block_on(login(&api, "admin".into(), "nope".into())).unwrap_err();
        assert_eq!(err.user_message(), "invalid credentials");
        assert_eq!(session.token(), None);
    }

    #[test]
    fn test_logout_clears_token() {
        let session = Session::in_memory();
        session.set_token("t1");
        let api = client(session.clone(), MockTransport::default());
        logout(&api);
        assert!(!session.is_authenticated());
    }

}
