use serde::{Deserialize, Serialize};

/// Body of `POST /auth/login`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login: an opaque bearer token plus the signed-in user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_decodes() {
        let json = r#"{"token":"t1","user":{"id":1,"username":"admin","email":null,"role_id":1}}"#;
        let res: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(res.token, "t1");
        assert_eq!(res.user.username, "admin");
        assert_eq!(res.user.role_id, Some(1));
    }
}
