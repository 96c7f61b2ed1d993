use poem_openapi::{
    ApiResponse, Object, OpenApi,
    payload::{Json, PlainText},
};

const MOCK_TOKEN: &str = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.eyJ1c2VyX2lkIjoxfQ.mock";

pub struct Endpoint;

#[OpenApi]
impl Endpoint {
    /// /api/v1/auth/login
    ///
    /// Exchanges credentials for a bearer token
    #[oai(path = "/auth/login", method = "post")]
    async fn login(&self, request: Json<LoginRequest>) -> LoginResponse {
        if request.username.is_empty() || request.password.is_empty() {
            return LoginResponse::BadRequest(PlainText(
                "username and password are required".to_string(),
            ));
        }

        LoginResponse::Success(Json(Token {
            token: MOCK_TOKEN.to_string(),
            expires_in: 7200,
        }))
    }

    /// /api/v1/auth/logout
    ///
    /// Invalidates the caller's token
    #[oai(path = "/auth/logout", method = "post")]
    async fn logout(&self) -> PlainText<String> {
        PlainText("logged out".to_string())
    }
}

#[derive(Object)]
pub struct LoginRequest {
    username: String,
    password: String,
}

#[derive(Object)]
pub struct Token {
    token: String,
    /// Seconds until the token expires
    expires_in: u32,
}

#[derive(ApiResponse)]
enum LoginResponse {
    /// Returns when the credentials were accepted
    #[oai(status = 200)]
    Success(Json<Token>),
    /// Returns when the username or password is missing
    #[oai(status = 400)]
    BadRequest(PlainText<String>),
}
