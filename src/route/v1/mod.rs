mod auth;
mod users;

macro_rules! service {
    ($($endpoint:ident),*) => {
        pub fn service() -> poem_openapi::OpenApiService<($($endpoint::Endpoint,)*), ()> {
            poem_openapi::OpenApiService::new(($($endpoint::Endpoint,)*), "Example API", "1.0.0")
                .description("Sample service documented by docs-ui")
                .url_prefix("/api/v1")
        }
    };
}

service!(users, auth);
