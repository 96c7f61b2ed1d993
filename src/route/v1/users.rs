use poem_openapi::{
    ApiResponse, Object, OpenApi,
    param::{Path, Query},
    payload::{Json, PlainText},
};

pub struct Endpoint;

#[OpenApi]
impl Endpoint {
    /// /api/v1/users
    ///
    /// Lists users, one page at a time
    #[oai(path = "/users", method = "get")]
    async fn users(
        &self,
        /// Page number, starting at 1
        page: Query<Option<u32>>,
        /// Page size
        size: Query<Option<u32>>,
    ) -> Json<Vec<User>> {
        let page = page.unwrap_or(1).max(1) as usize;
        let size = size.unwrap_or(10).max(1) as usize;

        Json(
            sample_users()
                .into_iter()
                .skip((page - 1).saturating_mul(size))
                .take(size)
                .collect(),
        )
    }

    /// /api/v1/users/{id}
    ///
    /// Retrieves a single user
    #[oai(path = "/users/:id", method = "get")]
    async fn user(
        &self,
        /// The user's identifier
        id: Path<u32>,
    ) -> UserResponse {
        match sample_users().into_iter().find(|user| user.id == *id) {
            Some(user) => UserResponse::Success(Json(user)),
            None => UserResponse::NotFound(PlainText(format!("user {} not found", *id))),
        }
    }

    /// /api/v1/users
    ///
    /// Creates a user
    #[oai(path = "/users", method = "post")]
    async fn create_user(&self, user: Json<NewUser>) -> Json<User> {
        let NewUser { name, email, age } = user.0;

        Json(User {
            id: 3,
            name,
            email,
            age,
        })
    }

    /// /api/v1/users/{id}
    ///
    /// Deletes a user
    #[oai(path = "/users/:id", method = "delete")]
    async fn delete_user(
        &self,
        /// The user's identifier
        id: Path<u32>,
    ) -> UserResponse {
        match sample_users().into_iter().find(|user| user.id == *id) {
            Some(user) => UserResponse::Success(Json(user)),
            None => UserResponse::NotFound(PlainText(format!("user {} not found", *id))),
        }
    }
}

fn sample_users() -> Vec<User> {
    vec![
        User {
            id: 1,
            name: "Zhang San".to_string(),
            email: "zhangsan@example.com".to_string(),
            age: 25,
        },
        User {
            id: 2,
            name: "Li Si".to_string(),
            email: "lisi@example.com".to_string(),
            age: 30,
        },
    ]
}

#[derive(Object)]
pub struct User {
    id: u32,
    name: String,
    email: String,
    age: u32,
}

#[derive(Object)]
pub struct NewUser {
    name: String,
    email: String,
    age: u32,
}

#[derive(ApiResponse)]
enum UserResponse {
    /// Returns when the user exists
    #[oai(status = 200)]
    Success(Json<User>),
    /// Returns when no user has the given id
    #[oai(status = 404)]
    NotFound(PlainText<String>),
}
