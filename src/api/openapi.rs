//! OpenAPI document served under `/swagger-ui`.

use utoipa::OpenApi;

use crate::api::handlers::user_handler;
use crate::domain::UserResponse;

/// Describes the five user endpoints and their request/response
/// schemas.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User API",
        version = "0.1.0",
        description = "A minimal user-management REST API with Axum and SeaORM",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        user_handler::list_users,
        user_handler::get_user,
        user_handler::create_user,
        user_handler::update_user,
        user_handler::delete_user,
    ),
    components(
        schemas(
            UserResponse,
            user_handler::CreateUserRequest,
            user_handler::UpdateUserRequest,
        )
    ),
    tags(
        (name = "Users", description = "User management operations")
    )
)]
pub struct ApiDoc;
