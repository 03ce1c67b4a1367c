use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema, openapi::OpenApi as OpenApiSpec};

use crate::routes::doc::{ApiDoc, DOCS_PATH};

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    pub method: String,
    pub path: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Sitemap {
    pub routes: Vec<RouteEntry>,
    pub docs: String,
}

/// Every documented method/path pair, ordered by path.
pub fn collect_routes(openapi: &OpenApiSpec) -> Vec<RouteEntry> {
    let mut routes = Vec::new();
    for (path, item) in &openapi.paths.paths {
        let operations = [
            ("GET", item.get.is_some()),
            ("POST", item.post.is_some()),
            ("PUT", item.put.is_some()),
            ("PATCH", item.patch.is_some()),
            ("DELETE", item.delete.is_some()),
        ];
        for (method, present) in operations {
            if present {
                routes.push(RouteEntry {
                    method: method.to_string(),
                    path: path.clone(),
                });
            }
        }
    }
    routes
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "All registered routes", body = Sitemap),
    ),
    tag = "Sitemap"
)]
pub async fn sitemap() -> Json<Sitemap> {
    Json(Sitemap {
        routes: collect_routes(&ApiDoc::openapi()),
        docs: DOCS_PATH.to_string(),
    })
}
