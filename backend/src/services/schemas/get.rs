//! # Schema Retrieval Service
//!
//! Serves the `SchemaRegistry` registered as application data in `main.rs`.

use actix_web::{web, HttpResponse, Responder};
use common::registry::SchemaRegistry;
use log::debug;

/// Handler for `GET /api/schemas`.
///
/// Returns `200 OK` with the whole registry as JSON.
pub async fn list(registry: web::Data<SchemaRegistry>) -> impl Responder {
    HttpResponse::Ok().json(registry.get_ref())
}

/// Handler for `GET /api/schemas/{schema_name}`.
///
/// # Returns
/// - `200 OK` with the `FormSchema` as JSON.
/// - `404 Not Found` when no schema is registered under that name.
pub async fn process(
    schema_name: web::Path<String>,
    registry: web::Data<SchemaRegistry>,
) -> impl Responder {
    match registry.schema(&schema_name) {
        Some(schema) => HttpResponse::Ok().json(schema),
        None => {
            debug!("schema '{}' requested but not registered", schema_name);
            HttpResponse::NotFound().body(format!("Form type '{}' not found", schema_name))
        }
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{test, web, App};
    use common::model::schema::FormSchema;
    use common::registry::SchemaRegistry;

    use crate::services::schemas::configure_routes;

    macro_rules! schema_app {
        () => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(SchemaRegistry::builtin()))
                    .service(configure_routes()),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn lists_builtin_registry() {
        let app = schema_app!();
        let req = test::TestRequest::get().uri("/api/schemas").to_request();
        let registry: SchemaRegistry = test::call_and_read_body_json(&app, req).await;
        assert_eq!(registry, SchemaRegistry::builtin());
    }

    #[actix_web::test]
    async fn single_schema_uses_wire_names() {
        let app = schema_app!();
        let req = test::TestRequest::get().uri("/api/schemas/addressInfo").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["name"], "addressInfo");
        assert_eq!(body["fields"][2]["type"], "dropdown");
        assert_eq!(body["fields"][2]["options"][1], "Texas");

        let req = test::TestRequest::get().uri("/api/schemas/paymentInfo").to_request();
        let schema: FormSchema = test::call_and_read_body_json(&app, req).await;
        assert_eq!(schema.fields.len(), 4);
    }

    #[actix_web::test]
    async fn unknown_schema_is_not_found() {
        let app = schema_app!();
        let req = test::TestRequest::get().uri("/api/schemas/shippingInfo").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);
    }
}
