//! Create Product Handler

use std::sync::Arc;

use salvo::{oapi::extract::JsonBody, prelude::*};

use storefront_app::domain::products::{data::NewProduct, records::ProductUuid};

use crate::{
    extensions::*,
    products::{
        errors::into_status_error,
        models::{ProductRequest, ProductResponse},
    },
    state::State,
};

/// Create Product Handler
#[endpoint(
    tags("products"),
    summary = "Create Product",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Product created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::FORBIDDEN, description = "Admin access required"),
        (status_code = StatusCode::CONFLICT, description = "Product already exists"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "products.create",
    skip(json, depot, res),
    fields(
        user_uuid = tracing::field::Empty,
        product_uuid = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<ProductRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let caller = depot.identity_or_401()?;
    let uuid = ProductUuid::new();

    let span = tracing::Span::current();

    span.record("user_uuid", tracing::field::display(caller.user));
    span.record("product_uuid", tracing::field::display(uuid));

    let product = state
        .app
        .products
        .create_product(
            &caller,
            NewProduct {
                uuid,
                details: json.into_inner().into(),
            },
        )
        .await
        .map_err(into_status_error)?;

    res.created_at(format!("/api/products/{}", product.uuid))?;

    Ok(Json(product.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use storefront_app::domain::products::{MockProductsService, ProductsServiceError};

    use crate::test_helpers::{Mocks, admin_service, customer_service, make_product};

    use super::*;

    fn route() -> Router {
        Router::with_path("api/products").post(handler)
    }

    fn body() -> serde_json::Value {
        json!({
            "name": "Kettle",
            "brand": "Acme",
            "category": "Kitchen",
            "price": 1500,
            "countInStock": 10
        })
    }

    #[tokio::test]
    async fn test_create_product_success() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_create_product()
            .once()
            .withf(|caller, new| {
                caller.is_admin
                    && new.details.name == "Kettle"
                    && new.details.price == 1_500
                    && new.details.category.as_deref() == Some("Kitchen")
            })
            .return_once(|_, new| Ok(make_product(new.uuid)));

        let service = admin_service(
            Mocks {
                products,
                ..Mocks::default()
            },
            route(),
        );

        let mut res = TestClient::post("http://example.com/api/products")
            .json(&body())
            .send(&service)
            .await;

        let body: ProductResponse = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(
            location,
            Some(format!("/api/products/{}", body.id).as_str())
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_as_customer_returns_403() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_create_product()
            .once()
            .return_once(|_, _| Err(ProductsServiceError::Forbidden));

        let service = customer_service(
            Mocks {
                products,
                ..Mocks::default()
            },
            route(),
        );

        let res = TestClient::post("http://example.com/api/products")
            .json(&body())
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::FORBIDDEN));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_blank_name_returns_400() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_create_product()
            .once()
            .return_once(|_, _| Err(ProductsServiceError::InvalidArgument("name is required")));

        let service = admin_service(
            Mocks {
                products,
                ..Mocks::default()
            },
            route(),
        );

        let res = TestClient::post("http://example.com/api/products")
            .json(&json!({ "name": " ", "price": 100 }))
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
