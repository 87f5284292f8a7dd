//! Add To Wishlist Handler

use std::sync::Arc;

use salvo::{oapi::extract::JsonBody, prelude::*};

use storefront_app::domain::products::records::ProductUuid;

use crate::{
    extensions::*,
    state::State,
    wishlist::{
        errors::into_status_error,
        models::{AddToWishlistRequest, WishlistItemResponse},
    },
};

/// Add To Wishlist Handler
#[endpoint(
    tags("wishlist"),
    summary = "Add To Wishlist",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Product added"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::CONFLICT, description = "Product already in wishlist"),
    ),
)]
#[tracing::instrument(
    name = "wishlist.add",
    skip(json, depot, res),
    fields(user_uuid = tracing::field::Empty, product_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<AddToWishlistRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<WishlistItemResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let caller = depot.identity_or_401()?;
    let product: ProductUuid = json.into_inner().product_id.to_id("productId")?;

    let span = tracing::Span::current();

    span.record("user_uuid", tracing::field::display(caller.user));
    span.record("product_uuid", tracing::field::display(product));

    let entry = state
        .app
        .wishlist
        .add_to_wishlist(&caller, product)
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(entry.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use storefront_app::domain::wishlist::{MockWishlistService, WishlistServiceError};

    use crate::test_helpers::{Mocks, TEST_USER, customer_service, make_wishlist_entry};

    use super::*;

    fn make_service(wishlist: MockWishlistService) -> Service {
        customer_service(
            Mocks {
                wishlist,
                ..Mocks::default()
            },
            Router::with_path("api/wishlist").post(handler),
        )
    }

    #[tokio::test]
    async fn test_add_returns_201() -> TestResult {
        let product = ProductUuid::new();

        let mut wishlist = MockWishlistService::new();

        wishlist
            .expect_add_to_wishlist()
            .once()
            .withf(move |caller, p| caller.user == TEST_USER && *p == product)
            .return_once(move |_, _| Ok(make_wishlist_entry(TEST_USER, product)));

        let mut res = TestClient::post("http://example.com/api/wishlist")
            .json(&json!({ "productId": product }))
            .send(&make_service(wishlist))
            .await;

        let body: WishlistItemResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(body.product_id, product.into_uuid());

        Ok(())
    }

    #[tokio::test]
    async fn test_add_twice_returns_409() -> TestResult {
        let mut wishlist = MockWishlistService::new();

        wishlist
            .expect_add_to_wishlist()
            .once()
            .return_once(|_, _| Err(WishlistServiceError::AlreadyExists));

        let res = TestClient::post("http://example.com/api/wishlist")
            .json(&json!({ "productId": ProductUuid::new() }))
            .send(&make_service(wishlist))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));

        Ok(())
    }

    #[tokio::test]
    async fn test_add_unknown_product_returns_404() -> TestResult {
        let mut wishlist = MockWishlistService::new();

        wishlist
            .expect_add_to_wishlist()
            .once()
            .return_once(|_, _| Err(WishlistServiceError::ProductNotFound));

        let res = TestClient::post("http://example.com/api/wishlist")
            .json(&json!({ "productId": ProductUuid::new() }))
            .send(&make_service(wishlist))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
