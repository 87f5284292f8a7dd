//! Get Cart Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use storefront_app::auth::UserUuid;

use crate::{
    carts::{errors::into_status_error, models::CartResponse},
    extensions::*,
    state::State,
};

/// Get Cart Handler
///
/// A user without a stored cart gets an empty one rather than a 404.
#[endpoint(
    tags("cart"),
    summary = "Get Cart",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "The cart, possibly empty"),
        (status_code = StatusCode::BAD_REQUEST, description = "Malformed user id"),
        (status_code = StatusCode::FORBIDDEN, description = "Not the cart owner"),
    ),
)]
pub(crate) async fn handler(
    user: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let caller = depot.identity_or_401()?;
    let user: UserUuid = user.into_inner().to_id("userId")?;

    let cart = state
        .app
        .carts
        .get_cart(&caller, user)
        .await
        .map_err(into_status_error)?;

    Ok(Json(cart.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use storefront_app::domain::carts::{
        CartsServiceError, MockCartsService, records::CartRecord,
    };

    use crate::test_helpers::{Mocks, TEST_USER, admin_service, customer_service};

    use super::*;

    fn route() -> Router {
        Router::with_path("api/cart/{user}").get(handler)
    }

    #[tokio::test]
    async fn test_get_fresh_cart_is_empty() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_get_cart()
            .once()
            .withf(|caller, user| caller.user == TEST_USER && *user == TEST_USER)
            .return_once(|_, user| Ok(CartRecord::empty(user)));

        let service = customer_service(
            Mocks {
                carts,
                ..Mocks::default()
            },
            route(),
        );

        let mut res = TestClient::get(format!("http://example.com/api/cart/{TEST_USER}"))
            .send(&service)
            .await;

        let body: CartResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.user_id, TEST_USER.into_uuid());
        assert!(body.products.is_empty());
        assert_eq!(body.created_at, None);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_other_users_cart_returns_403() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_get_cart()
            .once()
            .return_once(|_, _| Err(CartsServiceError::Forbidden));

        let service = customer_service(
            Mocks {
                carts,
                ..Mocks::default()
            },
            route(),
        );

        let res = TestClient::get(format!("http://example.com/api/cart/{}", UserUuid::new()))
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::FORBIDDEN));

        Ok(())
    }

    #[tokio::test]
    async fn test_admin_reads_any_cart() -> TestResult {
        let other = UserUuid::new();

        let mut carts = MockCartsService::new();

        carts
            .expect_get_cart()
            .once()
            .withf(move |caller, user| caller.is_admin && *user == other)
            .return_once(|_, user| Ok(CartRecord::empty(user)));

        let service = admin_service(
            Mocks {
                carts,
                ..Mocks::default()
            },
            route(),
        );

        let res = TestClient::get(format!("http://example.com/api/cart/{other}"))
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_malformed_user_id_returns_400() -> TestResult {
        let mut carts = MockCartsService::new();

        carts.expect_get_cart().never();

        let service = customer_service(
            Mocks {
                carts,
                ..Mocks::default()
            },
            route(),
        );

        let res = TestClient::get("http://example.com/api/cart/12345")
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
