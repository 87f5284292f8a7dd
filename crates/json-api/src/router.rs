//! App Router

use salvo::Router;

use crate::{auth, carts, healthcheck, observability, orders, products, reviews, wishlist};

/// Every route the server exposes, apart from the OpenAPI document.
pub(crate) fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(Router::with_path("metrics").get(observability::metrics_handler))
        .push(Router::with_path("api").push(public_routes()).push(
            Router::new()
                .hoop(auth::middleware::handler)
                .push(protected_routes()),
        ))
}

fn public_routes() -> Router {
    Router::new()
        .push(
            Router::with_path("products")
                .get(products::index::handler)
                .push(Router::with_path("{product}").get(products::get::handler)),
        )
        .push(
            Router::with_path("reviews")
                .push(Router::with_path("product/{product}").get(reviews::index::handler))
                .push(Router::with_path("count/{product}").get(reviews::count::handler))
                .push(Router::with_path("rating/{product}").get(reviews::rating::handler)),
        )
}

fn protected_routes() -> Router {
    Router::new()
        .push(
            Router::with_path("cart")
                .push(Router::with_path("add").post(carts::add::handler))
                .push(Router::with_path("remove").delete(carts::remove::handler))
                .push(Router::with_path("clear").post(carts::clear::handler))
                .push(Router::with_path("{user}").get(carts::get::handler)),
        )
        .push(
            Router::with_path("orders")
                .post(orders::place::handler)
                .push(Router::with_path("user/{user}").get(orders::list_user::handler))
                .push(
                    Router::with_path("{order}")
                        .get(orders::get::handler)
                        .push(Router::with_path("cancel").put(orders::cancel::handler))
                        .push(Router::with_path("track").get(orders::track::handler))
                        .push(Router::with_path("status").put(orders::update_status::handler)),
                ),
        )
        .push(Router::with_path("admin/orders").get(orders::list_all::handler))
        .push(
            Router::with_path("products")
                .post(products::create::handler)
                .push(
                    Router::with_path("{product}")
                        .put(products::update::handler)
                        .delete(products::delete::handler),
                ),
        )
        .push(
            Router::with_path("reviews")
                .post(reviews::create::handler)
                .push(
                    Router::with_path("{review}")
                        .put(reviews::update::handler)
                        .delete(reviews::delete::handler),
                ),
        )
        .push(
            Router::with_path("wishlist")
                .get(wishlist::index::handler)
                .post(wishlist::add::handler)
                .push(Router::with_path("check/{product}").get(wishlist::check::handler))
                .push(Router::with_path("{product}").delete(wishlist::remove::handler)),
        )
}
