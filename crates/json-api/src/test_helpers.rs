//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};
use uuid::Uuid;

use storefront_app::{
    auth::{Identity, MockAuthService, UserUuid},
    context::AppContext,
    domain::{
        carts::{
            MockCartsService,
            records::{CartRecord, Quantity},
        },
        orders::{
            MockOrdersService,
            data::{ContactDetails, NewOrder},
            records::{OrderLine, OrderRecord, OrderUuid},
            status::PaymentMode,
        },
        products::{
            MockProductsService,
            records::{ProductRecord, ProductUuid},
        },
        reviews::{
            MockReviewsService,
            records::{ReviewRecord, ReviewUuid},
        },
        wishlist::{
            MockWishlistService,
            records::{WishlistEntry, WishlistItemRecord, WishlistItemUuid},
        },
    },
};

use crate::{extensions::*, state::State};

pub(crate) const TEST_USER: UserUuid = UserUuid::from_uuid(Uuid::nil());

pub(crate) const TEST_ADMIN: UserUuid =
    UserUuid::from_uuid(Uuid::from_u128(0x0192_0000_0000_7000_8000_0000_0000_0001));

/// Service mocks with no expectations. Any unexpected call panics.
#[derive(Default)]
pub(crate) struct Mocks {
    pub(crate) products: MockProductsService,
    pub(crate) carts: MockCartsService,
    pub(crate) orders: MockOrdersService,
    pub(crate) reviews: MockReviewsService,
    pub(crate) wishlist: MockWishlistService,
    pub(crate) auth: MockAuthService,
}

impl Mocks {
    pub(crate) fn into_state(self) -> Arc<State> {
        State::from_app_context(AppContext {
            products: Arc::new(self.products),
            carts: Arc::new(self.carts),
            orders: Arc::new(self.orders),
            reviews: Arc::new(self.reviews),
            wishlist: Arc::new(self.wishlist),
            auth: Arc::new(self.auth),
        })
    }
}

pub(crate) fn customer() -> Identity {
    Identity::customer(TEST_USER).with_name("Test Customer")
}

pub(crate) fn admin() -> Identity {
    Identity::admin(TEST_ADMIN)
}

#[salvo::handler]
async fn inject_customer(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_identity(customer());
    ctrl.call_next(req, depot, res).await;
}

#[salvo::handler]
async fn inject_admin(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_identity(admin());
    ctrl.call_next(req, depot, res).await;
}

/// A service that sees every request as coming from [`customer`].
pub(crate) fn customer_service(mocks: Mocks, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(mocks.into_state()))
            .hoop(inject_customer)
            .push(route),
    )
}

/// A service that sees every request as coming from [`admin`].
pub(crate) fn admin_service(mocks: Mocks, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(mocks.into_state()))
            .hoop(inject_admin)
            .push(route),
    )
}

/// A service with no caller identity, for public routes.
pub(crate) fn public_service(mocks: Mocks, route: Router) -> Service {
    Service::new(Router::new().hoop(inject(mocks.into_state())).push(route))
}

pub(crate) fn make_product(uuid: ProductUuid) -> ProductRecord {
    ProductRecord {
        uuid,
        name: "Kettle".to_string(),
        brand: Some("Acme".to_string()),
        category: Some("Kitchen".to_string()),
        price: 1_500,
        description: Some("1.7 litre electric kettle".to_string()),
        image: None,
        count_in_stock: 10,
        rating: 0.0,
        num_reviews: 0,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

/// A stored cart holding a [`make_product`] kettle per entry.
pub(crate) fn make_cart(user: UserUuid, entries: &[(ProductUuid, Quantity)]) -> CartRecord {
    let mut cart = CartRecord::empty(user);

    for (product, quantity) in entries {
        cart.set_entry(&make_product(*product), *quantity);
    }

    cart.created_at = Some(Timestamp::UNIX_EPOCH);
    cart.updated_at = Some(Timestamp::UNIX_EPOCH);

    cart
}

pub(crate) fn placed_order(order: NewOrder) -> OrderRecord {
    OrderRecord::place(
        OrderUuid::new(),
        order,
        "TRK123456".to_string(),
        Timestamp::UNIX_EPOCH,
    )
}

pub(crate) fn make_order(user: UserUuid) -> OrderRecord {
    placed_order(NewOrder {
        user_uuid: user,
        products: vec![OrderLine {
            product_uuid: ProductUuid::new(),
            name: "Kettle".to_string(),
            price: 1_500,
            quantity: 2,
        }],
        amount: 3_000,
        address: "1 Market Street".to_string(),
        contact: ContactDetails {
            phone: Some("555-0100".to_string()),
            email: None,
        },
        payment_mode: PaymentMode::CashOnDelivery,
    })
}

pub(crate) fn make_review(user: UserUuid, product: ProductUuid, rating: u8) -> ReviewRecord {
    ReviewRecord {
        uuid: ReviewUuid::new(),
        user_uuid: user,
        product_uuid: product,
        rating,
        comment: "Boils fast".to_string(),
        user_name: "Test Customer".to_string(),
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_wishlist_entry(user: UserUuid, product: ProductUuid) -> WishlistEntry {
    WishlistEntry {
        item: WishlistItemRecord {
            uuid: WishlistItemUuid::new(),
            user_uuid: user,
            product_uuid: product,
            created_at: Timestamp::UNIX_EPOCH,
        },
        product: make_product(product),
    }
}
