use clap::Args;
use storefront_app::{
    auth::{Identity, UserUuid},
    database,
    domain::products::{
        PgProductsService, ProductsService,
        data::{NewProduct, ProductDetails},
        records::ProductUuid,
    },
};
use uuid::Uuid;

#[derive(Debug, Args)]
pub(crate) struct CreateProductArgs {
    /// Product display name
    #[arg(long)]
    name: String,

    /// Price in minor currency units
    #[arg(long)]
    price: u64,

    #[arg(long)]
    brand: Option<String>,

    #[arg(long)]
    category: Option<String>,

    #[arg(long)]
    description: Option<String>,

    /// Image URL or path
    #[arg(long)]
    image: Option<String>,

    #[arg(long, default_value_t = 0)]
    count_in_stock: u64,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Optional product UUID; generated when omitted
    #[arg(long)]
    product_uuid: Option<Uuid>,
}

pub(crate) async fn run(args: CreateProductArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url, 1)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    // The CLI runs with operator privileges.
    let operator = Identity::admin(UserUuid::from_uuid(Uuid::nil()));

    let product = PgProductsService::new(pool)
        .create_product(
            &operator,
            NewProduct {
                uuid: args
                    .product_uuid
                    .map_or_else(ProductUuid::new, ProductUuid::from_uuid),
                details: ProductDetails {
                    name: args.name,
                    brand: args.brand,
                    category: args.category,
                    price: args.price,
                    description: args.description,
                    image: args.image,
                    count_in_stock: args.count_in_stock,
                },
            },
        )
        .await
        .map_err(|error| format!("failed to create product: {error}"))?;

    println!("product_uuid: {}", product.uuid);
    println!("product_name: {}", product.name);

    Ok(())
}
