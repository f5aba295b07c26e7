use movedrop_channel::{
    config::AppConfig,
    conversions::slugify,
    db::{create_pool, run_migrations},
};
use rust_decimal::Decimal;
use uuid::Uuid;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let pool = create_pool(&config.database_url).await?;
    // Ensure migrations are applied.
    run_migrations(&pool).await?;

    let panjabi = ensure_category(&pool, "Panjabi", 1).await?;
    let tshirt = ensure_category(&pool, "T-Shirt", 2).await?;
    ensure_category(&pool, "Accessories", 3).await?;
    seed_products(&pool, panjabi, tshirt).await?;

    println!("Seed completed");
    Ok(())
}

async fn ensure_category(pool: &sqlx::PgPool, name: &str, sort_order: i32) -> anyhow::Result<Uuid> {
    let slug = slugify(name);
    let row: Option<(Uuid,)> = sqlx::query_as(
        r#"
        INSERT INTO categories (id, name, slug, sort_order)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (slug) DO NOTHING
        RETURNING id
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(name)
    .bind(&slug)
    .bind(sort_order)
    .fetch_optional(pool)
    .await?;

    // Already seeded: fetch id
    let id = match row {
        Some((id,)) => id,
        None => {
            let existing: (Uuid,) = sqlx::query_as("SELECT id FROM categories WHERE slug = $1")
                .bind(&slug)
                .fetch_one(pool)
                .await?;
            existing.0
        }
    };

    println!("Ensured category {name}");
    Ok(id)
}

async fn seed_products(pool: &sqlx::PgPool, panjabi: Uuid, tshirt: Uuid) -> anyhow::Result<()> {
    let products: Vec<(&str, Decimal, Option<Decimal>, i32, &[&str], &[&str], Uuid, &str)> = vec![
        (
            "Cotton Panjabi Classic",
            Decimal::new(1850, 0),
            Some(Decimal::new(1650, 0)),
            40,
            &["M", "L", "XL"],
            &["White", "Navy"],
            panjabi,
            "own",
        ),
        (
            "Printed Panjabi",
            Decimal::new(2200, 0),
            None,
            15,
            &["L", "XL"],
            &[],
            panjabi,
            "dropship",
        ),
        (
            "Basic Crew Tee",
            Decimal::new(450, 0),
            None,
            120,
            &[],
            &["Black", "Grey"],
            tshirt,
            "own",
        ),
    ];

    for (name, price, discount, stock, sizes, colors, category_id, product_type) in products {
        let sizes: Vec<String> = sizes.iter().map(|s| s.to_string()).collect();
        let colors: Vec<String> = colors.iter().map(|c| c.to_string()).collect();
        sqlx::query(
            r#"
            INSERT INTO products
                (id, name, slug, price, discount_price, stock, sizes, colors, category_id, status, product_type)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, 'active', $10)
            ON CONFLICT (slug) DO NOTHING
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(slugify(name))
        .bind(price)
        .bind(discount)
        .bind(stock)
        .bind(sizes)
        .bind(colors)
        .bind(category_id)
        .bind(product_type)
        .execute(pool)
        .await?;
    }

    println!("Seeded products");
    Ok(())
}
