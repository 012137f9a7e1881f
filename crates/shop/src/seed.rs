//! Sample catalog seeding.
//!
//! A fresh database would make for an empty storefront; insert a small
//! sample catalog so the site is browsable out of the box. Seeding only
//! happens when the products table is empty.

use sqlx::SqlitePool;

use juniper_threads_core::Price;

use crate::db::{ProductRepository, RepositoryError};
use crate::models::NewProduct;

/// Name, price in cents, image URL, description.
const SAMPLE_PRODUCTS: [(&str, i64, &str, &str); 4] = [
    (
        "Summer T-Shirt",
        19_99,
        "https://via.placeholder.com/400/FF6B9D/FFFFFF?text=T-Shirt",
        "Comfortable and stylish summer wear perfect for casual outings.",
    ),
    (
        "Classic Denim Jeans",
        49_99,
        "https://via.placeholder.com/400/FFA502/FFFFFF?text=Jeans",
        "Premium quality denim with a perfect fit for any occasion.",
    ),
    (
        "Designer Sneakers",
        89_99,
        "https://via.placeholder.com/400/FF6B9D/FFFFFF?text=Sneakers",
        "Trendy and comfortable sneakers for everyday style.",
    ),
    (
        "Casual Jacket",
        59_99,
        "https://via.placeholder.com/400/FFA502/FFFFFF?text=Jacket",
        "Lightweight jacket perfect for layering in any season.",
    ),
];

/// Insert the sample catalog if the products table is empty.
///
/// Returns the number of products inserted (zero when the table already
/// holds data).
///
/// # Errors
///
/// Returns `RepositoryError` if the count or an insert fails.
pub async fn seed_if_empty(pool: &SqlitePool) -> Result<usize, RepositoryError> {
    let repo = ProductRepository::new(pool);

    let existing = repo.count().await?;
    if existing > 0 {
        tracing::debug!(count = existing, "products already present, skipping sample data");
        return Ok(0);
    }

    for (name, cents, image_url, description) in SAMPLE_PRODUCTS {
        repo.create(&NewProduct {
            name: name.to_string(),
            price: Price::from_cents(cents),
            image_url: Some(image_url.to_string()),
            description: Some(description.to_string()),
        })
        .await?;
    }

    tracing::info!(count = SAMPLE_PRODUCTS.len(), "inserted sample products");
    Ok(SAMPLE_PRODUCTS.len())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use sqlx::sqlite::SqlitePoolOptions;

    use super::*;

    async fn test_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        crate::db::MIGRATOR.run(&pool).await.unwrap();
        pool
    }

    #[tokio::test]
    async fn test_seeds_once() {
        let pool = test_pool().await;

        assert_eq!(seed_if_empty(&pool).await.unwrap(), 4);
        assert_eq!(seed_if_empty(&pool).await.unwrap(), 0);

        let repo = ProductRepository::new(&pool);
        assert_eq!(repo.count().await.unwrap(), 4);

        let first = repo.list().await.unwrap().remove(0);
        assert_eq!(first.name, "Summer T-Shirt");
        assert_eq!(first.price.as_cents(), 19_99);
    }

    #[tokio::test]
    async fn test_does_not_overwrite_existing_catalog() {
        let pool = test_pool().await;
        let repo = ProductRepository::new(&pool);

        repo.create(&NewProduct {
            name: "Hand-Knit Scarf".to_string(),
            price: Price::from_cents(12_00),
            image_url: None,
            description: None,
        })
        .await
        .unwrap();

        assert_eq!(seed_if_empty(&pool).await.unwrap(), 0);
        assert_eq!(repo.count().await.unwrap(), 1);
    }
}
