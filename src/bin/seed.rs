use axum_inventory_api::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    entity::products::{ActiveModel, Column, Entity as Products},
    models::Category,
};
use chrono::{TimeZone, Utc};
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let orm = create_orm_conn(&config.database_url, config.database_max_connections).await?;
    run_migrations(&orm).await?;

    seed_products(&orm).await?;

    println!("Seed completed");
    Ok(())
}

async fn seed_products(orm: &DatabaseConnection) -> anyhow::Result<()> {
    let products = vec![
        ("Taladro percutor", 89.90, 12, Category::Herramienta, 4, "Ferreteria Central", (2024, 1, 8)),
        ("Llave inglesa 10\"", 14.50, 40, Category::Herramienta, 18, "Ferreteria Central", (2024, 1, 20)),
        ("Tubo PVC 1/2\"", 3.25, 150, Category::Plomeria, 60, "Hidro Suministros", (2024, 2, 2)),
        ("Bombillo LED 9W", 2.10, 3, Category::Bombillos, 95, "Luz Andina", (2024, 2, 14)),
        ("Audifonos inalambricos", 35.00, 7, Category::Electronica, 11, "TecnoImport", (2024, 3, 1)),
        ("Camisa de trabajo", 19.99, 25, Category::Ropa, 9, "Textiles del Norte", (2024, 3, 9)),
        ("Juego de sartenes", 42.00, 5, Category::Hogar, 2, "Casa y Cocina", (2024, 3, 21)),
    ];

    for (name, price, quantity, category, sales, provider, (y, m, d)) in products {
        let exists = Products::find()
            .filter(Column::Name.eq(name))
            .one(orm)
            .await?
            .is_some();
        if exists {
            println!("Skipping existing product {name}");
            continue;
        }

        let date_added = Utc
            .with_ymd_and_hms(y, m, d, 9, 0, 0)
            .single()
            .ok_or_else(|| anyhow::anyhow!("invalid seed date for {name}"))?;

        ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name.to_string()),
            price: Set(price),
            quantity: Set(quantity),
            category: Set(category),
            sales: Set(sales),
            provider: Set(provider.to_string()),
            image: Set(String::new()),
            date_added: Set(date_added),
        }
        .insert(orm)
        .await?;
        println!("Seeded {name}");
    }

    println!("Seeded products");
    Ok(())
}
