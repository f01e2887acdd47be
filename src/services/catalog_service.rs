use sqlx::SqlitePool;

use crate::{
    error::{AppError, Result},
    models::Product,
    queries::product_queries,
};

struct SeedProduct {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    price: &'static str,
    image: &'static str,
    category: &'static str,
}

const INITIAL_CATALOG: [SeedProduct; 10] = [
    SeedProduct {
        id: "prod-1",
        name: "Quantum Processor XR-9",
        description: "Next-generation neural processing unit with quantum computing capabilities",
        price: "1299.99",
        image: "https://images.unsplash.com/photo-1591799264318-7e6ef8ddb7ea?w=800&q=80",
        category: "Computing",
    },
    SeedProduct {
        id: "prod-2",
        name: "HoloLens Pro Vision",
        description: "Augmented reality glasses with holographic display technology",
        price: "899.99",
        image: "https://images.unsplash.com/photo-1617802690992-15d93263d3a9?w=800&q=80",
        category: "Wearables",
    },
    SeedProduct {
        id: "prod-3",
        name: "NanoBot Health Monitor",
        description: "Advanced biometric tracking device with AI health analysis",
        price: "499.99",
        image: "https://images.unsplash.com/photo-1576091160399-112ba8d25d1d?w=800&q=80",
        category: "Health",
    },
    SeedProduct {
        id: "prod-4",
        name: "Plasma Energy Core",
        description: "Wireless charging station with plasma energy conversion",
        price: "349.99",
        image: "https://images.unsplash.com/photo-1609091839311-d5365f9ff1c5?w=800&q=80",
        category: "Accessories",
    },
    SeedProduct {
        id: "prod-5",
        name: "Neural Interface Band",
        description: "Mind-controlled device interface with EEG sensors",
        price: "799.99",
        image: "https://images.unsplash.com/photo-1605170439002-90845e8c0137?w=800&q=80",
        category: "Wearables",
    },
    SeedProduct {
        id: "prod-6",
        name: "Gravity Levitation Speaker",
        description: "Floating wireless speaker with magnetic levitation technology",
        price: "599.99",
        image: "https://images.unsplash.com/photo-1608043152269-423dbba4e7e1?w=800&q=80",
        category: "Audio",
    },
    SeedProduct {
        id: "prod-7",
        name: "CyberKey Security Module",
        description: "Quantum encryption key with biometric authentication",
        price: "249.99",
        image: "https://images.unsplash.com/photo-1558618666-fcd25c85cd64?w=800&q=80",
        category: "Security",
    },
    SeedProduct {
        id: "prod-8",
        name: "Photon Keyboard Elite",
        description: "Mechanical keyboard with holographic key projections",
        price: "399.99",
        image: "https://images.unsplash.com/photo-1587829741301-dc798b83add3?w=800&q=80",
        category: "Computing",
    },
    SeedProduct {
        id: "prod-9",
        name: "AI Companion Drone",
        description: "Personal assistant drone with advanced AI capabilities",
        price: "1499.99",
        image: "https://images.unsplash.com/photo-1473968512647-3e447244af8f?w=800&q=80",
        category: "Robotics",
    },
    SeedProduct {
        id: "prod-10",
        name: "Smart Glass Display",
        description: "Transparent OLED display with touch interface",
        price: "2199.99",
        image: "https://images.unsplash.com/photo-1593640408182-31c70c8268f5?w=800&q=80",
        category: "Display",
    },
];

pub fn initial_catalog() -> Vec<Product> {
    INITIAL_CATALOG
        .iter()
        .map(|p| Product {
            id: p.id.to_string(),
            name: p.name.to_string(),
            description: p.description.to_string(),
            price: p.price.to_string(),
            image: p.image.to_string(),
            category: p.category.to_string(),
        })
        .collect()
}

/// Inserts the initial catalog when the products table is empty.
/// Returns the number of rows inserted.
pub async fn seed_if_empty(pool: &SqlitePool) -> Result<u64> {
    let existing = product_queries::count(pool).await?;
    if existing > 0 {
        tracing::info!("{} products already exist, skipping seed", existing);
        return Ok(0);
    }

    let inserted = product_queries::insert_many(pool, &initial_catalog()).await?;
    tracing::info!("Seeded catalog with {} products", inserted);

    Ok(inserted)
}

pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Product>> {
    product_queries::find_all(pool).await
}

pub async fn get_by_id(pool: &SqlitePool, id: &str) -> Result<Product> {
    product_queries::find_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Product not found".to_string()))
}
