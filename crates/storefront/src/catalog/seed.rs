//! Seed catalog.
//!
//! Every session starts from [`products`] unless the configuration points at
//! a TOML file with its own `[[products]]` table.

use crate::model::Product;
use anyhow::Context;
use serde::Deserialize;
use std::path::Path;

/// The built-in catalog, in display order.
pub fn products() -> Vec<Product> {
    vec![
        Product::new(1, "T-shirt", "Vêtements", 20.0, 15, 10),
        Product::new(2, "Jean", "Vêtements", 50.0, 5, 10),
        Product::new(3, "Casquette", "Accessoires", 15.0, 20, 5),
        Product::new(4, "Chaussures", "Vêtements", 80.0, 8, 10),
        Product::new(5, "Pull en laine", "Vêtements", 60.0, 12, 8),
        Product::new(6, "Veste", "Vêtements", 90.0, 3, 5),
        Product::new(7, "Chemise", "Vêtements", 35.0, 10, 6),
        Product::new(8, "Short", "Vêtements", 25.0, 18, 10),
        Product::new(9, "Ceinture", "Accessoires", 25.0, 4, 8),
        Product::new(10, "Montre", "Accessoires", 120.0, 6, 3),
        Product::new(11, "Lunettes de soleil", "Accessoires", 45.0, 14, 7),
        Product::new(12, "Sac à dos", "Accessoires", 70.0, 9, 5),
        Product::new(13, "Smartphone", "Électronique", 699.0, 11, 5),
        Product::new(14, "Tablette", "Électronique", 499.0, 7, 4),
        Product::new(15, "Casque audio", "Électronique", 129.0, 25, 10),
        Product::new(16, "Souris sans fil", "Électronique", 30.0, 3, 6),
        Product::new(17, "Clavier mécanique", "Électronique", 85.0, 5, 5),
        Product::new(18, "Lampe de bureau", "Maison", 40.0, 8, 10),
        Product::new(19, "Chaise", "Maison", 75.0, 2, 5),
        Product::new(20, "Tapis", "Maison", 55.0, 7, 4),
        Product::new(21, "Rideaux", "Maison", 35.0, 12, 6),
        Product::new(22, "Horloge murale", "Maison", 28.0, 20, 8),
        Product::new(23, "Parfum", "Beauté", 65.0, 9, 5),
        Product::new(24, "Crème hydratante", "Beauté", 25.0, 13, 7),
        Product::new(25, "Shampooing", "Beauté", 15.0, 22, 10),
        Product::new(26, "Brosse à cheveux", "Beauté", 10.0, 30, 10),
        Product::new(27, "Ballon de football", "Sports", 35.0, 6, 4),
        Product::new(28, "Raquette de tennis", "Sports", 120.0, 4, 2),
        Product::new(29, "Gants de sport", "Sports", 18.0, 15, 8),
        Product::new(30, "Chaussures de course", "Sports", 95.0, 10, 5),
    ]
}

#[derive(Debug, Deserialize)]
struct SeedFile {
    #[serde(default)]
    products: Vec<Product>,
}

/// Parses a `[[products]]` table.
///
/// ```toml
/// [[products]]
/// id = 1
/// name = "T-shirt"
/// category = "Vêtements"
/// price = 20.0
/// quantity = 15
/// restock_threshold = 10
/// ```
pub fn from_toml_str(raw: &str) -> Result<Vec<Product>, toml::de::Error> {
    toml::from_str::<SeedFile>(raw).map(|f| f.products)
}

/// Reads a seed file from disk.
pub fn load_file(path: &Path) -> anyhow::Result<Vec<Product>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading seed catalog {}", path.display()))?;
    from_toml_str(&raw).with_context(|| format!("parsing seed catalog {}", path.display()))
}
