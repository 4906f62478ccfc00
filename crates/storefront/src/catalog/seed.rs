//! Built-in demo assortment.

use rust_decimal::Decimal;
use vitrine_core::{Product, ProductId};

struct Seed {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    cents: i64,
    original_cents: Option<i64>,
    category: &'static str,
    sizes: &'static [&'static str],
    colors: &'static [&'static str],
    brand: &'static str,
    rating: f32,
    review_count: u32,
    in_stock: bool,
    featured: bool,
    tags: &'static [&'static str],
}

const APPAREL_SIZES: &[&str] = &["XS", "S", "M", "L", "XL"];
const SHOE_SIZES: &[&str] = &["7", "8", "9", "10", "11", "12"];

const SEEDS: &[Seed] = &[
    Seed {
        id: "1",
        name: "Essential Cotton Tee",
        description: "Midweight organic cotton tee with a relaxed fit.",
        cents: 2999,
        original_cents: None,
        category: "T-Shirts",
        sizes: APPAREL_SIZES,
        colors: &["White", "Black", "Navy"],
        brand: "Northline",
        rating: 4.6,
        review_count: 214,
        in_stock: true,
        featured: true,
        tags: &["cotton", "basics", "bestseller"],
    },
    Seed {
        id: "2",
        name: "Heavyweight Pocket Tee",
        description: "Boxy heavyweight jersey with a chest pocket.",
        cents: 3499,
        original_cents: Some(4499),
        category: "T-Shirts",
        sizes: APPAREL_SIZES,
        colors: &["Olive", "Sand", "Black"],
        brand: "Northline",
        rating: 4.4,
        review_count: 88,
        in_stock: true,
        featured: false,
        tags: &["cotton", "sale"],
    },
    Seed {
        id: "3",
        name: "Selvedge Slim Jeans",
        description: "Raw selvedge denim, slim taper, button fly.",
        cents: 11900,
        original_cents: None,
        category: "Denim",
        sizes: &["28", "30", "32", "34", "36"],
        colors: &["Indigo"],
        brand: "Foundry Blue",
        rating: 4.8,
        review_count: 132,
        in_stock: true,
        featured: true,
        tags: &["denim", "selvedge"],
    },
    Seed {
        id: "4",
        name: "Quilted Field Jacket",
        description: "Lightweight quilted jacket with snap front and corduroy collar.",
        cents: 18900,
        original_cents: Some(24900),
        category: "Outerwear",
        sizes: &["S", "M", "L", "XL"],
        colors: &["Olive", "Navy"],
        brand: "Harbor & Pine",
        rating: 4.7,
        review_count: 57,
        in_stock: true,
        featured: true,
        tags: &["jacket", "layering", "sale"],
    },
    Seed {
        id: "5",
        name: "Merino Crew Sweater",
        description: "Fine-gauge merino wool crewneck.",
        cents: 9800,
        original_cents: None,
        category: "Knitwear",
        sizes: APPAREL_SIZES,
        colors: &["Oatmeal", "Charcoal", "Forest"],
        brand: "Harbor & Pine",
        rating: 4.5,
        review_count: 76,
        in_stock: false,
        featured: false,
        tags: &["wool", "merino"],
    },
    Seed {
        id: "6",
        name: "Canvas Court Sneaker",
        description: "Vulcanized canvas low-top with a gum sole.",
        cents: 6500,
        original_cents: None,
        category: "Footwear",
        sizes: SHOE_SIZES,
        colors: &["White", "Black"],
        brand: "Stride Co.",
        rating: 4.3,
        review_count: 301,
        in_stock: true,
        featured: false,
        tags: &["sneakers", "canvas"],
    },
    Seed {
        id: "7",
        name: "Leather Card Wallet",
        description: "Vegetable-tanned leather wallet with four card slots.",
        cents: 4500,
        original_cents: None,
        category: "Accessories",
        sizes: &[],
        colors: &["Tan", "Black"],
        brand: "Foundry Blue",
        rating: 4.9,
        review_count: 45,
        in_stock: true,
        featured: false,
        tags: &["leather", "gift"],
    },
    Seed {
        id: "8",
        name: "Wool Beanie",
        description: "Ribbed lambswool beanie, one size.",
        cents: 2400,
        original_cents: Some(3000),
        category: "Accessories",
        sizes: &[],
        colors: &[],
        brand: "Northline",
        rating: 4.2,
        review_count: 19,
        in_stock: true,
        featured: false,
        tags: &["wool", "winter", "gift", "sale"],
    },
];

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|&value| value.to_owned()).collect()
}

impl Seed {
    fn to_product(&self) -> Product {
        Product {
            id: ProductId::from(self.id),
            name: self.name.to_owned(),
            description: self.description.to_owned(),
            price: Decimal::new(self.cents, 2),
            original_price: self.original_cents.map(|cents| Decimal::new(cents, 2)),
            images: vec![
                format!("/images/products/{}-1.jpg", self.id),
                format!("/images/products/{}-2.jpg", self.id),
            ],
            category: self.category.to_owned(),
            sizes: strings(self.sizes),
            colors: strings(self.colors),
            brand: self.brand.to_owned(),
            rating: self.rating,
            review_count: self.review_count,
            in_stock: self.in_stock,
            featured: self.featured,
            tags: strings(self.tags),
        }
    }
}

/// The demo products in display order.
pub(super) fn products() -> Vec<Product> {
    SEEDS.iter().map(Seed::to_product).collect()
}
