//! Synthetic users and products

use common::models::{NewProduct, NewUser};
use common::validation::{MAX_PRICE, MAX_PRODUCT_NAME_LEN, MIN_PRICE};
use rand::Rng;
use rand::seq::SliceRandom;

/// Base names the product names are built from
pub const TECH_PRODUCTS: &[&str] = &[
    "Laptop",
    "Smartphone",
    "Monitor 4K",
    "Teclado Mecánico",
    "Mouse Gamer",
    "Tablet",
    "Auriculares Bluetooth",
    "Smartwatch",
    "Cámara DSLR",
    "Tarjeta Gráfica",
    "Memoria RAM",
    "Disco SSD",
    "Router WiFi 6",
    "Impresora Láser",
    "Microscopio Digital",
    "Gaming",
];

const BUZZWORDS: &[&str] = &[
    "synergy",
    "paradigm",
    "framework",
    "matrix",
    "interface",
    "architecture",
    "initiative",
    "algorithm",
    "throughput",
    "hierarchy",
    "capability",
    "firmware",
    "middleware",
    "protocol",
    "infrastructure",
    "toolset",
    "encoding",
    "analyzer",
    "projection",
    "workforce",
];

const DESCRIPTION_WORDS: &[&str] = &[
    "rendimiento",
    "diseño",
    "batería",
    "pantalla",
    "ligero",
    "potente",
    "conectividad",
    "garantía",
    "portátil",
    "resistente",
    "memoria",
    "velocidad",
    "calidad",
    "sonido",
    "compacto",
    "eficiente",
    "moderno",
    "precisión",
    "duradero",
    "versátil",
    "ideal",
    "para",
    "con",
    "uso",
    "diario",
];

const FIRST_NAMES: &[&str] = &[
    "Ana", "Luis", "María", "Carlos", "Sofía", "Jorge", "Valeria", "Diego", "Camila", "Andrés",
];

const LAST_NAMES: &[&str] = &[
    "Pérez", "Gómez", "Torres", "Vera", "Mendoza", "Ortiz", "Salazar", "Romero", "Castro", "Ruiz",
];

const DESCRIPTION_LEN: usize = 15;
const EMAIL_DOMAIN: &str = "ups.edu.ec";
const DEFAULT_PASSWORD: &str = "password123";

/// Draws random payloads from an injected RNG
pub struct Generator<R: Rng> {
    rng: R,
}

impl<R: Rng> Generator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// A user with a random name and an email unlikely to collide
    pub fn user(&mut self) -> NewUser {
        let first = FIRST_NAMES.choose(&mut self.rng).copied().unwrap_or("User");
        let last = LAST_NAMES.choose(&mut self.rng).copied().unwrap_or("Test");
        let tag: u32 = self.rng.gen_range(0..=u32::MAX);

        NewUser {
            name: format!("{first} {last}"),
            email: format!("test{tag:08x}@{EMAIL_DOMAIN}"),
            password: DEFAULT_PASSWORD.to_string(),
        }
    }

    /// A product owned by a random user and tagged with 2+ random categories.
    ///
    /// Returns `None` when either id pool is empty.
    pub fn product(&mut self, user_ids: &[i64], category_ids: &[i64]) -> Option<NewProduct> {
        let user_id = *user_ids.choose(&mut self.rng)?;
        let category_ids = self.categories(category_ids);
        if category_ids.is_empty() {
            return None;
        }

        Some(NewProduct {
            name: self.product_name(),
            price: self.price(),
            description: self.description(),
            user_id,
            category_ids,
        })
    }

    fn product_name(&mut self) -> String {
        let base = TECH_PRODUCTS.choose(&mut self.rng).copied().unwrap_or("Gaming");
        let word = BUZZWORDS.choose(&mut self.rng).copied().unwrap_or("edition");
        let serial = self.rng.gen_range(100..=9999);

        let name = format!("{base} {} {serial}", capitalize(word));
        name.chars().take(MAX_PRODUCT_NAME_LEN).collect()
    }

    fn price(&mut self) -> f64 {
        let raw = self.rng.gen_range(MIN_PRICE..=MAX_PRICE);
        ((raw * 100.0).round() / 100.0).clamp(MIN_PRICE, MAX_PRICE)
    }

    fn description(&mut self) -> String {
        let words: Vec<&str> = (0..DESCRIPTION_LEN)
            .filter_map(|_| DESCRIPTION_WORDS.choose(&mut self.rng).copied())
            .collect();
        format!("{}.", capitalize(&words.join(" ")))
    }

    // Two distinct ids, or three when there are enough; all of them below two.
    fn categories(&mut self, pool: &[i64]) -> Vec<i64> {
        if pool.len() < 2 {
            return pool.to_vec();
        }
        let count = self.rng.gen_range(2..=pool.len().min(3));
        pool.choose_multiple(&mut self.rng, count).copied().collect()
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
