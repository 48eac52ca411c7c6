//! Client-side payload validation
//!
//! The server remains the authority; these checks only keep obviously
//! malformed synthetic payloads from being sent.

use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

use crate::models::{NewProduct, NewUser};

/// Longest product name the API accepts
pub const MAX_PRODUCT_NAME_LEN: usize = 145;

/// Lowest accepted product price
pub const MIN_PRICE: f64 = 10.0;

/// Highest accepted product price
pub const MAX_PRICE: f64 = 5000.0;

/// Validate email
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.is_empty() {
        return Err("Email is required".to_string());
    }

    if email.len() > 254 {
        return Err("Email must be at most 254 characters long".to_string());
    }

    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .expect("Failed to compile email regex")
    });

    if !regex.is_match(email) {
        return Err("Invalid email format".to_string());
    }

    Ok(())
}

/// Validate a user creation payload
pub fn validate_user(user: &NewUser) -> Result<(), String> {
    if user.name.trim().is_empty() {
        return Err("User name is required".to_string());
    }

    validate_email(&user.email)?;

    if user.password.len() < 8 {
        return Err("Password must be at least 8 characters long".to_string());
    }

    Ok(())
}

/// Validate a product creation payload
pub fn validate_product(product: &NewProduct) -> Result<(), String> {
    if product.name.trim().is_empty() {
        return Err("Product name is required".to_string());
    }

    if product.name.chars().count() > MAX_PRODUCT_NAME_LEN {
        return Err(format!(
            "Product name must be at most {MAX_PRODUCT_NAME_LEN} characters long"
        ));
    }

    if !(MIN_PRICE..=MAX_PRICE).contains(&product.price) {
        return Err(format!(
            "Price must be between {MIN_PRICE} and {MAX_PRICE}, got {}",
            product.price
        ));
    }

    let cents = product.price * 100.0;
    if (cents - cents.round()).abs() > 1e-6 {
        return Err(format!(
            "Price must have at most two decimals, got {}",
            product.price
        ));
    }

    if product.category_ids.is_empty() {
        return Err("At least one category is required".to_string());
    }

    let distinct: HashSet<i64> = product.category_ids.iter().copied().collect();
    if distinct.len() != product.category_ids.len() {
        return Err("Category ids must not repeat".to_string());
    }

    Ok(())
}
