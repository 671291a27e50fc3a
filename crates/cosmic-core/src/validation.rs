//! # Validation Module
//!
//! Checks applied to every catalog entry before it reaches the storefront.
//!
//! The built-in sample catalog always passes; these rules matter when the
//! catalog comes from a JSON file supplied at startup.
//!
//! ## Usage
//! ```rust
//! use cosmic_core::validation::{validate_price, validate_product_name};
//! use cosmic_core::Money;
//!
//! validate_product_name("Lunar Dream").unwrap();
//! assert!(validate_price(Money::from_units(-1)).is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::Product;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Maximum product name length, in characters.
pub const MAX_NAME_LEN: usize = 200;

/// Maximum category label length, in characters.
pub const MAX_CATEGORY_LEN: usize = 50;

// =============================================================================
// Field Validators
// =============================================================================

fn require(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(())
}

fn limit(field: &str, value: &str, max: usize) -> ValidationResult<()> {
    // Names are frequently non-ASCII, count characters rather than bytes.
    if value.trim().chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }
    Ok(())
}

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty
/// - At most 200 characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    require("name", name)?;
    limit("name", name, MAX_NAME_LEN)
}

/// Validates a price. Zero is allowed (free items).
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::MustNotBeNegative {
            field: "price".to_string(),
        });
    }
    Ok(())
}

/// Validates the image reference. Only presence is checked.
pub fn validate_image(image: &str) -> ValidationResult<()> {
    require("image", image)
}

/// Validates a category label.
pub fn validate_category(category: &str) -> ValidationResult<()> {
    require("category", category)?;
    limit("category", category, MAX_CATEGORY_LEN)
}

// =============================================================================
// Record Validator
// =============================================================================

/// Validates every field of a catalog entry, stopping at the first failure.
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    validate_product_name(&product.name)?;
    validate_price(product.price)?;
    validate_image(&product.image)?;
    validate_category(&product.category)
}

// =============================================================================
// Unit Tests
// =============================================================================
