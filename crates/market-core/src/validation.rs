//! # Validation Module
//!
//! Input validation for cart mutations and product submissions.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Browser form                                                 │
//! │  ├── Basic format checks (empty, length)                               │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Storefront command                                           │
//! │  ├── Type validation (deserialization)                                 │
//! │  └── THIS MODULE: Business rule validation                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: REST backend                                                 │
//! │  └── Authoritative checks, token verification                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use market_core::validation::{validate_product_id, validate_product_name};
//!
//! validate_product_id("p1").unwrap();
//! assert!(validate_product_name(&"N".repeat(201)).is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::ProductSubmission;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

const MAX_NAME_LEN: usize = 200;
const MAX_DESCRIPTION_LEN: usize = 2000;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product identifier. Any non-blank string is accepted.
pub fn validate_product_id(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::required("id"));
    }

    Ok(())
}

/// Validates a product name on a vendor submission.
///
/// ## Rules
/// - Must not be empty
/// - At most 200 characters
///
/// ## Example
/// ```rust
/// use market_core::validation::validate_product_name;
///
/// assert!(validate_product_name("Nike Air Max 270").is_ok());
/// assert!(validate_product_name("   ").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::required("name"));
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a product description. Required on submissions.
pub fn validate_description(description: &str) -> ValidationResult<()> {
    let description = description.trim();

    if description.is_empty() {
        return Err(ValidationError::required("description"));
    }

    if description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(ValidationError::TooLong {
            field: "description".to_string(),
            max: MAX_DESCRIPTION_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price. Zero and negative prices are rejected.
///
/// ## Example
/// ```rust
/// use market_core::money::Money;
/// use market_core::validation::validate_price;
///
/// assert!(validate_price(Money::from_cents(1099)).is_ok());
/// assert!(validate_price(Money::zero()).is_err());
/// ```
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if !price.is_positive() {
        return Err(ValidationError::must_be_positive("price"));
    }

    Ok(())
}

// =============================================================================
// Composite Validators
// =============================================================================

/// Validates everything a vendor submits for approval.
///
/// Name, description and price are required and the price must be positive.
/// The first failing field is reported.
pub fn validate_submission(submission: &ProductSubmission) -> ValidationResult<()> {
    validate_product_name(&submission.name)?;
    validate_description(&submission.description)?;
    validate_price(submission.price)?;

    if let Some(category) = &submission.category {
        if category.trim().is_empty() {
            return Err(ValidationError::InvalidFormat {
                field: "category".to_string(),
                reason: "must not be blank when provided".to_string(),
            });
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(name: &str, description: &str, cents: i64) -> ProductSubmission {
        ProductSubmission {
            name: name.to_string(),
            description: description.to_string(),
            price: Money::from_cents(cents),
            image: None,
            category: None,
        }
    }

    #[test]
    fn test_validate_product_id() {
        assert!(validate_product_id("p1").is_ok());
        assert!(validate_product_id("65f0c2a1e4b0").is_ok());
        assert!(validate_product_id("").is_err());
        assert!(validate_product_id("  ").is_err());
    }

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("MacBook Air M2").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name(&"A".repeat(201)).is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Money::from_cents(1)).is_ok());
        assert!(validate_price(Money::zero()).is_err());
        assert!(validate_price(Money::from_cents(-100)).is_err());
    }

    #[test]
    fn test_validate_submission() {
        assert!(validate_submission(&submission("Mug", "Ceramic mug", 899)).is_ok());

        assert_eq!(
            validate_submission(&submission("", "Ceramic mug", 899)),
            Err(ValidationError::required("name"))
        );
        assert_eq!(
            validate_submission(&submission("Mug", "", 899)),
            Err(ValidationError::required("description"))
        );
        assert!(matches!(
            validate_submission(&submission(&"N".repeat(201), "Ceramic mug", 899)),
            Err(ValidationError::TooLong { .. })
        ));
        assert_eq!(
            validate_submission(&submission("Mug", "Ceramic mug", 0)),
            Err(ValidationError::must_be_positive("price"))
        );

        let mut blank_category = submission("Mug", "Ceramic mug", 899);
        blank_category.category = Some(" ".to_string());
        assert!(validate_submission(&blank_category).is_err());
    }
}
