//! # Domain Types
//!
//! Core domain types shared by the storefront stores, the REST client and
//! the browser UI bindings.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Identity     │   │    Product      │   │ProductSubmission│       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id             │   │  name           │       │
//! │  │  email          │   │  name, price    │   │  description    │       │
//! │  │  role ──────┐   │   │  status ────┐   │   │  price (> 0)    │       │
//! │  └─────────────│───┘   └─────────────│───┘   └─────────────────┘       │
//! │                ▼                     ▼                                  │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │      Role       │   │ ProductStatus   │                             │
//! │  │  User           │   │  Approved       │                             │
//! │  │  Vendor         │   │  Pending        │                             │
//! │  │  Admin          │   │  Rejected       │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every type here serializes with camelCase keys, matching the JSON the
//! backend returns and the blobs the browser keeps in storage.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;

// =============================================================================
// Role
// =============================================================================

/// The three account kinds. Any other value is a parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Shopper. The only role that can fill a cart from a product card.
    User,
    /// Submits products for approval.
    Vendor,
    /// Approves or rejects pending products.
    Admin,
}

impl Role {
    /// All roles, in privilege order.
    pub const ALL: [Role; 3] = [Role::User, Role::Vendor, Role::Admin];

    /// Wire name of the role.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Vendor => "vendor",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Role::User),
            "vendor" => Ok(Role::Vendor),
            "admin" => Ok(Role::Admin),
            other => Err(ValidationError::InvalidFormat {
                field: "role".to_string(),
                reason: format!("unknown role '{other}'"),
            }),
        }
    }
}

// =============================================================================
// Identity
// =============================================================================

/// The logged-in account, as stored under the `user` session key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Identity {
    pub id: String,
    pub email: String,
    pub role: Role,
}

impl Identity {
    pub fn new(id: impl Into<String>, email: impl Into<String>, role: Role) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            role,
        }
    }

    #[inline]
    pub fn is_vendor(&self) -> bool {
        self.role == Role::Vendor
    }

    #[inline]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

// =============================================================================
// Product Status
// =============================================================================

/// Moderation state of a product.
///
/// ```text
///   submit ──► Pending ──approve──► Approved (public catalog)
///                 │
///                 └────reject────► Rejected (removed)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    Approved,
    #[default]
    Pending,
    Rejected,
}

impl fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ProductStatus::Approved => "approved",
            ProductStatus::Pending => "pending",
            ProductStatus::Rejected => "rejected",
        };
        f.write_str(s)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A catalog product as returned by the backend.
///
/// Only `id`, `name`, `price` and `status` are guaranteed by the REST
/// contract; everything else is optional or defaulted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Backend identifier. Document stores send it as `_id`.
    #[serde(alias = "_id")]
    pub id: String,

    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Unit price. Decimal major units on the wire.
    #[ts(type = "number")]
    pub price: Money,

    #[serde(default)]
    pub status: ProductStatus,

    /// Absolute URL or a path relative to the API host.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor_id: Option<String>,

    /// Hosted image id, preferred over `image` when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloudinary_public_id: Option<String>,
}

impl Product {
    #[inline]
    pub fn is_approved(&self) -> bool {
        self.status == ProductStatus::Approved
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.status == ProductStatus::Pending
    }

    /// Whether `identity` is the vendor that owns this product.
    pub fn is_owned_by(&self, identity: &Identity) -> bool {
        identity.is_vendor() && self.vendor_id.as_deref() == Some(identity.id.as_str())
    }
}

// =============================================================================
// Product Submission
// =============================================================================

/// The body a vendor posts to put a product up for approval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductSubmission {
    pub name: String,
    pub description: String,
    #[ts(type = "number")]
    pub price: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Vendor).unwrap(), "\"vendor\"");
        let role: Role = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(role, Role::Admin);
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        assert!(serde_json::from_str::<Role>("\"superuser\"").is_err());
        assert!(serde_json::from_str::<Role>("\"Admin\"").is_err());
        assert!("guest".parse::<Role>().is_err());
        assert_eq!("user".parse::<Role>().unwrap(), Role::User);
    }

    #[test]
    fn test_identity_json_layout() {
        let identity = Identity::new("u1", "a@b.c", Role::User);
        let json = serde_json::to_string(&identity).unwrap();
        assert_eq!(json, r#"{"id":"u1","email":"a@b.c","role":"user"}"#);
    }

    #[test]
    fn test_product_minimal_contract() {
        let json = r#"{"_id":"42","name":"Lamp","price":24.5,"status":"approved"}"#;
        let product: Product = serde_json::from_str(json).unwrap();

        assert_eq!(product.id, "42");
        assert_eq!(product.description, "");
        assert_eq!(product.price, Money::from_cents(2450));
        assert!(product.is_approved());
        assert!(product.image.is_none());
    }

    #[test]
    fn test_product_ownership() {
        let product: Product = serde_json::from_str(
            r#"{"id":"1","name":"Shoe","price":10,"status":"pending","vendorId":"v1"}"#,
        )
        .unwrap();

        assert!(product.is_owned_by(&Identity::new("v1", "v@x.io", Role::Vendor)));
        assert!(!product.is_owned_by(&Identity::new("v2", "w@x.io", Role::Vendor)));
        // Same id but not a vendor account.
        assert!(!product.is_owned_by(&Identity::new("v1", "v@x.io", Role::Admin)));
    }

    #[test]
    fn test_submission_skips_empty_optionals() {
        let submission = ProductSubmission {
            name: "Mug".into(),
            description: "Ceramic".into(),
            price: Money::from_cents(899),
            image: None,
            category: None,
        };
        let json = serde_json::to_string(&submission).unwrap();
        assert_eq!(json, r#"{"name":"Mug","description":"Ceramic","price":8.99}"#);
    }
}
