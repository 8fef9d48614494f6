//! Record schemas and validation.
//!
//! Each entity is a plain struct. Entities that arrive over the wire get a
//! companion payload struct whose required fields are `Option`, so a missing
//! key reaches the validator instead of dying inside the body extractor; the
//! payload's `validate()` then reports every violated field at once and
//! returns the normalized record.

use serde::{Deserialize, Serialize};

/// A single failed field constraint, as surfaced in 422 responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// One line on the menu. The menu itself is compile-time data in [`crate::seed`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub photo_url: Option<String>,
    pub category: String,
}

/// A bulk (daig) order as persisted to the `daigorder` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DaigOrder {
    pub name: String,
    pub phone: String,
    pub quantity: String,
    pub address: String,
    pub notes: Option<String>,
    pub preferred_time: Option<String>,
    pub source: Option<String>,
}

/// Raw daig-order request body.
#[derive(Debug, Deserialize)]
pub struct DaigOrderPayload {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub quantity: Option<String>,
    pub address: Option<String>,
    pub notes: Option<String>,
    pub preferred_time: Option<String>,
    /// Lead source, e.g. website/whatsapp/call. An absent key defaults to
    /// "website"; an explicit null stays null.
    #[serde(default = "default_source")]
    pub source: Option<String>,
}

fn default_source() -> Option<String> {
    Some("website".to_string())
}

impl DaigOrderPayload {
    /// Validate the payload, reporting every violated field.
    pub fn validate(self) -> Result<DaigOrder, Vec<FieldError>> {
        let mut errors = Vec::new();

        let name = required(&mut errors, "name", self.name);
        let phone = required(&mut errors, "phone", self.phone);
        if let Some(phone) = &phone {
            let len = phone.chars().count();
            if !(7..=20).contains(&len) {
                errors.push(FieldError::new("phone", "must be 7 to 20 characters"));
            }
        }
        let quantity = required(&mut errors, "quantity", self.quantity);
        let address = required(&mut errors, "address", self.address);

        match (name, phone, quantity, address) {
            (Some(name), Some(phone), Some(quantity), Some(address)) if errors.is_empty() => {
                Ok(DaigOrder {
                    name,
                    phone,
                    quantity,
                    address,
                    notes: self.notes,
                    preferred_time: self.preferred_time,
                    source: self.source,
                })
            }
            _ => Err(errors),
        }
    }
}

/// A contact inquiry as persisted to the `inquiry` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inquiry {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: String,
}

/// Raw inquiry request body.
#[derive(Debug, Deserialize)]
pub struct InquiryPayload {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
}

impl InquiryPayload {
    /// Validate the payload, reporting every violated field.
    pub fn validate(self) -> Result<Inquiry, Vec<FieldError>> {
        let mut errors = Vec::new();

        let name = required(&mut errors, "name", self.name);
        let message = required(&mut errors, "message", self.message);
        if let Some(email) = &self.email {
            if !is_well_formed_email(email) {
                errors.push(FieldError::new("email", "is not a valid email address"));
            }
        }

        match (name, message) {
            (Some(name), Some(message)) if errors.is_empty() => Ok(Inquiry {
                name,
                email: self.email,
                phone: self.phone,
                message,
            }),
            _ => Err(errors),
        }
    }
}

/// A customer review, read from the `review` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub name: String,
    pub rating: i32,
    pub comment: String,
    /// Platform the review came from, e.g. Google, Foodpanda.
    pub source: Option<String>,
    pub photo_url: Option<String>,
}

/// Candidate review record.
#[derive(Debug, Deserialize)]
pub struct ReviewPayload {
    pub name: Option<String>,
    pub rating: Option<i32>,
    pub comment: Option<String>,
    pub source: Option<String>,
    pub photo_url: Option<String>,
}

impl ReviewPayload {
    /// Validate the payload, reporting every violated field.
    pub fn validate(self) -> Result<Review, Vec<FieldError>> {
        let mut errors = Vec::new();

        let name = required(&mut errors, "name", self.name);
        let comment = required(&mut errors, "comment", self.comment);
        let rating = match self.rating {
            Some(rating) if (1..=5).contains(&rating) => Some(rating),
            Some(_) => {
                errors.push(FieldError::new("rating", "must be between 1 and 5"));
                None
            }
            None => {
                errors.push(FieldError::new("rating", "field is required"));
                None
            }
        };

        match (name, rating, comment) {
            (Some(name), Some(rating), Some(comment)) if errors.is_empty() => Ok(Review {
                name,
                rating,
                comment,
                source: self.source,
                photo_url: self.photo_url,
            }),
            _ => Err(errors),
        }
    }
}

/// A restaurant branch, read from the `branch` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Branch {
    pub name: String,
    pub address: String,
    pub phone: Option<String>,
    pub hours: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    /// Delivery areas, in the order they should be displayed.
    pub areas: Option<Vec<String>>,
}

/// Candidate branch record.
#[derive(Debug, Deserialize)]
pub struct BranchPayload {
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub hours: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub areas: Option<Vec<String>>,
}

impl BranchPayload {
    /// Validate the payload, reporting every violated field.
    pub fn validate(self) -> Result<Branch, Vec<FieldError>> {
        let mut errors = Vec::new();

        let name = required(&mut errors, "name", self.name);
        let address = required(&mut errors, "address", self.address);

        match (name, address) {
            (Some(name), Some(address)) if errors.is_empty() => Ok(Branch {
                name,
                address,
                phone: self.phone,
                hours: self.hours,
                lat: self.lat,
                lng: self.lng,
                areas: self.areas,
            }),
            _ => Err(errors),
        }
    }
}

fn required(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    value: Option<String>,
) -> Option<String> {
    if value.is_none() {
        errors.push(FieldError::new(field, "field is required"));
    }
    value
}

/// Shape check only: one `@`, a non-empty local part, a dotted domain, no
/// whitespace.
fn is_well_formed_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && domain.split('.').all(|label| !label.is_empty())
        && !value.chars().any(char::is_whitespace)
}
