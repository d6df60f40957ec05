//! Property input models

use super::ValidationError;

const REQUIRED: &str = "Address, listing price, and rent";

/// Validated input for creating a property
#[derive(Debug, Clone)]
pub struct NewProperty {
    pub address: String,
    pub listing_price: f64,
    pub rent: f64,
}

impl NewProperty {
    pub fn new(
        address: impl Into<String>,
        listing_price: f64,
        rent: f64,
    ) -> Result<Self, ValidationError> {
        let address = address.into();
        if address.trim().is_empty() {
            return Err(ValidationError::Required { what: REQUIRED });
        }
        if listing_price < 0.0 {
            return Err(ValidationError::Negative {
                field: "Listing price",
            });
        }
        if rent < 0.0 {
            return Err(ValidationError::Negative { field: "Rent" });
        }
        Ok(Self {
            address,
            listing_price,
            rent,
        })
    }

    /// Build from optional request fields; all three are required.
    pub fn from_parts(
        address: Option<String>,
        listing_price: Option<f64>,
        rent: Option<f64>,
    ) -> Result<Self, ValidationError> {
        match (address, listing_price, rent) {
            (Some(address), Some(listing_price), Some(rent)) => {
                Self::new(address, listing_price, rent)
            }
            _ => Err(ValidationError::Required { what: REQUIRED }),
        }
    }
}

/// Partial update: absent fields are left unchanged
#[derive(Debug, Clone, Default)]
pub struct PropertyPatch {
    pub address: Option<String>,
    pub listing_price: Option<f64>,
    pub rent: Option<f64>,
}

impl PropertyPatch {
    pub fn is_empty(&self) -> bool {
        self.address.is_none() && self.listing_price.is_none() && self.rent.is_none()
    }

    /// Reject negative numeric fields and the empty patch before any SQL runs.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if matches!(self.listing_price, Some(p) if p < 0.0) {
            return Err(ValidationError::Negative {
                field: "Listing price",
            });
        }
        if matches!(self.rent, Some(r) if r < 0.0) {
            return Err(ValidationError::Negative { field: "Rent" });
        }
        if self.is_empty() {
            return Err(ValidationError::NoFields);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_missing_fields() {
        let err = NewProperty::from_parts(None, Some(100.0), Some(50.0)).unwrap_err();
        assert!(matches!(err, ValidationError::Required { .. }));
    }

    #[test]
    fn rejects_blank_address() {
        let err = NewProperty::from_parts(Some("  ".into()), Some(100.0), Some(50.0)).unwrap_err();
        assert!(matches!(err, ValidationError::Required { .. }));
    }

    #[test]
    fn rejects_negative_price() {
        let err = NewProperty::new("1 A St", -1.0, 900.0).unwrap_err();
        assert_eq!(
            err,
            ValidationError::Negative {
                field: "Listing price"
            }
        );
    }

    #[test]
    fn empty_patch_rejected() {
        assert_eq!(
            PropertyPatch::default().validate().unwrap_err(),
            ValidationError::NoFields
        );
    }

    #[test]
    fn negative_beats_empty_check() {
        let patch = PropertyPatch {
            rent: Some(-5.0),
            ..Default::default()
        };
        assert_eq!(
            patch.validate().unwrap_err(),
            ValidationError::Negative { field: "Rent" }
        );
    }
}
