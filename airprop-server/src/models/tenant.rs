//! Tenant input models

use super::ValidationError;

const REQUIRED: &str = "Name, rent due, and property ID";

/// Validated input for creating a tenant.
///
/// `property_id` is only checked for presence here; whether the property
/// actually exists is the repository's call to make.
#[derive(Debug, Clone)]
pub struct NewTenant {
    pub name: String,
    pub rent_due: f64,
    pub property_id: i64,
}

impl NewTenant {
    pub fn new(
        name: impl Into<String>,
        rent_due: f64,
        property_id: i64,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::Required { what: REQUIRED });
        }
        if rent_due < 0.0 {
            return Err(ValidationError::Negative { field: "Rent due" });
        }
        Ok(Self {
            name,
            rent_due,
            property_id,
        })
    }

    pub fn from_parts(
        name: Option<String>,
        rent_due: Option<f64>,
        property_id: Option<i64>,
    ) -> Result<Self, ValidationError> {
        match (name, rent_due, property_id) {
            (Some(name), Some(rent_due), Some(property_id)) => {
                Self::new(name, rent_due, property_id)
            }
            _ => Err(ValidationError::Required { what: REQUIRED }),
        }
    }
}

/// Partial update: absent fields are left unchanged
#[derive(Debug, Clone, Default)]
pub struct TenantPatch {
    pub name: Option<String>,
    pub rent_due: Option<f64>,
    pub property_id: Option<i64>,
}

impl TenantPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.rent_due.is_none() && self.property_id.is_none()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if matches!(self.rent_due, Some(r) if r < 0.0) {
            return Err(ValidationError::Negative { field: "Rent due" });
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
    fn rejects_missing_property_id() {
        let err = NewTenant::from_parts(Some("T".into()), Some(900.0), None).unwrap_err();
        assert!(matches!(err, ValidationError::Required { .. }));
    }

    #[test]
    fn rejects_negative_rent_due() {
        let err = NewTenant::new("T", -0.5, 1).unwrap_err();
        assert_eq!(err, ValidationError::Negative { field: "Rent due" });
    }

    #[test]
    fn patch_with_only_property_id_is_valid() {
        let patch = TenantPatch {
            property_id: Some(2),
            ..Default::default()
        };
        assert!(patch.validate().is_ok());
    }
}
