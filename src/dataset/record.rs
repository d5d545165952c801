//! Postal-code record type

use serde::{Deserialize, Serialize};

/// One postal entry as it appears in the bundled dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Numeric postal code (not unique across offices)
    pub postal_code: String,
    /// Office name
    pub post_office: String,
    /// Administrative division identifier
    pub division_code: String,
    /// Administrative district name
    pub district: String,
    /// True for a sub-office, false for a main office
    pub is_sub: bool,
}

impl Record {
    /// Creates a new record
    pub fn new(
        postal_code: impl Into<String>,
        post_office: impl Into<String>,
        division_code: impl Into<String>,
        district: impl Into<String>,
        is_sub: bool,
    ) -> Self {
        Self {
            postal_code: postal_code.into(),
            post_office: post_office.into(),
            division_code: division_code.into(),
            district: district.into(),
            is_sub,
        }
    }

    /// Human-readable office type
    pub fn office_type(&self) -> &'static str {
        if self.is_sub {
            "Sub Office"
        } else {
            "Main Office"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_source_shape() {
        let value = json!({
            "postal_code": "00100",
            "post_office": "Colombo 1",
            "division_code": "CMB",
            "district": "Colombo",
            "is_sub": false
        });

        let record: Record = serde_json::from_value(value).unwrap();
        assert_eq!(record.postal_code, "00100");
        assert_eq!(record.district, "Colombo");
        assert!(!record.is_sub);
    }

    #[test]
    fn test_office_type() {
        let main = Record::new("80000", "Galle", "GL", "Galle", false);
        let sub = Record::new("80042", "Unawatuna", "GL", "Galle", true);

        assert_eq!(main.office_type(), "Main Office");
        assert_eq!(sub.office_type(), "Sub Office");
    }
}
