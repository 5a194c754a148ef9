use crate::domain::common::{EntityRecord, LocalityRef};
use serde::{Deserialize, Serialize};

/// Supplier (a004)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    pub id: String,
    pub name: String,
    /// Tax identifier (CUIT)
    #[serde(default)]
    pub tax_id: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub locality: Option<LocalityRef>,
}

impl Supplier {
    /// `30-71234567-9` style tax id when it has the expected 11 digits
    pub fn formatted_tax_id(&self) -> Option<String> {
        let raw = self.tax_id.as_deref()?;
        let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
        if digits.len() == 11 {
            Some(format!("{}-{}-{}", &digits[..2], &digits[2..10], &digits[10..]))
        } else {
            Some(raw.to_string())
        }
    }
}

impl EntityRecord for Supplier {
    fn id(&self) -> &str {
        &self.id
    }
    fn code(&self) -> String {
        self.name.clone()
    }
    fn entity_index() -> &'static str {
        "a004"
    }
    fn collection_name() -> &'static str {
        "suppliers"
    }
    fn element_name() -> &'static str {
        "Proveedor"
    }
    fn list_name() -> &'static str {
        "Proveedores"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formatted_tax_id() {
        let mut supplier = Supplier {
            id: "1".into(),
            name: "Hierros SA".into(),
            tax_id: Some("30712345679".into()),
            email: None,
            phone: None,
            locality: None,
        };
        assert_eq!(supplier.formatted_tax_id().as_deref(), Some("30-71234567-9"));
        supplier.tax_id = Some("123".into());
        assert_eq!(supplier.formatted_tax_id().as_deref(), Some("123"));
        supplier.tax_id = None;
        assert_eq!(supplier.formatted_tax_id(), None);
    }
}
