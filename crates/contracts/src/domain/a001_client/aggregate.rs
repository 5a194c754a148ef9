use crate::domain::common::{EntityRecord, LocalityRef};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Client (a001)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// National identity document number
    #[serde(default)]
    pub dni: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub locality: Option<LocalityRef>,
    pub created_on: DateTime<Utc>,
}

impl Client {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }
}

impl EntityRecord for Client {
    fn id(&self) -> &str {
        &self.id
    }
    fn code(&self) -> String {
        self.full_name()
    }
    fn entity_index() -> &'static str {
        "a001"
    }
    fn collection_name() -> &'static str {
        "clients"
    }
    fn element_name() -> &'static str {
        "Cliente"
    }
    fn list_name() -> &'static str {
        "Clientes"
    }
}

/// Form payload for create/update mutations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub dni: Option<String>,
    pub phone: Option<String>,
    pub locality_id: Option<String>,
}

impl ClientInput {
    pub fn from_client(client: &Client) -> Self {
        Self {
            first_name: client.first_name.clone(),
            last_name: client.last_name.clone(),
            email: client.email.clone(),
            dni: client.dni.clone(),
            phone: client.phone.clone(),
            locality_id: client.locality.as_ref().map(|l| l.id.clone()),
        }
    }

    /// Blank optional fields are sent as null.
    pub fn normalized(mut self) -> Self {
        let blank_to_none = |v: Option<String>| v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty());
        self.first_name = self.first_name.trim().to_string();
        self.last_name = self.last_name.trim().to_string();
        self.email = self.email.trim().to_string();
        self.dni = blank_to_none(self.dni);
        self.phone = blank_to_none(self.phone);
        self.locality_id = blank_to_none(self.locality_id);
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.first_name.trim().is_empty() {
            return Err("El nombre es obligatorio".into());
        }
        if self.last_name.trim().is_empty() {
            return Err("El apellido es obligatorio".into());
        }
        let email = self.email.trim();
        match email.split_once('@') {
            Some((user, domain)) if !user.is_empty() && domain.contains('.') => {}
            _ => return Err("El email no es válido".into()),
        }
        if let Some(dni) = self.dni.as_deref().map(str::trim).filter(|d| !d.is_empty()) {
            if !dni.chars().all(|c| c.is_ascii_digit()) {
                return Err("El DNI debe contener solo números".into());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> ClientInput {
        ClientInput {
            first_name: "Ana".into(),
            last_name: "Pérez".into(),
            email: "ana@correo.com".into(),
            dni: Some("30111222".into()),
            phone: Some("  ".into()),
            locality_id: None,
        }
    }

    #[test]
    fn test_validate() {
        assert!(input().validate().is_ok());
        assert!(ClientInput { email: "ana".into(), ..input() }.validate().is_err());
        assert!(ClientInput { first_name: " ".into(), ..input() }.validate().is_err());
        assert!(ClientInput { dni: Some("30.111.222".into()), ..input() }.validate().is_err());
    }

    #[test]
    fn test_normalized_drops_blank_optionals() {
        let n = input().normalized();
        assert_eq!(n.phone, None);
        assert_eq!(n.dni.as_deref(), Some("30111222"));
    }

    #[test]
    fn test_decode_and_routes() {
        let client: Client = serde_json::from_value(serde_json::json!({
            "id": "Q2xpZW50OjE=",
            "firstName": "Ana",
            "lastName": "Pérez",
            "email": "ana@correo.com",
            "createdOn": "2024-03-15T14:02:26Z"
        }))
        .unwrap();
        assert_eq!(client.code(), "Ana Pérez");
        assert_eq!(Client::list_route(), "/clients");
        assert_eq!(client.detail_route(), "/clients/Q2xpZW50OjE=");
    }
}
