//! Records returned by the users endpoint.
//!
//! Only the fields the dashboard displays are modelled. Unknown fields are
//! ignored and missing display fields fall back to empty strings, so a sparse
//! record still renders (with blank cells) instead of failing the whole fetch.
use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct User {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: Address,
    #[serde(default)]
    pub company: Company,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub city: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Company {
    #[serde(default)]
    pub name: String,
}

impl User {
    /// Cell values in table column order: Name, Username, Email, Phone, City, Company.
    pub fn cells(&self) -> [&str; 6] {
        [
            self.name.as_str(),
            self.username.as_str(),
            self.email.as_str(),
            self.phone.as_str(),
            self.address.city.as_str(),
            self.company.name.as_str(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_nested_fields_and_ignores_extras() {
        let body = r#"{
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "phone": "1-770-736-8031 x56442",
            "website": "hildegard.org",
            "address": { "street": "Kulas Light", "city": "Gwenborough" },
            "company": { "name": "Romaguera-Crona", "bs": "harness real-time e-markets" }
        }"#;
        let user: User = serde_json::from_str(body).expect("valid user");
        assert_eq!(user.id, 1);
        assert_eq!(user.address.city, "Gwenborough");
        assert_eq!(user.company.name, "Romaguera-Crona");
    }

    #[test]
    fn missing_display_fields_render_empty() {
        let user: User = serde_json::from_str(r#"{"id": 7, "name": "Solo"}"#).expect("sparse user");
        assert_eq!(user.cells(), ["Solo", "", "", "", "", ""]);
    }

    #[test]
    fn missing_id_is_rejected() {
        assert!(serde_json::from_str::<User>(r#"{"name": "No Id"}"#).is_err());
    }
}
