use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub username: String,
    pub email: String,
    pub address: Address,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub company: Company,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub suite: String,
    pub city: String,
    #[serde(default)]
    pub zipcode: String,
    #[serde(default)]
    pub geo: Geo,
}

/// Coordinates as sent by the API, kept as strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Geo {
    pub lat: String,
    pub lng: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub catch_phrase: String,
    #[serde(default)]
    pub bs: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEANNE: &str = r#"{
        "id": 1,
        "name": "Leanne Graham",
        "username": "Bret",
        "email": "Sincere@april.biz",
        "address": {
            "street": "Kulas Light",
            "suite": "Apt. 556",
            "city": "Gwenborough",
            "zipcode": "92998-3874",
            "geo": { "lat": "-37.3159", "lng": "81.1496" }
        },
        "phone": "1-770-736-8031 x56442",
        "website": "hildegard.org",
        "company": {
            "name": "Romaguera-Crona",
            "catchPhrase": "Multi-layered client-server neural-net",
            "bs": "harness real-time e-markets"
        }
    }"#;

    #[test]
    fn decodes_full_user() {
        let user: User = serde_json::from_str(LEANNE).unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.name, "Leanne Graham");
        assert_eq!(user.email, "Sincere@april.biz");
        assert_eq!(user.address.city, "Gwenborough");
        assert_eq!(user.address.geo.lng, "81.1496");
        assert_eq!(
            user.company.catch_phrase,
            "Multi-layered client-server neural-net"
        );
    }

    #[test]
    fn optional_fields_default_and_unknown_fields_are_ignored() {
        let user: User = serde_json::from_str(
            r#"{
                "id": 7,
                "name": "Kurtis Weissnat",
                "email": "Telly.Hoeger@billy.biz",
                "address": { "city": "Howemouth" },
                "favourite_colour": "teal"
            }"#,
        )
        .unwrap();
        assert_eq!(user.address.city, "Howemouth");
        assert!(user.username.is_empty());
        assert_eq!(user.company, Company::default());
        assert_eq!(user.address.geo, Geo::default());
    }

    #[test]
    fn city_is_required() {
        let err = serde_json::from_str::<User>(
            r#"{ "id": 2, "name": "Ervin Howell", "email": "Shanna@melissa.tv", "address": {} }"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("city"));
    }
}
