use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(pub i64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_newtype!(UserId);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    id: UserId,
    name: String,
    email: String,
    age: u32,
    image_url: String,
}

impl UserRecord {
    pub fn new(
        id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
        age: u32,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            age,
            image_url: image_url.into(),
        }
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_id_serializes_as_bare_integer() {
        let encoded = serde_json::to_string(&UserId(7)).expect("encode");
        assert_eq!(encoded, "7");
    }

    #[test]
    fn user_record_uses_snake_case_fields() {
        let record = UserRecord::new(
            UserId(1),
            "Ana Torres",
            "ana@gmail.com",
            20,
            "https://x/a.jpg",
        );
        let value = serde_json::to_value(&record).expect("encode");
        assert_eq!(value["image_url"], "https://x/a.jpg");
        assert_eq!(value["age"], 20);

        let decoded: UserRecord = serde_json::from_value(value).expect("decode");
        assert_eq!(decoded, record);
    }
}
