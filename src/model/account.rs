use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use crate::config::SecureString;

use super::RecordId;

/// The signed-in user, as reported by the profile endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub id: RecordId,
    #[serde(default)]
    pub username: String,
}

/// Username/password pair for login and registration.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: SecureString,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: SecureString::new(password.into()),
        }
    }
}

impl Serialize for Credentials {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut body = serializer.serialize_struct("Credentials", 2)?;
        body.serialize_field("username", &self.username)?;
        body.serialize_field("password", self.password.expose())?;
        body.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_serialize_plain_password_but_debug_masks_it() {
        let credentials = Credentials::new("dummy", "secret-pw");
        let body = serde_json::to_value(&credentials).unwrap();
        assert_eq!(body["username"], "dummy");
        assert_eq!(body["password"], "secret-pw");
        assert!(!format!("{:?}", credentials).contains("secret-pw"));
    }
}
