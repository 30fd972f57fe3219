//! Contact Info Model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of contact entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ContactType {
    #[default]
    Phone,
    Email,
    Address,
    Hours,
    Social,
}

impl ContactType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Phone => "Phone",
            Self::Email => "Email",
            Self::Address => "Address",
            Self::Hours => "Hours",
            Self::Social => "Social",
        }
    }
}

impl fmt::Display for ContactType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContactType {
    type Err = String;

    /// Case-insensitive
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "phone" => Ok(Self::Phone),
            "email" => Ok(Self::Email),
            "address" => Ok(Self::Address),
            "hours" => Ok(Self::Hours),
            "social" => Ok(Self::Social),
            other => Err(format!("unknown contact type '{}'", other)),
        }
    }
}

/// Contact entry (phone number, email, address, hours, social link)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ContactType,
    pub label: String,
    pub value: String,
    /// Opaque icon identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub display_order: i32,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_type_parse() {
        assert_eq!("phone".parse::<ContactType>(), Ok(ContactType::Phone));
        assert_eq!(" Email ".parse::<ContactType>(), Ok(ContactType::Email));
        assert_eq!("SOCIAL".parse::<ContactType>(), Ok(ContactType::Social));
        assert!("fax".parse::<ContactType>().is_err());
    }
}
