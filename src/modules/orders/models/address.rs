// Postal address snapshot for billing and shipping.
//
// Field names follow the order-management system's address keys so that
// comparison sets can be configured by name.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Line separator used in formatted addresses
pub const ADDRESS_LINE_BREAK: &str = "<br/>";

/// One comparable address field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddressField {
    FirstName,
    LastName,
    Company,
    #[serde(rename = "address_1")]
    Address1,
    #[serde(rename = "address_2")]
    Address2,
    City,
    State,
    Postcode,
    Country,
}

impl AddressField {
    /// Fields compared when deciding whether an order ships elsewhere
    pub const DEFAULT_COMPARISON: [AddressField; 9] = [
        AddressField::FirstName,
        AddressField::LastName,
        AddressField::Company,
        AddressField::Address1,
        AddressField::Address2,
        AddressField::City,
        AddressField::State,
        AddressField::Postcode,
        AddressField::Country,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            AddressField::FirstName => "first_name",
            AddressField::LastName => "last_name",
            AddressField::Company => "company",
            AddressField::Address1 => "address_1",
            AddressField::Address2 => "address_2",
            AddressField::City => "city",
            AddressField::State => "state",
            AddressField::Postcode => "postcode",
            AddressField::Country => "country",
        }
    }
}

impl fmt::Display for AddressField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for AddressField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AddressField::DEFAULT_COMPARISON
            .iter()
            .copied()
            .find(|field| field.key() == s.trim())
            .ok_or_else(|| format!("Invalid address field: {}", s))
    }
}

/// Billing or shipping address of an order
///
/// `email` and `phone` are only populated on billing addresses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    pub first_name: String,
    pub last_name: String,
    pub company: String,
    pub address_1: String,
    pub address_2: String,
    pub city: String,
    pub state: String,
    pub postcode: String,
    pub country: String,
    pub email: String,
    pub phone: String,
}

impl Address {
    pub fn field(&self, field: AddressField) -> &str {
        match field {
            AddressField::FirstName => &self.first_name,
            AddressField::LastName => &self.last_name,
            AddressField::Company => &self.company,
            AddressField::Address1 => &self.address_1,
            AddressField::Address2 => &self.address_2,
            AddressField::City => &self.city,
            AddressField::State => &self.state,
            AddressField::Postcode => &self.postcode,
            AddressField::Country => &self.country,
        }
    }

    /// Multi-line postal rendering; empty when no part is set
    pub fn formatted(&self) -> String {
        let name = join_non_empty(&[&self.first_name, &self.last_name], " ");
        let locality = join_non_empty(&[&self.city, &self.state, &self.postcode], " ");

        let lines = [
            name.as_str(),
            self.company.trim(),
            self.address_1.trim(),
            self.address_2.trim(),
            locality.as_str(),
            self.country.trim(),
        ];
        join_non_empty(&lines, ADDRESS_LINE_BREAK)
    }
}

fn join_non_empty(parts: &[&str], separator: &str) -> String {
    parts
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}
