//! Customer aggregate.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Postal address of a customer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub number: i32,
    pub zip: String,
    pub city: String,
}

impl Address {
    pub fn new(street: impl Into<String>, number: i32, zip: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            street: street.into(),
            number,
            zip: zip.into(),
            city: city.into(),
        }
    }
}

/// A customer that places orders.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub address: Option<Address>,
    pub active: bool,
    pub reward_points: i32,
}

impl Customer {
    /// New customers start inactive, without an address and with no reward points.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            address: None,
            active: false,
            reward_points: 0,
        }
    }

    pub fn change_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn change_address(&mut self, address: Address) {
        self.address = Some(address);
    }

    /// Activate the customer.
    ///
    /// # Errors
    /// Returns [`DomainError::AddressRequired`] if no address has been set.
    pub fn activate(&mut self) -> Result<(), DomainError> {
        if self.address.is_none() {
            return Err(DomainError::AddressRequired(self.id.clone()));
        }
        self.active = true;
        Ok(())
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn add_reward_points(&mut self, points: i32) {
        self.reward_points += points;
    }
}
