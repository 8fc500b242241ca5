//! The cash-on-delivery checkout form.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A required field on the checkout form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CheckoutField {
    Name,
    Phone,
    Address,
}

impl CheckoutField {
    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Phone => "phone",
            Self::Address => "address",
        }
    }
}

impl fmt::Display for CheckoutField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Errors that can occur when submitting a [`CheckoutForm`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckoutError {
    /// One or more required fields are blank.
    #[error("Please fill {} to place the order.", join_fields(.0))]
    MissingFields(Vec<CheckoutField>),
}

fn join_fields(fields: &[CheckoutField]) -> String {
    match fields {
        [] => String::new(),
        [only] => only.label().to_string(),
        [init @ .., last] => {
            let init: Vec<_> = init.iter().map(|field| field.label()).collect();
            format!("{} and {}", init.join(", "), last.label())
        }
    }
}

/// How a placed order is paid for. Only cash on delivery is offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PaymentMethod {
    #[default]
    CashOnDelivery,
}

impl PaymentMethod {
    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::CashOnDelivery => "Cash on Delivery",
        }
    }
}

/// Delivery details typed into the checkout modal.
///
/// Values are kept exactly as typed; validation only inspects them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CheckoutForm {
    pub name: String,
    pub phone: String,
    pub address: String,
}

impl CheckoutForm {
    /// Required fields that are empty or whitespace-only, in form order.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<CheckoutField> {
        [
            (CheckoutField::Name, &self.name),
            (CheckoutField::Phone, &self.phone),
            (CheckoutField::Address, &self.address),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }

    /// Check that every required field is filled.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::MissingFields`] listing every blank field.
    pub fn validate(&self) -> Result<(), CheckoutError> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(CheckoutError::MissingFields(missing))
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn form(name: &str, phone: &str, address: &str) -> CheckoutForm {
        CheckoutForm {
            name: name.to_string(),
            phone: phone.to_string(),
            address: address.to_string(),
        }
    }

    #[test]
    fn test_complete_form_is_valid() {
        assert!(form("Asha", "9999999999", "Street 1").validate().is_ok());
    }

    #[test]
    fn test_empty_name_rejected() {
        let err = form("", "9999999999", "Street 1").validate().unwrap_err();
        assert_eq!(err, CheckoutError::MissingFields(vec![CheckoutField::Name]));
    }

    #[test]
    fn test_whitespace_counts_as_blank() {
        let missing = form("Asha", "   ", "\n").missing_fields();
        assert_eq!(missing, [CheckoutField::Phone, CheckoutField::Address]);
    }

    #[test]
    fn test_error_message_lists_fields() {
        let err = CheckoutForm::default().validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Please fill name, phone and address to place the order."
        );

        let err = form("Asha", "", "Street 1").validate().unwrap_err();
        assert_eq!(err.to_string(), "Please fill phone to place the order.");
    }
}
