//! E-commerce payloads for `_addTrans` and `_addItem`.
//!
//! Amounts stay strings: the tracker parses them itself, and callers
//! usually hold them pre-formatted (`"11.99"`).

use gaq_core::{GaqError, GaqResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A transaction header. `order_id` and `total` are required; blank
/// optional fields keep their position as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub order_id: String,
    /// Affiliation or store name.
    #[serde(default)]
    pub store_name: String,
    pub total: String,
    #[serde(default)]
    pub tax: String,
    #[serde(default)]
    pub shipping: String,
    #[serde(default)]
    pub city: String,
    /// State or province.
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub country: String,
}

impl Transaction {
    pub(crate) fn validate(&self) -> GaqResult<()> {
        require("AddTransaction", "order_id", &self.order_id)?;
        require("AddTransaction", "total", &self.total)?;
        Ok(())
    }

    pub(crate) fn params(&self) -> Vec<Value> {
        [
            &self.order_id,
            &self.store_name,
            &self.total,
            &self.tax,
            &self.shipping,
            &self.city,
            &self.state,
            &self.country,
        ]
        .into_iter()
        .map(|field| Value::from(field.as_str()))
        .collect()
    }
}

/// A line item belonging to the transaction with the same `order_id`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub order_id: String,
    /// SKU or product code.
    pub sku: String,
    #[serde(default)]
    pub name: String,
    /// Category or variation.
    #[serde(default)]
    pub variation: String,
    pub unit_price: String,
    pub quantity: String,
}

impl Item {
    pub(crate) fn validate(&self) -> GaqResult<()> {
        require("AddItem", "order_id", &self.order_id)?;
        require("AddItem", "sku", &self.sku)?;
        require("AddItem", "unit_price", &self.unit_price)?;
        require("AddItem", "quantity", &self.quantity)?;
        Ok(())
    }

    pub(crate) fn params(&self) -> Vec<Value> {
        [
            &self.order_id,
            &self.sku,
            &self.name,
            &self.variation,
            &self.unit_price,
            &self.quantity,
        ]
        .into_iter()
        .map(|field| Value::from(field.as_str()))
        .collect()
    }
}

pub(crate) fn require(event: &'static str, argument: &'static str, value: &str) -> GaqResult<()> {
    if value.trim().is_empty() {
        return Err(GaqError::missing(event, argument));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acme() -> Transaction {
        Transaction {
            order_id: "1234".into(),
            store_name: "Acme Clothing".into(),
            total: "11.99".into(),
            tax: "1.29".into(),
            shipping: "5".into(),
            city: "San Jose".into(),
            state: "California".into(),
            country: "USA".into(),
        }
    }

    #[test]
    fn test_transaction_params_in_order() {
        let params = acme().params();
        let expected = [
            "1234",
            "Acme Clothing",
            "11.99",
            "1.29",
            "5",
            "San Jose",
            "California",
            "USA",
        ];
        assert_eq!(params.len(), 8);
        for (param, want) in params.iter().zip(expected) {
            assert_eq!(param, want);
        }
    }

    #[test]
    fn test_transaction_required_fields() {
        assert!(acme().validate().is_ok());

        let err = Transaction {
            total: "  ".into(),
            ..acme()
        }
        .validate()
        .unwrap_err();
        assert!(matches!(
            err,
            GaqError::MissingRequiredArgument {
                event: "AddTransaction",
                argument: "total"
            }
        ));

        // optional fields may be blank
        let minimal = Transaction {
            order_id: "1".into(),
            total: "2.00".into(),
            ..Default::default()
        };
        assert!(minimal.validate().is_ok());
        assert_eq!(minimal.params()[1], "");
    }

    #[test]
    fn test_item_required_fields() {
        let item = Item {
            order_id: "1234".into(),
            sku: "DD44".into(),
            name: "T-Shirt".into(),
            variation: "Green Medium".into(),
            unit_price: "11.99".into(),
            quantity: "1".into(),
        };
        assert!(item.validate().is_ok());
        assert_eq!(item.params()[1], "DD44");

        let err = Item {
            sku: String::new(),
            ..item
        }
        .validate()
        .unwrap_err();
        assert!(matches!(
            err,
            GaqError::MissingRequiredArgument { argument: "sku", .. }
        ));
    }

    #[test]
    fn test_item_deserializes_with_defaults() {
        let item: Item = serde_json::from_str(
            r#"{"order_id":"9","sku":"X1","unit_price":"3.50","quantity":"2"}"#,
        )
        .unwrap();
        assert!(item.name.is_empty());
        assert!(item.validate().is_ok());
    }
}
