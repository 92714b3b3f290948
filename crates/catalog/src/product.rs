use serde::{Deserialize, Serialize};

use minimarket_core::{DomainError, DomainResult, Entity, ProductId, ValueObject};

/// Price of one unit of a product.
///
/// Always finite and strictly positive: a zero price is rejected rather than
/// stored, so every product on the shelf contributes to inventory value.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct UnitPrice(f64);

impl UnitPrice {
    pub fn new(value: f64) -> DomainResult<Self> {
        if !value.is_finite() {
            return Err(DomainError::invalid_field("unitPrice", "must be a finite number"));
        }
        if value <= 0.0 {
            return Err(DomainError::invalid_field(
                "unitPrice",
                format!("must be greater than zero (got {value})"),
            ));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl ValueObject for UnitPrice {}

impl TryFrom<f64> for UnitPrice {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UnitPrice> for f64 {
    fn from(value: UnitPrice) -> Self {
        value.0
    }
}

/// Unvalidated product fields, as they arrive over the wire or from disk.
///
/// `price` and `stock` are accepted as aliases so payloads from older clients
/// still deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub id: String,
    pub name: String,
    pub barcode: String,
    #[serde(alias = "price")]
    pub unit_price: f64,
    #[serde(default)]
    pub category: String,
    #[serde(default, alias = "stock")]
    pub stock_quantity: u64,
}

/// A registered product.
///
/// Fields are private; construct through [`Product::new`] (or deserialize,
/// which goes through the same checks).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ProductDraft", into = "ProductDraft")]
pub struct Product {
    id: ProductId,
    name: String,
    barcode: String,
    unit_price: UnitPrice,
    category: String,
    stock_quantity: u64,
}

impl Product {
    /// Validate a draft and build a product from it.
    pub fn new(draft: ProductDraft) -> DomainResult<Self> {
        let id = ProductId::new(draft.id)?;
        let name = non_blank("name", draft.name)?;
        let barcode = non_blank("barcode", draft.barcode)?;
        let unit_price = UnitPrice::new(draft.unit_price)?;

        Ok(Self {
            id,
            name,
            barcode,
            unit_price,
            category: draft.category.trim().to_string(),
            stock_quantity: draft.stock_quantity,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn barcode(&self) -> &str {
        &self.barcode
    }

    pub fn unit_price(&self) -> UnitPrice {
        self.unit_price
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn stock_quantity(&self) -> u64 {
        self.stock_quantity
    }

    /// Worth of the units on hand (`stock_quantity × unit_price`).
    pub fn line_value(&self) -> f64 {
        self.stock_quantity as f64 * self.unit_price.value()
    }

    /// Increase on-hand stock. Fails if the counter would overflow.
    pub fn add_stock(&mut self, quantity: u64) -> DomainResult<()> {
        self.stock_quantity = self.stock_quantity.checked_add(quantity).ok_or_else(|| {
            DomainError::invalid_quantity(format!(
                "receiving {quantity} units would overflow the stock of {}",
                self.id
            ))
        })?;
        Ok(())
    }

    /// Decrease on-hand stock. Stock never goes below zero.
    pub fn remove_stock(&mut self, quantity: u64) -> DomainResult<()> {
        if quantity > self.stock_quantity {
            return Err(DomainError::InsufficientStock {
                requested: quantity,
                available: self.stock_quantity,
            });
        }
        self.stock_quantity -= quantity;
        Ok(())
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl TryFrom<ProductDraft> for Product {
    type Error = DomainError;

    fn try_from(draft: ProductDraft) -> Result<Self, Self::Error> {
        Self::new(draft)
    }
}

impl From<Product> for ProductDraft {
    fn from(p: Product) -> Self {
        Self {
            id: p.id.into(),
            name: p.name,
            barcode: p.barcode,
            unit_price: p.unit_price.into(),
            category: p.category,
            stock_quantity: p.stock_quantity,
        }
    }
}

fn non_blank(field: &'static str, value: String) -> DomainResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::invalid_field(field, "cannot be empty"));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rice() -> ProductDraft {
        ProductDraft {
            id: "P001".to_string(),
            name: "Rice".to_string(),
            barcode: "123".to_string(),
            unit_price: 2.5,
            category: "Grains".to_string(),
            stock_quantity: 10,
        }
    }

    #[test]
    fn valid_draft_builds_product() {
        let p = Product::new(rice()).unwrap();
        assert_eq!(p.id().as_str(), "P001");
        assert_eq!(p.name(), "Rice");
        assert_eq!(p.barcode(), "123");
        assert_eq!(p.unit_price().value(), 2.5);
        assert_eq!(p.category(), "Grains");
        assert_eq!(p.stock_quantity(), 10);
        assert_eq!(p.line_value(), 25.0);
    }

    #[test]
    fn zero_and_negative_prices_are_rejected() {
        for price in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = Product::new(ProductDraft { unit_price: price, ..rice() }).unwrap_err();
            assert!(
                matches!(err, DomainError::InvalidField { field: "unitPrice", .. }),
                "price {price} gave {err:?}"
            );
        }
    }

    #[test]
    fn blank_required_fields_are_rejected() {
        let err = Product::new(ProductDraft { id: " ".into(), ..rice() }).unwrap_err();
        assert!(matches!(err, DomainError::InvalidField { field: "id", .. }));

        let err = Product::new(ProductDraft { name: "".into(), ..rice() }).unwrap_err();
        assert!(matches!(err, DomainError::InvalidField { field: "name", .. }));

        let err = Product::new(ProductDraft { barcode: "\n".into(), ..rice() }).unwrap_err();
        assert!(matches!(err, DomainError::InvalidField { field: "barcode", .. }));
    }

    #[test]
    fn stock_cannot_go_negative() {
        let mut p = Product::new(rice()).unwrap();
        let err = p.remove_stock(11).unwrap_err();
        assert_eq!(err, DomainError::InsufficientStock { requested: 11, available: 10 });
        assert_eq!(p.stock_quantity(), 10);

        p.remove_stock(10).unwrap();
        assert_eq!(p.stock_quantity(), 0);
    }

    #[test]
    fn stock_overflow_is_an_invalid_quantity() {
        let mut p = Product::new(ProductDraft { stock_quantity: u64::MAX, ..rice() }).unwrap();
        let err = p.add_stock(1).unwrap_err();
        assert_eq!(err.kind(), "invalid_quantity");
        assert_eq!(p.stock_quantity(), u64::MAX);
    }

    #[test]
    fn json_uses_camel_case_and_accepts_legacy_aliases() {
        let p = Product::new(rice()).unwrap();
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["unitPrice"], 2.5);
        assert_eq!(json["stockQuantity"], 10);

        let legacy: Product = serde_json::from_value(serde_json::json!({
            "id": "P001",
            "name": "Rice",
            "barcode": "123",
            "price": 2.5,
            "category": "Grains",
            "stock": 10
        }))
        .unwrap();
        assert_eq!(legacy, p);
    }

    #[test]
    fn deserialization_validates() {
        let res: Result<Product, _> = serde_json::from_value(serde_json::json!({
            "id": "P002",
            "name": "Sugar",
            "barcode": "0987654321",
            "unitPrice": 0,
            "category": "Grains",
            "stockQuantity": 5
        }));
        assert!(res.is_err());

        let res: Result<Product, _> = serde_json::from_value(serde_json::json!({
            "id": "P002",
            "name": "Sugar",
            "barcode": "0987654321",
            "unitPrice": 1.0,
            "stockQuantity": -5
        }));
        assert!(res.is_err());
    }
}
