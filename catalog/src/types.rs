//! Domain types for the shop catalog feature.
//!
//! Everything here is plain data: filter descriptors, pagination values, and
//! the shop/product records the server returns. The controller passes shop
//! data through for display and never transforms it; unknown or missing
//! fields are rejected at the wire boundary instead of rendering defaults.

use crate::error::ShopValidationError;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// The fixed set of filterable attributes.
///
/// `as_str` yields the wire name used in query parameters; [`FilterKey::parse`]
/// is the inverse and rejects anything outside the set, so unknown filter keys
/// are unrepresentable past the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterKey {
    /// Filter by shop name
    ShopName,
    /// Filter by product name
    ProductName,
    /// Filter by product stock
    Stock,
    /// Filter by owning user's name
    UserName,
}

impl FilterKey {
    /// All keys, in display order
    pub const ALL: [Self; 4] = [Self::ShopName, Self::ProductName, Self::Stock, Self::UserName];

    /// The wire name of this key
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ShopName => "shopName",
            Self::ProductName => "productName",
            Self::Stock => "stock",
            Self::UserName => "userName",
        }
    }

    /// Parse a wire name back into a key
    ///
    /// Returns `None` for anything outside the fixed set.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == name)
    }
}

impl std::fmt::Display for FilterKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current values of all filterable fields.
///
/// All four keys are always present; a value is either `""` (unset) or user
/// text. The set is created empty, edited field by field, and bulk-reset on
/// clear; it lives for the controller's whole lifetime.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSet {
    shop_name: String,
    product_name: String,
    stock: String,
    user_name: String,
}

impl FilterSet {
    /// Create an all-empty filter set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read one field
    #[must_use]
    pub fn get(&self, key: FilterKey) -> &str {
        match key {
            FilterKey::ShopName => &self.shop_name,
            FilterKey::ProductName => &self.product_name,
            FilterKey::Stock => &self.stock,
            FilterKey::UserName => &self.user_name,
        }
    }

    /// Set one field
    pub fn set(&mut self, key: FilterKey, value: impl Into<String>) {
        let value = value.into();
        match key {
            FilterKey::ShopName => self.shop_name = value,
            FilterKey::ProductName => self.product_name = value,
            FilterKey::Stock => self.stock = value,
            FilterKey::UserName => self.user_name = value,
        }
    }

    /// Builder-style `set`, handy in tests
    #[must_use]
    pub fn with(mut self, key: FilterKey, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Reset every field to `""`
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// True when every field is `""`
    #[must_use]
    pub fn is_empty(&self) -> bool {
        FilterKey::ALL.into_iter().all(|key| self.get(key).is_empty())
    }

    /// Iterate the non-empty fields, in display order
    ///
    /// These are the only values meaningful to the server.
    pub fn active(&self) -> impl Iterator<Item = (FilterKey, &str)> {
        FilterKey::ALL
            .into_iter()
            .map(|key| (key, self.get(key)))
            .filter(|(_, value)| !value.is_empty())
    }

    /// Derive the input descriptors for all four fields
    #[must_use]
    pub fn fields(&self) -> [FilterField; 4] {
        FilterKey::ALL.map(|key| FilterField::describe(key, self.get(key).to_owned()))
    }
}

/// Input widget kind for a filter field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InputKind {
    /// Free text input
    Text,
    /// Numeric input
    Number,
}

/// Data-only descriptor for one filter input.
///
/// The presentational shell renders these verbatim; there is no behavior
/// here. Serialize-only: descriptors are derived views, never read back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterField {
    /// Which filter this field edits
    pub key: FilterKey,
    /// Human-readable label
    pub label: &'static str,
    /// Input widget kind
    pub kind: InputKind,
    /// Current value ("" = unset)
    pub value: String,
    /// Placeholder shown while empty
    pub placeholder: &'static str,
}

impl FilterField {
    fn describe(key: FilterKey, value: String) -> Self {
        let (label, kind, placeholder) = match key {
            FilterKey::ShopName => ("Shop Name", InputKind::Text, "Enter shop name"),
            FilterKey::ProductName => ("Product Name", InputKind::Text, "Enter product name"),
            FilterKey::Stock => ("Stock", InputKind::Number, "Enter stock"),
            FilterKey::UserName => ("User Name", InputKind::Text, "Enter user name"),
        };
        Self {
            key,
            label,
            kind,
            value,
            placeholder,
        }
    }
}

/// Rows-per-page selection.
///
/// The selector offers exactly these options; anything else is
/// unrepresentable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u32", try_from = "u32")]
pub enum PageSize {
    /// 5 rows per page
    Five,
    /// 10 rows per page
    #[default]
    Ten,
    /// 20 rows per page
    Twenty,
    /// 30 rows per page
    Thirty,
}

impl PageSize {
    /// All selectable sizes, in selector order
    pub const ALL: [Self; 4] = [Self::Five, Self::Ten, Self::Twenty, Self::Thirty];

    /// The numeric value sent to the server
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        match self {
            Self::Five => 5,
            Self::Ten => 10,
            Self::Twenty => 20,
            Self::Thirty => 30,
        }
    }
}

impl From<PageSize> for u32 {
    fn from(size: PageSize) -> Self {
        size.as_u32()
    }
}

impl TryFrom<u32> for PageSize {
    type Error = InvalidPageSize;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|size| size.as_u32() == value)
            .ok_or(InvalidPageSize(value))
    }
}

impl std::fmt::Display for PageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_u32())
    }
}

/// A page-size value outside the selector options
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unsupported page size: {0}")]
pub struct InvalidPageSize(pub u32);

/// Opaque shop identifier, passed through from the server
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShopId(String);

impl ShopId {
    /// Wrap a raw identifier
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw identifier string
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ShopId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A product listed by a shop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Product {
    /// Product name
    pub name: String,
    /// Listed price
    pub price: f64,
    /// Image URLs
    pub images: Vec<String>,
}

impl Product {
    /// Build a product record
    #[must_use]
    pub fn new(name: impl Into<String>, price: f64, images: Vec<String>) -> Self {
        Self {
            name: name.into(),
            price,
            images,
        }
    }
}

/// A shop as returned by the server.
///
/// The controller does not validate or transform this beyond display needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Shop {
    /// Server-assigned identifier
    pub id: ShopId,
    /// Shop name
    pub name: String,
    /// Products offered by this shop
    pub products: Vec<Product>,
}

impl Shop {
    /// Build a shop record
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, products: Vec<Product>) -> Self {
        Self {
            id: ShopId::new(id),
            name: name.into(),
            products,
        }
    }
}

/// Payload for creating a new shop.
///
/// Validation belongs to the creation form, which calls [`NewShop::validate`]
/// before submitting; the list-view controller never does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewShop {
    /// Shop name; must contain the word "Toko"
    pub name: String,
    /// Administrator contact address
    pub admin_email: String,
}

#[allow(clippy::expect_used)] // hardcoded pattern always compiles
static EMAIL_PATTERN: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("hardcoded email pattern should always compile")
});

impl NewShop {
    /// Build a creation payload
    #[must_use]
    pub fn new(name: impl Into<String>, admin_email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            admin_email: admin_email.into(),
        }
    }

    /// Check the form-level business rules
    ///
    /// # Errors
    ///
    /// - [`ShopValidationError::NameRequired`] when the name is empty
    /// - [`ShopValidationError::NameMissingKeyword`] when the name lacks "Toko"
    /// - [`ShopValidationError::EmailRequired`] when the email is empty
    /// - [`ShopValidationError::EmailInvalid`] when the email is malformed
    pub fn validate(&self) -> Result<(), ShopValidationError> {
        if self.name.trim().is_empty() {
            return Err(ShopValidationError::NameRequired);
        }
        if !self.name.contains("Toko") {
            return Err(ShopValidationError::NameMissingKeyword);
        }
        if self.admin_email.trim().is_empty() {
            return Err(ShopValidationError::EmailRequired);
        }
        if !EMAIL_PATTERN.is_match(&self.admin_email) {
            return Err(ShopValidationError::EmailInvalid);
        }
        Ok(())
    }
}

/// One parameterized page request to the collection gateway
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopQuery {
    /// Filter values; only non-empty fields are meaningful to the server
    pub filters: FilterSet,
    /// 1-based page number
    pub page: u32,
    /// Rows per page
    pub size: PageSize,
}

/// One page of results from the collection gateway
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopPage {
    /// The shops on this page
    pub shops: Vec<Shop>,
    /// Total number of pages for the query
    pub total_pages: u32,
}

impl ShopPage {
    /// An empty single-page result
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            shops: Vec::new(),
            total_pages: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn filter_key_round_trips_through_wire_names() {
        for key in FilterKey::ALL {
            assert_eq!(FilterKey::parse(key.as_str()), Some(key));
        }
        assert_eq!(FilterKey::parse("color"), None);
    }

    #[test]
    fn filter_set_tracks_active_fields() {
        let mut filters = FilterSet::new();
        assert!(filters.is_empty());
        assert_eq!(filters.active().count(), 0);

        filters.set(FilterKey::ShopName, "Toko A");
        filters.set(FilterKey::Stock, "3");
        let active: Vec<_> = filters.active().collect();
        assert_eq!(
            active,
            vec![(FilterKey::ShopName, "Toko A"), (FilterKey::Stock, "3")]
        );

        filters.clear();
        assert!(filters.is_empty());
    }

    #[test]
    fn filter_fields_describe_all_inputs() {
        let filters = FilterSet::new().with(FilterKey::ProductName, "Avanza");
        let fields = filters.fields();

        assert_eq!(fields.len(), 4);
        assert_eq!(fields[1].key, FilterKey::ProductName);
        assert_eq!(fields[1].value, "Avanza");
        assert_eq!(fields[2].kind, InputKind::Number);
        assert_eq!(fields[0].placeholder, "Enter shop name");
    }

    #[test]
    fn page_size_accepts_only_selector_options() {
        assert_eq!(PageSize::try_from(20), Ok(PageSize::Twenty));
        assert_eq!(PageSize::try_from(15), Err(InvalidPageSize(15)));
        assert_eq!(PageSize::default().as_u32(), 10);
    }

    #[test]
    fn new_shop_validation_rules() {
        assert!(NewShop::new("Toko Sejahtera", "admin@example.com").validate().is_ok());

        assert_eq!(
            NewShop::new("", "admin@example.com").validate(),
            Err(crate::error::ShopValidationError::NameRequired)
        );
        assert_eq!(
            NewShop::new("Sejahtera", "admin@example.com").validate(),
            Err(crate::error::ShopValidationError::NameMissingKeyword)
        );
        assert_eq!(
            NewShop::new("Toko Sejahtera", "not-an-email").validate(),
            Err(crate::error::ShopValidationError::EmailInvalid)
        );
        assert_eq!(
            NewShop::new("Toko Sejahtera", "").validate(),
            Err(crate::error::ShopValidationError::EmailRequired)
        );
    }

    #[test]
    fn shop_decodes_camel_case_and_rejects_unknown_fields() {
        let json = r#"{
            "id": "shop-1",
            "name": "Toko A",
            "products": [{"name": "Avanza", "price": 250000.0, "images": ["a.jpg"]}]
        }"#;
        let shop: Shop = serde_json::from_str(json).unwrap();
        assert_eq!(shop.name, "Toko A");
        assert_eq!(shop.products[0].images, vec!["a.jpg"]);

        let extra = r#"{"id": "x", "name": "y", "products": [], "rating": 5}"#;
        assert!(serde_json::from_str::<Shop>(extra).is_err());

        let missing = r#"{"id": "x", "products": []}"#;
        assert!(serde_json::from_str::<Shop>(missing).is_err());
    }
}
