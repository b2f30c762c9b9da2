//! Merchandise

use serde::{Deserialize, Deserializer};

use crate::cart::lenient;

/// Product type label for jar bundles.
pub const JAR_BUNDLE_LABEL: &str = "jar-bundle";

/// Product type label for single honey jars.
pub const HONEY_LABEL: &str = "honey";

/// Merchandise referenced by a cart line, discriminated by `__typename`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "__typename")]
pub enum Merchandise {
    /// A purchasable product SKU.
    ProductVariant(ProductVariant),

    /// Any other merchandise kind. Never counted.
    #[serde(other)]
    Other,
}

/// Product variant merchandise.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProductVariant {
    /// Parent product, if supplied.
    #[serde(default, deserialize_with = "lenient")]
    pub product: Option<Product>,
}

impl ProductVariant {
    /// Create a variant whose product carries the given type label.
    pub fn with_type(product_type: impl Into<String>) -> Self {
        Self {
            product: Some(Product {
                product_type: Some(product_type.into()),
            }),
        }
    }

    /// Classify the variant by its product type label.
    pub fn product_type(&self) -> ProductType {
        let label = self
            .product
            .as_ref()
            .and_then(|product| product.product_type.as_deref())
            .unwrap_or_default();

        ProductType::from_label(label)
    }
}

/// Product
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Free-text product type label.
    #[serde(default, deserialize_with = "lenient")]
    pub product_type: Option<String>,
}

/// Product classification used by the discount rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductType {
    /// A bundle of three jars.
    JarBundle,

    /// A single jar of honey.
    Honey,

    /// Anything else.
    Other,
}

impl ProductType {
    /// Classify a product type label, ignoring case.
    pub fn from_label(label: &str) -> Self {
        match label.to_lowercase().as_str() {
            JAR_BUNDLE_LABEL => Self::JarBundle,
            HONEY_LABEL => Self::Honey,
            _ => Self::Other,
        }
    }
}

/// Deserialize merchandise, treating an untagged or unreadable object as [`Merchandise::Other`].
pub(crate) fn lenient_merchandise<'de, D>(
    deserializer: D,
) -> Result<Option<Merchandise>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;

    Ok(value.map(|value| {
        Merchandise::deserialize(value).unwrap_or_else(|err| {
            tracing::debug!(error = %err, "unreadable merchandise treated as non-product");

            Merchandise::Other
        })
    }))
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct Wrapper {
        #[serde(default, deserialize_with = "lenient_merchandise")]
        merchandise: Option<Merchandise>,
    }

    fn parse(json: &str) -> Result<Option<Merchandise>, serde_json::Error> {
        Ok(serde_json::from_str::<Wrapper>(json)?.merchandise)
    }

    #[test]
    fn labels_are_case_insensitive() {
        assert_eq!(ProductType::from_label("Jar-Bundle"), ProductType::JarBundle);
        assert_eq!(ProductType::from_label("JAR-BUNDLE"), ProductType::JarBundle);
        assert_eq!(ProductType::from_label("HoNeY"), ProductType::Honey);
    }

    #[test]
    fn unknown_and_empty_labels_are_other() {
        assert_eq!(ProductType::from_label("candle"), ProductType::Other);
        assert_eq!(ProductType::from_label(""), ProductType::Other);
        assert_eq!(ProductType::from_label(" honey"), ProductType::Other);
    }

    #[test]
    fn variant_without_product_is_other() {
        assert_eq!(ProductVariant::default().product_type(), ProductType::Other);
    }

    #[test]
    fn product_variant_is_read() -> TestResult {
        let merchandise = parse(
            r#"{"merchandise":{"__typename":"ProductVariant","product":{"productType":"honey"}}}"#,
        )?;

        assert_eq!(
            merchandise,
            Some(Merchandise::ProductVariant(ProductVariant::with_type("honey")))
        );

        Ok(())
    }

    #[test]
    fn other_typename_is_other() -> TestResult {
        let merchandise = parse(r#"{"merchandise":{"__typename":"CustomProduct","title":"x"}}"#)?;

        assert_eq!(merchandise, Some(Merchandise::Other));

        Ok(())
    }

    #[test]
    fn missing_typename_is_other() -> TestResult {
        let merchandise = parse(r#"{"merchandise":{"product":{"productType":"honey"}}}"#)?;

        assert_eq!(merchandise, Some(Merchandise::Other));

        Ok(())
    }

    #[test]
    fn malformed_product_type_is_absent() -> TestResult {
        let merchandise =
            parse(r#"{"merchandise":{"__typename":"ProductVariant","product":{"productType":7}}}"#)?;

        assert_eq!(
            merchandise,
            Some(Merchandise::ProductVariant(ProductVariant {
                product: Some(Product { product_type: None }),
            }))
        );

        Ok(())
    }

    #[test]
    fn malformed_product_is_absent() -> TestResult {
        let merchandise = parse(r#"{"merchandise":{"__typename":"ProductVariant","product":"x"}}"#)?;

        assert_eq!(
            merchandise,
            Some(Merchandise::ProductVariant(ProductVariant::default()))
        );
        assert_eq!(ProductVariant::default().product_type(), ProductType::Other);

        Ok(())
    }

    #[test]
    fn null_and_missing_merchandise_are_absent() -> TestResult {
        assert_eq!(parse(r#"{"merchandise":null}"#)?, None);
        assert_eq!(parse("{}")?, None);

        Ok(())
    }
}
