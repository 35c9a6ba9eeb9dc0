use super::aggregate::{Product, ProductKey};
use serde::Deserialize;
use std::collections::BTreeMap;

/// Immutable product catalog, keyed by catalog key.
///
/// Built once from the site configuration and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    products: BTreeMap<ProductKey, Product>,
}

impl Catalog {
    pub fn new(products: impl IntoIterator<Item = (ProductKey, Product)>) -> Self {
        Self {
            products: products.into_iter().collect(),
        }
    }

    pub fn get(&self, key: &ProductKey) -> Option<&Product> {
        self.products.get(key)
    }

    pub fn contains(&self, key: &ProductKey) -> bool {
        self.products.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Products in key order
    pub fn iter(&self) -> impl Iterator<Item = (&ProductKey, &Product)> {
        self.products.iter()
    }

    /// Look up `key`, falling back to `default` when the key is unknown.
    ///
    /// Returns the key actually used together with its record, or `None` only
    /// when `default` is missing as well.
    pub fn resolve(
        &self,
        key: &ProductKey,
        default: &ProductKey,
    ) -> Option<(&ProductKey, &Product)> {
        self.products
            .get_key_value(key)
            .or_else(|| self.products.get_key_value(default))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(title: &str) -> Product {
        Product {
            title: title.into(),
            category: "Wool".into(),
            price: "1 PKR".into(),
            description: String::new(),
            image: format!("Images/{title}.jpg"),
        }
    }

    fn catalog() -> Catalog {
        Catalog::new([
            (ProductKey::from("formal"), product("Trouser")),
            (ProductKey::from("outerwear"), product("Trench")),
        ])
    }

    #[test]
    fn test_resolve_known_key() {
        let catalog = catalog();
        let (key, found) = catalog
            .resolve(&"outerwear".into(), &"formal".into())
            .unwrap();
        assert_eq!(key.as_str(), "outerwear");
        assert_eq!(found.title, "Trench");
    }

    #[test]
    fn test_resolve_unknown_key_uses_default() {
        let catalog = catalog();
        let (key, found) = catalog.resolve(&"nope".into(), &"formal".into()).unwrap();
        assert_eq!(key.as_str(), "formal");
        assert_eq!(found.title, "Trouser");
    }

    #[test]
    fn test_resolve_without_default() {
        assert!(catalog().resolve(&"nope".into(), &"gone".into()).is_none());
    }

    #[test]
    fn test_resolved_record_outlives_lookup_keys() {
        let catalog = catalog();
        let found = {
            let requested = ProductKey::from("formal");
            let default = ProductKey::from("outerwear");
            catalog.resolve(&requested, &default).map(|(_, p)| p)
        };
        assert_eq!(found.map(|p| p.title.as_str()), Some("Trouser"));
    }

    #[test]
    fn test_iter_is_key_ordered() {
        let keys: Vec<_> = catalog().iter().map(|(k, _)| k.to_string()).collect();
        assert_eq!(keys, vec!["formal", "outerwear"]);
    }
}
