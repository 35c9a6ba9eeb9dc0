use serde::{Deserialize, Serialize};

/// Mutually exclusive group of size options.
///
/// At most one option is active; none is active until the first selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeOptionSet {
    labels: Vec<String>,
    active: Option<usize>,
}

impl SizeOptionSet {
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
            active: None,
        }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Mark `index` active and every other option inactive.
    ///
    /// Out-of-range indexes leave the set untouched and return `false`.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.labels.len() {
            return false;
        }
        self.active = Some(index);
        true
    }

    pub fn select_label(&mut self, label: &str) -> bool {
        match self.labels.iter().position(|l| l == label) {
            Some(index) => self.select(index),
            None => false,
        }
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn active_label(&self) -> Option<&str> {
        self.active
            .and_then(|i| self.labels.get(i))
            .map(String::as_str)
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sizes() -> SizeOptionSet {
        SizeOptionSet::new(["S", "M", "L", "XL"])
    }

    #[test]
    fn test_nothing_active_initially() {
        let set = sizes();
        assert_eq!(set.active_index(), None);
        assert_eq!(set.active_label(), None);
    }

    #[test]
    fn test_select_label() {
        let mut set = sizes();
        assert!(set.select_label("M"));
        assert_eq!(set.active_label(), Some("M"));
        assert!(!set.select_label("XXL"));
        assert_eq!(set.active_label(), Some("M"));
    }

    #[test]
    fn test_out_of_range_is_ignored() {
        let mut set = sizes();
        set.select(2);
        assert!(!set.select(10));
        assert_eq!(set.active_index(), Some(2));
    }

    #[test]
    fn test_deserialized_out_of_range_active_has_no_label() {
        let set: SizeOptionSet =
            toml::from_str("labels = [\"S\", \"M\"]\nactive = 5\n").unwrap();
        assert_eq!(set.active_index(), Some(5));
        assert_eq!(set.active_label(), None);
    }

    proptest! {
        #[test]
        fn last_click_wins(clicks in prop::collection::vec(0usize..4, 1..32)) {
            let mut set = sizes();
            for &i in &clicks {
                set.select(i);
            }
            let last = *clicks.last().unwrap();
            let active: Vec<_> = (0..4).filter(|&i| set.is_active(i)).collect();
            prop_assert_eq!(active, vec![last]);
        }
    }
}
