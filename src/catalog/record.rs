use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    DeFi,
    Nft,
    Infrastructure,
    Social,
    Gaming,
    Wallet,
}

impl Category {
    pub const ALL: [Self; 6] = [
        Self::DeFi,
        Self::Nft,
        Self::Gaming,
        Self::Infrastructure,
        Self::Wallet,
        Self::Social,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::DeFi => "DeFi",
            Self::Nft => "NFT",
            Self::Infrastructure => "Infrastructure",
            Self::Social => "Social",
            Self::Gaming => "Gaming",
            Self::Wallet => "Wallet",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.label() == label.trim())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn choices() -> impl Iterator<Item = Self> {
        std::iter::once(Self::All).chain(Category::ALL.into_iter().map(Self::Only))
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(category) => category.label(),
        }
    }

    pub fn accepts(self, category: Option<Category>) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => category == Some(wanted),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectRecord {
    pub name: String,
    pub url: String,
    pub description: Option<String>,
    pub category: Option<Category>,
}

impl ProjectRecord {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            description: None,
            category: None,
        }
    }
}

#[cfg(test)]
impl ProjectRecord {
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip_through_from_label() {
        for category in Category::ALL {
            assert_eq!(Category::from_label(category.label()), Some(category));
        }
        assert_eq!(Category::from_label("nft"), None);
        assert_eq!(Category::from_label("Lending"), None);
    }

    #[test]
    fn filter_chips_start_with_all() {
        let labels = CategoryFilter::choices()
            .map(CategoryFilter::label)
            .collect::<Vec<_>>();
        assert_eq!(
            labels,
            ["All", "DeFi", "NFT", "Gaming", "Infrastructure", "Wallet", "Social"]
        );
    }

    #[test]
    fn only_filter_rejects_uncategorized_records() {
        assert!(CategoryFilter::All.accepts(None));
        assert!(!CategoryFilter::Only(Category::Nft).accepts(None));
        assert!(CategoryFilter::Only(Category::Nft).accepts(Some(Category::Nft)));
        assert!(!CategoryFilter::Only(Category::Nft).accepts(Some(Category::DeFi)));
    }
}
