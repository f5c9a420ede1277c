//! Document tree produced by the parser and written out as JSON.

use serde::{Serialize, Serializer};

/// Description used when an entry has no text of its own.
pub const PLACEHOLDER: &str = "—";

/// Title of the subcategory created for items listed directly under a category.
pub const IMPLICIT_SUBCATEGORY: &str = "General";

/// The whole exported list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    pub title: String,
    pub description: String,
    pub categories: Vec<Category>,
    /// Contribution and project links found anywhere in the list.
    #[serde(rename = "aboutLinks")]
    pub about_links: Vec<AboutLink>,
}

impl Document {
    /// Iterates over every item in document order.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.categories
            .iter()
            .flat_map(|c| &c.subcategories)
            .flat_map(|s| &s.items)
    }

    /// Mutable variant of [`Document::items`], used by the translation pass.
    pub fn items_mut(&mut self) -> impl Iterator<Item = &mut Item> {
        self.categories
            .iter_mut()
            .flat_map(|c| &mut c.subcategories)
            .flat_map(|s| &mut s.items)
    }

    pub fn item_count(&self) -> usize {
        self.items().count()
    }
}

/// A link about the list itself (contributing guide, issue tracker, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AboutLink {
    pub text: String,
    pub url: String,
}

/// A `##` section of the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: String,
    pub title: String,
    pub subcategories: Vec<Subcategory>,
}

/// A `###` section, or the implicit [`IMPLICIT_SUBCATEGORY`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subcategory {
    pub id: String,
    pub title: String,
    pub items: Vec<Item>,
}

/// One list entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub url: String,
    pub description_en: String,
    /// Empty until the translation pass runs.
    pub description_fr: String,
    pub links: Links,
    pub licenses: Vec<String>,
    pub langs: Vec<String>,
}

/// Secondary links of an item, keyed by label.
///
/// Keeps insertion order. Re-inserting a label replaces its url but keeps the
/// position of the first occurrence. Serialized as a JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Links(Vec<(String, String)>);

impl Links {
    pub fn insert(&mut self, label: String, url: String) {
        if let Some(entry) = self.0.iter_mut().find(|(l, _)| *l == label) {
            entry.1 = url;
        } else {
            self.0.push((label, url));
        }
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, url)| url.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(l, u)| (l.as_str(), u.as_str()))
    }

    pub const fn len(&self) -> usize {
        self.0.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for Links {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(label, url)| (label, url)))
    }
}
