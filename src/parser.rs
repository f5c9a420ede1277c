//! Line-oriented parser for awesome-list markdown.
//!
//! Recognized structure:
//!
//! - `# Title` (first one only) followed by a description line; badge lines
//!   (`[![...`) between the two are skipped
//! - `## Category`
//! - `### Subcategory` (ignored until a category is open)
//! - `- [Name](url) - description ([Label](url)) `License` `Lang``
//!
//! Links on any line whose label or url mentions contributing, issues, pull
//! requests, donations or templates are also collected as about links.
//!
//! Every other line is ignored. Items listed before any `###` heading land in
//! an implicit [`IMPLICIT_SUBCATEGORY`] subcategory created on first use.

use regex::Regex;
use std::sync::LazyLock;

use crate::classify::classify_tags;
use crate::ident::{slugify, stable_id};
use crate::model::{
    AboutLink, Category, Document, IMPLICIT_SUBCATEGORY, Item, Links, PLACEHOLDER, Subcategory,
};

/// Substrings marking a link as being about the list rather than a tool.
const ABOUT_KEYWORDS: &[&str] = &["contribut", "issue", "pull", "donat", "template"];

#[allow(clippy::unwrap_used)]
static H1: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#\s+(.+?)\s*$").unwrap());
#[allow(clippy::unwrap_used)]
static H2: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^##\s+(.+?)\s*$").unwrap());
#[allow(clippy::unwrap_used)]
static H3: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^###\s+(.+?)\s*$").unwrap());
#[allow(clippy::unwrap_used)]
static ITEM_START: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*[-*+]\s+\[").unwrap());
#[allow(clippy::unwrap_used)]
static ITEM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*[-*+]\s+\[([^\]]+)\]\(([^)]+)\)\s*(?:[-–—:]\s*)?(.*)$").unwrap()
});
#[allow(clippy::unwrap_used)]
static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());
#[allow(clippy::unwrap_used)]
static CODE_SPAN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`]+)`").unwrap());
#[allow(clippy::unwrap_used)]
static LINK_GROUP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\(\s*\[[^\]]+\]\([^)]+\)(?:\s*,\s*\[[^\]]+\]\([^)]+\))*\s*\)").unwrap()
});
#[allow(clippy::unwrap_used)]
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Parses a whole markdown document.
///
/// Never fails: lines that don't fit the expected shapes are skipped.
pub fn parse_markdown(markdown: &str) -> Document {
    let lines: Vec<&str> = markdown.lines().collect();
    let (title, description) = parse_header(&lines);

    let mut context = ParseContext::new(Document {
        title,
        description,
        categories: Vec::new(),
        about_links: Vec::new(),
    });

    for (index, line) in lines.iter().enumerate() {
        context.feed_line(index + 1, line);
    }

    context.finish()
}

fn parse_header(lines: &[&str]) -> (String, String) {
    let title = lines
        .iter()
        .find_map(|line| H1.captures(line))
        .map(|caps| caps[1].trim().to_string())
        .unwrap_or_default();

    let description = lines
        .iter()
        .skip_while(|line| !line.starts_with("# "))
        .skip(1)
        .map(|line| line.trim())
        .find(|line| !line.is_empty() && !line.starts_with("[!["))
        .unwrap_or_default()
        .to_string();

    (title, description)
}

/// Mutable state of a single parse pass.
struct ParseContext {
    document: Document,
    category: Option<usize>,
    subcategory: Option<usize>,
}

impl ParseContext {
    const fn new(document: Document) -> Self {
        Self {
            document,
            category: None,
            subcategory: None,
        }
    }

    fn finish(self) -> Document {
        self.document
    }

    fn feed_line(&mut self, line_number: usize, line: &str) {
        self.harvest_about_links(line);

        if let Some(caps) = H2.captures(line) {
            self.open_category(caps[1].trim());
            return;
        }

        if let Some(caps) = H3.captures(line)
            && self.category.is_some()
        {
            self.open_subcategory(caps[1].trim());
            return;
        }

        if self.category.is_none() || !ITEM_START.is_match(line) {
            return;
        }

        match parse_entry(line) {
            Some(entry) => self.push_entry(entry),
            None => tracing::debug!(line = line_number, "skipping unrecognized list item"),
        }
    }

    /// Collects about links, keeping the first one seen for each url.
    fn harvest_about_links(&mut self, line: &str) {
        for caps in LINK.captures_iter(line) {
            let text = caps[1].trim();
            let url = caps[2].trim();
            if url.is_empty() || !is_about_link(text, url) {
                continue;
            }
            if self.document.about_links.iter().any(|l| l.url == url) {
                continue;
            }
            self.document.about_links.push(AboutLink {
                text: text.to_string(),
                url: url.to_string(),
            });
        }
    }

    fn open_category(&mut self, title: &str) {
        self.document.categories.push(Category {
            id: slugify(title),
            title: title.to_string(),
            subcategories: Vec::new(),
        });
        self.category = Some(self.document.categories.len() - 1);
        self.subcategory = None;
    }

    fn open_subcategory(&mut self, title: &str) {
        let Some(category_index) = self.category else {
            return;
        };
        let category = &mut self.document.categories[category_index];

        category.subcategories.push(Subcategory {
            id: slugify(&format!("{}-{title}", category.title)),
            title: title.to_string(),
            items: Vec::new(),
        });
        self.subcategory = Some(category.subcategories.len() - 1);
    }

    fn push_entry(&mut self, entry: Entry) {
        let Some(category_index) = self.category else {
            return;
        };

        if self.subcategory.is_none() {
            self.open_subcategory(IMPLICIT_SUBCATEGORY);
        }
        let Some(subcategory_index) = self.subcategory else {
            return;
        };

        let category = &mut self.document.categories[category_index];
        let subcategory = &mut category.subcategories[subcategory_index];

        let id = stable_id(&[
            category.title.as_str(),
            subcategory.title.as_str(),
            entry.name.as_str(),
            entry.url.as_str(),
        ]);
        subcategory.items.push(entry.into_item(id));
    }
}

/// A list item line, before it is attached to the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    name: String,
    url: String,
    description: String,
    links: Links,
    licenses: Vec<String>,
    langs: Vec<String>,
}

impl Entry {
    fn into_item(self, id: String) -> Item {
        Item {
            id,
            name: self.name,
            url: self.url,
            description_en: self.description,
            description_fr: String::new(),
            links: self.links,
            licenses: self.licenses,
            langs: self.langs,
        }
    }
}

/// Parses one `- [Name](url) rest` line.
///
/// Returns `None` for lines that don't match, and for entries pointing at
/// anchors, relative paths or mail addresses.
fn parse_entry(line: &str) -> Option<Entry> {
    let caps = ITEM.captures(line)?;
    let name = caps[1].trim().to_string();
    let url = caps[2].trim().to_string();
    let rest = caps.get(3).map_or("", |m| m.as_str()).trim();

    if is_local_url(&url) {
        return None;
    }

    let tags: Vec<&str> = CODE_SPAN
        .captures_iter(rest)
        .filter_map(|c| c.get(1).map(|m| m.as_str()))
        .collect();
    let classification = classify_tags(&tags);

    let mut links = Links::default();
    for caps in LINK.captures_iter(rest) {
        let label = caps[1].trim();
        let link_url = caps[2].trim();
        if link_url.is_empty() || link_url == url {
            continue;
        }
        links.insert(label.to_string(), link_url.to_string());
    }

    Some(Entry {
        name,
        url,
        description: clean_description(rest),
        links,
        licenses: classification.licenses,
        langs: classification.langs,
    })
}

fn is_about_link(text: &str, url: &str) -> bool {
    let haystack = format!("{text} {url}").to_lowercase();
    ABOUT_KEYWORDS.iter().any(|k| haystack.contains(k))
}

fn is_local_url(url: &str) -> bool {
    ["#", "./", "/", "mailto:"]
        .iter()
        .any(|prefix| url.starts_with(prefix))
}

/// Strips links and tags from the text after the item link.
///
/// A parenthesized group holding only links, like `([Demo](...), [Source](...))`,
/// is removed as a whole so no empty `()` is left behind.
fn clean_description(rest: &str) -> String {
    let text = LINK_GROUP.replace_all(rest, "");
    let text = LINK.replace_all(&text, "");
    let text = CODE_SPAN.replace_all(&text, "");
    let text = WHITESPACE.replace_all(&text, " ");
    let text = text.trim();

    if text.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        text.to_string()
    }
}
