use include_dir::{include_dir, Dir};
use serde::{Deserialize, Serialize};
use serde_json::from_str;

use crate::error::ContentError;

static TEXTS_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/content/texts");

/// Which collection of practice texts is active
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Category {
    #[default]
    Quotes,
    Paragraphs,
    Code,
}

impl Category {
    /// Cycling order used by the mode switcher
    pub const ALL: [Category; 3] = [Category::Quotes, Category::Paragraphs, Category::Code];

    pub fn index(self) -> usize {
        match self {
            Category::Quotes => 0,
            Category::Paragraphs => 1,
            Category::Code => 2,
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// The fixed, ordered texts of one category. Never mutated after load.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct TextCollection {
    pub name: String,
    pub texts: Vec<String>,
}

impl TextCollection {
    pub fn new(category: Category, texts: Vec<String>) -> Result<Self, ContentError> {
        let collection = Self {
            name: category.to_string(),
            texts,
        };
        collection.validate(category)?;
        Ok(collection)
    }

    /// A usable collection for `category` carries its name and at least one text
    pub fn validate(&self, category: Category) -> Result<(), ContentError> {
        if self.name != category.to_string() {
            return Err(ContentError::Mismatch {
                expected: category,
                found: self.name.clone(),
            });
        }
        if self.texts.is_empty() {
            return Err(ContentError::Empty(category));
        }
        Ok(())
    }

    /// Load the collection compiled into the binary for `category`
    pub fn embedded(category: Category) -> Result<Self, ContentError> {
        let file = TEXTS_DIR
            .get_file(format!("{category}.json"))
            .ok_or(ContentError::Missing(category))?;

        let contents = file
            .contents_utf8()
            .ok_or(ContentError::Encoding { category })?;

        let collection: TextCollection =
            from_str(contents).map_err(|source| ContentError::Parse { category, source })?;
        collection.validate(category)?;
        Ok(collection)
    }

    pub fn len(&self) -> usize {
        self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_embedded_collections_load() {
        for category in Category::ALL {
            let collection = TextCollection::embedded(category).unwrap();
            assert_eq!(collection.name, category.to_string());
            assert!(!collection.is_empty());
        }
    }

    #[test]
    fn test_embedded_collection_sizes() {
        assert_eq!(TextCollection::embedded(Category::Quotes).unwrap().len(), 5);
        assert_eq!(
            TextCollection::embedded(Category::Paragraphs).unwrap().len(),
            3
        );
        assert_eq!(TextCollection::embedded(Category::Code).unwrap().len(), 3);
    }

    #[test]
    fn test_code_snippets_keep_newlines() {
        let code = TextCollection::embedded(Category::Code).unwrap();
        assert!(code.texts.iter().all(|t| t.contains('\n')));
    }

    #[test]
    fn test_new_rejects_empty_collection() {
        let result = TextCollection::new(Category::Code, vec![]);
        assert_matches!(result, Err(ContentError::Empty(Category::Code)));
    }

    #[test]
    fn test_validate_rejects_wrong_name() {
        let collection = TextCollection::new(Category::Quotes, vec!["a".to_string()]).unwrap();
        assert_matches!(
            collection.validate(Category::Code),
            Err(ContentError::Mismatch { expected: Category::Code, ref found }) if found == "quotes"
        );
        assert_matches!(collection.validate(Category::Quotes), Ok(()));
    }

    #[test]
    fn test_collection_deserialization() {
        let json_data = r#"
        {
            "name": "quotes",
            "texts": ["one", "two"]
        }
        "#;

        let collection: TextCollection = from_str(json_data).unwrap();
        assert_eq!(collection.name, "quotes");
        assert_eq!(collection.texts, vec!["one", "two"]);
    }

    #[test]
    fn test_category_display_is_lowercase() {
        assert_eq!(Category::Quotes.to_string(), "quotes");
        assert_eq!(Category::Paragraphs.to_string(), "paragraphs");
        assert_eq!(Category::Code.to_string(), "code");
    }

    #[test]
    fn test_category_cycling() {
        assert_eq!(Category::Quotes.next(), Category::Paragraphs);
        assert_eq!(Category::Code.next(), Category::Quotes);
        assert_eq!(Category::Quotes.previous(), Category::Code);
        for category in Category::ALL {
            assert_eq!(category.next().previous(), category);
        }
    }

    #[test]
    fn test_category_serde_names() {
        let json = serde_json::to_string(&Category::Paragraphs).unwrap();
        assert_eq!(json, "\"paragraphs\"");
        let parsed: Category = from_str("\"code\"").unwrap();
        assert_eq!(parsed, Category::Code);
    }
}
