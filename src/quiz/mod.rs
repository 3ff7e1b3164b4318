pub mod page;
pub mod search;
pub mod selection;

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, sqlx::FromRow)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Category {
    pub id: i64,
    #[sqlx(rename = "type")]
    pub kind: String,
}

/// Category id -> type label, serialized as a JSON object keyed by id.
pub type CategoryMap = BTreeMap<i64, String>;

pub fn category_map(categories: Vec<Category>) -> CategoryMap {
    categories
        .into_iter()
        .map(|category| (category.id, category.kind))
        .collect()
}

/// A question that passed validation and is ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

/// Category identifier as clients send it: either `3` or `"3"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryId(pub i64);

impl<'de> Deserialize<'de> for CategoryId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(i64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(id) => Ok(CategoryId(id)),
            Raw::Text(text) => text
                .trim()
                .parse::<i64>()
                .map(CategoryId)
                .map_err(|_| serde::de::Error::custom(format!("invalid category id {:?}", text))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_id_accepts_numbers_and_numeric_text() {
        let ids: Vec<CategoryId> = serde_json::from_str(r#"[4, "2", " 6 ", 0]"#).unwrap();
        assert_eq!(
            ids,
            vec![CategoryId(4), CategoryId(2), CategoryId(6), CategoryId(0)]
        );
    }

    #[test]
    fn category_id_rejects_other_shapes() {
        assert!(serde_json::from_str::<CategoryId>(r#""science""#).is_err());
        assert!(serde_json::from_str::<CategoryId>("1.5").is_err());
        assert!(serde_json::from_str::<CategoryId>("null").is_err());
        assert!(serde_json::from_str::<CategoryId>(r#"{"id": 1}"#).is_err());
    }

    #[test]
    fn category_map_serializes_keyed_by_id() {
        let map = category_map(vec![
            Category { id: 2, kind: "Art".to_string() },
            Category { id: 1, kind: "Science".to_string() },
        ]);
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"1":"Science","2":"Art"}"#);
    }
}
