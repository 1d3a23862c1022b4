use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Paginated envelope returned by the job API.
///
/// Metadata is kept as sent; nothing is checked beyond `results` being a list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Page<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous: Option<Value>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub results: Vec<T>,
    /// Any other pagination metadata the API sends
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl<T> Page<T> {
    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// `count` when the API sent it as a number
    pub fn total(&self) -> Option<u64> {
        self.count.as_ref()?.as_u64()
    }

    pub fn has_more(&self) -> bool {
        self.next.is_some()
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Job posting, kept exactly as the API returned it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobListing(pub Value);

/// Job category / function, kept exactly as the API returned it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PositionFunction(pub Value);

impl JobListing {
    pub fn id(&self) -> Option<&Value> {
        self.0.get("id")
    }

    pub fn title(&self) -> Option<&str> {
        first_str(&self.0, &["title", "name"])
    }
}

impl PositionFunction {
    pub fn id(&self) -> Option<&Value> {
        self.0.get("id")
    }

    pub fn name(&self) -> Option<&str> {
        first_str(&self.0, &["name", "title"])
    }
}

fn first_str<'a>(value: &'a Value, keys: &[&str]) -> Option<&'a str> {
    keys.iter().find_map(|key| value.get(*key)?.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_page_keeps_unknown_metadata() {
        let raw = json!({
            "count": 2,
            "next": "https://api.example.com/job/listings/?page=2",
            "previous": null,
            "total_pages": 7,
            "results": [{"id": 1, "title": "Engineer"}, {"id": 2}]
        });

        let page: Page<JobListing> = serde_json::from_value(raw).unwrap();

        assert_eq!(page.total(), Some(2));
        assert_eq!(page.len(), 2);
        assert!(page.has_more());
        assert_eq!(page.extra.get("total_pages"), Some(&json!(7)));
        assert_eq!(page.results[0].title(), Some("Engineer"));
        assert_eq!(page.results[1].title(), None);
    }

    #[test]
    fn test_page_tolerates_missing_fields() {
        let page: Page<PositionFunction> = serde_json::from_value(json!({})).unwrap();

        assert!(page.is_empty());
        assert!(!page.has_more());
        assert_eq!(page.total(), None);
    }

    #[test]
    fn test_metadata_of_any_type_is_accepted() {
        let raw = json!({"count": "3", "next": 2, "previous": {"page": 0}, "results": []});

        let page: Page<JobListing> = serde_json::from_value(raw).unwrap();

        assert_eq!(page.count, Some(json!("3")));
        assert_eq!(page.total(), None);
        assert_eq!(page.next, Some(json!(2)));
        assert!(page.has_more());
        assert_eq!(page.previous, Some(json!({"page": 0})));
    }

    #[test]
    fn test_null_results_is_empty() {
        let page: Page<JobListing> =
            serde_json::from_value(json!({"count": 0, "next": null, "results": null})).unwrap();

        assert!(page.is_empty());
        assert_eq!(page.total(), Some(0));
        assert!(!page.has_more());
    }

    #[test]
    fn test_missing_metadata_is_not_invented_on_output() {
        let raw = json!({"results": [{"id": 1}], "page_count": 1});
        let page: Page<JobListing> = serde_json::from_value(raw.clone()).unwrap();

        assert_eq!(serde_json::to_value(&page).unwrap(), raw);
    }

    #[test]
    fn test_records_are_untouched() {
        let raw = json!({"id": 9, "name": "Sales", "nested": {"a": [1, 2]}});
        let function: PositionFunction = serde_json::from_value(raw.clone()).unwrap();

        assert_eq!(function.name(), Some("Sales"));
        assert_eq!(function.id(), Some(&json!(9)));
        assert_eq!(serde_json::to_value(&function).unwrap(), raw);
    }
}
