use serde::{Deserialize, Deserializer};

/// The API is inconsistent about numbers: `current_page` arrives as `"1"`,
/// `page_count` as `25`, and `year` as either.
#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(serde_json::Number),
    Text(String),
}

impl NumberOrString {
    fn into_text(self) -> String {
        match self {
            NumberOrString::Number(n) => n.to_string(),
            NumberOrString::Text(s) => s,
        }
    }
}

/// Missing, null, or unparseable numbers all decode to `None`.
pub fn lenient_opt_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<NumberOrString> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|v| v.into_text().trim().parse::<u32>().ok()))
}

/// Text field that may be a number, null, missing or blank. Blank and "N/A"
/// collapse to `None` so views only have one "absent" case to handle.
pub fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<NumberOrString> = Option::deserialize(deserializer)?;
    Ok(raw
        .map(NumberOrString::into_text)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty() && s != "N/A"))
}

pub fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Sample {
        #[serde(default, deserialize_with = "lenient_opt_u32")]
        page: Option<u32>,
        #[serde(default, deserialize_with = "lenient_opt_u32")]
        per_page: Option<u32>,
        #[serde(default, deserialize_with = "lenient_text")]
        year: Option<String>,
        #[serde(default, deserialize_with = "null_as_empty")]
        tags: Vec<String>,
    }

    #[test]
    fn accepts_numbers_as_strings() {
        let s: Sample = serde_json::from_str(r#"{"page":"3","per_page":"10","year":1994}"#).unwrap();
        assert_eq!(s.page, Some(3));
        assert_eq!(s.per_page, Some(10));
        assert_eq!(s.year.as_deref(), Some("1994"));
    }

    #[test]
    fn blank_and_placeholder_text_is_absent() {
        let s: Sample = serde_json::from_str(r#"{"page":1,"year":"N/A","tags":null}"#).unwrap();
        assert_eq!(s.year, None);
        assert_eq!(s.per_page, None);
        assert!(s.tags.is_empty());

        let s: Sample = serde_json::from_str(r#"{"page":1,"year":"  "}"#).unwrap();
        assert_eq!(s.year, None);
    }

    #[test]
    fn unreadable_numbers_are_absent() {
        let s: Sample = serde_json::from_str(r#"{"page":"first","per_page":null}"#).unwrap();
        assert_eq!(s.page, None);
        assert_eq!(s.per_page, None);
    }
}
