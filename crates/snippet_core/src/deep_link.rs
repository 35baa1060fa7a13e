use url::Url;

use crate::Snippet;

const LANGUAGE_PARAM: &str = "language";
const ID_PARAM: &str = "id";

/// `(language, id)` pair carried in a shareable URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeepLink {
    pub language: String,
    pub id: String,
}

impl DeepLink {
    pub fn new(language: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            id: id.into(),
        }
    }

    pub fn for_snippet(snippet: &Snippet) -> Self {
        Self::new(&snippet.language, &snippet.id)
    }

    /// Read both parameters from a full URL. Missing or empty values yield `None`.
    pub fn from_url(url: &Url) -> Option<Self> {
        let mut language = None;
        let mut id = None;
        for (key, value) in url.query_pairs() {
            match key.as_ref() {
                LANGUAGE_PARAM if language.is_none() => language = Some(value.into_owned()),
                ID_PARAM if id.is_none() => id = Some(value.into_owned()),
                _ => {}
            }
        }
        match (language, id) {
            (Some(language), Some(id)) if !language.is_empty() && !id.is_empty() => {
                Some(Self { language, id })
            }
            _ => None,
        }
    }

    /// Accepts a full URL, `?language=..&id=..`, or the bare query.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if let Ok(url) = Url::parse(input) {
            return Self::from_url(&url);
        }
        let query = input.strip_prefix('?').unwrap_or(input);
        let mut base = Url::parse("local:/").ok()?;
        base.set_query(Some(query));
        Self::from_url(&base)
    }

    /// `language=<lang>&id=<id>`, form-encoded.
    pub fn to_query(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .append_pair(LANGUAGE_PARAM, &self.language)
            .append_pair(ID_PARAM, &self.id)
            .finish()
    }

    /// `base` with its query replaced by this link.
    pub fn share_url(&self, base: &Url) -> Url {
        let mut url = base.clone();
        url.set_fragment(None);
        url.set_query(Some(&self.to_query()));
        url
    }

    pub fn matches(&self, snippet: &Snippet) -> bool {
        snippet.language == self.language && snippet.id == self.id
    }
}

/// First snippet in catalog order whose `(language, id)` equals `link`.
pub fn resolve<'a>(catalog: &'a [Snippet], link: &DeepLink) -> Option<&'a Snippet> {
    catalog.iter().find(|snippet| link.matches(snippet))
}
