use serde::Deserialize;

/// Prefix the feed puts in front of every snippet key.
pub const FEED_ID_PREFIX: &str = "30_";
/// First occurrence splits the doc comment from the code.
pub const CODE_MARKER: &str = "export ";
/// Description is the segment at this index after splitting the body on `*`.
const DESCRIPTION_SEGMENT: usize = 3;

/// One feed value as published: `{ "prefix": "...", "body": ["line", ...] }`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawEntry {
    pub prefix: String,
    #[serde(default)]
    pub body: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    pub id: String,
    pub language: String,
    pub name: String,
    pub raw_body: String,
    pub comment: String,
    pub code: String,
    pub description: Option<String>,
}

/// Turn a raw feed entry into a `Snippet`.
///
/// Returns `None` when the entry has no body lines; such entries are dropped
/// from the catalog instead of producing an empty card.
pub fn normalize(entry: &RawEntry, language: &str) -> Option<Snippet> {
    let lines = entry.body.as_deref().filter(|lines| !lines.is_empty())?;
    let raw_body = lines.join("\n");

    // Feed-specific: with a `/**` opener the fourth `*` segment is the
    // first doc line.
    let description = raw_body
        .split('*')
        .nth(DESCRIPTION_SEGMENT)
        .map(ToOwned::to_owned);

    let marker = raw_body.find(CODE_MARKER).unwrap_or(raw_body.len());
    let (comment, code) = raw_body.split_at(marker);

    Some(Snippet {
        id: entry.prefix.clone(),
        language: language.to_string(),
        name: display_name(&entry.prefix),
        comment: comment.to_string(),
        code: code.to_string(),
        description,
        raw_body,
    })
}

/// `30_chunk-array` -> `CHUNK`.
pub fn display_name(prefix: &str) -> String {
    let trimmed = prefix.strip_prefix(FEED_ID_PREFIX).unwrap_or(prefix);
    trimmed
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '_')
        .flat_map(char::to_uppercase)
        .collect()
}
