use crate::{Catalog, Snippet};

/// Typescript snippet whose `code` is `code_len` bytes long.
pub(crate) fn snippet(id: &str, code_len: usize) -> Snippet {
    let code = "x".repeat(code_len);
    Snippet {
        id: id.to_string(),
        language: "typescript".to_string(),
        name: id.to_uppercase(),
        raw_body: code.clone(),
        comment: String::new(),
        code,
        description: None,
    }
}

pub(crate) fn catalog_of(len: usize) -> Catalog {
    Catalog::from_unique((0..len).map(|i| snippet(&format!("30_s{i}"), i % 7)).collect())
}
