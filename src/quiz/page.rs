use serde::Deserialize;

pub const QUESTIONS_PER_PAGE: usize = 10;

/// Raw `?page=` query parameter. Kept as text so that junk falls back to the
/// first page instead of failing the request.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
}

impl PageQuery {
    /// 1-indexed page number. Absent, non-numeric, zero and negative values
    /// all mean page 1.
    pub fn number(&self) -> usize {
        self.page
            .as_deref()
            .and_then(|page| page.trim().parse::<usize>().ok())
            .filter(|page| *page >= 1)
            .unwrap_or(1)
    }
}

/// Returns the window of `items` for `page`. A page past the end is empty,
/// whether that is an error is up to the caller.
pub fn paginate<T>(items: Vec<T>, page: usize) -> Vec<T> {
    let start = page.max(1).saturating_sub(1).saturating_mul(QUESTIONS_PER_PAGE);
    items
        .into_iter()
        .skip(start)
        .take(QUESTIONS_PER_PAGE)
        .collect()
}
