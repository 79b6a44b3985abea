use serde::{Deserialize, Serialize};

/// Generic API response wrapper used by the admin handlers and error responses
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response with data
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
            error: None,
        }
    }

    /// Create an error response
    pub fn error(message: impl Into<String>) -> Self {
        let msg = message.into();
        Self {
            success: false,
            message: msg.clone(),
            data: None,
            error: Some(msg),
        }
    }
}

/// `{ data, meta }` envelope used by the public read endpoints
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DataResponse<T, M = ListMeta> {
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<M>,
}

impl<T> DataResponse<T> {
    pub fn single(data: T) -> Self {
        Self { data, meta: None }
    }
}

impl<T> DataResponse<Vec<T>> {
    pub fn list(data: Vec<T>) -> Self {
        let meta = ListMeta::total(data.len());
        Self { data, meta: Some(meta) }
    }

    pub fn list_with(data: Vec<T>, meta: ListMeta) -> Self {
        Self { data, meta: Some(meta) }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct ListMeta {
    pub total: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pages: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl ListMeta {
    pub fn total(total: usize) -> Self {
        Self { total, ..Default::default() }
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn with_phase(mut self, phase: impl Into<String>) -> Self {
        self.phase = Some(phase.into());
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }
}

/// Page/limit pair resolved from query parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub limit: usize,
}

impl Pagination {
    /// Clamp raw query values: page >= 1, 1 <= limit <= max_limit
    pub fn resolve(page: Option<usize>, limit: Option<usize>, max_limit: usize) -> Self {
        Self {
            page: page.unwrap_or(1).max(1),
            limit: limit.unwrap_or(20).clamp(1, max_limit),
        }
    }

    /// Slice one page out of an already ordered list and build its meta block
    pub fn apply<T>(&self, items: Vec<T>) -> (Vec<T>, ListMeta) {
        let total = items.len();
        let pages = total.div_ceil(self.limit);
        let page_items = items
            .into_iter()
            .skip((self.page - 1).saturating_mul(self.limit))
            .take(self.limit)
            .collect();

        let meta = ListMeta {
            total,
            page: Some(self.page),
            limit: Some(self.limit),
            pages: Some(pages),
            ..Default::default()
        };
        (page_items, meta)
    }
}

/// Result of a finished game from one team's point of view
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MatchResult {
    Win,
    Loss,
    Draw,
}

impl MatchResult {
    /// Result for the side that scored `scored` and conceded `conceded`
    pub fn from_scores(scored: u32, conceded: u32) -> Self {
        match scored.cmp(&conceded) {
            std::cmp::Ordering::Greater => MatchResult::Win,
            std::cmp::Ordering::Less => MatchResult::Loss,
            std::cmp::Ordering::Equal => MatchResult::Draw,
        }
    }

    /// League points awarded for this result
    pub fn points(&self) -> u32 {
        match self {
            MatchResult::Win => 3,
            MatchResult::Draw => 1,
            MatchResult::Loss => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_clamps_inputs() {
        assert_eq!(Pagination::resolve(None, None, 50), Pagination { page: 1, limit: 20 });
        assert_eq!(Pagination::resolve(Some(0), Some(0), 50), Pagination { page: 1, limit: 1 });
        assert_eq!(Pagination::resolve(Some(3), Some(500), 50), Pagination { page: 3, limit: 50 });
    }

    #[test]
    fn test_pagination_slices_and_counts_pages() {
        let pagination = Pagination { page: 2, limit: 4 };
        let (items, meta) = pagination.apply((1..=10).collect::<Vec<_>>());
        assert_eq!(items, vec![5, 6, 7, 8]);
        assert_eq!(meta.total, 10);
        assert_eq!(meta.pages, Some(3));

        let past_end = Pagination { page: 9, limit: 4 };
        let (items, _) = past_end.apply((1..=10).collect::<Vec<_>>());
        assert!(items.is_empty());
    }

    #[test]
    fn test_match_result_points() {
        assert_eq!(MatchResult::from_scores(2, 0), MatchResult::Win);
        assert_eq!(MatchResult::from_scores(0, 2), MatchResult::Loss);
        assert_eq!(MatchResult::from_scores(1, 1).points(), 1);
        assert_eq!(MatchResult::Loss.points(), 0);
    }
}
