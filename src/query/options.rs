//! Typed listing and search options parsed from raw query parameters.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::errors::AppError;

const SORT_TOKENS: &str = "id-asc, id-desc, name-asc, name-desc";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    #[default]
    Id,
    /// Orders on the inlined form name.
    Name,
}

impl SortBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Id => "id",
            SortBy::Name => "name",
        }
    }

    pub fn column(&self) -> &'static str {
        match self {
            SortBy::Id => "id",
            SortBy::Name => "form_name",
        }
    }
}

impl FromStr for SortBy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(SortBy::Id),
            "name" => Ok(SortBy::Name),
            _ => Err(invalid_sort(s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

impl FromStr for SortOrder {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(invalid_sort(s)),
        }
    }
}

/// A `<field>-<order>` sort token such as `name-asc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sort {
    pub by: SortBy,
    pub order: SortOrder,
}

impl FromStr for Sort {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (by, order) = s.split_once('-').ok_or_else(|| invalid_sort(s))?;
        Ok(Sort {
            by: by.parse().map_err(|_| invalid_sort(s))?,
            order: order.parse().map_err(|_| invalid_sort(s))?,
        })
    }
}

impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.by.as_str(), self.order.as_str())
    }
}

fn invalid_sort(token: &str) -> AppError {
    AppError::Validation(format!(
        "sort must be one of: {}; got '{}'",
        SORT_TOKENS, token
    ))
}

/// Options for the sorted, optionally paginated listing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListOptions {
    pub sort: Sort,
    /// Always positive when present.
    pub limit: Option<u32>,
    pub offset: u32,
}

impl ListOptions {
    pub fn from_params(params: &HashMap<String, String>) -> Result<Self, AppError> {
        let sort = match params.get("sort") {
            Some(token) => token.parse()?,
            None => Sort::default(),
        };

        let limit = match params.get("limit") {
            Some(raw) => match parse_count("limit", raw)? {
                0 => {
                    return Err(AppError::Validation(
                        "limit must be a positive integer".to_string(),
                    ))
                }
                n => Some(n),
            },
            None => None,
        };

        let offset = match params.get("offset") {
            Some(raw) => parse_count("offset", raw)?,
            None => 0,
        };

        Ok(Self {
            sort,
            limit,
            offset,
        })
    }

    /// Relative link to the same listing at another offset.
    pub fn link(&self, path: &str, limit: u32, offset: u32) -> String {
        format!(
            "{}?sort={}&limit={}&offset={}",
            path, self.sort, limit, offset
        )
    }
}

/// Options for the free-text search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOptions {
    pub query: String,
    /// `Some(0)` yields nothing; `None` is unbounded.
    pub limit: Option<u32>,
}

impl SearchOptions {
    pub fn from_params(params: &HashMap<String, String>) -> Result<Self, AppError> {
        let query = params
            .get("query")
            .map(|q| q.trim())
            .filter(|q| !q.is_empty())
            .ok_or_else(|| {
                AppError::Validation("query must be provided and not be empty".to_string())
            })?
            .to_string();

        let limit = params
            .get("limit")
            .map(|raw| parse_count("limit", raw))
            .transpose()?;

        Ok(Self { query, limit })
    }

    /// `LIKE` pattern matching the query anywhere, with wildcards escaped for `ESCAPE '\'`.
    pub fn like_pattern(&self) -> String {
        let mut pattern = String::with_capacity(self.query.len() + 2);
        pattern.push('%');
        for c in self.query.chars() {
            if matches!(c, '%' | '_' | '\\') {
                pattern.push('\\');
            }
            pattern.push(c);
        }
        pattern.push('%');
        pattern
    }
}

fn parse_count(name: &str, raw: &str) -> Result<u32, AppError> {
    raw.trim().parse::<u32>().map_err(|_| {
        AppError::Validation(format!(
            "{} must be a non-negative integer, got '{}'",
            name, raw
        ))
    })
}
