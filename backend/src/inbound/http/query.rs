//! Listing query parameters.
//!
//! `page`, `size` and the repeatable `sort` key are read from the raw query
//! string so that repeated `sort` entries keep their order.
//!
//! ```text
//! GET /api/v1/municipalities?page=1&size=50&sort=name,desc&sort=id
//! ```

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use futures_util::future::{Ready, ready};
use pagination::PageRequest;

use crate::domain::{ElectionError, Listing, SortSpec};

/// Per-endpoint page size and sort applied when the client sends none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListDefaults {
    size: usize,
    sort: &'static [&'static str],
}

impl ListDefaults {
    /// Defaults with a page size and sort entries in `property[,direction]`
    /// form.
    #[must_use]
    pub const fn new(size: usize, sort: &'static [&'static str]) -> Self {
        Self { size, sort }
    }
}

/// Municipality and polling station listings.
pub const REGION_LISTING: ListDefaults = ListDefaults::new(500, &["name,asc"]);
/// Constituency listings.
pub const CONSTITUENCY_LISTING: ListDefaults = ListDefaults::new(100, &["name,asc"]);
/// Party vote listings.
pub const VOTE_LISTING: ListDefaults = ListDefaults::new(500, &["votes,desc"]);
/// Party listings.
pub const PARTY_LISTING: ListDefaults = ListDefaults::new(20, &[]);
/// Post listings.
pub const POST_LISTING: ListDefaults = ListDefaults::new(20, &["createdAt,desc"]);

/// Decoded query string, kept as ordered key/value pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pairs: Vec<(String, String)>,
}

impl ListQuery {
    /// Decode a raw `application/x-www-form-urlencoded` query string.
    ///
    /// # Examples
    /// ```
    /// use backend::inbound::http::query::ListQuery;
    ///
    /// let query = ListQuery::parse("sort=votes,desc&sort=partyName&query=zetel%20winst");
    /// assert_eq!(query.all("sort").collect::<Vec<_>>(), ["votes,desc", "partyName"]);
    /// assert_eq!(query.first("query"), Some("zetel winst"));
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        Self {
            pairs: url::form_urlencoded::parse(raw.as_bytes())
                .into_owned()
                .collect(),
        }
    }

    /// First value of `key`.
    #[must_use]
    pub fn first(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Every value of `key`, in query order.
    pub fn all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.pairs
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    fn number(&self, key: &str, default: usize) -> Result<usize, ElectionError> {
        self.first(key).map_or(Ok(default), |raw| {
            raw.trim().parse().map_err(|_| {
                ElectionError::invalid_page_request(format!(
                    "{key} must be a non-negative integer, got '{raw}'"
                ))
            })
        })
    }

    /// Sort keys and page window, falling back to `defaults`.
    ///
    /// # Errors
    /// [`ElectionError::InvalidPageRequest`] for a non-numeric page or size
    /// or a zero size; [`ElectionError::InvalidSortProperty`] for a
    /// malformed first sort entry.
    pub fn listing(&self, defaults: ListDefaults) -> Result<Listing, ElectionError> {
        let index = self.number("page", 0)?;
        let size = self.number("size", defaults.size)?;
        let page = PageRequest::new(index, size)
            .map_err(|err| ElectionError::invalid_page_request(err.to_string()))?;
        Ok(Listing::new(self.sort(defaults)?, page))
    }

    /// Sort keys only, falling back to `defaults`.
    ///
    /// # Errors
    /// [`ElectionError::InvalidSortProperty`] for a malformed first sort
    /// entry.
    pub fn sort(&self, defaults: ListDefaults) -> Result<SortSpec, ElectionError> {
        let fallback = SortSpec::parse(defaults.sort.iter().copied())?;
        Ok(SortSpec::parse(self.all("sort"))?.or(fallback))
    }

    /// Election year, falling back to `default`.
    ///
    /// # Errors
    /// [`ElectionError::ElectionNotFound`] when the year is not a number.
    pub fn year(&self, default: u16) -> Result<u16, ElectionError> {
        self.first("year").map_or(Ok(default), |raw| {
            raw.trim().parse().map_err(|_| {
                ElectionError::election_not_found(format!("no election held in '{raw}'"))
            })
        })
    }
}

impl FromRequest for ListQuery {
    type Error = ElectionError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(Self::parse(req.query_string())))
    }
}
