//! The order-then-window step shared by every listing endpoint.

use pagination::{Page, PageRequest};

use super::{ElectionError, SortSpec, SortWhitelist};

/// Sort keys plus the page window requested by a client.
///
/// # Examples
/// ```
/// use backend::domain::{Listing, SortOrder, SortSpec, SortWhitelist};
/// use pagination::PageRequest;
///
/// let whitelist = SortWhitelist::<u32>::new().by_key("value", |v| *v);
/// let listing = Listing::new(
///     SortSpec::by(SortOrder::desc("value")),
///     PageRequest::new(0, 2).expect("non-zero size"),
/// );
/// let page = listing.page_of(vec![3, 9, 1, 7], &whitelist).expect("known key");
/// assert_eq!(page.content(), &[9, 7]);
/// assert_eq!(page.total_elements(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    sort: SortSpec,
    page: PageRequest,
}

impl Listing {
    /// Combine sort keys and a page window.
    #[must_use]
    pub const fn new(sort: SortSpec, page: PageRequest) -> Self {
        Self { sort, page }
    }

    /// Requested sort keys.
    #[must_use]
    pub const fn sort(&self) -> &SortSpec {
        &self.sort
    }

    /// Requested page window.
    #[must_use]
    pub const fn page(&self) -> PageRequest {
        self.page
    }

    /// Order `items` and cut the requested page, keeping totals.
    ///
    /// # Errors
    /// Returns [`ElectionError::InvalidSortProperty`] when the primary sort
    /// key is not in `whitelist`.
    pub fn page_of<T>(
        &self,
        items: Vec<T>,
        whitelist: &SortWhitelist<T>,
    ) -> Result<Page<T>, ElectionError> {
        let ordered = whitelist.order(items, &self.sort)?;
        Ok(Page::from_ordered(ordered, self.page))
    }

    /// Order `items` and return only the requested window.
    ///
    /// # Errors
    /// See [`Listing::page_of`].
    pub fn window_of<T>(
        &self,
        items: Vec<T>,
        whitelist: &SortWhitelist<T>,
    ) -> Result<Vec<T>, ElectionError> {
        Ok(self.page_of(items, whitelist)?.into_content())
    }
}
