//! Page-window pagination shared by the election backend listing endpoints.
//!
//! Listings are materialised in memory, ordered, and then cut into a single
//! page. This crate owns the two halves of that last step:
//!
//! - [`PageRequest`] validates the page index and size supplied by clients.
//! - [`paginate`] and [`Page::from_ordered`] window an ordered collection.
//!
//! Out-of-range requests are not errors. Asking for page 40 of a 10-element
//! collection yields an empty page so clients can walk pages until one comes
//! back empty.
//!
//! # Examples
//! ```
//! use pagination::{Page, PageRequest, paginate};
//!
//! let request = PageRequest::new(1, 2).expect("non-zero page size");
//! let items = ["a", "b", "c", "d", "e"];
//! assert_eq!(paginate(&items, request), &["c", "d"]);
//!
//! let page = Page::from_ordered(items.to_vec(), request);
//! assert_eq!(page.total_pages(), 3);
//! assert!(!page.is_last());
//! ```

use serde::{Deserialize, Serialize};

/// Largest page size honoured; larger requests are clamped to this value.
pub const MAX_PAGE_SIZE: usize = 2000;

/// Validation failures raised by [`PageRequest::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PageRequestError {
    /// The requested page size was zero.
    #[error("page size must be greater than zero")]
    ZeroPageSize,
}

/// Zero-based page index and a positive page size.
///
/// ## Invariants
/// - `size` is in `1..=MAX_PAGE_SIZE`.
/// - `index * size` may exceed any collection length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageRequest {
    index: usize,
    size: usize,
}

impl PageRequest {
    /// Build a request, clamping oversized pages to [`MAX_PAGE_SIZE`].
    ///
    /// # Errors
    /// Returns [`PageRequestError::ZeroPageSize`] when `size` is zero.
    ///
    /// # Examples
    /// ```
    /// use pagination::{MAX_PAGE_SIZE, PageRequest, PageRequestError};
    ///
    /// assert_eq!(PageRequest::new(0, 0), Err(PageRequestError::ZeroPageSize));
    /// let clamped = PageRequest::new(0, 10_000).expect("clamped");
    /// assert_eq!(clamped.size(), MAX_PAGE_SIZE);
    /// ```
    pub fn new(index: usize, size: usize) -> Result<Self, PageRequestError> {
        if size == 0 {
            return Err(PageRequestError::ZeroPageSize);
        }
        Ok(Self {
            index,
            size: size.min(MAX_PAGE_SIZE),
        })
    }

    /// Zero-based page index.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Number of items per page.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Position of the first item on this page, saturating on overflow.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.index.saturating_mul(self.size)
    }

    fn bounds(self, len: usize) -> (usize, usize) {
        let from = self.offset().min(len);
        let to = from.saturating_add(self.size).min(len);
        (from, to)
    }
}

/// Return the `[from, to)` window of `items` selected by `request`.
///
/// The input is only borrowed; the returned slice is empty when the request
/// starts past the end of the collection.
///
/// # Examples
/// ```
/// use pagination::{PageRequest, paginate};
///
/// let items = [1, 2, 3];
/// let past_end = PageRequest::new(5, 2).expect("valid request");
/// assert!(paginate(&items, past_end).is_empty());
/// ```
#[must_use]
pub fn paginate<T>(items: &[T], request: PageRequest) -> &[T] {
    let (from, to) = request.bounds(items.len());
    items.get(from..to).unwrap_or(&[])
}

/// A single page of an ordered listing plus the totals clients need to
/// render pagination controls.
///
/// Serialises as
/// `{"content":[...],"totalElements":n,"totalPages":n,"number":n,"size":n,"first":b,"last":b}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    content: Vec<T>,
    total_elements: usize,
    total_pages: usize,
    number: usize,
    size: usize,
    first: bool,
    last: bool,
}

impl<T> Page<T> {
    /// Window an already ordered collection, taking ownership of it so the
    /// selected items move into the page without cloning.
    #[must_use]
    pub fn from_ordered(items: Vec<T>, request: PageRequest) -> Self {
        let total_elements = items.len();
        let (from, to) = request.bounds(total_elements);
        let content: Vec<T> = items.into_iter().skip(from).take(to - from).collect();
        let total_pages = total_elements.div_ceil(request.size());
        Self {
            content,
            total_elements,
            total_pages,
            number: request.index(),
            size: request.size(),
            first: request.index() == 0,
            last: request.index().saturating_add(1) >= total_pages,
        }
    }

    /// Items on this page.
    #[must_use]
    pub fn content(&self) -> &[T] {
        &self.content
    }

    /// Consume the page, returning its items.
    #[must_use]
    pub fn into_content(self) -> Vec<T> {
        self.content
    }

    /// Number of items across all pages.
    #[must_use]
    pub const fn total_elements(&self) -> usize {
        self.total_elements
    }

    /// Number of pages at the requested size.
    #[must_use]
    pub const fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Zero-based index of this page.
    #[must_use]
    pub const fn number(&self) -> usize {
        self.number
    }

    /// Requested page size.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Whether this is the first page.
    #[must_use]
    pub const fn is_first(&self) -> bool {
        self.first
    }

    /// Whether no page follows this one.
    #[must_use]
    pub const fn is_last(&self) -> bool {
        self.last
    }

    /// Convert every item, keeping the totals.
    #[must_use]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            number: self.number,
            size: self.size,
            first: self.first,
            last: self.last,
        }
    }
}
