//! Property-based ordering against per-entity whitelists.
//!
//! Clients name sort properties as strings. Each entity kind publishes a
//! [`SortWhitelist`] mapping the names it accepts to comparators, so an
//! unknown name fails closed with [`ElectionError::InvalidSortProperty`]
//! instead of being silently ignored.
//!
//! Only the first entry of a [`SortSpec`] is applied. Later entries are
//! carried for logging but never looked up.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::ElectionError;

/// Direction of a single sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    /// Smallest first.
    #[default]
    Asc,
    /// Largest first.
    Desc,
}

impl FromStr for SortDirection {
    type Err = ElectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if token.eq_ignore_ascii_case("asc") {
            Ok(Self::Asc)
        } else if token.eq_ignore_ascii_case("desc") {
            Ok(Self::Desc)
        } else {
            Err(ElectionError::invalid_sort_property(s))
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        })
    }
}

/// One `(property, direction)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SortOrder {
    property: String,
    direction: SortDirection,
}

impl SortOrder {
    /// Build an order from its parts.
    pub fn new(property: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            property: property.into(),
            direction,
        }
    }

    /// Ascending order on `property`.
    pub fn asc(property: impl Into<String>) -> Self {
        Self::new(property, SortDirection::Asc)
    }

    /// Descending order on `property`.
    pub fn desc(property: impl Into<String>) -> Self {
        Self::new(property, SortDirection::Desc)
    }

    /// Parse the `property[,direction]` form used by the `sort` query
    /// parameter.
    ///
    /// # Errors
    /// Returns [`ElectionError::InvalidSortProperty`] when the property is
    /// empty or the direction is neither `asc` nor `desc`.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::{SortDirection, SortOrder};
    ///
    /// let order = SortOrder::parse("votes,DESC").expect("valid order");
    /// assert_eq!(order.property(), "votes");
    /// assert_eq!(order.direction(), SortDirection::Desc);
    /// assert!(SortOrder::parse("votes,sideways").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self, ElectionError> {
        let (property, direction) = match raw.split_once(',') {
            Some((property, direction)) => (property.trim(), direction.parse()?),
            None => (raw.trim(), SortDirection::Asc),
        };
        if property.is_empty() {
            return Err(ElectionError::invalid_sort_property(raw));
        }
        Ok(Self::new(property, direction))
    }

    /// Requested property name.
    #[must_use]
    pub fn property(&self) -> &str {
        &self.property
    }

    /// Requested direction.
    #[must_use]
    pub const fn direction(&self) -> SortDirection {
        self.direction
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.property, self.direction)
    }
}

/// Ordered sequence of sort keys; empty means "keep input order".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SortSpec {
    orders: Vec<SortOrder>,
}

impl SortSpec {
    /// A spec that leaves items untouched.
    #[must_use]
    pub fn unsorted() -> Self {
        Self::default()
    }

    /// A spec with a single key.
    #[must_use]
    pub fn by(order: SortOrder) -> Self {
        Self {
            orders: vec![order],
        }
    }

    /// Append a further key.
    #[must_use]
    pub fn then(mut self, order: SortOrder) -> Self {
        self.orders.push(order);
        self
    }

    /// Parse repeated `sort` parameter values, skipping blank ones.
    ///
    /// Only the first entry drives ordering, so only it is validated. Later
    /// entries that do not parse are dropped.
    ///
    /// # Errors
    /// Propagates a [`SortOrder::parse`] failure of the first entry.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::{SortOrder, SortSpec};
    ///
    /// let spec = SortSpec::parse(["votes,desc", "name,sideways"]).expect("first entry valid");
    /// assert_eq!(spec.orders(), &[SortOrder::desc("votes")]);
    /// assert!(SortSpec::parse(["votes,sideways", "name"]).is_err());
    /// ```
    pub fn parse<'a>(raw: impl IntoIterator<Item = &'a str>) -> Result<Self, ElectionError> {
        let mut entries = raw.into_iter().filter(|value| !value.trim().is_empty());
        let Some(first) = entries.next() else {
            return Ok(Self::unsorted());
        };
        let mut orders = vec![SortOrder::parse(first)?];
        orders.extend(entries.filter_map(|entry| SortOrder::parse(entry).ok()));
        Ok(Self { orders })
    }

    /// Use `fallback` when no keys were requested.
    #[must_use]
    pub fn or(self, fallback: Self) -> Self {
        if self.is_empty() { fallback } else { self }
    }

    /// Whether no keys were requested.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// All requested keys in order.
    #[must_use]
    pub fn orders(&self) -> &[SortOrder] {
        &self.orders
    }

    /// The key that drives ordering.
    #[must_use]
    pub fn primary(&self) -> Option<&SortOrder> {
        self.orders.first()
    }
}

type Comparator<T> = Box<dyn Fn(&T, &T) -> Ordering + Send + Sync>;

/// The sortable properties of one entity kind.
///
/// # Examples
/// ```
/// use backend::domain::{SortOrder, SortSpec, SortWhitelist};
///
/// let whitelist = SortWhitelist::<(u32, &str)>::new()
///     .by_key("id", |item| item.0)
///     .by_key("name", |item| item.1);
/// let spec = SortSpec::by(SortOrder::desc("id"));
/// let sorted = whitelist.order(vec![(1, "b"), (3, "a")], &spec).expect("known key");
/// assert_eq!(sorted, vec![(3, "a"), (1, "b")]);
/// ```
pub struct SortWhitelist<T> {
    comparators: Vec<(&'static str, Comparator<T>)>,
}

impl<T> Default for SortWhitelist<T> {
    fn default() -> Self {
        Self {
            comparators: Vec::new(),
        }
    }
}

impl<T> SortWhitelist<T> {
    /// An empty whitelist that rejects every property.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept `property`, ordering with `compare`.
    #[must_use]
    pub fn with(
        mut self,
        property: &'static str,
        compare: impl Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    ) -> Self
    where
        T: 'static,
    {
        self.comparators.push((property, Box::new(compare)));
        self
    }

    /// Accept `property`, ordering by the natural order of `key`.
    #[must_use]
    pub fn by_key<K: Ord + 'static>(
        self,
        property: &'static str,
        key: impl Fn(&T) -> K + Send + Sync + 'static,
    ) -> Self
    where
        T: 'static,
    {
        self.with(property, move |a, b| key(a).cmp(&key(b)))
    }

    /// Names accepted by this whitelist.
    pub fn properties(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.comparators.iter().map(|(name, _)| *name)
    }

    fn comparator(&self, property: &str) -> Result<&Comparator<T>, ElectionError> {
        self.comparators
            .iter()
            .find(|(name, _)| *name == property)
            .map(|(_, compare)| compare)
            .ok_or_else(|| ElectionError::invalid_sort_property(property))
    }

    /// Stable-sort `items` by the first key of `spec`.
    ///
    /// # Errors
    /// Returns [`ElectionError::InvalidSortProperty`] when the first key is
    /// not whitelisted.
    pub fn order(&self, mut items: Vec<T>, spec: &SortSpec) -> Result<Vec<T>, ElectionError> {
        let Some(primary) = spec.primary() else {
            return Ok(items);
        };
        let compare = self.comparator(primary.property())?;
        match primary.direction() {
            SortDirection::Asc => items.sort_by(|a, b| compare(a, b)),
            SortDirection::Desc => items.sort_by(|a, b| compare(b, a)),
        }
        Ok(items)
    }
}

/// Order `items` by `spec` using `whitelist`.
///
/// # Errors
/// See [`SortWhitelist::order`].
pub fn order<T>(
    items: Vec<T>,
    spec: &SortSpec,
    whitelist: &SortWhitelist<T>,
) -> Result<Vec<T>, ElectionError> {
    whitelist.order(items, spec)
}
