//! Offset/limit paging for product listings.

/// Page size used when the caller gives none, or a non-positive one.
pub const DEFAULT_LIMIT: i64 = 10;

/// A normalized page request: `limit > 0`, `offset >= 0`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Page {
    limit: i64,
    offset: i64,
}

impl Page {
    pub fn new(limit: i64, offset: i64) -> Self {
        Self {
            limit: if limit <= 0 { DEFAULT_LIMIT } else { limit },
            offset: offset.max(0),
        }
    }

    /// Lenient parse of raw query values: anything missing or unparsable counts as 0.
    pub fn from_query(limit: Option<&str>, offset: Option<&str>) -> Self {
        let parse = |v: Option<&str>| v.and_then(|s| s.trim().parse::<i64>().ok()).unwrap_or(0);
        Self::new(parse(limit), parse(offset))
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new(DEFAULT_LIMIT, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_values_use_defaults() {
        let page = Page::from_query(None, None);
        assert_eq!(page.limit(), DEFAULT_LIMIT);
        assert_eq!(page.offset(), 0);
    }

    #[test]
    fn zero_limit_means_default() {
        assert_eq!(Page::from_query(Some("0"), None).limit(), DEFAULT_LIMIT);
    }

    #[test]
    fn garbage_is_treated_as_absent() {
        let page = Page::from_query(Some("ten"), Some("x"));
        assert_eq!(page, Page::default());
    }

    #[test]
    fn explicit_values_pass_through() {
        let page = Page::from_query(Some("2"), Some("5"));
        assert_eq!((page.limit(), page.offset()), (2, 5));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: a normalized page is always usable as LIMIT/OFFSET.
            #[test]
            fn normalized_page_is_always_valid(limit in any::<i64>(), offset in any::<i64>()) {
                let page = Page::new(limit, offset);
                prop_assert!(page.limit() > 0);
                prop_assert!(page.offset() >= 0);
                if limit > 0 {
                    prop_assert_eq!(page.limit(), limit);
                }
            }
        }
    }
}
