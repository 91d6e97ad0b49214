use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveDate;

use crate::error::ValidationError;

/// Top-level document category ("major head" on the wire).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Category {
    Personal,
    Professional,
    #[default]
    Unset,
}

impl Category {
    /// The fixed subcategory set the service accepts for this category.
    pub fn subcategories(&self) -> &'static [&'static str] {
        match self {
            Category::Personal => &["John", "Tom", "Emily"],
            Category::Professional => &["Accounts", "HR", "IT", "Finance"],
            Category::Unset => &[],
        }
    }

    /// Value sent on the wire; `Unset` is the empty string.
    pub fn wire_value(&self) -> &'static str {
        match self {
            Category::Personal => "Personal",
            Category::Professional => "Professional",
            Category::Unset => "",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Unset => write!(f, "no category"),
            other => write!(f, "{}", other.wire_value()),
        }
    }
}

/// A deduplicated set of non-empty tag names.
///
/// Insertion is idempotent and order-insensitive; inserting an empty
/// string is a no-op rather than an error, matching the behavior callers
/// expect from the tag input widget.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet(BTreeSet<String>);

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a tag. Returns `false` for empty strings and duplicates.
    pub fn insert(&mut self, tag: impl Into<String>) -> bool {
        let tag = tag.into();
        if tag.is_empty() {
            return false;
        }
        self.0.insert(tag)
    }

    pub fn remove(&mut self, tag: &str) -> bool {
        self.0.remove(tag)
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.contains(tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for TagSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut tags = TagSet::new();
        for tag in iter {
            tags.insert(tag);
        }
        tags
    }
}

/// Raw, possibly inconsistent search criteria as collected by the caller.
#[derive(Debug, Clone, Default)]
pub struct FilterInput {
    pub category: Category,
    pub subcategory: String,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub tags: TagSet,
}

/// Validated, immutable search criteria.
///
/// Built per search invocation via [`SearchFilter::normalize`] and
/// discarded afterwards. Invariants: a non-empty subcategory implies a
/// category, the subcategory belongs to that category's set, and
/// `from <= to` whenever both dates are present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFilter {
    category: Category,
    subcategory: String,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    tags: TagSet,
}

impl SearchFilter {
    /// Validate raw input into a canonical filter.
    ///
    /// Pure; no network or I/O side effects.
    pub fn normalize(input: FilterInput) -> Result<Self, ValidationError> {
        if !input.subcategory.is_empty() {
            if input.category == Category::Unset {
                return Err(ValidationError::SubcategoryWithoutCategory {
                    subcategory: input.subcategory,
                });
            }
            if !input
                .category
                .subcategories()
                .contains(&input.subcategory.as_str())
            {
                return Err(ValidationError::UnknownSubcategory {
                    category: input.category,
                    subcategory: input.subcategory,
                });
            }
        }

        if let (Some(from), Some(to)) = (input.from, input.to)
            && from > to
        {
            return Err(ValidationError::ReversedDateRange { from, to });
        }

        Ok(Self {
            category: input.category,
            subcategory: input.subcategory,
            from: input.from,
            to: input.to,
            tags: input.tags,
        })
    }

    /// A filter with no criteria; matches the service's default listing.
    pub fn unfiltered() -> Self {
        Self {
            category: Category::Unset,
            subcategory: String::new(),
            from: None,
            to: None,
            tags: TagSet::new(),
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn subcategory(&self) -> &str {
        &self.subcategory
    }

    pub fn from(&self) -> Option<NaiveDate> {
        self.from
    }

    pub fn to(&self) -> Option<NaiveDate> {
        self.to
    }

    pub fn tags(&self) -> &TagSet {
        &self.tags
    }
}
