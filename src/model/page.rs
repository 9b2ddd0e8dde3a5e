/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Sorting state of a page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, DisplaySimple, Serialize, Deserialize)]
#[serde(default)]
pub struct Sort {
    /// Whether a sort order is applied
    pub sorted: bool,
    /// Whether no sort order is applied
    pub unsorted: bool,
    /// Whether the sort specification is empty
    pub empty: bool,
}

/// Request side of a page as echoed back by the backend
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, DisplaySimple, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Pageable {
    /// Sorting of the request
    pub sort: Sort,
    /// Zero-based page index
    pub page_number: u32,
    /// Requested page size
    pub page_size: u32,
    /// Offset of the first element
    pub offset: u64,
    /// Whether the request was paged
    pub paged: bool,
    /// Whether the request was unpaged
    pub unpaged: bool,
}

/// Pagination envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Elements of this page
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,
    /// Request metadata
    #[serde(default)]
    pub pageable: Pageable,
    /// Number of pages available
    #[serde(default)]
    pub total_pages: u32,
    /// Number of elements available
    #[serde(default)]
    pub total_elements: u64,
    /// Whether this is the last page
    #[serde(default)]
    pub last: bool,
    /// Page size
    #[serde(default)]
    pub size: u32,
    /// Zero-based page index
    #[serde(default)]
    pub number: u32,
    /// Sorting of the content
    #[serde(default)]
    pub sort: Sort,
    /// Whether this is the first page
    #[serde(default)]
    pub first: bool,
    /// Number of elements on this page
    #[serde(default)]
    pub number_of_elements: u32,
    /// Whether this page has no content
    #[serde(default)]
    pub empty: bool,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            content: Vec::new(),
            pageable: Pageable::default(),
            total_pages: 0,
            total_elements: 0,
            last: true,
            size: 0,
            number: 0,
            sort: Sort::default(),
            first: true,
            number_of_elements: 0,
            empty: true,
        }
    }
}

impl<T> Page<T> {
    /// Checks that a paged result never holds more than `size` elements
    pub fn is_within_size(&self) -> bool {
        !self.pageable.paged || self.content.len() <= self.size as usize
    }

    /// Whether another page follows this one
    pub fn has_next(&self) -> bool {
        !self.last
    }

    /// Maps the content, keeping the paging metadata
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            pageable: self.pageable,
            total_pages: self.total_pages,
            total_elements: self.total_elements,
            last: self.last,
            size: self.size,
            number: self.number,
            sort: self.sort,
            first: self.first,
            number_of_elements: self.number_of_elements,
            empty: self.empty,
        }
    }
}

/// Paging query parameters shared by every paging endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, DisplaySimple, Serialize, Deserialize)]
pub struct PageParameters {
    /// Zero-based page index
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Page size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    /// Sort expressions such as `name,asc`; one query entry each
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sort: Vec<String>,
}

impl PageParameters {
    /// Creates parameters for the given page and size
    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page: Some(page),
            size: Some(size),
            sort: Vec::new(),
        }
    }

    /// Set the page
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Set the size
    pub fn with_size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    /// Append a sort expression
    pub fn with_sort(mut self, sort: impl Into<String>) -> Self {
        self.sort.push(sort.into());
        self
    }
}
