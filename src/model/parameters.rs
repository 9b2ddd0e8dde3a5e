/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::model::page::PageParameters;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

macro_rules! page_parameters {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, DisplaySimple, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $name {
            /// Free-text filter applied by the backend
            #[serde(skip_serializing_if = "Option::is_none")]
            pub search_filter: Option<String>,
            /// Paging and sorting
            #[serde(flatten)]
            pub page: PageParameters,
        }

        impl $name {
            /// Creates parameters for the given page and size
            pub fn new(page: u32, size: u32) -> Self {
                Self {
                    search_filter: None,
                    page: PageParameters::new(page, size),
                }
            }

            /// Set the search filter
            pub fn with_search_filter(mut self, search_filter: impl Into<String>) -> Self {
                self.search_filter = Some(search_filter.into());
                self
            }

            /// Append a sort expression
            pub fn with_sort(mut self, sort: impl Into<String>) -> Self {
                self.page = self.page.with_sort(sort);
                self
            }
        }
    };
}

page_parameters!(
    /// Query parameters of the device paging endpoint
    DevicePageParameters
);

page_parameters!(
    /// Query parameters of the feed paging endpoint
    FeedPageParameters
);

page_parameters!(
    /// Query parameters of the scenario paging endpoint
    ScenarioPageParameters
);
