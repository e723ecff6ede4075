//! Method sets shared by the consuming resource builders.
//!
//! Every simple builder wraps a [`Request`](crate::core::Request) in a `req` field;
//! these macros expand inside its `impl` block.

/// `limit` and `offset`.
macro_rules! paging_methods {
    () => {
        /// # Errors
        ///
        /// Returns `MsError::InvalidLimit` outside `1..=1000`.
        pub fn limit(mut self, limit: i64) -> Result<Self, $crate::core::MsError> {
            self.req.set_limit(limit)?;
            Ok(self)
        }

        /// # Errors
        ///
        /// Returns `MsError::InvalidOffset` outside `0..=1000`.
        pub fn offset(mut self, offset: i64) -> Result<Self, $crate::core::MsError> {
            self.req.set_offset(offset)?;
            Ok(self)
        }
    };
}

/// `sort`, `date_from` and `date_to` for symbol-keyed time series.
macro_rules! series_methods {
    () => {
        #[must_use]
        pub fn sort(mut self, sort: $crate::core::Sort) -> Self {
            self.req.set_sort(sort);
            self
        }

        /// Sets the lower bound of the date range.
        ///
        /// # Errors
        ///
        /// Fails on a malformed date, or with `MsError::DuplicateDateRange` if a single
        /// date was already pinned.
        pub fn date_from(
            mut self,
            date: impl Into<$crate::core::DateInput>,
        ) -> Result<Self, $crate::core::MsError> {
            self.req.set_date_from(date.into())?;
            Ok(self)
        }

        /// Sets the upper bound of the date range.
        ///
        /// # Errors
        ///
        /// Same as `date_from`.
        pub fn date_to(
            mut self,
            date: impl Into<$crate::core::DateInput>,
        ) -> Result<Self, $crate::core::MsError> {
            self.req.set_date_to(date.into())?;
            Ok(self)
        }
    };
}

/// `request`, `execute` and `fetch_table`.
macro_rules! terminal_methods {
    () => {
        /// The request this builder will send.
        pub fn request(&self) -> &$crate::core::Request {
            &self.req
        }

        /// Executes the request and returns the decoded response.
        ///
        /// # Errors
        ///
        /// See `Request::execute`.
        pub async fn execute(&self) -> Result<$crate::core::Response, $crate::core::MsError> {
            self.req.execute().await
        }

        /// Executes the request and returns the records as a table.
        ///
        /// # Errors
        ///
        /// See `Request::execute`.
        pub async fn fetch_table(&self) -> Result<$crate::core::Table, $crate::core::MsError> {
            self.req.fetch_table().await
        }
    };
}

pub(crate) use paging_methods;
pub(crate) use series_methods;
pub(crate) use terminal_methods;
