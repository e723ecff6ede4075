use std::fmt;
use std::str::FromStr;

use crate::core::MsError;

/// A Marketstack REST resource family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// End-of-day prices (`/eod`).
    Eod,
    /// Intraday prices (`/intraday`).
    Intraday,
    /// Stock splits (`/splits`).
    Splits,
    /// Dividends (`/dividends`).
    Dividends,
    /// Ticker reference data (`/tickers`).
    Tickers,
    /// Exchange reference data (`/exchanges`).
    Exchanges,
    /// Currencies (`/currencies`).
    Currencies,
    /// Timezones (`/timezones`).
    Timezones,
}

/// Optional request modifiers that only some endpoints accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    /// Append `/latest` to the path.
    Latest,
    /// Query a single date or a date range.
    Historical,
    /// Free-text `search` parameter.
    Search,
}

impl Feature {
    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            Self::Latest => "latest",
            Self::Historical => "historical",
            Self::Search => "search",
        }
    }
}

impl Endpoint {
    /// Every known endpoint.
    pub const ALL: [Self; 8] = [
        Self::Eod,
        Self::Intraday,
        Self::Splits,
        Self::Dividends,
        Self::Tickers,
        Self::Exchanges,
        Self::Currencies,
        Self::Timezones,
    ];

    /// Path segment used by the API.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Eod => "eod",
            Self::Intraday => "intraday",
            Self::Splits => "splits",
            Self::Dividends => "dividends",
            Self::Tickers => "tickers",
            Self::Exchanges => "exchanges",
            Self::Currencies => "currencies",
            Self::Timezones => "timezones",
        }
    }

    /// The feature support table: modifiers this endpoint accepts.
    pub const fn features(self) -> &'static [Feature] {
        match self {
            Self::Eod | Self::Intraday => &[Feature::Latest, Feature::Historical],
            Self::Tickers | Self::Exchanges => &[Feature::Search],
            Self::Splits | Self::Dividends | Self::Currencies | Self::Timezones => &[],
        }
    }

    /// Whether `feature` appears in this endpoint's support table.
    pub fn supports(self, feature: Feature) -> bool {
        self.features().contains(&feature)
    }

    pub(crate) fn require(self, feature: Feature) -> Result<(), MsError> {
        if self.supports(feature) {
            Ok(())
        } else {
            Err(MsError::UnsupportedFeature {
                feature: feature.as_str(),
                endpoint: self.as_str(),
            })
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Endpoint {
    type Err = MsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|e| e.as_str() == s)
            .ok_or_else(|| MsError::InvalidEndpoint(s.to_string()))
    }
}

/// Sort order for date-ordered results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sort {
    /// Oldest first.
    Asc,
    /// Newest first (the API default).
    #[default]
    Desc,
}

impl Sort {
    /// Query-string value.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl FromStr for Sort {
    type Err = MsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(MsError::InvalidSort(other.to_string())),
        }
    }
}
