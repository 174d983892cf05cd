//! Search and date filtering over the cleanup list.

use std::str::FromStr;

use chrono::{Datelike, Duration, NaiveDate};

use crate::{models::CleanupEvent, Error};

/// Date range picked in the `dateFilter` select.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DateFilter {
    #[default]
    All,
    Today,
    /// From today through the next seven days, inclusive.
    Week,
    /// Same calendar month (and year) as today.
    Month,
}
impl DateFilter {
    pub fn matches(&self, date: NaiveDate, today: NaiveDate) -> bool {
        match self {
            DateFilter::All => true,
            DateFilter::Today => date == today,
            DateFilter::Week => date >= today && date <= today + Duration::days(7),
            DateFilter::Month => date.year() == today.year() && date.month() == today.month(),
        }
    }
    pub fn as_str(&self) -> &'static str {
        match self {
            DateFilter::All => "all",
            DateFilter::Today => "today",
            DateFilter::Week => "week",
            DateFilter::Month => "month",
        }
    }
}
impl FromStr for DateFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "all" => Ok(DateFilter::All),
            "today" => Ok(DateFilter::Today),
            "week" => Ok(DateFilter::Week),
            "month" => Ok(DateFilter::Month),
            other => Err(Error::InvalidDateFilter(other.to_string())),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CleanupFilter {
    pub search: String,
    pub date: DateFilter,
}
impl CleanupFilter {
    pub fn new(search: &str, date: DateFilter) -> Self {
        Self {
            search: String::from(search),
            date,
        }
    }
    pub fn is_empty(&self) -> bool {
        self.search.trim().is_empty() && self.date == DateFilter::All
    }

    /// Cleanups passing both the search term and the date range, in their
    /// original order. Surrounding whitespace in the search term is ignored.
    pub fn apply<'a>(&self, cleanups: &'a [CleanupEvent], today: NaiveDate) -> Vec<&'a CleanupEvent> {
        let needle = self.search.trim().to_lowercase();
        cleanups
            .iter()
            .filter(|c| c.matches(&needle) && self.date.matches(c.date, today))
            .collect()
    }
}
