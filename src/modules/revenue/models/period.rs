// Revenue reporting periods.
//
// A period selects the server-side bucketing of the revenue aggregation.
// Switching period is always a full re-fetch against the backend; the client
// never re-buckets data it already holds.

use serde::{Deserialize, Serialize};

/// Reporting window for the revenue dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RevenuePeriod {
    #[serde(rename = "day")]
    Day,

    #[serde(rename = "week")]
    Week,

    #[serde(rename = "month")]
    Month,

    #[serde(rename = "year")]
    Year,
}

impl RevenuePeriod {
    /// Wire token for the `period=` query parameter
    pub fn as_query_value(&self) -> &'static str {
        match self {
            RevenuePeriod::Day => "day",
            RevenuePeriod::Week => "week",
            RevenuePeriod::Month => "month",
            RevenuePeriod::Year => "year",
        }
    }
}

impl Default for RevenuePeriod {
    fn default() -> Self {
        // The revenue screen opens on the month tab
        RevenuePeriod::Month
    }
}

impl std::fmt::Display for RevenuePeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_query_value())
    }
}

impl std::str::FromStr for RevenuePeriod {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "day" => Ok(RevenuePeriod::Day),
            "week" => Ok(RevenuePeriod::Week),
            "month" => Ok(RevenuePeriod::Month),
            "year" => Ok(RevenuePeriod::Year),
            _ => Err(format!("Invalid revenue period: {}", s)),
        }
    }
}
