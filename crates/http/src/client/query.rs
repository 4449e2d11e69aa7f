//! Query string construction

use chrono::NaiveDate;
use url::form_urlencoded;

/// Optional bounds for report queries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self::new(Some(start), Some(end))
    }

    pub fn since(start: NaiveDate) -> Self {
        Self::new(Some(start), None)
    }

    pub fn until(end: NaiveDate) -> Self {
        Self::new(None, Some(end))
    }

    /// `start_date` / `end_date` pairs for the bounds that are set
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(2);
        if let Some(start) = self.start {
            pairs.push(("start_date", start.format("%Y-%m-%d").to_string()));
        }
        if let Some(end) = self.end {
            pairs.push(("end_date", end.format("%Y-%m-%d").to_string()));
        }
        pairs
    }
}

/// Append form-encoded `params` to `path`; no `?` is added when there are none
pub fn with_query<I, K, V>(path: &str, params: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in params {
        serializer.append_pair(key.as_ref(), value.as_ref());
    }
    let query = serializer.finish();

    if query.is_empty() {
        path.to_string()
    } else {
        format!("{path}?{query}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn single_param() {
        assert_eq!(with_query("/cars", [("make", "Honda")]), "/cars?make=Honda");
    }

    #[test]
    fn no_params_no_question_mark() {
        assert_eq!(with_query("/cars", Vec::<(&str, &str)>::new()), "/cars");
    }

    #[test]
    fn values_are_form_encoded() {
        assert_eq!(
            with_query("/cars", [("model", "Model S"), ("q", "a&b")]),
            "/cars?model=Model+S&q=a%26b"
        );
    }

    #[test]
    fn empty_range_has_no_pairs() {
        assert!(DateRange::default().query_pairs().is_empty());
        assert_eq!(
            with_query("/reports/sales", DateRange::default().query_pairs()),
            "/reports/sales"
        );
    }

    #[test]
    fn start_only_range() {
        let range = DateRange::since(date(2024, 1, 5));
        assert_eq!(
            with_query("/reports/sales", range.query_pairs()),
            "/reports/sales?start_date=2024-01-05"
        );
    }

    #[test]
    fn full_range() {
        let range = DateRange::between(date(2024, 1, 1), date(2024, 3, 31));
        assert_eq!(
            with_query("/reports/profit", range.query_pairs()),
            "/reports/profit?start_date=2024-01-01&end_date=2024-03-31"
        );
    }
}
