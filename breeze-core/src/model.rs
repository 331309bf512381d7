/// A single observation returned by a weather provider.
///
/// Every field is optional: the API may omit any of them, and an absent
/// field is rendered as a placeholder instead of failing the lookup.
/// Records are constructed once by the provider and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherRecord {
    pub city: Option<String>,
    pub temperature_c: Option<f64>,
    pub feels_like_c: Option<f64>,
    pub condition: Option<String>,
}
