use crate::model::WeatherRecord;

/// Placeholder shown for any field the API response did not include.
pub const NOT_AVAILABLE: &str = "not available";

/// Render a weather record as a human-readable report.
///
/// Pure function: the caller decides where the string goes.
pub fn format(record: &WeatherRecord) -> String {
    let city = record.city.as_deref().unwrap_or(NOT_AVAILABLE);
    let temp = celsius(record.temperature_c);
    let feels = celsius(record.feels_like_c);
    let condition = record
        .condition
        .as_deref()
        .map(title_case)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());

    format!(
        "\n------------------------------\n\
         Weather for: {city}\n\
         ------------------------------\n\
         Temperature:     {temp}\n\
         Feels like:      {feels}\n\
         Condition:       {condition}\n\
         ------------------------------\n"
    )
}

fn celsius(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.1}°C"),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Uppercase the first letter of each whitespace-separated word and
/// lowercase the rest, e.g. "light rain" -> "Light Rain".
pub fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_record() -> WeatherRecord {
        WeatherRecord {
            city: Some("London".to_string()),
            temperature_c: Some(12.34),
            feels_like_c: Some(10.0),
            condition: Some("light rain".to_string()),
        }
    }

    #[test]
    fn full_record_shows_every_field() {
        let out = format(&full_record());

        assert!(out.contains("Weather for: London"));
        assert!(out.contains("Temperature:     12.3°C"));
        assert!(out.contains("Feels like:      10.0°C"));
        assert!(out.contains("Condition:       Light Rain"));
    }

    #[test]
    fn missing_condition_falls_back_to_placeholder() {
        let mut record = full_record();
        record.condition = None;

        let out = format(&record);
        assert!(out.contains(&format!("Condition:       {NOT_AVAILABLE}")));
    }

    #[test]
    fn missing_temperatures_fall_back_to_placeholder() {
        let record = WeatherRecord {
            city: Some("Nowhere".to_string()),
            temperature_c: None,
            feels_like_c: None,
            condition: None,
        };

        let out = format(&record);
        assert!(out.contains(&format!("Temperature:     {NOT_AVAILABLE}")));
        assert!(out.contains(&format!("Feels like:      {NOT_AVAILABLE}")));
    }

    #[test]
    fn title_case_handles_multiple_words() {
        assert_eq!(title_case("scattered clouds"), "Scattered Clouds");
        assert_eq!(title_case("MIST"), "Mist");
        assert_eq!(title_case(""), "");
    }
}
