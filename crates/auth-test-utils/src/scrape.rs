//! Assertions over prometheus text exposition output.

/// Extract the value of `metric` with the given label pairs from exposition
/// text.
///
/// Matches the first sample line whose name equals `metric` and whose label
/// block contains every `key="value"` pair in `labels`. Returns `None` when
/// no such sample exists or its value does not parse.
pub fn metric_value(exposition: &str, metric: &str, labels: &[(&str, &str)]) -> Option<f64> {
    exposition
        .lines()
        .filter(|line| !line.starts_with('#') && !line.is_empty())
        .find_map(|line| {
            let (name_part, value_part) = line.rsplit_once(' ')?;

            let (name, label_part) = match name_part.split_once('{') {
                Some((name, rest)) => (name, rest.strip_suffix('}')?),
                None => (name_part, ""),
            };
            if name != metric {
                return None;
            }

            let all_present = labels
                .iter()
                .all(|(key, value)| label_part.contains(&format!("{key}=\"{value}\"")));
            if !all_present {
                return None;
            }

            value_part.parse().ok()
        })
}
