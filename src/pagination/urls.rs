/// Build `<base><path>?k=v&k=v`.
///
/// Values are inserted verbatim: nothing is escaped and the base URL is not
/// normalised, so `base_url` is expected to end with a slash.
pub fn build_query_url(base_url: &str, path: &str, params: &[(&str, String)]) -> String {
    let query = join_params(params);
    if query.is_empty() {
        format!("{}{}", base_url, path)
    } else {
        format!("{}{}?{}", base_url, path, query)
    }
}

fn join_params(params: &[(&str, String)]) -> String {
    params
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join("&")
}
