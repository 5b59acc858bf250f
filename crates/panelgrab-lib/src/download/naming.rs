/// Drops everything from the first `?` onward.
pub fn strip_query(url: &str) -> &str {
    url.split_once('?').map_or(url, |(path, _)| path)
}

/// Extension of the URL's last path component, including the leading dot.
///
/// Returns an empty string when the last component has no dot.
pub fn file_extension(url: &str) -> String {
    let path = strip_query(url);
    let file_name = path.rsplit_once('/').map_or(path, |(_, name)| name);
    match file_name.rfind('.') {
        Some(dot) => file_name[dot..].to_string(),
        None => String::new(),
    }
}

pub fn output_file_name(index: usize, url: &str) -> String {
    format!("{}{}", index, file_extension(url))
}
