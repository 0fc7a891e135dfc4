//! Pull a list of names out of a model's free-form reply
//!
//! The reply is expected to contain something like `['Acme', "Zenith"]`
//! somewhere in its prose. Extraction never fails: anything it cannot read
//! yields an empty list.

/// Separators accepted between items; the Arabic comma shows up in RTL replies.
const SEPARATORS: &[char] = &[',', '\u{060C}'];

const QUOTES: &[char] = &['\'', '"'];

/// Extract the bracketed list from `raw`, in order.
///
/// Takes the text between the first `[` and the last `]`, splits it on commas,
/// trims each piece and removes one layer of surrounding quotes. Splitting is
/// naive, so a comma inside a quoted item splits that item.
pub fn extract_list(raw: &str) -> Vec<String> {
    let Some(inner) = bracket_body(raw) else {
        return Vec::new();
    };
    if inner.trim().is_empty() {
        return Vec::new();
    }

    inner
        .split(SEPARATORS)
        .map(clean_item)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

fn bracket_body(raw: &str) -> Option<&str> {
    let start = raw.find('[')?;
    let end = raw.rfind(']')?;
    if end <= start {
        return None;
    }
    Some(&raw[start + 1..end])
}

fn clean_item(fragment: &str) -> &str {
    let item = fragment.trim();
    let mut chars = item.chars();
    match (chars.next(), chars.next_back()) {
        (Some(open), Some(close)) if open == close && QUOTES.contains(&open) => {
            item[open.len_utf8()..item.len() - close.len_utf8()].trim()
        }
        _ => item,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_inside_prose() {
        assert_eq!(
            extract_list("Here are some: ['Acme Corp', 'Zenith LLC']"),
            vec!["Acme Corp", "Zenith LLC"]
        );
    }

    #[test]
    fn test_no_brackets() {
        assert!(extract_list("No brackets here.").is_empty());
        assert!(extract_list("only an opening [ bracket").is_empty());
        assert!(extract_list("reversed ] then [").is_empty());
    }

    #[test]
    fn test_empty_list() {
        assert!(extract_list("[]").is_empty());
        assert!(extract_list("Sorry: [   ]").is_empty());
    }

    #[test]
    fn test_code_fence_and_double_quotes() {
        let raw = "```python\n[\n  \"Nova Petro\",\n  \"Petronova\" ,\n  'Al Noor Energy'\n]\n```\nHope this helps!";
        assert_eq!(extract_list(raw), vec!["Nova Petro", "Petronova", "Al Noor Energy"]);
    }

    #[test]
    fn test_outermost_brackets_win() {
        let raw = "Options [v2]: ['Acme [Labs]', 'Zenith'] (see [1])";
        assert_eq!(extract_list(raw), vec!["v2]: ['Acme [Labs]", "Zenith'] (see [1"]);
    }

    #[test]
    fn test_unquoted_and_unbalanced_items() {
        assert_eq!(extract_list("[Acme, 'Zenith, \"Orbit\"]"), vec!["Acme", "'Zenith", "Orbit"]);
    }

    #[test]
    fn test_comma_inside_quotes_splits() {
        assert_eq!(
            extract_list("['Smith, Jones & Co', 'Orbit']"),
            vec!["'Smith", "Jones & Co'", "Orbit"]
        );
    }

    #[test]
    fn test_trailing_comma_dropped() {
        assert_eq!(extract_list("['Acme', 'Zenith',]"), vec!["Acme", "Zenith"]);
    }

    #[test]
    fn test_arabic_reply() {
        let raw = "إليك الأسماء: ['أدنوك الجديدة'، 'نور للطاقة', \"الواحة\"]";
        assert_eq!(extract_list(raw), vec!["أدنوك الجديدة", "نور للطاقة", "الواحة"]);
    }

    #[test]
    fn test_only_one_quote_layer_removed() {
        assert_eq!(extract_list("[\"'Quoted'\"]"), vec!["'Quoted'"]);
    }
}
