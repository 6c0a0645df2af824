// Small HTML helpers for free text entered by customers and staff.

/// Converts newlines into `<br />` line breaks
pub fn nl2br(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\n', "<br />\n")
}

/// Wraps blank-line separated blocks in paragraphs; single newlines become
/// line breaks
pub fn autop(text: &str) -> String {
    let normalized = text.replace("\r\n", "\n");
    let mut paragraphs = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in normalized.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                paragraphs.push(current.join("<br />\n"));
                current.clear();
            }
        } else {
            current.push(line.trim_end());
        }
    }
    if !current.is_empty() {
        paragraphs.push(current.join("<br />\n"));
    }

    paragraphs
        .into_iter()
        .map(|paragraph| format!("<p>{}</p>\n", paragraph))
        .collect()
}
