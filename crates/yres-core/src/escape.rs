//! HTML escaping for free text embedded in card markup.

/// Escape text for use in HTML element content or a quoted attribute value.
///
/// ```
/// use yres_core::escape::escape;
///
/// assert_eq!(escape(r#"<b>"Hi" & 'bye'</b>"#),
///     "&lt;b&gt;&quot;Hi&quot; &amp; &#39;bye&#39;&lt;/b&gt;");
/// ```
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
