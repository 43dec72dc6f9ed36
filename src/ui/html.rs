// Minimal HTML helpers for the include_str! templates.

/// Escapes text for element content and double-quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Replaces every `{{KEY}}` placeholder. Values are inserted as given.
pub fn fill(template: &str, values: &[(&str, &str)]) -> String {
    values
        .iter()
        .fold(template.to_string(), |html, (key, value)| {
            html.replace(&format!("{{{{{}}}}}", key), value)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<b>"Rock" & 'Roll'</b>"#),
            "&lt;b&gt;&quot;Rock&quot; &amp; &#39;Roll&#39;&lt;/b&gt;"
        );
        assert_eq!(escape("Écouter 🎧"), "Écouter 🎧");
    }

    #[test]
    fn test_fill() {
        let html = fill("<h1>{{TITLE}}</h1>{{TITLE}}{{MISSING}}", &[("TITLE", "Hi")]);
        assert_eq!(html, "<h1>Hi</h1>Hi{{MISSING}}");
    }
}
