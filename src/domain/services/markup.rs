#[cfg(test)]
#[path = "markup_test.rs"]
mod tests;

use yansi::Paint;

/// Minimal display normalization for assistant replies: paired `**bold**`
/// markers become terminal bold and tabs become spaces. Everything else
/// passes through untouched, since replies are free text and never
/// schema-validated.
pub fn normalize(text: &str) -> String {
    let cleaned = text.replace('\t', "  ");

    let parts = cleaned.split("**").collect::<Vec<&str>>();
    if parts.len() < 3 {
        return cleaned;
    }

    let mut out = String::with_capacity(cleaned.len());
    for (idx, part) in parts.iter().enumerate() {
        if idx % 2 == 0 {
            out.push_str(part);
            continue;
        }

        // A trailing unpaired marker stays literal.
        if idx + 1 < parts.len() {
            out.push_str(&Paint::new(part).bold().to_string());
        } else {
            out.push_str("**");
            out.push_str(part);
        }
    }

    return out;
}
