use crate::core::AnkipixError;

/// One usable image search result.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageHit {
    pub url: String,                 // Direct image URL embedded into the note
    pub credit_name: Option<String>, // Photographer / author, when the provider reports one
    pub credit_link: Option<String>, // Page the image links to for attribution
}

impl ImageHit {
    pub fn bare(url: impl Into<String>) -> Self {
        ImageHit { url: url.into(), credit_name: None, credit_link: None }
    }

    /// HTML written into the picture field. When a credit link exists the image
    /// is wrapped in an anchor so the attribution stays clickable inside Anki.
    pub fn html(&self) -> String {
        let img = format!("<img src=\"{}\" style=\"max-width: 100%;\">", self.url);
        match &self.credit_link {
            Some(link) => format!("<a href=\"{}\" target=\"_blank\">{}</a>", link, img),
            None => img,
        }
    }
}

/// Ordered note fields whose values are tried as search queries.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchFields(Vec<String>);

impl SearchFields {
    pub const MAX: usize = 3;

    /// Parse a comma-separated field list ("Front, Back"). Entries are trimmed,
    /// empty entries dropped, order preserved.
    pub fn parse(raw: &str) -> Result<Self, AnkipixError> {
        let fields: Vec<String> = raw
            .split(',')
            .map(|field| field.trim())
            .filter(|field| !field.is_empty())
            .map(String::from)
            .collect();

        if fields.is_empty() || fields.len() > Self::MAX {
            return Err(AnkipixError::InvalidFieldCount(fields.len()));
        }

        Ok(SearchFields(fields))
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }
}

/// Counters reported at the end of a fetch run.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct FetchSummary {
    pub candidates: usize, // Notes with an empty picture field when the run started
    pub updated: usize,    // Notes whose picture field write succeeded
    pub skipped: usize,    // Notes left untouched (no field produced a hit, or the write failed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_html_without_credit() {
        let hit = ImageHit::bare("https://img.example/dog.jpg");
        assert_eq!(
            hit.html(),
            "<img src=\"https://img.example/dog.jpg\" style=\"max-width: 100%;\">"
        );
    }

    #[test]
    fn image_html_links_to_credit_page() {
        let hit = ImageHit {
            url: "https://img.example/dog.jpg".to_string(),
            credit_name: Some("Jane Doe".to_string()),
            credit_link: Some("https://photos.example/jane".to_string()),
        };

        let html = hit.html();
        assert!(html.starts_with("<a href=\"https://photos.example/jane\" target=\"_blank\">"));
        assert!(html.contains("<img src=\"https://img.example/dog.jpg\""));
        assert!(html.ends_with("</a>"));
    }

    #[test]
    fn search_fields_trim_and_keep_order() {
        let fields = SearchFields::parse(" Front , Back,Extra ").unwrap();
        assert_eq!(fields.names(), ["Front", "Back", "Extra"]);
    }

    #[test]
    fn search_fields_drop_empty_entries() {
        let fields = SearchFields::parse("Front,,Back,").unwrap();
        assert_eq!(fields.names(), ["Front", "Back"]);
    }

    #[test]
    fn search_fields_reject_empty_input() {
        assert!(SearchFields::parse("  , ").is_err());
    }

    #[test]
    fn search_fields_reject_more_than_three() {
        assert!(SearchFields::parse("A,B,C,D").is_err());
    }
}
