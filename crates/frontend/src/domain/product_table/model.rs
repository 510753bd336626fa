//! Pure view-model for product table rows
//!
//! Maps a [`ProductRecord`] to the texts, classes and element ids a row
//! renders with, keeping the price/label/savings rules out of the view
//! so they are unit-testable on the host.

use contracts::domain::product::ProductRecord;

/// Webshop a product was scraped from, decided by its URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceSite {
    MediaMarkt,
    Bol,
}

impl SourceSite {
    /// Substring match, case-sensitive and anywhere in the URL. This
    /// mirrors what the scrapers accept; anything that is not
    /// MediaMarkt is a Bol.com product.
    pub fn from_url(url: &str) -> Self {
        if url.contains("mediamarkt") {
            Self::MediaMarkt
        } else {
            Self::Bol
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::MediaMarkt => "[MediaMarkt]",
            Self::Bol => "[Bol.com]",
        }
    }

    /// Home page the source-site label links to.
    pub fn home_url(self) -> &'static str {
        match self {
            Self::MediaMarkt => "https://www.mediamarkt.nl/nl/",
            Self::Bol => "https://www.bol.com/nl/nl/",
        }
    }
}

/// Price cell text: euro sign with 2 decimals, or "N/A" when the
/// scraper reported no usable price (zero or negative).
pub fn price_text(price: f64) -> String {
    if price > 0.0 {
        format!("€{:.2}", price)
    } else {
        "N/A".to_string()
    }
}

/// Savings cell text, rendered with its sign regardless of direction.
pub fn savings_text(og_price: f64, current_price: f64) -> String {
    format!("€{:.2}", og_price - current_price)
}

/// "savings-up" only for a strictly positive difference; zero counts
/// as down.
pub fn savings_class(og_price: f64, current_price: f64) -> &'static str {
    if og_price - current_price > 0.0 {
        "savings-up"
    } else {
        "savings-down"
    }
}

/// Everything one `<tr>` needs, precomputed. The element ids are the
/// lookup contract shared with the stylesheet (`product-{id}`,
/// `savings-{id}`, ...).
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRowModel {
    pub row_id: String,
    pub name_id: String,
    pub current_price_id: String,
    pub og_price_id: String,
    pub savings_id: String,
    pub site: SourceSite,
    pub current_price_text: String,
    pub og_price_text: String,
    pub savings_text: String,
    pub savings_class: &'static str,
}

/// Drop the record with the given id and hand back its displayed
/// name, which is what the removal notification transmits. `None`
/// when the id is unknown (row already gone).
pub fn take_removal_name(items: &mut Vec<ProductRecord>, id: &str) -> Option<String> {
    let name = items.iter().find(|p| p.id == id).map(|p| p.name.clone())?;
    items.retain(|p| p.id != id);
    Some(name)
}

impl From<&ProductRecord> for ProductRowModel {
    fn from(record: &ProductRecord) -> Self {
        Self {
            row_id: format!("product-{}", record.id),
            name_id: format!("name-{}", record.id),
            current_price_id: format!("current-price-{}", record.id),
            og_price_id: format!("og-price-{}", record.id),
            savings_id: format!("savings-{}", record.id),
            site: SourceSite::from_url(&record.url),
            current_price_text: price_text(record.current_price),
            og_price_text: price_text(record.og_price),
            savings_text: savings_text(record.og_price, record.current_price),
            savings_class: savings_class(record.og_price, record.current_price),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, url: &str, current: f64, og: f64) -> ProductRecord {
        ProductRecord {
            id: id.to_string(),
            name: "Headphones".to_string(),
            url: url.to_string(),
            current_price: current,
            og_price: og,
        }
    }

    #[test]
    fn positive_price_renders_with_two_decimals() {
        assert_eq!(price_text(49.9), "€49.90");
        assert_eq!(price_text(59.0), "€59.00");
        assert_eq!(price_text(0.004), "€0.00");
    }

    #[test]
    fn non_positive_price_renders_na() {
        assert_eq!(price_text(0.0), "N/A");
        assert_eq!(price_text(-5.0), "N/A");
    }

    #[test]
    fn savings_keep_sign_and_two_decimals() {
        assert_eq!(savings_text(59.0, 49.9), "€9.10");
        assert_eq!(savings_text(0.0, 0.0), "€0.00");
        assert_eq!(savings_text(49.9, 59.0), "€-9.10");
    }

    #[test]
    fn savings_class_is_up_only_when_strictly_positive() {
        assert_eq!(savings_class(59.0, 49.9), "savings-up");
        assert_eq!(savings_class(0.0, 0.0), "savings-down");
        assert_eq!(savings_class(49.9, 59.0), "savings-down");
    }

    #[test]
    fn source_site_matches_mediamarkt_substring() {
        assert_eq!(
            SourceSite::from_url("https://mediamarkt.nl/x"),
            SourceSite::MediaMarkt
        );
        assert_eq!(
            SourceSite::from_url("https://www.bol.com/nl/nl/p/x"),
            SourceSite::Bol
        );
        // match is case-sensitive and positional anywhere in the URL
        assert_eq!(
            SourceSite::from_url("https://www.MediaMarkt.nl/nl/"),
            SourceSite::Bol
        );
        assert_eq!(
            SourceSite::from_url("https://example.com/mediamarkt-deals"),
            SourceSite::MediaMarkt
        );
    }

    #[test]
    fn removal_takes_name_and_drops_the_record() {
        let mut items = vec![
            record("1", "https://www.bol.com/nl/nl/p/a", 10.0, 12.0),
            record("2", "https://mediamarkt.nl/b", 20.0, 25.0),
        ];

        assert_eq!(
            take_removal_name(&mut items, "2"),
            Some("Headphones".to_string())
        );
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "1");

        // unknown id leaves the set untouched
        assert_eq!(take_removal_name(&mut items, "2"), None);
        assert_eq!(items.len(), 1);

        // removing the last record empties the set; the placeholder
        // row is derived from emptiness, so it can never duplicate
        assert_eq!(
            take_removal_name(&mut items, "1"),
            Some("Headphones".to_string())
        );
        assert!(items.is_empty());
    }

    #[test]
    fn row_model_for_tracked_headphones() {
        let model = ProductRowModel::from(&record("7", "https://mediamarkt.nl/x", 49.9, 59.0));

        assert_eq!(model.row_id, "product-7");
        assert_eq!(model.name_id, "name-7");
        assert_eq!(model.current_price_id, "current-price-7");
        assert_eq!(model.og_price_id, "og-price-7");
        assert_eq!(model.savings_id, "savings-7");
        assert_eq!(model.site.label(), "[MediaMarkt]");
        assert_eq!(model.current_price_text, "€49.90");
        assert_eq!(model.og_price_text, "€59.00");
        assert_eq!(model.savings_text, "€9.10");
        assert_eq!(model.savings_class, "savings-up");
    }

    #[test]
    fn row_model_for_unpriced_product() {
        let model = ProductRowModel::from(&record("3", "https://www.bol.com/nl/nl/p/x", 0.0, 0.0));

        assert_eq!(model.site.label(), "[Bol.com]");
        assert_eq!(model.current_price_text, "N/A");
        assert_eq!(model.og_price_text, "N/A");
        assert_eq!(model.savings_text, "€0.00");
        assert_eq!(model.savings_class, "savings-down");
    }
}
