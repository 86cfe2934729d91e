//! Text rendering of the listing sections.
//!
//! Stands in for the website's card renderer: it consumes only [`Card`]
//! view-models, never raw records, so everything it prints went through the
//! same resolution pipeline the site uses.

use std::fmt::Write as _;

use catalog::{
    domain::Property,
    read::{Card, Hints},
    Catalog, StatusGroup,
};
use itertools::Itertools as _;

/// Message rendered for a section with no matching records.
const NO_PROPERTIES: &str = "No Properties Found";

/// Renders every listing section of the provided [`Catalog`].
#[must_use]
pub fn listing(catalog: &Catalog) -> String {
    let mut out = String::new();

    section(
        &mut out,
        "Ongoing Projects",
        catalog.by_status_group(StatusGroup::Ongoing),
        Hints::default(),
    );
    section(
        &mut out,
        "Upcoming Projects",
        catalog.by_status_group(StatusGroup::Upcoming),
        Hints {
            upcoming: true,
            ..Hints::default()
        },
    );
    section(
        &mut out,
        "Completed Projects",
        catalog.by_status_group(StatusGroup::Completed),
        Hints {
            completed: true,
            ..Hints::default()
        },
    );
    section(
        &mut out,
        "Investment Opportunities",
        catalog.investments(),
        Hints {
            compact: true,
            ..Hints::default()
        },
    );

    out
}

/// Renders one listing section.
fn section(
    out: &mut String,
    title: &str,
    records: Vec<&Property>,
    hints: Hints,
) {
    let cards = records
        .into_iter()
        .filter_map(|record| Card::new(Some(record), hints))
        .collect::<Vec<_>>();

    _ = writeln!(out, "## {title}");
    if cards.is_empty() {
        _ = writeln!(out, "{NO_PROPERTIES}");
    }
    for card in &cards {
        render_card(out, card);
    }
    out.push('\n');
}

/// Renders one card.
fn render_card(out: &mut String, card: &Card) {
    _ = writeln!(
        out,
        "- {} [{}] {}",
        card.name, card.status.label, card.price,
    );
    if let Some(location) = &card.location {
        _ = writeln!(out, "    {location}");
    }
    if let Some(summary) = &card.unit_summary {
        match card.total_units {
            Some(units) => {
                _ = writeln!(out, "    {summary} ({units} units)");
            }
            None => {
                _ = writeln!(out, "    {summary}");
            }
        }
    }
    if let Some(possession) = &card.possession {
        match card.completion {
            Some(completion) => {
                _ = writeln!(
                    out,
                    "    Possession: {possession} ({completion}% complete)",
                );
            }
            None => {
                _ = writeln!(out, "    Possession: {possession}");
            }
        }
    }
    if !card.documents.is_empty() {
        _ = writeln!(
            out,
            "    Documents: {}",
            card.documents.iter().map(|doc| doc.name.as_str()).join(", "),
        );
    }
    if let Some(blurb) = card.blurb.as_ref().filter(|_| card.compact) {
        _ = writeln!(out, "    {blurb}");
    }
}

#[cfg(test)]
mod spec {
    use catalog::Catalog;

    use super::listing;

    #[test]
    fn renders_sections_from_view_models() {
        let catalog = Catalog::from_json_str(
            r#"[
                {"id": "p-1", "name": "Aster Grove", "type": "residential",
                 "status": "UNDER_CONSTRUCTION",
                 "flatTypes": [{"type": "2 BHK"}, {"type": "3 BHK"}]},
                {"id": "i-1", "name": "Harbor Yield Fund",
                 "type": "investment", "shortDescription": "Warehouse play."}
            ]"#,
        )
        .unwrap();

        let out = listing(&catalog);

        assert!(out.contains("## Ongoing Projects"));
        assert!(out.contains("Aster Grove [Under Construction]"));
        assert!(out.contains("2 & 3 BHK"));
        assert!(out.contains("Price on Request"));
        assert!(out.contains("## Upcoming Projects\nNo Properties Found"));
        assert!(out.contains("Harbor Yield Fund"));
        assert!(out.contains("Warehouse play."));
    }
}
