use crate::layout::{Element, ElementKind, SpecItem};
use std::fmt;
use strum::EnumIter;

/// The fixed page sequence of a full brochure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter)]
pub enum BrochurePage {
    Cover,
    Summary,
    Location,
    Property,
    Bedrooms,
    Floorplans,
    Gardens,
    Details,
    BackCover,
}

impl fmt::Display for BrochurePage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Cover => "cover",
            Self::Summary => "summary",
            Self::Location => "location",
            Self::Property => "property",
            Self::Bedrooms => "bedrooms",
            Self::Floorplans => "floorplans",
            Self::Gardens => "gardens",
            Self::Details => "details",
            Self::BackCover => "back-cover",
        };
        write!(f, "{name}")
    }
}

impl BrochurePage {
    /// Image slots this page binds. Used to decide whether an optional page
    /// has anything to show.
    pub(crate) fn image_slots(&self) -> &'static [&'static str] {
        match self {
            Self::Cover => &["hero"],
            Self::Property => &["exterior", "interior"],
            Self::Bedrooms => &["bedroom_1", "bedroom_2"],
            Self::Floorplans => &["floorplan_ground", "floorplan_first"],
            Self::Gardens => &["garden_main", "garden_detail"],
            _ => &[],
        }
    }

    /// Required pages are always present; optional ones are dropped from an
    /// export when none of their image slots are bound.
    pub(crate) fn is_required(&self) -> bool {
        matches!(self, Self::Cover | Self::Summary | Self::Location | Self::Details | Self::BackCover)
    }

    /// The element tree for this page. Data binding happens through roles and
    /// slot ids when the tree is rendered.
    pub(crate) fn elements(&self) -> Vec<Element> {
        match self {
            Self::Cover => cover(),
            Self::Summary => summary(),
            Self::Location => location(),
            Self::Property => property(),
            Self::Bedrooms => photo_spread("Bedrooms", &["bedroom_1", "bedroom_2"]),
            Self::Floorplans => photo_spread("Floorplans", &["floorplan_ground", "floorplan_first"]),
            Self::Gardens => photo_spread("Gardens & Grounds", &["garden_main", "garden_detail"]),
            Self::Details => details(),
            Self::BackCover => back_cover(),
        }
    }
}

fn heading(text: &str) -> Element {
    Element::new(ElementKind::Text)
        .with_content(text)
        .with_style("font-family", "$heading-font")
        .with_style("font-size", "28px")
        .with_style("color", "$primary")
        .with_style("margin-bottom", "16px")
}

fn cover() -> Vec<Element> {
    vec![
        Element::new(ElementKind::Image)
            .with_id("hero")
            .with_role("hero")
            .with_placeholder("Add a hero photograph")
            .with_style("height", "60%"),
        Element::new(ElementKind::Container)
            .with_style("padding", "48px")
            .with_style("background-color", "$primary")
            .with_children([
                Element::new(ElementKind::Text)
                    .with_role("address")
                    .with_placeholder("123 Example Street")
                    .with_style("font-family", "$heading-font")
                    .with_style("font-size", "36px")
                    .with_style("color", "$background"),
                Element::new(ElementKind::Text)
                    .with_role("price")
                    .with_placeholder("Price on application")
                    .with_style("font-size", "24px")
                    .with_style("color", "$accent"),
            ]),
    ]
}

fn summary() -> Vec<Element> {
    vec![
        heading("At a glance"),
        Element::new(ElementKind::Specs).with_items([
            SpecItem::Labeled { value: "4".into(), label: "Bedrooms".into() },
            SpecItem::Labeled { value: "2".into(), label: "Bathrooms".into() },
            SpecItem::Labeled { value: "3".into(), label: "Receptions".into() },
        ]),
        Element::new(ElementKind::Text)
            .with_role("description")
            .with_placeholder("A beautifully presented home.")
            .with_style("font-size", "15px")
            .with_style("line-height", "1.6"),
        Element::new(ElementKind::Divider).with_style("border-color", "$accent"),
        Element::new(ElementKind::List)
            .with_role("features")
            .with_placeholder("Key features to be confirmed"),
    ]
}

fn location() -> Vec<Element> {
    vec![
        heading("The location"),
        Element::new(ElementKind::Text)
            .with_role("location")
            .with_placeholder("Well placed for schools, transport and amenities.")
            .with_style("line-height", "1.6"),
        Element::new(ElementKind::ContactRow)
            .with_role("nearest_station")
            .with_placeholder("Nearest station: to be confirmed")
            .with_style("margin-top", "12px"),
    ]
}

fn property() -> Vec<Element> {
    vec![
        heading("The property"),
        Element::new(ElementKind::Grid)
            .with_style("display", "grid")
            .with_style("grid-template-columns", "1fr 1fr")
            .with_style("gap", "16px")
            .with_children([
                Element::new(ElementKind::Image).with_id("exterior").with_placeholder("Exterior photograph"),
                Element::new(ElementKind::Image).with_id("interior").with_placeholder("Interior photograph"),
            ]),
        Element::new(ElementKind::Text)
            .with_role("accommodation")
            .with_placeholder("The accommodation is arranged over two floors.")
            .with_style("margin-top", "16px")
            .with_style("line-height", "1.6"),
    ]
}

fn photo_spread(title: &str, slots: &[&str]) -> Vec<Element> {
    let images = slots
        .iter()
        .map(|slot| Element::new(ElementKind::Image).with_id(*slot).with_placeholder("Add a photograph"));
    vec![
        heading(title),
        Element::new(ElementKind::Grid)
            .with_style("display", "grid")
            .with_style("grid-template-columns", "1fr 1fr")
            .with_style("gap", "16px")
            .with_children(images),
    ]
}

fn details() -> Vec<Element> {
    vec![
        heading("Property details"),
        Element::new(ElementKind::SpecsList).with_items([
            SpecItem::Labeled { value: "Tenure:".into(), label: "Freehold".into() },
            SpecItem::Labeled { value: "Council tax:".into(), label: "Band F".into() },
            SpecItem::Labeled { value: "EPC rating:".into(), label: "C".into() },
        ]),
        Element::new(ElementKind::Text)
            .with_role("sqft")
            .with_placeholder("Approximate gross internal area to be confirmed")
            .with_style("margin-top", "12px"),
        Element::new(ElementKind::Text)
            .with_content(
                "These particulars are intended as a guide and must not be relied upon as statements of fact.",
            )
            .with_style("font-size", "11px")
            .with_style("margin-top", "32px")
            .with_style("color", "$secondary"),
    ]
}

fn back_cover() -> Vec<Element> {
    vec![
        Element::new(ElementKind::Container)
            .with_style("padding", "64px")
            .with_style("text-align", "center")
            .with_children([
                Element::new(ElementKind::Logo)
                    .with_id("agency_logo")
                    .with_role("agency_logo")
                    .with_placeholder("Agency logo")
                    .with_style("height", "80px"),
                Element::new(ElementKind::Text)
                    .with_role("agent_name")
                    .with_placeholder("Your local office")
                    .with_style("font-family", "$heading-font")
                    .with_style("font-size", "22px")
                    .with_style("margin-top", "24px"),
                Element::new(ElementKind::ContactRow)
                    .with_role("agent_phone")
                    .with_placeholder("01234 567 890"),
                Element::new(ElementKind::ContactRow)
                    .with_role("agent_email")
                    .with_placeholder("sales@example.co.uk"),
            ]),
    ]
}
