//! Detail view of the featured record

use std::rc::Rc;

use super::node::{Element, Node, Tag};
use super::searchable::SearchableField;
use crate::query::QueryFetcher;
use crate::record::{Record, text};
use crate::state::SearchHandles;

/// Id of the root region
pub const FEATURE_REGION: &str = "feature";
/// Class of the record wrapper inside the root
pub const OBJECT_REGION: &str = "object-feature";
/// Class of the facts section
pub const FACTS_REGION: &str = "facts";
/// Class of the photos section and of each photo entry
pub const PHOTOS_REGION: &str = "photos";

/// Renders a record into a render tree
///
/// Rendering is pure: the same record with the same fetcher and handles
/// always yields an equal tree. The handles are forwarded unchanged to every
/// [`SearchableField`] the view creates.
#[derive(Clone)]
pub struct FeatureView {
    fetcher: Rc<dyn QueryFetcher>,
    handles: SearchHandles,
}

impl FeatureView {
    #[must_use]
    pub fn new(fetcher: Rc<dyn QueryFetcher>, handles: SearchHandles) -> Self {
        Self { fetcher, handles }
    }

    /// Render the featured record, or the empty root when there is none
    #[must_use]
    pub fn render(&self, record: Option<&Record>) -> Node {
        let root = Element::new(Tag::Main).with_id(FEATURE_REGION);
        let Some(record) = record else {
            return root.into();
        };

        root.with_child(
            Element::new(Tag::Div)
                .with_class(OBJECT_REGION)
                .with_child(Self::header(record))
                .with_child(self.facts(record))
                .with_child(Self::photos(record)),
        )
        .into()
    }

    fn header(record: &Record) -> Element {
        Element::new(Tag::Header)
            .with_child(Element::new(Tag::H3).with_child(text(&record.title)))
            .with_child(Element::new(Tag::H4).with_child(text(&record.dated)))
    }

    fn facts(&self, record: &Record) -> Element {
        let culture = text(&record.culture);
        let technique = text(&record.technique);
        let medium = text(&record.medium);

        Element::new(Tag::Section)
            .with_class(FACTS_REGION)
            .with_child(
                Element::new(Tag::Span)
                    .with_class("title")
                    .with_child(text(&record.description)),
            )
            .with_child(content(format!("STYLE: {}", text(&record.style))))
            .with_child(content(format!("DIMENSIONS: {}", text(&record.dimensions))))
            .with_child(content(text(&record.division)))
            .with_child(content(format!("CONTACT: {}", text(&record.contact))))
            .with_child(content(format!("CREDIT: {}", text(&record.creditline))))
            .with_child(self.labeled("CULTURE: ", culture, culture))
            .with_child(self.labeled("TECHNIQUE: ", technique, technique))
            .with_child(self.labeled("MEDIUM: ", medium, &medium.to_lowercase()))
            .with_child(self.people(record))
    }

    /// One searchable per person, each searching that person's own name
    fn people(&self, record: &Record) -> Element {
        let entries = record.people().iter().map(|person| {
            let name = text(&person.displayname);
            Node::from(
                Element::new(Tag::Span)
                    .with_class("content")
                    .with_child(self.searchable(name, name)),
            )
        });

        Element::new(Tag::Span)
            .with_class("content")
            .with_child("PEOPLE(S): ")
            .with_children(entries)
    }

    /// One entry per image; every entry shows the record's primary image
    fn photos(record: &Record) -> Element {
        let entries = record.images().iter().map(|_| {
            let entry = Element::new(Tag::Div).with_class(PHOTOS_REGION);
            let entry = match &record.primaryimageurl {
                Some(url) => entry.with_child(
                    Element::new(Tag::Img)
                        .with_attr("src", url.as_str())
                        .with_attr("alt", text(&record.description)),
                ),
                None => entry,
            };
            Node::from(entry)
        });

        Element::new(Tag::Section)
            .with_class(PHOTOS_REGION)
            .with_children(entries)
    }

    fn labeled(&self, label: &'static str, term: &str, value: &str) -> Element {
        Element::new(Tag::Span)
            .with_class("content")
            .with_child(label)
            .with_child(self.searchable(term, value))
    }

    fn searchable(&self, term: &str, value: &str) -> SearchableField {
        SearchableField::new(term, value, Rc::clone(&self.fetcher), self.handles.clone())
    }
}

fn content(body: impl Into<Node>) -> Element {
    Element::new(Tag::Span).with_class("content").with_child(body)
}
