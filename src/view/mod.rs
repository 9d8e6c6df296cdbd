//! View layer
//!
//! Turns a featured [`Record`](crate::record::Record) into a render tree and
//! owns the click → fetch → publish sequence of searchable fields.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────┐
//! │  ViewController            │  owns ViewState
//! └─────────────┬──────────────┘
//!               │ SearchHandles (setters)
//!               ▼
//! ┌────────────────────────────┐
//! │  FeatureView::render       │  pure: Record -> Node
//! └─────────────┬──────────────┘
//!               │ forwards handles verbatim
//!               ▼
//! ┌────────────────────────────┐
//! │  SearchableField::activate │  loading -> fetch -> results -> loading
//! └────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//! use featureview::query::CatalogFetcher;
//! use featureview::record::Record;
//! use featureview::state::ViewController;
//! use featureview::view::to_html;
//!
//! let controller = ViewController::default();
//! let view = controller.view(Rc::new(CatalogFetcher::default()));
//!
//! let html = to_html(&view.render(None));
//! assert_eq!(html, r#"<main id="feature"></main>"#);
//!
//! let tree = view.render(Some(&Record::titled("Vase")));
//! assert_eq!(tree.searchables().len(), 3);
//! ```

mod feature;
mod html;
mod node;
mod searchable;
mod text;

pub use feature::{FACTS_REGION, FEATURE_REGION, FeatureView, OBJECT_REGION, PHOTOS_REGION};
pub use html::to_html;
pub use node::{Element, Node, Tag};
pub use searchable::{Activation, PendingQuery, SearchableField};
pub use text::to_text;
