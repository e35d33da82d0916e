// src/specs/thing.rs
//! Spec for the catalog `thing` document.
//!
//! ```xml
//! <items>
//!   <item type="boardgame" id="174430">
//!     <link type="boardgameimplementation" id="…" inbound="true"/>
//!     <link type="boardgameversion" id="…" inbound="true"/>
//!     <versions>
//!       <item type="boardgameversion" id="…">…</item>
//!     </versions>
//!     <statistics><ratings><averageweight value="3.9149"/></ratings></statistics>
//!   </item>
//! </items>
//! ```
//!
//! Only the first `item` under the root is read.

use std::collections::BTreeSet;

use roxmltree::{Document, Node};

use crate::data::Enrichment;
use crate::error::{Error, Result};

pub const EXPANSION_TYPE: &str = "boardgameexpansion";
pub const IMPLEMENTATION_LINK: &str = "boardgameimplementation";
pub const VERSION_LINK: &str = "boardgameversion";

/// What the catalog tells us about one game.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Details {
    pub weight: f64,
    pub is_expansion: bool,
    pub reimplements: bool,
    /// Distinct version ids, own id excluded.
    pub version_ids: BTreeSet<String>,
}

impl Details {
    pub fn version_count(&self) -> usize { self.version_ids.len() }

    pub fn has_versions(&self) -> bool { self.version_count() > 1 }

    pub fn enrichment(&self) -> Enrichment {
        Enrichment {
            weight: self.weight,
            is_expansion: self.is_expansion,
            reimplements: self.reimplements,
            version_count: self.version_count(),
        }
    }
}

fn parse_error(id: u32, reason: impl ToString) -> Error {
    Error::Parse { id, reason: reason.to_string() }
}

fn child<'a, 'i>(node: Node<'a, 'i>, tag: &str) -> Option<Node<'a, 'i>> {
    node.children().find(|n| n.has_tag_name(tag))
}

/// `<link type=… inbound="true">`
fn is_inbound_link(node: &Node, link_type: &str) -> bool {
    node.has_tag_name("link")
        && node.attribute("type") == Some(link_type)
        && node.attribute("inbound") == Some("true")
}

pub fn parse_details(doc: &str, game_id: u32) -> Result<Details> {
    let xml = Document::parse(doc).map_err(|e| parse_error(game_id, e))?;
    let item = child(xml.root_element(), "item")
        .ok_or_else(|| parse_error(game_id, "no <item> in document"))?;

    let weight = match child(item, "statistics")
        .and_then(|n| child(n, "ratings"))
        .and_then(|n| child(n, "averageweight"))
    {
        Some(node) => {
            let raw = node.attribute("value").unwrap_or("0").trim();
            raw.parse::<f64>()
                .map_err(|_| parse_error(game_id, format!("averageweight {raw:?} is not a number")))?
        }
        None => 0.0,
    };

    let is_expansion = item.attribute("type") == Some(EXPANSION_TYPE);
    let reimplements = item
        .descendants()
        .any(|n| is_inbound_link(&n, IMPLEMENTATION_LINK));

    let own = game_id.to_string();
    let not_self = |id: &&str| *id != own;

    let listed = item
        .descendants()
        .find(|n| n.has_tag_name("versions"))
        .into_iter()
        .flat_map(|versions| versions.children().filter(|n| n.has_tag_name("item")))
        .filter_map(|n| n.attribute("id"));

    let linked = item
        .descendants()
        .filter(|n| is_inbound_link(n, VERSION_LINK))
        .filter_map(|n| n.attribute("id"));

    let version_ids = listed
        .chain(linked)
        .filter(not_self)
        .map(|id| s!(id))
        .collect();

    Ok(Details { weight, is_expansion, reimplements, version_ids })
}
