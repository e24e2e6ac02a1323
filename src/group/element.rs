// src/group/element.rs

use std::fmt::{self, Display};

use crate::group::computed::Computed;

pub const IDENTITY_ID: &str = "e";
pub const IDENTITY_CLASS: &str = "1A";

/// An element of M known only by an opaque tag.
///
/// No group law is modelled. The identity `"e"` is the only element whose
/// order and conjugacy class are resolved; everything else reports
/// [`Computed::NotComputed`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MonsterElement {
    element_id: String,
}

impl MonsterElement {
    /// `None` and the empty string both give the identity.
    pub fn new(element_id: Option<&str>) -> Self {
        let element_id = match element_id {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => IDENTITY_ID.to_string(),
        };
        MonsterElement { element_id }
    }

    pub fn identity() -> Self {
        MonsterElement::new(None)
    }

    pub fn element_id(&self) -> &str {
        &self.element_id
    }

    pub fn is_identity(&self) -> bool {
        self.element_id == IDENTITY_ID
    }

    pub fn order(&self) -> Computed<u64> {
        if self.is_identity() {
            Computed::Known(1)
        } else {
            Computed::NotComputed
        }
    }

    pub fn conjugacy_class(&self) -> Computed<&'static str> {
        if self.is_identity() {
            Computed::Known(IDENTITY_CLASS)
        } else {
            Computed::NotComputed
        }
    }
}

impl Default for MonsterElement {
    fn default() -> Self {
        MonsterElement::identity()
    }
}

impl From<&str> for MonsterElement {
    fn from(element_id: &str) -> Self {
        MonsterElement::new(Some(element_id))
    }
}

impl Display for MonsterElement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "MonsterElement({})", self.element_id)
    }
}
