use serde::Serialize;

/**
 * Parsed representation of one XML element.
 * Child order and repeated element names are preserved, which the Task schema
 * relies on (multiple `Exec` actions, repeated weekday elements). Attributes
 * are discarded. A leaf with text becomes `Text`; an element that is present
 * but has no children and no text becomes an empty `Element`.
 */
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum XmlNode {
    Text(String),
    Element(Vec<(String, XmlNode)>),
}

impl XmlNode {
    /// Child elements in document order. Empty for text leaves
    pub fn children(&self) -> &[(String, XmlNode)] {
        match self {
            XmlNode::Text(_) => &[],
            XmlNode::Element(children) => children,
        }
    }

    /// First child with the provided element name
    pub fn child(&self, name: &str) -> Option<&XmlNode> {
        self.children()
            .iter()
            .find(|(child_name, _)| child_name == name)
            .map(|(_, node)| node)
    }

    /// Text content if this node is a leaf
    pub fn text(&self) -> Option<&str> {
        match self {
            XmlNode::Text(value) => Some(value),
            XmlNode::Element(_) => None,
        }
    }

    /// Follow a path of element names, taking the first match at each step
    pub fn descend(&self, path: &[&str]) -> Option<&XmlNode> {
        let mut node = self;
        for name in path {
            node = node.child(name)?;
        }
        Some(node)
    }

    /// Text content at the end of a path of element names
    pub fn text_at(&self, path: &[&str]) -> Option<&str> {
        self.descend(path).and_then(|node| node.text())
    }
}
