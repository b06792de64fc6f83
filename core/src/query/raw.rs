use common::xml::XmlNode;
use std::collections::{BTreeMap, HashMap};

/**
 * Flatten a Task document tree into dotted-path columns below the `Task` root.
 * Leaf text becomes the value, a present-but-empty element becomes an empty
 * string. Repeated sibling names get a `#2`, `#3`, ... suffix so repeated
 * elements (multiple `Exec` actions) stay distinct columns.
 */
pub(crate) fn flatten_tree(tree: &XmlNode) -> BTreeMap<String, String> {
    let mut flat = BTreeMap::new();
    flatten_children(tree, "", &mut flat);
    flat
}

fn flatten_children(node: &XmlNode, prefix: &str, flat: &mut BTreeMap<String, String>) {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    for (name, child) in node.children() {
        let count = seen.entry(name.as_str()).or_insert(0);
        *count += 1;

        let suffixed = if *count == 1 {
            name.clone()
        } else {
            format!("{name}#{count}")
        };
        let key = if prefix.is_empty() {
            suffixed
        } else {
            format!("{prefix}.{suffixed}")
        };

        match child {
            XmlNode::Text(value) => {
                flat.insert(key, value.clone());
            }
            XmlNode::Element(children) => {
                if children.is_empty() {
                    flat.insert(key, String::new());
                } else {
                    flatten_children(child, &key, flat);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::flatten_tree;
    use crate::tasks::xml::process_xml;

    #[test]
    fn test_flatten_tree() {
        let xml = "<Task>
            <Settings><Enabled>true</Enabled><Hidden>false</Hidden></Settings>
            <Triggers><BootTrigger/></Triggers>
          </Task>";
        let tree = process_xml(xml, "test").unwrap();
        let flat = flatten_tree(&tree);

        assert_eq!(flat.get("Settings.Enabled").unwrap(), "true");
        assert_eq!(flat.get("Settings.Hidden").unwrap(), "false");
        assert_eq!(flat.get("Triggers.BootTrigger").unwrap(), "");
        assert_eq!(flat.len(), 3);
    }

    #[test]
    fn test_flatten_tree_repeated_siblings() {
        let xml = "<Task><Actions>
            <Exec><Command>cmd.exe</Command></Exec>
            <Exec><Command>notepad.exe</Command></Exec>
          </Actions></Task>";
        let tree = process_xml(xml, "test").unwrap();
        let flat = flatten_tree(&tree);

        assert_eq!(flat.get("Actions.Exec.Command").unwrap(), "cmd.exe");
        assert_eq!(flat.get("Actions.Exec#2.Command").unwrap(), "notepad.exe");
    }
}
