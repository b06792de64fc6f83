use super::error::TaskError;
use crate::utils::encoding::read_xml;
use common::xml::XmlNode;
use log::error;
use quick_xml::{events::Event, Reader};

/// In-progress element while the reader walks its subtree
struct PartialNode {
    name: String,
    children: Vec<(String, XmlNode)>,
    text: String,
}

/// Parse a Schedule Task XML file into a raw document tree. Windows Vista and
/// higher store Tasks as XML under `C:\Windows\System32\Tasks`
pub(crate) fn parse_task_xml(path: &str) -> Result<XmlNode, TaskError> {
    let xml_result = read_xml(path);
    let xml_data = match xml_result {
        Ok(result) => result,
        Err(err) => {
            error!("[tasks] Could not read Task XML file at {path}: {err:?}");
            return Err(TaskError::ReadXml);
        }
    };

    process_xml(&xml_data, path)
}

/// Build the document tree from XML text. Child order is preserved and element
/// attributes are dropped, only the element structure and text matter here
pub(crate) fn process_xml(xml: &str, path: &str) -> Result<XmlNode, TaskError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<PartialNode> = Vec::new();
    let mut root: Option<(String, XmlNode)> = None;

    loop {
        match reader.read_event() {
            Err(err) => {
                error!("[tasks] Could not read XML data in {path}: {err:?}");
                return Err(TaskError::Parse);
            }
            Ok(Event::Eof) => break,
            Ok(Event::Start(tag)) => {
                stack.push(PartialNode {
                    name: String::from_utf8_lossy(tag.name().as_ref()).to_string(),
                    children: Vec::new(),
                    text: String::new(),
                });
            }
            Ok(Event::Empty(tag)) => {
                let name = String::from_utf8_lossy(tag.name().as_ref()).to_string();
                let node = XmlNode::Element(Vec::new());
                match stack.last_mut() {
                    Some(parent) => parent.children.push((name, node)),
                    None => root = Some((name, node)),
                }
            }
            Ok(Event::Text(text)) => {
                let value = match text.unescape() {
                    Ok(result) => result,
                    Err(err) => {
                        error!("[tasks] Could not unescape XML text in {path}: {err:?}");
                        return Err(TaskError::Parse);
                    }
                };
                if let Some(partial) = stack.last_mut() {
                    partial.text.push_str(&value);
                }
            }
            Ok(Event::CData(data)) => {
                if let Some(partial) = stack.last_mut() {
                    partial.text.push_str(&String::from_utf8_lossy(&data));
                }
            }
            Ok(Event::End(_tag)) => {
                let done = match stack.pop() {
                    Some(result) => result,
                    None => {
                        error!("[tasks] Unbalanced end tag in {path}");
                        return Err(TaskError::Parse);
                    }
                };
                let node = if done.children.is_empty() && !done.text.is_empty() {
                    XmlNode::Text(done.text)
                } else {
                    XmlNode::Element(done.children)
                };
                match stack.last_mut() {
                    Some(parent) => parent.children.push((done.name, node)),
                    None => root = Some((done.name, node)),
                }
            }
            // Declarations, comments, and processing instructions
            Ok(_) => (),
        }
    }

    if !stack.is_empty() {
        error!("[tasks] XML document in {path} ended with unclosed elements");
        return Err(TaskError::Parse);
    }

    match root {
        Some((name, node)) => {
            if name != "Task" {
                error!("[tasks] Root element in {path} is {name} not Task");
                return Err(TaskError::NotTask);
            }
            Ok(node)
        }
        None => {
            error!("[tasks] No root element found in {path}");
            Err(TaskError::Parse)
        }
    }
}
