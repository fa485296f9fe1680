mod attr;
mod content;
mod node;

pub use attr::{is_boolean_attr, is_valid_attr_name, AttrValue, Attributes};
pub use content::Content;
pub use node::Element;

/// Find an element by its `id` attribute in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.get_id() == Some(id) {
        return Some(root);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find_element(child, id) {
                return Some(found);
            }
        }
    }

    None
}
