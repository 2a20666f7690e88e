//! Form Control State
//!
//! Live state of input, textarea and select elements that is not
//! reflected in attributes: dirty values, checkedness and option
//! selectedness. Unset entries fall back to the attribute defaults.

use std::collections::HashMap;

use crate::{DomError, DomResult, DomTree, NodeId};

/// Live state of the form controls of one document
#[derive(Debug, Clone, Default)]
pub struct FormState {
    values: HashMap<NodeId, String>,
    checked: HashMap<NodeId, bool>,
    /// Explicit selection per select, as the selected option ids
    selections: HashMap<NodeId, Vec<NodeId>>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of an input or textarea
    ///
    /// Returns `None` for other nodes.
    pub fn value(&self, tree: &DomTree, node: NodeId) -> Option<String> {
        match tree.tag_name(node)? {
            "input" => Some(
                self.values
                    .get(&node)
                    .cloned()
                    .unwrap_or_else(|| tree.attribute(node, "value").unwrap_or("").to_string()),
            ),
            "textarea" => Some(
                self.values
                    .get(&node)
                    .cloned()
                    .unwrap_or_else(|| tree.text_content(node)),
            ),
            _ => None,
        }
    }

    /// Set the user-entered value of an input or textarea
    pub fn set_value(&mut self, tree: &DomTree, node: NodeId, value: &str) -> DomResult<()> {
        match tree.tag_name(node) {
            Some("input" | "textarea") => {
                self.values.insert(node, value.to_string());
                Ok(())
            }
            Some(_) => Err(DomError::InvalidNodeType),
            None => Err(DomError::NotFound),
        }
    }

    /// Checkedness of a checkbox or radio input
    pub fn checked(&self, tree: &DomTree, node: NodeId) -> bool {
        if !is_checkable(tree, node) {
            return false;
        }
        self.checked
            .get(&node)
            .copied()
            .unwrap_or_else(|| tree.attribute(node, "checked").is_some())
    }

    /// Set the checkedness of a checkbox or radio input
    ///
    /// Checking a radio unchecks the other radios of its group.
    pub fn set_checked(&mut self, tree: &DomTree, node: NodeId, checked: bool) -> DomResult<()> {
        if !tree.contains(node) {
            return Err(DomError::NotFound);
        }
        if !is_checkable(tree, node) {
            return Err(DomError::InvalidNodeType);
        }
        if checked && input_type(tree, node) == "radio" {
            for other in radio_group(tree, node) {
                self.checked.insert(other, false);
            }
        }
        self.checked.insert(node, checked);
        Ok(())
    }

    /// Options of a select in tree order, including those in optgroups
    pub fn options(&self, tree: &DomTree, select: NodeId) -> Vec<NodeId> {
        if tree.tag_name(select) != Some("select") {
            return Vec::new();
        }
        tree.descendants(select)
            .filter(|(_, node)| node.as_element().is_some_and(|e| e.name == "option"))
            .map(|(id, _)| id)
            .collect()
    }

    /// Selected options of a select in tree order
    pub fn selected_options(&self, tree: &DomTree, select: NodeId) -> Vec<NodeId> {
        let options = self.options(tree, select);
        if let Some(explicit) = self.selections.get(&select) {
            return options.into_iter().filter(|o| explicit.contains(o)).collect();
        }

        let marked: Vec<NodeId> = options
            .iter()
            .copied()
            .filter(|&o| tree.attribute(o, "selected").is_some())
            .collect();
        if !is_single_select(tree, select) {
            return marked;
        }

        // A drop-down always shows one option: the last marked one, or
        // else the first option that is not disabled.
        if let Some(&last) = marked.last() {
            return vec![last];
        }
        options
            .into_iter()
            .find(|&o| tree.attribute(o, "disabled").is_none())
            .into_iter()
            .collect()
    }

    /// Index of the first selected option
    pub fn selected_index(&self, tree: &DomTree, select: NodeId) -> Option<usize> {
        let first = *self.selected_options(tree, select).first()?;
        self.options(tree, select).iter().position(|&o| o == first)
    }

    /// Select exactly the option at `index`, or none with `None`
    pub fn set_selected_index(
        &mut self,
        tree: &DomTree,
        select: NodeId,
        index: Option<usize>,
    ) -> DomResult<()> {
        match tree.tag_name(select) {
            Some("select") => {}
            Some(_) => return Err(DomError::InvalidNodeType),
            None => return Err(DomError::NotFound),
        }
        let options = self.options(tree, select);
        let selection = match index {
            Some(i) => vec![*options.get(i).ok_or(DomError::IndexOutOfRange(i))?],
            None => Vec::new(),
        };
        self.selections.insert(select, selection);
        Ok(())
    }

    /// Forget all live state, restoring the attribute defaults
    pub fn reset(&mut self) {
        self.values.clear();
        self.checked.clear();
        self.selections.clear();
    }
}

fn input_type(tree: &DomTree, node: NodeId) -> String {
    tree.attribute(node, "type").unwrap_or("text").to_ascii_lowercase()
}

fn is_checkable(tree: &DomTree, node: NodeId) -> bool {
    tree.tag_name(node) == Some("input") && matches!(input_type(tree, node).as_str(), "checkbox" | "radio")
}

fn is_single_select(tree: &DomTree, select: NodeId) -> bool {
    let size = tree
        .attribute(select, "size")
        .and_then(|s| s.trim().parse::<u32>().ok())
        .unwrap_or(1);
    tree.attribute(select, "multiple").is_none() && size <= 1
}

fn form_owner(tree: &DomTree, node: NodeId) -> Option<NodeId> {
    let mut current = tree.parent(node);
    while let Some(id) = current {
        if tree.tag_name(id) == Some("form") {
            return Some(id);
        }
        current = tree.parent(id);
    }
    None
}

/// Other radios sharing the name and form owner of `radio`
fn radio_group(tree: &DomTree, radio: NodeId) -> Vec<NodeId> {
    let Some(name) = tree.attribute(radio, "name").filter(|n| !n.is_empty()) else {
        return Vec::new();
    };
    let owner = form_owner(tree, radio);
    tree.descendants(tree.root())
        .map(|(id, _)| id)
        .filter(|&id| {
            id != radio
                && is_checkable(tree, id)
                && input_type(tree, id) == "radio"
                && tree.attribute(id, "name") == Some(name)
                && form_owner(tree, id) == owner
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn select_with(tree: &mut DomTree, multiple: bool, selected: &[bool]) -> (NodeId, Vec<NodeId>) {
        let select = tree.create_element("select");
        if multiple {
            tree.set_attribute(select, "multiple", "").unwrap();
        }
        tree.append_child(tree.root(), select).unwrap();
        let mut options = Vec::new();
        for &sel in selected {
            let option = tree.create_element("option");
            if sel {
                tree.set_attribute(option, "selected", "").unwrap();
            }
            tree.append_child(select, option).unwrap();
            options.push(option);
        }
        (select, options)
    }

    #[test]
    fn test_single_select_defaults_to_first_option() {
        let mut tree = DomTree::new();
        let (select, options) = select_with(&mut tree, false, &[false, false]);
        let forms = FormState::new();
        assert_eq!(forms.selected_options(&tree, select), vec![options[0]]);
        assert_eq!(forms.selected_index(&tree, select), Some(0));
    }

    #[test]
    fn test_single_select_last_marked_wins() {
        let mut tree = DomTree::new();
        let (select, options) = select_with(&mut tree, false, &[true, false, true]);
        let forms = FormState::new();
        assert_eq!(forms.selected_options(&tree, select), vec![options[2]]);
    }

    #[test]
    fn test_multiple_select() {
        let mut tree = DomTree::new();
        let (select, options) = select_with(&mut tree, true, &[false, true, true]);
        let forms = FormState::new();
        assert_eq!(forms.selected_options(&tree, select), vec![options[1], options[2]]);
    }

    #[test]
    fn test_clear_selection() {
        let mut tree = DomTree::new();
        let (select, _) = select_with(&mut tree, false, &[false, false]);
        let mut forms = FormState::new();
        forms.set_selected_index(&tree, select, None).unwrap();
        assert!(forms.selected_options(&tree, select).is_empty());
        assert_eq!(forms.selected_index(&tree, select), None);
        assert_eq!(
            forms.set_selected_index(&tree, select, Some(5)),
            Err(DomError::IndexOutOfRange(5))
        );
    }

    #[test]
    fn test_values_and_checkedness() {
        let mut tree = DomTree::new();
        let input = tree.create_element("input");
        tree.set_attribute(input, "value", "initial").unwrap();
        tree.append_child(tree.root(), input).unwrap();

        let mut forms = FormState::new();
        assert_eq!(forms.value(&tree, input).as_deref(), Some("initial"));
        forms.set_value(&tree, input, "typed").unwrap();
        assert_eq!(forms.value(&tree, input).as_deref(), Some("typed"));

        assert!(!forms.checked(&tree, input));
        assert_eq!(forms.set_checked(&tree, input, true), Err(DomError::InvalidNodeType));
    }

    #[test]
    fn test_radio_group_exclusive() {
        let mut tree = DomTree::new();
        let mut radios = Vec::new();
        for _ in 0..2 {
            let radio = tree.create_element("input");
            tree.set_attribute(radio, "type", "radio").unwrap();
            tree.set_attribute(radio, "name", "g").unwrap();
            tree.append_child(tree.root(), radio).unwrap();
            radios.push(radio);
        }
        let mut forms = FormState::new();
        forms.set_checked(&tree, radios[0], true).unwrap();
        forms.set_checked(&tree, radios[1], true).unwrap();
        assert!(!forms.checked(&tree, radios[0]));
        assert!(forms.checked(&tree, radios[1]));
    }
}
