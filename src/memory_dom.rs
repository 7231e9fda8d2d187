//! In-memory element tree
//!
//! A small arena-backed DOM implementing [`Dom`], enough to run every
//! handler natively. Used by the test suites and by [`MemoryDom::demo_page`]
//! to stand up the stock markup without a browser.

use crate::config::PageConfig;
use crate::dom::Dom;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
struct Node {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    text: String,
    value: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    fn new(tag: &str, parent: Option<NodeId>) -> Self {
        Self {
            tag: tag.to_string(),
            id: None,
            classes: Vec::new(),
            text: String::new(),
            value: String::new(),
            parent,
            children: Vec::new(),
        }
    }

    fn is_form_control(&self) -> bool {
        matches!(self.tag.as_str(), "input" | "textarea" | "select")
    }
}

#[derive(Debug, Clone)]
pub struct MemoryDom {
    nodes: Vec<Node>,
    body: NodeId,
}

impl Default for MemoryDom {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDom {
    /// An empty document holding only `<body>`.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new("body", None)],
            body: NodeId(0),
        }
    }

    pub fn body_id(&self) -> NodeId {
        self.body
    }

    pub fn append_child(&mut self, parent: NodeId, tag: &str) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(tag, Some(parent)));
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Append an element with an optional id and initial classes.
    pub fn element(
        &mut self,
        parent: NodeId,
        tag: &str,
        id: Option<&str>,
        classes: &[&str],
    ) -> NodeId {
        let node = self.append_child(parent, tag);
        self.nodes[node.0].id = id.map(str::to_string);
        self.nodes[node.0].classes = classes.iter().map(|c| c.to_string()).collect();
        node
    }

    pub fn tag(&self, node: NodeId) -> &str {
        &self.nodes[node.0].tag
    }

    pub fn classes(&self, node: NodeId) -> &[String] {
        &self.nodes[node.0].classes
    }

    /// Build the stock demo page with `faq_pairs` question/answer pairs.
    ///
    /// Reveal targets, answers and error slots start hidden, matching the
    /// reference markup shipped with the web crate.
    pub fn demo_page(config: &PageConfig, faq_pairs: usize) -> Self {
        let ids = &config.ids;
        let hidden = config.classes.hidden.as_str();
        let mut dom = Self::new();
        let body = dom.body;

        let toggle = dom.element(body, "button", Some(ids.mode_toggle.as_str()), &[]);
        dom.set_text(&toggle, "Switch to Dark Mode");

        let events = dom.element(body, "section", None, &[]);
        dom.element(events, "button", Some(ids.click_button.as_str()), &[]);
        dom.element(events, "p", Some(ids.click_message.as_str()), &[hidden]);
        dom.element(events, "div", Some(ids.hover_box.as_str()), &[]);
        dom.element(events, "p", Some(ids.hover_message.as_str()), &[hidden]);
        dom.element(events, "input", Some(ids.name_input.as_str()), &[]);
        dom.element(events, "p", Some(ids.greeting.as_str()), &[hidden]);

        let faq = dom.element(body, "section", None, &[]);
        for _ in 0..faq_pairs {
            let item = dom.element(faq, "div", None, &[]);
            dom.element(item, "button", None, &[config.classes.faq_question.as_str()]);
            dom.element(item, "div", None, &[hidden]);
        }

        let form = dom.element(body, "form", Some(ids.signup_form.as_str()), &[]);
        for field_id in [&ids.full_name, &ids.email, &ids.password, &ids.confirm_password] {
            let group = dom.element(form, "div", None, &[]);
            dom.element(group, "label", None, &[]);
            dom.element(group, "input", Some(field_id.as_str()), &[]);
            dom.element(group, "span", None, &[config.classes.error_message.as_str(), hidden]);
        }
        dom.element(form, "button", None, &[]);
        dom.element(body, "p", Some(ids.form_success.as_str()), &[]);

        dom
    }

    fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.nodes[root.0].children.iter().rev().copied().collect();
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(self.nodes[node.0].children.iter().rev().copied());
        }
        out
    }
}

impl Dom for MemoryDom {
    type Handle = NodeId;

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        std::iter::once(self.body)
            .chain(self.descendants(self.body))
            .find(|n| self.nodes[n.0].id.as_deref() == Some(id))
    }

    fn elements_by_class(&self, class: &str) -> Vec<NodeId> {
        self.descendants(self.body)
            .into_iter()
            .filter(|n| self.has_class(n, class))
            .collect()
    }

    fn descendant_by_class(&self, root: &NodeId, class: &str) -> Option<NodeId> {
        self.descendants(*root)
            .into_iter()
            .find(|n| self.has_class(n, class))
    }

    fn parent(&self, element: &NodeId) -> Option<NodeId> {
        self.nodes[element.0].parent
    }

    fn next_element_sibling(&self, element: &NodeId) -> Option<NodeId> {
        let parent = self.nodes[element.0].parent?;
        let siblings = &self.nodes[parent.0].children;
        let pos = siblings.iter().position(|n| n == element)?;
        siblings.get(pos + 1).copied()
    }

    fn body(&self) -> Option<NodeId> {
        Some(self.body)
    }

    fn has_class(&self, element: &NodeId, class: &str) -> bool {
        self.nodes[element.0].classes.iter().any(|c| c == class)
    }

    fn add_class(&mut self, element: &NodeId, class: &str) {
        if !self.has_class(element, class) {
            self.nodes[element.0].classes.push(class.to_string());
        }
    }

    fn remove_class(&mut self, element: &NodeId, class: &str) {
        self.nodes[element.0].classes.retain(|c| c != class);
    }

    fn text(&self, element: &NodeId) -> String {
        self.nodes[element.0].text.clone()
    }

    fn set_text(&mut self, element: &NodeId, text: &str) {
        self.nodes[element.0].text = text.to_string();
    }

    fn value(&self, element: &NodeId) -> String {
        let node = &self.nodes[element.0];
        if node.is_form_control() {
            node.value.clone()
        } else {
            String::new()
        }
    }

    fn set_value(&mut self, element: &NodeId, value: &str) {
        let node = &mut self.nodes[element.0];
        if node.is_form_control() {
            node.value = value.to_string();
        }
    }

    fn reset_form(&mut self, form: &NodeId) {
        for node in self.descendants(*form) {
            if self.nodes[node.0].is_form_control() {
                self.nodes[node.0].value.clear();
            }
        }
    }
}
