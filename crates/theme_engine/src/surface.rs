use std::{collections::BTreeMap, fmt::Write as _};

/// Root rendering surface that receives style variables and the mode class.
pub trait StyleSurface {
    fn set_property(&mut self, name: &str, value: &str);
    fn remove_class(&mut self, class: &str);
    fn add_class(&mut self, class: &str);
}

/// In-memory document root: inline custom properties plus a class list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentRoot {
    properties: BTreeMap<String, String>,
    classes: Vec<String>,
}

impl DocumentRoot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|existing| existing == class)
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn class_attribute(&self) -> String {
        self.classes.join(" ")
    }

    /// Renders the properties as a `:root` rule, sorted by name.
    pub fn to_css(&self) -> String {
        let mut css = String::from(":root {\n");
        for (name, value) in &self.properties {
            let _ = writeln!(css, "  {name}: {value};");
        }
        css.push_str("}\n");
        css
    }
}

impl StyleSurface for DocumentRoot {
    fn set_property(&mut self, name: &str, value: &str) {
        self.properties.insert(name.to_string(), value.to_string());
    }

    fn remove_class(&mut self, class: &str) {
        self.classes.retain(|existing| existing != class);
    }

    fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }
}
