/// A `(value, label)` option for a form `<select>`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    pub value: &'static str,
    pub label: &'static str,
}

impl Choice {
    pub fn new(value: &'static str, label: &'static str) -> Self {
        Self { value, label }
    }

    /// Option whose value and label are the same name
    pub fn named(name: &'static str) -> Self {
        Self::new(name, name)
    }
}
