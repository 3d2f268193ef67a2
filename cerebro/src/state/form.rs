//! Generic text form used by every dialog: login, expense, commitment,
//! new section and the detail prompts.

use cerebro_api::endpoints::dashboard::DashboardSnapshot;

pub const PAYMENT_METHODS: [&str; 4] = ["EFECTIVO", "DEBITO", "CREDITO", "TRANSFERENCIA"];
pub const COMMITMENT_KINDS: [&str; 2] = ["DEBT", "LOAN"];

#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    Text,
    /// Rendered masked.
    Secret,
    Choice { options: Vec<String>, selected: usize },
    Toggle(bool),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: &'static str,
    pub label: &'static str,
    pub value: String,
    pub kind: FieldKind,
}

impl Field {
    pub fn text(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            value: String::new(),
            kind: FieldKind::Text,
        }
    }

    pub fn secret(name: &'static str, label: &'static str) -> Self {
        Self {
            kind: FieldKind::Secret,
            ..Self::text(name, label)
        }
    }

    pub fn choice<S: Into<String>>(
        name: &'static str,
        label: &'static str,
        options: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            kind: FieldKind::Choice {
                options: options.into_iter().map(Into::into).collect(),
                selected: 0,
            },
            ..Self::text(name, label)
        }
    }

    pub fn toggle(name: &'static str, label: &'static str, on: bool) -> Self {
        Self {
            kind: FieldKind::Toggle(on),
            ..Self::text(name, label)
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Current value as the submit handlers see it.
    pub fn current(&self) -> &str {
        match &self.kind {
            FieldKind::Choice { options, selected } => {
                options.get(*selected).map(String::as_str).unwrap_or("")
            }
            _ => &self.value,
        }
    }

    fn accepts_text(&self) -> bool {
        matches!(self.kind, FieldKind::Text | FieldKind::Secret)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Form {
    pub fields: Vec<Field>,
    pub focused: usize,
    /// Validation or server message shown under the fields.
    pub error: Option<String>,
    /// Set while the submit request is in flight.
    pub submitting: bool,
}

impl Form {
    pub fn new(fields: Vec<Field>) -> Self {
        Self {
            fields,
            ..Default::default()
        }
    }

    pub fn login() -> Self {
        Self::new(vec![
            Field::text("username", "Email"),
            Field::secret("password", "Password"),
            Field::toggle("remember", "Remember me", true),
        ])
    }

    /// Expense form. Section and category options come from the current snapshot.
    pub fn expense(snapshot: Option<&DashboardSnapshot>) -> Self {
        let mut form = Self::new(vec![
            Field::text("amount", "Amount"),
            Field::text("concept", "Concept"),
            Field::choice("section", "Section", Vec::<String>::new()),
            Field::choice("category", "Category", Vec::<String>::new()),
            Field::choice("payment_method", "Payment method", PAYMENT_METHODS),
            Field::text("receipt", "Receipt photo (path)"),
        ]);
        form.sync_sections(snapshot);
        form
    }

    pub fn commitment() -> Self {
        Self::new(vec![
            Field::text("title", "Title"),
            Field::choice("type", "Type", COMMITMENT_KINDS),
            Field::text("amount", "Amount"),
            Field::text("due_date", "Due date (YYYY-MM-DD)"),
        ])
    }

    pub fn new_section() -> Self {
        Self::new(vec![
            Field::text("section", "Section name"),
            Field::text("category", "First category"),
            Field::text("budget", "Budget"),
        ])
    }

    pub fn new_category() -> Self {
        Self::new(vec![
            Field::text("category", "Category name"),
            Field::text("budget", "Budget"),
        ])
    }

    pub fn budget_edit(current: i64) -> Self {
        Self::new(vec![
            Field::text("budget", "New budget").with_value(current.to_string())
        ])
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut Field> {
        self.fields.iter_mut().find(|f| f.name == name)
    }

    pub fn value(&self, name: &str) -> &str {
        self.field(name).map(Field::current).unwrap_or("")
    }

    pub fn is_checked(&self, name: &str) -> bool {
        matches!(
            self.field(name).map(|f| &f.kind),
            Some(FieldKind::Toggle(true))
        )
    }

    pub fn focused_field(&self) -> Option<&Field> {
        self.fields.get(self.focused)
    }

    pub fn focus_next(&mut self) {
        if !self.fields.is_empty() {
            self.focused = (self.focused + 1) % self.fields.len();
        }
    }

    pub fn focus_prev(&mut self) {
        if !self.fields.is_empty() {
            self.focused = (self.focused + self.fields.len() - 1) % self.fields.len();
        }
    }

    pub fn push_char(&mut self, c: char) {
        if let Some(field) = self.fields.get_mut(self.focused) {
            if field.accepts_text() {
                field.value.push(c);
                self.error = None;
            }
        }
    }

    pub fn pop_char(&mut self) {
        if let Some(field) = self.fields.get_mut(self.focused) {
            if field.accepts_text() {
                field.value.pop();
            }
        }
    }

    /// Cycle the focused choice, or flip the focused toggle.
    /// Returns the name of the field that changed.
    pub fn cycle(&mut self, forward: bool) -> Option<&'static str> {
        let field = self.fields.get_mut(self.focused)?;
        match &mut field.kind {
            FieldKind::Choice { options, selected } if !options.is_empty() => {
                let len = options.len();
                *selected = if forward {
                    (*selected + 1) % len
                } else {
                    (*selected + len - 1) % len
                };
                Some(field.name)
            }
            FieldKind::Toggle(on) => {
                *on = !*on;
                Some(field.name)
            }
            _ => None,
        }
    }

    /// Replace a choice field's options, keeping the selection when it still exists.
    pub fn set_options(&mut self, name: &str, new_options: Vec<String>) {
        if let Some(field) = self.field_mut(name) {
            if let FieldKind::Choice { options, selected } = &mut field.kind {
                let current = options.get(*selected).cloned();
                *selected = current
                    .and_then(|c| new_options.iter().position(|o| *o == c))
                    .unwrap_or(0);
                *options = new_options;
            }
        }
    }

    /// Refresh the section choices from a snapshot and the category choices
    /// from the selected section.
    pub fn sync_sections(&mut self, snapshot: Option<&DashboardSnapshot>) {
        let sections = snapshot
            .map(|s| s.section_names().map(str::to_string).collect())
            .unwrap_or_default();
        self.set_options("section", sections);
        self.sync_categories(snapshot);
    }

    pub fn sync_categories(&mut self, snapshot: Option<&DashboardSnapshot>) {
        let categories = snapshot
            .and_then(|s| s.section(self.value("section")))
            .map(|section| section.category_names().map(str::to_string).collect())
            .unwrap_or_default();
        self.set_options("category", categories);
    }
}
