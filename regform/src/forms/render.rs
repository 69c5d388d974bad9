//! Form rendering to HTML
//!
//! Projects a [`FormDefinition`], the current [`FormRecord`] and the current
//! [`ErrorMap`] to an HTML string with proper escaping. Styling differences
//! between variants live entirely in [`FormRenderOptions`].

use std::fmt::Write;

use super::builder::FormDefinition;
use super::error::ErrorMap;
use super::field::{FieldKind, FormField, InputType, SelectOption};
use crate::registration::{FieldValue, FormRecord};

/// Options for customizing form rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormRenderOptions {
    /// CSS class for form groups (wrapper around label + control + error)
    pub group_class: String,
    /// CSS class for labels
    pub label_class: String,
    /// CSS class for text-like inputs
    pub input_class: String,
    /// CSS class for select elements
    pub select_class: String,
    /// CSS class for the wrapper of each checkbox or radio option
    pub check_class: String,
    /// CSS class for checkbox and radio inputs
    pub check_input_class: String,
    /// CSS class for checkbox and radio labels
    pub check_label_class: String,
    /// Element used for inline error messages
    pub error_tag: String,
    /// CSS class for error messages
    pub error_class: String,
    /// CSS class for help text
    pub help_class: String,
    /// CSS class for submit button
    pub submit_class: String,
}

impl Default for FormRenderOptions {
    fn default() -> Self {
        Self::bootstrap()
    }
}

impl FormRenderOptions {
    /// Bootstrap classes
    #[must_use]
    pub fn bootstrap() -> Self {
        Self {
            group_class: "mb-3".into(),
            label_class: "form-label".into(),
            input_class: "form-control".into(),
            select_class: "form-select".into(),
            check_class: "form-check".into(),
            check_input_class: "form-check-input".into(),
            check_label_class: "form-check-label".into(),
            error_tag: "div".into(),
            error_class: "text-danger".into(),
            help_class: "form-text".into(),
            submit_class: "btn btn-primary".into(),
        }
    }

    /// Utility classes backed by a Tailwind stylesheet
    #[must_use]
    pub fn tailwind() -> Self {
        Self {
            group_class: "mb-6".into(),
            label_class: "label-title".into(),
            input_class: "input-title".into(),
            select_class: "input-title".into(),
            check_class: "flex items-center".into(),
            check_input_class: "mr-2".into(),
            check_label_class: "text-gray-700".into(),
            error_tag: "p".into(),
            error_class: "error-title".into(),
            help_class: "text-gray-500 text-xs".into(),
            submit_class: "btn".into(),
        }
    }
}

/// Renders forms to HTML
pub struct FormRenderer;

impl FormRenderer {
    /// Render a form with values from `record` and messages from `errors`
    #[must_use]
    pub fn render(
        form: &FormDefinition,
        record: &FormRecord,
        errors: &ErrorMap,
        options: &FormRenderOptions,
    ) -> String {
        let mut html = String::with_capacity(2048);

        html.push_str("<form");
        Self::write_attr(&mut html, "action", &form.action);
        Self::write_attr(&mut html, "method", &form.method);

        if let Some(ref id) = form.id {
            Self::write_attr(&mut html, "id", id);
        }
        if let Some(ref class) = form.class {
            Self::write_attr(&mut html, "class", class);
        }
        if form.novalidate {
            html.push_str(" novalidate");
        }
        html.push_str(">\n");

        for field in &form.fields {
            html.push_str(&Self::render_field(field, record, errors, options));
        }

        if let Some(ref text) = form.submit_text {
            let _ = writeln!(
                html,
                r#"  <button type="submit" class="{}">{}</button>"#,
                Self::escape_attr(&options.submit_class),
                Self::escape_html(text)
            );
        }

        html.push_str("</form>");
        html
    }

    fn render_field(
        field: &FormField,
        record: &FormRecord,
        errors: &ErrorMap,
        options: &FormRenderOptions,
    ) -> String {
        let mut html = String::with_capacity(256);
        let _ = writeln!(html, r#"  <div class="{}">"#, Self::escape_attr(&options.group_class));

        if let Some(ref label) = field.label {
            let _ = writeln!(
                html,
                r#"    <label for="{}" class="{}">{}</label>"#,
                Self::escape_attr(field.effective_id()),
                Self::escape_attr(&options.label_class),
                Self::escape_html(label)
            );
        }

        let value = record.value(field.field);
        let control = match (&field.kind, value) {
            (FieldKind::Input(input_type), FieldValue::Text(text)) => {
                Self::render_input(field, *input_type, text, options)
            }
            (FieldKind::Select { options: opts }, FieldValue::Text(text)) => {
                Self::render_select(field, opts, text, options)
            }
            (FieldKind::Radio { options: opts }, FieldValue::Text(text)) => {
                Self::render_choices(field, "radio", opts, |opt| opt.value == text, options)
            }
            (FieldKind::CheckboxGroup { options: opts }, value) => {
                Self::render_choices(field, "checkbox", opts, |opt| is_selected(value, opt), options)
            }
            // A set-valued field only renders as a checkbox group.
            (_, FieldValue::Set(_)) => String::new(),
        };
        html.push_str(&control);

        if let Some(error) = errors.get(field.field) {
            let _ = writeln!(
                html,
                r#"    <{tag} class="{}">{}</{tag}>"#,
                Self::escape_attr(&options.error_class),
                Self::escape_html(&error.message),
                tag = options.error_tag
            );
        }

        if let Some(ref help) = field.help_text {
            let _ = writeln!(
                html,
                r#"    <span class="{}">{}</span>"#,
                Self::escape_attr(&options.help_class),
                Self::escape_html(help)
            );
        }

        html.push_str("  </div>\n");
        html
    }

    fn render_input(
        field: &FormField,
        input_type: InputType,
        value: &str,
        options: &FormRenderOptions,
    ) -> String {
        let mut html = String::with_capacity(128);

        html.push_str("    <input");
        Self::write_attr(&mut html, "type", input_type.as_str());
        Self::write_attr(&mut html, "name", field.name());
        Self::write_attr(&mut html, "id", field.effective_id());
        Self::write_attr(&mut html, "class", &Self::build_class(&options.input_class, field));
        Self::write_attr(&mut html, "value", value);
        if let Some(ref placeholder) = field.placeholder {
            Self::write_attr(&mut html, "placeholder", placeholder);
        }

        html.push_str(">\n");
        html
    }

    fn render_select(
        field: &FormField,
        opts: &[SelectOption],
        value: &str,
        options: &FormRenderOptions,
    ) -> String {
        let mut html = String::with_capacity(256);

        html.push_str("    <select");
        Self::write_attr(&mut html, "name", field.name());
        Self::write_attr(&mut html, "id", field.effective_id());
        Self::write_attr(&mut html, "class", &Self::build_class(&options.select_class, field));
        html.push_str(">\n");

        for opt in opts {
            html.push_str("      <option");
            Self::write_attr(&mut html, "value", &opt.value);
            if opt.disabled {
                html.push_str(" disabled");
            }
            if opt.value == value {
                html.push_str(" selected");
            }
            html.push('>');
            html.push_str(&Self::escape_html(&opt.label));
            html.push_str("</option>\n");
        }

        html.push_str("    </select>\n");
        html
    }

    fn render_choices(
        field: &FormField,
        input_type: &str,
        opts: &[SelectOption],
        is_checked: impl Fn(&SelectOption) -> bool,
        options: &FormRenderOptions,
    ) -> String {
        let mut html = String::with_capacity(256);
        let class = Self::build_class(&options.check_input_class, field);

        for opt in opts {
            // Option values are unique within a field, so they make stable ids.
            let opt_id = if opt.value.is_empty() {
                field.effective_id().to_string()
            } else {
                opt.value.clone()
            };
            let _ = writeln!(html, r#"    <div class="{}">"#, Self::escape_attr(&options.check_class));
            html.push_str("      <input");
            Self::write_attr(&mut html, "type", input_type);
            Self::write_attr(&mut html, "name", field.name());
            Self::write_attr(&mut html, "id", &opt_id);
            Self::write_attr(&mut html, "value", &opt.value);
            Self::write_attr(&mut html, "class", &class);
            if is_checked(opt) {
                html.push_str(" checked");
            }
            if opt.disabled {
                html.push_str(" disabled");
            }
            html.push_str(">\n");
            let _ = writeln!(
                html,
                r#"      <label for="{}" class="{}">{}</label>"#,
                Self::escape_attr(&opt_id),
                Self::escape_attr(&options.check_label_class),
                Self::escape_html(&opt.label)
            );
            html.push_str("    </div>\n");
        }

        html
    }

    fn build_class(base: &str, field: &FormField) -> String {
        match field.class {
            Some(ref extra) if base.is_empty() => extra.clone(),
            Some(ref extra) => format!("{base} {extra}"),
            None => base.to_string(),
        }
    }

    fn write_attr(html: &mut String, name: &str, value: &str) {
        html.push(' ');
        html.push_str(name);
        html.push_str("=\"");
        html.push_str(&Self::escape_attr(value));
        html.push('"');
    }

    /// Escape a string for use in HTML attribute values
    fn escape_attr(s: &str) -> String {
        s.replace('&', "&amp;")
            .replace('"', "&quot;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
    }

    /// Escape a string for use in HTML content
    fn escape_html(s: &str) -> String {
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
    }
}

fn is_selected(value: FieldValue<'_>, opt: &SelectOption) -> bool {
    match value {
        FieldValue::Set(set) => set.iter().any(|interest| interest.as_str() == opt.value),
        FieldValue::Text(text) => text == opt.value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::FormBuilder;
    use crate::registration::{Field, FormVariant, Interest};

    fn render(form: &FormDefinition, record: &FormRecord, errors: &ErrorMap) -> String {
        FormRenderer::render(form, record, errors, &FormRenderOptions::bootstrap())
    }

    #[test]
    fn test_render_simple_form() {
        let form = FormBuilder::new("/test", "POST").submit("Submit").build();
        let html = render(&form, &FormRecord::default(), &ErrorMap::new());

        assert!(html.contains(r#"action="/test""#));
        assert!(html.contains(r#"method="POST""#));
        assert!(html.contains(r#"<button type="submit" class="btn btn-primary">Submit</button>"#));
    }

    #[test]
    fn test_render_input_with_value() {
        let form = FormBuilder::new("/test", "POST")
            .field(Field::Email, InputType::Email)
            .label("Email")
            .placeholder("Email")
            .done()
            .build();
        let record = FormRecord { email: "ada@example.com".into(), ..FormRecord::default() };
        let html = render(&form, &record, &ErrorMap::new());

        assert!(html.contains(r#"type="email""#));
        assert!(html.contains(r#"name="email""#));
        assert!(html.contains(r#"value="ada@example.com""#));
        assert!(html.contains(r#"<label for="email" class="form-label">Email</label>"#));
    }

    #[test]
    fn test_render_with_errors() {
        let form = FormBuilder::new("/test", "POST")
            .field(Field::Email, InputType::Email)
            .done()
            .field(Field::FirstName, InputType::Text)
            .done()
            .build();
        let mut errors = ErrorMap::new();
        errors.insert(Field::Email, "email", "Invalid Email Format");

        let html = render(&form, &FormRecord::default(), &errors);
        assert!(html.contains(r#"<div class="text-danger">Invalid Email Format</div>"#));
        assert_eq!(html.matches("text-danger").count(), 1);
    }

    #[test]
    fn test_render_select_marks_selected() {
        let form = FormBuilder::new("/test", "POST")
            .select(Field::Gender)
            .placeholder_option("Select Gender")
            .option("male", "Male")
            .option("female", "Female")
            .done()
            .build();
        let record = FormRecord { gender: "female".into(), ..FormRecord::default() };
        let html = render(&form, &record, &ErrorMap::new());

        assert!(html.contains(r#"<option value="female" selected>Female</option>"#));
        assert!(html.contains(r#"<option value="male">Male</option>"#));
        assert!(html.contains(r#"class="form-select""#));
    }

    #[test]
    fn test_render_interests_checked_by_membership() {
        let form = FormVariant::Manual.definition();
        let mut record = FormRecord::default();
        record.set_interest(Interest::Coding, true);
        record.set_interest(Interest::Reading, true);
        let html = render(&form, &record, &ErrorMap::new());

        assert!(html.contains(r#"name="interests" id="coding" value="coding" class="form-check-input" checked>"#));
        assert!(html.contains(r#"name="interests" id="sports" value="sports" class="form-check-input">"#));
        assert!(html.contains(r#"name="interests" id="reading" value="reading" class="form-check-input" checked>"#));
    }

    #[test]
    fn test_render_radio_checked() {
        let form = FormVariant::Schema.definition();
        let record = FormRecord { gender: "others".into(), ..FormRecord::default() };
        let html = FormRenderer::render(&form, &record, &ErrorMap::new(), &FormRenderOptions::tailwind());

        assert!(html.contains(r#"type="radio" name="gender" id="others" value="others" class="mr-2" checked>"#));
        assert!(!html.contains(r#"value="male" class="mr-2" checked"#));
    }

    #[test]
    fn test_tailwind_error_element() {
        let form = FormVariant::Schema.definition();
        let mut errors = ErrorMap::new();
        errors.insert(Field::Category, "required", "Please select a category");
        let html = FormRenderer::render(&form, &FormRecord::default(), &errors, &FormRenderOptions::tailwind());

        assert!(html.contains(r#"<p class="error-title">Please select a category</p>"#));
        assert!(html.contains(r#"<div class="mb-6">"#));
    }

    #[test]
    fn test_values_are_escaped() {
        let form = FormBuilder::new("/test", "POST")
            .field(Field::FirstName, InputType::Text)
            .done()
            .build();
        let record = FormRecord { first_name: r#""><script>"#.into(), ..FormRecord::default() };
        let html = render(&form, &record, &ErrorMap::new());

        assert!(html.contains(r#"value="&quot;&gt;&lt;script&gt;""#));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(FormRenderer::escape_html("<script>"), "&lt;script&gt;");
        assert_eq!(FormRenderer::escape_html("a & b"), "a &amp; b");
    }

    #[test]
    fn test_escape_attr() {
        assert_eq!(FormRenderer::escape_attr("\"test\""), "&quot;test&quot;");
    }
}
