use crate::AnswerValue;

/// A single field in a form.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// The key under which this field's answer is stored.
    name: String,

    /// The prompt text shown to the user.
    prompt: String,

    /// The kind of control used to capture the answer.
    kind: FieldKind,

    /// Whether the field must hold a valid, non-empty value before the form
    /// can be submitted.
    required: bool,
}

impl Field {
    /// Create a new optional field.
    pub fn new(name: impl Into<String>, prompt: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            prompt: prompt.into(),
            kind,
            required: false,
        }
    }

    /// Mark this field as required for submission.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Get the field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the prompt text.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Get the field kind.
    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }

    /// Whether this field is required for submission.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// The value this field holds before the user touches it.
    pub fn initial_value(&self) -> AnswerValue {
        match &self.kind {
            FieldKind::Text(_) | FieldKind::Select(_) | FieldKind::Radio(_) => {
                AnswerValue::Text(String::new())
            }
            FieldKind::Slider(slider) => AnswerValue::Int(slider.default),
        }
    }

    /// The equivalent of the native input checks a browser applies before a
    /// form can be submitted: presence for required fields, shape for email
    /// and numeric text inputs. Choices and sliders always pass.
    ///
    /// Backends run this in front of submission; the session itself never
    /// sees a failing field.
    pub fn check(&self, value: &AnswerValue) -> Result<(), String> {
        let FieldKind::Text(text) = &self.kind else {
            return Ok(());
        };
        let Some(s) = value.as_text() else {
            return Ok(());
        };

        if s.is_empty() {
            if self.required {
                return Err("This field is required".to_string());
            }
            return Ok(());
        }

        match text.flavor {
            TextFlavor::Plain => Ok(()),
            TextFlavor::Email => {
                let valid = s
                    .split_once('@')
                    .is_some_and(|(local, domain)| !local.is_empty() && !domain.is_empty());
                if valid {
                    Ok(())
                } else {
                    Err("Enter a valid email address".to_string())
                }
            }
            TextFlavor::Number => {
                if s.parse::<i64>().is_ok() {
                    Ok(())
                } else {
                    Err("Enter a whole number".to_string())
                }
            }
        }
    }
}

/// The kind of field, determining the control used to capture it.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    /// Single-line text input.
    Text(TextField),

    /// Pick one option from a dropdown-style list.
    Select(ChoiceField),

    /// Pick one option from an always-visible radio group.
    Radio(ChoiceField),

    /// Pick an integer from a bounded range.
    Slider(SliderField),
}

/// Configuration for a text input field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextField {
    /// What shape of text this input expects.
    pub flavor: TextFlavor,
}

impl TextField {
    /// Create a plain text input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an email-flavored input.
    pub fn email() -> Self {
        Self {
            flavor: TextFlavor::Email,
        }
    }

    /// Create a numeric input. The answer stays a string; only its shape is
    /// checked.
    pub fn number() -> Self {
        Self {
            flavor: TextFlavor::Number,
        }
    }
}

/// The shape of text a text input expects, mirroring HTML input types.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextFlavor {
    /// Any text.
    #[default]
    Plain,
    /// An email address.
    Email,
    /// A whole number.
    Number,
}

/// Configuration for a select or radio field.
#[derive(Debug, Clone, PartialEq)]
pub struct ChoiceField {
    /// The selectable option values, stored verbatim in the answer.
    pub options: Vec<String>,
}

impl ChoiceField {
    /// Create a choice field with the given options.
    pub fn new<S: Into<String>>(options: impl IntoIterator<Item = S>) -> Self {
        Self {
            options: options.into_iter().map(Into::into).collect(),
        }
    }
}

/// Configuration for a slider field.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderField {
    /// Minimum selectable value.
    pub min: i64,

    /// Maximum selectable value.
    pub max: i64,

    /// Starting value.
    pub default: i64,

    /// Caption shown at the low end of the track.
    pub low_caption: Option<String>,

    /// Caption shown at the high end of the track.
    pub high_caption: Option<String>,
}

impl SliderField {
    /// Create a slider over `min..=max` starting at `default`.
    pub fn new(min: i64, max: i64, default: i64) -> Self {
        Self {
            min,
            max,
            default,
            low_caption: None,
            high_caption: None,
        }
    }

    /// Set the captions shown at the ends of the track.
    pub fn with_captions(
        mut self,
        low: impl Into<String>,
        high: impl Into<String>,
    ) -> Self {
        self.low_caption = Some(low.into());
        self.high_caption = Some(high.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_values() {
        let text = Field::new("email", "Email", FieldKind::Text(TextField::email()));
        assert_eq!(text.initial_value(), AnswerValue::Text(String::new()));

        let slider = Field::new(
            "mood_intensity",
            "Rate it",
            FieldKind::Slider(SliderField::new(1, 10, 5)),
        );
        assert_eq!(slider.initial_value(), AnswerValue::Int(5));
    }

    #[test]
    fn required_text_rejects_empty() {
        let field = Field::new("email", "Email", FieldKind::Text(TextField::email())).required();
        assert!(field.check(&AnswerValue::Text(String::new())).is_err());
    }

    #[test]
    fn optional_text_accepts_empty() {
        let field = Field::new("nickname", "Nickname", FieldKind::Text(TextField::new()));
        assert!(field.check(&AnswerValue::Text(String::new())).is_ok());
    }

    #[test]
    fn email_shape() {
        let field = Field::new("email", "Email", FieldKind::Text(TextField::email())).required();
        assert!(field.check(&"a@b.com".into()).is_ok());
        assert!(field.check(&"a@".into()).is_err());
        assert!(field.check(&"@b".into()).is_err());
        assert!(field.check(&"nope".into()).is_err());
    }

    #[test]
    fn number_shape() {
        let field = Field::new("age", "Age", FieldKind::Text(TextField::number())).required();
        assert!(field.check(&"30".into()).is_ok());
        assert!(field.check(&"abc".into()).is_err());
        assert!(field.check(&"".into()).is_err());
    }

    #[test]
    fn choices_and_sliders_always_pass() {
        let radio = Field::new(
            "time_of_day",
            "Time of day",
            FieldKind::Radio(ChoiceField::new(["morning", "night"])),
        );
        assert!(radio.check(&"".into()).is_ok());

        let slider = Field::new(
            "sleep_quality",
            "Sleep",
            FieldKind::Slider(SliderField::new(1, 10, 5)),
        );
        assert!(slider.check(&AnswerValue::Int(5)).is_ok());
    }
}
