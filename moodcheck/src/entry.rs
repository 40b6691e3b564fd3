use moodcheck_types::{
    Answers, ChoiceField, Field, FieldKind, FormDefinition, SliderField, Survey, TextField,
};
use serde::Serialize;

/// Low end of the two rating scales.
pub const SCALE_MIN: i64 = 1;
/// High end of the two rating scales.
pub const SCALE_MAX: i64 = 10;
/// Starting value of the two rating scales.
pub const SCALE_DEFAULT: i64 = 5;

/// One completed check-in: all ten answers for a single session.
///
/// Enumerated fields hold the selected option verbatim, or `""` when left
/// unselected. Age stays a free-form numeric string; only its shape is
/// checked before submission. The serialized form uses the camelCase key set
/// the check-in payload has always had.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodEntry {
    pub email: String,
    pub age: String,
    pub gender: String,
    pub time_of_day: String,
    pub location: String,
    pub mood: String,
    pub weather: String,
    pub activity: String,
    pub mood_intensity: i64,
    pub sleep_quality: i64,
}

impl Survey for MoodEntry {
    fn definition() -> FormDefinition {
        FormDefinition::new(
            "User Survey",
            vec![
                Field::new("email", "Email", FieldKind::Text(TextField::email())).required(),
                Field::new("age", "Enter your age", FieldKind::Text(TextField::number()))
                    .required(),
                Field::new(
                    "gender",
                    "Select your gender",
                    FieldKind::Select(ChoiceField::new([
                        "male",
                        "female",
                        "non-binary",
                        "other",
                        "prefer-not-to-say",
                    ])),
                ),
                Field::new(
                    "time_of_day",
                    "Indicate the current time of day",
                    FieldKind::Radio(ChoiceField::new([
                        "morning",
                        "afternoon",
                        "evening",
                        "night",
                    ])),
                ),
                Field::new(
                    "location",
                    "Enter your current location",
                    FieldKind::Radio(ChoiceField::new(["home", "public-space", "work", "outside"])),
                ),
                Field::new(
                    "mood",
                    "What is your current mood",
                    FieldKind::Select(ChoiceField::new([
                        "relaxed", "sad", "happy", "anxious", "stressed", "anger",
                    ])),
                ),
                Field::new(
                    "weather",
                    "Describe the current weather in your area",
                    FieldKind::Select(ChoiceField::new(["snowy", "cloudy", "rainy", "sunny"])),
                ),
                Field::new(
                    "activity",
                    "Specify the activity you are engaged in currently",
                    FieldKind::Select(ChoiceField::new([
                        "relaxing",
                        "socializing",
                        "working",
                        "exercising",
                    ])),
                ),
                Field::new(
                    "mood_intensity",
                    "On a scale of 1 to 10, rate how intense your current mood is",
                    FieldKind::Slider(
                        SliderField::new(SCALE_MIN, SCALE_MAX, SCALE_DEFAULT)
                            .with_captions("Very low", "Extremely high"),
                    ),
                ),
                Field::new(
                    "sleep_quality",
                    "Rate the quality of your sleep from 1 to 10",
                    FieldKind::Slider(
                        SliderField::new(SCALE_MIN, SCALE_MAX, SCALE_DEFAULT)
                            .with_captions("Very poor", "Excellent"),
                    ),
                ),
            ],
        )
        .with_intro("Please answer the following questions about your current state.")
    }

    fn from_answers(answers: &Answers) -> Self {
        let text = |field: &str| answers.get_text(field).unwrap_or_default().to_string();
        Self {
            email: text("email"),
            age: text("age"),
            gender: text("gender"),
            time_of_day: text("time_of_day"),
            location: text("location"),
            mood: text("mood"),
            weather: text("weather"),
            activity: text("activity"),
            mood_intensity: answers.get_int("mood_intensity").unwrap_or(SCALE_DEFAULT),
            sleep_quality: answers.get_int("sleep_quality").unwrap_or(SCALE_DEFAULT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn definition_shape() {
        let definition = MoodEntry::definition();

        assert_eq!(definition.len(), 10);
        assert_eq!(definition.title, "User Survey");
        assert_eq!(definition.fields()[0].prompt(), "Email");
        assert_eq!(definition.fields()[5].prompt(), "What is your current mood");

        let required: Vec<&str> = definition
            .fields()
            .iter()
            .filter(|f| f.is_required())
            .map(|f| f.name())
            .collect();
        assert_eq!(required, vec!["email", "age"]);
    }

    #[test]
    fn slider_bounds() {
        let definition = MoodEntry::definition();
        let field = definition.field("mood_intensity").unwrap();

        match field.kind() {
            FieldKind::Slider(slider) => {
                assert_eq!(slider.min, 1);
                assert_eq!(slider.max, 10);
                assert_eq!(slider.default, 5);
            }
            other => panic!("expected slider, got {other:?}"),
        }
    }

    #[test]
    fn reconstructs_defaults_from_fresh_session() {
        use moodcheck_types::Session;

        let session = Session::<MoodEntry>::new();
        let entry = MoodEntry::from_answers(session.answers());

        assert_eq!(entry.email, "");
        assert_eq!(entry.gender, "");
        assert_eq!(entry.mood_intensity, 5);
        assert_eq!(entry.sleep_quality, 5);
    }
}
