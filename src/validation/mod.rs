use crate::models::{CreateNote, NoteTag};
use std::str::FromStr;

pub(crate) const TITLE_MIN_CHARS: usize = 3;
pub(crate) const TITLE_MAX_CHARS: usize = 50;
pub(crate) const CONTENT_MAX_CHARS: usize = 500;

/// Raw form input, exactly as typed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct NoteFormValues {
    pub title: String,
    pub content: String,
    pub tag: String,
}

impl Default for NoteFormValues {
    fn default() -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            tag: NoteTag::default().to_string(),
        }
    }
}

/// One optional message per field; all `None` means the form is valid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct NoteFormErrors {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tag: Option<String>,
}

impl NoteFormErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.tag.is_none()
    }
}

fn validate_title(title: &str) -> Option<String> {
    let len = title.chars().count();
    if len == 0 {
        Some("Title is required".to_string())
    } else if len < TITLE_MIN_CHARS {
        Some(format!(
            "Title must be at least {TITLE_MIN_CHARS} characters long"
        ))
    } else if len > TITLE_MAX_CHARS {
        Some(format!(
            "Title must be no more than {TITLE_MAX_CHARS} characters"
        ))
    } else {
        None
    }
}

fn validate_content(content: &str) -> Option<String> {
    (content.chars().count() > CONTENT_MAX_CHARS).then(|| {
        format!("Content must be no more than {CONTENT_MAX_CHARS} characters")
    })
}

fn parse_tag(tag: &str) -> Result<NoteTag, String> {
    if tag.is_empty() {
        return Err("At least one tag is required".to_string());
    }
    NoteTag::from_str(tag).map_err(|_| "Invalid tag".to_string())
}

/// Checks every field and returns the request payload, or every field error at once.
pub(crate) fn validate_note_form(values: &NoteFormValues) -> Result<CreateNote, NoteFormErrors> {
    let tag = parse_tag(&values.tag);
    let errors = NoteFormErrors {
        title: validate_title(&values.title),
        content: validate_content(&values.content),
        tag: tag.as_ref().err().cloned(),
    };

    match tag {
        Ok(tag) if errors.is_empty() => Ok(CreateNote {
            title: values.title.clone(),
            content: values.content.clone(),
            tag,
        }),
        _ => Err(errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(title: &str, content: &str, tag: &str) -> NoteFormValues {
        NoteFormValues {
            title: title.to_string(),
            content: content.to_string(),
            tag: tag.to_string(),
        }
    }

    #[test]
    fn test_valid_form_produces_payload() {
        let note = validate_note_form(&values("Buy milk", "2 litres", "Shopping"))
            .expect("form should be valid");
        assert_eq!(note.title, "Buy milk");
        assert_eq!(note.content, "2 litres");
        assert_eq!(note.tag, NoteTag::Shopping);
    }

    #[test]
    fn test_short_title_is_rejected() {
        let errors = validate_note_form(&values("Hi", "", "Work")).expect_err("title too short");
        assert_eq!(
            errors.title.as_deref(),
            Some("Title must be at least 3 characters long")
        );
        assert!(errors.content.is_none());
        assert!(errors.tag.is_none());
    }

    #[test]
    fn test_missing_title_is_required() {
        let errors = validate_note_form(&values("", "", "Todo")).expect_err("title missing");
        assert_eq!(errors.title.as_deref(), Some("Title is required"));
    }

    #[test]
    fn test_title_bounds_count_chars_not_bytes() {
        // 50 two-byte chars is still within bounds.
        let title = "é".repeat(TITLE_MAX_CHARS);
        assert!(validate_note_form(&values(&title, "", "Todo")).is_ok());

        let title = "a".repeat(TITLE_MAX_CHARS + 1);
        let errors = validate_note_form(&values(&title, "", "Todo")).expect_err("too long");
        assert_eq!(
            errors.title.as_deref(),
            Some("Title must be no more than 50 characters")
        );
    }

    #[test]
    fn test_content_limit() {
        let ok = "x".repeat(CONTENT_MAX_CHARS);
        assert!(validate_note_form(&values("Title", &ok, "Todo")).is_ok());

        let long = "x".repeat(CONTENT_MAX_CHARS + 1);
        let errors = validate_note_form(&values("Title", &long, "Todo")).expect_err("too long");
        assert_eq!(
            errors.content.as_deref(),
            Some("Content must be no more than 500 characters")
        );
    }

    #[test]
    fn test_invalid_and_missing_tag() {
        let errors = validate_note_form(&values("Title", "", "Urgent")).expect_err("bad tag");
        assert_eq!(errors.tag.as_deref(), Some("Invalid tag"));

        let errors = validate_note_form(&values("Title", "", "")).expect_err("no tag");
        assert_eq!(errors.tag.as_deref(), Some("At least one tag is required"));
    }

    #[test]
    fn test_all_field_errors_reported_together() {
        let errors = validate_note_form(&values("", &"x".repeat(501), "nope")).expect_err("all bad");
        assert!(errors.title.is_some());
        assert!(errors.content.is_some());
        assert!(errors.tag.is_some());
    }

    #[test]
    fn test_default_values_use_todo_tag() {
        assert_eq!(NoteFormValues::default().tag, "Todo");
    }
}
