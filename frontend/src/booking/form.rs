use serde::Serialize;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Phone,
    EventDate,
    Notes,
}

impl Field {
    pub const REQUIRED: [Field; 4] = [Field::Name, Field::Email, Field::Phone, Field::EventDate];

    /// The `name` attribute of the matching form control.
    pub fn name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::EventDate => "eventDate",
            Field::Notes => "notes",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Full Name",
            Field::Email => "Email Address",
            Field::Phone => "Phone Number",
            Field::EventDate => "Event Date",
            Field::Notes => "Event Details",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BookingForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub event_date: String,
    pub notes: String,
}

impl BookingForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::EventDate => &self.event_date,
            Field::Notes => &self.notes,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::EventDate => self.event_date = value,
            Field::Notes => self.notes = value,
        }
    }

    pub fn attempt(&self, booth_name: &str) -> SubmissionAttempt {
        SubmissionAttempt {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            event_date: self.event_date.clone(),
            booth_name: booth_name.to_string(),
            notes: self.notes.clone(),
        }
    }
}

/// A booking request as read from the form at submit time.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionAttempt {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub event_date: String,
    pub booth_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub notes: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Please fill in all required fields")]
pub struct ValidationError {
    pub missing: Vec<Field>,
}

impl SubmissionAttempt {
    fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::EventDate => &self.event_date,
            Field::Notes => &self.notes,
        }
    }

    pub fn validate(self) -> Result<Self, ValidationError> {
        let missing: Vec<Field> = Field::REQUIRED
            .into_iter()
            .filter(|field| self.value(*field).is_empty())
            .collect();
        if missing.is_empty() {
            Ok(self)
        } else {
            Err(ValidationError { missing })
        }
    }

    pub fn confirmation_message(&self) -> String {
        format!(
            "Thank you {}! Your appointment request for {} has been received. We will contact you at {} within 24 hours.",
            self.name, self.booth_name, self.phone
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled() -> BookingForm {
        BookingForm {
            name: "Ayesha Khan".into(),
            email: "ayesha@example.com".into(),
            phone: "0300 1234567".into(),
            event_date: "2024-03-11".into(),
            notes: String::new(),
        }
    }

    #[test]
    fn complete_form_validates() {
        let attempt = filled().attempt("Mirror Booth").validate().unwrap();
        assert_eq!(attempt.booth_name, "Mirror Booth");
        assert_eq!(attempt.event_date, "2024-03-11");
    }

    #[test]
    fn each_required_field_is_checked() {
        for field in Field::REQUIRED {
            let mut form = filled();
            form.set(field, String::new());
            let err = form.attempt("Mirror Booth").validate().unwrap_err();
            assert_eq!(err.missing, vec![field]);
        }
    }

    #[test]
    fn empty_fields_are_reported_in_form_order() {
        let mut form = filled();
        form.set(Field::Phone, String::new());
        form.set(Field::Name, String::new());
        let err = form.attempt("Mirror Booth").validate().unwrap_err();
        assert_eq!(err.missing, vec![Field::Name, Field::Phone]);
        assert_eq!(err.to_string(), "Please fill in all required fields");
    }

    #[test]
    fn whitespace_counts_as_filled() {
        let mut form = filled();
        form.set(Field::Name, "   ".into());
        assert!(form.attempt("Mirror Booth").validate().is_ok());
    }

    #[test]
    fn values_are_sent_as_typed() {
        let mut form = filled();
        form.set(Field::Name, "  Ayesha  ".into());
        let attempt = form.attempt("Mirror Booth").validate().unwrap();
        assert_eq!(attempt.name, "  Ayesha  ");
    }

    #[test]
    fn notes_and_booth_are_optional() {
        assert!(filled().attempt("").validate().is_ok());
    }

    #[test]
    fn confirmation_mentions_name_booth_and_phone() {
        let attempt = filled().attempt("Mirror Booth");
        assert_eq!(
            attempt.confirmation_message(),
            "Thank you Ayesha Khan! Your appointment request for Mirror Booth has been received. \
             We will contact you at 0300 1234567 within 24 hours."
        );
    }

    #[test]
    fn serializes_with_form_field_names() {
        let json = serde_json::to_value(filled().attempt("360 Booth")).unwrap();
        assert_eq!(json["eventDate"], "2024-03-11");
        assert_eq!(json["boothName"], "360 Booth");
        assert!(json.get("notes").is_none());
    }

    #[test]
    fn get_reads_back_what_set_wrote() {
        let mut form = BookingForm::default();
        form.set(Field::Notes, "Outdoor wedding".into());
        form.set(Field::EventDate, "2025-01-01".into());
        assert_eq!(form.get(Field::Notes), "Outdoor wedding");
        assert_eq!(form.get(Field::EventDate), "2025-01-01");
        assert_eq!(Field::EventDate.name(), "eventDate");
    }
}
