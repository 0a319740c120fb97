use crate::model::User;
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

/// One editable field of a [`Draft`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    FirstName,
    LastName,
    Email,
    Department,
}

impl DraftField {
    pub const ALL: [DraftField; 4] = [
        DraftField::FirstName,
        DraftField::LastName,
        DraftField::Email,
        DraftField::Department,
    ];

    /// The form input name this field is bound to.
    pub fn as_str(self) -> &'static str {
        match self {
            DraftField::FirstName => "firstName",
            DraftField::LastName => "lastName",
            DraftField::Email => "email",
            DraftField::Department => "department",
        }
    }

    pub fn is_required(self) -> bool {
        !matches!(self, DraftField::Department)
    }
}

impl Display for DraftField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A form input name that does not map to any draft field.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown form field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for DraftField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DraftField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// The editable shadow of a [`User`] bound to the form.
///
/// Every field is a plain `String`; an absent value is the empty string.
/// Whether the draft describes a new user or an edit is decided by the
/// selection, not by the draft itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: String,
}

impl Draft {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Seeds a draft from an existing record.
    pub fn from_user(user: &User) -> Self {
        Self {
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            department: user.department.clone().unwrap_or_default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::empty()
    }

    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::FirstName => &self.first_name,
            DraftField::LastName => &self.last_name,
            DraftField::Email => &self.email,
            DraftField::Department => &self.department,
        }
    }

    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        let slot = match field {
            DraftField::FirstName => &mut self.first_name,
            DraftField::LastName => &mut self.last_name,
            DraftField::Email => &mut self.email,
            DraftField::Department => &mut self.department,
        };
        *slot = value.into();
    }

    /// Fields the form marks as required that are still blank.
    ///
    /// A hint for the view; submitting does not check it.
    pub fn missing_required(&self) -> Vec<DraftField> {
        DraftField::ALL
            .into_iter()
            .filter(|field| field.is_required() && self.get(*field).trim().is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_names_parse_to_fields() {
        for field in DraftField::ALL {
            assert_eq!(field.as_str().parse::<DraftField>(), Ok(field));
        }
        assert_eq!(
            "name".parse::<DraftField>(),
            Err(UnknownField("name".to_string()))
        );
    }

    #[test]
    fn seeded_draft_has_no_absent_values() {
        let user = User::new(1, "Ada", "", "a@x.com");
        let draft = Draft::from_user(&user);
        assert_eq!(draft.department, "");
        assert_eq!(draft.get(DraftField::Email), "a@x.com");
    }

    #[test]
    fn department_is_optional() {
        let mut draft = Draft::empty();
        assert_eq!(
            draft.missing_required(),
            vec![DraftField::FirstName, DraftField::LastName, DraftField::Email]
        );
        draft.set(DraftField::FirstName, "Bob");
        draft.set(DraftField::LastName, "Lee");
        draft.set(DraftField::Email, "  ");
        assert_eq!(draft.missing_required(), vec![DraftField::Email]);
        draft.set(DraftField::Email, "b@x.com");
        assert!(draft.missing_required().is_empty());
    }
}
