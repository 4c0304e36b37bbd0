//! # Record Model
//!
//! A contact ([`Person`]) is made of five validated components: [`Name`], [`Phone`],
//! [`Email`], [`Address`] and a set of [`Tag`]s. Every component is built from a raw
//! string and either comes out valid or fails with a [`ValidationError`] naming the
//! field and the expected format. Nothing here performs I/O.
//!
//! ## Privacy
//!
//! Phone, email and address each carry a `private` flag. Private fields are shown
//! only when rendering with [`Visibility::Full`]; a [`Visibility::Public`] rendering
//! leaves them out entirely.
//!
//! ## Equality
//!
//! Two persons are equal when all five components are equal, privacy flags
//! included. The contact collection relies on this equality for duplicate
//! detection, so there is no synthetic identifier anywhere in the model.

use std::collections::BTreeSet;
use std::fmt;

const PRIVATE_MARKER: &str = "(private) ";

/// Which field a validation failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Phone,
    Email,
    Address,
    Tag,
}

impl Field {
    fn constraint(self) -> &'static str {
        match self {
            Field::Name => "Person names should be spaces or alphanumeric characters",
            Field::Phone => "Person phone numbers should only contain numbers",
            Field::Email => "Person emails should be of the form local@domain.tld",
            Field::Address => "Person addresses can be any text without '/'",
            Field::Tag => "Tags names should be alphanumeric",
        }
    }
}

/// A raw value that failed its field's format rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: Field,
    pub value: String,
}

impl ValidationError {
    fn new(field: Field, value: &str) -> Self {
        Self {
            field,
            value: value.to_string(),
        }
    }

    pub fn message(&self) -> &'static str {
        self.field.constraint()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ValidationError {}

/// Controls whether private fields are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Full,
    Public,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name(String);

impl Name {
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        let value = raw.trim();
        let valid = !value.is_empty() && value.chars().all(|c| c.is_alphanumeric() || c == ' ');
        if !valid {
            return Err(ValidationError::new(Field::Name, raw));
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The whitespace-separated words of the name.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.0.split_whitespace()
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phone {
    value: String,
    private: bool,
}

impl Phone {
    pub fn new(raw: &str, private: bool) -> Result<Self, ValidationError> {
        let value = raw.trim();
        if value.is_empty() || !value.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::new(Field::Phone, raw));
        }
        Ok(Self {
            value: value.to_string(),
            private,
        })
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_private(&self) -> bool {
        self.private
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email {
    value: String,
    private: bool,
}

impl Email {
    pub fn new(raw: &str, private: bool) -> Result<Self, ValidationError> {
        let value = raw.trim();
        if !is_valid_email(value) {
            return Err(ValidationError::new(Field::Email, raw));
        }
        Ok(Self {
            value: value.to_string(),
            private,
        })
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_private(&self) -> bool {
        self.private
    }
}

fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    let local_ok = !local.is_empty()
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.');
    let domain_ok = domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && domain
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));
    local_ok && domain_ok
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    value: String,
    private: bool,
}

impl Address {
    pub fn new(raw: &str, private: bool) -> Result<Self, ValidationError> {
        let value = raw.trim();
        if value.is_empty() || value.contains('/') {
            return Err(ValidationError::new(Field::Address, raw));
        }
        Ok(Self {
            value: value.to_string(),
            private,
        })
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_private(&self) -> bool {
        self.private
    }
}

/// A short alphanumeric label. Ordered by value so a tag set renders stably.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Tag(String);

impl Tag {
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        let value = raw.trim();
        if value.is_empty() || !value.chars().all(|c| c.is_alphanumeric()) {
            return Err(ValidationError::new(Field::Tag, raw));
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0)
    }
}

/// A contact record. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    name: Name,
    phone: Phone,
    email: Email,
    address: Address,
    tags: BTreeSet<Tag>,
}

impl Person {
    pub fn new(
        name: Name,
        phone: Phone,
        email: Email,
        address: Address,
        tags: impl IntoIterator<Item = Tag>,
    ) -> Self {
        Self {
            name,
            phone,
            email,
            address,
            tags: tags.into_iter().collect(),
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    /// Renders the person on one line, honoring privacy for [`Visibility::Public`].
    pub fn render(&self, visibility: Visibility) -> String {
        let mut out = self.name.to_string();
        let fields = [
            ("Phone", self.phone.value(), self.phone.is_private()),
            ("Email", self.email.value(), self.email.is_private()),
            ("Address", self.address.value(), self.address.is_private()),
        ];
        for (label, value, private) in fields {
            match (visibility, private) {
                (Visibility::Public, true) => {}
                (Visibility::Full, true) => {
                    out.push_str(&format!(" {}: {}{}", label, PRIVATE_MARKER, value))
                }
                (_, false) => out.push_str(&format!(" {}: {}", label, value)),
            }
        }
        out.push_str(" Tags: ");
        for tag in &self.tags {
            out.push_str(&tag.to_string());
        }
        out
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(Visibility::Full))
    }
}

/// Unvalidated person fields, as they come out of the parser or the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawPerson {
    pub name: String,
    pub phone: String,
    pub phone_private: bool,
    pub email: String,
    pub email_private: bool,
    pub address: String,
    pub address_private: bool,
    pub tags: Vec<String>,
}

impl RawPerson {
    /// Validates every field, reporting the first one that fails.
    pub fn validate(&self) -> Result<Person, ValidationError> {
        let tags = self
            .tags
            .iter()
            .map(|t| Tag::new(t))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Person::new(
            Name::new(&self.name)?,
            Phone::new(&self.phone, self.phone_private)?,
            Email::new(&self.email, self.email_private)?,
            Address::new(&self.address, self.address_private)?,
            tags,
        ))
    }
}

impl From<&Person> for RawPerson {
    fn from(person: &Person) -> Self {
        Self {
            name: person.name.as_str().to_string(),
            phone: person.phone.value().to_string(),
            phone_private: person.phone.is_private(),
            email: person.email.value().to_string(),
            email_private: person.email.is_private(),
            address: person.address.value().to_string(),
            address_private: person.address.is_private(),
            tags: person.tags.iter().map(|t| t.as_str().to_string()).collect(),
        }
    }
}
