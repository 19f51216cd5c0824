//! # People
//!
//! This module defines the people tracked by the roster: students and tutors.
//! Every field of a person is a validated value type that can only be
//! constructed from well-formed input, so a `Student` or `Tutor` that exists
//! at all is known to be well-formed. Equality is structural across all
//! fields, never reference identity.
//!
//! The [`Person`] enum closes the set of person kinds to exactly students and
//! tutors. Code that needs per-kind behavior matches on the variant; there is
//! no downcasting and no open-ended hierarchy.

use std::collections::BTreeSet;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use regex::Regex;
use serde::{Deserialize, Serialize};

//////////////////////////////////////////////// Name ////////////////////////////////////////////////

/// Error returned when parsing an invalid person name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameParseError {
    invalid_name: String,
}

impl NameParseError {
    /// Creates a new NameParseError.
    pub fn new(name: String) -> Self {
        NameParseError { invalid_name: name }
    }

    /// Returns the invalid name that caused the error.
    pub fn invalid_name(&self) -> &str {
        &self.invalid_name
    }
}

impl Display for NameParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "Invalid name {:?}. Names must start with a letter or digit and contain only letters, digits, and spaces",
            self.invalid_name
        )
    }
}

impl std::error::Error for NameParseError {}

/// A person's full name.
///
/// Names are non-empty, start with an alphanumeric character, and contain
/// only alphanumeric characters and spaces. Lookups elsewhere in the crate
/// compare names with exact, case-sensitive string equality.
///
/// # Examples
///
/// ```rust
/// use rosterbook::Name;
///
/// let name = Name::new("Alice Tan").unwrap();
/// assert_eq!(name.as_str(), "Alice Tan");
///
/// assert!(Name::new("").is_none());
/// assert!(Name::new(" leading space").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Name(String);

impl Name {
    /// Creates a new Name if the string is well-formed.
    pub fn new(name: impl Into<String>) -> Option<Name> {
        let s = name.into();
        if is_valid_name(&s) { Some(Name(s)) } else { None }
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the Name and returns the inner String.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Display for Name {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Name {
    type Err = NameParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Name::new(s).ok_or_else(|| NameParseError::new(s.to_string()))
    }
}

/// Validates that a string is a well-formed person name.
fn is_valid_name(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !first.is_alphanumeric() {
        return false;
    }
    chars.all(|c| c.is_alphanumeric() || c == ' ')
}

/////////////////////////////////////////////// Phone ////////////////////////////////////////////////

/// Error returned when parsing an invalid phone number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneParseError {
    invalid_phone: String,
}

impl PhoneParseError {
    /// Creates a new PhoneParseError.
    pub fn new(phone: String) -> Self {
        PhoneParseError {
            invalid_phone: phone,
        }
    }
}

impl Display for PhoneParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "Invalid phone number {:?}. Phone numbers must contain only digits and have at least 3 of them",
            self.invalid_phone
        )
    }
}

impl std::error::Error for PhoneParseError {}

/// A phone number: digits only, at least three of them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Phone(String);

impl Phone {
    /// Creates a new Phone if the string is well-formed.
    pub fn new(phone: impl Into<String>) -> Option<Phone> {
        let s = phone.into();
        if is_valid_phone(&s) { Some(Phone(s)) } else { None }
    }

    /// Returns the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Phone {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Phone {
    type Err = PhoneParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Phone::new(s).ok_or_else(|| PhoneParseError::new(s.to_string()))
    }
}

/// Validates that a string is a well-formed phone number.
fn is_valid_phone(s: &str) -> bool {
    Regex::new(r"^[0-9]{3,}$")
        .map(|re| re.is_match(s))
        .unwrap_or(false)
}

/////////////////////////////////////////////// Email ////////////////////////////////////////////////

/// Error returned when parsing an invalid email address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailParseError {
    invalid_email: String,
}

impl EmailParseError {
    /// Creates a new EmailParseError.
    pub fn new(email: String) -> Self {
        EmailParseError {
            invalid_email: email,
        }
    }
}

impl Display for EmailParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "Invalid email {:?}. Emails must be of the form local-part@domain",
            self.invalid_email
        )
    }
}

impl std::error::Error for EmailParseError {}

/// An email address with a local part and a dotted domain.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
    /// Creates a new Email if the string is well-formed.
    pub fn new(email: impl Into<String>) -> Option<Email> {
        let s = email.into();
        if is_valid_email(&s) { Some(Email(s)) } else { None }
    }

    /// Returns the email address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Email {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Email {
    type Err = EmailParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Email::new(s).ok_or_else(|| EmailParseError::new(s.to_string()))
    }
}

/// Validates that a string is a well-formed email address.
fn is_valid_email(s: &str) -> bool {
    Regex::new(r"^[A-Za-z0-9+_.-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$")
        .map(|re| re.is_match(s))
        .unwrap_or(false)
}

////////////////////////////////////////////// Address ///////////////////////////////////////////////

/// Error returned when parsing an invalid address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressParseError {
    invalid_address: String,
}

impl AddressParseError {
    /// Creates a new AddressParseError.
    pub fn new(address: String) -> Self {
        AddressParseError {
            invalid_address: address,
        }
    }
}

impl Display for AddressParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Invalid address. Addresses must not be blank")
    }
}

impl std::error::Error for AddressParseError {}

/// A postal address. Any non-blank text is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address(String);

impl Address {
    /// Creates a new Address if the string is non-blank.
    pub fn new(address: impl Into<String>) -> Option<Address> {
        let s = address.into();
        if s.trim().is_empty() {
            None
        } else {
            Some(Address(s))
        }
    }

    /// Returns the address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Address {
    type Err = AddressParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Address::new(s).ok_or_else(|| AddressParseError::new(s.to_string()))
    }
}

//////////////////////////////////////////////// Tag /////////////////////////////////////////////////

/// Error returned when parsing an invalid tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagParseError {
    invalid_tag: String,
}

impl TagParseError {
    /// Creates a new TagParseError.
    pub fn new(tag: String) -> Self {
        TagParseError { invalid_tag: tag }
    }
}

impl Display for TagParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "Invalid tag {:?}. Tags must be a single alphanumeric word",
            self.invalid_tag
        )
    }
}

impl std::error::Error for TagParseError {}

/// A category label attached to a person, such as `exam` or `weekday`.
///
/// Tags are single alphanumeric words. A person carries a set of tags, so
/// duplicates collapse and ordering never affects equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Tag(String);

impl Tag {
    /// Creates a new Tag if the string is a single alphanumeric word.
    pub fn new(tag: impl Into<String>) -> Option<Tag> {
        let s = tag.into();
        if !s.is_empty() && s.chars().all(char::is_alphanumeric) {
            Some(Tag(s))
        } else {
            None
        }
    }

    /// Returns the tag as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Tag {
    type Err = TagParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tag::new(s).ok_or_else(|| TagParseError::new(s.to_string()))
    }
}

////////////////////////////////////////// Student and Tutor /////////////////////////////////////////

/// A student enrolled with the tuition center.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    name: Name,
    phone: Phone,
    email: Email,
    address: Address,
    tags: BTreeSet<Tag>,
}

impl Student {
    /// Creates a new Student from validated fields.
    pub fn new(name: Name, phone: Phone, email: Email, address: Address, tags: BTreeSet<Tag>) -> Self {
        Student {
            name,
            phone,
            email,
            address,
            tags,
        }
    }

    /// Returns the student's name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Returns the student's phone number.
    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    /// Returns the student's email address.
    pub fn email(&self) -> &Email {
        &self.email
    }

    /// Returns the student's postal address.
    pub fn address(&self) -> &Address {
        &self.address
    }

    /// Returns the student's tags.
    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }
}

impl Display for Student {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        fmt_person_fields(f, &self.name, &self.phone, &self.email, &self.address, &self.tags)
    }
}

/// A tutor teaching for the tuition center.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tutor {
    name: Name,
    phone: Phone,
    email: Email,
    address: Address,
    tags: BTreeSet<Tag>,
}

impl Tutor {
    /// Creates a new Tutor from validated fields.
    pub fn new(name: Name, phone: Phone, email: Email, address: Address, tags: BTreeSet<Tag>) -> Self {
        Tutor {
            name,
            phone,
            email,
            address,
            tags,
        }
    }

    /// Returns the tutor's name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Returns the tutor's phone number.
    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    /// Returns the tutor's email address.
    pub fn email(&self) -> &Email {
        &self.email
    }

    /// Returns the tutor's postal address.
    pub fn address(&self) -> &Address {
        &self.address
    }

    /// Returns the tutor's tags.
    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }
}

impl Display for Tutor {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        fmt_person_fields(f, &self.name, &self.phone, &self.email, &self.address, &self.tags)
    }
}

/// Shared field rendering for students and tutors.
fn fmt_person_fields(
    f: &mut Formatter<'_>,
    name: &Name,
    phone: &Phone,
    email: &Email,
    address: &Address,
    tags: &BTreeSet<Tag>,
) -> FmtResult {
    write!(
        f,
        "{}; Phone: {}; Email: {}; Address: {}",
        name, phone, email, address
    )?;
    if !tags.is_empty() {
        let rendered: Vec<&str> = tags.iter().map(Tag::as_str).collect();
        write!(f, "; Tags: [{}]", rendered.join(", "))?;
    }
    Ok(())
}

/////////////////////////////////////////////// Person ///////////////////////////////////////////////

/// A person known to the roster.
///
/// The set of person kinds is closed: a person is a student or a tutor,
/// nothing else. Commands that behave differently per kind match on the
/// variant, so the compiler checks that every kind is handled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Person {
    /// A student enrolled with the tuition center.
    Student(Student),
    /// A tutor teaching for the tuition center.
    Tutor(Tutor),
}

impl Person {
    /// Returns the person's name.
    pub fn name(&self) -> &Name {
        match self {
            Person::Student(student) => student.name(),
            Person::Tutor(tutor) => tutor.name(),
        }
    }

    /// Returns the human-readable role label for this person.
    pub fn role(&self) -> &'static str {
        match self {
            Person::Student(_) => "Student",
            Person::Tutor(_) => "Tutor",
        }
    }
}

impl Display for Person {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Person::Student(student) => write!(f, "{}", student),
            Person::Tutor(tutor) => write!(f, "{}", tutor),
        }
    }
}
