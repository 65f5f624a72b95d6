//! People with an optional job role, compared by age alone.

use std::cmp::Ordering;
use std::fmt;

use serde::{Serialize, Serializer};
use tracing::debug;

use crate::core::census::Census;
use crate::core::name::format_name;

/// Job attached to a person, with the one field each job carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Role {
    Programmer { language: String },
    Runner { shoes: String },
}

impl Role {
    /// Job label used when rendering a person.
    pub fn job(&self) -> &'static str {
        match self {
            Role::Programmer { .. } => "programmer",
            Role::Runner { .. } => "runner",
        }
    }

    pub fn language(&self) -> Option<&str> {
        match self {
            Role::Programmer { language } => Some(language),
            Role::Runner { .. } => None,
        }
    }

    pub fn shoes(&self) -> Option<&str> {
        match self {
            Role::Runner { shoes } => Some(shoes),
            Role::Programmer { .. } => None,
        }
    }
}

/// A modeled individual.
///
/// `name` is always the [`format_name`] form of the raw input. Equality and
/// ordering look at `age` only; name and role never participate, so two
/// different people of the same age compare equal.
#[derive(Debug, Clone)]
pub struct Person {
    name: String,
    age: i64,
    role: Option<Role>,
}

impl Person {
    /// Construct a person without a job.
    pub fn new(census: &Census, raw_name: &str, age: i64) -> Self {
        Self::with_role(census, raw_name, age, None)
    }

    pub fn programmer(
        census: &Census,
        raw_name: &str,
        age: i64,
        language: impl Into<String>,
    ) -> Self {
        let role = Role::Programmer {
            language: language.into(),
        };
        Self::with_role(census, raw_name, age, Some(role))
    }

    pub fn runner(census: &Census, raw_name: &str, age: i64, shoes: impl Into<String>) -> Self {
        let role = Role::Runner {
            shoes: shoes.into(),
        };
        Self::with_role(census, raw_name, age, Some(role))
    }

    /// Construct a person and record it in `census`.
    ///
    /// Any age is accepted, including negative values.
    pub fn with_role(census: &Census, raw_name: &str, age: i64, role: Option<Role>) -> Self {
        let name = format_name(raw_name);
        let population = census.record();
        debug!(
            name = %name,
            age,
            job = ?role.as_ref().map(Role::job),
            population,
            "person created"
        );
        Self { name, age, role }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> i64 {
        self.age
    }

    pub fn role(&self) -> Option<&Role> {
        self.role.as_ref()
    }

    pub fn job(&self) -> Option<&'static str> {
        self.role.as_ref().map(Role::job)
    }

    pub fn greeting(&self) -> String {
        format!("Hello, my name is {}", self.name)
    }

    /// The line a person says about their job, if they have one.
    pub fn announcement(&self) -> Option<String> {
        match &self.role {
            Some(Role::Programmer { language }) => Some(format!(
                "I, {}, did a really cool thing with {}",
                self.name, language
            )),
            Some(Role::Runner { shoes }) => Some(format!(
                "I, {}, need a new pair of {} so I can run a marathon and talk about it all the time",
                self.name, shoes
            )),
            None => None,
        }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.job() {
            Some(job) => write!(f, "{}, {}, {} years old", self.name, job, self.age),
            None => write!(f, "{}, {} years old", self.name, self.age),
        }
    }
}

impl Ord for Person {
    fn cmp(&self, other: &Self) -> Ordering {
        self.age.cmp(&other.age)
    }
}

impl PartialOrd for Person {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Person {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Person {}

/// Flat JSON shape for `people show --json`.
#[derive(Serialize)]
struct PersonRecord<'a> {
    name: &'a str,
    age: i64,
    job: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    language: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    shoes: Option<&'a str>,
}

impl Serialize for Person {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        PersonRecord {
            name: &self.name,
            age: self.age,
            job: self.job(),
            language: self.role.as_ref().and_then(Role::language),
            shoes: self.role.as_ref().and_then(Role::shoes),
        }
        .serialize(serializer)
    }
}
