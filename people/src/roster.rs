//! Lookup and age comparison for `people compare`.

use std::cmp::Ordering;
use std::fmt;
use anyhow::{Context, Result, anyhow};

use crate::core::census::Census;
use crate::core::name::format_name;
use crate::core::person::Person;
use crate::io::config::RosterSource;

/// Load the roster from `source` and construct its people against `census`.
pub fn load_people(source: &RosterSource, census: &Census) -> Result<Vec<Person>> {
    let cfg = source.load().context("load roster")?;
    cfg.build(census).context("build roster")
}

/// Find the first person whose name matches `raw_name` once both are formatted.
pub fn find_person<'a>(people: &'a [Person], raw_name: &str) -> Result<&'a Person> {
    let wanted = format_name(raw_name);
    people
        .iter()
        .find(|person| person.name() == wanted)
        .ok_or_else(|| {
            let known: Vec<&str> = people.iter().map(Person::name).collect();
            anyhow!(
                "no person named '{}' in roster (known: {})",
                wanted,
                known.join(", ")
            )
        })
}

/// Outcome of comparing two people by age.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub left: String,
    pub left_age: i64,
    pub right: String,
    pub right_age: i64,
    pub ordering: Ordering,
}

impl Comparison {
    pub fn symbol(&self) -> &'static str {
        match self.ordering {
            Ordering::Less => "<",
            Ordering::Equal => "==",
            Ordering::Greater => ">",
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({} vs {})",
            self.left,
            self.symbol(),
            self.right,
            self.left_age,
            self.right_age
        )
    }
}

pub fn compare_people(people: &[Person], left: &str, right: &str) -> Result<Comparison> {
    let a = find_person(people, left)?;
    let b = find_person(people, right)?;
    Ok(Comparison {
        left: a.name().to_string(),
        left_age: a.age(),
        right: b.name().to_string(),
        right_age: b.age(),
        ordering: a.cmp(b),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::config::RosterConfig;

    fn demo_people() -> Vec<Person> {
        RosterConfig::demo().build(&Census::new()).expect("build")
    }

    #[test]
    fn find_person_formats_the_query() {
        let people = demo_people();
        let found = find_person(&people, "LEO-nard").expect("found");
        assert_eq!(found.age(), 77);
    }

    #[test]
    fn find_person_lists_known_names_on_miss() {
        let people = demo_people();
        let err = find_person(&people, "nobody").expect_err("missing");
        assert_eq!(
            err.to_string(),
            "no person named 'Nobody' in roster (known: Mark, Joey, Leonard)"
        );
    }

    #[test]
    fn compare_same_age_is_equal() {
        let people = demo_people();
        let cmp = compare_people(&people, "mark", "joey").expect("compare");
        assert_eq!(cmp.ordering, Ordering::Equal);
        assert_eq!(cmp.to_string(), "Mark == Joey (29 vs 29)");
    }

    #[test]
    fn compare_orders_by_age() {
        let people = demo_people();
        let younger = compare_people(&people, "Joey", "Leonard").expect("compare");
        assert_eq!(younger.to_string(), "Joey < Leonard (29 vs 77)");
        let older = compare_people(&people, "Leonard", "Mark").expect("compare");
        assert_eq!(older.symbol(), ">");
    }

    #[test]
    fn load_people_uses_demo_when_missing() {
        let temp = tempfile::tempdir().expect("tempdir");
        let census = Census::new();
        let source = RosterSource::Default(temp.path().join("people.toml"));
        let people = load_people(&source, &census).expect("load");
        assert_eq!(people.len(), 3);
        assert_eq!(census.population(), 3);
    }

    #[test]
    fn load_people_rejects_missing_explicit_roster() {
        let temp = tempfile::tempdir().expect("tempdir");
        let census = Census::new();
        let source = RosterSource::Explicit(temp.path().join("team-typo.toml"));
        let err = load_people(&source, &census).expect_err("missing roster");
        assert!(format!("{:#}", err).contains("not found"));
        assert_eq!(census.population(), 0);
    }
}
