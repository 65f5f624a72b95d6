//! Roster configuration stored in `people.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow, bail};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::core::census::Census;
use crate::core::name::format_name;
use crate::core::person::{Person, Role};

/// Default roster file name, resolved against the current directory.
pub const DEFAULT_ROSTER_PATH: &str = "people.toml";

/// A list of people to construct (TOML).
///
/// Intended to be edited by hand. An empty file is a valid, empty roster.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RosterConfig {
    #[serde(default)]
    pub people: Vec<PersonEntry>,
}

/// One `[[people]]` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PersonEntry {
    /// Raw name; normalized on construction.
    pub name: String,
    pub age: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<RoleKind>,
    /// Required when `role = "programmer"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Required when `role = "runner"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shoes: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RoleKind {
    Programmer,
    Runner,
}

impl PersonEntry {
    /// Resolve the entry's role fields into a [`Role`].
    pub fn role(&self) -> Result<Option<Role>> {
        match (self.role, &self.language, &self.shoes) {
            (None, None, None) => Ok(None),
            (Some(RoleKind::Programmer), Some(language), None) => Ok(Some(Role::Programmer {
                language: language.clone(),
            })),
            (Some(RoleKind::Runner), None, Some(shoes)) => Ok(Some(Role::Runner {
                shoes: shoes.clone(),
            })),
            (Some(RoleKind::Programmer), None, _) => Err(anyhow!("programmer requires language")),
            (Some(RoleKind::Runner), _, None) => Err(anyhow!("runner requires shoes")),
            (Some(RoleKind::Programmer), _, Some(_)) | (None, None, Some(_)) => {
                Err(anyhow!("shoes is only valid for role = \"runner\""))
            }
            (Some(RoleKind::Runner), Some(_), _) | (None, Some(_), _) => {
                Err(anyhow!("language is only valid for role = \"programmer\""))
            }
        }
    }
}

impl RosterConfig {
    /// The three people the demo constructs when no roster file exists.
    pub fn demo() -> Self {
        Self {
            people: vec![
                PersonEntry {
                    name: "Mark".to_string(),
                    age: 29,
                    role: Some(RoleKind::Programmer),
                    language: Some("Python".to_string()),
                    shoes: None,
                },
                PersonEntry {
                    name: "Joey".to_string(),
                    age: 29,
                    role: Some(RoleKind::Runner),
                    language: None,
                    shoes: Some("Nike".to_string()),
                },
                PersonEntry {
                    name: "leo3narD".to_string(),
                    age: 77,
                    role: None,
                    language: None,
                    shoes: None,
                },
            ],
        }
    }

    /// Check every entry's role fields, reporting all problems at once.
    pub fn validate(&self) -> Result<()> {
        let errors: Vec<String> = self
            .people
            .iter()
            .enumerate()
            .filter_map(|(idx, entry)| {
                entry
                    .role()
                    .err()
                    .map(|err| format!("people[{}] ({}): {}", idx, entry.name, err))
            })
            .collect();
        if !errors.is_empty() {
            bail!("invalid roster:\n- {}", errors.join("\n- "));
        }
        Ok(())
    }

    /// Construct every entry in order, recording each in `census`.
    pub fn build(&self, census: &Census) -> Result<Vec<Person>> {
        self.validate()?;
        self.people
            .iter()
            .map(|entry| -> Result<Person> {
                if format_name(&entry.name).is_empty() {
                    warn!(raw_name = %entry.name, "name has no ASCII letters; it will render empty");
                }
                let role = entry.role()?;
                Ok(Person::with_role(census, &entry.name, entry.age, role))
            })
            .collect()
    }
}

/// Where the roster comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterSource {
    /// The implicit `people.toml`; the demo roster stands in when it is missing.
    Default(PathBuf),
    /// A path named with `--config`; it must exist.
    Explicit(PathBuf),
}

impl RosterSource {
    /// `--config` value if given, else [`DEFAULT_ROSTER_PATH`].
    pub fn from_arg(config: Option<PathBuf>) -> Self {
        match config {
            Some(path) => RosterSource::Explicit(path),
            None => RosterSource::Default(PathBuf::from(DEFAULT_ROSTER_PATH)),
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            RosterSource::Default(path) | RosterSource::Explicit(path) => path,
        }
    }

    pub fn load(&self) -> Result<RosterConfig> {
        match self {
            RosterSource::Explicit(path) if !path.exists() => {
                bail!("roster {} not found", path.display())
            }
            _ => load_roster(self.path()),
        }
    }
}

/// Load a roster from a TOML file.
///
/// If the file is missing, returns [`RosterConfig::demo`].
pub fn load_roster(path: &Path) -> Result<RosterConfig> {
    if !path.exists() {
        info!(path = %path.display(), "roster not found; using demo roster");
        return Ok(RosterConfig::demo());
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: RosterConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validate {}", path.display()))?;
    for entry in &cfg.people {
        debug!(name = %entry.name, age = entry.age, role = ?entry.role, "roster entry");
    }
    debug!(path = %path.display(), people = cfg.people.len(), "roster loaded");
    Ok(cfg)
}

/// Atomically write a roster to disk (temp file + rename).
pub fn write_roster(path: &Path, cfg: &RosterConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize roster toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = path
        .parent()
        .with_context(|| format!("roster path missing parent {}", path.display()))?;
    fs::create_dir_all(parent).with_context(|| format!("create directory {}", parent.display()))?;
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp roster {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace roster {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{entry, programmer_entry, runner_entry};

    #[test]
    fn load_missing_returns_demo() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cfg = load_roster(&temp.path().join("missing.toml")).expect("load");
        assert_eq!(cfg, RosterConfig::demo());
    }

    #[test]
    fn default_source_falls_back_to_demo() {
        let temp = tempfile::tempdir().expect("tempdir");
        let source = RosterSource::Default(temp.path().join("people.toml"));
        assert_eq!(source.load().expect("load"), RosterConfig::demo());
    }

    #[test]
    fn explicit_source_must_exist() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("team-typo.toml");
        let source = RosterSource::from_arg(Some(path.clone()));
        assert_eq!(source, RosterSource::Explicit(path));
        let err = source.load().expect_err("missing explicit roster");
        assert!(err.to_string().contains("team-typo.toml not found"), "{err}");
    }

    #[test]
    fn explicit_source_loads_existing_file() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("team.toml");
        let cfg = RosterConfig {
            people: vec![entry("ada", 36)],
        };
        write_roster(&path, &cfg).expect("write");
        let loaded = RosterSource::Explicit(path).load().expect("load");
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn missing_flag_uses_default_path() {
        assert_eq!(
            RosterSource::from_arg(None).path(),
            Path::new(DEFAULT_ROSTER_PATH)
        );
    }

    #[test]
    fn write_then_load_round_trips() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("nested").join("people.toml");
        let cfg = RosterConfig {
            people: vec![
                programmer_entry("Ada", 36, "Rust"),
                runner_entry("Eliud", 39, "Vaporfly"),
                entry("baby", -1),
            ],
        };
        write_roster(&path, &cfg).expect("write");
        let loaded = load_roster(&path).expect("load");
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn empty_file_is_empty_roster() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("people.toml");
        fs::write(&path, "").expect("write");
        let cfg = load_roster(&path).expect("load");
        assert!(cfg.people.is_empty());
    }

    #[test]
    fn parses_hand_written_toml() {
        let cfg: RosterConfig = toml::from_str(
            r#"
[[people]]
name = "Mark"
age = 29
role = "programmer"
language = "Python"

[[people]]
name = "leo3narD"
age = 77
"#,
        )
        .expect("parse");
        assert_eq!(cfg.people.len(), 2);
        assert_eq!(cfg.people[0].role, Some(RoleKind::Programmer));
        assert_eq!(cfg.people[1].role().expect("role"), None);
    }

    #[test]
    fn validate_reports_every_bad_entry() {
        let mut missing_language = entry("Mark", 29);
        missing_language.role = Some(RoleKind::Programmer);
        let mut stray_shoes = entry("Leo", 77);
        stray_shoes.shoes = Some("Nike".to_string());
        let cfg = RosterConfig {
            people: vec![missing_language, entry("ok", 1), stray_shoes],
        };

        let err = cfg.validate().expect_err("invalid roster").to_string();
        assert!(err.contains("people[0] (Mark): programmer requires language"));
        assert!(err.contains("people[2] (Leo): shoes is only valid"));
        assert!(!err.contains("people[1]"));
    }

    #[test]
    fn load_rejects_invalid_roster_with_path_context() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("people.toml");
        fs::write(&path, "[[people]]\nname = \"Joey\"\nage = 29\nrole = \"runner\"\n")
            .expect("write");
        let err = load_roster(&path).expect_err("runner without shoes");
        let rendered = format!("{:#}", err);
        assert!(rendered.contains("people.toml"));
        assert!(rendered.contains("runner requires shoes"));
    }

    #[test]
    fn build_constructs_in_order_and_counts() {
        let census = Census::new();
        let people = RosterConfig::demo().build(&census).expect("build");
        let rendered: Vec<String> = people.iter().map(ToString::to_string).collect();
        assert_eq!(
            rendered,
            vec![
                "Mark, programmer, 29 years old",
                "Joey, runner, 29 years old",
                "Leonard, 77 years old",
            ]
        );
        assert_eq!(census.population(), 3);
    }
}
