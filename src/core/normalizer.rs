//! Staff-name normalization: raw export names → canonical grouping keys.

use crate::config::{NameCase, NormalizerConfig};
use crate::errors::AppResult;
use crate::models::Employee;
use regex::Regex;

/// Upper bound on cleaning passes; each pass only removes characters, except
/// for case mapping which may expand a letter once.
const MAX_PASSES: usize = 8;

#[derive(Debug, Clone)]
pub struct Normalizer {
    prefix: Option<Regex>,
    department: Option<Regex>,
    noise: Regex,
    whitespace: Regex,
    case: NameCase,
    excluded: Vec<String>,
}

impl Normalizer {
    pub fn new(cfg: &NormalizerConfig) -> AppResult<Self> {
        let mut prefixes: Vec<&str> = cfg
            .prefixes
            .iter()
            .map(String::as_str)
            .filter(|p| !p.is_empty())
            .collect();
        // longest first, so "arge*" wins over "*"
        prefixes.sort_by_key(|p| std::cmp::Reverse(p.chars().count()));

        let prefix = if prefixes.is_empty() {
            None
        } else {
            let alternatives: Vec<String> = prefixes.iter().map(|p| regex::escape(p)).collect();
            Some(Regex::new(&format!(
                r"(?i)^(?:\s*(?:{}))+",
                alternatives.join("|")
            ))?)
        };

        let department = match cfg.prefix_pattern.trim() {
            "" => None,
            pattern => Some(Regex::new(pattern)?),
        };

        Ok(Self {
            prefix,
            department,
            noise: Regex::new(&cfg.noise_pattern)?,
            whitespace: Regex::new(r"\s+")?,
            case: cfg.case,
            excluded: cfg
                .excluded_keywords
                .iter()
                .map(|k| k.trim().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect(),
        })
    }

    /// Canonical form of `raw`; an empty result means the name is unusable.
    pub fn normalize(&self, raw: &str) -> Option<Employee> {
        let cleaned = self.clean(raw);
        if cleaned.is_empty() {
            None
        } else {
            Some(Employee::new(cleaned))
        }
    }

    /// Apply the cleaning pass until it no longer changes the name, so the
    /// result is a fixpoint: cleaning it again is a no-op.
    pub fn clean(&self, raw: &str) -> String {
        let mut current = self.clean_once(raw);
        for _ in 0..MAX_PASSES {
            let next = self.clean_once(&current);
            if next == current {
                break;
            }
            current = next;
        }
        current
    }

    fn clean_once(&self, raw: &str) -> String {
        let trimmed = raw.trim();
        let stripped = match &self.prefix {
            Some(re) => re.replace(trimmed, ""),
            None => trimmed.into(),
        };
        let stripped = match &self.department {
            Some(re) => re.replace(&stripped, "").into_owned(),
            None => stripped.into_owned(),
        };
        let denoised = self.noise.replace_all(&stripped, "");
        let collapsed = self.whitespace.replace_all(denoised.trim(), " ");

        match self.case {
            NameCase::Preserve => collapsed.into_owned(),
            NameCase::Lower => collapsed.to_lowercase(),
            NameCase::Upper => collapsed.to_uppercase(),
        }
    }

    /// Names of summary/header rows that must not become employees.
    pub fn is_excluded(&self, employee: &Employee) -> bool {
        let name = employee.as_str().to_lowercase();
        self.excluded.iter().any(|k| name.contains(k.as_str()))
    }
}
