//! Aircraft callsign synthesis.
//!
//! Templates are bucketed once per difficulty tier. A template tagged with a
//! minimum tier is usable at that tier and every harder one, so the pools
//! only ever grow from `super_easy` to `hard`.

use rand::seq::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::GeneratorError;
use crate::models::{CallsignTemplate, Difficulty};
use crate::phonetics::{digits_to_phonetic, letters_to_phonetic};

/// Registration letters. I and O are left out, they read as 1 and 0.
const REGISTRATION_LETTERS: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ";

/// A written callsign and how it is spoken.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Callsign {
    pub written: String,
    pub phonetic: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum TemplateKind {
    /// Airline telephony designator, e.g. "Lufthansa"
    Airline(String),
    /// US style N-number
    UsRegistration,
    /// Nationality prefix before the hyphen, e.g. "OE"
    Registration(String),
}

impl TemplateKind {
    fn resolve(template: &CallsignTemplate) -> Result<Self, GeneratorError> {
        let malformed = |reason: &str| GeneratorError::MalformedCallsignTemplate {
            pattern: template.format_pattern.clone(),
            reason: reason.to_string(),
        };

        if template.is_registration_based {
            if template.format_pattern.starts_with('N') {
                return Ok(TemplateKind::UsRegistration);
            }
            return match template.format_pattern.split_once('-') {
                Some((prefix, _)) if !prefix.trim().is_empty() => {
                    Ok(TemplateKind::Registration(prefix.trim().to_string()))
                }
                _ => Err(malformed("registration pattern has no nationality prefix")),
            };
        }

        template
            .airline_callsign
            .as_deref()
            .or(template.airline_code.as_deref())
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(|name| TemplateKind::Airline(name.to_string()))
            .ok_or_else(|| malformed("airline template has no callsign"))
    }
}

/// Picks a difficulty-appropriate template and fills it in.
#[derive(Debug, Clone)]
pub struct CallsignSynthesizer {
    templates: Vec<CallsignTemplate>,
    kinds: Vec<TemplateKind>,
    /// Indexes into `templates`, per tier
    pools: BTreeMap<Difficulty, Vec<usize>>,
}

impl CallsignSynthesizer {
    /// Build the per-tier pools.
    ///
    /// Fails if a template cannot be interpreted, or if some tier would have
    /// nothing to pick from even after falling back to the easy pool.
    pub fn new(templates: &[CallsignTemplate]) -> Result<Self, GeneratorError> {
        let kinds = templates
            .iter()
            .map(TemplateKind::resolve)
            .collect::<Result<Vec<_>, _>>()?;

        let mut pools: BTreeMap<Difficulty, Vec<usize>> =
            Difficulty::ALL.into_iter().map(|d| (d, Vec::new())).collect();
        for (idx, template) in templates.iter().enumerate() {
            for tier in template.difficulty.and_harder() {
                pools.entry(tier).or_default().push(idx);
            }
        }

        let synthesizer = Self {
            templates: templates.to_vec(),
            kinds,
            pools,
        };
        for tier in Difficulty::ALL {
            if synthesizer.pool(tier).is_empty() {
                return Err(GeneratorError::EmptyCallsignPool(tier));
            }
        }
        Ok(synthesizer)
    }

    /// Template indexes usable at `difficulty`, falling back to the easy pool.
    fn pool(&self, difficulty: Difficulty) -> &[usize] {
        let own = self.pools.get(&difficulty).map(Vec::as_slice).unwrap_or(&[]);
        if !own.is_empty() {
            return own;
        }
        self.pools
            .get(&Difficulty::Easy)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Templates eligible at `difficulty`.
    pub fn eligible(&self, difficulty: Difficulty) -> impl Iterator<Item = &CallsignTemplate> {
        self.pool(difficulty).iter().map(move |&idx| &self.templates[idx])
    }

    /// Generate a callsign for `difficulty`.
    ///
    /// Only `None` if the pools are empty, which [`CallsignSynthesizer::new`]
    /// rules out.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R, difficulty: Difficulty) -> Option<Callsign> {
        let idx = *self.pool(difficulty).choose(rng)?;
        Some(self.fill(rng, &self.kinds[idx]))
    }

    fn fill<R: Rng + ?Sized>(&self, rng: &mut R, kind: &TemplateKind) -> Callsign {
        match kind {
            TemplateKind::UsRegistration => {
                let letters = random_letters(rng, 3);
                let number: u32 = rng.random_range(1..=999);
                let suffix = &letters[..2];
                Callsign {
                    written: format!("N{}{}", number, suffix),
                    phonetic: format!(
                        "November {} {}",
                        digits_to_phonetic(&number.to_string(), true),
                        letters_to_phonetic(suffix)
                    ),
                }
            }
            TemplateKind::Registration(prefix) => {
                let letters = random_letters(rng, 3);
                Callsign {
                    written: format!("{}-{}", prefix, letters),
                    phonetic: format!(
                        "{} {}",
                        letters_to_phonetic(prefix),
                        letters_to_phonetic(&letters)
                    ),
                }
            }
            TemplateKind::Airline(name) => {
                let flight: u32 = rng.random_range(100..=999);
                Callsign {
                    written: format!("{} {}", name, flight),
                    phonetic: format!(
                        "{} {}",
                        name,
                        digits_to_phonetic(&flight.to_string(), true)
                    ),
                }
            }
        }
    }
}

fn random_letters<R: Rng + ?Sized>(rng: &mut R, count: usize) -> String {
    (0..count)
        .map(|_| REGISTRATION_LETTERS[rng.random_range(0..REGISTRATION_LETTERS.len())] as char)
        .collect()
}
