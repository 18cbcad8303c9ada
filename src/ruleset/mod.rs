//! RuleSet loading and indexing.

mod config;

pub use config::{LoadOptions, BEGIN_ICANN_MARKER, BEGIN_PRIVATE_MARKER, END_PRIVATE_MARKER};

use ahash::AHashMap;
use flate2::read::GzDecoder;
use std::fs;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use crate::error::{Error, Result};
use crate::rule::Rule;
use crate::{Origin, RuleKind};

/// Gzip magic bytes.
const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// RuleSet is an immutable, indexed collection of suffix rules.
///
/// Rules are grouped by their rightmost label so a lookup only compares
/// the handful of rules sharing the host's top-level label. A RuleSet is
/// never mutated after construction and can be shared across threads
/// (e.g. behind an `Arc`) without locking.
///
/// # Examples
/// ```
/// use tldurl::RuleSet;
///
/// let rules = RuleSet::parse("com\nco.uk\n*.kawasaki.jp\n!city.kawasaki.jp\n").unwrap();
/// assert_eq!(rules.len(), 4);
/// assert_eq!(rules.candidates_for_label("jp").len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    /// Rightmost label -> rules ending in it, in list order
    index: AHashMap<String, Vec<Rule>>,
    /// Total rule count
    len: usize,
    /// Rules from the PRIVATE section
    private_len: usize,
}

impl RuleSet {
    /// Parse suffix-list text with default (strict) options.
    pub fn parse(text: &str) -> Result<Self> {
        Self::parse_with_options(text, &LoadOptions::default())
    }

    /// Parse suffix-list text.
    pub fn parse_with_options(text: &str, options: &LoadOptions) -> Result<Self> {
        let mut loader = Loader::default();
        for (idx, line) in text.lines().enumerate() {
            loader.line(idx + 1, line)?;
        }
        loader.finish(options)
    }

    /// Parse suffix-list text from a reader.
    pub fn from_reader<R: Read>(reader: R, options: &LoadOptions) -> Result<Self> {
        let buf_reader = BufReader::new(reader);
        let mut loader = Loader::default();
        for (idx, line) in buf_reader.lines().enumerate() {
            loader.line(idx + 1, &line?)?;
        }
        loader.finish(options)
    }

    /// Load a suffix-list file, decompressing it first if it is gzipped.
    pub fn from_path(path: impl AsRef<Path>, options: &LoadOptions) -> Result<Self> {
        let path = path.as_ref();
        let raw_data = fs::read(path)?;

        if is_gzip(&raw_data) {
            log::debug!("Decompressing gzipped suffix list {:?}", path);
            Self::from_reader(GzDecoder::new(&raw_data[..]), options)
        } else {
            let text = String::from_utf8(raw_data)
                .map_err(|e| Error::Io(io::Error::new(io::ErrorKind::InvalidData, e)))?;
            Self::parse_with_options(&text, options)
        }
    }

    /// Start building a RuleSet programmatically.
    pub fn builder() -> RuleSetBuilder {
        RuleSetBuilder::default()
    }

    /// Rules whose rightmost label equals `label`, in list order.
    pub fn candidates_for_label(&self, label: &str) -> &[Rule] {
        self.index.get(label).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Get the number of rules in this set.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if this set has no rules.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of rules from the given section.
    pub fn count(&self, origin: Origin) -> usize {
        match origin {
            Origin::Icann => self.len - self.private_len,
            Origin::Private => self.private_len,
        }
    }

    /// Iterate over all rules (grouped by rightmost label, unordered
    /// across groups).
    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.index.values().flatten()
    }
}

/// Builder for [`RuleSet`].
///
/// Duplicate rules are ignored; the first occurrence keeps its origin.
#[derive(Debug, Default)]
pub struct RuleSetBuilder {
    index: AHashMap<String, Vec<Rule>>,
    /// Exception rules with the position they were added at
    exceptions: Vec<(usize, Rule)>,
    added: usize,
    len: usize,
    private_len: usize,
}

impl RuleSetBuilder {
    /// Add a rule. Its 1-based insertion position is used as the line
    /// number in build errors.
    pub fn add(&mut self, rule: Rule) -> &mut Self {
        self.added += 1;
        let position = self.added;
        self.insert(position, rule);
        self
    }

    /// Parse and add a single rule line.
    pub fn add_line(&mut self, text: &str, origin: Origin) -> Result<&mut Self> {
        let position = self.added + 1;
        let rule = Rule::parse(text, origin).map_err(|e| Error::malformed(position, e.to_string()))?;
        Ok(self.add(rule))
    }

    fn insert(&mut self, line: usize, rule: Rule) {
        let bucket = self
            .index
            .entry(rule.rightmost_label().to_string())
            .or_default();
        if bucket
            .iter()
            .any(|r| r.kind() == rule.kind() && r.labels() == rule.labels())
        {
            return;
        }

        self.len += 1;
        if rule.origin() == Origin::Private {
            self.private_len += 1;
        }
        if rule.kind() == RuleKind::Exception {
            self.exceptions.push((line, rule.clone()));
        }
        bucket.push(rule);
    }

    fn has_wildcard(&self, labels: &[&str]) -> bool {
        self.index
            .get(labels[0])
            .map(|bucket| {
                bucket.iter().any(|r| {
                    r.kind() == RuleKind::Wildcard
                        && r.labels().len() == labels.len()
                        && r.labels().iter().zip(labels).all(|(a, b)| a == b)
                })
            })
            .unwrap_or(false)
    }

    /// Validate exception rules and freeze the set.
    pub fn build(self, options: &LoadOptions) -> Result<RuleSet> {
        for (line, rule) in &self.exceptions {
            let covered = rule
                .covering_wildcard()
                .map(|labels| self.has_wildcard(&labels))
                .unwrap_or(false);
            if covered {
                continue;
            }
            if options.strict_exceptions {
                return Err(Error::malformed(
                    *line,
                    format!("exception rule {} has no matching wildcard rule", rule),
                ));
            }
            log::warn!(
                "Exception rule {} at line {} has no matching wildcard rule",
                rule,
                line
            );
        }

        Ok(RuleSet {
            index: self.index,
            len: self.len,
            private_len: self.private_len,
        })
    }
}

/// Line-oriented suffix-list reader tracking the current section.
#[derive(Default)]
struct Loader {
    builder: RuleSetBuilder,
    origin: Origin,
}

impl Loader {
    fn line(&mut self, line_num: usize, line: &str) -> Result<()> {
        let line = line.trim();

        if line.is_empty() {
            return Ok(());
        }

        if let Some(comment) = line.strip_prefix("//") {
            if comment.contains(BEGIN_PRIVATE_MARKER) {
                self.origin = Origin::Private;
            } else if comment.contains(END_PRIVATE_MARKER) || comment.contains(BEGIN_ICANN_MARKER)
            {
                self.origin = Origin::Icann;
            }
            return Ok(());
        }

        let rule =
            Rule::parse(line, self.origin).map_err(|e| Error::malformed(line_num, e.to_string()))?;
        self.builder.insert(line_num, rule);
        Ok(())
    }

    fn finish(self, options: &LoadOptions) -> Result<RuleSet> {
        let rules = self.builder.build(options)?;
        log::debug!(
            "Loaded {} suffix rules ({} ICANN, {} private)",
            rules.len(),
            rules.count(Origin::Icann),
            rules.count(Origin::Private)
        );
        Ok(rules)
    }
}

fn is_gzip(data: &[u8]) -> bool {
    data.len() >= 2 && data[..2] == GZIP_MAGIC
}
