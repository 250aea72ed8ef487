//! Automatic numbering for sections and enumerable environments.

use crate::config::EnvironmentNumbering;
use crate::error::ParseErrorKind;
use crate::resolve::counter::{CounterId, CounterTree};
use std::collections::HashMap;

/// Counter state for one document.
///
/// Section counters are created lazily per depth, each depth a child of
/// the one above it. Environment counters are created per kind on first
/// use and persist for the whole document unless the policy says otherwise.
#[derive(Debug, Clone, Default)]
pub struct Numbering {
    tree: CounterTree,
    /// `sections[d - 1]` is the counter for depth `d`.
    sections: Vec<CounterId>,
    environments: HashMap<String, CounterId>,
    section_level: usize,
    policy: EnvironmentNumbering,
}

impl Numbering {
    pub fn new(policy: EnvironmentNumbering) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Process a heading at `depth` and return its number if it is numbered.
    pub fn heading(&mut self, depth: usize, numbered: bool) -> Result<Option<String>, ParseErrorKind> {
        if depth > self.section_level + 1 {
            return Err(ParseErrorKind::SectionLevelSkip {
                depth,
                current: self.section_level,
            });
        }

        let number = if numbered {
            let counter = self.section_counter(depth);
            self.tree.increase(counter);

            if depth == 1 && self.policy != EnvironmentNumbering::Continuous {
                for &env in self.environments.values() {
                    self.tree.reset(env);
                }
            }

            let number = self.tree.display(counter).to_string();
            log::debug!("section depth {} numbered {}", depth, number);
            Some(number)
        } else {
            None
        };

        self.section_level = depth;
        Ok(number)
    }

    /// Increase the counter for an environment kind and return its number.
    pub fn environment(&mut self, kind: &str) -> String {
        let tree = &mut self.tree;
        let counter = *self
            .environments
            .entry(kind.to_string())
            .or_insert_with(|| tree.new_root());
        self.tree.increase(counter);

        let value = self.tree.value(counter);
        match (self.policy, self.sections.first()) {
            (EnvironmentNumbering::WithinSection, Some(&section))
                if self.tree.value(section) > 0 =>
            {
                format!("{}.{}", self.tree.display(section), value)
            }
            _ => value.to_string(),
        }
    }

    /// Fetch or create the counter for `depth`, creating missing ancestors.
    fn section_counter(&mut self, depth: usize) -> CounterId {
        while self.sections.len() < depth {
            let counter = match self.sections.last() {
                Some(&parent) => self.tree.spawn_child(parent),
                None => self.tree.new_root(),
            };
            self.sections.push(counter);
        }
        self.sections[depth - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number(numbering: &mut Numbering, depth: usize) -> String {
        numbering.heading(depth, true).unwrap().unwrap()
    }

    #[test]
    fn test_section_numbering() {
        let mut numbering = Numbering::default();

        assert_eq!(number(&mut numbering, 1), "1");
        assert_eq!(number(&mut numbering, 2), "1.1");
        assert_eq!(number(&mut numbering, 2), "1.2");
        assert_eq!(number(&mut numbering, 3), "1.2.1");
        assert_eq!(number(&mut numbering, 1), "2");
        assert_eq!(number(&mut numbering, 2), "2.1");
        assert_eq!(number(&mut numbering, 3), "2.1.1");
    }

    #[test]
    fn test_level_skip() {
        let mut numbering = Numbering::default();
        assert_eq!(
            numbering.heading(2, true),
            Err(ParseErrorKind::SectionLevelSkip { depth: 2, current: 0 })
        );

        number(&mut numbering, 1);
        assert!(numbering.heading(3, true).is_err());
        assert!(numbering.heading(2, true).is_ok());
    }

    #[test]
    fn test_unnumbered_heading() {
        let mut numbering = Numbering::default();
        assert_eq!(numbering.heading(1, false), Ok(None));
        assert_eq!(numbering.section_level, 1);

        // Ancestors skipped by the starred heading start at zero.
        assert_eq!(number(&mut numbering, 2), "0.1");
        assert_eq!(number(&mut numbering, 1), "1");
        assert_eq!(numbering.heading(2, false), Ok(None));
        assert_eq!(number(&mut numbering, 2), "1.1");
    }

    #[test]
    fn test_environments_count_independently() {
        let mut numbering = Numbering::default();
        assert_eq!(numbering.environment("theorem"), "1");
        assert_eq!(numbering.environment("lemma"), "1");
        assert_eq!(numbering.environment("theorem"), "2");
    }

    #[test]
    fn test_continuous_environment_numbering() {
        let mut numbering = Numbering::default();
        number(&mut numbering, 1);
        numbering.environment("theorem");
        number(&mut numbering, 1);
        assert_eq!(numbering.environment("theorem"), "2");
    }

    #[test]
    fn test_per_section_environment_numbering() {
        let mut numbering = Numbering::new(EnvironmentNumbering::PerSection);
        number(&mut numbering, 1);
        numbering.environment("theorem");
        numbering.environment("theorem");
        number(&mut numbering, 2);
        assert_eq!(numbering.environment("theorem"), "3");
        number(&mut numbering, 1);
        assert_eq!(numbering.environment("theorem"), "1");
    }

    #[test]
    fn test_within_section_environment_numbering() {
        let mut numbering = Numbering::new(EnvironmentNumbering::WithinSection);
        assert_eq!(numbering.environment("lemma"), "1");
        number(&mut numbering, 1);
        assert_eq!(numbering.environment("lemma"), "1.1");
        assert_eq!(numbering.environment("lemma"), "1.2");
        number(&mut numbering, 1);
        assert_eq!(numbering.environment("lemma"), "2.1");
    }
}
