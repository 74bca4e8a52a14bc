use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub name: String,
    pub ordinal: usize,
}

/// One row of the diagram. `from`/`to` are actor ordinals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub from: usize,
    pub to: usize,
    pub label: String,
    pub color: Option<String>,
}

impl Action {
    pub fn is_self(&self) -> bool {
        self.from == self.to
    }

    pub fn ordinal_span(&self) -> (usize, usize) {
        (self.from.min(self.to), self.from.max(self.to))
    }
}

/// A named bracket over the half-open action range `[start, end)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phase {
    pub name: String,
    pub color: Option<String>,
    pub start: usize,
    pub end: usize,
    /// Number of phases that were already open when this one opened.
    pub depth: usize,
}

impl Phase {
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

#[derive(Debug, Clone, Default)]
pub struct Sequence {
    actors: Vec<Actor>,
    actor_index: HashMap<String, usize>,
    pub actions: Vec<Action>,
    pub phases: Vec<Phase>,
}

impl Sequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the ordinal for `name`, appending a new actor on first sight.
    pub fn ensure_actor(&mut self, name: &str) -> usize {
        if let Some(&ordinal) = self.actor_index.get(name) {
            return ordinal;
        }
        let ordinal = self.actors.len();
        self.actors.push(Actor {
            name: name.to_string(),
            ordinal,
        });
        self.actor_index.insert(name.to_string(), ordinal);
        ordinal
    }

    pub fn actor(&self, name: &str) -> Option<&Actor> {
        self.actor_index.get(name).map(|&idx| &self.actors[idx])
    }

    pub fn actors(&self) -> &[Actor] {
        &self.actors
    }

    pub fn actor_count(&self) -> usize {
        self.actors.len()
    }

    pub fn action_count(&self) -> usize {
        self.actions.len()
    }

    /// Min and max actor ordinal touched by the actions of `phase`, if any.
    pub fn phase_span(&self, phase: &Phase) -> Option<(usize, usize)> {
        let end = phase.end.min(self.actions.len());
        let start = phase.start.min(end);
        self.actions[start..end]
            .iter()
            .map(Action::ordinal_span)
            .reduce(|(lo, hi), (a, b)| (lo.min(a), hi.max(b)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_actor_is_idempotent() {
        let mut seq = Sequence::new();
        assert_eq!(seq.ensure_actor("Alice"), 0);
        assert_eq!(seq.ensure_actor("Bob"), 1);
        assert_eq!(seq.ensure_actor("Alice"), 0);
        assert_eq!(seq.actor_count(), 2);
        assert_eq!(seq.actor("Bob").map(|a| a.ordinal), Some(1));
        assert!(seq.actor("Carol").is_none());
    }

    #[test]
    fn phase_span_counts_self_actions_once() {
        let mut seq = Sequence::new();
        for name in ["A", "B", "C", "D"] {
            seq.ensure_actor(name);
        }
        seq.actions.push(Action {
            from: 2,
            to: 2,
            label: "tick".to_string(),
            color: None,
        });
        seq.actions.push(Action {
            from: 3,
            to: 1,
            label: "back".to_string(),
            color: None,
        });
        let only_self = Phase {
            name: "p".to_string(),
            color: None,
            start: 0,
            end: 1,
            depth: 0,
        };
        assert_eq!(seq.phase_span(&only_self), Some((2, 2)));
        let both = Phase { end: 2, ..only_self.clone() };
        assert_eq!(seq.phase_span(&both), Some((1, 3)));
        let empty = Phase { start: 1, end: 1, ..only_self };
        assert!(empty.is_empty());
        assert_eq!(seq.phase_span(&empty), None);
    }
}
