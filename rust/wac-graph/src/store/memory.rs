use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::trace;

use crate::{Ask, Bindings, Condition, GraphError, GraphStore, Node, Pattern, Triple, ntriples};

type Adjacency = BTreeMap<Node, BTreeMap<Node, BTreeSet<Node>>>;

#[derive(Debug, Default)]
struct TripleIndex {
    /// subject → predicate → objects
    spo: Adjacency,
    /// predicate → subject → objects
    pso: Adjacency,
    len: usize,
}

impl TripleIndex {
    fn insert(&mut self, triple: Triple) -> bool {
        let Triple {
            subject,
            predicate,
            object,
        } = triple;

        let added = self
            .spo
            .entry(subject.clone())
            .or_default()
            .entry(predicate.clone())
            .or_default()
            .insert(object.clone());

        if added {
            self.pso
                .entry(predicate)
                .or_default()
                .entry(subject)
                .or_default()
                .insert(object);
            self.len += 1;
        }

        added
    }

    fn remove(&mut self, triple: &Triple) -> bool {
        let removed = unlink(&mut self.spo, &triple.subject, &triple.predicate, &triple.object);
        if removed {
            unlink(&mut self.pso, &triple.predicate, &triple.subject, &triple.object);
            self.len -= 1;
        }
        removed
    }

    fn contains(&self, triple: &Triple) -> bool {
        self.spo
            .get(&triple.subject)
            .and_then(|predicates| predicates.get(&triple.predicate))
            .is_some_and(|objects| objects.contains(&triple.object))
    }

    fn triples(&self) -> impl Iterator<Item = Triple> + '_ {
        self.spo.iter().flat_map(|(subject, predicates)| {
            predicates.iter().flat_map(move |(predicate, objects)| {
                objects
                    .iter()
                    .map(move |object| Triple::new(subject, predicate, object))
            })
        })
    }

    /// Every `(subject, object)` pair connected by `predicate`, narrowed to
    /// the given endpoints when they are known
    fn edges(
        &self,
        subject: Option<&Node>,
        predicate: &Node,
        object: Option<&Node>,
    ) -> BTreeSet<(Node, Node)> {
        let mut found = BTreeSet::new();
        let mut collect = |from: &Node, objects: &BTreeSet<Node>| match object {
            Some(to) => {
                if objects.contains(to) {
                    found.insert((from.clone(), to.clone()));
                }
            }
            None => found.extend(objects.iter().map(|to| (from.clone(), to.clone()))),
        };

        match subject {
            Some(from) => {
                if let Some(objects) = self.spo.get(from).and_then(|p| p.get(predicate)) {
                    collect(from, objects);
                }
            }
            None => {
                if let Some(subjects) = self.pso.get(predicate) {
                    for (from, objects) in subjects {
                        collect(from, objects);
                    }
                }
            }
        }

        found
    }

    /// Endpoints of every walk along `steps`. Intermediate nodes are not
    /// reported.
    fn walk(
        &self,
        start: Option<&Node>,
        steps: &[Node],
        end: Option<&Node>,
    ) -> BTreeSet<(Node, Node)> {
        let Some((first, rest)) = steps.split_first() else {
            return BTreeSet::new();
        };

        let mut frontier = self.edges(start, first, if rest.is_empty() { end } else { None });
        for (index, predicate) in rest.iter().enumerate() {
            let target = if index + 1 == rest.len() { end } else { None };
            let mut next = BTreeSet::new();
            for (origin, middle) in &frontier {
                for (_, reached) in self.edges(Some(middle), predicate, target) {
                    next.insert((origin.clone(), reached));
                }
            }
            frontier = next;
        }

        frontier
    }

    fn match_pattern(&self, pattern: &Pattern, bindings: &Bindings) -> Vec<Bindings> {
        let start = bindings.resolve(&pattern.subject);
        let end = bindings.resolve(&pattern.object);

        self.walk(start, pattern.path.steps(), end)
            .into_iter()
            .filter_map(|(subject, object)| {
                bindings
                    .unify(&pattern.subject, &subject)?
                    .unify(&pattern.object, &object)
            })
            .collect()
    }

    fn solve(&self, condition: &Condition, input: Vec<Bindings>) -> Vec<Bindings> {
        match condition {
            Condition::Pattern(pattern) => input
                .iter()
                .flat_map(|bindings| self.match_pattern(pattern, bindings))
                .collect(),
            Condition::All(members) => {
                let (negated, positive): (Vec<_>, Vec<_>) = members
                    .iter()
                    .partition(|member| matches!(member, Condition::Not(_)));

                let mut solutions = input;
                for member in positive.into_iter().chain(negated) {
                    if solutions.is_empty() {
                        break;
                    }
                    solutions = self.solve(member, solutions);
                }
                solutions
            }
            Condition::Any(members) => members
                .iter()
                .flat_map(|member| self.solve(member, input.clone()))
                .collect(),
            Condition::Not(inner) => input
                .into_iter()
                .filter(|bindings| self.solve(inner, vec![bindings.clone()]).is_empty())
                .collect(),
            Condition::Values(variable, nodes) => input
                .iter()
                .flat_map(|bindings| {
                    nodes
                        .iter()
                        .filter_map(move |node| bindings.bind(variable, node))
                })
                .collect(),
        }
    }
}

fn unlink(index: &mut Adjacency, first: &Node, second: &Node, leaf: &Node) -> bool {
    let Some(middle) = index.get_mut(first) else {
        return false;
    };
    let Some(leaves) = middle.get_mut(second) else {
        return false;
    };
    let removed = leaves.remove(leaf);
    if leaves.is_empty() {
        middle.remove(second);
    }
    if middle.is_empty() {
        index.remove(first);
    }
    removed
}

/// An in-memory [GraphStore]: a set of triples indexed by subject and by
/// predicate, answering questions by evaluating their [Condition] directly.
///
/// Clones share the same underlying set. Any number of questions may be
/// answered concurrently; writes wait for in-flight questions to finish.
#[derive(Clone, Default, Debug)]
pub struct MemoryGraph {
    index: Arc<RwLock<TripleIndex>>,
}

impl MemoryGraph {
    /// An empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a triple; returns false if it was already present
    pub async fn insert(&self, triple: Triple) -> bool {
        self.index.write().await.insert(triple)
    }

    /// Add many triples, returning how many were new
    pub async fn extend<I>(&self, triples: I) -> usize
    where
        I: IntoIterator<Item = Triple>,
    {
        let mut index = self.index.write().await;
        triples
            .into_iter()
            .map(|triple| index.insert(triple))
            .filter(|added| *added)
            .count()
    }

    /// Remove a triple; returns false if it was not present
    pub async fn remove(&self, triple: &Triple) -> bool {
        self.index.write().await.remove(triple)
    }

    /// True if the exact triple is present
    pub async fn contains(&self, triple: &Triple) -> bool {
        self.index.read().await.contains(triple)
    }

    /// Number of distinct triples held
    pub async fn len(&self) -> usize {
        self.index.read().await.len
    }

    /// True when no triples are held
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// A snapshot of every triple, ordered by subject then predicate
    pub async fn triples(&self) -> Vec<Triple> {
        self.index.read().await.triples().collect()
    }

    /// Parse an N-Triples document and add its statements. Nothing is added
    /// if any line fails to parse.
    pub async fn load_ntriples(&self, document: &str) -> Result<usize, GraphError> {
        let triples = ntriples::parse(document)?;
        let added = self.extend(triples).await;
        trace!(added, "Loaded N-Triples into in-memory graph");
        Ok(added)
    }

    /// Every solution of `condition` against the current contents
    pub async fn solve(&self, condition: &Condition) -> Vec<Bindings> {
        self.index
            .read()
            .await
            .solve(condition, vec![Bindings::new()])
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl GraphStore for MemoryGraph {
    async fn ask(&self, query: &Ask) -> Result<bool, GraphError> {
        let satisfied = !self.solve(query.condition()).await.is_empty();
        trace!(satisfied, "Evaluated ask against in-memory graph");
        Ok(satisfied)
    }
}
