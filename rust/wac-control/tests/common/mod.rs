#![allow(dead_code)]

use anyhow::Result;
use async_trait::async_trait;
use wac_control::{
    Agent, RuleAsserts,
    vocab::{acl, rdf},
};
use wac_graph::{Ask, Condition, GraphError, GraphStore, MemoryGraph, Node, Triple, Variable};

pub const PROV_COMPONENT: &str = "http://www.w3.org/ns/prov#component";
pub const COMPONENT: &str = "urn:acl:component";

const ACLS: &str = include_str!("../fixtures/acl.nt");

pub fn resource(name: &str) -> Node {
    Node::named(format!("http://example.com/{name}"))
}

pub fn schema(name: &str) -> Node {
    Node::named(format!("http://schema.org/{name}"))
}

pub fn agent(name: &str) -> Agent {
    Agent::new(resource(name))
}

/// A graph holding the fixture rules
pub async fn graph() -> Result<MemoryGraph> {
    let graph = MemoryGraph::new();
    graph.load_ntriples(ACLS).await?;
    Ok(graph)
}

/// Every rule must be a component of the application
pub fn required_component() -> RuleAsserts {
    RuleAsserts::new(PROV_COMPONENT, Node::named(COMPONENT))
}

/// Mark every rule in the graph as a component of the application
pub async fn insert_provenance(graph: &MemoryGraph) -> usize {
    let rule = Variable::from("rule");
    let rules = graph
        .solve(&Condition::pattern(
            &rule,
            Node::named(rdf::TYPE),
            Node::named(acl::AUTHORIZATION),
        ))
        .await;

    graph
        .extend(
            rules
                .iter()
                .filter_map(|bindings| bindings.get(&rule))
                .map(|node| Triple::new(node, Node::named(PROV_COMPONENT), Node::named(COMPONENT))),
        )
        .await
}

/// A store whose transport always fails
pub struct Unreachable;

#[async_trait]
impl GraphStore for Unreachable {
    async fn ask(&self, _query: &Ask) -> Result<bool, GraphError> {
        Err(GraphError::Transport("connection refused".into()))
    }
}
