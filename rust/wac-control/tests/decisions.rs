mod common;

use std::sync::Arc;

use anyhow::Result;
use common::{
    COMPONENT, PROV_COMPONENT, Unreachable, agent, graph, insert_provenance, required_component,
    resource, schema,
};
use wac_control::{
    AccessControl, AccessControlError, AccessMode, Agent, AgentGroupMatch, AuthorizationCheck,
    ResourceCheck, TypeCheck, vocab::acl,
};
use wac_graph::{Condition, GraphError, MeasuredGraph, Node, Triple, Variable};

fn unsatisfiable(_: &Variable) -> Condition {
    Condition::never()
}

#[test_log::test(tokio::test)]
async fn it_grants_direct_access_to_the_named_agent() -> Result<()> {
    let access = AccessControl::new(graph().await?);
    let write_penny = |who: &str| {
        ResourceCheck::resource(resource("Penny"))
            .mode(AccessMode::Write)
            .agent(agent(who))
    };

    assert!(access.check_instance(&write_penny("Leonard")).await?);
    assert!(!access.check_instance(&write_penny("Sheldon")).await?);
    Ok(())
}

#[test_log::test(tokio::test)]
async fn it_narrows_rule_grants_with_extension_predicates() -> Result<()> {
    let graph = graph().await?;
    let access = AccessControl::new(graph.clone());
    let read_caltech = || {
        ResourceCheck::resource(resource("Caltech"))
            .mode(AccessMode::Read)
            .agent(agent("Sheldon"))
    };

    assert!(access.check_instance(&read_caltech()).await?);
    assert!(
        !access
            .check_instance(&read_caltech().pattern(required_component()))
            .await?
    );

    insert_provenance(&graph).await;

    assert!(
        access
            .check_instance(&read_caltech().pattern(required_component()))
            .await?
    );
    Ok(())
}

#[test_log::test(tokio::test)]
async fn it_requires_extension_predicates_of_the_granting_rule_itself() -> Result<()> {
    let graph = graph().await?;
    graph
        .insert(Triple::new(
            Node::named("urn:acl:leonard-writes-penny"),
            Node::named(PROV_COMPONENT),
            Node::named(COMPONENT),
        ))
        .await;
    let access = AccessControl::new(graph);

    let read_caltech = ResourceCheck::resource(resource("Caltech"))
        .mode(AccessMode::Read)
        .agent(agent("Sheldon"))
        .pattern(required_component());
    let write_penny = ResourceCheck::resource(resource("Penny"))
        .mode(AccessMode::Write)
        .agent(agent("Leonard"))
        .pattern(required_component());

    assert!(!access.check_instance(&read_caltech).await?);
    assert!(access.check_instance(&write_penny).await?);
    Ok(())
}

#[test_log::test(tokio::test)]
async fn it_never_grants_anonymous_targets() -> Result<()> {
    let graph = graph().await?;
    graph
        .insert(Triple::new(
            Node::blank("x"),
            Node::named(acl::OWNER),
            resource("Howard"),
        ))
        .await;
    let access = AccessControl::new(graph);
    let read = |target: Node| {
        ResourceCheck::resource(target)
            .mode(AccessMode::Read)
            .agent(agent("Howard"))
    };

    assert!(!access.check_instance(&read(Node::blank("x"))).await?);
    assert!(access.check_instance(&read(resource("PrivateReport"))).await?);
    Ok(())
}

#[test_log::test(tokio::test)]
async fn it_lets_ownership_bypass_extension_predicates() -> Result<()> {
    let access = AccessControl::new(graph().await?);
    let read_report = |who: &str| {
        ResourceCheck::resource(resource("PrivateReport"))
            .mode(AccessMode::Read)
            .agent(agent(who))
            .pattern(unsatisfiable)
    };

    assert!(access.check_instance(&read_report("Howard")).await?);
    assert!(!access.check_instance(&read_report("Leonard")).await?);
    Ok(())
}

#[test_log::test(tokio::test)]
async fn it_denies_every_rule_grant_under_an_unsatisfiable_predicate() -> Result<()> {
    let access = AccessControl::new(graph().await?);

    let checks = [
        ResourceCheck::resource(resource("Penny"))
            .mode(AccessMode::Write)
            .agent(agent("Leonard")),
        ResourceCheck::resource(resource("PublicReport")).mode(AccessMode::Read),
        ResourceCheck::resource(resource("SheldonsSpot"))
            .mode(AccessMode::Read)
            .agent(agent("Sheldon")),
    ];

    for check in checks {
        assert!(access.check_instance(&check).await?);
        assert!(!access.check_instance(&check.pattern(unsatisfiable)).await?);
    }

    let create_comment = TypeCheck::of_type(schema("Comment"))
        .mode(AccessMode::Write)
        .agent(agent("Howard").with_type(schema("Employee")));
    assert!(access.check_type(&create_comment).await?);
    assert!(
        !access
            .check_type(&create_comment.pattern(unsatisfiable))
            .await?
    );
    Ok(())
}

#[test_log::test(tokio::test)]
async fn it_grants_classes_of_agents_access_to_classes_of_resources() -> Result<()> {
    let access = AccessControl::new(graph().await?);
    let write_comment = |howard: Agent| {
        ResourceCheck::resource(resource("Comment"))
            .mode(AccessMode::Write)
            .agent(howard)
    };

    assert!(
        access
            .check_instance(&write_comment(agent("Howard").with_type(schema("Employee"))))
            .await?
    );
    assert!(
        !access
            .check_instance(&write_comment(agent("Howard").with_type(Node::blank("b0"))))
            .await?
    );
    assert!(!access.check_instance(&write_comment(agent("Howard"))).await?);
    Ok(())
}

#[test_log::test(tokio::test)]
async fn it_ignores_anonymous_agent_types() -> Result<()> {
    let access = AccessControl::new(graph().await?);
    let check = ResourceCheck::resource(resource("Penny"))
        .mode(AccessMode::Write)
        .agent(agent("Leonard").with_type(Node::blank("b0")));

    assert!(access.check_instance(&check).await?);
    Ok(())
}

#[test_log::test(tokio::test)]
async fn it_grants_anonymous_access_through_the_universal_class() -> Result<()> {
    let graph = graph().await?;
    let access = AccessControl::new(graph.clone());
    let read_report = || ResourceCheck::resource(resource("PublicReport")).mode(AccessMode::Read);

    assert!(access.check_instance(&read_report()).await?);
    assert!(
        !access
            .check_instance(&read_report().pattern(required_component()))
            .await?
    );

    insert_provenance(&graph).await;
    assert!(
        access
            .check_instance(&read_report().pattern(required_component()))
            .await?
    );
    Ok(())
}

#[test_log::test(tokio::test)]
async fn it_grants_authenticated_agents_whatever_their_identifier() -> Result<()> {
    let access = AccessControl::new(graph().await?);
    let enter_lobby = || ResourceCheck::resource(resource("Lobby")).mode(AccessMode::Read);

    assert!(!access.check_instance(&enter_lobby()).await?);
    assert!(
        access
            .check_instance(&enter_lobby().agent(agent("Penny")))
            .await?
    );
    assert!(
        access
            .check_instance(&enter_lobby().agent(Node::blank("visitor")))
            .await?
    );
    Ok(())
}

#[test_log::test(tokio::test)]
async fn it_treats_control_as_every_mode() -> Result<()> {
    let access = AccessControl::new(graph().await?);

    for mode in [
        AccessMode::Read,
        AccessMode::Write,
        AccessMode::Append,
        AccessMode::Delete,
        AccessMode::Control,
        AccessMode::from_iri("http://example.com/modes#Publish")?,
    ] {
        let check = |who: &str| {
            ResourceCheck::resource(resource("SheldonsSpot"))
                .mode(mode.clone())
                .agent(agent(who))
        };

        assert!(access.check_instance(&check("Sheldon")).await?, "{mode}");
        assert!(!access.check_instance(&check("Leonard")).await?, "{mode}");
    }
    Ok(())
}

#[test_log::test(tokio::test)]
async fn it_grants_when_any_target_is_granted() -> Result<()> {
    let access = AccessControl::new(graph().await?);
    let write = |targets: Vec<Node>| {
        ResourceCheck::resources(targets)
            .mode(AccessMode::Write)
            .agent(agent("Leonard"))
    };

    assert!(
        access
            .check_instance(&write(vec![resource("Foobar"), resource("Penny")]))
            .await?
    );
    assert!(!access.check_instance(&write(vec![resource("Foobar")])).await?);
    assert!(!access.check_instance(&write(vec![])).await?);
    Ok(())
}

#[test_log::test(tokio::test)]
async fn it_denies_access_to_resources_that_do_not_exist() -> Result<()> {
    let access = AccessControl::new(graph().await?);
    let check = ResourceCheck::resource(resource("Foobar"))
        .mode(AccessMode::Read)
        .agent(agent("Sheldon"));

    assert!(!access.check_instance(&check).await?);
    Ok(())
}

#[test_log::test(tokio::test)]
async fn it_decides_type_checks_for_classes_of_agents() -> Result<()> {
    let graph = graph().await?;
    let access = AccessControl::new(graph.clone());
    let create_comment = || {
        TypeCheck::types([schema("Comment"), Node::blank("b1")])
            .mode(AccessMode::Write)
            .agent(
                agent("Howard")
                    .with_type(schema("Employee"))
                    .with_type(Node::blank("b0")),
            )
    };

    assert!(access.check_type(&create_comment()).await?);
    assert!(
        !access
            .check_type(&create_comment().pattern(required_component()))
            .await?
    );
    assert!(
        !access
            .check_type(
                &TypeCheck::of_type(schema("Comment"))
                    .mode(AccessMode::Write)
                    .agent(agent("Howard"))
            )
            .await?
    );

    insert_provenance(&graph).await;
    assert!(
        access
            .check_type(&create_comment().pattern(required_component()))
            .await?
    );
    Ok(())
}

#[test_log::test(tokio::test)]
async fn it_decides_type_checks_for_named_agents_and_anonymous_ones() -> Result<()> {
    let access = AccessControl::new(graph().await?);

    let write_article = TypeCheck::of_type(schema("ScholarlyArticle")).mode(AccessMode::Write);
    assert!(
        access
            .check_type(&write_article.clone().agent(agent("Howard")))
            .await?
    );
    assert!(!access.check_type(&write_article).await?);

    let read_creative_work = TypeCheck::of_type(schema("CreativeWork")).mode(AccessMode::Read);
    assert!(access.check_type(&read_creative_work).await?);
    assert!(
        !access
            .check_type(&read_creative_work.clone().mode(AccessMode::Write))
            .await?
    );
    Ok(())
}

#[test_log::test(tokio::test)]
async fn it_grants_rules_over_the_universal_type_to_every_type_check() -> Result<()> {
    let access = AccessControl::new(graph().await?);
    let read = |class: Node| {
        TypeCheck::of_type(class)
            .mode(AccessMode::Read)
            .agent(agent("Raj"))
    };

    assert!(access.check_type(&read(schema("Comment"))).await?);
    assert!(
        access
            .check_type(
                &TypeCheck::types(Vec::<Node>::new())
                    .mode(AccessMode::Read)
                    .agent(agent("Raj"))
            )
            .await?
    );
    assert!(
        !access
            .check_type(&read(schema("Comment")).mode(AccessMode::Write))
            .await?
    );
    Ok(())
}

#[test_log::test(tokio::test)]
async fn it_matches_group_members_when_asked_to() -> Result<()> {
    let graph = graph().await?;
    let read_diary = |who: &str| {
        ResourceCheck::resource(resource("HowardsDiary"))
            .mode(AccessMode::Read)
            .agent(agent(who))
    };

    let per_check = AccessControl::new(graph.clone());
    assert!(!per_check.check_instance(&read_diary("Penny")).await?);
    assert!(
        per_check
            .check_instance(&read_diary("Penny").matcher(AgentGroupMatch))
            .await?
    );

    let engine_wide = AccessControl::new(graph).matcher(AgentGroupMatch);
    assert!(engine_wide.check_instance(&read_diary("Raj")).await?);
    assert!(!engine_wide.check_instance(&read_diary("Leonard")).await?);
    assert!(
        !engine_wide
            .check_instance(
                &ResourceCheck::resource(resource("HowardsDiary")).mode(AccessMode::Read)
            )
            .await?
    );
    Ok(())
}

#[test_log::test(tokio::test)]
async fn it_unions_custom_matchers_with_the_built_in_ones() -> Result<()> {
    let access = AccessControl::new(graph().await?);
    // Anyone may act on rules granting to Leonard
    let as_leonard = |check: &AuthorizationCheck| {
        Condition::pattern(
            &check.authorization,
            Node::named("http://www.w3.org/ns/auth/acl#agent"),
            resource("Leonard"),
        )
    };
    let write_penny = ResourceCheck::resource(resource("Penny")).mode(AccessMode::Write);

    assert!(!access.check_instance(&write_penny).await?);
    assert!(access.check_instance(&write_penny.matcher(as_leonard)).await?);
    Ok(())
}

#[test_log::test(tokio::test)]
async fn it_asks_exactly_once_per_decision() -> Result<()> {
    let store = MeasuredGraph::new(graph().await?);
    let access = AccessControl::new(store.clone());

    access
        .check_instance(
            &ResourceCheck::resources([resource("Foobar"), resource("Penny")])
                .modes([AccessMode::Read, AccessMode::Write])
                .agent(agent("Leonard").with_type(schema("Employee")))
                .matcher(AgentGroupMatch),
        )
        .await?;
    assert_eq!(store.asks(), 1);

    access
        .check_type(&TypeCheck::types([schema("Comment"), schema("Report")]))
        .await?;
    assert_eq!(store.asks(), 2);
    Ok(())
}

#[test_log::test(tokio::test)]
async fn it_propagates_store_failures() -> Result<()> {
    let access = AccessControl::new(Unreachable);

    let result = access
        .check_instance(&ResourceCheck::resource(resource("Penny")).mode(AccessMode::Read))
        .await;

    assert!(matches!(
        result,
        Err(AccessControlError::Store(GraphError::Transport(_)))
    ));
    Ok(())
}

#[test_log::test(tokio::test(flavor = "multi_thread", worker_threads = 4))]
async fn it_decides_concurrently_over_a_shared_engine() -> Result<()> {
    let access = Arc::new(AccessControl::new(graph().await?));

    let decisions = (0..16).map(|index| {
        let access = access.clone();
        tokio::spawn(async move {
            let who = if index % 2 == 0 { "Leonard" } else { "Sheldon" };
            let check = ResourceCheck::resource(resource("Penny"))
                .mode(AccessMode::Write)
                .agent(agent(who));
            access
                .check_instance(&check)
                .await
                .map(|granted| (index % 2 == 0, granted))
        })
    });

    for outcome in futures_util::future::try_join_all(decisions).await? {
        let (expected, granted) = outcome?;
        assert_eq!(expected, granted);
    }
    Ok(())
}
