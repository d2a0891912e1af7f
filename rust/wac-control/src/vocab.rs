//! IRIs of the terms decisions are phrased in. These are persisted in rule
//! graphs and must not change.

/// The Web Access Control vocabulary
pub mod acl {
    /// Class of authorization rules
    pub const AUTHORIZATION: &str = "http://www.w3.org/ns/auth/acl#Authorization";
    /// Links a rule to each mode it grants
    pub const MODE: &str = "http://www.w3.org/ns/auth/acl#mode";
    /// Links a rule to a resource it governs
    pub const ACCESS_TO: &str = "http://www.w3.org/ns/auth/acl#accessTo";
    /// Links a rule to a class whose instances it governs
    pub const ACCESS_TO_CLASS: &str = "http://www.w3.org/ns/auth/acl#accessToClass";
    /// Links a rule to an agent it grants to
    pub const AGENT: &str = "http://www.w3.org/ns/auth/acl#agent";
    /// Links a rule to a class of agents it grants to
    pub const AGENT_CLASS: &str = "http://www.w3.org/ns/auth/acl#agentClass";
    /// Links a rule to a group whose members it grants to
    pub const AGENT_GROUP: &str = "http://www.w3.org/ns/auth/acl#agentGroup";
    /// Links a resource to the agent that owns it
    pub const OWNER: &str = "http://www.w3.org/ns/auth/acl#owner";

    /// Class of every agent that identified itself
    pub const AUTHENTICATED_AGENT: &str = "http://www.w3.org/ns/auth/acl#AuthenticatedAgent";

    /// Permission to read
    pub const READ: &str = "http://www.w3.org/ns/auth/acl#Read";
    /// Permission to change, including create and delete
    pub const WRITE: &str = "http://www.w3.org/ns/auth/acl#Write";
    /// Permission to add without removing
    pub const APPEND: &str = "http://www.w3.org/ns/auth/acl#Append";
    /// Permission to remove
    pub const DELETE: &str = "http://www.w3.org/ns/auth/acl#Delete";
    /// Permission to manage access; implies every other mode
    pub const CONTROL: &str = "http://www.w3.org/ns/auth/acl#Control";
}

/// RDF core terms
pub mod rdf {
    /// Class membership
    pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
}

/// RDF Schema terms
pub mod rdfs {
    /// The class of everything
    pub const RESOURCE: &str = "http://www.w3.org/2000/01/rdf-schema#Resource";
}

/// Friend-of-a-friend terms
pub mod foaf {
    /// The class of every agent, including anonymous ones
    pub const AGENT: &str = "http://xmlns.com/foaf/0.1/Agent";
}

/// vCard terms
pub mod vcard {
    /// Links a group to each of its members
    pub const HAS_MEMBER: &str = "http://www.w3.org/2006/vcard/ns#hasMember";
}
