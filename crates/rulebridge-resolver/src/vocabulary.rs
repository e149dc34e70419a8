//! Reserved vocabulary prefixes
//!
//! These bindings are re-applied after every prefix rebuild so that a
//! document cannot rebind them.

/// OWL namespace
pub const OWL: &str = "http://www.w3.org/2002/07/owl#";

/// SWRL namespace
pub const SWRL: &str = "http://www.w3.org/2003/11/swrl#";

/// SWRL built-ins namespace
pub const SWRLB: &str = "http://www.w3.org/2003/11/swrlb#";

/// SQWRL query built-ins namespace
pub const SQWRL: &str = "http://sqwrl.stanford.edu/ontologies/built-ins/3.4/sqwrl.owl#";

/// Namespace used for generated IRIs when no default namespace is set
pub const GENERATED_IRI_NAMESPACE: &str = "http://swrl.stanford.edu/autogenerated";

/// Reserved `(prefix, namespace)` bindings
pub const RESERVED_PREFIXES: &[(&str, &str)] = &[
    ("owl:", OWL),
    ("swrl:", SWRL),
    ("swrlb:", SWRLB),
    ("sqwrl:", SQWRL),
    (
        "swrlm:",
        "http://swrl.stanford.edu/ontologies/built-ins/3.4/swrlm.owl#",
    ),
    (
        "temporal:",
        "http://swrl.stanford.edu/ontologies/built-ins/3.3/temporal.owl#",
    ),
    (
        "swrlx:",
        "http://swrl.stanford.edu/ontologies/built-ins/3.3/swrlx.owl#",
    ),
    (
        "abox:",
        "http://swrl.stanford.edu/ontologies/built-ins/5.0.0/abox.owl#",
    ),
    (
        "tbox:",
        "http://swrl.stanford.edu/ontologies/built-ins/5.0.0/tbox.owl#",
    ),
    (
        "rbox:",
        "http://swrl.stanford.edu/ontologies/built-ins/5.0.0/rbox.owl#",
    ),
    ("swrla:", "http://swrl.stanford.edu/ontologies/3.3/swrla.owl#"),
];

/// Reserved namespace for `prefix`, if it is one of the reserved tokens
pub fn reserved_namespace(prefix: &str) -> Option<&'static str> {
    RESERVED_PREFIXES
        .iter()
        .find(|(p, _)| *p == prefix)
        .map(|(_, namespace)| *namespace)
}
