//! Integration tests for the IRI resolver

use proptest::prelude::*;
use rulebridge_domain::traits::{BuiltInCall, OntologyHandle, RuleEngineBridge};
use rulebridge_domain::{Iri, Literal, LiteralComparator, ObjectRef, ResultValue, ValueKind};
use rulebridge_resolver::vocabulary::{OWL, RESERVED_PREFIXES, SWRLB};
use rulebridge_resolver::{IriResolver, ResolverConfig};
use std::io::Write;
use tempfile::NamedTempFile;

const FAMILY: &str = "http://example.org/family#";

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Ontology document stand-in
struct TestOntology {
    prefixes: Vec<(String, String)>,
}

impl TestOntology {
    fn new(prefixes: &[(&str, &str)]) -> Self {
        Self {
            prefixes: prefixes
                .iter()
                .map(|(p, n)| (p.to_string(), n.to_string()))
                .collect(),
        }
    }
}

impl OntologyHandle for TestOntology {
    fn document_prefixes(&self) -> Option<Vec<(String, String)>> {
        Some(self.prefixes.clone())
    }
}

/// Minimal bridge that evaluates `swrlb:equal` over result values
struct TestBridge {
    resolver: IriResolver,
    inferred: Vec<Iri>,
    ontology_changed: bool,
}

impl TestBridge {
    fn new(ontology: &TestOntology) -> Self {
        let mut resolver = IriResolver::with_default_namespace(FAMILY);
        resolver.update_prefixes(ontology);
        Self {
            resolver,
            inferred: Vec::new(),
            ontology_changed: false,
        }
    }
}

impl RuleEngineBridge for TestBridge {
    type Axiom = Iri;
    type Argument = ResultValue;
    type Factory = LiteralComparator;
    type Resolver = IriResolver;
    type Error = String;

    fn infer_axiom(&mut self, axiom: Iri) -> Result<(), String> {
        self.inferred.push(axiom);
        self.ontology_changed = true;
        Ok(())
    }

    fn invoke_built_in(
        &mut self,
        call: BuiltInCall<'_>,
        arguments: Vec<ResultValue>,
    ) -> Result<Vec<Vec<ResultValue>>, String> {
        let iri = self
            .resolver
            .prefixed_name_to_iri(call.built_in_name)
            .ok_or_else(|| format!("unknown built-in {}", call.built_in_name))?;
        if iri != Iri::new(SWRLB, "equal") {
            return Err(format!("unsupported built-in {}", iri));
        }

        match arguments.as_slice() {
            [a, b] if a == b => Ok(vec![arguments.clone()]),
            [_, _] => Ok(Vec::new()),
            _ => Err(format!("{} expects two arguments", call.built_in_name)),
        }
    }

    fn factory(&self) -> &LiteralComparator {
        &LiteralComparator
    }

    fn resolver(&mut self) -> &mut IriResolver {
        &mut self.resolver
    }

    fn has_ontology_changed(&self) -> bool {
        self.ontology_changed
    }
}

fn equal_call(rule_name: &str) -> BuiltInCall<'_> {
    BuiltInCall {
        rule_name,
        built_in_name: "swrlb:equal",
        built_in_index: 0,
        in_consequent: false,
    }
}

#[test]
fn test_autogenerated_prefixes_scenario() {
    init_tracing();
    let mut resolver = IriResolver::with_default_namespace("ex");

    let foo = Iri::new("http://x.org#", "Foo");
    let bar = Iri::new("http://y.org#", "Bar");

    assert_eq!(resolver.iri_to_prefixed_name(&foo), "autogen0:Foo");
    assert_eq!(resolver.prefixed_name_to_iri("autogen0:Foo"), Some(foo.clone()));
    assert_eq!(resolver.iri_to_prefixed_name(&bar), "autogen1:Bar");

    // Same namespace reuses the prefix
    let baz = Iri::new("http://x.org#", "Baz");
    assert_eq!(resolver.iri_to_prefixed_name(&baz), "autogen0:Baz");
    assert_eq!(resolver.iri_to_prefixed_name(&foo), "autogen0:Foo");
}

#[test]
fn test_document_prefixes_and_reserved_precedence() {
    init_tracing();
    let ontology = TestOntology::new(&[
        ("fam:", FAMILY),
        ("owl:", "http://not-owl.org#"),
        ("swrlb", "http://not-swrlb.org#"),
    ]);
    let mut resolver = IriResolver::new();
    resolver.update_prefixes(&ontology);

    assert_eq!(resolver.prefixes().namespace("owl:"), Some(OWL));
    assert_eq!(resolver.prefixes().namespace("swrlb:"), Some(SWRLB));
    for (prefix, namespace) in RESERVED_PREFIXES {
        assert_eq!(resolver.prefixes().namespace(prefix), Some(*namespace));
    }

    let alice = Iri::new(FAMILY, "Alice");
    assert_eq!(resolver.iri_to_prefixed_name(&alice), "fam:Alice");
    assert_eq!(resolver.prefixed_name_to_iri("fam:Alice"), Some(alice));
    assert_eq!(
        resolver.prefixed_name_to_iri("owl:Thing"),
        Some(Iri::new(OWL, "Thing"))
    );
}

#[test]
fn test_rebuild_keeps_autogenerated_names_until_reset() {
    let mut resolver = IriResolver::new();
    let foo = Iri::new("http://x.org#", "Foo");
    let name = resolver.iri_to_prefixed_name(&foo);

    resolver.update_prefixes(&TestOntology::new(&[]));
    assert_eq!(resolver.prefixed_name_to_iri(&name), Some(foo.clone()));

    resolver.reset();
    assert_eq!(resolver.prefixed_name_to_iri(&name), None);
    assert_eq!(resolver.autogen().prefix_count(), 0);
    assert_eq!(resolver.iri_to_prefixed_name(&foo), "autogen0:Foo");
}

#[test]
fn test_config_file_drives_resolver() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
default_namespace = "{FAMILY}"

[prefixes]
"rel:" = "http://example.org/relations#"
"#
    )
    .unwrap();

    let config = ResolverConfig::from_file(file.path()).unwrap();
    let mut resolver = IriResolver::from_config(config).unwrap();

    assert_eq!(resolver.default_namespace(), Some(FAMILY));
    assert_eq!(
        resolver.prefixed_name_to_iri("rel:hasParent"),
        Some(Iri::new("http://example.org/relations#", "hasParent"))
    );
    assert_eq!(
        resolver.iri_to_short_form(&Iri::new(FAMILY, "Person")),
        "Person"
    );

    resolver.update_prefixes(&TestOntology::new(&[]));
    assert!(resolver.prefixes().contains_prefix("rel:"));
}

#[test]
fn test_generated_iris_are_unique_and_resolvable() {
    let mut resolver = IriResolver::with_default_namespace(FAMILY);
    let mut seen = std::collections::HashSet::new();

    for _ in 0..100 {
        let iri = resolver.generate_iri();
        assert_eq!(iri.namespace(), FAMILY);
        let name = resolver.iri_to_prefixed_name(&iri);
        assert_eq!(resolver.prefixed_name_to_iri(&name), Some(iri.clone()));
        assert!(seen.insert(iri));
    }
}

#[test]
fn test_bridge_evaluates_built_in_with_semantic_equality() {
    init_tracing();
    let ontology = TestOntology::new(&[("fam:", FAMILY)]);
    let mut bridge = TestBridge::new(&ontology);

    let one = ResultValue::literal(Literal::integer(1), "xsd:integer");
    let padded = ResultValue::literal(
        Literal::xsd("001", "integer"),
        "xsd:integer",
    );
    let two = ResultValue::literal(Literal::integer(2), "xsd:integer");

    let bindings = bridge
        .invoke_built_in(equal_call("r1"), vec![one.clone(), padded])
        .unwrap();
    assert_eq!(bindings.len(), 1);

    let bindings = bridge
        .invoke_built_in(equal_call("r1"), vec![one.clone(), two])
        .unwrap();
    assert!(bindings.is_empty());

    assert!(bridge
        .invoke_built_in(equal_call("r1"), vec![one])
        .is_err());
}

#[test]
fn test_bridge_infers_named_objects() {
    let ontology = TestOntology::new(&[("fam:", FAMILY)]);
    let mut bridge = TestBridge::new(&ontology);
    assert!(!bridge.has_ontology_changed());

    let iri = bridge.resolver().prefixed_name_to_iri("fam:Bob").unwrap();
    let name = bridge.resolver().iri_to_prefixed_name(&iri);
    let value = ResultValue::object(
        ValueKind::NamedIndividual,
        ObjectRef::named(iri.clone(), name),
    )
    .unwrap();

    assert!(value.is_named_individual());
    assert_eq!(value.object_ref().and_then(ObjectRef::iri), Some(&iri));
    assert!(value.as_class().is_err());

    bridge.infer_axiom(iri).unwrap();
    assert!(bridge.has_ontology_changed());
    assert_eq!(bridge.inferred.len(), 1);
    assert!(bridge.factory().equals(&Literal::double(1.0), &Literal::xsd("1.0E0", "double")));
}

fn namespace_strategy() -> impl Strategy<Value = String> {
    "[a-z]{1,8}".prop_map(|host| format!("http://{}.test/ns#", host))
}

fn local_name_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9_]{0,10}"
}

proptest! {
    #[test]
    fn prop_prefixed_names_round_trip(
        namespace in namespace_strategy(),
        local in local_name_strategy(),
    ) {
        let mut resolver = IriResolver::with_default_namespace(FAMILY);
        let iri = Iri::new(namespace, local);

        let name = resolver.iri_to_prefixed_name(&iri);
        prop_assert_eq!(resolver.prefixed_name_to_iri(&name), Some(iri.clone()));
        prop_assert_eq!(resolver.iri_to_prefixed_name(&iri), name);
    }

    #[test]
    fn prop_distinct_iris_get_distinct_names(
        iris in prop::collection::vec(
            (namespace_strategy(), local_name_strategy()),
            1..20,
        ),
    ) {
        let mut resolver = IriResolver::new();
        let mut names = std::collections::HashMap::new();

        for (namespace, local) in iris {
            let iri = Iri::new(namespace, local);
            let name = resolver.iri_to_prefixed_name(&iri);
            if let Some(previous) = names.insert(name.clone(), iri.clone()) {
                prop_assert_eq!(previous, iri);
            }
        }
    }

    #[test]
    fn prop_arbitrary_splits_round_trip(
        namespace in prop_oneof![namespace_strategy(), Just(String::new()), Just("#".to_string())],
        remainder in "[A-Za-z0-9#/_.-]{0,8}",
        declare in any::<bool>(),
        default in prop_oneof![Just(None), Just(Some("ex")), Just(Some(FAMILY))],
    ) {
        let mut resolver = match default {
            Some(namespace) => IriResolver::with_default_namespace(namespace),
            None => IriResolver::new(),
        };
        if declare && !namespace.is_empty() {
            resolver.set_prefix("p:", &namespace);
        }
        let iri = Iri::new(namespace, remainder);

        let name = resolver.iri_to_prefixed_name(&iri);
        prop_assert_eq!(resolver.prefixed_name_to_iri(&name), Some(iri.clone()));
        prop_assert_eq!(resolver.iri_to_prefixed_name(&iri), name);
    }

    #[test]
    fn prop_iris_without_remainder_round_trip(host in "[a-z]{1,8}") {
        let mut resolver = IriResolver::new();
        let iri = Iri::create(&format!("http://{}.test/", host));

        let name = resolver.iri_to_prefixed_name(&iri);
        prop_assert!(name.starts_with("autogen:p"));
        prop_assert_eq!(resolver.prefixed_name_to_iri(&name), Some(iri));
    }
}
