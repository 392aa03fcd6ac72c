use oxrdf::vocab::{rdf, xsd};
use oxrdf::{GraphName, Literal, Quad, Subject, Term};
use serde_json::{Map, Value, json};

/// Convert a buffered quad sequence to the graph-array JSON-LD form.
///
/// Output is one entry per graph in first-seen order:
/// `{"@id": label, "@graph": nodes}` where the label is `"@default"`, the
/// graph IRI, or a `_:` blank node label. The `@graph` value is a single node
/// object when the graph holds one subject, otherwise an array of node
/// objects in first-seen order.
pub fn dataset_to_jsonld(quads: &[Quad]) -> Value {
    let mut graphs: Vec<(String, Vec<(String, NodeObject)>)> = Vec::new();

    for quad in quads {
        let graph = graph_id(&quad.graph_name);
        let position = match graphs.iter().position(|(id, _)| *id == graph) {
            Some(position) => position,
            None => {
                graphs.push((graph, Vec::new()));
                graphs.len() - 1
            }
        };
        let nodes = &mut graphs[position].1;

        let subject = subject_id(&quad.subject);
        let position = match nodes.iter().position(|(id, _)| *id == subject) {
            Some(position) => position,
            None => {
                nodes.push((subject, NodeObject::default()));
                nodes.len() - 1
            }
        };
        let node = &mut nodes[position].1;

        // rdf:type quads with a node object fold into @type
        if quad.predicate.as_ref() == rdf::TYPE
            && let Some(type_id) = node_id(&quad.object)
        {
            if !node.types.contains(&type_id) {
                node.types.push(type_id);
            }
            continue;
        }

        let value = term_to_value(&quad.object);
        match node
            .properties
            .iter_mut()
            .find(|(predicate, _)| *predicate == quad.predicate.as_str())
        {
            Some((_, values)) => {
                if !values.contains(&value) {
                    values.push(value);
                }
            }
            None => node
                .properties
                .push((quad.predicate.as_str().to_owned(), vec![value])),
        }
    }

    let entries = graphs
        .into_iter()
        .map(|(graph, nodes)| {
            let nodes = nodes
                .into_iter()
                .map(|(id, node)| node.into_value(id))
                .collect();
            json!({ "@id": graph, "@graph": collapse(nodes) })
        })
        .collect();
    Value::Array(entries)
}

/// A node object under construction. Values are grouped per predicate and
/// deduplicated; the final JSON object serializes its keys in sorted order.
#[derive(Default)]
struct NodeObject {
    types: Vec<String>,
    properties: Vec<(String, Vec<Value>)>,
}

impl NodeObject {
    fn into_value(self, id: String) -> Value {
        let mut object = Map::new();
        object.insert("@id".to_owned(), Value::String(id));
        if !self.types.is_empty() {
            object.insert(
                "@type".to_owned(),
                collapse(self.types.into_iter().map(Value::String).collect()),
            );
        }
        for (predicate, values) in self.properties {
            object.insert(predicate, collapse(values));
        }
        Value::Object(object)
    }
}

/// A single value stands alone; multiple values form an array.
fn collapse(mut values: Vec<Value>) -> Value {
    if values.len() == 1 {
        values.remove(0)
    } else {
        Value::Array(values)
    }
}

fn subject_id(subject: &Subject) -> String {
    match subject {
        Subject::NamedNode(n) => n.as_str().to_owned(),
        Subject::BlankNode(b) => format!("_:{}", b.as_str()),
    }
}

fn graph_id(graph: &GraphName) -> String {
    match graph {
        GraphName::NamedNode(n) => n.as_str().to_owned(),
        GraphName::BlankNode(b) => format!("_:{}", b.as_str()),
        GraphName::DefaultGraph => "@default".to_owned(),
    }
}

/// The node identifier of a term, if it is one (`None` for literals).
fn node_id(term: &Term) -> Option<String> {
    match term {
        Term::NamedNode(n) => Some(n.as_str().to_owned()),
        Term::BlankNode(b) => Some(format!("_:{}", b.as_str())),
        Term::Literal(_) => None,
    }
}

fn term_to_value(term: &Term) -> Value {
    match term {
        Term::NamedNode(n) => json!({ "@id": n.as_str() }),
        Term::BlankNode(b) => json!({ "@id": format!("_:{}", b.as_str()) }),
        Term::Literal(literal) => literal_to_value(literal),
    }
}

/// Plain `xsd:string` literals become bare JSON strings; everything else
/// becomes a `@value` object.
fn literal_to_value(literal: &Literal) -> Value {
    if let Some(language) = literal.language() {
        json!({ "@value": literal.value(), "@language": language })
    } else if literal.datatype() == xsd::STRING {
        Value::String(literal.value().to_owned())
    } else {
        json!({ "@value": literal.value(), "@type": literal.datatype().as_str() })
    }
}
