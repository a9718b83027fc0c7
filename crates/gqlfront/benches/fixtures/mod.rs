use std::fmt::Write;

pub const SCHEMA: &str = include_str!("schema.graphql");
pub const QUERY: &str = include_str!("query.graphql");
pub const MINIFIED_QUERY: &str = include_str!("query.min.graphql");

/// Generates a query whose selection sets nest `depth` levels deep.
pub fn deeply_nested_query(depth: usize) -> String {
    let mut out = String::with_capacity(depth * 30);
    out.push_str("query DeeplyNested {\n");
    for level in 0..depth {
        let indent = "  ".repeat(level + 1);
        let field = if level == 0 { "root" } else { "child" };
        writeln!(out, "{indent}{field} {{").unwrap();
        writeln!(out, "{indent}  id").unwrap();
    }
    writeln!(out, "{}name", "  ".repeat(depth + 1)).unwrap();
    for level in (0..depth).rev() {
        writeln!(out, "{}}}", "  ".repeat(level + 1)).unwrap();
    }
    out.push_str("}\n");
    out
}

/// Generates a document containing `count` named query operations.
pub fn many_operations(count: usize) -> String {
    let mut out = String::with_capacity(count * 80);
    for i in 0..count {
        writeln!(out, "query Operation{i}($id: ID!) {{").unwrap();
        writeln!(out, "  node(id: $id) {{ id name field{i}: description }}").unwrap();
        writeln!(out, "}}\n").unwrap();
    }
    out
}

/// Generates a schema with `count` object types, each described by a
/// block string.
pub fn many_types(count: usize) -> String {
    let mut out = String::with_capacity(count * 120);
    for i in 0..count {
        writeln!(out, "\"\"\"\n  Type number {i}.\n\"\"\"").unwrap();
        writeln!(out, "type Type{i} implements Node {{").unwrap();
        writeln!(out, "  id: ID!\n  next(first: Int = 10): [Type{i}!]!\n}}\n").unwrap();
    }
    out
}
