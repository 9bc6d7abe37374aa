use std::fmt::Write;

/// A query whose selection sets nest `depth` levels deep, each level
/// selecting `id` alongside the next `child`.
pub fn deeply_nested_query(depth: usize) -> String {
    let mut out = String::from("query Nested {\n");
    for level in 0..depth {
        let indent = "  ".repeat(level + 1);
        let _ = writeln!(out, "{indent}child {{\n{indent}  id");
    }
    let _ = writeln!(out, "{}leaf", "  ".repeat(depth + 1));
    for level in (0..depth).rev() {
        let _ = writeln!(out, "{}}}", "  ".repeat(level + 1));
    }
    out.push_str("}\n");
    out
}

/// A list literal nested `depth` levels deep, passed as an argument.
pub fn deeply_nested_list_value(depth: usize) -> String {
    format!("{{ matrix(cells: {}0{}) }}", "[".repeat(depth), "]".repeat(depth))
}

/// `count` small named operations, each with one variable.
pub fn many_operations(count: usize) -> String {
    let mut out = String::with_capacity(count * 80);
    for i in 0..count {
        let _ = writeln!(
            out,
            "query Op{i}($id: ID!) {{\n  node(id: $id) {{\n    id\n    alias{i}: name\n  }}\n}}\n",
        );
    }
    out
}
